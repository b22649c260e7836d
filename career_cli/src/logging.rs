/// env_logger setup: a file while the TUI owns the terminal, stderr otherwise
use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use std::fs::OpenOptions;
use std::path::Path;

fn builder(level: &str) -> Builder {
    let mut builder = Builder::new();
    builder.parse_filters(level);
    builder
}

/// Append log records to `path`
pub fn init_file(path: &Path, level: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    builder(level)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialised")?;
    log::info!("[logging] Writing logs to {}", path.display());
    Ok(())
}

pub fn init_stderr(level: &str) {
    // A second init (tests, embedding) is harmless
    let _ = builder(level).target(Target::Stderr).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accepts_module_filters() {
        let logger = builder("warn,career_cli=debug").build();
        assert_eq!(logger.filter(), log::LevelFilter::Debug);
    }
}
