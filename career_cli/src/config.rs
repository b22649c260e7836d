//! Runtime settings read from the environment, overridable by CLI flags
//!
//! `CAREER_`-prefixed variables fill the app settings and `RUST_LOG` sets the
//! log filter:
//!
//! - `CAREER_EXPORT_DIR=out` -> `export_dir = out`
//! - `CAREER_LOG_FILE=advisor.log` -> `log_file = advisor.log`
//! - `CAREER_ADVISOR_INSTANT=true` -> zero advisor delays
use career_core::AdvisorConfig;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "CAREER";
pub const EXPORT_DIR_VAR: &str = "CAREER_EXPORT_DIR";
pub const LOG_FILE_VAR: &str = "CAREER_LOG_FILE";
pub const LOG_LEVEL_VAR: &str = "RUST_LOG";
pub const INSTANT_VAR: &str = "CAREER_ADVISOR_INSTANT";

pub const DEFAULT_LOG_FILE: &str = "career-advisor.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Keys under the `CAREER_` prefix
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CareerEnv {
    export_dir: Option<PathBuf>,
    log_file: Option<PathBuf>,
    advisor_instant: bool,
}

/// Keys under the `RUST_` prefix; only the log filter is used
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RustEnv {
    log: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where exported resumes are written
    pub export_dir: PathBuf,
    /// Log destination while the TUI owns the terminal
    pub log_file: PathBuf,
    pub log_level: String,
    pub advisor: AdvisorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            advisor: AdvisorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value cannot be parsed, e.g. a
    /// non-boolean `CAREER_ADVISOR_INSTANT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Load from an explicit variable map instead of the process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::load(Some(vars))
    }

    fn load(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let career: CareerEnv = Config::builder()
            .add_source(
                Environment::default()
                    .prefix(ENV_PREFIX)
                    .ignore_empty(true)
                    .source(vars.clone()),
            )
            .build()?
            .try_deserialize()?;

        let rust: RustEnv = Config::builder()
            .add_source(
                Environment::default()
                    .prefix("RUST")
                    .ignore_empty(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;

        let defaults = Self::default();
        let config = Self {
            export_dir: career.export_dir.unwrap_or(defaults.export_dir),
            log_file: career.log_file.unwrap_or(defaults.log_file),
            log_level: rust.log.unwrap_or(defaults.log_level),
            advisor: defaults.advisor,
        };
        Ok(config.with_instant(career.advisor_instant))
    }

    pub fn with_instant(mut self, instant: bool) -> Self {
        if instant {
            self.advisor = AdvisorConfig::instant();
        }
        self
    }

    pub fn with_export_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.export_dir = dir;
        }
        self
    }

    pub fn with_log_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.log_file = file;
        }
        self
    }
}
