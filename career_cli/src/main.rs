use anyhow::{Context, Result};
/// Career Advisor - terminal client
///
/// Provides the interactive TUI plus non-interactive recommend, skills and
/// export-resume commands.
use career_cli::{config::AppConfig, logging, ui};
use career_core::insights::{
    filter_by_category, preview, CategoryFilter, SkillSummary, DEFAULT_TARGET_ROLE,
};
use career_core::resume_export::export_resume;
use career_core::{CareerAdvisor, MockAdvisor, Profile, Resume};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "career-advisor")]
#[command(about = "AI Career Advisor - recommendations, skill gaps and resumes", long_about = None)]
struct Cli {
    /// Skip the simulated advisor latency
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    Tui {
        /// Directory for exported resume PDFs
        #[arg(long)]
        export_dir: Option<PathBuf>,
        /// Log file written while the TUI is running
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Print career recommendations for a profile
    Recommend {
        /// Profile JSON file; the starter profile is used when omitted
        #[arg(short, long)]
        profile: Option<PathBuf>,
        /// all, immediate, near-term or long-term
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Print a skill gap analysis for a target role
    Skills {
        /// Profile JSON file; the starter profile is used when omitted
        #[arg(short, long)]
        profile: Option<PathBuf>,
        #[arg(short, long, default_value = DEFAULT_TARGET_ROLE)]
        role: String,
    },
    /// Render a resume to PDF
    ExportResume {
        /// Resume JSON file; the sample resume is used when omitted
        #[arg(short, long)]
        resume: Option<PathBuf>,
        /// Optimize the resume before exporting
        #[arg(long)]
        optimize: bool,
        /// Output directory (defaults to CAREER_EXPORT_DIR or .)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env()
        .context("failed to read CAREER_* settings")?
        .with_instant(cli.instant);

    match cli.command.unwrap_or(Commands::Tui {
        export_dir: None,
        log_file: None,
    }) {
        Commands::Tui {
            export_dir,
            log_file,
        } => {
            let config = config.with_export_dir(export_dir).with_log_file(log_file);
            logging::init_file(&config.log_file, &config.log_level)?;
            ui::run_tui(&config)?;
        }
        Commands::Recommend { profile, category } => {
            logging::init_stderr(&config.log_level);
            run_recommend_cli(&config, profile.as_deref(), &category)?;
        }
        Commands::Skills { profile, role } => {
            logging::init_stderr(&config.log_level);
            run_skills_cli(&config, profile.as_deref(), &role)?;
        }
        Commands::ExportResume {
            resume,
            optimize,
            out_dir,
        } => {
            logging::init_stderr(&config.log_level);
            let config = config.with_export_dir(out_dir);
            run_export_cli(&config, resume.as_deref(), optimize)?;
        }
    }

    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn load_profile(path: Option<&Path>) -> Result<Profile> {
    match path {
        Some(path) => load_json(path),
        None => Ok(Profile::starter()),
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start advisor runtime")
}

fn run_recommend_cli(config: &AppConfig, profile: Option<&Path>, category: &str) -> Result<()> {
    let filter = CategoryFilter::parse(category)
        .ok_or_else(|| anyhow::anyhow!("Unknown category {}", category))?;
    let profile = load_profile(profile)?;
    let advisor = MockAdvisor::new(config.advisor.clone());

    println!("Generating career recommendations...");
    let recommendations =
        runtime()?.block_on(advisor.generate_career_recommendations(&profile))?;

    let shown = filter_by_category(&recommendations, filter);
    println!("{} recommendation(s) [{}]", shown.len(), filter.label());

    for rec in shown {
        println!("\n  {} [{}] {}% match", rec.title, rec.category.label(), rec.confidence_score);
        println!("  {}", rec.description);
        println!(
            "  Salary: {}  Growth: {}%",
            rec.salary_range, rec.growth_potential
        );
        let (skills, hidden) = preview(&rec.required_skills, 4);
        let mut skills_line = skills.join(", ");
        if hidden > 0 {
            skills_line.push_str(&format!(" +{} more", hidden));
        }
        println!("  Skills: {}", skills_line);
        for reason in preview(&rec.match_reasons, 2).0 {
            println!("  - {}", reason);
        }
    }
    Ok(())
}

fn run_skills_cli(config: &AppConfig, profile: Option<&Path>, role: &str) -> Result<()> {
    let profile = load_profile(profile)?;
    let advisor = MockAdvisor::new(config.advisor.clone());

    println!("Analyzing skills for {}...", role);
    let gaps = runtime()?.block_on(advisor.analyze_skill_gaps(&profile, role))?;

    for gap in &gaps {
        println!(
            "\n  {} ({}% important for {})",
            gap.skill, gap.importance, role
        );
        println!(
            "  Current {}% -> Target {}% ({} points to improve)",
            gap.current_level,
            gap.target_level,
            gap.gap()
        );
        for resource in &gap.resources {
            println!("  - {}", resource);
        }
    }

    if let Some(summary) = SkillSummary::from_gaps(&gaps) {
        println!(
            "\nAverage current {}%, average target {}%, {} skill(s) to improve",
            summary.average_current, summary.average_target, summary.skills
        );
    }
    Ok(())
}

fn run_export_cli(config: &AppConfig, resume: Option<&Path>, optimize: bool) -> Result<()> {
    let mut resume: Resume = match resume {
        Some(path) => load_json(path)?,
        None => Resume::sample(),
    };

    if optimize {
        let advisor = MockAdvisor::new(config.advisor.clone());
        println!("Optimizing resume for {}...", DEFAULT_TARGET_ROLE);
        resume = runtime()?.block_on(advisor.optimize_resume(&resume, DEFAULT_TARGET_ROLE))?;
    }

    fs::create_dir_all(&config.export_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.export_dir.display()
        )
    })?;
    let path = export_resume(&resume, &config.export_dir)?;
    println!("Resume written to {}", path.display());
    Ok(())
}
