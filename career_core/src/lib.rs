//! Career Advisor Core
//!
//! Data model, mock advisor and resume export for the Career Advisor:
//! - Profile / Recommendation / Resume / SkillGap records
//! - Mock advisor returning fixed catalogs after an artificial delay
//! - Insight helpers (category filtering, score bands, skill summary)
//! - Client-side resume PDF export

pub mod advisor;
pub mod font_metrics;
pub mod insights;
pub mod resume_export;
pub mod types;

pub use advisor::{AdvisorConfig, AdvisorError, CareerAdvisor, MockAdvisor};
pub use types::*;

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
