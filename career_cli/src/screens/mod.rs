/// Screen module exports

pub mod dashboard;
pub mod profile;
pub mod recommendations;
pub mod resume;
pub mod skills;

pub use dashboard::{DashboardScreen, DashboardState};
pub use profile::{ProfileField, ProfileFormState, ProfileScreen};
pub use recommendations::{RecommendationsScreen, RecommendationsState};
pub use resume::{ResumeField, ResumeScreen, ResumeState};
pub use skills::{SkillsScreen, SkillsState};
