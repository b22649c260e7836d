//! Advisor Module
//!
//! The `CareerAdvisor` trait is the seam between the views and whatever
//! produces recommendations. `MockAdvisor` is the only implementation: it
//! waits a fixed delay and hands back the same catalog every time. Neither
//! the profile content nor the target role influences the output.

use crate::types::{strings, Profile, Recommendation, RecommendationCategory, Resume, SkillGap};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::time::Duration;
use thiserror::Error;

const OPTIMIZED_SUMMARY_SUFFIX: &str = "Experienced in modern development practices with strong problem-solving abilities and collaborative mindset.";
const OPTIMIZED_LINE_SUFFIX: &str = "(Achieved measurable results through efficient implementation)";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Advisor unavailable: {0}")]
    Unavailable(String),

    #[error("Advisor call interrupted: {0}")]
    Interrupted(String),
}

#[async_trait]
pub trait CareerAdvisor: Send + Sync {
    async fn generate_career_recommendations(
        &self,
        profile: &Profile,
    ) -> Result<Vec<Recommendation>, AdvisorError>;

    async fn optimize_resume(&self, resume: &Resume, target_role: &str)
        -> Result<Resume, AdvisorError>;

    async fn analyze_skill_gaps(
        &self,
        profile: &Profile,
        target_role: &str,
    ) -> Result<Vec<SkillGap>, AdvisorError>;
}

// ============================================================
// CONFIGURATION
// ============================================================

/// Artificial delays applied before each mock answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    pub recommendation_delay: Duration,
    pub optimize_delay: Duration,
    pub skill_gap_delay: Duration,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            recommendation_delay: Duration::from_millis(2000),
            optimize_delay: Duration::from_millis(1500),
            skill_gap_delay: Duration::from_millis(1000),
        }
    }
}

impl AdvisorConfig {
    /// No delays at all
    pub fn instant() -> Self {
        Self {
            recommendation_delay: Duration::ZERO,
            optimize_delay: Duration::ZERO,
            skill_gap_delay: Duration::ZERO,
        }
    }
}

// ============================================================
// MOCK ADVISOR
// ============================================================

#[derive(Debug, Clone, Default)]
pub struct MockAdvisor {
    config: AdvisorConfig,
}

impl MockAdvisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }
}

#[async_trait]
impl CareerAdvisor for MockAdvisor {
    async fn generate_career_recommendations(
        &self,
        profile: &Profile,
    ) -> Result<Vec<Recommendation>, AdvisorError> {
        log::debug!(
            "[advisor] Generating recommendations (profile has {} skills)",
            profile.skills.len()
        );
        tokio::time::sleep(self.config.recommendation_delay).await;

        let recommendations = RECOMMENDATION_CATALOG.clone();
        log::info!("[advisor] Returning {} recommendations", recommendations.len());
        Ok(recommendations)
    }

    async fn optimize_resume(
        &self,
        resume: &Resume,
        target_role: &str,
    ) -> Result<Resume, AdvisorError> {
        log::debug!("[advisor] Optimizing resume for {}", target_role);
        tokio::time::sleep(self.config.optimize_delay).await;

        let mut optimized = resume.clone();
        optimized.summary = format!("{} {}", resume.summary, OPTIMIZED_SUMMARY_SUFFIX);
        for entry in &mut optimized.experience {
            entry.description = entry
                .description
                .iter()
                .map(|line| format!("• {} {}", line, OPTIMIZED_LINE_SUFFIX))
                .collect();
        }

        log::info!(
            "[advisor] Optimized resume with {} experience entries",
            optimized.experience.len()
        );
        Ok(optimized)
    }

    async fn analyze_skill_gaps(
        &self,
        profile: &Profile,
        target_role: &str,
    ) -> Result<Vec<SkillGap>, AdvisorError> {
        log::debug!(
            "[advisor] Analyzing skill gaps for {} (profile has {} skills)",
            target_role,
            profile.skills.len()
        );
        tokio::time::sleep(self.config.skill_gap_delay).await;

        let gaps = SKILL_GAP_CATALOG.clone();
        log::info!("[advisor] Returning {} skill gaps", gaps.len());
        Ok(gaps)
    }
}

// ============================================================
// CATALOGS
// ============================================================

static RECOMMENDATION_CATALOG: Lazy<Vec<Recommendation>> = Lazy::new(|| {
    vec![
        Recommendation {
            id: "1".to_string(),
            title: "Full Stack Developer".to_string(),
            category: RecommendationCategory::Immediate,
            confidence_score: 92,
            description: "Build end-to-end web applications using modern frameworks and technologies.".to_string(),
            required_skills: strings(&["React", "Node.js", "JavaScript", "MongoDB", "REST APIs"]),
            salary_range: "₹8-15 LPA".to_string(),
            growth_potential: 85,
            match_reasons: strings(&[
                "Strong match with your JavaScript skills",
                "Aligns with your web development interests",
                "High demand in current market",
            ]),
        },
        Recommendation {
            id: "2".to_string(),
            title: "AI/ML Engineer".to_string(),
            category: RecommendationCategory::NearTerm,
            confidence_score: 78,
            description: "Develop and deploy machine learning models and AI solutions.".to_string(),
            required_skills: strings(&["Python", "TensorFlow", "PyTorch", "Data Science", "Statistics"]),
            salary_range: "₹12-25 LPA".to_string(),
            growth_potential: 95,
            match_reasons: strings(&[
                "Growing field with high potential",
                "Matches your analytical interests",
                "Strong career growth prospects",
            ]),
        },
        Recommendation {
            id: "3".to_string(),
            title: "Product Manager".to_string(),
            category: RecommendationCategory::LongTerm,
            confidence_score: 65,
            description: "Lead product strategy and work with cross-functional teams.".to_string(),
            required_skills: strings(&["Product Strategy", "Analytics", "Communication", "Leadership"]),
            salary_range: "₹15-35 LPA".to_string(),
            growth_potential: 90,
            match_reasons: strings(&[
                "Leadership potential identified",
                "Strategic thinking alignment",
                "High growth trajectory",
            ]),
        },
    ]
});

static SKILL_GAP_CATALOG: Lazy<Vec<SkillGap>> = Lazy::new(|| {
    vec![
        SkillGap {
            skill: "React.js".to_string(),
            importance: 90,
            current_level: 60,
            target_level: 85,
            resources: strings(&[
                "React Official Documentation",
                "Complete React Developer Course",
                "React Projects on GitHub",
            ]),
        },
        SkillGap {
            skill: "System Design".to_string(),
            importance: 80,
            current_level: 30,
            target_level: 70,
            resources: strings(&[
                "Designing Data-Intensive Applications",
                "System Design Interview Course",
                "High Scalability Blog",
            ]),
        },
        SkillGap {
            skill: "TypeScript".to_string(),
            importance: 75,
            current_level: 45,
            target_level: 80,
            resources: strings(&[
                "TypeScript Handbook",
                "TypeScript Deep Dive",
                "Practice with Real Projects",
            ]),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let config = AdvisorConfig::default();
        assert_eq!(config.recommendation_delay, Duration::from_millis(2000));
        assert_eq!(config.optimize_delay, Duration::from_millis(1500));
        assert_eq!(config.skill_gap_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_catalog_categories_cover_all() {
        let categories: Vec<_> = RECOMMENDATION_CATALOG.iter().map(|r| r.category).collect();
        assert_eq!(categories, RecommendationCategory::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_optimize_rewrites_summary_and_lines() {
        let advisor = MockAdvisor::new(AdvisorConfig::instant());
        let resume = Resume::sample();

        let optimized = advisor.optimize_resume(&resume, "Data Scientist").await.unwrap();

        assert!(optimized.summary.starts_with(&resume.summary));
        assert!(optimized.summary.ends_with("collaborative mindset."));
        assert_eq!(
            optimized.experience[0].description[0],
            "• Developed responsive web applications using React and Node.js (Achieved measurable results through efficient implementation)"
        );
        // untouched sections
        assert_eq!(optimized.personal_info, resume.personal_info);
        assert_eq!(optimized.skills, resume.skills);
        assert_eq!(optimized.projects, resume.projects);
    }
}
