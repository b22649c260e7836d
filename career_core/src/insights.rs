//! Insight helpers shared by the views and the non-interactive commands.
//!
//! Everything here is derived from advisor output on the client side:
//! category filtering, colour bands and the skill summary.

use crate::types::{Recommendation, RecommendationCategory, SkillGap};

pub const DEFAULT_TARGET_ROLE: &str = "Full Stack Developer";

pub const TARGET_ROLES: [&str; 8] = [
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
    "AI/ML Engineer",
    "Data Scientist",
    "Product Manager",
    "DevOps Engineer",
    "Mobile Developer",
];

/// (key, label) pairs offered by the profile form
pub const EXPERIENCE_LEVELS: [(&str, &str); 5] = [
    ("fresher", "Fresher (0-1 years)"),
    ("junior", "Junior (1-3 years)"),
    ("mid", "Mid-level (3-5 years)"),
    ("senior", "Senior (5-8 years)"),
    ("lead", "Lead (8+ years)"),
];

pub fn experience_label(key: &str) -> Option<&'static str> {
    EXPERIENCE_LEVELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
}

// ============================================================
// CATEGORY FILTER
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(RecommendationCategory),
}

impl CategoryFilter {
    pub const CYCLE: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(RecommendationCategory::Immediate),
        CategoryFilter::Only(RecommendationCategory::NearTerm),
        CategoryFilter::Only(RecommendationCategory::LongTerm),
    ];

    pub fn next(self) -> Self {
        let idx = self.position();
        Self::CYCLE[(idx + 1) % Self::CYCLE.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.position();
        Self::CYCLE[(idx + Self::CYCLE.len() - 1) % Self::CYCLE.len()]
    }

    pub fn position(&self) -> usize {
        Self::CYCLE.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, recommendation: &Recommendation) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => recommendation.category == *category,
        }
    }

    /// "all" or a category key
    pub fn parse(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        RecommendationCategory::parse(value).map(CategoryFilter::Only)
    }
}

/// Entries matching the filter, in their original order
pub fn filter_by_category(
    recommendations: &[Recommendation],
    filter: CategoryFilter,
) -> Vec<&Recommendation> {
    recommendations.iter().filter(|r| filter.matches(r)).collect()
}

// ============================================================
// BANDS
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

pub fn confidence_band(score: u32) -> ConfidenceBand {
    if score >= 80 {
        ConfidenceBand::High
    } else if score >= 60 {
        ConfidenceBand::Medium
    } else {
        ConfidenceBand::Low
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBand {
    Strong,
    Moderate,
    Developing,
    Weak,
}

pub fn level_band(level: u32) -> LevelBand {
    match level {
        80.. => LevelBand::Strong,
        60..=79 => LevelBand::Moderate,
        40..=59 => LevelBand::Developing,
        _ => LevelBand::Weak,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportanceBand {
    Critical,
    High,
    Moderate,
}

pub fn importance_band(importance: u32) -> ImportanceBand {
    match importance {
        80.. => ImportanceBand::Critical,
        60..=79 => ImportanceBand::High,
        _ => ImportanceBand::Moderate,
    }
}

// ============================================================
// SKILL SUMMARY
// ============================================================

/// Overall progress across an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillSummary {
    pub average_current: u32,
    pub average_target: u32,
    pub skills: usize,
}

impl SkillSummary {
    pub fn from_gaps(gaps: &[SkillGap]) -> Option<Self> {
        if gaps.is_empty() {
            return None;
        }
        let n = gaps.len() as f64;
        let current: u64 = gaps.iter().map(|g| u64::from(g.current_level)).sum();
        let target: u64 = gaps.iter().map(|g| u64::from(g.target_level)).sum();

        Some(Self {
            average_current: (current as f64 / n).round() as u32,
            average_target: (target as f64 / n).round() as u32,
            skills: gaps.len(),
        })
    }
}

/// First `max` entries plus how many were left out
pub fn preview<T>(items: &[T], max: usize) -> (&[T], usize) {
    let shown = items.len().min(max);
    (&items[..shown], items.len() - shown)
}
