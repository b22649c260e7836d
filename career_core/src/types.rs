//! Career Advisor Types
//!
//! Plain records for the user profile, advisor recommendations, the resume
//! being built and skill-gap analyses. None of them enforce invariants;
//! every field may be empty.

use serde::{Deserialize, Serialize};

// ============================================================
// PROFILE
// ============================================================

/// The list-valued fields of a profile that are edited item by item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Skills,
    Interests,
    PreferredIndustries,
}

impl ListField {
    pub fn label(&self) -> &'static str {
        match self {
            ListField::Skills => "Skills",
            ListField::Interests => "Interests",
            ListField::PreferredIndustries => "Preferred Industries",
        }
    }
}

/// User-entered professional profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub skills: Vec<String>,
    /// Experience level key ("fresher", "junior", "mid", "senior", "lead") or empty
    pub experience: String,
    pub interests: Vec<String>,
    pub current_role: String,
    pub education: String,
    pub location: String,
    pub preferred_industries: Vec<String>,
}

impl Profile {
    /// Profile pre-filled with the form's starting lists
    pub fn starter() -> Self {
        Self {
            skills: strings(&["JavaScript", "React", "Node.js"]),
            interests: strings(&["Web Development", "AI/ML", "Product Management"]),
            preferred_industries: strings(&["Technology", "Fintech"]),
            ..Default::default()
        }
    }

    pub fn list(&self, field: ListField) -> &Vec<String> {
        match field {
            ListField::Skills => &self.skills,
            ListField::Interests => &self.interests,
            ListField::PreferredIndustries => &self.preferred_industries,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Skills => &mut self.skills,
            ListField::Interests => &mut self.interests,
            ListField::PreferredIndustries => &mut self.preferred_industries,
        }
    }

    /// Append a trimmed item. Blank input is ignored and returns false.
    pub fn add_item(&mut self, field: ListField, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.list_mut(field).push(value.to_string());
        true
    }

    pub fn remove_item(&mut self, field: ListField, index: usize) -> Option<String> {
        let items = self.list_mut(field);
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// Share of the seven profile fields that hold something, 0-100
    pub fn completion_percent(&self) -> u32 {
        let filled = [
            !self.skills.is_empty(),
            !self.interests.is_empty(),
            !self.preferred_industries.is_empty(),
            !self.current_role.trim().is_empty(),
            !self.location.trim().is_empty(),
            !self.education.trim().is_empty(),
            !self.experience.trim().is_empty(),
        ]
        .iter()
        .filter(|f| **f)
        .count();

        ((filled as f64 / 7.0) * 100.0).round() as u32
    }
}

// ============================================================
// RECOMMENDATION
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationCategory {
    Immediate,
    NearTerm,
    LongTerm,
}

impl RecommendationCategory {
    pub const ALL: [RecommendationCategory; 3] = [
        RecommendationCategory::Immediate,
        RecommendationCategory::NearTerm,
        RecommendationCategory::LongTerm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationCategory::Immediate => "immediate",
            RecommendationCategory::NearTerm => "near-term",
            RecommendationCategory::LongTerm => "long-term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecommendationCategory::Immediate => "Immediate",
            RecommendationCategory::NearTerm => "Near term",
            RecommendationCategory::LongTerm => "Long term",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// A suggested career path, built by the advisor and never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub category: RecommendationCategory,
    /// 0-100, not validated
    pub confidence_score: u32,
    pub description: String,
    pub required_skills: Vec<String>,
    pub salary_range: String,
    pub growth_potential: u32,
    pub match_reasons: Vec<String>,
}

// ============================================================
// RESUME
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: Vec<String>,
}

impl ExperienceEntry {
    /// Blank entry as appended by the builder
    pub fn blank() -> Self {
        Self {
            description: vec![String::new()],
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
}

/// Resume under construction in the builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
}

impl Resume {
    /// The builder's initial form values
    pub fn sample() -> Self {
        Self {
            personal_info: PersonalInfo {
                name: "Himanshu Kumar".to_string(),
                email: "himanshu@example.com".to_string(),
                phone: "+91 9876543210".to_string(),
                location: "Mumbai, India".to_string(),
                linkedin: Some("linkedin.com/in/himanshu".to_string()),
                portfolio: Some("himanshu.dev".to_string()),
            },
            summary: "Passionate software developer with experience in full-stack development and modern web technologies.".to_string(),
            experience: vec![ExperienceEntry {
                company: "Tech Solutions Inc.".to_string(),
                position: "Software Developer".to_string(),
                duration: "2022 - Present".to_string(),
                description: strings(&[
                    "Developed responsive web applications using React and Node.js",
                    "Collaborated with cross-functional teams to deliver high-quality software",
                    "Implemented RESTful APIs and database optimization",
                ]),
            }],
            education: vec![EducationEntry {
                institution: "Mumbai University".to_string(),
                degree: "B.Tech in Computer Science".to_string(),
                year: "2022".to_string(),
                gpa: Some("8.5/10".to_string()),
            }],
            skills: strings(&["JavaScript", "React", "Node.js", "MongoDB", "Python", "Git"]),
            projects: vec![ProjectEntry {
                name: "E-commerce Platform".to_string(),
                description: "Full-stack e-commerce application with payment integration"
                    .to_string(),
                technologies: strings(&["React", "Node.js", "MongoDB", "Stripe"]),
                link: Some("github.com/himanshu/ecommerce".to_string()),
            }],
        }
    }

    /// `email | phone | location` as shown under the name
    pub fn contact_line(&self) -> String {
        format!(
            "{} | {} | {}",
            self.personal_info.email, self.personal_info.phone, self.personal_info.location
        )
    }
}

// ============================================================
// SKILL GAP
// ============================================================

/// Current vs. target proficiency for one skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub importance: u32,
    pub current_level: u32,
    pub target_level: u32,
    pub resources: Vec<String>,
}

impl SkillGap {
    /// Points between current and target level (negative when already above target)
    pub fn gap(&self) -> i64 {
        i64::from(self.target_level) - i64::from(self.current_level)
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_remove_restores_list() {
        let mut profile = Profile::starter();
        let before = profile.skills.clone();

        assert!(profile.add_item(ListField::Skills, "  Rust "));
        assert_eq!(profile.skills.last().map(String::as_str), Some("Rust"));

        let last = profile.skills.len() - 1;
        assert_eq!(profile.remove_item(ListField::Skills, last).as_deref(), Some("Rust"));
        assert_eq!(profile.skills, before);
    }

    #[test]
    fn test_blank_item_ignored() {
        let mut profile = Profile::default();
        assert!(!profile.add_item(ListField::Interests, "   "));
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut profile = Profile::starter();
        assert!(profile.remove_item(ListField::PreferredIndustries, 9).is_none());
        assert_eq!(profile.preferred_industries.len(), 2);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut profile = Profile::default();
        profile.add_item(ListField::Skills, "Go");
        profile.add_item(ListField::Skills, "Go");
        assert_eq!(profile.skills, vec!["Go", "Go"]);
    }

    #[test]
    fn test_completion_percent() {
        assert_eq!(Profile::default().completion_percent(), 0);
        // three list fields out of seven
        assert_eq!(Profile::starter().completion_percent(), 43);

        let full = Profile {
            current_role: "Developer".to_string(),
            location: "Pune".to_string(),
            education: "B.Sc".to_string(),
            experience: "mid".to_string(),
            ..Profile::starter()
        };
        assert_eq!(full.completion_percent(), 100);
    }

    #[test]
    fn test_category_serde_and_parse() {
        let json = serde_json::to_string(&RecommendationCategory::NearTerm).unwrap();
        assert_eq!(json, "\"near-term\"");
        assert_eq!(
            RecommendationCategory::parse("Long-Term"),
            Some(RecommendationCategory::LongTerm)
        );
        assert_eq!(RecommendationCategory::parse("later"), None);
    }

    #[test]
    fn test_profile_from_partial_json() {
        let profile: Profile =
            serde_json::from_str(r#"{"skills":["Rust"],"currentRole":"SRE"}"#).unwrap();
        assert_eq!(profile.skills, vec!["Rust"]);
        assert_eq!(profile.current_role, "SRE");
        assert!(profile.interests.is_empty());
    }

    #[test]
    fn test_skill_gap_signed() {
        let gap = SkillGap {
            skill: "Go".to_string(),
            importance: 50,
            current_level: 70,
            target_level: 60,
            resources: vec![],
        };
        assert_eq!(gap.gap(), -10);
    }
}
