/// Contract tests for the mock advisor: fixed output, input indifference and delays

use career_core::insights::TARGET_ROLES;
use career_core::{
    AdvisorConfig, CareerAdvisor, MockAdvisor, Profile, RecommendationCategory, Resume,
};
use std::sync::Arc;
use std::time::Duration;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sparse_profile() -> Profile {
    Profile::default()
}

fn rich_profile() -> Profile {
    Profile {
        skills: vec!["Rust".to_string(), "Kubernetes".to_string()],
        experience: "senior".to_string(),
        interests: vec!["Distributed Systems".to_string()],
        current_role: "Platform Engineer".to_string(),
        education: "M.Sc Computer Science".to_string(),
        location: "Berlin".to_string(),
        preferred_industries: vec!["Cloud".to_string()],
    }
}

#[tokio::test]
async fn test_recommendations_ignore_profile() {
    init_logging();
    let advisor = MockAdvisor::new(AdvisorConfig::instant());

    let a = advisor
        .generate_career_recommendations(&sparse_profile())
        .await
        .unwrap();
    let b = advisor
        .generate_career_recommendations(&rich_profile())
        .await
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(a.len(), 3);
    assert_eq!(a[0].title, "Full Stack Developer");
    assert_eq!(a[0].category, RecommendationCategory::Immediate);
    assert_eq!(a[0].confidence_score, 92);
    assert_eq!(a[1].title, "AI/ML Engineer");
    assert_eq!(a[2].title, "Product Manager");
    assert_eq!(a[2].salary_range, "₹15-35 LPA");
}

#[tokio::test]
async fn test_skill_gaps_ignore_profile_and_role() {
    init_logging();
    let advisor = MockAdvisor::new(AdvisorConfig::instant());
    let baseline = advisor
        .analyze_skill_gaps(&sparse_profile(), TARGET_ROLES[0])
        .await
        .unwrap();

    for role in TARGET_ROLES {
        let gaps = advisor
            .analyze_skill_gaps(&rich_profile(), role)
            .await
            .unwrap();
        assert_eq!(gaps, baseline, "role {} changed the analysis", role);
    }

    let skills: Vec<&str> = baseline.iter().map(|g| g.skill.as_str()).collect();
    assert_eq!(skills, vec!["React.js", "System Design", "TypeScript"]);
    assert_eq!(baseline[1].gap(), 40);
}

#[tokio::test]
async fn test_optimize_ignores_target_role() {
    let advisor = MockAdvisor::new(AdvisorConfig::instant());
    let resume = Resume::sample();

    let a = advisor.optimize_resume(&resume, "Product Manager").await.unwrap();
    let b = advisor.optimize_resume(&resume, "Mobile Developer").await.unwrap();
    assert_eq!(a, b);
    assert_ne!(a, resume);
}

#[tokio::test(start_paused = true)]
async fn test_recommendations_wait_for_delay() {
    let advisor = Arc::new(MockAdvisor::default());
    let task = {
        let advisor = Arc::clone(&advisor);
        tokio::spawn(async move {
            advisor
                .generate_career_recommendations(&Profile::starter())
                .await
        })
    };

    tokio::time::sleep(Duration::from_millis(1990)).await;
    assert!(!task.is_finished());

    tokio::time::sleep(Duration::from_millis(20)).await;
    let recommendations = task.await.unwrap().unwrap();
    assert_eq!(recommendations.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_delays_accumulate_per_call() {
    let advisor = MockAdvisor::default();
    let start = tokio::time::Instant::now();

    advisor
        .analyze_skill_gaps(&Profile::starter(), "Data Scientist")
        .await
        .unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(1000) && elapsed < Duration::from_millis(1100));

    advisor
        .optimize_resume(&Resume::sample(), "Data Scientist")
        .await
        .unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(2500) && elapsed < Duration::from_millis(2600));
}

#[tokio::test]
async fn test_advisor_usable_as_trait_object() {
    let advisor: Arc<dyn CareerAdvisor> = Arc::new(MockAdvisor::new(AdvisorConfig::instant()));
    let gaps = advisor
        .analyze_skill_gaps(&Profile::default(), "")
        .await
        .unwrap();
    assert_eq!(gaps.len(), 3);
}
