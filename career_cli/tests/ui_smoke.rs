/// Render smoke tests: every tab draws its key content on a test backend
use career_cli::app::{AppState, Message, Tab};
use career_cli::ui::render_app;
use career_cli::worker::AdvisorEvent;
use career_core::{AdvisorConfig, CareerAdvisor, MockAdvisor, Profile};
use ratatui::{backend::TestBackend, Terminal};
use std::path::PathBuf;

fn draw(app: &AppState) -> String {
    let backend = TestBackend::new(140, 45);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render_app(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect::<String>()
}

fn app_on(tab: Tab) -> AppState {
    let mut app = AppState::new(PathBuf::from("."));
    app.activate(tab);
    app
}

#[test]
fn test_dashboard_renders() {
    let content = draw(&app_on(Tab::Dashboard));
    assert!(content.contains("AI Career Advisor"));
    assert!(content.contains("Profile Completion"));
    assert!(content.contains("Quick Actions"));
    assert!(content.contains("Get Career Advice"));
    assert!(content.contains("Recent Activity"));
}

#[test]
fn test_profile_form_renders_starter_lists() {
    let content = draw(&app_on(Tab::Profile));
    assert!(content.contains("Your Profile"));
    assert!(content.contains("[JavaScript]"));
    assert!(content.contains("[Fintech]"));
    assert!(content.contains("Save Profile"));
}

#[test]
fn test_recommendations_empty_state() {
    let content = draw(&app_on(Tab::Recommendations));
    assert!(content.contains("No recommendations yet"));
    assert!(content.contains("Generate New Recommendations"));
}

#[tokio::test]
async fn test_recommendations_render_cards() {
    let mut app = app_on(Tab::Recommendations);
    let advisor = MockAdvisor::new(AdvisorConfig::instant());
    let recs = advisor
        .generate_career_recommendations(&Profile::default())
        .await
        .unwrap();
    app.apply_event(AdvisorEvent::Recommendations(Ok(recs)));

    let content = draw(&app);
    assert!(content.contains("Full Stack Developer"));
    assert!(content.contains("92% Match"));
    assert!(content.contains("Why this matches you"));
}

#[test]
fn test_loading_state_shown() {
    let mut app = AppState::new(PathBuf::from("."));
    app.dispatch(Message::SaveProfile(Profile::starter()));
    app.notice = None;
    app.activate(Tab::Skills);
    let content = draw(&app);
    assert!(content.contains("AI is analyzing your skill gaps..."));
    assert!(content.contains("AI working"));
}

#[tokio::test]
async fn test_skills_render_summary() {
    let mut app = app_on(Tab::Skills);
    let advisor = MockAdvisor::new(AdvisorConfig::instant());
    let gaps = advisor
        .analyze_skill_gaps(&Profile::default(), "Full Stack Developer")
        .await
        .unwrap();
    app.apply_event(AdvisorEvent::SkillGaps(Ok(gaps)));

    let content = draw(&app);
    assert!(content.contains("React.js"));
    assert!(content.contains("Current Level"));
    assert!(content.contains("Overall Progress Summary"));
    assert!(content.contains("Skills to Improve"));
}

#[test]
fn test_resume_builder_renders_preview() {
    let content = draw(&app_on(Tab::Resume));
    assert!(content.contains("Resume Information"));
    assert!(content.contains("PROFESSIONAL SUMMARY"));
    assert!(content.contains("Himanshu Kumar"));
    assert!(content.contains("Optimize with AI"));
}

#[test]
fn test_notice_and_help_overlays() {
    let mut app = AppState::new(PathBuf::from("."));
    app.dispatch(Message::SaveProfile(Profile::starter()));
    let content = draw(&app);
    assert!(content.contains("Profile saved successfully!"));

    app.notice = None;
    app.show_help = true;
    let content = draw(&app);
    assert!(content.contains("Help - Keybindings"));
}

#[test]
fn test_high_contrast_renders() {
    let mut app = app_on(Tab::Skills);
    app.high_contrast = true;
    let content = draw(&app);
    assert!(content.contains("Target Role"));
}
