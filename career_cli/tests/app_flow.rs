/// End-to-end flows through AppState: saving, fetching, failures and export
use career_cli::app::{AdvisorEvent, AdvisorRequest, AppState, Tab, PROFILE_SAVED_NOTICE};
use career_cli::worker::{run_request, AdvisorWorker};
use async_trait::async_trait;
use career_core::{
    AdvisorConfig, AdvisorError, CareerAdvisor, MockAdvisor, Profile, Recommendation, Resume,
    SkillGap,
};
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn press(app: &mut AppState, code: KeyCode) {
    app.handle_key(code, KeyModifiers::NONE);
}

fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn advisor() -> Arc<dyn CareerAdvisor> {
    Arc::new(MockAdvisor::new(AdvisorConfig::instant()))
}

/// Run every queued request and feed the results back
async fn settle(app: &mut AppState) -> usize {
    let requests = app.take_requests();
    let count = requests.len();
    for request in requests {
        let event = run_request(advisor(), request).await;
        app.apply_event(event);
    }
    count
}

fn save_profile_via_form(app: &mut AppState, role: &str) {
    press(app, KeyCode::Char('2'));
    press(app, KeyCode::Enter);
    type_text(app, role);
    press(app, KeyCode::Enter);
    press(app, KeyCode::Char('s'));
}

#[test]
fn test_save_profile_once_per_submit() {
    let mut app = AppState::new(PathBuf::from("."));
    save_profile_via_form(&mut app, "Analyst");

    assert_eq!(app.profile_revision, 1);
    let profile = app.profile.clone().unwrap();
    assert_eq!(profile.current_role, "Analyst");
    assert_eq!(profile.skills, Profile::starter().skills);
    assert_eq!(app.notice.as_ref().unwrap().message, PROFILE_SAVED_NOTICE);

    // Dismiss the notice, then save again
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.profile_revision, 2);
    assert!(app.take_requests().is_empty());
}

#[tokio::test]
async fn test_recommendations_fetch_after_save() {
    let mut app = AppState::new(PathBuf::from("."));
    save_profile_via_form(&mut app, "Engineer");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.tab, Tab::Recommendations);
    assert!(app.recommendations.loading);

    let requests = app.take_requests();
    assert_eq!(requests.len(), 1);
    match &requests[0] {
        AdvisorRequest::Recommendations { profile } => assert_eq!(profile.current_role, "Engineer"),
        other => panic!("unexpected request {:?}", other),
    }
    let event = run_request(advisor(), requests[0].clone()).await;
    app.apply_event(event);
    assert!(!app.recommendations.loading);
    assert_eq!(app.recommendations.recommendations.len(), 3);

    // Returning to the tab without a new save does not refetch
    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('3'));
    assert!(app.take_requests().is_empty());
}

#[tokio::test]
async fn test_explicit_generate_without_profile() {
    let mut app = AppState::new(PathBuf::from("."));
    press(&mut app, KeyCode::Char('3'));
    assert!(app.take_requests().is_empty());

    press(&mut app, KeyCode::Char('g'));
    assert_eq!(settle(&mut app).await, 1);
    assert_eq!(app.recommendations.recommendations.len(), 3);
}

#[tokio::test]
async fn test_skill_role_change_refetches() {
    let mut app = AppState::new(PathBuf::from("."));
    save_profile_via_form(&mut app, "Engineer");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('5'));
    assert_eq!(settle(&mut app).await, 1);
    assert_eq!(app.skills.gaps.len(), 3);

    press(&mut app, KeyCode::Right);
    let requests = app.take_requests();
    assert_eq!(requests.len(), 1);
    match &requests[0] {
        AdvisorRequest::SkillGaps { target_role, .. } => {
            assert_eq!(target_role, "Frontend Developer")
        }
        other => panic!("unexpected request {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_call_keeps_results_and_clears_loading() {
    let mut app = AppState::new(PathBuf::from("."));
    app.activate(Tab::Skills);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(settle(&mut app).await, 1);
    assert_eq!(app.skills.gaps.len(), 3);
    let before = app.skills.gaps.clone();

    press(&mut app, KeyCode::Char('g'));
    assert!(app.skills.loading);
    app.apply_event(AdvisorEvent::SkillGaps(Err(AdvisorError::Unavailable(
        "offline".to_string(),
    ))));
    assert!(!app.skills.loading);
    assert_eq!(app.skills.gaps, before);
}

/// Slow first call returning one entry, fast later calls returning the full catalog
struct StaggeredAdvisor {
    calls: AtomicUsize,
    catalog: MockAdvisor,
}

impl StaggeredAdvisor {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            catalog: MockAdvisor::new(AdvisorConfig::instant()),
        }
    }

    /// Sleeps, then reports whether this was the first call
    async fn stagger(&self) -> bool {
        let first = self.calls.fetch_add(1, Ordering::SeqCst) == 0;
        let delay = if first { 500 } else { 100 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        first
    }
}

#[async_trait]
impl CareerAdvisor for StaggeredAdvisor {
    async fn generate_career_recommendations(
        &self,
        profile: &Profile,
    ) -> Result<Vec<Recommendation>, AdvisorError> {
        let first = self.stagger().await;
        let mut recs = self.catalog.generate_career_recommendations(profile).await?;
        if first {
            recs.truncate(1);
        }
        Ok(recs)
    }

    async fn optimize_resume(&self, resume: &Resume, target_role: &str) -> Result<Resume, AdvisorError> {
        self.catalog.optimize_resume(resume, target_role).await
    }

    async fn analyze_skill_gaps(
        &self,
        profile: &Profile,
        target_role: &str,
    ) -> Result<Vec<SkillGap>, AdvisorError> {
        let first = self.stagger().await;
        let mut gaps = self.catalog.analyze_skill_gaps(profile, target_role).await?;
        if first {
            gaps.truncate(1);
        }
        Ok(gaps)
    }
}

#[tokio::test(start_paused = true)]
async fn test_last_resolved_recommendations_win() {
    let mut app = AppState::new(PathBuf::from("."));
    let (worker, mut rx) =
        AdvisorWorker::new(Arc::new(StaggeredAdvisor::new()), tokio::runtime::Handle::current());

    save_profile_via_form(&mut app, "Engineer");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('3'));
    save_profile_via_form(&mut app, "!");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('3'));

    let requests = app.take_requests();
    assert_eq!(requests.len(), 2);
    for request in requests {
        worker.dispatch(request);
    }

    // The second call resolves first with the full catalog
    app.apply_event(rx.recv().await.unwrap());
    assert!(!app.recommendations.loading);
    assert_eq!(app.recommendations.recommendations.len(), 3);

    // The slow first call resolves last and replaces it
    app.apply_event(rx.recv().await.unwrap());
    assert!(!app.recommendations.loading);
    assert_eq!(app.recommendations.recommendations.len(), 1);
    assert_eq!(app.recommendations.recommendations[0].title, "Full Stack Developer");
}

#[tokio::test(start_paused = true)]
async fn test_last_resolved_skill_gaps_win() {
    let mut app = AppState::new(PathBuf::from("."));
    let (worker, mut rx) =
        AdvisorWorker::new(Arc::new(StaggeredAdvisor::new()), tokio::runtime::Handle::current());

    save_profile_via_form(&mut app, "Engineer");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('5'));
    press(&mut app, KeyCode::Right);

    let requests = app.take_requests();
    assert_eq!(requests.len(), 2);
    for request in requests {
        worker.dispatch(request);
    }

    app.apply_event(rx.recv().await.unwrap());
    assert!(!app.skills.loading);
    assert_eq!(app.skills.gaps.len(), 3);

    app.apply_event(rx.recv().await.unwrap());
    assert!(!app.skills.loading);
    assert_eq!(app.skills.gaps.len(), 1);
}

#[tokio::test]
async fn test_optimize_then_export() {
    let dir = TempDir::new().unwrap();
    let mut app = AppState::new(dir.path().to_path_buf());

    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('o'));
    assert!(app.resume.loading);
    assert_eq!(settle(&mut app).await, 1);
    assert!(app.resume.optimized.is_some());

    press(&mut app, KeyCode::Char('e'));
    let path = dir.path().join("Himanshu_Kumar_Resume.pdf");
    assert!(path.exists(), "status: {}", app.status);
    assert!(app.status.contains("Himanshu_Kumar_Resume.pdf"));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_failure_shows_notice() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let mut app = AppState::new(missing);

    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.notice.as_ref().unwrap().title, "Export failed");
    assert_eq!(app.status, "Resume export failed");
}
