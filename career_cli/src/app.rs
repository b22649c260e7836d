/// Root application state: active tab, saved profile and message routing
///
/// Views never talk to each other. They hand `Message`s back to `AppState`,
/// which owns the saved profile, queues advisor requests in an outbox and
/// routes advisor results to the view that asked for them.
use crate::keymap::KeyMap;
use crate::screens::{
    DashboardState, ProfileFormState, RecommendationsState, ResumeState, SkillsState,
};
pub use crate::worker::{AdvisorEvent, AdvisorRequest};
use career_core::resume_export::export_resume;
use career_core::{Profile, Resume};
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::PathBuf;

pub const PROFILE_SAVED_NOTICE: &str = "Profile saved successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Profile,
    Recommendations,
    Resume,
    Skills,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Profile,
        Tab::Recommendations,
        Tab::Resume,
        Tab::Skills,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Profile => "Profile",
            Tab::Recommendations => "Career Advice",
            Tab::Resume => "Resume Builder",
            Tab::Skills => "Skill Analysis",
        }
    }

    pub fn index(&self) -> usize {
        Tab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate(Tab),
    SaveProfile(Profile),
    Request(AdvisorRequest),
    ExportResume(Resume),
    Status(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

pub struct AppState {
    pub tab: Tab,
    pub profile: Option<Profile>,
    /// Bumped on every save so views can tell a new profile from an old one
    pub profile_revision: u64,
    pub dashboard: DashboardState,
    pub profile_form: ProfileFormState,
    pub recommendations: RecommendationsState,
    pub resume: ResumeState,
    pub skills: SkillsState,
    pub show_help: bool,
    pub notice: Option<Notice>,
    pub status: String,
    pub high_contrast: bool,
    pub should_quit: bool,
    export_dir: PathBuf,
    outbox: Vec<AdvisorRequest>,
}

impl AppState {
    pub fn new(export_dir: PathBuf) -> Self {
        Self {
            tab: Tab::Dashboard,
            profile: None,
            profile_revision: 0,
            dashboard: DashboardState::default(),
            profile_form: ProfileFormState::default(),
            recommendations: RecommendationsState::default(),
            resume: ResumeState::default(),
            skills: SkillsState::default(),
            show_help: false,
            notice: None,
            status: "Ready".to_string(),
            high_contrast: false,
            should_quit: false,
            export_dir,
            outbox: Vec::new(),
        }
    }

    pub fn export_dir(&self) -> &PathBuf {
        &self.export_dir
    }

    /// True while the active view captures raw keystrokes
    pub fn is_editing(&self) -> bool {
        match self.tab {
            Tab::Profile => self.profile_form.is_editing(),
            Tab::Resume => self.resume.is_editing(),
            _ => false,
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if KeyMap::is_interrupt(code, modifiers) {
            self.should_quit = true;
            return;
        }

        // Overlays swallow the key that closes them
        if self.notice.is_some() {
            self.notice = None;
            return;
        }
        if self.show_help {
            self.show_help = false;
            return;
        }

        if self.is_editing() {
            self.route_to_view(code);
            return;
        }

        if KeyMap::is_quit(code, modifiers) {
            self.should_quit = true;
        } else if KeyMap::is_help(code) {
            self.show_help = true;
        } else if KeyMap::is_toggle_theme(code) {
            self.high_contrast = !self.high_contrast;
        } else if KeyMap::is_next_tab(code) {
            self.activate(self.tab.next());
        } else if KeyMap::is_prev_tab(code) {
            self.activate(self.tab.prev());
        } else if let Some(idx) = KeyMap::tab_index(code) {
            self.activate(Tab::ALL[idx]);
        } else {
            self.route_to_view(code);
        }
    }

    fn route_to_view(&mut self, code: KeyCode) {
        let profile = self.profile.as_ref();
        let revision = self.profile_revision;
        let message = match self.tab {
            Tab::Dashboard => self.dashboard.handle_key(code),
            Tab::Profile => self.profile_form.handle_key(code),
            Tab::Recommendations => self.recommendations.handle_key(code, profile, revision),
            Tab::Resume => self.resume.handle_key(code),
            Tab::Skills => self.skills.handle_key(code, profile, revision),
        };
        if let Some(message) = message {
            self.dispatch(message);
        }
    }

    pub fn dispatch(&mut self, message: Message) {
        match message {
            Message::Navigate(tab) => self.activate(tab),
            Message::SaveProfile(profile) => self.save_profile(profile),
            Message::Request(request) => {
                log::debug!("[app] Queued {} request", request.kind());
                self.outbox.push(request);
            }
            Message::ExportResume(resume) => self.export(&resume),
            Message::Status(status) => self.status = status,
        }
    }

    /// Switch tabs and give the newly shown view a chance to fetch
    pub fn activate(&mut self, tab: Tab) {
        if tab != self.tab {
            log::debug!("[app] Switching to {}", tab.title());
        }
        self.tab = tab;
        let profile = self.profile.as_ref();
        let revision = self.profile_revision;
        let message = match tab {
            Tab::Recommendations => self.recommendations.activate(profile, revision),
            Tab::Skills => self.skills.activate(profile, revision),
            _ => None,
        };
        if let Some(message) = message {
            self.dispatch(message);
        }
    }

    fn save_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
        self.profile_revision += 1;
        log::info!("[app] Profile saved (revision {})", self.profile_revision);
        self.notice = Some(Notice::new("Profile", PROFILE_SAVED_NOTICE));
        self.status = PROFILE_SAVED_NOTICE.to_string();
    }

    fn export(&mut self, resume: &Resume) {
        match export_resume(resume, &self.export_dir) {
            Ok(path) => {
                log::info!("[app] Exported resume to {}", path.display());
                self.status = format!("Saved resume to {}", path.display());
            }
            Err(e) => {
                log::error!("[app] Resume export failed: {}", e);
                self.notice = Some(Notice::new("Export failed", e.to_string()));
                self.status = "Resume export failed".to_string();
            }
        }
    }

    /// Drain queued advisor requests in the order they were issued
    pub fn take_requests(&mut self) -> Vec<AdvisorRequest> {
        std::mem::take(&mut self.outbox)
    }

    /// Hand a completed call to the view that owns it
    pub fn apply_event(&mut self, event: AdvisorEvent) {
        match event {
            AdvisorEvent::Recommendations(result) => self.recommendations.resolve(result),
            AdvisorEvent::OptimizedResume(result) => self.resume.resolve(result),
            AdvisorEvent::SkillGaps(result) => self.skills.resolve(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(PathBuf::from("."))
    }

    fn press(app: &mut AppState, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    #[test]
    fn test_starts_on_dashboard_without_profile() {
        let app = app();
        assert_eq!(app.tab, Tab::Dashboard);
        assert!(app.profile.is_none());
        assert_eq!(app.profile_revision, 0);
    }

    #[test]
    fn test_tab_cycling() {
        assert_eq!(Tab::Dashboard.next(), Tab::Profile);
        assert_eq!(Tab::Skills.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.prev(), Tab::Skills);
    }

    #[test]
    fn test_number_keys_switch_tabs() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.tab, Tab::Resume);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.tab, Tab::Dashboard);
    }

    #[test]
    fn test_no_fetch_without_profile() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('5'));
        assert!(app.take_requests().is_empty());
    }

    #[test]
    fn test_help_overlay_swallows_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_ignored_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert!(app.is_editing());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_status_message() {
        let mut app = app();
        app.dispatch(Message::Status("hello".to_string()));
        assert_eq!(app.status, "hello");
    }
}
