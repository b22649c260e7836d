/// Skill gap analysis for a chosen target role
use crate::app::Message;
use crate::components::{theme, LevelBar};
use crate::keymap::KeyMap;
use crate::worker::AdvisorRequest;
use career_core::insights::{
    importance_band, level_band, SkillSummary, DEFAULT_TARGET_ROLE, TARGET_ROLES,
};
use career_core::{AdvisorError, Profile, SkillGap};
use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone)]
pub struct SkillsState {
    pub gaps: Vec<SkillGap>,
    pub loading: bool,
    pub role_index: usize,
    pub selected: usize,
    /// (profile revision, role) the last automatic request was issued for
    fetched: Option<(u64, usize)>,
}

impl Default for SkillsState {
    fn default() -> Self {
        let role_index = TARGET_ROLES
            .iter()
            .position(|r| *r == DEFAULT_TARGET_ROLE)
            .unwrap_or(0);
        Self {
            gaps: Vec::new(),
            loading: false,
            role_index,
            selected: 0,
            fetched: None,
        }
    }
}

impl SkillsState {
    pub fn target_role(&self) -> &'static str {
        TARGET_ROLES[self.role_index]
    }

    fn request(&mut self, profile: Profile) -> Message {
        self.loading = true;
        let target_role = self.target_role().to_string();
        log::info!("[skills] Analyzing skill gaps for {}", target_role);
        Message::Request(AdvisorRequest::SkillGaps {
            profile,
            target_role,
        })
    }

    /// Fetch when the saved profile or the role changed since the last fetch
    pub fn activate(&mut self, profile: Option<&Profile>, revision: u64) -> Option<Message> {
        let profile = profile?;
        let key = (revision, self.role_index);
        if self.fetched == Some(key) {
            return None;
        }
        self.fetched = Some(key);
        Some(self.request(profile.clone()))
    }

    fn select_role(&mut self, index: usize, profile: Option<&Profile>, revision: u64) -> Option<Message> {
        if index == self.role_index {
            return None;
        }
        self.role_index = index;
        self.activate(profile, revision)
    }

    pub fn handle_key(
        &mut self,
        code: KeyCode,
        profile: Option<&Profile>,
        revision: u64,
    ) -> Option<Message> {
        let roles = TARGET_ROLES.len();
        if KeyMap::is_right(code) {
            return self.select_role((self.role_index + 1) % roles, profile, revision);
        } else if KeyMap::is_left(code) {
            return self.select_role((self.role_index + roles - 1) % roles, profile, revision);
        } else if KeyMap::is_down(code) {
            if self.selected + 1 < self.gaps.len() {
                self.selected += 1;
            }
        } else if KeyMap::is_up(code) {
            self.selected = self.selected.saturating_sub(1);
        } else if KeyMap::is_generate(code) && !self.loading {
            if profile.is_some() {
                self.fetched = Some((revision, self.role_index));
            }
            return Some(self.request(profile.cloned().unwrap_or_default()));
        }
        None
    }

    pub fn resolve(&mut self, result: Result<Vec<SkillGap>, AdvisorError>) {
        self.loading = false;
        match result {
            Ok(gaps) => {
                log::info!("[skills] Received {} skill gaps", gaps.len());
                self.gaps = gaps;
                self.selected = self.selected.min(self.gaps.len().saturating_sub(1));
            }
            Err(e) => log::error!("[skills] Error analyzing skills: {}", e),
        }
    }
}

pub struct SkillsScreen<'a> {
    state: &'a SkillsState,
    high_contrast: bool,
}

impl<'a> SkillsScreen<'a> {
    pub fn new(state: &'a SkillsState, high_contrast: bool) -> Self {
        Self {
            state,
            high_contrast,
        }
    }

    fn role_line(&self) -> Line<'static> {
        let accent = theme::accent(self.high_contrast);
        let mut spans = vec![Span::raw("Target Role: ")];
        for (i, role) in TARGET_ROLES.iter().enumerate() {
            let style = if i == self.state.role_index {
                Style::default()
                    .bg(accent)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", role), style));
        }
        Line::from(spans)
    }

    fn render_gap(&self, gap: &SkillGap, focused: bool, area: Rect, buf: &mut Buffer) {
        let hc = self.high_contrast;
        let title = if focused {
            format!("▶ {}", gap.skill)
        } else {
            gap.skill.clone()
        };
        let block = theme::titled_block(&title, hc);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let importance = theme::importance_color(importance_band(gap.importance), hc);
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{}% Important", gap.importance), theme::bold(importance)),
            Span::styled(format!(" for {}", self.state.target_role()), theme::dim()),
            Span::raw("   "),
            Span::styled(format!("{}", gap.gap()), theme::bold(theme::accent(hc))),
            Span::styled(" Points to improve", theme::dim()),
        ]))
        .render(rows[0], buf);

        LevelBar::new(
            "Current Level",
            gap.current_level,
            theme::level_color(level_band(gap.current_level), hc),
        )
        .render(rows[1], buf);
        LevelBar::new("Target Level", gap.target_level, theme::accent(hc)).render(rows[2], buf);

        let mut lines = vec![Line::from(Span::styled(
            "Recommended Learning Resources",
            theme::bold(theme::accent(hc)),
        ))];
        for resource in &gap.resources {
            lines.push(Line::from(format!("  • {}", resource)));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(rows[3], buf);
    }

    fn render_summary(&self, summary: SkillSummary, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.high_contrast);
        let line = Line::from(vec![
            Span::styled(format!("{}%", summary.average_current), theme::bold(accent)),
            Span::styled(" Average Current Level   ", theme::dim()),
            Span::styled(format!("{}%", summary.average_target), theme::bold(accent)),
            Span::styled(" Average Target Level   ", theme::dim()),
            Span::styled(format!("{}", summary.skills), theme::bold(accent)),
            Span::styled(" Skills to Improve", theme::dim()),
        ]);
        Paragraph::new(line)
            .block(theme::titled_block("Overall Progress Summary", self.high_contrast))
            .render(area, buf);
    }
}

impl<'a> Widget for SkillsScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
            ])
            .split(area);

        let accent = theme::accent(self.high_contrast);
        let button = if self.state.loading {
            "Analyzing...".to_string()
        } else {
            format!("[g] Analyze Skills for {}", self.state.target_role())
        };
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Identify skill gaps and get personalized learning recommendations",
                theme::dim(),
            )),
            self.role_line(),
            Line::from(vec![
                Span::styled("[←/→] Role  ", theme::dim()),
                Span::styled(button, theme::bold(accent)),
            ]),
        ])
        .render(chunks[0], buf);

        if self.state.loading || self.state.gaps.is_empty() {
            let lines = if self.state.loading {
                vec![Line::from("AI is analyzing your skill gaps...")]
            } else {
                vec![
                    Line::from(Span::styled(
                        "No skill analysis yet",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Select a target role and analyze your skills to get started",
                        theme::dim(),
                    )),
                ]
            };
            Paragraph::new(lines)
                .block(theme::titled_block("Skill Analysis", self.high_contrast))
                .render(chunks[1], buf);
            return;
        }

        // Gaps from the selected one onwards, as many as fit
        let card_height = 9u16;
        let fit = (chunks[1].height / card_height).max(1) as usize;
        let start = self.state.selected.min(self.state.gaps.len().saturating_sub(fit));
        let shown: Vec<&SkillGap> = self.state.gaps.iter().skip(start).take(fit).collect();
        let cards = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(card_height); shown.len()])
            .split(chunks[1]);

        for (offset, (gap, card)) in shown.iter().zip(cards.iter()).enumerate() {
            self.render_gap(gap, start + offset == self.state.selected, *card, buf);
        }

        if let Some(summary) = SkillSummary::from_gaps(&self.state.gaps) {
            self.render_summary(summary, chunks[2], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap(skill: &str, current: u32, target: u32) -> SkillGap {
        SkillGap {
            skill: skill.to_string(),
            importance: 80,
            current_level: current,
            target_level: target,
            resources: vec![],
        }
    }

    #[test]
    fn test_default_role() {
        let state = SkillsState::default();
        assert_eq!(state.target_role(), "Full Stack Developer");
    }

    #[test]
    fn test_role_change_with_profile_requests() {
        let mut state = SkillsState::default();
        let profile = Profile::starter();
        assert!(state.activate(Some(&profile), 1).is_some());
        state.resolve(Ok(vec![gap("Rust", 40, 80)]));

        match state.handle_key(KeyCode::Right, Some(&profile), 1) {
            Some(Message::Request(AdvisorRequest::SkillGaps { target_role, .. })) => {
                assert_eq!(target_role, "Frontend Developer")
            }
            other => panic!("unexpected message {:?}", other),
        }
        assert!(state.loading);
    }

    #[test]
    fn test_role_change_without_profile_is_silent() {
        let mut state = SkillsState::default();
        assert!(state.handle_key(KeyCode::Right, None, 0).is_none());
        assert_eq!(state.target_role(), "Frontend Developer");
        assert!(state.handle_key(KeyCode::Left, None, 0).is_none());
        assert!(state.handle_key(KeyCode::Left, None, 0).is_none());
        assert_eq!(state.target_role(), "Mobile Developer");
    }

    #[test]
    fn test_activate_skips_same_revision_and_role() {
        let mut state = SkillsState::default();
        let profile = Profile::starter();
        assert!(state.activate(Some(&profile), 3).is_some());
        assert!(state.activate(Some(&profile), 3).is_none());
        assert!(state.activate(Some(&profile), 4).is_some());
    }

    #[test]
    fn test_failure_keeps_previous_gaps() {
        let mut state = SkillsState::default();
        state.resolve(Ok(vec![gap("Rust", 40, 80), gap("SQL", 60, 90)]));
        state.loading = true;
        state.resolve(Err(AdvisorError::Interrupted("task aborted".to_string())));
        assert!(!state.loading);
        assert_eq!(state.gaps.len(), 2);
    }
}
