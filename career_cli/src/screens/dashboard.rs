/// Overview screen: stat cards, quick actions and recent activity
use crate::app::{Message, Tab};
use crate::components::theme;
use crate::keymap::KeyMap;
use career_core::Profile;
use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub target: Tab,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        title: "Update Profile",
        description: "Keep your skills and experience current",
        target: Tab::Profile,
    },
    QuickAction {
        title: "Get Career Advice",
        description: "Discover new career opportunities",
        target: Tab::Recommendations,
    },
    QuickAction {
        title: "Build Resume",
        description: "Create ATS-optimized resume",
        target: Tab::Resume,
    },
    QuickAction {
        title: "Analyze Skills",
        description: "Identify skill gaps and improvements",
        target: Tab::Skills,
    },
];

/// (title, detail, when)
pub const RECENT_ACTIVITY: [(&str, &str, &str); 2] = [
    ("Profile updated", "Added new skills and experience", "2 days ago"),
    (
        "New career matches found",
        "3 new opportunities identified",
        "1 week ago",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub change: String,
}

/// Profile completion comes from the saved profile; the rest are fixed figures
pub fn stat_cards(profile: Option<&Profile>) -> [StatCard; 4] {
    let (value, change) = match profile {
        Some(p) => (format!("{}%", p.completion_percent()), "saved".to_string()),
        None => ("0%".to_string(), "not saved".to_string()),
    };
    [
        StatCard {
            title: "Profile Completion",
            value,
            change,
        },
        StatCard {
            title: "Career Matches",
            value: "12".to_string(),
            change: "+3".to_string(),
        },
        StatCard {
            title: "Skill Score",
            value: "78/100".to_string(),
            change: "+5".to_string(),
        },
        StatCard {
            title: "Last Updated",
            value: "2 days".to_string(),
            change: "ago".to_string(),
        },
    ]
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub selected: usize,
}

impl DashboardState {
    pub fn move_down(&mut self) {
        if self.selected + 1 < QUICK_ACTIONS.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Option<Message> {
        if KeyMap::is_down(code) {
            self.move_down();
        } else if KeyMap::is_up(code) {
            self.move_up();
        } else if KeyMap::is_confirm(code) {
            return Some(Message::Navigate(QUICK_ACTIONS[self.selected].target));
        }
        None
    }
}

pub struct DashboardScreen<'a> {
    state: &'a DashboardState,
    profile: Option<&'a Profile>,
    high_contrast: bool,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(state: &'a DashboardState, profile: Option<&'a Profile>, high_contrast: bool) -> Self {
        Self {
            state,
            profile,
            high_contrast,
        }
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let cards = stat_cards(self.profile);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);
        let accent = theme::accent(self.high_contrast);

        for (card, column) in cards.iter().zip(columns.iter()) {
            let block = theme::titled_block(card.title, self.high_contrast);
            let lines = vec![
                Line::from(Span::styled(card.value.clone(), theme::bold(accent))),
                Line::from(Span::styled(
                    card.change.clone(),
                    Style::default().fg(Color::Green),
                )),
            ];
            Paragraph::new(lines).block(block).render(*column, buf);
        }
    }

    fn render_actions(&self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.high_contrast);
        let mut lines = Vec::with_capacity(QUICK_ACTIONS.len() * 2);

        for (i, action) in QUICK_ACTIONS.iter().enumerate() {
            let (marker, style) = if i == self.state.selected {
                (
                    "▶ ",
                    Style::default()
                        .bg(accent)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", theme::bold(accent))
            };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{} →", action.title), style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", action.description),
                theme::dim(),
            )));
        }

        Paragraph::new(lines)
            .block(theme::titled_block("Quick Actions", self.high_contrast))
            .render(area, buf);
    }

    fn render_activity(&self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(RECENT_ACTIVITY.len() * 3);
        for (title, detail, when) in RECENT_ACTIVITY {
            lines.push(Line::from(vec![
                Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", when), theme::dim()),
            ]));
            lines.push(Line::from(format!("  {}", detail)));
            lines.push(Line::from(""));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(theme::titled_block("Recent Activity", self.high_contrast))
            .render(area, buf);
    }
}

impl<'a> Widget for DashboardScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(4),
                Constraint::Min(6),
            ])
            .split(area);

        let accent = theme::accent(self.high_contrast);
        Paragraph::new(vec![
            Line::from(Span::styled("Welcome back!", theme::bold(accent))),
            Line::from(Span::styled(
                "Here's your career development overview",
                theme::dim(),
            )),
        ])
        .render(rows[0], buf);

        self.render_stats(rows[1], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[2]);
        self.render_actions(bottom[0], buf);
        self.render_activity(bottom[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_actions_navigate() {
        let mut state = DashboardState::default();
        let targets: Vec<Tab> = (0..QUICK_ACTIONS.len())
            .map(|_| {
                let msg = state.handle_key(KeyCode::Enter);
                state.move_down();
                match msg {
                    Some(Message::Navigate(tab)) => tab,
                    other => panic!("unexpected message {:?}", other),
                }
            })
            .collect();
        assert_eq!(
            targets,
            vec![Tab::Profile, Tab::Recommendations, Tab::Resume, Tab::Skills]
        );
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = DashboardState::default();
        state.move_up();
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            state.move_down();
        }
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn test_completion_card_uses_saved_profile() {
        assert_eq!(stat_cards(None)[0].value, "0%");
        let cards = stat_cards(Some(&Profile::starter()));
        assert_eq!(
            cards[0].value,
            format!("{}%", Profile::starter().completion_percent())
        );
        assert_eq!(cards[1].value, "12");
        assert_eq!(cards[2].value, "78/100");
    }
}
