/// Career recommendations: category filter, match table and card details
use crate::app::Message;
use crate::components::{create_row, theme, TableWidget};
use crate::keymap::KeyMap;
use crate::worker::AdvisorRequest;
use career_core::insights::{confidence_band, filter_by_category, preview, CategoryFilter};
use career_core::{AdvisorError, Profile, Recommendation};
use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

const SKILL_PREVIEW: usize = 4;
const REASON_PREVIEW: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct RecommendationsState {
    pub recommendations: Vec<Recommendation>,
    pub loading: bool,
    pub filter: CategoryFilter,
    pub selected: usize,
    /// Profile revision the last automatic request was issued for
    fetched_revision: Option<u64>,
}

impl RecommendationsState {
    pub fn visible(&self) -> Vec<&Recommendation> {
        filter_by_category(&self.recommendations, self.filter)
    }

    pub fn selected_recommendation(&self) -> Option<&Recommendation> {
        self.visible().get(self.selected).copied()
    }

    fn request(&mut self, profile: Profile) -> Message {
        self.loading = true;
        log::info!("[recommendations] Requesting career recommendations");
        Message::Request(AdvisorRequest::Recommendations { profile })
    }

    /// Fetch when a saved profile has not been fetched for yet
    pub fn activate(&mut self, profile: Option<&Profile>, revision: u64) -> Option<Message> {
        let profile = profile?;
        if self.fetched_revision == Some(revision) {
            return None;
        }
        self.fetched_revision = Some(revision);
        Some(self.request(profile.clone()))
    }

    pub fn handle_key(
        &mut self,
        code: KeyCode,
        profile: Option<&Profile>,
        revision: u64,
    ) -> Option<Message> {
        if KeyMap::is_down(code) {
            if self.selected + 1 < self.visible().len() {
                self.selected += 1;
            }
        } else if KeyMap::is_up(code) {
            self.selected = self.selected.saturating_sub(1);
        } else if KeyMap::is_right(code) {
            self.set_filter(self.filter.next());
        } else if KeyMap::is_left(code) {
            self.set_filter(self.filter.prev());
        } else if KeyMap::is_generate(code) && !self.loading {
            if profile.is_some() {
                self.fetched_revision = Some(revision);
            }
            return Some(self.request(profile.cloned().unwrap_or_default()));
        }
        None
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.selected = 0;
    }

    pub fn resolve(&mut self, result: Result<Vec<Recommendation>, AdvisorError>) {
        self.loading = false;
        match result {
            Ok(recommendations) => {
                log::info!(
                    "[recommendations] Received {} recommendations",
                    recommendations.len()
                );
                self.recommendations = recommendations;
                self.selected = self
                    .selected
                    .min(self.visible().len().saturating_sub(1));
            }
            Err(e) => log::error!("[recommendations] Error generating recommendations: {}", e),
        }
    }
}

pub struct RecommendationsScreen<'a> {
    state: &'a RecommendationsState,
    high_contrast: bool,
}

impl<'a> RecommendationsScreen<'a> {
    pub fn new(state: &'a RecommendationsState, high_contrast: bool) -> Self {
        Self {
            state,
            high_contrast,
        }
    }

    fn filter_line(&self) -> Line<'static> {
        let accent = theme::accent(self.high_contrast);
        let mut spans = vec![Span::raw("Filter: ")];
        for filter in CategoryFilter::CYCLE {
            let style = if filter == self.state.filter {
                Style::default()
                    .bg(accent)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", filter.label()), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled("[←/→] Filter  ", theme::dim()));
        let button = if self.state.loading {
            "Analyzing..."
        } else {
            "[g] Generate New Recommendations"
        };
        spans.push(Span::styled(button, theme::bold(accent)));
        Line::from(spans)
    }

    fn render_details(&self, rec: &Recommendation, area: Rect, buf: &mut Buffer) {
        let hc = self.high_contrast;
        let accent = theme::accent(hc);
        let confidence = theme::confidence_color(confidence_band(rec.confidence_score), hc);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(rec.title.clone(), theme::bold(accent)),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", rec.category.label()),
                    Style::default().fg(theme::category_color(rec.category, hc)),
                ),
                Span::raw("  "),
                Span::styled(format!("{}% Match", rec.confidence_score), theme::bold(confidence)),
            ]),
            Line::from(""),
            Line::from(rec.description.clone()),
            Line::from(""),
            Line::from(vec![
                Span::styled("Salary Range: ", theme::dim()),
                Span::raw(rec.salary_range.clone()),
                Span::styled("   Growth Potential: ", theme::dim()),
                Span::raw(format!("{}%", rec.growth_potential)),
            ]),
            Line::from(""),
            Line::from(Span::styled("Required Skills", theme::bold(accent))),
        ];

        let (skills, hidden) = preview(&rec.required_skills, SKILL_PREVIEW);
        let mut skill_spans: Vec<Span> = skills
            .iter()
            .map(|s| Span::styled(format!("[{}] ", s), Style::default().fg(accent)))
            .collect();
        if hidden > 0 {
            skill_spans.push(Span::styled(format!("+{} more", hidden), theme::dim()));
        }
        lines.push(Line::from(skill_spans));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Why this matches you",
            theme::bold(accent),
        )));

        let (reasons, _) = preview(&rec.match_reasons, REASON_PREVIEW);
        for reason in reasons {
            lines.push(Line::from(format!("  • {}", reason)));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(theme::titled_block("Details", hc))
            .render(area, buf);
    }

    fn render_placeholder(&self, area: Rect, buf: &mut Buffer) {
        let lines = if self.state.loading {
            vec![Line::from("AI is analyzing your profile...")]
        } else {
            vec![
                Line::from(Span::styled(
                    "No recommendations yet",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Complete your profile to get personalized career recommendations",
                    theme::dim(),
                )),
            ]
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(theme::titled_block("Recommendations", self.high_contrast))
            .render(area, buf);
    }
}

impl<'a> Widget for RecommendationsScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(5)])
            .split(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                "AI-powered career suggestions based on your profile",
                theme::dim(),
            )),
            self.filter_line(),
        ])
        .render(chunks[0], buf);

        let visible = self.state.visible();
        if self.state.loading || visible.is_empty() {
            self.render_placeholder(chunks[1], buf);
            return;
        }

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);

        let hc = self.high_contrast;
        let rows = visible
            .iter()
            .map(|rec| {
                create_row(
                    vec![
                        rec.title.clone(),
                        rec.category.label().to_string(),
                        format!("{}%", rec.confidence_score),
                    ],
                    theme::confidence_color(confidence_band(rec.confidence_score), hc),
                )
            })
            .collect();

        TableWidget::new(
            " Career Matches ",
            vec!["Title", "Category", "Match"],
            vec![24, 10, 6],
        )
        .rows(rows)
        .selected(Some(self.state.selected))
        .high_contrast(hc)
        .render(body[0], buf);

        if let Some(rec) = self.state.selected_recommendation() {
            self.render_details(rec, body[1], buf);
        }
    }
}
