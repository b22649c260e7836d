/// Top-level TUI event loop and frame composition
use crate::app::{AppState, Tab};
use crate::components::theme;
use crate::config::AppConfig;
use crate::keymap::KeyMap;
use crate::screens::{
    DashboardScreen, ProfileScreen, RecommendationsScreen, ResumeScreen, SkillsScreen,
};
use crate::worker::{AdvisorEvent, AdvisorWorker};
use anyhow::{Context, Result};
use career_core::{CareerAdvisor, MockAdvisor};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

pub fn run_tui(config: &AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .build()
        .context("failed to start advisor runtime")?;

    let advisor: Arc<dyn CareerAdvisor> = Arc::new(MockAdvisor::new(config.advisor.clone()));
    let (worker, events) = AdvisorWorker::new(advisor, runtime.handle().clone());
    let mut app = AppState::new(config.export_dir.clone());
    log::info!(
        "[ui] Starting TUI, exports go to {}",
        config.export_dir.display()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, &worker, events);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Pending advisor calls are abandoned
    runtime.shutdown_background();
    log::info!("[ui] TUI closed");
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    worker: &AdvisorWorker,
    mut events: UnboundedReceiver<AdvisorEvent>,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render_app(f, app))?;

        for request in app.take_requests() {
            worker.dispatch(request);
        }
        while let Ok(event) = events.try_recv() {
            app.apply_event(event);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        }
    }
    Ok(())
}

/// Draw the whole application for one frame
pub fn render_app(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(size);

    render_tab_bar(f, chunks[0], app.tab, app.high_contrast);

    let hc = app.high_contrast;
    match app.tab {
        Tab::Dashboard => f.render_widget(
            DashboardScreen::new(&app.dashboard, app.profile.as_ref(), hc),
            chunks[1],
        ),
        Tab::Profile => f.render_widget(ProfileScreen::new(&app.profile_form, hc), chunks[1]),
        Tab::Recommendations => f.render_widget(
            RecommendationsScreen::new(&app.recommendations, hc),
            chunks[1],
        ),
        Tab::Resume => f.render_widget(ResumeScreen::new(&app.resume, hc), chunks[1]),
        Tab::Skills => f.render_widget(SkillsScreen::new(&app.skills, hc), chunks[1]),
    }

    render_status_bar(f, chunks[2], app);

    if app.show_help {
        render_help(f, size, hc);
    }
    if let Some(notice) = &app.notice {
        render_modal(f, size, &notice.title, &notice.message, hc);
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, active: Tab, high_contrast: bool) {
    let accent = theme::accent(high_contrast);
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!("{} {}", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(theme::titled_block("AI Career Advisor", high_contrast))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let accent = theme::accent(app.high_contrast);
    let busy = app.recommendations.loading || app.skills.loading || app.resume.loading;
    let mut spans = vec![
        Span::styled("Status: ", theme::bold(accent)),
        Span::raw(app.status.clone()),
    ];
    if busy {
        spans.push(Span::styled("  [AI working...]", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled("  [?] Help [q] Quit", theme::dim()));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(f: &mut Frame, area: Rect, high_contrast: bool) {
    let accent = theme::accent(high_contrast);
    let help_area = centered(area, 60, 80);
    f.render_widget(Clear, help_area);

    let block = theme::titled_block("Help - Keybindings", high_contrast);
    let inner = block.inner(help_area);
    f.render_widget(block, help_area);

    let mut lines = vec![
        Line::from(Span::styled("AI Career Advisor", theme::bold(accent))),
        Line::from(""),
    ];
    for (key, desc) in KeyMap::help_text() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:12}", key), theme::bold(accent)),
            Span::raw(desc),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Press any key to close", theme::dim())));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn render_modal(f: &mut Frame, area: Rect, title: &str, message: &str, high_contrast: bool) {
    let accent = theme::accent(high_contrast);
    let modal_area = centered(area, 60, 30);
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(format!(" {} ", title), theme::bold(accent)))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled("Press any key to continue", theme::dim())),
    ];
    f.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Left),
        inner,
    );
}

/// Rect of `percent_x` by `percent_y` centred in `area`
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
