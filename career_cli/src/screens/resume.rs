/// Resume builder: editable form, live preview, optimization and PDF export
use crate::app::Message;
use crate::components::{theme, InputOutcome, TextInput};
use crate::keymap::KeyMap;
use crate::worker::AdvisorRequest;
use career_core::insights::DEFAULT_TARGET_ROLE;
use career_core::{AdvisorError, EducationEntry, ExperienceEntry, ProjectEntry, Resume};
use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

// ============================================================
// FORM FIELDS
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Personal,
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
}

/// One editable value of the resume; entry fields carry the entry index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeField {
    Name,
    Email,
    Phone,
    Location,
    Linkedin,
    Portfolio,
    Summary,
    Company(usize),
    Position(usize),
    Duration(usize),
    Highlight(usize, usize),
    Institution(usize),
    Degree(usize),
    Year(usize),
    Gpa(usize),
    ProjectName(usize),
    ProjectDescription(usize),
    Technologies(usize),
    ProjectLink(usize),
    Skills,
}

fn join_list(items: &[String]) -> String {
    items.join(", ")
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl ResumeField {
    pub fn section(&self) -> Section {
        use ResumeField::*;
        match self {
            Name | Email | Phone | Location | Linkedin | Portfolio => Section::Personal,
            Summary => Section::Summary,
            Company(_) | Position(_) | Duration(_) | Highlight(..) => Section::Experience,
            Institution(_) | Degree(_) | Year(_) | Gpa(_) => Section::Education,
            ProjectName(_) | ProjectDescription(_) | Technologies(_) | ProjectLink(_) => {
                Section::Projects
            }
            Skills => Section::Skills,
        }
    }

    /// Index of the experience, education or project entry
    pub fn entry(&self) -> Option<usize> {
        use ResumeField::*;
        match *self {
            Company(i) | Position(i) | Duration(i) | Highlight(i, _) | Institution(i)
            | Degree(i) | Year(i) | Gpa(i) | ProjectName(i) | ProjectDescription(i)
            | Technologies(i) | ProjectLink(i) => Some(i),
            _ => None,
        }
    }

    pub fn label(&self) -> String {
        use ResumeField::*;
        match self {
            Name => "Full Name".to_string(),
            Email => "Email".to_string(),
            Phone => "Phone".to_string(),
            Location => "Location".to_string(),
            Linkedin => "LinkedIn".to_string(),
            Portfolio => "Portfolio".to_string(),
            Summary => "Professional Summary".to_string(),
            Company(_) => "Company".to_string(),
            Position(_) => "Position".to_string(),
            Duration(_) => "Duration".to_string(),
            Highlight(_, line) => format!("Highlight {}", line + 1),
            Institution(_) => "Institution".to_string(),
            Degree(_) => "Degree".to_string(),
            Year(_) => "Year".to_string(),
            Gpa(_) => "GPA".to_string(),
            ProjectName(_) => "Project".to_string(),
            ProjectDescription(_) => "Description".to_string(),
            Technologies(_) => "Technologies".to_string(),
            ProjectLink(_) => "Link".to_string(),
            Skills => "Skills (comma separated)".to_string(),
        }
    }

    pub fn read(&self, resume: &Resume) -> String {
        use ResumeField::*;
        let info = &resume.personal_info;
        let value = match *self {
            Name => Some(info.name.clone()),
            Email => Some(info.email.clone()),
            Phone => Some(info.phone.clone()),
            Location => Some(info.location.clone()),
            Linkedin => Some(info.linkedin.clone().unwrap_or_default()),
            Portfolio => Some(info.portfolio.clone().unwrap_or_default()),
            Summary => Some(resume.summary.clone()),
            Company(i) => resume.experience.get(i).map(|e| e.company.clone()),
            Position(i) => resume.experience.get(i).map(|e| e.position.clone()),
            Duration(i) => resume.experience.get(i).map(|e| e.duration.clone()),
            Highlight(i, line) => resume
                .experience
                .get(i)
                .and_then(|e| e.description.get(line).cloned()),
            Institution(i) => resume.education.get(i).map(|e| e.institution.clone()),
            Degree(i) => resume.education.get(i).map(|e| e.degree.clone()),
            Year(i) => resume.education.get(i).map(|e| e.year.clone()),
            Gpa(i) => resume
                .education
                .get(i)
                .map(|e| e.gpa.clone().unwrap_or_default()),
            ProjectName(i) => resume.projects.get(i).map(|p| p.name.clone()),
            ProjectDescription(i) => resume.projects.get(i).map(|p| p.description.clone()),
            Technologies(i) => resume.projects.get(i).map(|p| join_list(&p.technologies)),
            ProjectLink(i) => resume
                .projects
                .get(i)
                .map(|p| p.link.clone().unwrap_or_default()),
            Skills => Some(join_list(&resume.skills)),
        };
        value.unwrap_or_default()
    }

    pub fn write(&self, resume: &mut Resume, value: String) {
        use ResumeField::*;
        let info = &mut resume.personal_info;
        match *self {
            Name => info.name = value,
            Email => info.email = value,
            Phone => info.phone = value,
            Location => info.location = value,
            Linkedin => info.linkedin = optional(value),
            Portfolio => info.portfolio = optional(value),
            Summary => resume.summary = value,
            Company(i) => {
                if let Some(e) = resume.experience.get_mut(i) {
                    e.company = value;
                }
            }
            Position(i) => {
                if let Some(e) = resume.experience.get_mut(i) {
                    e.position = value;
                }
            }
            Duration(i) => {
                if let Some(e) = resume.experience.get_mut(i) {
                    e.duration = value;
                }
            }
            Highlight(i, line) => {
                if let Some(slot) = resume
                    .experience
                    .get_mut(i)
                    .and_then(|e| e.description.get_mut(line))
                {
                    *slot = value;
                }
            }
            Institution(i) => {
                if let Some(e) = resume.education.get_mut(i) {
                    e.institution = value;
                }
            }
            Degree(i) => {
                if let Some(e) = resume.education.get_mut(i) {
                    e.degree = value;
                }
            }
            Year(i) => {
                if let Some(e) = resume.education.get_mut(i) {
                    e.year = value;
                }
            }
            Gpa(i) => {
                if let Some(e) = resume.education.get_mut(i) {
                    e.gpa = optional(value);
                }
            }
            ProjectName(i) => {
                if let Some(p) = resume.projects.get_mut(i) {
                    p.name = value;
                }
            }
            ProjectDescription(i) => {
                if let Some(p) = resume.projects.get_mut(i) {
                    p.description = value;
                }
            }
            Technologies(i) => {
                if let Some(p) = resume.projects.get_mut(i) {
                    p.technologies = split_list(&value);
                }
            }
            ProjectLink(i) => {
                if let Some(p) = resume.projects.get_mut(i) {
                    p.link = optional(value);
                }
            }
            Skills => resume.skills = split_list(&value),
        }
    }
}

/// Every editable field of `resume`, in form order
pub fn fields(resume: &Resume) -> Vec<ResumeField> {
    use ResumeField::*;
    let mut fields = vec![Name, Email, Phone, Location, Linkedin, Portfolio, Summary];

    for (i, exp) in resume.experience.iter().enumerate() {
        fields.extend([Company(i), Position(i), Duration(i)]);
        fields.extend((0..exp.description.len()).map(|line| Highlight(i, line)));
    }
    for i in 0..resume.education.len() {
        fields.extend([Institution(i), Degree(i), Year(i), Gpa(i)]);
    }
    for i in 0..resume.projects.len() {
        fields.extend([ProjectName(i), ProjectDescription(i), Technologies(i), ProjectLink(i)]);
    }
    fields.push(Skills);
    fields
}

// ============================================================
// STATE
// ============================================================

#[derive(Debug, Clone)]
pub struct ResumeState {
    pub resume: Resume,
    pub optimized: Option<Resume>,
    pub loading: bool,
    pub focus: usize,
    editing: Option<TextInput>,
}

impl Default for ResumeState {
    fn default() -> Self {
        Self {
            resume: Resume::sample(),
            optimized: None,
            loading: false,
            focus: 0,
            editing: None,
        }
    }
}

impl ResumeState {
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The optimized resume once available, otherwise the live form
    pub fn display(&self) -> &Resume {
        self.optimized.as_ref().unwrap_or(&self.resume)
    }

    pub fn focused(&self) -> ResumeField {
        let fields = fields(&self.resume);
        fields[self.focus.min(fields.len() - 1)]
    }

    fn clamp_focus(&mut self) {
        let len = fields(&self.resume).len();
        self.focus = self.focus.min(len - 1);
    }

    fn focus_on(&mut self, target: ResumeField) {
        if let Some(pos) = fields(&self.resume).iter().position(|f| *f == target) {
            self.focus = pos;
        }
    }

    /// Append a blank entry to the focused section and move to it
    pub fn add_entry(&mut self) {
        let target = match self.focused().section() {
            Section::Experience => {
                self.resume.experience.push(ExperienceEntry::blank());
                ResumeField::Company(self.resume.experience.len() - 1)
            }
            Section::Education => {
                self.resume.education.push(EducationEntry::default());
                ResumeField::Institution(self.resume.education.len() - 1)
            }
            Section::Projects => {
                self.resume.projects.push(ProjectEntry::default());
                ResumeField::ProjectName(self.resume.projects.len() - 1)
            }
            _ => return,
        };
        self.focus_on(target);
    }

    /// Remove the focused highlight line, or the focused entry
    pub fn remove_entry(&mut self) {
        match self.focused() {
            ResumeField::Highlight(i, line) => {
                if let Some(exp) = self.resume.experience.get_mut(i) {
                    if line < exp.description.len() {
                        exp.description.remove(line);
                    }
                }
            }
            field => {
                let Some(i) = field.entry() else {
                    return;
                };
                match field.section() {
                    Section::Experience => {
                        self.resume.experience.remove(i);
                    }
                    Section::Education => {
                        self.resume.education.remove(i);
                    }
                    Section::Projects => {
                        self.resume.projects.remove(i);
                    }
                    _ => {}
                }
            }
        }
        self.clamp_focus();
    }

    pub fn add_highlight(&mut self) {
        if self.focused().section() != Section::Experience {
            return;
        }
        if let Some(i) = self.focused().entry() {
            if let Some(exp) = self.resume.experience.get_mut(i) {
                exp.description.push(String::new());
                let line = exp.description.len() - 1;
                self.focus_on(ResumeField::Highlight(i, line));
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Option<Message> {
        if let Some(input) = self.editing.as_mut() {
            match input.handle_key(code) {
                InputOutcome::Submitted => {
                    let value = input.value().to_string();
                    self.editing = None;
                    let field = self.focused();
                    field.write(&mut self.resume, value);
                }
                InputOutcome::Cancelled => self.editing = None,
                InputOutcome::Editing => {}
            }
            return None;
        }

        if KeyMap::is_down(code) {
            if self.focus + 1 < fields(&self.resume).len() {
                self.focus += 1;
            }
        } else if KeyMap::is_up(code) {
            self.focus = self.focus.saturating_sub(1);
        } else if KeyMap::is_confirm(code) {
            self.editing = Some(TextInput::new(self.focused().read(&self.resume)));
        } else if KeyMap::is_add(code) {
            self.add_entry();
        } else if KeyMap::is_remove(code) {
            self.remove_entry();
        } else if KeyMap::is_add_highlight(code) {
            self.add_highlight();
        } else if KeyMap::is_optimize(code) && !self.loading {
            self.loading = true;
            log::info!("[resume] Optimizing resume for {}", DEFAULT_TARGET_ROLE);
            return Some(Message::Request(AdvisorRequest::OptimizeResume {
                resume: self.resume.clone(),
                target_role: DEFAULT_TARGET_ROLE.to_string(),
            }));
        } else if KeyMap::is_revert(code) && self.optimized.is_some() {
            self.optimized = None;
            return Some(Message::Status("Showing the unoptimized resume".to_string()));
        } else if KeyMap::is_export(code) {
            return Some(Message::ExportResume(self.display().clone()));
        }
        None
    }

    pub fn resolve(&mut self, result: Result<Resume, AdvisorError>) {
        self.loading = false;
        match result {
            Ok(resume) => {
                log::info!("[resume] Resume optimized");
                self.optimized = Some(resume);
            }
            Err(e) => log::error!("[resume] Error optimizing resume: {}", e),
        }
    }
}

// ============================================================
// RENDERING
// ============================================================

pub struct ResumeScreen<'a> {
    state: &'a ResumeState,
    high_contrast: bool,
}

impl<'a> ResumeScreen<'a> {
    pub fn new(state: &'a ResumeState, high_contrast: bool) -> Self {
        Self {
            state,
            high_contrast,
        }
    }

    fn section_title(section: Section, entry: Option<usize>) -> Option<String> {
        match (section, entry) {
            (Section::Personal, _) => Some("Personal Information".to_string()),
            (Section::Summary, _) => Some("Summary".to_string()),
            (Section::Experience, Some(i)) => Some(format!("Experience {}", i + 1)),
            (Section::Education, Some(i)) => Some(format!("Education {}", i + 1)),
            (Section::Projects, Some(i)) => Some(format!("Project {}", i + 1)),
            (Section::Skills, _) => Some("Skills".to_string()),
            _ => None,
        }
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.high_contrast);
        let state = self.state;
        let all = fields(&state.resume);
        let focus = state.focus.min(all.len() - 1);

        let mut lines = Vec::new();
        let mut focus_line = 0;
        let mut group: Option<(Section, Option<usize>)> = None;

        for (i, field) in all.iter().enumerate() {
            let key = (field.section(), field.entry());
            if group != Some(key) {
                group = Some(key);
                if let Some(title) = Self::section_title(key.0, key.1) {
                    lines.push(Line::from(Span::styled(title, theme::bold(accent))));
                }
            }

            let focused = i == focus;
            if focused {
                focus_line = lines.len();
            }
            let value = match (&state.editing, focused) {
                (Some(input), true) => input.display(),
                _ => field.read(&state.resume),
            };
            let style = if focused {
                Style::default()
                    .bg(accent)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(if focused { "▶ " } else { "  " }),
                Span::styled(format!("{}: ", field.label()), style),
                Span::raw(value),
            ]));
        }

        let button = if state.loading {
            "Optimizing..."
        } else {
            "[o] Optimize with AI"
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(button, theme::bold(accent))));
        lines.push(Line::from(Span::styled(
            "[Enter] Edit  [a] Add entry  [x] Remove  [n] Add highlight",
            theme::dim(),
        )));

        // Keep the focused line in view
        let viewport = area.height.saturating_sub(2) as usize;
        let scroll = (focus_line + 1).saturating_sub(viewport) as u16;

        Paragraph::new(lines)
            .scroll((scroll, 0))
            .block(theme::titled_block("Resume Information", self.high_contrast))
            .render(area, buf);
    }

    fn render_preview(&self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.high_contrast);
        let resume = self.state.display();
        let heading = |text: &'static str| Line::from(Span::styled(text, theme::bold(accent)));

        let mut lines = vec![
            Line::from(Span::styled(
                resume.personal_info.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(resume.contact_line()).alignment(Alignment::Center),
        ];
        if let Some(linkedin) = &resume.personal_info.linkedin {
            lines.push(
                Line::from(Span::styled(linkedin.clone(), Style::default().fg(Color::Blue)))
                    .alignment(Alignment::Center),
            );
        }
        if let Some(portfolio) = &resume.personal_info.portfolio {
            lines.push(
                Line::from(Span::styled(portfolio.clone(), Style::default().fg(Color::Blue)))
                    .alignment(Alignment::Center),
            );
        }

        lines.push(Line::from(""));
        lines.push(heading("PROFESSIONAL SUMMARY"));
        lines.push(Line::from(resume.summary.clone()));

        lines.push(Line::from(""));
        lines.push(heading("EXPERIENCE"));
        for exp in &resume.experience {
            lines.push(Line::from(vec![
                Span::styled(exp.position.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  {}", exp.duration), theme::dim()),
            ]));
            lines.push(Line::from(exp.company.clone()));
            for desc in &exp.description {
                lines.push(Line::from(format!("• {}", desc)));
            }
        }

        if !resume.education.is_empty() {
            lines.push(Line::from(""));
            lines.push(heading("EDUCATION"));
            for edu in &resume.education {
                let gpa = edu
                    .gpa
                    .as_ref()
                    .map(|g| format!(" (GPA {})", g))
                    .unwrap_or_default();
                lines.push(Line::from(format!("{}, {} {}{}", edu.degree, edu.institution, edu.year, gpa)));
            }
        }

        if !resume.projects.is_empty() {
            lines.push(Line::from(""));
            lines.push(heading("PROJECTS"));
            for project in &resume.projects {
                lines.push(Line::from(Span::styled(
                    project.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(project.description.clone()));
                if !project.technologies.is_empty() {
                    lines.push(Line::from(Span::styled(
                        join_list(&project.technologies),
                        theme::dim(),
                    )));
                }
            }
        }

        lines.push(Line::from(""));
        lines.push(heading("SKILLS"));
        lines.push(Line::from(join_list(&resume.skills)));

        if self.state.optimized.is_some() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "✅ Resume optimized with AI! ATS-friendly keywords and formatting applied.",
                Style::default().fg(Color::Green),
            )));
        }

        let title = if self.state.optimized.is_some() {
            "Resume Preview (optimized) [e] Download PDF [r] Revert"
        } else {
            "Resume Preview [e] Download PDF"
        };
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(theme::titled_block(title, self.high_contrast))
            .render(area, buf);
    }
}

impl<'a> Widget for ResumeScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        self.render_form(columns[0], buf);
        self.render_preview(columns[1], buf);
    }
}
