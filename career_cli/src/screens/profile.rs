/// Profile form: scalar fields, experience level and the three list fields
use crate::app::Message;
use crate::components::{theme, InputOutcome, ListEditorState, TextInput};
use crate::keymap::KeyMap;
use career_core::insights::EXPERIENCE_LEVELS;
use career_core::{ListField, Profile};
use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    CurrentRole,
    Location,
    Experience,
    Education,
    Skills,
    Interests,
    PreferredIndustries,
    Save,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::CurrentRole,
        ProfileField::Location,
        ProfileField::Experience,
        ProfileField::Education,
        ProfileField::Skills,
        ProfileField::Interests,
        ProfileField::PreferredIndustries,
        ProfileField::Save,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::CurrentRole => "Current Role",
            ProfileField::Location => "Location",
            ProfileField::Experience => "Experience Level",
            ProfileField::Education => "Education",
            ProfileField::Skills => ListField::Skills.label(),
            ProfileField::Interests => ListField::Interests.label(),
            ProfileField::PreferredIndustries => ListField::PreferredIndustries.label(),
            ProfileField::Save => "Save Profile",
        }
    }

    pub fn list_field(&self) -> Option<ListField> {
        match self {
            ProfileField::Skills => Some(ListField::Skills),
            ProfileField::Interests => Some(ListField::Interests),
            ProfileField::PreferredIndustries => Some(ListField::PreferredIndustries),
            _ => None,
        }
    }

    fn is_text(&self) -> bool {
        matches!(
            self,
            ProfileField::CurrentRole | ProfileField::Location | ProfileField::Education
        )
    }
}

fn list_index(field: ListField) -> usize {
    match field {
        ListField::Skills => 0,
        ListField::Interests => 1,
        ListField::PreferredIndustries => 2,
    }
}

#[derive(Debug, Clone)]
pub struct ProfileFormState {
    pub form: Profile,
    pub focus: usize,
    editing: Option<TextInput>,
    drafting: bool,
    lists: [ListEditorState; 3],
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self {
            form: Profile::starter(),
            focus: 0,
            editing: None,
            drafting: false,
            lists: [
                ListEditorState::new(ListField::Skills),
                ListEditorState::new(ListField::Interests),
                ListEditorState::new(ListField::PreferredIndustries),
            ],
        }
    }
}

impl ProfileFormState {
    pub fn focused(&self) -> ProfileField {
        ProfileField::ALL[self.focus]
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some() || self.drafting
    }

    fn list_editor(&self, field: ListField) -> &ListEditorState {
        &self.lists[list_index(field)]
    }

    fn text_value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::CurrentRole => &self.form.current_role,
            ProfileField::Location => &self.form.location,
            ProfileField::Education => &self.form.education,
            _ => "",
        }
    }

    fn set_text_value(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::CurrentRole => self.form.current_role = value,
            ProfileField::Location => self.form.location = value,
            ProfileField::Education => self.form.education = value,
            _ => {}
        }
    }

    /// Step through the experience levels; an unset level starts at either end
    pub fn cycle_experience(&mut self, forward: bool) {
        let len = EXPERIENCE_LEVELS.len();
        let current = EXPERIENCE_LEVELS
            .iter()
            .position(|(key, _)| *key == self.form.experience);
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.form.experience = EXPERIENCE_LEVELS[next].0.to_string();
    }

    fn save(&self) -> Message {
        log::info!("[profile] Submitting profile form");
        Message::SaveProfile(self.form.clone())
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Option<Message> {
        if let Some(input) = self.editing.as_mut() {
            match input.handle_key(code) {
                InputOutcome::Submitted => {
                    let value = input.value().to_string();
                    let field = self.focused();
                    self.editing = None;
                    self.set_text_value(field, value);
                }
                InputOutcome::Cancelled => self.editing = None,
                InputOutcome::Editing => {}
            }
            return None;
        }

        let field = self.focused();

        if self.drafting {
            if let Some(list) = field.list_field() {
                let editor = &mut self.lists[list_index(list)];
                match editor.draft.handle_key(code) {
                    InputOutcome::Submitted => {
                        editor.commit_draft(&mut self.form);
                    }
                    InputOutcome::Cancelled => {
                        editor.draft.clear();
                        self.drafting = false;
                    }
                    InputOutcome::Editing => {}
                }
            } else {
                self.drafting = false;
            }
            return None;
        }

        if KeyMap::is_down(code) {
            if self.focus + 1 < ProfileField::ALL.len() {
                self.focus += 1;
            }
        } else if KeyMap::is_up(code) {
            if self.focus > 0 {
                self.focus -= 1;
            }
        } else if KeyMap::is_save(code) {
            return Some(self.save());
        } else if KeyMap::is_left(code) || KeyMap::is_right(code) {
            let forward = KeyMap::is_right(code);
            if field == ProfileField::Experience {
                self.cycle_experience(forward);
            } else if let Some(list) = field.list_field() {
                let len = self.form.list(list).len();
                let editor = &mut self.lists[list_index(list)];
                if forward {
                    editor.move_right(len);
                } else {
                    editor.move_left();
                }
            }
        } else if KeyMap::is_add(code) {
            if field.list_field().is_some() {
                self.drafting = true;
            }
        } else if KeyMap::is_remove(code) {
            if let Some(list) = field.list_field() {
                let editor = &mut self.lists[list_index(list)];
                if let Some(removed) = editor.remove_selected(&mut self.form) {
                    log::debug!("[profile] Removed {} from {}", removed, list.label());
                }
            }
        } else if KeyMap::is_confirm(code) {
            if field.is_text() {
                self.editing = Some(TextInput::new(self.text_value(field)));
            } else if field == ProfileField::Experience {
                self.cycle_experience(true);
            } else if field.list_field().is_some() {
                self.drafting = true;
            } else if field == ProfileField::Save {
                return Some(self.save());
            }
        }
        None
    }
}

pub struct ProfileScreen<'a> {
    state: &'a ProfileFormState,
    high_contrast: bool,
}

impl<'a> ProfileScreen<'a> {
    pub fn new(state: &'a ProfileFormState, high_contrast: bool) -> Self {
        Self {
            state,
            high_contrast,
        }
    }

    fn field_lines(&self, field: ProfileField, focused: bool) -> Vec<Line<'a>> {
        let accent = theme::accent(self.high_contrast);
        let label_style = if focused {
            Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::bold(accent)
        };
        let marker = if focused { "▶ " } else { "  " };
        let state = self.state;

        if field == ProfileField::Save {
            return vec![
                Line::from(""),
                Line::from(vec![
                    Span::raw(marker),
                    Span::styled("[ Save Profile ]", label_style),
                ]),
            ];
        }

        let mut lines = vec![Line::from(vec![
            Span::raw(marker),
            Span::styled(field.label(), label_style),
        ])];

        if let Some(list) = field.list_field() {
            let editor = state.list_editor(list);
            let mut chips = editor.chips(state.form.list(list), focused, self.high_contrast);
            chips.spans.insert(0, Span::raw("    "));
            lines.push(chips);
            if focused && state.drafting {
                lines.push(Line::from(vec![
                    Span::raw("    + "),
                    Span::styled(editor.draft.display(), Style::default().fg(Color::White)),
                ]));
            }
        } else if field == ProfileField::Experience {
            let text = EXPERIENCE_LEVELS
                .iter()
                .find(|(key, _)| *key == state.form.experience)
                .map(|(_, label)| format!("< {} >", label))
                .unwrap_or_else(|| "< Select experience level >".to_string());
            lines.push(Line::from(format!("    {}", text)));
        } else {
            let value = match (&state.editing, focused) {
                (Some(input), true) => input.display(),
                _ => {
                    let value = state.text_value(field);
                    if value.is_empty() {
                        "(empty)".to_string()
                    } else {
                        value.to_string()
                    }
                }
            };
            lines.push(Line::from(format!("    {}", value)));
        }
        lines
    }
}

impl<'a> Widget for ProfileScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Tell us about yourself to get personalized career recommendations",
                theme::dim(),
            )),
            Line::from(""),
        ];

        for (i, field) in ProfileField::ALL.iter().enumerate() {
            lines.extend(self.field_lines(*field, i == self.state.focus));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Edit  [←/→] Choose  [a] Add  [x] Remove  [s] Save  [Esc] Stop editing",
            theme::dim(),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(theme::titled_block("Your Profile", self.high_contrast))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(state: &mut ProfileFormState, text: &str) {
        for c in text.chars() {
            state.handle_key(KeyCode::Char(c));
        }
    }

    fn focus(state: &mut ProfileFormState, field: ProfileField) {
        state.focus = ProfileField::ALL
            .iter()
            .position(|f| *f == field)
            .unwrap();
    }

    #[test]
    fn test_starts_with_starter_lists() {
        let state = ProfileFormState::default();
        assert_eq!(state.form, Profile::starter());
        assert_eq!(state.focused(), ProfileField::CurrentRole);
    }

    #[test]
    fn test_edit_text_field() {
        let mut state = ProfileFormState::default();
        state.handle_key(KeyCode::Enter);
        assert!(state.is_editing());
        type_text(&mut state, "Data Analyst");
        state.handle_key(KeyCode::Enter);
        assert!(!state.is_editing());
        assert_eq!(state.form.current_role, "Data Analyst");
    }

    #[test]
    fn test_cancel_edit_keeps_value() {
        let mut state = ProfileFormState::default();
        focus(&mut state, ProfileField::Location);
        state.handle_key(KeyCode::Enter);
        type_text(&mut state, "Pune");
        state.handle_key(KeyCode::Esc);
        assert_eq!(state.form.location, "");
    }

    #[test]
    fn test_add_skill_and_remove_restores() {
        let mut state = ProfileFormState::default();
        focus(&mut state, ProfileField::Skills);
        let before = state.form.skills.clone();

        state.handle_key(KeyCode::Char('a'));
        type_text(&mut state, "Python");
        state.handle_key(KeyCode::Enter);
        state.handle_key(KeyCode::Esc);
        assert_eq!(state.form.skills.last().map(String::as_str), Some("Python"));

        state.handle_key(KeyCode::Char('x'));
        assert_eq!(state.form.skills, before);
    }

    #[test]
    fn test_blank_skill_ignored() {
        let mut state = ProfileFormState::default();
        focus(&mut state, ProfileField::Skills);
        state.handle_key(KeyCode::Enter);
        type_text(&mut state, "   ");
        state.handle_key(KeyCode::Enter);
        assert_eq!(state.form.skills, Profile::starter().skills);
    }

    #[test]
    fn test_experience_cycles() {
        let mut state = ProfileFormState::default();
        focus(&mut state, ProfileField::Experience);
        state.handle_key(KeyCode::Right);
        assert_eq!(state.form.experience, "fresher");
        state.handle_key(KeyCode::Left);
        assert_eq!(state.form.experience, "lead");
    }

    #[test]
    fn test_save_emits_current_values() {
        let mut state = ProfileFormState::default();
        state.form.location = "Delhi".to_string();
        match state.handle_key(KeyCode::Char('s')) {
            Some(Message::SaveProfile(profile)) => assert_eq!(profile.location, "Delhi"),
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_save_key_while_editing_is_text() {
        let mut state = ProfileFormState::default();
        state.handle_key(KeyCode::Enter);
        assert!(state.handle_key(KeyCode::Char('s')).is_none());
        state.handle_key(KeyCode::Enter);
        assert_eq!(state.form.current_role, "s");
    }
}
