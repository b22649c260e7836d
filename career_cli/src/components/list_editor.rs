/// Item cursor and draft input for one list-valued profile field
use super::text_input::TextInput;
use super::theme;
use career_core::{ListField, Profile};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone)]
pub struct ListEditorState {
    pub field: ListField,
    pub selected: usize,
    pub draft: TextInput,
}

impl ListEditorState {
    pub fn new(field: ListField) -> Self {
        Self {
            field,
            selected: 0,
            draft: TextInput::default(),
        }
    }

    pub fn move_left(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_right(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Add the draft to the profile list; a blank draft is left untouched
    pub fn commit_draft(&mut self, profile: &mut Profile) -> bool {
        if !profile.add_item(self.field, self.draft.value()) {
            return false;
        }
        self.draft.clear();
        self.selected = profile.list(self.field).len() - 1;
        true
    }

    pub fn remove_selected(&mut self, profile: &mut Profile) -> Option<String> {
        let removed = profile.remove_item(self.field, self.selected)?;
        let len = profile.list(self.field).len();
        if self.selected >= len && len > 0 {
            self.selected = len - 1;
        }
        if len == 0 {
            self.selected = 0;
        }
        Some(removed)
    }

    /// Items as chips, highlighting the cursor when the field has focus
    pub fn chips<'a>(&self, items: &'a [String], focused: bool, high_contrast: bool) -> Line<'a> {
        if items.is_empty() {
            return Line::from(Span::styled("(none)", theme::dim()));
        }
        let accent = theme::accent(high_contrast);
        let mut spans = Vec::with_capacity(items.len() * 2);
        for (i, item) in items.iter().enumerate() {
            let style = if focused && i == self.selected {
                Style::default()
                    .bg(accent)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(accent)
            };
            spans.push(Span::styled(format!("[{}]", item), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}
