/// Single-line text input used by the profile and resume forms
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Editing,
    Submitted,
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn handle_key(&mut self, code: KeyCode) -> InputOutcome {
        match code {
            KeyCode::Char(c) => {
                self.value.push(c);
                InputOutcome::Editing
            }
            KeyCode::Backspace => {
                self.value.pop();
                InputOutcome::Editing
            }
            KeyCode::Enter => InputOutcome::Submitted,
            KeyCode::Esc => InputOutcome::Cancelled,
            _ => InputOutcome::Editing,
        }
    }

    /// Value with a trailing caret
    pub fn display(&self) -> String {
        format!("{}▏", self.value)
    }
}
