/// Centralized keybindings and help text for the Career Advisor TUI

use crossterm::event::{KeyCode, KeyModifiers};

pub struct KeyMap;

impl KeyMap {
    /// Get help text for all keybindings
    pub fn help_text() -> Vec<(&'static str, &'static str)> {
        vec![
            ("1-5", "Switch tab"),
            ("Tab/S-Tab", "Next/previous tab"),
            ("j/↓", "Move down"),
            ("k/↑", "Move up"),
            ("h/l ←/→", "Cycle filter, role or list item"),
            ("Enter", "Open / edit / confirm"),
            ("a", "Add item or entry"),
            ("x", "Remove item or entry"),
            ("s", "Save profile"),
            ("g", "Generate recommendations / analyze skills"),
            ("o", "Optimize resume"),
            ("r", "Revert to unoptimized resume"),
            ("e", "Export resume as PDF"),
            ("t", "Toggle high-contrast"),
            ("?", "Show help"),
            ("q/Ctrl-C", "Quit"),
        ]
    }

    /// Check if key is quit
    pub fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q')) || Self::is_interrupt(code, modifiers)
    }

    /// Ctrl-C quits even while a text field is being edited
    pub fn is_interrupt(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('c')) && modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn is_help(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('?'))
    }

    pub fn is_down(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('j') | KeyCode::Down)
    }

    pub fn is_up(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('k') | KeyCode::Up)
    }

    pub fn is_left(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('h') | KeyCode::Left)
    }

    pub fn is_right(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('l') | KeyCode::Right)
    }

    pub fn is_next_tab(code: KeyCode) -> bool {
        matches!(code, KeyCode::Tab)
    }

    pub fn is_prev_tab(code: KeyCode) -> bool {
        matches!(code, KeyCode::BackTab)
    }

    /// Tab index for the number keys `1`..`5`
    pub fn tab_index(code: KeyCode) -> Option<usize> {
        match code {
            KeyCode::Char(c @ '1'..='5') => Some(c as usize - '1' as usize),
            _ => None,
        }
    }

    pub fn is_confirm(code: KeyCode) -> bool {
        matches!(code, KeyCode::Enter)
    }

    pub fn is_add(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('a'))
    }

    pub fn is_remove(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('x') | KeyCode::Delete)
    }

    pub fn is_save(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('s'))
    }

    /// Generate recommendations or analyze skills
    pub fn is_generate(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('g'))
    }

    pub fn is_optimize(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('o'))
    }

    pub fn is_revert(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('r'))
    }

    pub fn is_export(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('e'))
    }

    pub fn is_add_highlight(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('n'))
    }

    pub fn is_toggle_theme(code: KeyCode) -> bool {
        matches!(code, KeyCode::Char('t'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_index() {
        assert_eq!(KeyMap::tab_index(KeyCode::Char('1')), Some(0));
        assert_eq!(KeyMap::tab_index(KeyCode::Char('5')), Some(4));
        assert_eq!(KeyMap::tab_index(KeyCode::Char('6')), None);
        assert_eq!(KeyMap::tab_index(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(KeyMap::is_quit(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(KeyMap::is_quit(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!KeyMap::is_quit(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!KeyMap::is_quit(KeyCode::Esc, KeyModifiers::NONE));
    }
}
