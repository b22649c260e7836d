/// One-line labelled progress bar for skill levels
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

const LABEL_WIDTH: u16 = 16;
const VALUE_WIDTH: u16 = 5;

pub struct LevelBar<'a> {
    label: &'a str,
    value: u32,
    color: Color,
}

impl<'a> LevelBar<'a> {
    pub fn new(label: &'a str, value: u32, color: Color) -> Self {
        Self {
            label,
            value,
            color,
        }
    }

    /// Filled cells for a bar of `width` cells; values above 100 fill the bar
    pub fn filled_cells(value: u32, width: u16) -> u16 {
        let value = value.min(100);
        ((u32::from(width) * value) / 100) as u16
    }
}

impl<'a> Widget for LevelBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width <= LABEL_WIDTH + VALUE_WIDTH {
            return;
        }

        let y = area.top();
        buf.set_stringn(
            area.left(),
            y,
            self.label,
            LABEL_WIDTH as usize,
            Style::default(),
        );

        let bar_x = area.left() + LABEL_WIDTH;
        let bar_width = area.width - LABEL_WIDTH - VALUE_WIDTH;
        let filled = Self::filled_cells(self.value, bar_width);

        for i in 0..bar_width {
            let (symbol, color) = if i < filled {
                ("█", self.color)
            } else {
                ("░", Color::DarkGray)
            };
            buf.set_string(bar_x + i, y, symbol, Style::default().fg(color));
        }

        buf.set_string(
            bar_x + bar_width,
            y,
            format!("{:>4}%", self.value),
            Style::default().fg(self.color),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells() {
        assert_eq!(LevelBar::filled_cells(0, 20), 0);
        assert_eq!(LevelBar::filled_cells(50, 20), 10);
        assert_eq!(LevelBar::filled_cells(100, 20), 20);
        assert_eq!(LevelBar::filled_cells(150, 20), 20);
    }

    #[test]
    fn test_render_shows_value() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        LevelBar::new("Current Level", 60, Color::Yellow).render(area, &mut buf);

        let line: String = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(line.starts_with("Current Level"));
        assert!(line.ends_with(" 60%"));
        assert!(line.contains('█'));
    }
}
