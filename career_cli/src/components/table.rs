/// Selectable table with a scroll indicator, used for recommendation lists
use super::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Row, Table, Widget},
};

#[derive(Clone, Debug)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub style: Style,
}

pub struct TableWidget<'a> {
    headers: Vec<&'a str>,
    rows: Vec<TableRow>,
    widths: Vec<u16>,
    selected: Option<usize>,
    title: &'a str,
    high_contrast: bool,
}

impl<'a> TableWidget<'a> {
    pub fn new(title: &'a str, headers: Vec<&'a str>, widths: Vec<u16>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            widths,
            selected: None,
            title,
            high_contrast: false,
        }
    }

    pub fn rows(mut self, rows: Vec<TableRow>) -> Self {
        self.rows = rows;
        self
    }

    /// Highlighted row, clamped to the last row
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index.map(|i| i.min(self.rows.len().saturating_sub(1)));
        self
    }

    pub fn high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = enabled;
        self
    }

    /// Scroll offset keeping the selected row inside `viewport` rows
    fn offset(&self, viewport: usize) -> usize {
        match self.selected {
            Some(selected) if viewport > 0 && selected >= viewport => selected + 1 - viewport,
            _ => 0,
        }
    }
}

impl<'a> Widget for TableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = theme::accent(self.high_contrast);
        let block = theme::titled_block(self.title, self.high_contrast);

        let header = Row::new(
            self.headers
                .iter()
                .map(|h| Span::styled(*h, theme::bold(accent))),
        )
        .height(1);

        // Borders plus header
        let viewport = area.height.saturating_sub(3) as usize;
        let offset = self.offset(viewport);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .map(|(i, row)| {
                let style = if Some(i) == self.selected {
                    Style::default()
                        .bg(accent)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    row.style
                };
                Row::new(row.cells.iter().map(|c| c.as_str())).style(style)
            })
            .collect();

        let table = Table::new(rows, self.widths.iter().map(|w| Constraint::Length(*w)))
            .header(header)
            .block(block);

        Widget::render(table, area, buf);

        if self.rows.len() > viewport && area.height > 4 {
            self.render_scrollbar(area, buf, viewport);
        }
    }
}

impl<'a> TableWidget<'a> {
    fn render_scrollbar(&self, area: Rect, buf: &mut Buffer, viewport: usize) {
        let total = self.rows.len();
        if total <= viewport {
            return;
        }

        let x = area.right().saturating_sub(1);
        let start = area.top() + 2;
        let end = area.bottom().saturating_sub(1);
        let height = end.saturating_sub(start);
        if height == 0 {
            return;
        }

        let selected = self.selected.unwrap_or(0);
        let position = (selected as f32 / total as f32 * height as f32) as u16;
        let thumb_y = start + position.min(height.saturating_sub(1));
        let accent = theme::accent(self.high_contrast);

        for y in start..end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                if y == thumb_y {
                    cell.set_char('█').set_fg(accent);
                } else {
                    cell.set_char('│').set_fg(Color::DarkGray);
                }
            }
        }
    }
}

pub fn create_row(cells: Vec<String>, color: Color) -> TableRow {
    TableRow {
        cells,
        style: Style::default().fg(color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<TableRow> {
        (0..n)
            .map(|i| create_row(vec![format!("row {}", i)], Color::White))
            .collect()
    }

    #[test]
    fn test_selected_is_clamped() {
        let table = TableWidget::new("T", vec!["A"], vec![10])
            .rows(rows(3))
            .selected(Some(9));
        assert_eq!(table.selected, Some(2));
    }

    #[test]
    fn test_offset_follows_selection() {
        let table = TableWidget::new("T", vec!["A"], vec![10])
            .rows(rows(10))
            .selected(Some(7));
        assert_eq!(table.offset(5), 3);
        assert_eq!(table.offset(20), 0);
    }

    #[test]
    fn test_render_shows_title_and_rows() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        TableWidget::new("Matches", vec!["Title"], vec![20])
            .rows(rows(2))
            .selected(Some(0))
            .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Matches"));
        assert!(text.contains("row 1"));
    }
}
