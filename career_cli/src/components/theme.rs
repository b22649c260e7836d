/// Shared colours and block styling for the Career Advisor TUI
use career_core::insights::{ConfidenceBand, ImportanceBand, LevelBand};
use career_core::RecommendationCategory;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
};

pub const TEAL: Color = Color::Rgb(45, 212, 191);
pub const ORANGE: Color = Color::Rgb(251, 146, 60);

pub fn accent(high_contrast: bool) -> Color {
    if high_contrast {
        Color::White
    } else {
        TEAL
    }
}

pub fn border_style(high_contrast: bool) -> Style {
    if high_contrast {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

pub fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Bordered block with an accented ` title `
pub fn titled_block(title: &str, high_contrast: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(high_contrast))
        .title(Span::styled(
            format!(" {} ", title),
            bold(accent(high_contrast)),
        ))
}

pub fn category_color(category: RecommendationCategory, high_contrast: bool) -> Color {
    if high_contrast {
        return Color::White;
    }
    match category {
        RecommendationCategory::Immediate => Color::Green,
        RecommendationCategory::NearTerm => Color::Blue,
        RecommendationCategory::LongTerm => Color::Magenta,
    }
}

pub fn confidence_color(band: ConfidenceBand, high_contrast: bool) -> Color {
    if high_contrast {
        return Color::White;
    }
    match band {
        ConfidenceBand::High => Color::Green,
        ConfidenceBand::Medium => Color::Yellow,
        ConfidenceBand::Low => Color::Red,
    }
}

pub fn level_color(band: LevelBand, high_contrast: bool) -> Color {
    if high_contrast {
        return Color::White;
    }
    match band {
        LevelBand::Strong => Color::Green,
        LevelBand::Moderate => Color::Yellow,
        LevelBand::Developing => ORANGE,
        LevelBand::Weak => Color::Red,
    }
}

pub fn importance_color(band: ImportanceBand, high_contrast: bool) -> Color {
    if high_contrast {
        return Color::White;
    }
    match band {
        ImportanceBand::Critical => Color::Red,
        ImportanceBand::High => ORANGE,
        ImportanceBand::Moderate => Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_contrast_flattens_colors() {
        assert_eq!(accent(true), Color::White);
        assert_eq!(accent(false), TEAL);
        assert_eq!(
            category_color(RecommendationCategory::NearTerm, true),
            Color::White
        );
        assert_eq!(level_color(LevelBand::Weak, true), Color::White);
    }

    #[test]
    fn test_band_colors() {
        assert_eq!(confidence_color(ConfidenceBand::High, false), Color::Green);
        assert_eq!(confidence_color(ConfidenceBand::Low, false), Color::Red);
        assert_eq!(level_color(LevelBand::Developing, false), ORANGE);
        assert_eq!(importance_color(ImportanceBand::Critical, false), Color::Red);
    }
}
