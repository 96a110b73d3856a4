//! Common styling utilities for TUI components
//!
//! Every helper takes the active [`Palette`] so the same widget code draws
//! both themes.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::state::Palette;

/// Base style for text on the themed background
pub fn base_style(palette: &Palette) -> Style {
    Style::default().fg(palette.text).bg(palette.background)
}

pub fn muted_style(palette: &Palette) -> Style {
    Style::default().fg(palette.muted)
}

pub fn error_style(palette: &Palette) -> Style {
    Style::default().fg(palette.error)
}

/// Create a block with a title that shows focused state via border color.
///
/// # Example
/// ```ignore
/// let block = focused_block("Valor", is_focused, palette);
/// frame.render_widget(Paragraph::new("...").block(block), area);
/// ```
pub fn focused_block(title: &str, focused: bool, palette: &Palette) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(palette.highlight)
    } else {
        Style::default().fg(palette.border)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Line::from(format!(" {} ", title)).fg(palette.text))
}

/// Block with an error message on the bottom border
pub fn field_block(
    title: &str,
    focused: bool,
    error: Option<&str>,
    palette: &Palette,
) -> Block<'static> {
    let mut block = focused_block(title, focused, palette);

    if let Some(error) = error {
        block = block
            .border_style(error_style(palette))
            .title_bottom(Line::from(format!(" {} ", error)).fg(palette.error));
    }

    block
}

/// Plain card container
pub fn card_block(title: &str, palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Line::from(format!(" {} ", title)).fg(palette.muted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Theme;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block("Prazo", true, Theme::Light.palette());
        assert!(format!("{:?}", block).contains("Prazo"));
    }

    #[test]
    fn test_field_block_shows_error() {
        let block = field_block(
            "Valor",
            false,
            Some("Informe o valor do empréstimo."),
            Theme::Dark.palette(),
        );
        assert!(format!("{:?}", block).contains("Informe o valor"));
    }
}
