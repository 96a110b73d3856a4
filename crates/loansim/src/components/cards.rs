use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::Palette;
use crate::util::styles::{card_block, muted_style};

/// A headline figure with an optional footnote
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub value: String,
    pub description: Option<String>,
    /// Draw the value with the highlight color instead of the accent
    pub highlight: bool,
}

impl Card {
    pub fn new(title: &'static str, value: String) -> Self {
        Self {
            title,
            value,
            description: None,
            highlight: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }
}

pub fn render_card(frame: &mut Frame, area: Rect, card: &Card, palette: &Palette) {
    let value_color = if card.highlight {
        palette.highlight
    } else {
        palette.accent
    };

    let mut lines = vec![Line::from(Span::styled(
        card.value.clone(),
        Style::default()
            .fg(value_color)
            .add_modifier(Modifier::BOLD),
    ))];

    if let Some(description) = &card.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            muted_style(palette),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(card_block(card.title, palette));

    frame.render_widget(paragraph, area);
}
