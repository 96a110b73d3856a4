pub mod finalization;
pub mod loan_details;
pub mod personal_data;
pub mod summary;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::components::Component;
use crate::state::Palette;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}

/// Draw a one-line button label; disabled buttons are dimmed.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, enabled: bool, palette: &Palette) {
    let style = if enabled {
        Style::default()
            .fg(palette.background)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.muted).bg(palette.border)
    };

    let button = Paragraph::new(Span::styled(format!("  {}  ", label), style))
        .alignment(Alignment::Center);
    frame.render_widget(button, area);
}
