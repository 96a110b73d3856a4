use super::{Component, EventResult};
use crate::state::{AppState, StepId};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Wizard header: numbered steps with the current one highlighted
pub struct StepProgress;

impl StepProgress {
    pub fn new() -> Self {
        Self
    }

    fn step_spans(state: &AppState) -> Vec<Span<'static>> {
        let palette = state.theme.palette();
        let current = state.step.index();
        let mut spans = Vec::new();

        for (idx, step) in StepId::PROGRESS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" ── ", Style::default().fg(palette.border)));
            }

            let content = format!("[{}] {}", idx + 1, step.name());
            let style = match current {
                Some(current) if current == idx => Style::default()
                    .fg(palette.highlight)
                    .add_modifier(Modifier::BOLD),
                // Completed steps, or every step once the wizard is finished
                Some(current) if idx < current => Style::default().fg(palette.accent),
                None => Style::default().fg(palette.accent),
                _ => Style::default().fg(palette.muted),
            };
            spans.push(Span::styled(content, style));
        }

        spans
    }
}

impl Default for StepProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StepProgress {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.theme.palette();
        let title = Line::from(vec![
            Span::styled(
                " Simulador de Crédito ",
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("(tema {}) ", state.theme.name()),
                Style::default().fg(palette.muted),
            ),
        ]);

        let paragraph = Paragraph::new(Line::from(Self::step_spans(state))).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border))
                .title(title),
        );

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_current_step_is_highlighted() {
        let state = AppState::new(date(2025, 6, 15));
        let spans = StepProgress::step_spans(&state);
        let palette = state.theme.palette();

        // Three steps and two separators
        assert_eq!(spans.len(), 5);
        assert_eq!(spans[0].content, "[1] Dados pessoais");
        assert_eq!(spans[0].style.fg, Some(palette.highlight));
        assert_eq!(spans[2].style.fg, Some(palette.muted));
    }
}
