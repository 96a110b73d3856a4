use crate::components::{Component, EventResult};
use crate::state::{AppState, SubmissionOutcome};
use crate::util::layout::centered_rect;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Screen, render_button};

pub struct FinalizationScreen;

impl FinalizationScreen {
    pub fn new() -> Self {
        Self
    }

    fn symbol(outcome: SubmissionOutcome) -> &'static str {
        match outcome {
            SubmissionOutcome::Success => "✔",
            SubmissionOutcome::Error => "✖",
        }
    }
}

impl Default for FinalizationScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FinalizationScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Enter => {
                state.restart();
                EventResult::Handled
            }
            KeyCode::Char('q') if key.modifiers.is_empty() => EventResult::Exit,
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.theme.palette();
        // A missing outcome means the page was reached without submitting
        let outcome = state.outcome.unwrap_or(SubmissionOutcome::Error);
        let color = if outcome.is_success() {
            palette.success
        } else {
            palette.error
        };

        let area = centered_rect(72, 12, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Symbol
                Constraint::Length(2), // Title
                Constraint::Length(5), // Description
                Constraint::Length(1), // Button
            ])
            .split(area);

        let symbol = Paragraph::new(Span::styled(
            Self::symbol(outcome),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(symbol, chunks[0]);

        let title = Paragraph::new(Span::styled(
            outcome.title(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        let description: Vec<Line> = outcome.description().lines().map(Line::from).collect();
        let description = Paragraph::new(description)
            .style(Style::default().fg(palette.muted))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[2]);

        render_button(frame, chunks[3], "Fazer nova simulação", true, palette);
    }
}

impl Screen for FinalizationScreen {
    fn title(&self) -> &str {
        "Finalização"
    }
}
