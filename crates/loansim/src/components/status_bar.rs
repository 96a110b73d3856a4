use super::{Component, EventResult};
use crate::state::{AppState, StepId};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn get_help_text(state: &AppState) -> &'static str {
        match state.step {
            StepId::PersonalData => "DD/MM/AAAA | Enter: iniciar | Ctrl+T: tema | Ctrl+Q: sair",
            StepId::LoanDetails => {
                "Tab: trocar campo | Enter: simular ou apontar erros | Esc: voltar | Ctrl+T: tema | Ctrl+Q: sair"
            }
            StepId::Summary => {
                "Enter: solicitar empréstimo | Esc: voltar | Ctrl+T: tema | q: sair"
            }
            StepId::Finalization => "Enter: nova simulação | Ctrl+T: tema | q: sair",
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.theme.palette();

        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Erro: ", Style::default().fg(palette.error)),
                Span::styled(error.clone(), Style::default().fg(palette.text)),
            ])
        } else {
            Line::from(Span::styled(
                Self::get_help_text(state),
                Style::default().fg(palette.muted),
            ))
        };

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(palette.border)),
        );

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 2)).unwrap();
        terminal
            .draw(|frame| StatusBar::new().render(frame, frame.area(), state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_loan_details_help_mentions_validation() {
        let mut state = AppState::new(date(2025, 6, 15));
        state.session.birth_date = Some(date(1990, 5, 10));
        state.navigate(StepId::LoanDetails);

        assert!(rendered(&state).contains("Enter: simular ou apontar erros"));
    }

    #[test]
    fn test_error_replaces_help() {
        let mut state = AppState::new(date(2025, 6, 15));
        state.set_error("falha ao salvar".to_string());

        let text = rendered(&state);
        assert!(text.contains("Erro: falha ao salvar"));
        assert!(!text.contains("Enter: iniciar"));
    }
}
