use crate::components::text_input::{handle_text_key, render_text_field};
use crate::components::{Component, EventResult};
use crate::state::{AppState, LoanField, StepId};
use crate::util::layout::centered_rect;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Screen, render_button};

pub struct LoanDetailsScreen;

impl LoanDetailsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoanDetailsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LoanDetailsScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                state.loan_details.focused = state.loan_details.focused.next();
                EventResult::Handled
            }
            KeyCode::Enter => {
                state.submit_loan_details();
                EventResult::Handled
            }
            KeyCode::Esc => {
                state.navigate(StepId::PersonalData);
                EventResult::Handled
            }
            _ => {
                if handle_text_key(state.loan_details.focused_field_mut(), key) {
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.theme.palette();
        let form = &state.loan_details;
        let area = centered_rect(56, 15, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(2), // Description
                Constraint::Length(3), // Amount
                Constraint::Length(1),
                Constraint::Length(3), // Term
                Constraint::Length(1),
                Constraint::Length(1), // Buttons
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Detalhes do empréstimo",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, chunks[0]);

        let description =
            Paragraph::new("Informe o valor desejado e o prazo de pagamento para continuarmos.")
                .style(Style::default().fg(palette.muted));
        frame.render_widget(description, chunks[1]);

        let amount_error = form.errors.amount.map(|e| e.to_string());
        render_text_field(
            frame,
            chunks[2],
            "Valor do empréstimo",
            &form.amount,
            form.focused == LoanField::Amount,
            "100.000",
            amount_error.as_deref(),
            palette,
        );

        let term_error = form.errors.term.map(|e| e.to_string());
        render_text_field(
            frame,
            chunks[4],
            "Prazo de pagamento (meses)",
            &form.term,
            form.focused == LoanField::Term,
            "12",
            term_error.as_deref(),
            palette,
        );

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[6]);
        render_button(frame, buttons[0], "Esc Voltar", true, palette);
        render_button(frame, buttons[1], "Simular", !form.is_invalid(), palette);
    }
}

impl Screen for LoanDetailsScreen {
    fn title(&self) -> &str {
        "Detalhes do empréstimo"
    }
}
