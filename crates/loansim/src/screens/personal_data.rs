use crate::components::text_input::{handle_text_key, render_text_field};
use crate::components::{Component, EventResult};
use crate::state::AppState;
use crate::util::layout::centered_rect;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::{Screen, render_button};

pub struct PersonalDataScreen;

impl PersonalDataScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PersonalDataScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for PersonalDataScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if key.code == KeyCode::Enter {
            if state.personal_data.can_continue() {
                state.submit_birth_date();
            }
            return EventResult::Handled;
        }

        if handle_text_key(&mut state.personal_data.birth_date, key) {
            // Any edit dismisses the previous validation error
            state.personal_data.error = None;
            return EventResult::Handled;
        }

        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.theme.palette();
        let form = &state.personal_data;
        let area = centered_rect(64, 14, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Description
                Constraint::Length(1), // Prompt
                Constraint::Length(3), // Birth date
                Constraint::Length(1),
                Constraint::Length(1), // Button
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Simule um crédito com seu carro em garantia",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, chunks[0]);

        let description = Paragraph::new(
            "Faça sua simulação gratuita e descubra as condições personalizadas para seu empréstimo.",
        )
        .style(Style::default().fg(palette.muted))
        .wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[1]);

        let prompt = Paragraph::new("Para começar, informe a sua data de nascimento.")
            .style(Style::default().fg(palette.text));
        frame.render_widget(prompt, chunks[2]);

        render_text_field(
            frame,
            chunks[3],
            "Data de nascimento",
            &form.birth_date,
            true,
            "DD/MM/AAAA",
            form.error.as_deref(),
            palette,
        );

        render_button(frame, chunks[5], "Iniciar", form.can_continue(), palette);
    }
}

impl Screen for PersonalDataScreen {
    fn title(&self) -> &str {
        "Dados pessoais"
    }
}
