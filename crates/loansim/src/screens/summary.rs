use crate::components::cards::{Card, render_card};
use crate::components::charts::{render_interest_line, render_payment_bars};
use crate::components::{Component, EventResult};
use crate::state::{AppState, StepId};
use crate::util::format::{format_annual_rate, format_months};
use crossterm::event::{KeyCode, KeyEvent};
use loansim_core::{LoanQuote, format_brl};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Screen, render_button};

pub struct SummaryScreen {
    rng: SmallRng,
}

impl SummaryScreen {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Fixed submission outcomes for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The three headline cards
    pub fn cards(quote: &LoanQuote) -> [Card; 3] {
        [
            Card::new("Valor das parcelas", format_brl(quote.monthly_payment))
                .description(format_months(quote.terms.months)),
            Card::new("Valor Total a Pagar", format_brl(quote.total_payable)),
            Card::new("Total de Juros", format_brl(quote.total_interest))
                .description(format!(
                    "Taxa aplicada: {}",
                    format_annual_rate(quote.annual_rate_percent())
                ))
                .highlighted(),
        ]
    }
}

impl Default for SummaryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SummaryScreen {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Enter => {
                state.submit_simulation(&mut self.rng);
                EventResult::Handled
            }
            KeyCode::Esc => {
                state.navigate(StepId::LoanDetails);
                EventResult::Handled
            }
            KeyCode::Char('q') if key.modifiers.is_empty() => EventResult::Exit,
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let palette = state.theme.palette();

        let Some(quote) = state.quote() else {
            let paragraph = Paragraph::new("Nenhuma simulação disponível.")
                .style(Style::default().fg(palette.muted))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(4), // Cards
                Constraint::Min(8),    // Charts
                Constraint::Length(1), // Buttons
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            "Resultado da Simulação",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let card_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(chunks[1]);
        for (card, card_area) in Self::cards(&quote).iter().zip(card_areas.iter()) {
            render_card(frame, *card_area, card, palette);
        }

        let schedule = quote.schedule();
        let chart_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        render_payment_bars(frame, chart_areas[0], &schedule.bar_series(), palette);
        render_interest_line(frame, chart_areas[1], &schedule.line_series(), palette);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        render_button(frame, buttons[0], "Esc Voltar", true, palette);
        render_button(frame, buttons[1], "Solicitar Empréstimo", true, palette);
    }
}

impl Screen for SummaryScreen {
    fn title(&self) -> &str {
        "Resumo"
    }
}
