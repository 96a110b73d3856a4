use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Padding},
};

use crate::components::{
    Component, EventResult, status_bar::StatusBar, step_progress::StepProgress,
};
use crate::data::storage::DataDirectory;
use crate::screens::{
    Screen, finalization::FinalizationScreen, loan_details::LoanDetailsScreen,
    personal_data::PersonalDataScreen, summary::SummaryScreen,
};
use crate::state::{AppState, StepId, Theme};
use crate::util::styles::base_style;

pub struct App {
    state: AppState,
    step_progress: StepProgress,
    status_bar: StatusBar,
    personal_data_screen: PersonalDataScreen,
    loan_details_screen: LoanDetailsScreen,
    summary_screen: SummaryScreen,
    finalization_screen: FinalizationScreen,
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            step_progress: StepProgress::new(),
            status_bar: StatusBar::new(),
            personal_data_screen: PersonalDataScreen::new(),
            loan_details_screen: LoanDetailsScreen::new(),
            summary_screen: SummaryScreen::new(),
            finalization_screen: FinalizationScreen::new(),
        }
    }

    /// Create app backed by a data directory
    pub fn with_data_dir(data_dir: DataDirectory, theme: Option<Theme>) -> Self {
        let today = jiff::Zoned::now().date();
        Self::new(AppState::with_storage(data_dir, theme, today))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        self.state.shutdown();
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let palette = self.state.theme.palette();

        // Paint the themed background before any widget
        frame.render_widget(
            Block::default().style(base_style(palette)),
            frame.area(),
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Step progress
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.step_progress.render(frame, chunks[0], &self.state);

        let state = &self.state;
        let screen: &mut dyn Screen = match state.step {
            StepId::PersonalData => &mut self.personal_data_screen,
            StepId::LoanDetails => &mut self.loan_details_screen,
            StepId::Summary => &mut self.summary_screen,
            StepId::Finalization => &mut self.finalization_screen,
        };

        let block = Block::default()
            .borders(Borders::NONE)
            .padding(Padding::new(1, 1, 1, 0))
            .title_bottom(Line::from(format!(" {} ", screen.title())).right_aligned())
            .style(Style::default().fg(palette.muted));
        let content = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        screen.render(frame, content, state);

        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        // Global key bindings
        match key_event.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('t') if ctrl => {
                self.state.toggle_theme();
                return;
            }
            _ => {}
        }

        let state = &mut self.state;
        let result = match state.step {
            StepId::PersonalData => self.personal_data_screen.handle_key(key_event, state),
            StepId::LoanDetails => self.loan_details_screen.handle_key(key_event, state),
            StepId::Summary => self.summary_screen.handle_key(key_event, state),
            StepId::Finalization => self.finalization_screen.handle_key(key_event, state),
        };

        match result {
            EventResult::Exit => self.state.exit = true,
            // Esc dismisses the status bar error when the screen has no use for it
            EventResult::NotHandled if key_event.code == KeyCode::Esc => self.state.clear_error(),
            _ => {}
        }
    }
}
