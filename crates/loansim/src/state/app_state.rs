use jiff::civil::Date;
use loansim_core::{FormErrors, LoanForm, LoanQuote, validate_birth_date};
use rand::Rng;

use super::forms::{LoanDetailsForm, PersonalDataForm};
use super::session::{LoanData, SimulationSession};
use super::steps::StepId;
use super::submission::SubmissionOutcome;
use super::theme::Theme;
use crate::data::storage::{DataDirectory, Preferences};
use crate::util::format::{format_birth_date, parse_birth_date};

/// Everything the wizard screens read and mutate
#[derive(Debug)]
pub struct AppState {
    pub step: StepId,
    pub session: SimulationSession,
    pub theme: Theme,

    // Per-screen state
    pub personal_data: PersonalDataForm,
    pub loan_details: LoanDetailsForm,
    pub outcome: Option<SubmissionOutcome>,

    /// Where preferences and the session are saved; `None` keeps everything in memory
    pub storage: Option<DataDirectory>,
    pub error_message: Option<String>,
    pub exit: bool,
    /// Reference date for age calculations
    pub today: Date,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(jiff::Zoned::now().date())
    }
}

impl AppState {
    pub fn new(today: Date) -> Self {
        Self {
            step: StepId::PersonalData,
            session: SimulationSession::default(),
            theme: Theme::default(),
            personal_data: PersonalDataForm::default(),
            loan_details: LoanDetailsForm::default(),
            outcome: None,
            storage: None,
            error_message: None,
            exit: false,
            today,
        }
    }

    /// Build the state from a data directory.
    ///
    /// Unreadable files are logged and replaced by defaults. The theme comes
    /// from `theme_override`, then the saved preference, then the terminal.
    pub fn with_storage(storage: DataDirectory, theme_override: Option<Theme>, today: Date) -> Self {
        let mut state = Self::new(today);

        let preferences = storage.load_preferences().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load preferences, using defaults");
            Preferences::default()
        });
        state.theme = theme_override
            .or(preferences.theme)
            .or_else(Theme::detect)
            .unwrap_or_default();

        match storage.load_session() {
            Ok(Some(session)) => {
                tracing::info!(complete = session.is_complete(), "Resuming saved session");
                state.session = session;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "Failed to load session, starting fresh"),
        }

        state.storage = Some(storage);
        state.navigate(StepId::PersonalData);
        state
    }

    /// Move to `target`, or to wherever its guard redirects.
    pub fn navigate(&mut self, target: StepId) {
        let step = match target.redirect(&self.session) {
            Some(redirect) => {
                tracing::debug!(
                    requested = target.name(),
                    redirect = redirect.name(),
                    "Step guard redirected"
                );
                redirect
            }
            None => target,
        };

        if step != self.step {
            tracing::info!(step = step.name(), "Entering step");
        }
        self.step = step;
        self.clear_error();

        match step {
            StepId::PersonalData => {
                if let Some(birth_date) = self.session.birth_date {
                    self.personal_data
                        .birth_date
                        .set_value(&format_birth_date(birth_date));
                }
                self.personal_data.error = None;
            }
            StepId::LoanDetails => {
                self.loan_details.prefill(&self.session.loan_data);
                self.loan_details.errors = FormErrors::default();
            }
            StepId::Summary | StepId::Finalization => {}
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::info!(theme = self.theme.name(), "Theme toggled");

        let Some(storage) = &self.storage else {
            return;
        };
        let preferences = Preferences {
            theme: Some(self.theme),
        };
        if let Err(e) = storage.save_preferences(&preferences) {
            tracing::warn!(error = %e, "Failed to save preferences");
            self.set_error(format!("Não foi possível salvar o tema: {}", e));
        }
    }

    /// Validate the typed birth date and continue to the loan details step.
    ///
    /// Returns whether the wizard moved on; otherwise the form holds the error.
    pub fn submit_birth_date(&mut self) -> bool {
        let parsed = parse_birth_date(&self.personal_data.birth_date.value);

        match validate_birth_date(parsed, self.today) {
            Ok(birth_date) => {
                self.personal_data.error = None;
                self.session.birth_date = Some(birth_date);
                self.persist_session();
                self.navigate(StepId::LoanDetails);
                true
            }
            Err(e) => {
                tracing::debug!(error = ?e, "Birth date rejected");
                self.personal_data.error = Some(e.to_string());
                false
            }
        }
    }

    /// Validate the loan form and continue to the summary step.
    pub fn submit_loan_details(&mut self) -> bool {
        let form = &self.loan_details;

        match LoanForm::parse(&form.amount.value, &form.term.value) {
            Ok(loan) => {
                self.session.loan_data = LoanData {
                    amount: Some(form.amount.value.trim().to_string()),
                    term: Some(loan.months),
                };
                self.loan_details.errors = FormErrors::default();
                self.persist_session();
                self.navigate(StepId::Summary);
                true
            }
            Err(errors) => {
                tracing::debug!(%errors, "Loan form rejected");
                self.loan_details.errors = errors;
                false
            }
        }
    }

    /// Figures for the summary step; `None` until the session is complete.
    pub fn quote(&self) -> Option<LoanQuote> {
        self.session.quote(self.today)
    }

    /// Request the simulated loan and show the outcome.
    pub fn submit_simulation<R: Rng + ?Sized>(&mut self, rng: &mut R) -> SubmissionOutcome {
        let outcome = SubmissionOutcome::draw(rng);
        tracing::info!(success = outcome.is_success(), "Simulation submitted");

        self.outcome = Some(outcome);
        self.navigate(StepId::Finalization);
        outcome
    }

    /// Forget everything entered and start over.
    pub fn restart(&mut self) {
        tracing::info!("Starting a new simulation");
        self.session.clear();
        self.personal_data = PersonalDataForm::default();
        self.loan_details = LoanDetailsForm::default();
        self.outcome = None;
        self.persist_session();
        self.navigate(StepId::PersonalData);
    }

    /// Write the session to disk, or remove the file once it is empty.
    pub fn persist_session(&mut self) {
        let Some(storage) = &self.storage else {
            return;
        };

        let result = if self.session.is_empty() {
            storage.clear_session()
        } else {
            storage.save_session(&self.session)
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to save session");
            self.set_error(format!("Não foi possível salvar a sessão: {}", e));
        }
    }

    /// Clean exit: the saved session does not outlive the application.
    pub fn shutdown(&mut self) {
        if let Some(storage) = &self.storage
            && let Err(e) = storage.clear_session()
        {
            tracing::warn!(error = %e, "Failed to remove session file");
        }
        self.exit = true;
    }
}
