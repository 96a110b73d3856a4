//! Wizard steps and the guards that protect them.

use super::session::SimulationSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    PersonalData,
    LoanDetails,
    Summary,
    Finalization,
}

impl StepId {
    /// Steps shown in the progress header
    pub const PROGRESS: [StepId; 3] = [StepId::PersonalData, StepId::LoanDetails, StepId::Summary];

    pub fn name(&self) -> &'static str {
        match self {
            StepId::PersonalData => "Dados pessoais",
            StepId::LoanDetails => "Detalhes do empréstimo",
            StepId::Summary => "Resumo",
            StepId::Finalization => "Finalização",
        }
    }

    /// Position in the progress header; `None` for steps outside it.
    pub fn index(&self) -> Option<usize> {
        match self {
            StepId::PersonalData => Some(0),
            StepId::LoanDetails => Some(1),
            StepId::Summary => Some(2),
            StepId::Finalization => None,
        }
    }

    /// Where to send the user instead, if the session is not ready for this step.
    pub fn redirect(&self, session: &SimulationSession) -> Option<StepId> {
        let allowed = match self {
            StepId::PersonalData | StepId::Finalization => true,
            StepId::LoanDetails => session.birth_date.is_some(),
            StepId::Summary => session.is_complete(),
        };

        if allowed {
            None
        } else {
            Some(StepId::PersonalData)
        }
    }
}
