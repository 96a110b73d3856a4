use rand::Rng;

/// Result of requesting the simulated loan.
///
/// No request actually leaves the application: the outcome is a coin flip,
/// so both finalization screens can be exercised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionOutcome {
    Success,
    Error,
}

impl SubmissionOutcome {
    /// Probability that a submission succeeds
    pub const SUCCESS_PROBABILITY: f64 = 0.5;

    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(Self::SUCCESS_PROBABILITY) {
            SubmissionOutcome::Success
        } else {
            SubmissionOutcome::Error
        }
    }

    pub fn is_success(&self) -> bool {
        *self == SubmissionOutcome::Success
    }

    pub fn title(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success => "Simulação realizada com sucesso!",
            SubmissionOutcome::Error => "Ops! Não conseguimos processar sua simulação.",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success => {
                "Em breve, você receberá um e-mail com todos os detalhes.\n\
                 Nossa equipe também poderá entrar em contato para tirar dúvidas e ajudar você no que for necessário."
            }
            SubmissionOutcome::Error => {
                "Algo deu errado durante o processo.\n\
                 Por favor, tente novamente mais tarde.\n\
                 Se o problema persistir, entre em contato com o nosso suporte para que possamos ajudar."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_draw_is_reproducible_with_seed() {
        let mut rng_a = rand::rngs::SmallRng::seed_from_u64(42);
        let mut rng_b = rand::rngs::SmallRng::seed_from_u64(42);
        for _ in 0..16 {
            assert_eq!(
                SubmissionOutcome::draw(&mut rng_a),
                SubmissionOutcome::draw(&mut rng_b)
            );
        }
    }

    #[test]
    fn test_draw_produces_both_outcomes() {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
        let outcomes: Vec<_> = (0..200).map(|_| SubmissionOutcome::draw(&mut rng)).collect();
        assert!(outcomes.iter().any(|o| o.is_success()));
        assert!(outcomes.iter().any(|o| !o.is_success()));
    }

    #[test]
    fn test_messages() {
        assert!(SubmissionOutcome::Success.title().contains("sucesso"));
        assert_eq!(
            SubmissionOutcome::Error.description().lines().count(),
            3
        );
    }
}
