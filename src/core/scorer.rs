//! Scoring as a capability
//!
//! The solver grades candidates through this trait rather than calling
//! [`score`] directly, so alternative graders can be plugged in for tests.

use super::{Code, Feedback, Rules, ScoreError, score};

/// Something that can grade a guess against a reference code
pub trait Scorer {
    /// Compute the feedback `guess` receives against `reference`
    ///
    /// # Errors
    /// Returns `ScoreError` when the codes break the scorer's contract.
    fn score(&self, guess: &Code, reference: &Code) -> Result<Feedback, ScoreError>;
}

/// Standard Mastermind scoring, checked against the rules of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardScorer {
    rules: Rules,
}

impl StandardScorer {
    /// Create a scorer for codes that follow `rules`
    #[must_use]
    pub const fn new(rules: Rules) -> Self {
        Self { rules }
    }

    /// The rules codes are checked against
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    fn check(&self, code: &Code) -> Result<(), ScoreError> {
        if code.len() != self.rules.code_length() {
            return Err(ScoreError::WrongLength {
                expected: self.rules.code_length(),
                actual: code.len(),
            });
        }

        match code.pegs().iter().find(|&&p| !self.rules.is_valid_peg(p)) {
            Some(&peg) => Err(ScoreError::PegOutOfRange {
                peg,
                alphabet_size: self.rules.alphabet_size(),
            }),
            None => Ok(()),
        }
    }
}

impl Scorer for StandardScorer {
    fn score(&self, guess: &Code, reference: &Code) -> Result<Feedback, ScoreError> {
        self.check(guess)?;
        self.check(reference)?;
        score(guess, reference)
    }
}
