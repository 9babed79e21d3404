//! Single matches
//!
//! A match is one secret and one codebreaker with a fixed turn budget.
//! [`CodebreakerMatch`] grades guesses from outside (a human player);
//! [`CodemakerMatch`] lets the solver break a secret chosen by someone else.

use super::Settings;
use crate::core::{Code, CodeError, Feedback, Rules, ScoreError, Scorer, StandardScorer};
use crate::solver::{Solver, SolverError, Strategy};
use std::fmt;

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The codebreaker found the secret on this turn
    Solved { turns: usize },
    /// The turn budget ran out
    OutOfTurns { turns: usize },
}

impl MatchOutcome {
    /// Whether the codebreaker won
    #[must_use]
    pub const fn codebreaker_won(self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// Guesses used
    #[must_use]
    pub const fn turns(self) -> usize {
        match self {
            Self::Solved { turns } | Self::OutOfTurns { turns } => turns,
        }
    }
}

/// Error type for match play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The secret does not follow the rules
    InvalidSecret(CodeError),
    /// The match already has an outcome
    MatchOver,
    /// A guess could not be scored
    Score(ScoreError),
    /// The solver failed
    Solver(SolverError),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSecret(err) => write!(f, "Invalid secret: {err}"),
            Self::MatchOver => write!(f, "The match is already over"),
            Self::Score(err) => write!(f, "Invalid guess: {err}"),
            Self::Solver(err) => write!(f, "Solver failed: {err}"),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSecret(err) => Some(err),
            Self::Score(err) => Some(err),
            Self::Solver(err) => Some(err),
            Self::MatchOver => None,
        }
    }
}

impl From<ScoreError> for MatchError {
    fn from(err: ScoreError) -> Self {
        Self::Score(err)
    }
}

impl From<SolverError> for MatchError {
    fn from(err: SolverError) -> Self {
        Self::Solver(err)
    }
}

/// Decide whether a match is over after `turns` guesses
const fn judge(
    feedback: Feedback,
    turns: usize,
    rules: &Rules,
    max_turns: usize,
) -> Option<MatchOutcome> {
    if feedback.is_perfect(rules.code_length()) {
        Some(MatchOutcome::Solved { turns })
    } else if turns >= max_turns {
        Some(MatchOutcome::OutOfTurns { turns })
    } else {
        None
    }
}

/// A match where guesses come from outside and are graded against a secret
#[derive(Debug, Clone)]
pub struct CodebreakerMatch {
    secret: Code,
    scorer: StandardScorer,
    max_turns: usize,
    guesses: Vec<(Code, Feedback)>,
    outcome: Option<MatchOutcome>,
}

impl CodebreakerMatch {
    /// Start a match against `secret`
    ///
    /// # Errors
    /// Returns `MatchError::InvalidSecret` if the secret breaks the rules.
    pub fn new(secret: Code, settings: &Settings) -> Result<Self, MatchError> {
        secret
            .validate(&settings.rules)
            .map_err(MatchError::InvalidSecret)?;

        Ok(Self {
            secret,
            scorer: StandardScorer::new(settings.rules),
            max_turns: settings.max_turns,
            guesses: Vec::new(),
            outcome: None,
        })
    }

    /// Grade a guess and use up one turn
    ///
    /// # Errors
    /// Returns `MatchError` if the match is over or the guess cannot be
    /// scored. A rejected guess does not use a turn.
    pub fn submit_guess(&mut self, guess: &Code) -> Result<Feedback, MatchError> {
        if self.outcome.is_some() {
            return Err(MatchError::MatchOver);
        }

        let feedback = self.scorer.score(guess, &self.secret)?;
        self.guesses.push((guess.clone(), feedback));

        self.outcome = judge(
            feedback,
            self.guesses.len(),
            self.scorer.rules(),
            self.max_turns,
        );
        if let Some(outcome) = self.outcome {
            log::info!("codebreaker match over: {outcome:?}");
        }

        Ok(feedback)
    }

    /// Turns left before the codebreaker loses
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_turns.saturating_sub(self.guesses.len())
    }

    /// Guesses made so far with their feedback
    #[must_use]
    pub fn guesses(&self) -> &[(Code, Feedback)] {
        &self.guesses
    }

    /// How the match ended, if it has
    #[must_use]
    pub const fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// The secret being guessed
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }
}

/// One turn of the solver against a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A match where the solver breaks a known secret
#[derive(Debug, Clone)]
pub struct CodemakerMatch<S: Strategy> {
    secret: Code,
    scorer: StandardScorer,
    max_turns: usize,
    solver: Solver<S>,
    turns: Vec<TurnRecord>,
    outcome: Option<MatchOutcome>,
}

impl<S: Strategy> CodemakerMatch<S> {
    /// Start a match where a fresh solver attacks `secret`
    ///
    /// # Errors
    /// Returns `MatchError::InvalidSecret` if the secret breaks the rules.
    pub fn new(secret: Code, settings: &Settings, strategy: S) -> Result<Self, MatchError> {
        secret
            .validate(&settings.rules)
            .map_err(MatchError::InvalidSecret)?;

        Ok(Self {
            secret,
            scorer: StandardScorer::new(settings.rules),
            max_turns: settings.max_turns,
            solver: Solver::new(settings.rules, strategy),
            turns: Vec::new(),
            outcome: None,
        })
    }

    /// Let the solver make one guess and feed it the real feedback
    ///
    /// # Errors
    /// Returns `MatchError` if the match is over or the solver fails.
    pub fn play_turn(&mut self) -> Result<TurnRecord, MatchError> {
        if self.outcome.is_some() {
            return Err(MatchError::MatchOver);
        }

        let candidates_before = self.solver.candidate_count();
        let guess = self.solver.next_guess()?;
        let feedback = self.scorer.score(&guess, &self.secret)?;
        self.solver.record_feedback(feedback)?;

        self.outcome = judge(
            feedback,
            self.solver.guess_count(),
            self.scorer.rules(),
            self.max_turns,
        );
        if let Some(outcome) = self.outcome {
            log::info!("codemaker match over: {outcome:?}");
        }

        let record = TurnRecord {
            guess,
            feedback,
            candidates_before,
            candidates_after: self.solver.candidate_count(),
        };
        self.turns.push(record.clone());
        Ok(record)
    }

    /// Play turns until the match is decided
    ///
    /// # Errors
    /// Returns `MatchError` if the solver fails along the way.
    pub fn play_out(&mut self) -> Result<MatchOutcome, MatchError> {
        loop {
            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }
            self.play_turn()?;
        }
    }

    /// Turns played so far
    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// How the match ended, if it has
    #[must_use]
    pub const fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    /// The solver playing this match
    #[must_use]
    pub const fn solver(&self) -> &Solver<S> {
        &self.solver
    }

    /// The secret being broken
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }
}
