//! Code solving command
//!
//! Lets the solver break a given secret and returns the solution path.

use crate::core::{Code, Feedback, Rules};
use crate::game::{CodemakerMatch, Settings};
use crate::solver::Strategy;
use anyhow::{Context, Result};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub settings: Settings,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String, settings: Settings) -> Self {
        Self { secret, settings }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
    pub rules: Rules,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific code with a fresh solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not follow the configured rules
/// - The solver fails part way through
pub fn solve_code<S: Strategy>(config: SolveConfig, strategy: S) -> Result<SolveResult> {
    let rules = config.settings.rules;
    let secret = Code::parse(&config.secret, &rules)
        .with_context(|| format!("Invalid secret '{}'", config.secret))?;

    log::info!(
        "solving {secret} ({rules}, {} turns max)",
        config.settings.max_turns
    );
    let mut game = CodemakerMatch::new(secret.clone(), &config.settings, strategy)?;
    let outcome = game.play_out()?;

    let guesses = game
        .turns()
        .iter()
        .map(|turn| GuessStep {
            guess: turn.guess.clone(),
            feedback: turn.feedback,
            candidates_before: turn.candidates_before,
            candidates_after: turn.candidates_after,
        })
        .collect();

    Ok(SolveResult {
        success: outcome.codebreaker_won(),
        guesses,
        secret,
        rules,
    })
}
