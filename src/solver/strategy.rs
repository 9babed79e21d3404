//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Every strategy
//! picks from the consistent candidates only, so any guess it makes could
//! still be the secret.

use crate::core::Code;

/// A strategy for picking the next guess among consistent candidates
pub trait Strategy {
    /// Select the next guess from the remaining candidates
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// First candidate in enumeration order (default, reproducible)
    First(FirstCandidateStrategy),
    /// Uniformly random candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        match self {
            Self::First(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "random".
    /// Defaults to first if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::First(FirstCandidateStrategy),
        }
    }

    /// Short name used on the command line
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::First(_) => "first",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::First(FirstCandidateStrategy)
    }
}

/// Always guesses the first remaining candidate
///
/// Candidates are kept in lexicographic order, so the guess sequence for a
/// given secret is fully reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.first()
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, candidates: &'a [Code]) -> Option<&'a Code> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng())
    }
}
