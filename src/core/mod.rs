//! Core domain types for Mastermind
//!
//! Codes, match rules, feedback and scoring. Everything here is pure and
//! free of I/O.

mod code;
mod feedback;
mod rules;
mod scorer;

pub use code::{Code, CodeError};
pub use feedback::{Feedback, ScoreError, score};
pub use rules::{MAX_ALPHABET_SIZE, MAX_CODE_LENGTH, MAX_SPACE_SIZE, Rules, RulesError};
pub use scorer::{Scorer, StandardScorer};
