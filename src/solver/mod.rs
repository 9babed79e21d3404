//! Mastermind codebreaking
//!
//! Candidate enumeration, guess selection strategies and the solver that
//! narrows candidates on feedback.

mod candidates;
mod engine;
pub mod strategy;

pub use candidates::all_codes;
pub use engine::{Solver, SolverError, SolverState, seed_guess};
pub use strategy::{FirstCandidateStrategy, RandomStrategy, Strategy, StrategyType};
