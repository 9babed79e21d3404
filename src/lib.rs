//! Mastermind Solver
//!
//! A Mastermind game with a candidate-elimination codebreaker. Codes are
//! fixed-length sequences of small integers; feedback counts exact and
//! partial matches.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Feedback, Rules, score};
//! use mastermind_solver::solver::{Solver, StrategyType};
//!
//! let secret = Code::from_pegs(vec![3, 4, 4, 0]);
//! let mut solver = Solver::new(Rules::default(), StrategyType::default());
//!
//! while !solver.is_solved() {
//!     let guess = solver.next_guess().unwrap();
//!     let feedback = score(&guess, &secret).unwrap();
//!     solver.record_feedback(feedback).unwrap();
//! }
//! assert_eq!(solver.history().last().map(|(g, _)| g), Some(&secret));
//! assert_eq!(score(&secret, &secret).unwrap(), Feedback::perfect(4));
//! ```

// Core domain types
pub mod core;

// Codebreaking
pub mod solver;

// Matches, rounds and scoring between players
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
