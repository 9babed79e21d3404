//! Benchmark command
//!
//! Tests solver performance across many secrets.

use crate::core::Code;
use crate::game::{CodemakerMatch, MatchError, Settings};
use crate::solver::Strategy;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Play one match per secret and collect guess counts
///
/// Every match gets its own solver; matches run in parallel.
///
/// # Errors
///
/// Returns an error if a secret breaks the rules or a solver fails.
pub fn run_benchmark<S: Strategy + Clone + Sync>(
    settings: &Settings,
    strategy: &S,
    secrets: &[Code],
) -> Result<BenchmarkResult, MatchError> {
    log::info!(
        "benchmarking {} secrets ({}, {} turns max)",
        secrets.len(),
        settings.rules,
        settings.max_turns
    );
    let start = Instant::now();

    let outcomes = secrets
        .par_iter()
        .map(|secret| CodemakerMatch::new(secret.clone(), settings, strategy.clone())?.play_out())
        .collect::<Result<Vec<_>, _>>()?;

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for outcome in &outcomes {
        *distribution.entry(outcome.turns()).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_codes = outcomes.len();
    let total_guesses: usize = outcomes.iter().map(|o| o.turns()).sum();

    Ok(BenchmarkResult {
        total_codes,
        solved: outcomes.iter().filter(|o| o.codebreaker_won()).count(),
        total_guesses,
        average_guesses: if total_codes == 0 {
            0.0
        } else {
            total_guesses as f64 / total_codes as f64
        },
        min_guesses: outcomes.iter().map(|o| o.turns()).min().unwrap_or(0),
        max_guesses: outcomes.iter().map(|o| o.turns()).max().unwrap_or(0),
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
