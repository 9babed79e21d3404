//! Guess analysis command
//!
//! Shows how a guess would split a candidate set by the feedback it earns.

use crate::core::{Code, Feedback, Rules, score};
use crate::solver::all_codes;
use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub code_length: usize,
    pub total_candidates: usize,
    /// Candidate count per feedback, best feedback first
    pub partitions: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub expected_remaining: f64,
}

/// Group candidates by the feedback `guess` would receive against each
#[must_use]
pub fn partition_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    candidates
        .par_iter()
        .filter_map(|candidate| score(guess, candidate).ok())
        .fold(FxHashMap::default, |mut counts, feedback| {
            *counts.entry(feedback).or_insert(0) += 1;
            counts
        })
        .reduce(FxHashMap::default, |mut a, b| {
            for (feedback, count) in b {
                *a.entry(feedback).or_insert(0) += count;
            }
            a
        })
}

/// Analyze a guess against the full code space of `rules`
///
/// # Errors
///
/// Returns an error if the guess does not follow `rules`.
pub fn analyze_code(guess: &str, rules: &Rules) -> Result<AnalysisResult> {
    let guess = Code::parse(guess, rules).with_context(|| format!("Invalid guess '{guess}'"))?;
    log::info!("analyzing {guess} ({rules})");
    let candidates = all_codes(rules);

    let mut partitions: Vec<(Feedback, usize)> =
        partition_by_feedback(&guess, &candidates).into_iter().collect();
    partitions.sort_by(|a, b| b.0.cmp(&a.0));

    let total_candidates = candidates.len();
    let worst_case = partitions.iter().map(|&(_, n)| n).max().unwrap_or(0);
    let expected_remaining = if total_candidates == 0 {
        0.0
    } else {
        partitions
            .iter()
            .map(|&(_, n)| (n * n) as f64)
            .sum::<f64>()
            / total_candidates as f64
    };

    Ok(AnalysisResult {
        guess,
        code_length: rules.code_length(),
        total_candidates,
        partitions,
        worst_case,
        expected_remaining,
    })
}
