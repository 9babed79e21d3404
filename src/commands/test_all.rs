//! Test all codes - exhaustive solver evaluation
//!
//! Runs the solver against every code in the space and generates statistics.

use crate::core::Code;
use crate::game::{CodemakerMatch, MatchError, MatchOutcome, Settings};
use crate::solver::{Strategy, all_codes};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single code
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub outcome: MatchOutcome,
}

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub max_turns: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_codes: Vec<(Code, usize)>,
    pub failed_codes: Vec<Code>,
}

/// Run the solver on every code (or the first `limit` codes)
///
/// # Errors
///
/// Returns an error if a solver fails on some secret.
///
/// # Panics
///
/// Panics if the progress bar template fails to parse.
pub fn run_test_all<S: Strategy + Clone + Sync>(
    settings: &Settings,
    strategy: &S,
    limit: Option<usize>,
) -> Result<TestAllStatistics, MatchError> {
    let mut secrets = all_codes(&settings.rules);
    if let Some(limit) = limit {
        secrets.truncate(limit);
    }

    log::info!(
        "testing {} codes ({}, {} turns max)",
        secrets.len(),
        settings.rules,
        settings.max_turns
    );
    println!("🎯 Testing {} codes...", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let total_start = Instant::now();

    let results = secrets
        .into_par_iter()
        .map(|secret| {
            let mut game = CodemakerMatch::new(secret.clone(), settings, strategy.clone())?;
            let outcome = game.play_out()?;
            pb.inc(1);
            Ok(CodeTestResult { secret, outcome })
        })
        .collect::<Result<Vec<_>, MatchError>>();

    pb.finish_with_message("Complete!");
    let results = results?;

    Ok(summarize(settings, &results, total_start.elapsed()))
}

fn summarize(
    settings: &Settings,
    results: &[CodeTestResult],
    total_time: Duration,
) -> TestAllStatistics {
    let solved: Vec<&CodeTestResult> = results
        .iter()
        .filter(|r| r.outcome.codebreaker_won())
        .collect();

    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for result in &solved {
        *guess_distribution.entry(result.outcome.turns()).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.outcome.turns()).sum();
    let average_guesses = if solved.is_empty() {
        0.0
    } else {
        total_guesses as f64 / solved.len() as f64
    };

    let max_guesses = solved.iter().map(|r| r.outcome.turns()).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.outcome.turns()).min().unwrap_or(0);

    let mut hardest_codes: Vec<(Code, usize)> = solved
        .iter()
        .filter(|r| r.outcome.turns() + 1 >= max_guesses)
        .map(|r| (r.secret.clone(), r.outcome.turns()))
        .collect();
    hardest_codes.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_codes.truncate(10);

    let failed_codes: Vec<Code> = results
        .iter()
        .filter(|r| !r.outcome.codebreaker_won())
        .map(|r| r.secret.clone())
        .collect();

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved.len(),
        failed: failed_codes.len(),
        max_turns: settings.max_turns,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        hardest_codes,
        failed_codes,
    }
}

/// Print test-all statistics with colored formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Total time:          {:.2}s", stats.total_time.as_secs_f64());
    println!(
        "  Time per code:       {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in 1..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar_len = (count * 40 / max_count.max(1)).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses:2} guesses: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.hardest_codes.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, guesses) in stats.hardest_codes.iter().take(5) {
            println!("  {} ({} guesses)", code.to_string().yellow(), guesses);
        }
    }

    if !stats.failed_codes.is_empty() {
        println!(
            "\n❌ {}",
            format!("Not solved within {} turns", stats.max_turns).red().bold()
        );
        for code in stats.failed_codes.iter().take(10) {
            println!("  {}", code.to_string().red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::FirstCandidateStrategy;

    #[test]
    fn tests_every_code_in_small_space() {
        let settings = Settings::new(Rules::new(3, 4, true).unwrap(), 12, 1).unwrap();
        let stats = run_test_all(&settings, &FirstCandidateStrategy, None).unwrap();

        assert_eq!(stats.total_codes, 64);
        assert_eq!(stats.solved, 64);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.max_guesses, 5);
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 64);
    }

    #[test]
    fn limit_truncates() {
        let settings = Settings::default();
        let stats = run_test_all(&settings, &FirstCandidateStrategy, Some(20)).unwrap();
        assert_eq!(stats.total_codes, 20);
    }

    #[test]
    fn tight_budget_reports_failures() {
        let settings = Settings::new(Rules::default(), 2, 1).unwrap();
        let stats = run_test_all(&settings, &FirstCandidateStrategy, Some(50)).unwrap();

        assert_eq!(stats.solved + stats.failed, 50);
        assert!(stats.failed > 0);
        assert_eq!(stats.failed_codes.len(), stats.failed);
    }
}
