//! Display functions for command results

use super::formatters::{colored_pegs, elimination_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, ScoreResult, SolveResult};
use colored::Colorize;

/// Print the path the solver took to a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let code_length = result.rules.code_length();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  ({})",
        result.secret.to_string().bright_yellow().bold(),
        result.rules
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.guess.to_string().bold(),
            colored_pegs(step.feedback, code_length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}  [{}]",
                step.candidates_before,
                step.candidates_after,
                elimination_bar(step.candidates_before, step.candidates_after, 20).green()
            );
            println!("  Feedback:   {}", step.feedback);
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the feedback one code earns against another
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{} vs {}: {}  ({})",
        result.guess.to_string().bold(),
        result.reference.to_string().bold(),
        colored_pegs(result.feedback, result.code_length),
        result.feedback
    );
}

/// Print how a guess splits the code space
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    println!("   Feedback classes: {}", result.partitions.len());
    println!(
        "   Worst case:       {}",
        result.worst_case.to_string().yellow()
    );
    println!(
        "   Expected:         {} candidates remain",
        format!("{:.1}", result.expected_remaining).bright_yellow()
    );

    println!("\n📈 {}", "Partitions:".bright_cyan().bold());
    let total = result.total_candidates.max(1) as f64;
    for &(feedback, count) in &result.partitions {
        let pct = count as f64 / total * 100.0;
        let bar_width = ((count * 30) / result.worst_case.max(1)).max(1);
        println!(
            "   {} {:>12} {} {count:5} ({pct:5.1}%)",
            colored_pegs(feedback, result.code_length),
            format!("{}E {}P", feedback.exact(), feedback.partial()),
            "█".repeat(bar_width).green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.max_guesses {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_codes as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
