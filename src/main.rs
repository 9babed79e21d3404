//! Mastermind - CLI
//!
//! Play Mastermind against the computer, or let the candidate-elimination
//! solver assist, solve, analyze and benchmark.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        SolveConfig, analyze_code, print_test_all_statistics, run_benchmark, run_play,
        run_test_all, score_codes, solve_code,
    },
    core::Rules,
    game::{Settings, generate_secret},
    output::{
        print_analysis_result, print_benchmark_result, print_score_result, print_solve_result,
    },
    solver::StrategyType,
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind game and candidate-elimination solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pegs per code
    #[arg(short, long, global = true, default_value_t = 4)]
    length: usize,

    /// Number of peg values (colors); pegs range over 0..colors
    #[arg(short, long, global = true, default_value_t = 6)]
    colors: u8,

    /// Forbid repeated values within a code
    #[arg(long, global = true)]
    no_duplicates: bool,

    /// Guesses the codebreaker gets per round
    #[arg(long, global = true, default_value_t = 12)]
    max_turns: usize,

    /// Rounds in a game of play
    #[arg(long, global = true, default_value_t = 4)]
    rounds: usize,

    /// Strategy: first (default), random
    #[arg(short, long, global = true, default_value = "first")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer, swapping roles each round (default)
    Play,

    /// Interactive TUI assistant for a physical board
    Assist,

    /// Let the solver break a given secret
    Solve {
        /// The secret code, e.g. 2201
        secret: String,

        /// Show candidate counts for each step
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score a guess against a reference code
    Score {
        guess: String,
        reference: String,
    },

    /// Show how a guess splits the code space
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,
    },

    /// Run the solver against every code in the space
    TestAll {
        /// Limit number of codes to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let rules = Rules::new(self.length, self.colors, !self.no_duplicates)
            .context("Invalid game rules")?;
        Settings::new(rules, self.max_turns, self.rounds).context("Invalid game settings")
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    let strategy = StrategyType::from_name(&cli.strategy);
    log::info!("rules: {}, strategy: {}", settings.rules, strategy.name());

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            run_play(&settings, &strategy)?;
            Ok(())
        }
        Commands::Assist => run_assist_command(settings.rules, strategy),
        Commands::Solve { secret, verbose } => {
            let result = solve_code(SolveConfig::new(secret, settings), strategy)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Score { guess, reference } => {
            let result = score_codes(&guess, &reference, &settings.rules)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let result = analyze_code(&guess, &settings.rules)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => run_benchmark_command(&settings, strategy, count),
        Commands::TestAll { limit } => run_test_all_command(&settings, strategy, limit),
    }
}

fn run_assist_command(rules: Rules, strategy: StrategyType) -> Result<()> {
    use mastermind_solver::interactive::{App, run_tui};

    run_tui(App::new(rules, strategy))
}

fn run_benchmark_command(settings: &Settings, strategy: StrategyType, count: usize) -> Result<()> {
    println!(
        "Running benchmark on {count} random secrets ({})...",
        settings.rules
    );

    let mut rng = rand::rng();
    let secrets: Vec<_> = (0..count)
        .map(|_| generate_secret(&settings.rules, &mut rng))
        .collect();

    let result = run_benchmark(settings, &strategy, &secrets)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(
    settings: &Settings,
    strategy: StrategyType,
    limit: Option<usize>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Exhaustive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nRules: {}", settings.rules);
    println!("Code space: {} codes", settings.rules.space_size());
    println!("Strategy: {}", strategy.name());
    println!();

    let stats = run_test_all(settings, &strategy, limit)?;
    print_test_all_statistics(&stats);
    Ok(())
}
