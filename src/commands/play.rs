//! Console game mode
//!
//! Human against computer over several rounds, swapping codebreaker and
//! codemaker each round. Text in, text out, so any reader and writer works.

use crate::core::{Code, Rules};
use crate::game::{
    CodebreakerMatch, CodemakerMatch, MatchOutcome, Role, Scoreboard, Settings, Verdict,
    generate_secret,
};
use crate::output::formatters::colored_pegs;
use crate::solver::Strategy;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Play a full game on stdin/stdout with a thread-local random generator
///
/// # Errors
///
/// Returns an error on I/O failure or if the solver breaks down.
pub fn run_play<S: Strategy + Clone>(settings: &Settings, strategy: &S) -> Result<Scoreboard> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_play_with(settings, strategy, &mut input, &mut output, &mut rand::rng())
}

/// Play a full game on the given streams
///
/// Stops early when the player types `quit` or input runs out; the
/// scoreboard then covers the rounds finished so far.
///
/// # Errors
///
/// Returns an error on I/O failure or if the solver breaks down.
pub fn run_play_with<S, R, W, G>(
    settings: &Settings,
    strategy: &S,
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> Result<Scoreboard>
where
    S: Strategy + Clone,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    log::info!(
        "playing {} rounds ({}, {} turns max)",
        settings.rounds,
        settings.rules,
        settings.max_turns
    );
    print_welcome(settings, output)?;
    let mut scoreboard = Scoreboard::default();

    for round in 1..=settings.rounds {
        let role = Role::for_round(round);
        writeln!(
            output,
            "\n{}",
            format!("Round {round} of {}: you are the {role}", settings.rounds)
                .bright_cyan()
                .bold()
        )?;

        let outcome = match role {
            Role::Codebreaker => {
                let secret = generate_secret(&settings.rules, rng);
                log::debug!("round {round} secret is {secret}");
                codebreaker_round(secret, settings, input, output)?
            }
            Role::Codemaker => codemaker_round(settings, strategy, input, output)?,
        };

        let Some(outcome) = outcome else {
            writeln!(output, "\n👋 Thanks for playing!")?;
            return Ok(scoreboard);
        };

        scoreboard.record(role, outcome);
        writeln!(
            output,
            "Score: you {} - computer {}",
            scoreboard.human_wins, scoreboard.computer_wins
        )?;
    }

    print_verdict(&scoreboard, output)?;
    Ok(scoreboard)
}

fn print_welcome<W: Write>(settings: &Settings, output: &mut W) -> io::Result<()> {
    let rules = &settings.rules;

    writeln!(output, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(output, "║             Welcome to Mastermind!           ║")?;
    writeln!(output, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(output, "Codes are {rules}.")?;
    writeln!(
        output,
        "We play {} rounds and swap roles each round; the codebreaker has {} guesses.",
        settings.rounds, settings.max_turns
    )?;
    writeln!(
        output,
        "After each guess: {} marks a right value in the right place,",
        "●".bright_red()
    )?;
    writeln!(
        output,
        "{} a right value in the wrong place.",
        "○".bright_white()
    )?;
    writeln!(output, "Type codes as digits, e.g. {}.", example_code(rules))?;
    writeln!(output, "Type 'quit' at any prompt to stop.")
}

/// A sample code for the instructions
fn example_code(rules: &Rules) -> String {
    (0..rules.alphabet_size())
        .take(rules.code_length())
        .cycle()
        .take(rules.code_length())
        .map(|peg| char::from(b'0' + peg))
        .collect()
}

/// Human guesses against `secret`; `None` if the player quit
fn codebreaker_round<R: BufRead, W: Write>(
    secret: Code,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> Result<Option<MatchOutcome>> {
    let code_length = settings.rules.code_length();
    let mut game = CodebreakerMatch::new(secret, settings)?;

    loop {
        writeln!(output, "\n{} guesses remaining", game.guesses_remaining())?;
        let Some(line) = prompt(input, output, "Your guess")? else {
            return Ok(None);
        };

        let guess = match Code::parse(&line, &settings.rules) {
            Ok(guess) => guess,
            Err(err) => {
                writeln!(output, "{} {err}", "Invalid guess:".red())?;
                continue;
            }
        };

        let feedback = game.submit_guess(&guess)?;
        writeln!(
            output,
            "{guess}  {}  ({feedback})",
            colored_pegs(feedback, code_length)
        )?;

        if let Some(outcome) = game.outcome() {
            if outcome.codebreaker_won() {
                writeln!(
                    output,
                    "{}",
                    format!("🎉 Congratulations! {guess} was the code!")
                        .green()
                        .bold()
                )?;
            } else {
                writeln!(
                    output,
                    "{}",
                    format!("Out of guesses! The code was {}", game.secret())
                        .red()
                        .bold()
                )?;
            }
            return Ok(Some(outcome));
        }
    }
}

/// Computer breaks a secret the human picks; `None` if the player quit
fn codemaker_round<S, R, W>(
    settings: &Settings,
    strategy: &S,
    input: &mut R,
    output: &mut W,
) -> Result<Option<MatchOutcome>>
where
    S: Strategy + Clone,
    R: BufRead,
    W: Write,
{
    let code_length = settings.rules.code_length();

    let secret = loop {
        let Some(line) = prompt(input, output, "Choose a secret code")? else {
            return Ok(None);
        };
        match Code::parse(&line, &settings.rules) {
            Ok(secret) => break secret,
            Err(err) => writeln!(output, "{} {err}", "Invalid code:".red())?,
        }
    };

    let mut game = CodemakerMatch::new(secret, settings, strategy.clone())?;
    loop {
        let turn = game.play_turn()?;
        writeln!(
            output,
            "Computer guesses {}  {}  ({} candidates left)",
            turn.guess,
            colored_pegs(turn.feedback, code_length),
            turn.candidates_after
        )?;

        if let Some(outcome) = game.outcome() {
            if outcome.codebreaker_won() {
                writeln!(
                    output,
                    "{}",
                    format!("The computer cracked your code in {} guesses.", outcome.turns())
                        .red()
                        .bold()
                )?;
            } else {
                writeln!(
                    output,
                    "{}",
                    "Your code survived! You win the round.".green().bold()
                )?;
            }
            return Ok(Some(outcome));
        }
    }
}

fn print_verdict<W: Write>(scoreboard: &Scoreboard, output: &mut W) -> io::Result<()> {
    writeln!(output, "\n{}", "═".repeat(48).bright_cyan())?;
    let verdict = match scoreboard.verdict() {
        Verdict::HumanWins => "You win the game!".green().bold(),
        Verdict::ComputerWins => "The computer wins the game.".red().bold(),
        Verdict::Tie => "Tie game".yellow().bold(),
    };
    writeln!(output, "{verdict}")?;
    writeln!(
        output,
        "Final score: you {} - computer {}",
        scoreboard.human_wins, scoreboard.computer_wins
    )
}

/// Read one trimmed line; `None` on end of input or a quit command
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let line = line.trim();
    if matches!(line.to_lowercase().as_str(), "q" | "quit" | "exit") {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}
