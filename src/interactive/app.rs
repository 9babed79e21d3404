//! TUI application state and logic
//!
//! The assistant plays codebreaker against a physical board: it suggests a
//! guess, the user reads the key pegs off the board and types them in.

use crate::core::{Code, Feedback, Rules};
use crate::solver::{Solver, SolverError, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub solver: Solver<StrategyType>,
    pub rules: Rules,
    pub strategy: StrategyType,
    pub total_codes: usize,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<Code>,
    pub input_buffer: String,
    pub manual_guess: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualGuess,
    Solved,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_solved: usize,
    pub total_guesses: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_solved == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_solved as f64
        }
    }
}

impl App {
    #[must_use]
    pub fn new(rules: Rules, strategy: StrategyType) -> Self {
        let mut app = Self {
            solver: Solver::new(rules, strategy),
            rules,
            strategy,
            total_codes: rules.space_size(),
            history: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            manual_guess: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
        };

        app.add_message(&format!("Codes are {rules}."), MessageStyle::Info);
        app.add_message(
            "Play my guess, then type the key pegs as 'exact partial' (e.g. '1 2').",
            MessageStyle::Info,
        );
        app.compute_suggestion();
        app
    }

    /// Ask the solver for its next guess unless one is already out
    pub fn compute_suggestion(&mut self) {
        if let Some(pending) = self.solver.pending_guess() {
            self.current_guess = Some(pending.clone());
            return;
        }

        match self.solver.next_guess() {
            Ok(guess) => self.current_guess = Some(guess),
            Err(err) => {
                self.current_guess = None;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let Some(feedback) = Feedback::from_str(input) else {
            self.add_message(
                "Invalid feedback! Type two numbers: exact, then partial",
                MessageStyle::Error,
            );
            return;
        };

        let Some(guess) = self.current_guess.clone() else {
            self.add_message("No guess to score. Press 'u' to undo.", MessageStyle::Error);
            return;
        };

        let candidates_before = self.solver.candidate_count();
        match self.solver.record_feedback(feedback) {
            Ok(()) => {}
            Err(SolverError::Exhausted { .. }) => {
                self.history.push(HistoryEntry {
                    guess,
                    feedback,
                    candidates_before,
                    candidates_after: 0,
                });
                self.current_guess = None;
                self.input_buffer.clear();
                self.add_message(
                    "No code fits that feedback - a peg may be wrong. Press 'u' to undo.",
                    MessageStyle::Error,
                );
                return;
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        }

        let candidates_after = self.solver.candidate_count();
        self.history.push(HistoryEntry {
            guess,
            feedback,
            candidates_before,
            candidates_after,
        });
        self.input_buffer.clear();

        if self.solver.is_solved() {
            let guesses = self.history.len();
            self.stats.games_solved += 1;
            self.stats.total_guesses += guesses;
            self.input_mode = InputMode::Solved;
            self.add_message(
                &format!("🎉 Cracked in {guesses} guesses!"),
                MessageStyle::Success,
            );
            self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
        } else {
            self.compute_suggestion();
            self.add_message(
                &format!("{candidates_after} candidates remaining"),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        self.solver = Solver::new(self.rules, self.strategy);
        self.history.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.manual_guess.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    /// Drop the last scored guess and rebuild the solver without it
    pub fn undo_last(&mut self) {
        let Some(undone) = self.history.pop() else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        };

        // Taking back the winning feedback un-counts the game
        if undone.feedback.is_perfect(self.rules.code_length()) {
            self.stats.games_solved = self.stats.games_solved.saturating_sub(1);
            self.stats.total_guesses =
                self.stats.total_guesses.saturating_sub(self.history.len() + 1);
        }

        if self.rebuild_solver().is_ok() {
            self.input_mode = InputMode::Feedback;
            self.current_guess = None;
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        }
    }

    /// Play the typed code instead of the suggestion
    pub fn use_manual_guess(&mut self) {
        let guess = match Code::parse(&self.manual_guess, &self.rules) {
            Ok(guess) => guess,
            Err(err) => {
                self.add_message(&format!("Invalid code: {err}"), MessageStyle::Error);
                return;
            }
        };

        // The suggestion is already out; take it back first
        if self.rebuild_solver().is_err() {
            return;
        }

        match self.solver.submit_guess(guess.clone()) {
            Ok(()) => {
                self.add_message(&format!("Using: {guess}"), MessageStyle::Success);
                self.current_guess = Some(guess);
                self.input_mode = InputMode::Feedback;
                self.manual_guess.clear();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn rebuild_solver(&mut self) -> Result<(), SolverError> {
        let pairs: Vec<(Code, Feedback)> = self
            .history
            .iter()
            .map(|entry| (entry.guess.clone(), entry.feedback))
            .collect();

        match Solver::replay(self.rules, self.strategy, &pairs) {
            Ok(solver) => {
                self.solver = solver;
                Ok(())
            }
            Err(err) => {
                log::error!("cannot replay {} guesses: {err}", pairs.len());
                self.add_message(&err.to_string(), MessageStyle::Error);
                Err(err)
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.solver.candidate_count()
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Solved => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Tab => {
                    if self.candidate_count() > 0 {
                        self.input_mode = InputMode::ManualGuess;
                        self.add_message(
                            &format!("Enter your own code ({} digits)", self.rules.code_length()),
                            MessageStyle::Info,
                        );
                    }
                }
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_feedback(&input);
                }
                _ => {}
            },
            InputMode::ManualGuess => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Feedback;
                    self.manual_guess.clear();
                }
                KeyCode::Char(c) => {
                    if self.manual_guess.len() < self.rules.code_length() && c.is_ascii_digit() {
                        self.manual_guess.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.manual_guess.pop();
                }
                KeyCode::Enter => self.use_manual_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Rules::default(), StrategyType::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn code(text: &str) -> Code {
        Code::parse(text, &Rules::default()).unwrap()
    }

    #[test]
    fn starts_with_opening_suggestion() {
        let app = app();
        assert_eq!(app.current_guess, Some(code("1122")));
        assert_eq!(app.candidate_count(), 1296);
        assert_eq!(app.total_codes, 1296);
    }

    #[test]
    fn feedback_drives_solver_to_solution() {
        let mut app = app();

        type_text(&mut app, "0 3");
        assert_eq!(app.current_guess, Some(code("0211")));
        assert!(app.input_buffer.is_empty());

        type_text(&mut app, "2 1");
        assert_eq!(app.current_guess, Some(code("2201")));

        type_text(&mut app, "4 0");
        assert_eq!(app.input_mode, InputMode::Solved);
        assert_eq!(app.stats.games_solved, 1);
        assert_eq!(app.stats.total_guesses, 3);
        assert_eq!(app.history.len(), 3);
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut app = app();
        type_text(&mut app, "0 3");
        assert!(app.candidate_count() < 1296);

        press(&mut app, KeyCode::Char('u'));
        assert!(app.history.is_empty());
        assert_eq!(app.candidate_count(), 1296);
        assert_eq!(app.current_guess, Some(code("1122")));

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[test]
    fn undo_after_solve_does_not_count_twice() {
        let mut app = app();
        type_text(&mut app, "0 3");
        type_text(&mut app, "2 1");
        type_text(&mut app, "4 0");
        assert_eq!(app.stats.games_solved, 1);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.input_mode, InputMode::Feedback);
        assert_eq!(app.stats.games_solved, 0);
        assert_eq!(app.stats.total_guesses, 0);
        assert_eq!(app.current_guess, Some(code("2201")));

        type_text(&mut app, "4 0");
        assert_eq!(app.input_mode, InputMode::Solved);
        assert_eq!(app.stats.games_solved, 1);
        assert_eq!(app.stats.total_guesses, 3);
    }

    #[test]
    fn contradictory_feedback_can_be_undone() {
        let mut app = app();
        type_text(&mut app, "3 1");

        assert_eq!(app.candidate_count(), 0);
        assert_eq!(app.current_guess, None);
        assert!(app.messages.iter().any(|m| m.text.contains("undo")));

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.candidate_count(), 1296);
        assert_eq!(app.current_guess, Some(code("1122")));
    }

    #[test]
    fn impossible_feedback_is_rejected() {
        let mut app = app();
        type_text(&mut app, "5 0");
        assert!(app.history.is_empty());
        assert_eq!(app.current_guess, Some(code("1122")));

        type_text(&mut app, "x");
        assert!(app.history.is_empty());
    }

    #[test]
    fn manual_guess_replaces_suggestion() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_mode, InputMode::ManualGuess);

        type_text(&mut app, "01234");
        assert_eq!(app.current_guess, Some(code("0123")));
        assert_eq!(app.input_mode, InputMode::Feedback);

        type_text(&mut app, "0 4");
        assert_eq!(app.history[0].guess, code("0123"));
        assert!(app.candidate_count() < 1296);
        assert!(app.solver.candidates().contains(&code("3210")));
    }

    #[test]
    fn invalid_manual_guess_keeps_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "99");

        assert_eq!(app.input_mode, InputMode::ManualGuess);
        assert_eq!(app.current_guess, Some(code("1122")));
    }

    #[test]
    fn new_game_resets() {
        let mut app = app();
        type_text(&mut app, "0 3");
        press(&mut app, KeyCode::Char('n'));

        assert!(app.history.is_empty());
        assert_eq!(app.candidate_count(), 1296);
        assert_eq!(app.current_guess, Some(code("1122")));
    }

    #[test]
    fn quit_keys() {
        let mut by_letter = app();
        press(&mut by_letter, KeyCode::Char('q'));
        assert!(by_letter.should_quit);

        let mut by_ctrl_c = app();
        by_ctrl_c.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(by_ctrl_c.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "5");
    }
}
