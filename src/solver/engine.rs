//! Main Mastermind solver interface

use super::candidates::all_codes;
use super::strategy::Strategy;
use crate::core::{Code, CodeError, Feedback, Rules, ScoreError, Scorer, StandardScorer};
use std::fmt;

/// Where the solver is in its guess/feedback cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// No guess made yet; the next guess is the fixed opening
    Uninitialized,
    /// A guess is out and its feedback has not been recorded
    AwaitingFeedback,
    /// Feedback recorded; the next guess comes from the candidates
    Ready,
    /// The last guess scored all exact
    Solved,
    /// Feedback ruled out every code
    Exhausted,
}

/// Error type for solver misuse and contradictory feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// A guess was requested before the previous one was answered
    FeedbackPending,
    /// Feedback was recorded with no guess outstanding
    NoPendingGuess,
    /// The code has already been broken
    AlreadySolved,
    /// No code is consistent with the feedback given so far
    Exhausted { guesses: usize },
    /// The feedback awards more key pegs than there are pegs
    InvalidFeedback { feedback: Feedback, code_length: usize },
    /// A caller-chosen guess does not follow the rules
    InvalidGuess(CodeError),
    /// The scorer rejected a code
    Score(ScoreError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FeedbackPending => write!(f, "The previous guess is still waiting for feedback"),
            Self::NoPendingGuess => write!(f, "There is no guess to give feedback on"),
            Self::AlreadySolved => write!(f, "The code has already been broken"),
            Self::Exhausted { guesses } => write!(
                f,
                "No code is consistent with the feedback for the last {guesses} guesses"
            ),
            Self::InvalidFeedback {
                feedback,
                code_length,
            } => write!(
                f,
                "Feedback ({feedback}) awards more than {code_length} key pegs"
            ),
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::Score(err) => write!(f, "Scoring failed: {err}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            Self::Score(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScoreError> for SolverError {
    fn from(err: ScoreError) -> Self {
        Self::Score(err)
    }
}

/// The opening guess, made before any feedback is known
///
/// With repeats allowed this is two values each repeated, `[1,1,2,2]` for
/// the classic rules (the first half rounds up). Without repeats it is a
/// run of consecutive distinct values starting at 1, or at 0 when the
/// alphabet has no room for that.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Rules;
/// use mastermind_solver::solver::seed_guess;
///
/// assert_eq!(seed_guess(&Rules::default()).to_string(), "1122");
/// assert_eq!(seed_guess(&Rules::new(4, 6, false).unwrap()).to_string(), "1234");
/// ```
#[must_use]
pub fn seed_guess(rules: &Rules) -> Code {
    let length = rules.code_length();
    let size = rules.alphabet_size();

    if rules.allow_duplicates() {
        let (a, b) = match size {
            1 => (0, 0),
            2 => (0, 1),
            _ => (1, 2),
        };
        let first_half = length.div_ceil(2);
        let pegs = (0..length)
            .map(|i| if i < first_half { a } else { b })
            .collect();
        Code::from_pegs(pegs)
    } else {
        let start = u8::from(usize::from(size) > length);
        Code::from_pegs((start..).take(length).collect())
    }
}

/// Candidate-elimination codebreaker
///
/// Owns the set of codes still consistent with every piece of feedback for
/// one match. The set starts as the whole code space in lexicographic order
/// and only ever shrinks. A solver never sees the secret.
#[derive(Debug, Clone)]
pub struct Solver<S: Strategy, Sc: Scorer = StandardScorer> {
    rules: Rules,
    strategy: S,
    scorer: Sc,
    candidates: Vec<Code>,
    pending: Option<Code>,
    history: Vec<(Code, Feedback)>,
    guess_count: usize,
    state: SolverState,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver for one match using standard scoring
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Rules, score};
    /// use mastermind_solver::solver::{Solver, StrategyType};
    ///
    /// let secret = Code::from_pegs(vec![2, 2, 0, 1]);
    /// let mut solver = Solver::new(Rules::default(), StrategyType::default());
    ///
    /// loop {
    ///     let guess = solver.next_guess().unwrap();
    ///     let feedback = score(&guess, &secret).unwrap();
    ///     solver.record_feedback(feedback).unwrap();
    ///     if solver.is_solved() {
    ///         break;
    ///     }
    /// }
    /// assert_eq!(solver.guess_count(), 3);
    /// ```
    #[must_use]
    pub fn new(rules: Rules, strategy: S) -> Self {
        Self::with_scorer(rules, strategy, StandardScorer::new(rules))
    }

    /// Rebuild a solver by replaying a guess history
    ///
    /// Used to step back in time: a solver never regrows its candidates, so
    /// undoing feedback means starting a fresh one from the shorter history.
    ///
    /// # Errors
    /// Returns `SolverError` if a guess is invalid or the history is
    /// contradictory.
    pub fn replay(
        rules: Rules,
        strategy: S,
        history: &[(Code, Feedback)],
    ) -> Result<Self, SolverError> {
        let mut solver = Self::new(rules, strategy);
        for (guess, feedback) in history {
            solver.submit_guess(guess.clone())?;
            solver.record_feedback(*feedback)?;
        }
        Ok(solver)
    }
}

impl<S: Strategy, Sc: Scorer> Solver<S, Sc> {
    /// Create a solver that grades candidates with a custom scorer
    #[must_use]
    pub fn with_scorer(rules: Rules, strategy: S, scorer: Sc) -> Self {
        Self {
            rules,
            strategy,
            scorer,
            candidates: all_codes(&rules),
            pending: None,
            history: Vec::new(),
            guess_count: 0,
            state: SolverState::Uninitialized,
        }
    }

    /// Produce the next guess
    ///
    /// The first guess is always [`seed_guess`]; later guesses come from the
    /// strategy, drawn from the remaining candidates.
    ///
    /// # Errors
    /// Returns `SolverError` if the previous guess has no feedback yet, the
    /// code is already broken, or no candidates remain.
    pub fn next_guess(&mut self) -> Result<Code, SolverError> {
        let guess = match self.state {
            SolverState::Uninitialized => seed_guess(&self.rules),
            SolverState::Ready => self
                .strategy
                .select_guess(&self.candidates)
                .cloned()
                .ok_or(SolverError::Exhausted {
                    guesses: self.guess_count,
                })?,
            SolverState::AwaitingFeedback => return Err(SolverError::FeedbackPending),
            SolverState::Solved => return Err(SolverError::AlreadySolved),
            SolverState::Exhausted => {
                return Err(SolverError::Exhausted {
                    guesses: self.guess_count,
                });
            }
        };

        log::debug!(
            "guess {} is {guess} ({} candidates)",
            self.guess_count + 1,
            self.candidates.len()
        );
        self.make_pending(guess.clone());
        Ok(guess)
    }

    /// Play a caller-chosen guess instead of the solver's own choice
    ///
    /// The guess need not be a remaining candidate; it is scored and
    /// narrowed on exactly like a suggested one.
    ///
    /// # Errors
    /// Returns `SolverError` if a guess is already waiting for feedback, the
    /// solver is finished, or the guess breaks the rules.
    pub fn submit_guess(&mut self, guess: Code) -> Result<(), SolverError> {
        match self.state {
            SolverState::Uninitialized | SolverState::Ready => {}
            SolverState::AwaitingFeedback => return Err(SolverError::FeedbackPending),
            SolverState::Solved => return Err(SolverError::AlreadySolved),
            SolverState::Exhausted => {
                return Err(SolverError::Exhausted {
                    guesses: self.guess_count,
                });
            }
        }

        guess
            .validate(&self.rules)
            .map_err(SolverError::InvalidGuess)?;

        self.make_pending(guess);
        Ok(())
    }

    /// Record the feedback the outstanding guess received
    ///
    /// Keeps only the candidates that would have produced the same feedback
    /// against that guess. The real secret always does, so it is never
    /// eliminated by truthful feedback.
    ///
    /// # Errors
    /// Returns `SolverError::Exhausted` if no candidate survives, and other
    /// `SolverError` variants on protocol misuse or impossible feedback.
    /// Impossible feedback leaves the solver untouched.
    pub fn record_feedback(&mut self, feedback: Feedback) -> Result<(), SolverError> {
        let guess = match (&self.state, &self.pending) {
            (SolverState::AwaitingFeedback, Some(guess)) => guess,
            (SolverState::Solved, _) => return Err(SolverError::AlreadySolved),
            (SolverState::Exhausted, _) => {
                return Err(SolverError::Exhausted {
                    guesses: self.guess_count,
                });
            }
            _ => return Err(SolverError::NoPendingGuess),
        };

        let code_length = self.rules.code_length();
        if !feedback.fits(code_length) {
            return Err(SolverError::InvalidFeedback {
                feedback,
                code_length,
            });
        }

        let keep = self
            .candidates
            .iter()
            .map(|candidate| {
                self.scorer
                    .score(candidate, guess)
                    .map(|result| result == feedback)
            })
            .collect::<Result<Vec<bool>, _>>()?;

        let before = self.candidates.len();
        let mut keep = keep.into_iter();
        self.candidates.retain(|_| keep.next().unwrap_or(false));

        if let Some(guess) = self.pending.take() {
            log::debug!(
                "{guess} scored {feedback}: {before} -> {} candidates",
                self.candidates.len()
            );
            self.history.push((guess, feedback));
        }

        if self.candidates.is_empty() {
            log::warn!(
                "feedback history is contradictory after {} guesses",
                self.guess_count
            );
            self.state = SolverState::Exhausted;
            return Err(SolverError::Exhausted {
                guesses: self.guess_count,
            });
        }

        self.state = if feedback.is_perfect(code_length) {
            SolverState::Solved
        } else {
            SolverState::Ready
        };

        Ok(())
    }

    fn make_pending(&mut self, guess: Code) {
        self.pending = Some(guess);
        self.guess_count += 1;
        self.state = SolverState::AwaitingFeedback;
    }

    /// Number of guesses made so far, including one awaiting feedback
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    /// Codes still consistent with every recorded feedback
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Count how many candidates remain
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Every answered guess with its feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// The guess waiting for feedback, if any
    #[must_use]
    pub const fn pending_guess(&self) -> Option<&Code> {
        self.pending.as_ref()
    }

    /// Current state of the guess/feedback cycle
    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// Whether the code has been broken
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SolverState::Solved
    }

    /// Rules this solver was built for
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;
    use crate::solver::strategy::{FirstCandidateStrategy, Strategy, StrategyType};
    use proptest::prelude::*;

    fn code(pegs: &[u8]) -> Code {
        Code::from_pegs(pegs.to_vec())
    }

    fn setup_solver() -> Solver<FirstCandidateStrategy> {
        Solver::new(Rules::default(), FirstCandidateStrategy)
    }

    /// Play `solver` against `secret` until solved, returning every guess
    fn play_out<S: Strategy>(solver: &mut Solver<S>, secret: &Code) -> Vec<Code> {
        let mut guesses = Vec::new();
        while !solver.is_solved() {
            let guess = solver.next_guess().unwrap();
            let feedback = score(&guess, secret).unwrap();
            solver.record_feedback(feedback).unwrap();
            guesses.push(guess);
        }
        guesses
    }

    #[test]
    fn first_guess_is_seed() {
        let mut solver = setup_solver();
        assert_eq!(solver.state(), SolverState::Uninitialized);

        let guess = solver.next_guess().unwrap();
        assert_eq!(guess, code(&[1, 1, 2, 2]));
        assert_eq!(solver.guess_count(), 1);
        assert_eq!(solver.state(), SolverState::AwaitingFeedback);
        assert_eq!(solver.pending_guess(), Some(&guess));
        // The seed does not narrow anything by itself
        assert_eq!(solver.candidate_count(), 1296);
    }

    #[test]
    fn solves_known_secret() {
        let mut solver = setup_solver();
        let secret = code(&[2, 2, 0, 1]);

        let guesses = play_out(&mut solver, &secret);

        assert_eq!(
            guesses,
            vec![code(&[1, 1, 2, 2]), code(&[0, 2, 1, 1]), code(&[2, 2, 0, 1])]
        );
        assert_eq!(solver.guess_count(), 3);
        assert_eq!(solver.candidates(), &[secret]);
        assert_eq!(solver.history().len(), 3);
    }

    #[test]
    fn seed_secret_solved_in_one() {
        let mut solver = setup_solver();
        let guesses = play_out(&mut solver, &code(&[1, 1, 2, 2]));
        assert_eq!(guesses.len(), 1);
        assert_eq!(solver.state(), SolverState::Solved);
    }

    #[test]
    fn ready_guess_is_first_consistent_candidate() {
        let mut solver = setup_solver();
        solver.next_guess().unwrap();
        solver.record_feedback(Feedback::new(0, 0)).unwrap();

        // Neither 1 nor 2 may appear, so the first candidate is all zeros
        assert_eq!(solver.state(), SolverState::Ready);
        assert_eq!(solver.candidate_count(), 4usize.pow(4));
        assert_eq!(solver.next_guess().unwrap(), code(&[0, 0, 0, 0]));
    }

    #[test]
    fn impossible_feedback_exhausts_candidates() {
        let mut solver = setup_solver();
        solver.next_guess().unwrap();

        // Three exact and one partial cannot happen with four pegs
        let result = solver.record_feedback(Feedback::new(3, 1));

        assert_eq!(result, Err(SolverError::Exhausted { guesses: 1 }));
        assert_eq!(solver.state(), SolverState::Exhausted);
        assert_eq!(solver.candidate_count(), 0);
        assert!(matches!(
            solver.next_guess(),
            Err(SolverError::Exhausted { .. })
        ));
    }

    #[test]
    fn contradictory_history_is_reported() {
        let mut solver = setup_solver();
        solver.next_guess().unwrap();
        solver.record_feedback(Feedback::new(0, 0)).unwrap();

        let guess = solver.next_guess().unwrap();
        assert_eq!(guess, code(&[0, 0, 0, 0]));

        // An all-zero guess can never earn partial pegs
        let result = solver.record_feedback(Feedback::new(0, 4));
        assert_eq!(result, Err(SolverError::Exhausted { guesses: 2 }));
    }

    #[test]
    fn guessing_twice_without_feedback_fails() {
        let mut solver = setup_solver();
        solver.next_guess().unwrap();
        assert_eq!(solver.next_guess(), Err(SolverError::FeedbackPending));
        assert_eq!(solver.guess_count(), 1);
    }

    #[test]
    fn feedback_without_guess_fails() {
        let mut solver = setup_solver();
        assert_eq!(
            solver.record_feedback(Feedback::new(0, 0)),
            Err(SolverError::NoPendingGuess)
        );
    }

    #[test]
    fn oversized_feedback_is_rejected_without_side_effects() {
        let mut solver = setup_solver();
        solver.next_guess().unwrap();

        let result = solver.record_feedback(Feedback::new(3, 2));
        assert!(matches!(result, Err(SolverError::InvalidFeedback { .. })));
        assert_eq!(solver.state(), SolverState::AwaitingFeedback);
        assert_eq!(solver.candidate_count(), 1296);

        // The same guess can still be answered properly
        assert!(solver.record_feedback(Feedback::new(0, 0)).is_ok());
    }

    #[test]
    fn solved_solver_refuses_more_work() {
        let mut solver = setup_solver();
        play_out(&mut solver, &code(&[0, 0, 0, 0]));

        assert_eq!(solver.next_guess(), Err(SolverError::AlreadySolved));
        assert_eq!(
            solver.record_feedback(Feedback::new(0, 0)),
            Err(SolverError::AlreadySolved)
        );
    }

    #[test]
    fn submit_guess_overrides_suggestion() {
        let mut solver = setup_solver();
        let manual = code(&[0, 1, 2, 3]);
        solver.submit_guess(manual.clone()).unwrap();

        assert_eq!(solver.pending_guess(), Some(&manual));
        solver.record_feedback(Feedback::new(0, 4)).unwrap();
        assert!(
            solver
                .candidates()
                .iter()
                .all(|c| score(c, &manual).unwrap() == Feedback::new(0, 4))
        );
    }

    #[test]
    fn submit_guess_validates_against_rules() {
        let mut solver = setup_solver();
        let result = solver.submit_guess(code(&[0, 1, 9, 3]));
        assert!(matches!(result, Err(SolverError::InvalidGuess(_))));
        assert_eq!(solver.guess_count(), 0);
    }

    #[test]
    fn replay_matches_live_solver() {
        let secret = code(&[3, 4, 4, 0]);
        let mut live = setup_solver();
        play_out(&mut live, &secret);

        let history = live.history()[..2].to_vec();
        let replayed = Solver::replay(Rules::default(), FirstCandidateStrategy, &history).unwrap();

        assert_eq!(replayed.history(), history.as_slice());
        assert_eq!(replayed.state(), SolverState::Ready);
        assert!(replayed.candidates().contains(&secret));
    }

    #[test]
    fn no_repeat_rules_solve() {
        let rules = Rules::new(4, 6, false).unwrap();
        let mut solver = Solver::new(rules, StrategyType::default());
        let secret = code(&[5, 3, 0, 1]);

        let guesses = play_out(&mut solver, &secret);

        assert_eq!(guesses[0], code(&[1, 2, 3, 4]));
        assert_eq!(guesses.last(), Some(&secret));
        assert!(guesses.len() <= 6);
    }

    #[test]
    fn custom_scorer_is_used() {
        struct CountingScorer(std::cell::Cell<usize>);

        impl Scorer for CountingScorer {
            fn score(&self, guess: &Code, reference: &Code) -> Result<Feedback, ScoreError> {
                self.0.set(self.0.get() + 1);
                score(guess, reference)
            }
        }

        let rules = Rules::new(2, 3, true).unwrap();
        let scorer = CountingScorer(std::cell::Cell::new(0));
        let mut solver = Solver::with_scorer(rules, FirstCandidateStrategy, scorer);
        solver.next_guess().unwrap();
        solver.record_feedback(Feedback::new(0, 0)).unwrap();

        assert_eq!(solver.scorer.0.get(), 9);
    }

    #[test]
    fn seed_guess_shapes() {
        assert_eq!(seed_guess(&Rules::new(5, 6, true).unwrap()), code(&[1, 1, 1, 2, 2]));
        assert_eq!(seed_guess(&Rules::new(1, 6, true).unwrap()), code(&[1]));
        assert_eq!(seed_guess(&Rules::new(4, 2, true).unwrap()), code(&[0, 0, 1, 1]));
        assert_eq!(seed_guess(&Rules::new(2, 1, true).unwrap()), code(&[0, 0]));
        assert_eq!(seed_guess(&Rules::new(4, 4, false).unwrap()), code(&[0, 1, 2, 3]));
    }

    proptest! {
        #[test]
        fn secret_survives_and_candidates_shrink(index in 0usize..1296) {
            let secret = all_codes(&Rules::default()).swap_remove(index);
            let mut solver = setup_solver();
            let mut previous = solver.candidate_count();

            while !solver.is_solved() {
                let guess = solver.next_guess().unwrap();
                solver.record_feedback(score(&guess, &secret).unwrap()).unwrap();

                prop_assert!(solver.candidates().contains(&secret));
                prop_assert!(solver.candidate_count() <= previous);
                previous = solver.candidate_count();
                prop_assert!(solver.guess_count() <= 1296);
            }

            prop_assert_eq!(solver.history().last().map(|(g, _)| g), Some(&secret));
        }

        #[test]
        fn random_strategy_also_converges(index in 0usize..360) {
            let rules = Rules::new(4, 6, false).unwrap();
            let secret = all_codes(&rules).swap_remove(index);
            let mut solver = Solver::new(rules, StrategyType::from_name("random"));

            let guesses = play_out(&mut solver, &secret);
            prop_assert_eq!(guesses.last(), Some(&secret));
        }
    }
}
