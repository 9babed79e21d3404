//! Mastermind feedback calculation and representation
//!
//! Feedback is a pair of key-peg counts:
//! - exact ("black"): right value in the right position
//! - partial ("white"): right value in the wrong position, counted among the
//!   pegs left over after exact matches
//!
//! Each peg of the reference can account for at most one key peg, which is
//! what makes duplicate values score correctly.

use super::Code;
use std::fmt;

/// Key-peg feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: u8,
    partial: u8,
}

/// Error type for scoring contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    LengthMismatch { guess: usize, reference: usize },
    WrongLength { expected: usize, actual: usize },
    PegOutOfRange { peg: u8, alphabet_size: u8 },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, reference } => write!(
                f,
                "Cannot score a {guess}-peg guess against a {reference}-peg reference"
            ),
            Self::WrongLength { expected, actual } => {
                write!(f, "Expected a {expected}-peg code, got {actual} pegs")
            }
            Self::PegOutOfRange { peg, alphabet_size } => {
                write!(f, "Peg value {peg} is outside 0..{alphabet_size}")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// Feedback for a guess identical to the reference
    #[inline]
    #[must_use]
    pub const fn perfect(code_length: usize) -> Self {
        Self::new(code_length as u8, 0)
    }

    /// Pegs with the right value in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Pegs with the right value in the wrong position
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Total key pegs awarded
    #[inline]
    #[must_use]
    pub const fn total(self) -> u8 {
        self.exact + self.partial
    }

    /// Check whether this feedback means the code was broken
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, code_length: usize) -> bool {
        self.exact as usize == code_length
    }

    /// Check whether this feedback could be produced for codes of this length
    #[inline]
    #[must_use]
    pub const fn fits(self, code_length: usize) -> bool {
        (self.exact as usize) + (self.partial as usize) <= code_length
    }

    /// Parse feedback entered by hand, like `"2 1"`, `"2,1"` or `"2/1"`
    ///
    /// The first number is the exact count, the second the partial count.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// let f = Feedback::from_str("2 1").unwrap();
    /// assert_eq!((f.exact(), f.partial()), (2, 1));
    /// assert_eq!(Feedback::from_str("2/1"), Some(f));
    /// assert!(Feedback::from_str("two").is_none());
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // FromStr is implemented below as well
    pub fn from_str(s: &str) -> Option<Self> {
        let mut parts = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|part| !part.is_empty());

        let exact = parts.next()?.parse().ok()?;
        let partial = parts.next()?.parse().ok()?;

        if parts.next().is_some() {
            return None;
        }

        Some(Self::new(exact, partial))
    }

    /// Render as key pegs: `●` exact, `○` partial, `·` for empty slots
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// assert_eq!(Feedback::new(1, 2).to_pegs(4), "●○○·");
    /// ```
    #[must_use]
    pub fn to_pegs(self, code_length: usize) -> String {
        let exact = usize::from(self.exact);
        let partial = usize::from(self.partial);
        let empty = code_length.saturating_sub(exact + partial);

        format!("{}{}{}", "●".repeat(exact), "○".repeat(partial), "·".repeat(empty))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Score `guess` against `reference`
///
/// Works on private copies of both codes: matched slots are emptied so they
/// cannot be counted twice. An emptied guess slot is never searched for and
/// an emptied reference slot never matches a value, so the two kinds of
/// consumed slot can never pair up with each other.
///
/// # Algorithm
/// 1. Exact pass: every position where the pegs agree scores an exact match
///    and empties that slot in both copies
/// 2. Partial pass: every remaining guess peg, left to right, is matched
///    against the leftmost remaining reference peg of the same value
///
/// This function knows no [`Rules`](super::Rules): it checks lengths only
/// and scores any peg values it is given. Input that must follow a match's
/// rules goes through [`StandardScorer`](super::StandardScorer), which
/// also rejects out-of-range pegs.
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the codes differ in length.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, Feedback, score};
///
/// let guess = Code::from_pegs(vec![0, 1, 2, 3]);
/// let reference = Code::from_pegs(vec![3, 2, 1, 0]);
/// assert_eq!(score(&guess, &reference).unwrap(), Feedback::new(0, 4));
/// ```
pub fn score(guess: &Code, reference: &Code) -> Result<Feedback, ScoreError> {
    if guess.len() != reference.len() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.len(),
            reference: reference.len(),
        });
    }

    let mut guess_left: Vec<Option<u8>> = guess.pegs().iter().copied().map(Some).collect();
    let mut reference_left: Vec<Option<u8>> =
        reference.pegs().iter().copied().map(Some).collect();

    let mut exact = 0u8;
    for (g, r) in guess_left.iter_mut().zip(reference_left.iter_mut()) {
        if g == r {
            exact += 1;
            *g = None;
            *r = None;
        }
    }

    let mut partial = 0u8;
    for slot in &mut guess_left {
        let Some(peg) = *slot else { continue };

        if let Some(found) = reference_left.iter().position(|&r| r == Some(peg)) {
            partial += 1;
            reference_left[found] = None;
            *slot = None;
        }
    }

    Ok(Feedback::new(exact, partial))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn code(pegs: &[u8]) -> Code {
        Code::from_pegs(pegs.to_vec())
    }

    #[test]
    fn identical_codes_are_perfect() {
        let c = code(&[2, 2, 0, 1]);
        let feedback = score(&c, &c).unwrap();

        assert_eq!(feedback, Feedback::perfect(4));
        assert!(feedback.is_perfect(4));
    }

    #[test]
    fn nothing_in_common() {
        let feedback = score(&code(&[0, 0, 1, 1]), &code(&[2, 3, 4, 5])).unwrap();
        assert_eq!(feedback, Feedback::new(0, 0));
    }

    #[test]
    fn full_reversal_is_all_partial() {
        let feedback = score(&code(&[0, 1, 2, 3]), &code(&[3, 2, 1, 0])).unwrap();
        assert_eq!(feedback, Feedback::new(0, 4));
    }

    #[test]
    fn duplicates_counted_once_per_reference_peg() {
        // Position 0 is exact. Left over: guess [1,2,2] vs reference [2,1,1].
        // The guess 1 takes one reference 1, the first guess 2 takes the
        // only reference 2, and the last guess 2 finds nothing.
        let feedback = score(&code(&[1, 1, 2, 2]), &code(&[1, 2, 1, 1])).unwrap();
        assert_eq!(feedback, Feedback::new(1, 2));
    }

    #[test]
    fn exact_match_takes_priority_over_partial() {
        // The 5 in position 3 must be exact, not consumed by the earlier guess 5
        let feedback = score(&code(&[5, 0, 0, 5]), &code(&[1, 2, 3, 5])).unwrap();
        assert_eq!(feedback, Feedback::new(1, 0));
    }

    #[test]
    fn repeated_guess_against_single_reference_peg() {
        let feedback = score(&code(&[3, 3, 3, 3]), &code(&[0, 1, 2, 3])).unwrap();
        assert_eq!(feedback, Feedback::new(1, 0));

        let feedback = score(&code(&[3, 3, 0, 0]), &code(&[0, 1, 2, 3])).unwrap();
        assert_eq!(feedback, Feedback::new(0, 2));
    }

    #[test]
    fn inputs_are_left_untouched() {
        let guess = code(&[1, 1, 2, 2]);
        let reference = code(&[1, 2, 1, 1]);
        let _ = score(&guess, &reference).unwrap();

        assert_eq!(guess.pegs(), &[1, 1, 2, 2]);
        assert_eq!(reference.pegs(), &[1, 2, 1, 1]);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            score(&code(&[1, 2, 3]), &code(&[1, 2, 3, 4])),
            Err(ScoreError::LengthMismatch {
                guess: 3,
                reference: 4
            })
        );
    }

    #[test]
    fn from_str_valid() {
        let expected = Feedback::new(2, 1);
        assert_eq!(Feedback::from_str("2 1"), Some(expected));
        assert_eq!(Feedback::from_str("2,1"), Some(expected));
        assert_eq!(Feedback::from_str(" 2 / 1 "), Some(expected));
        assert_eq!("0 0".parse::<Feedback>(), Ok(Feedback::new(0, 0)));
    }

    #[test]
    fn from_str_invalid() {
        assert!(Feedback::from_str("").is_none());
        assert!(Feedback::from_str("2").is_none());
        assert!(Feedback::from_str("2 1 0").is_none());
        assert!(Feedback::from_str("a b").is_none());
        assert!(Feedback::from_str("-1 2").is_none());
        assert!("x".parse::<Feedback>().is_err());
    }

    #[test]
    fn fits_code_length() {
        assert!(Feedback::new(2, 2).fits(4));
        assert!(!Feedback::new(3, 2).fits(4));
    }

    #[test]
    fn to_pegs_renders_every_slot() {
        assert_eq!(Feedback::new(0, 0).to_pegs(4), "····");
        assert_eq!(Feedback::perfect(4).to_pegs(4), "●●●●");
        assert_eq!(Feedback::new(2, 1).to_pegs(5), "●●○··");
    }

    #[test]
    fn display() {
        assert_eq!(Feedback::new(1, 3).to_string(), "1 exact, 3 partial");
    }

    fn code_pair() -> impl Strategy<Value = (Code, Code)> {
        (1usize..=6).prop_flat_map(|len| {
            (
                prop::collection::vec(0u8..6, len),
                prop::collection::vec(0u8..6, len),
            )
                .prop_map(|(g, r)| (Code::from_pegs(g), Code::from_pegs(r)))
        })
    }

    proptest! {
        #[test]
        fn self_score_is_perfect(pegs in prop::collection::vec(0u8..6, 1..=6)) {
            let c = Code::from_pegs(pegs);
            prop_assert_eq!(score(&c, &c).unwrap(), Feedback::perfect(c.len()));
        }

        #[test]
        fn key_pegs_never_exceed_length((guess, reference) in code_pair()) {
            let feedback = score(&guess, &reference).unwrap();
            prop_assert!(feedback.fits(guess.len()));
        }

        #[test]
        fn scoring_is_symmetric((guess, reference) in code_pair()) {
            prop_assert_eq!(
                score(&guess, &reference).unwrap(),
                score(&reference, &guess).unwrap()
            );
        }

        #[test]
        fn total_matches_multiset_overlap((guess, reference) in code_pair()) {
            let overlap: usize = (0u8..6)
                .map(|v| {
                    let in_guess = guess.pegs().iter().filter(|&&p| p == v).count();
                    let in_reference = reference.pegs().iter().filter(|&&p| p == v).count();
                    in_guess.min(in_reference)
                })
                .sum();
            let feedback = score(&guess, &reference).unwrap();
            prop_assert_eq!(usize::from(feedback.total()), overlap);
        }
    }
}
