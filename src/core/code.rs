//! Mastermind code representation
//!
//! A Code is an ordered row of pegs, each peg a small integer value.

use super::Rules;
use std::fmt;

/// An ordered sequence of peg values
///
/// Codes built with [`Code::parse`] are validated against a [`Rules`];
/// codes built with [`Code::from_pegs`] are taken as-is and checked later
/// by whoever scores them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    pegs: Vec<u8>,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, actual: usize },
    InvalidCharacter(char),
    PegOutOfRange { peg: u8, alphabet_size: u8 },
    RepeatedPeg(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Code must be exactly {expected} digits, got {actual}")
            }
            Self::InvalidCharacter(ch) => write!(f, "Code contains invalid character '{ch}'"),
            Self::PegOutOfRange { peg, alphabet_size } => write!(
                f,
                "Digit {peg} is out of range, digits must be less than {alphabet_size}"
            ),
            Self::RepeatedPeg(peg) => {
                write!(f, "Digit {peg} appears more than once but repeats are off")
            }
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Build a code from raw peg values without validation
    #[must_use]
    pub const fn from_pegs(pegs: Vec<u8>) -> Self {
        Self { pegs }
    }

    /// Parse a code typed by a player
    ///
    /// Digits are read left to right; whitespace and commas are ignored so
    /// `"2201"`, `"2 2 0 1"` and `"2,2,0,1"` are the same code.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - A character is neither a digit nor a separator
    /// - The number of digits differs from the code length
    /// - A digit is outside the alphabet
    /// - A digit repeats while repeats are disallowed
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Rules};
    ///
    /// let rules = Rules::default();
    /// let code = Code::parse("2201", &rules).unwrap();
    /// assert_eq!(code.pegs(), &[2, 2, 0, 1]);
    ///
    /// assert!(Code::parse("226", &rules).is_err());
    /// assert!(Code::parse("2206", &rules).is_err());
    /// ```
    pub fn parse(text: &str, rules: &Rules) -> Result<Self, CodeError> {
        let mut pegs = Vec::with_capacity(rules.code_length());

        for ch in text.chars() {
            if ch.is_whitespace() || ch == ',' {
                continue;
            }
            let digit = ch.to_digit(10).ok_or(CodeError::InvalidCharacter(ch))?;
            pegs.push(digit as u8);
        }

        let code = Self { pegs };
        code.validate(rules)?;
        Ok(code)
    }

    /// Check this code against the rules of a match
    ///
    /// # Errors
    /// Returns `CodeError` on a length mismatch, an out-of-range peg, or a
    /// repeated peg when repeats are disallowed.
    pub fn validate(&self, rules: &Rules) -> Result<(), CodeError> {
        if self.pegs.len() != rules.code_length() {
            return Err(CodeError::InvalidLength {
                expected: rules.code_length(),
                actual: self.pegs.len(),
            });
        }

        if let Some(&peg) = self.pegs.iter().find(|&&p| !rules.is_valid_peg(p)) {
            return Err(CodeError::PegOutOfRange {
                peg,
                alphabet_size: rules.alphabet_size(),
            });
        }

        if !rules.allow_duplicates()
            && let Some(peg) = self.first_repeat()
        {
            return Err(CodeError::RepeatedPeg(peg));
        }

        Ok(())
    }

    /// Peg values in order
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[u8] {
        &self.pegs
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// Whether the code has no pegs
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Whether any peg value appears more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        self.first_repeat().is_some()
    }

    fn first_repeat(&self) -> Option<u8> {
        self.pegs
            .iter()
            .enumerate()
            .find(|&(i, peg)| self.pegs[..i].contains(peg))
            .map(|(_, &peg)| peg)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.pegs {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
