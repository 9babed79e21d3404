//! Match rules
//!
//! The code length, alphabet size and duplicate policy agreed for one match.

use std::fmt;

/// Largest number of codes a candidate space may contain
pub const MAX_SPACE_SIZE: usize = 1_000_000;

/// Longest supported code
pub const MAX_CODE_LENGTH: usize = 8;

/// Largest supported alphabet (pegs are written as single digits)
pub const MAX_ALPHABET_SIZE: u8 = 10;

/// Rules fixed for the duration of a match
///
/// Pegs take values in `0..alphabet_size` and every code has exactly
/// `code_length` pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    code_length: usize,
    alphabet_size: u8,
    allow_duplicates: bool,
}

/// Error type for invalid rule combinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    InvalidCodeLength(usize),
    InvalidAlphabetSize(u8),
    NotEnoughValues { code_length: usize, alphabet_size: u8 },
    SpaceTooLarge(usize),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCodeLength(len) => {
                write!(f, "Code length must be between 1 and {MAX_CODE_LENGTH}, got {len}")
            }
            Self::InvalidAlphabetSize(size) => write!(
                f,
                "Alphabet size must be between 1 and {MAX_ALPHABET_SIZE}, got {size}"
            ),
            Self::NotEnoughValues {
                code_length,
                alphabet_size,
            } => write!(
                f,
                "Cannot build {code_length} distinct pegs from only {alphabet_size} values"
            ),
            Self::SpaceTooLarge(size) => write!(
                f,
                "Code space has {size} codes, more than the supported {MAX_SPACE_SIZE}"
            ),
        }
    }
}

impl std::error::Error for RulesError {}

impl Rules {
    /// Create a validated rule set
    ///
    /// # Errors
    /// Returns `RulesError` if:
    /// - `code_length` is outside `1..=MAX_CODE_LENGTH`
    /// - `alphabet_size` is outside `1..=MAX_ALPHABET_SIZE`
    /// - duplicates are disallowed and there are fewer values than pegs
    /// - the code space would exceed `MAX_SPACE_SIZE`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Rules;
    ///
    /// let rules = Rules::new(4, 6, true).unwrap();
    /// assert_eq!(rules.space_size(), 1296);
    ///
    /// assert!(Rules::new(5, 4, false).is_err());
    /// ```
    pub fn new(
        code_length: usize,
        alphabet_size: u8,
        allow_duplicates: bool,
    ) -> Result<Self, RulesError> {
        if code_length == 0 || code_length > MAX_CODE_LENGTH {
            return Err(RulesError::InvalidCodeLength(code_length));
        }

        if alphabet_size == 0 || alphabet_size > MAX_ALPHABET_SIZE {
            return Err(RulesError::InvalidAlphabetSize(alphabet_size));
        }

        if !allow_duplicates && usize::from(alphabet_size) < code_length {
            return Err(RulesError::NotEnoughValues {
                code_length,
                alphabet_size,
            });
        }

        let rules = Self {
            code_length,
            alphabet_size,
            allow_duplicates,
        };

        let size = rules.space_size();
        if size > MAX_SPACE_SIZE {
            return Err(RulesError::SpaceTooLarge(size));
        }

        Ok(rules)
    }

    /// Number of pegs in every code
    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Number of distinct peg values
    #[inline]
    #[must_use]
    pub const fn alphabet_size(&self) -> u8 {
        self.alphabet_size
    }

    /// Whether a code may repeat a peg value
    #[inline]
    #[must_use]
    pub const fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Check whether a peg value is inside the alphabet
    #[inline]
    #[must_use]
    pub const fn is_valid_peg(&self, peg: u8) -> bool {
        peg < self.alphabet_size
    }

    /// Number of codes allowed under these rules
    ///
    /// `B^L` with duplicates, `B!/(B-L)!` without.
    #[must_use]
    pub fn space_size(&self) -> usize {
        let base = usize::from(self.alphabet_size);
        if self.allow_duplicates {
            (0..self.code_length).fold(1usize, |acc, _| acc.saturating_mul(base))
        } else {
            (0..self.code_length).fold(1usize, |acc, i| acc.saturating_mul(base - i))
        }
    }
}

impl Default for Rules {
    /// Classic Mastermind: four pegs, six values, repeats allowed
    fn default() -> Self {
        Self {
            code_length: 4,
            alphabet_size: 6,
            allow_duplicates: true,
        }
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pegs, values 0-{}, {}",
            self.code_length,
            self.alphabet_size - 1,
            if self.allow_duplicates {
                "repeats allowed"
            } else {
                "no repeats"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_classic() {
        let rules = Rules::default();
        assert_eq!(rules.code_length(), 4);
        assert_eq!(rules.alphabet_size(), 6);
        assert!(rules.allow_duplicates());
        assert_eq!(rules.space_size(), 1296);
    }

    #[test]
    fn space_size_without_duplicates() {
        let rules = Rules::new(4, 6, false).unwrap();
        assert_eq!(rules.space_size(), 6 * 5 * 4 * 3);
    }

    #[test]
    fn rejects_zero_length() {
        assert_eq!(Rules::new(0, 6, true), Err(RulesError::InvalidCodeLength(0)));
    }

    #[test]
    fn rejects_oversized_alphabet() {
        assert_eq!(
            Rules::new(4, 11, true),
            Err(RulesError::InvalidAlphabetSize(11))
        );
        assert_eq!(Rules::new(4, 0, true), Err(RulesError::InvalidAlphabetSize(0)));
    }

    #[test]
    fn rejects_too_few_values_for_distinct_pegs() {
        assert!(matches!(
            Rules::new(5, 4, false),
            Err(RulesError::NotEnoughValues { .. })
        ));
        // Same shape is fine when repeats are allowed
        assert!(Rules::new(5, 4, true).is_ok());
    }

    #[test]
    fn rejects_huge_space() {
        assert!(matches!(
            Rules::new(8, 10, true),
            Err(RulesError::SpaceTooLarge(100_000_000))
        ));
        assert!(Rules::new(6, 10, true).is_ok());
    }

    #[test]
    fn peg_range_check() {
        let rules = Rules::default();
        assert!(rules.is_valid_peg(0));
        assert!(rules.is_valid_peg(5));
        assert!(!rules.is_valid_peg(6));
    }

    #[test]
    fn display_mentions_policy() {
        assert_eq!(
            Rules::default().to_string(),
            "4 pegs, values 0-5, repeats allowed"
        );
        assert_eq!(
            Rules::new(3, 8, false).unwrap().to_string(),
            "3 pegs, values 0-7, no repeats"
        );
    }
}
