//! Game settings
//!
//! Everything a game needs to know before the first round starts.

use crate::core::Rules;
use std::fmt;

/// Settings for a whole game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Rules shared by every match of the game
    pub rules: Rules,
    /// Guesses the codebreaker gets per match
    pub max_turns: usize,
    /// Number of matches played, alternating roles
    pub rounds: usize,
}

/// Error type for invalid settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    NoTurns,
    NoRounds,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTurns => write!(f, "A match needs at least one turn"),
            Self::NoRounds => write!(f, "A game needs at least one round"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl Settings {
    /// Create validated settings
    ///
    /// # Errors
    /// Returns `SettingsError` if `max_turns` or `rounds` is zero.
    pub const fn new(rules: Rules, max_turns: usize, rounds: usize) -> Result<Self, SettingsError> {
        if max_turns == 0 {
            return Err(SettingsError::NoTurns);
        }
        if rounds == 0 {
            return Err(SettingsError::NoRounds);
        }
        Ok(Self {
            rules,
            max_turns,
            rounds,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            max_turns: 12,
            rounds: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.rules, Rules::default());
        assert_eq!(settings.max_turns, 12);
        assert_eq!(settings.rounds, 4);
    }

    #[test]
    fn rejects_zero_turns_and_rounds() {
        assert_eq!(
            Settings::new(Rules::default(), 0, 4),
            Err(SettingsError::NoTurns)
        );
        assert_eq!(
            Settings::new(Rules::default(), 12, 0),
            Err(SettingsError::NoRounds)
        );
        assert!(Settings::new(Rules::default(), 1, 1).is_ok());
    }
}
