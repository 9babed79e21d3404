//! Round bookkeeping across a game

use super::MatchOutcome;
use std::fmt;

/// The part the human plays in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The human guesses the computer's secret
    Codebreaker,
    /// The human sets a secret for the computer to break
    Codemaker,
}

impl Role {
    /// Role of the human in a 1-based round: odd rounds break, even rounds make
    #[must_use]
    pub const fn for_round(round: usize) -> Self {
        if round % 2 == 1 {
            Self::Codebreaker
        } else {
            Self::Codemaker
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codebreaker => write!(f, "codebreaker"),
            Self::Codemaker => write!(f, "codemaker"),
        }
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    HumanWins,
    ComputerWins,
    Tie,
}

/// Round wins for each side
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    pub human_wins: usize,
    pub computer_wins: usize,
}

impl Scoreboard {
    /// Credit a finished round
    ///
    /// The codebreaker takes the round by solving in time; otherwise the
    /// codemaker does.
    pub fn record(&mut self, human_role: Role, outcome: MatchOutcome) {
        let human_won = match human_role {
            Role::Codebreaker => outcome.codebreaker_won(),
            Role::Codemaker => !outcome.codebreaker_won(),
        };

        if human_won {
            self.human_wins += 1;
        } else {
            self.computer_wins += 1;
        }
    }

    /// Rounds recorded so far
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.human_wins + self.computer_wins
    }

    /// Who is ahead
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.human_wins > self.computer_wins {
            Verdict::HumanWins
        } else if self.computer_wins > self.human_wins {
            Verdict::ComputerWins
        } else {
            Verdict::Tie
        }
    }
}
