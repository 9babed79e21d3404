//! Game orchestration
//!
//! Settings, secret generation, single matches and the scoreboard that
//! tallies rounds. Terminal I/O lives in `commands`.

mod codemaker;
mod matches;
mod scoreboard;
mod settings;

pub use codemaker::generate_secret;
pub use matches::{CodebreakerMatch, CodemakerMatch, MatchError, MatchOutcome, TurnRecord};
pub use scoreboard::{Role, Scoreboard, Verdict};
pub use settings::{Settings, SettingsError};
