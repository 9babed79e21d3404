//! Computer codemaker

use crate::core::{Code, Rules};
use rand::Rng;

/// Pick a random secret that follows `rules`
///
/// Pegs are drawn uniformly from the whole alphabet. When repeats are off,
/// a value already used is drawn again.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Rules;
/// use mastermind_solver::game::generate_secret;
///
/// let rules = Rules::default();
/// let secret = generate_secret(&rules, &mut rand::rng());
/// assert!(secret.validate(&rules).is_ok());
/// ```
pub fn generate_secret<R: Rng + ?Sized>(rules: &Rules, rng: &mut R) -> Code {
    let mut pegs = Vec::with_capacity(rules.code_length());

    while pegs.len() < rules.code_length() {
        let peg = rng.random_range(0..rules.alphabet_size());
        if rules.allow_duplicates() || !pegs.contains(&peg) {
            pegs.push(peg);
        }
    }

    Code::from_pegs(pegs)
}
