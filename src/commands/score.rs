//! Score command
//!
//! Grades one code against another.

use crate::core::{Code, Feedback, Rules, Scorer, StandardScorer};
use anyhow::{Context, Result};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: Code,
    pub reference: Code,
    pub feedback: Feedback,
    pub code_length: usize,
}

/// Parse both codes and score `guess` against `reference`
///
/// # Errors
///
/// Returns an error if either code does not follow `rules`.
pub fn score_codes(guess: &str, reference: &str, rules: &Rules) -> Result<ScoreResult> {
    let guess = Code::parse(guess, rules).with_context(|| format!("Invalid guess '{guess}'"))?;
    let reference = Code::parse(reference, rules)
        .with_context(|| format!("Invalid reference '{reference}'"))?;

    log::info!("scoring {guess} against {reference} ({rules})");
    let feedback = StandardScorer::new(*rules).score(&guess, &reference)?;

    Ok(ScoreResult {
        guess,
        reference,
        feedback,
        code_length: rules.code_length(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_two_codes() {
        let result = score_codes("0123", "3210", &Rules::default()).unwrap();
        assert_eq!(result.feedback, Feedback::new(0, 4));
        assert_eq!(result.code_length, 4);
    }

    #[test]
    fn rejects_bad_input() {
        let rules = Rules::default();
        assert!(score_codes("012", "3210", &rules).is_err());
        assert!(score_codes("0123", "3217", &rules).is_err());
    }
}
