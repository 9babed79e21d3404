//! Code space enumeration
//!
//! Lists every code allowed by a set of rules in lexicographic order, which
//! is the canonical order the solver draws its guesses from.

use crate::core::{Code, Rules};

/// Every code allowed by `rules`, in lexicographic order
///
/// With repeats disallowed, codes containing a repeated value are skipped
/// but the order of the remaining codes is unchanged.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Rules;
/// use mastermind_solver::solver::all_codes;
///
/// let codes = all_codes(&Rules::new(2, 3, true).unwrap());
/// let text: Vec<String> = codes.iter().map(ToString::to_string).collect();
/// assert_eq!(text, ["00", "01", "02", "10", "11", "12", "20", "21", "22"]);
/// ```
#[must_use]
pub fn all_codes(rules: &Rules) -> Vec<Code> {
    let mut codes = Vec::with_capacity(rules.space_size());
    let mut digits = vec![0u8; rules.code_length()];

    loop {
        let code = Code::from_pegs(digits.clone());
        if rules.allow_duplicates() || !code.has_repeats() {
            codes.push(code);
        }

        if !advance(&mut digits, rules.alphabet_size()) {
            break;
        }
    }

    codes
}

/// Step `digits` to the next value in base `base`, rightmost digit fastest
///
/// Returns false once every digit has wrapped around.
fn advance(digits: &mut [u8], base: u8) -> bool {
    for digit in digits.iter_mut().rev() {
        *digit += 1;
        if *digit < base {
            return true;
        }
        *digit = 0;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_space_size() {
        let codes = all_codes(&Rules::default());
        assert_eq!(codes.len(), 1296);
        assert_eq!(codes.first().map(Code::pegs), Some(&[0u8, 0, 0, 0][..]));
        assert_eq!(codes.last().map(Code::pegs), Some(&[5u8, 5, 5, 5][..]));
    }

    #[test]
    fn enumeration_is_sorted_and_unique() {
        let codes = all_codes(&Rules::default());
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn no_repeat_space() {
        let rules = Rules::new(4, 6, false).unwrap();
        let codes = all_codes(&rules);

        assert_eq!(codes.len(), rules.space_size());
        assert_eq!(codes.len(), 360);
        assert!(codes.iter().all(|c| !c.has_repeats()));
        assert_eq!(codes[0].pegs(), &[0, 1, 2, 3]);
        assert_eq!(codes[1].pegs(), &[0, 1, 2, 4]);
    }

    #[test]
    fn single_value_alphabet() {
        let codes = all_codes(&Rules::new(3, 1, true).unwrap());
        assert_eq!(codes, vec![Code::from_pegs(vec![0, 0, 0])]);
    }

    #[test]
    fn every_code_validates() {
        let rules = Rules::new(3, 4, false).unwrap();
        for code in all_codes(&rules) {
            assert!(code.validate(&rules).is_ok(), "{code} should be valid");
        }
    }
}
