//! Chilean national ID (RUT) check-digit validation.
//!
//! A RUT is written either raw (`12345678-5`) or dotted (`12.345.678-5`).
//! The trailing character is a Module-11 check character: a digit `0`-`9`
//! or the letter `k` (either case). Both the request validation layer and
//! the registration form call [`is_valid_rut`], so they can never disagree.

use std::fmt;

use crate::error::CoreError;

/// Weights applied from the least significant digit upwards, repeating.
const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Compute the Module-11 check character for a run of ASCII digits.
///
/// Returns `None` if `digits` is empty or contains anything other than
/// `0`-`9`. The result is a digit character or lower-case `'k'`.
pub fn check_digit(digits: &str) -> Option<char> {
    if digits.is_empty() {
        return None;
    }

    // Reduced mod 11 as we go so arbitrarily long input cannot overflow.
    let mut sum = 0u32;
    for (c, weight) in digits.chars().rev().zip(WEIGHTS.iter().cycle()) {
        sum = (sum + c.to_digit(10)? * weight) % 11;
    }

    match 11 - sum {
        11 => Some('0'),
        10 => Some('k'),
        n => char::from_digit(n, 10),
    }
}

/// Returns `true` iff `candidate` is a RUT whose check character matches
/// the Module-11 digit of its numeric body.
///
/// `.` and `-` separators are ignored and the check character is compared
/// case-insensitively. Any malformed input (empty, no digits, non-numeric
/// body) is simply `false`; this function never panics.
pub fn is_valid_rut(candidate: &str) -> bool {
    split_candidate(candidate)
        .is_some_and(|(body, check)| check_digit(&body) == Some(check))
}

/// Strip separators and split into `(body, lower-cased check char)`.
///
/// `None` when fewer than two characters remain.
fn split_candidate(candidate: &str) -> Option<(String, char)> {
    let mut stripped: String = candidate
        .chars()
        .filter(|c| !matches!(c, '.' | '-'))
        .collect();
    let check = stripped.pop()?.to_ascii_lowercase();
    if stripped.is_empty() {
        return None;
    }
    Some((stripped, check))
}

/// A RUT that has passed [`is_valid_rut`].
///
/// The body is stored without separators or leading zeros; the check
/// character is stored lower-case. The registration form submits the
/// [`Display`](fmt::Display) form of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    body: String,
    check: char,
}

impl Rut {
    /// Parse and validate a raw or dotted RUT.
    pub fn parse(candidate: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::Validation(format!("'{candidate}' is not a valid RUT"));

        let (body, check) = split_candidate(candidate).ok_or_else(invalid)?;
        if check_digit(&body) != Some(check) {
            return Err(invalid());
        }

        let trimmed = body.trim_start_matches('0');
        let body = if trimmed.is_empty() { "0" } else { trimmed };

        Ok(Self {
            body: body.to_string(),
            check,
        })
    }

    /// Numeric part, without separators.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Check character, lower-case.
    pub fn check_char(&self) -> char {
        self.check
    }
}

impl fmt::Display for Rut {
    /// Dotted form, e.g. `12.345.678-5` or `10.000.013-K`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.body.len();
        for (i, c) in self.body.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                f.write_str(".")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "-{}", self.check.to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_raw_and_dotted_forms() {
        assert!(is_valid_rut("12345678-5"));
        assert!(is_valid_rut("12.345.678-5"));
        assert!(is_valid_rut("7061735-8"));
        assert!(is_valid_rut("7.061.735-8"));
    }

    #[test]
    fn check_digit_follows_module_11() {
        // 8*2 + 7*3 + 6*4 + 5*5 + 4*6 + 3*7 + 2*2 + 1*3 = 138; 11 - 138 % 11 = 5
        assert_eq!(check_digit("12345678"), Some('5'));
        // 5*2 + 3*3 + 7*4 + 1*5 + 6*6 + 0*7 + 7*2 = 102; 11 - 102 % 11 = 8
        assert_eq!(check_digit("7061735"), Some('8'));
        assert_eq!(check_digit("10000013"), Some('k'));
        assert_eq!(check_digit("10000004"), Some('0'));
        assert_eq!(check_digit("0"), Some('0'));
    }

    #[test]
    fn check_digit_rejects_empty_and_non_numeric() {
        assert_eq!(check_digit(""), None);
        assert_eq!(check_digit("12a45"), None);
        assert_eq!(check_digit("１２"), None);
    }

    #[test]
    fn k_is_case_insensitive() {
        assert!(is_valid_rut("10000013-k"));
        assert!(is_valid_rut("10.000.013-K"));
        assert_eq!(is_valid_rut("7061735-k"), is_valid_rut("7.061.735-K"));
    }

    #[test]
    fn wrong_check_digit_is_rejected() {
        assert!(!is_valid_rut("11111111-2"));
        assert!(!is_valid_rut("12.345.678-k"));
        assert!(!is_valid_rut("7061735-k"));
    }

    #[test]
    fn all_ones_is_valid_under_module_11() {
        // 1 * (2+3+4+5+6+7+2+3) = 32; 11 - 32 % 11 = 1
        assert!(is_valid_rut("11111111-1"));
    }

    #[test]
    fn single_digit_corruption_is_detected() {
        let body = "12345678";
        for (i, original) in body.char_indices() {
            for replacement in '0'..='9' {
                if replacement == original {
                    continue;
                }
                let mut corrupted = body.to_string();
                corrupted.replace_range(i..=i, &replacement.to_string());
                let candidate = format!("{corrupted}-5");
                assert!(!is_valid_rut(&candidate), "{candidate} should be rejected");
            }
        }
    }

    #[test]
    fn malformed_input_is_invalid() {
        let candidates = [
            "", "-", ".", "5", "-5", "k", "--..", "abcdefg-5", "12.3x5.678-5", "12345678-x",
        ];
        for candidate in candidates {
            assert!(!is_valid_rut(candidate), "{candidate:?} should be invalid");
        }
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert!(!is_valid_rut("ñ"));
        assert!(!is_valid_rut("1234-é"));
        assert!(!is_valid_rut("é-1"));
    }

    #[test]
    fn repeated_calls_agree() {
        for candidate in ["12.345.678-5", "11111111-2", ""] {
            assert_eq!(is_valid_rut(candidate), is_valid_rut(candidate));
        }
    }

    #[test]
    fn concurrent_calls_agree_with_sequential_results() {
        let candidates = [
            "12.345.678-5",
            "10000013-K",
            "7061735-k",
            "11111111-1",
            "11111111-2",
            "",
            "abcdefg-5",
        ];
        let expected: Vec<bool> = candidates.iter().map(|c| is_valid_rut(c)).collect();

        let run = || candidates.iter().map(|c| is_valid_rut(c)).collect::<Vec<_>>();

        std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| (0..500).all(|_| run() == expected)))
                .collect();
            for worker in workers {
                assert!(worker.join().expect("worker panicked"));
            }
        });
    }

    #[test]
    fn parse_normalises_representation() {
        let rut = Rut::parse("010.000.013-K").expect("valid rut");
        assert_eq!(rut.body(), "10000013");
        assert_eq!(rut.check_char(), 'k');
        assert_eq!(rut.to_string(), "10.000.013-K");

        let short = Rut::parse("0-0").expect("valid rut");
        assert_eq!(short.to_string(), "0-0");

        let seven = Rut::parse("7061735-8").expect("valid rut");
        assert_eq!(seven.to_string(), "7.061.735-8");
    }

    #[test]
    fn parse_rejects_what_the_predicate_rejects() {
        assert_matches!(Rut::parse("11111111-2"), Err(CoreError::Validation(_)));
        assert_matches!(Rut::parse(""), Err(CoreError::Validation(_)));
        assert_matches!(Rut::parse("abcdefg-5"), Err(CoreError::Validation(_)));
    }
}
