//! The "nice string" classifier.
//!
//! A string is nice when at least two of these hold:
//!
//! - it contains none of `ba`, `be`, `bu`
//! - it contains at least three vowels (`a`, `e`, `i`, `o`, `u`)
//! - it contains a doubled lowercase letter (`aa`, `ss`, ...)

use std::sync::LazyLock;

use regex::Regex;

static BAD_SUBSTRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("b[aeu]").expect("valid bad-substring regex"));

static VOWEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[aeiou]").expect("valid vowel regex"));

/// Outcome of each individual nice-string rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NiceConditions {
    /// No `ba`, `be` or `bu` substring.
    pub no_bad_substring: bool,
    /// Three or more vowels.
    pub enough_vowels: bool,
    /// At least one pair of identical adjacent letters `a`-`z`.
    pub has_double_letter: bool,
}

impl NiceConditions {
    /// Number of satisfied rules (0..=3).
    pub fn satisfied(&self) -> usize {
        [self.no_bad_substring, self.enough_vowels, self.has_double_letter]
            .into_iter()
            .filter(|c| *c)
            .count()
    }
}

/// Evaluate all three rules on `s`.
pub fn nice_conditions(s: &str) -> NiceConditions {
    NiceConditions {
        no_bad_substring: !BAD_SUBSTRING.is_match(s),
        enough_vowels: VOWEL.find_iter(s).count() >= 3,
        // The regex crate has no backreferences, so compare neighbours directly.
        has_double_letter: s
            .as_bytes()
            .windows(2)
            .any(|w| w[0] == w[1] && w[0].is_ascii_lowercase()),
    }
}

/// Returns `true` if at least two of the three rules hold for `s`.
pub fn is_nice(s: &str) -> bool {
    nice_conditions(s).satisfied() >= 2
}
