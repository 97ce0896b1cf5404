//! Pure structural format check for ISO 9362 Business Identifier Codes.
//!
//! A BIC is 8 or 11 characters long:
//!
//! | Positions | Segment          | Characters          |
//! |-----------|------------------|---------------------|
//! | 1–4       | institution code | letters             |
//! | 5–6       | country code     | letters             |
//! | 7–8       | location code    | letters or digits   |
//! | 9–11      | branch code      | letters or digits   |
//!
//! Matching is case-insensitive: the candidate is ASCII-upper-cased before the
//! anchored pattern is applied. Non-ASCII characters are never accepted.
//!
//! # References
//!
//! - ISO 9362:2014, Banking - Banking telecommunication messages - Business
//!   identifier code (BIC)
use std::sync::LazyLock;

use regex::Regex;

/// Length of a BIC without a branch code.
pub const BIC8_LEN: usize = 8;

/// Length of a BIC carrying a branch code.
pub const BIC11_LEN: usize = 11;

/// Full-string BIC pattern, applied to upper-cased input.
static BIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z]{6}[A-Z0-9]{2}(?:[A-Z0-9]{3})?$")
        .unwrap_or_else(|_| Regex::new("a^").unwrap_or_else(|_| unreachable!("regex engine broken")))
});

/// Returns `true` if `candidate` has a valid ISO 9362 structure.
///
/// The length is counted in characters and must be exactly 8 or exactly 11.
/// Any other input, including the empty string and strings containing
/// non-ASCII characters, yields `false`. This function never panics.
///
/// # Examples
///
/// ```
/// use bicval_core::format::is_valid_format;
///
/// assert!(is_valid_format("DEUTDEFF"));
/// assert!(is_valid_format("deutdeff500"));
/// assert!(!is_valid_format("DEUT1DFF"));
/// assert!(!is_valid_format("DEUTDEFFX"));
/// ```
pub fn is_valid_format(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if !(len == BIC8_LEN || len == BIC11_LEN) {
        return false;
    }
    BIC_RE.is_match(&candidate.to_ascii_uppercase())
}

/// Same as [`is_valid_format`], treating an absent candidate as invalid.
///
/// ```
/// use bicval_core::format::is_valid_format_opt;
///
/// assert!(!is_valid_format_opt(None));
/// assert!(is_valid_format_opt(Some("DEUTDEFF")));
/// ```
pub fn is_valid_format_opt(candidate: Option<&str>) -> bool {
    candidate.is_some_and(is_valid_format)
}
