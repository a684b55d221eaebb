//! Allow-list validators for untrusted strings.
//!
//! Every function here answers a yes/no question about a single value and
//! never modifies it. Patterns are anchored at both ends, so a value passes
//! only if the whole string matches.

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest input accepted by [`validate_input`], in characters.
pub const MAX_INPUT_LENGTH: usize = 1000;

static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid alphanumeric pattern"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

static HOSTNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9.-]+$").expect("valid hostname pattern"));

/// Check that `text` is non-empty and made only of ASCII letters and digits.
///
/// # Examples
///
/// ```
/// use sample_app::input::validate_alphanumeric;
///
/// assert!(validate_alphanumeric("abc123"));
/// assert!(!validate_alphanumeric("abc 123"));
/// assert!(!validate_alphanumeric(""));
/// ```
pub fn validate_alphanumeric(text: &str) -> bool {
    ALPHANUMERIC.is_match(text)
}

/// Check that `text` looks like `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use sample_app::input::validate_email;
///
/// assert!(validate_email("test@example.com"));
/// assert!(!validate_email("test@"));
/// ```
pub fn validate_email(text: &str) -> bool {
    EMAIL.is_match(text)
}

/// Check that `text` only contains hostname characters (letters, digits, `.` and `-`).
pub fn validate_hostname(text: &str) -> bool {
    HOSTNAME.is_match(text)
}

/// Generic sanity check for free-form input.
///
/// Rejects absent, empty and whitespace-only values, and anything longer
/// than [`MAX_INPUT_LENGTH`] characters.
///
/// # Examples
///
/// ```
/// use sample_app::input::validate_input;
///
/// assert!(validate_input(Some("test")));
/// assert!(!validate_input(Some("   ")));
/// assert!(!validate_input(None));
/// ```
pub fn validate_input(text: Option<&str>) -> bool {
    let Some(text) = text else {
        return false;
    };
    if text.trim().is_empty() {
        return false;
    }
    text.chars().count() <= MAX_INPUT_LENGTH
}
