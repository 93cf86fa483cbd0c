//! Semantic validation helpers for store inputs.
//!
//! Shape validation (field presence, types) is the caller's job; these
//! cover the invariants the data layer owns: email format and the
//! progress range.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Minimum portfolio progress percentage.
pub const MIN_PROGRESS: i32 = 0;

/// Maximum portfolio progress percentage.
pub const MAX_PROGRESS: i32 = 100;

/// Basic email shape: non-empty local part, `@`, domain with at least
/// one dot, no whitespace. Deliberately loose; the unique constraint is
/// what matters for correctness.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Validate that an email address matches the basic format rule.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

/// Validate that a progress value is within `[MIN_PROGRESS, MAX_PROGRESS]`.
pub fn validate_progress(progress: i32) -> Result<(), CoreError> {
    if (MIN_PROGRESS..=MAX_PROGRESS).contains(&progress) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "progress must be between {MIN_PROGRESS} and {MAX_PROGRESS}, got {progress}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_email ------------------------------------------------------

    #[test]
    fn accepts_plain_email() {
        assert!(validate_email("a@x.com").is_ok());
    }

    #[test]
    fn accepts_dotted_local_part() {
        assert!(validate_email("john.smith@hospital.com").is_ok());
    }

    #[test]
    fn rejects_missing_at() {
        assert!(validate_email("john.smith.hospital.com").is_err());
    }

    #[test]
    fn rejects_missing_domain_dot() {
        assert!(validate_email("a@localhost").is_err());
    }

    #[test]
    fn rejects_whitespace() {
        assert!(validate_email("a b@x.com").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(validate_email("").is_err());
    }

    // -- validate_progress ---------------------------------------------------

    #[test]
    fn valid_progress_at_bounds() {
        assert!(validate_progress(0).is_ok());
        assert!(validate_progress(100).is_ok());
    }

    #[test]
    fn rejects_progress_below_minimum() {
        assert!(validate_progress(-1).is_err());
    }

    #[test]
    fn rejects_progress_above_maximum() {
        assert!(validate_progress(101).is_err());
    }
}
