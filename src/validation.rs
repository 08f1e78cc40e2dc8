//! Validation of author-submitted configuration.
//!
//! Malformed input is rejected before anything is assigned, so a failed
//! submission leaves the persisted fields untouched.

use crate::error::{Result, WidgetError};

/// Maximum allowed length for an assessment key.
pub const MAX_ASSESSMENT_KEY_LENGTH: usize = 128;

/// Maximum permitted re-verification attempts an author may configure.
pub const MAX_ATTEMPTS: u32 = 1000;

/// Validates an assessment key submitted from the authoring form.
///
/// A key is valid if it is non-empty after trimming and no longer than
/// [`MAX_ASSESSMENT_KEY_LENGTH`] characters.
pub fn validate_related_assessment(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(WidgetError::Validation(
            "related assessment cannot be empty".to_string(),
        ));
    }

    if key.len() > MAX_ASSESSMENT_KEY_LENGTH {
        return Err(WidgetError::Validation(format!(
            "related assessment too long: {} characters (max {})",
            key.len(),
            MAX_ASSESSMENT_KEY_LENGTH
        )));
    }

    Ok(())
}

/// Validates an attempt count submitted from the authoring form.
pub fn validate_attempts(attempts: u32) -> Result<()> {
    if attempts > MAX_ATTEMPTS {
        return Err(WidgetError::Validation(format!(
            "attempts out of range: {attempts} (max {MAX_ATTEMPTS})"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_reasonable_keys() {
        assert!(validate_related_assessment("Assessment 1").is_ok());
        assert!(validate_related_assessment("FinalExam").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace_keys() {
        assert!(validate_related_assessment("").is_err());
        assert!(validate_related_assessment("   ").is_err());
    }

    #[test]
    fn test_rejects_oversized_key() {
        let key = "a".repeat(MAX_ASSESSMENT_KEY_LENGTH + 1);
        assert!(validate_related_assessment(&key).is_err());
    }

    #[test]
    fn test_attempts_bounds() {
        assert!(validate_attempts(0).is_ok());
        assert!(validate_attempts(MAX_ATTEMPTS).is_ok());
        assert!(validate_attempts(MAX_ATTEMPTS + 1).is_err());
    }
}
