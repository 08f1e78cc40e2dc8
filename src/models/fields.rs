//! Persisted checkpoint fields.
//!
//! The host stores widget state in two scopes: author-configured settings
//! (course-wide) and authored content. Each scope is one record here, with
//! the scope's defaults baked into `Default` so unset host storage
//! deserializes to a usable checkpoint.
//!
//! Invariants:
//! - `is_configured` only ever moves false -> true; nothing resets it.
//! - `related_assessment` and `attempts` are mutated only by
//!   `CheckpointWidget::submit_configuration`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DISPLAY_NAME: &str = "Re-Verification Checkpoint";
pub const DEFAULT_RELATED_ASSESSMENT: &str = "Assessment 1";

/// Authoring-form labels and help text for the editable fields.
///
/// Kept as canonical constants so the edit template and any host-side field
/// listing agree on the copy.
pub mod meta {
    pub const RELATED_ASSESSMENT_LABEL: &str = "Related Assessment";
    pub const RELATED_ASSESSMENT_HELP: &str = "This name will allow you to distinguish distinct \
         checkpoints that show up in the reporting about student verification status.";

    pub const ATTEMPTS_LABEL: &str = "Verification Attempts";
    pub const ATTEMPTS_HELP: &str = "This is the number of attempts that students are permitted \
         to get a valid re-verification.";

    pub const DISPLAY_NAME_HELP: &str =
        "This name appears in the horizontal navigation at the top of the page.";

    pub const DUE_LABEL: &str = "Related Assessment due date";
    pub const DUE_HELP: &str =
        "ISO-8601 formatted string representing the due date of this related assessment.";
}

/// Author-configured fields, persisted in the host's settings scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SettingsFields {
    /// Label shown in the course navigation.
    pub display_name: String,
    /// Maximum permitted re-verification attempts.
    pub attempts: u32,
    /// Optional due date of the related assessment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,
}

impl Default for SettingsFields {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            attempts: 0,
            due: None,
        }
    }
}

/// Authored content fields, persisted in the host's content scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContentFields {
    /// Key of the assessment this checkpoint gates.
    pub related_assessment: String,
    /// Whether an author has submitted configuration for this checkpoint.
    pub is_configured: bool,
}

impl Default for ContentFields {
    fn default() -> Self {
        Self {
            related_assessment: DEFAULT_RELATED_ASSESSMENT.to_string(),
            is_configured: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_fields_carry_defaults() {
        let settings = SettingsFields::default();
        assert_eq!(settings.display_name, DEFAULT_DISPLAY_NAME);
        assert_eq!(settings.attempts, 0);
        assert!(settings.due.is_none());

        let content = ContentFields::default();
        assert_eq!(content.related_assessment, DEFAULT_RELATED_ASSESSMENT);
        assert!(!content.is_configured);
    }

    #[test]
    fn test_unset_storage_deserializes_to_defaults() {
        let settings: SettingsFields = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, SettingsFields::default());

        let content: ContentFields = serde_json::from_str("{}").unwrap();
        assert_eq!(content, ContentFields::default());
    }

    #[test]
    fn test_partial_storage_keeps_other_defaults() {
        let content: ContentFields =
            serde_json::from_str(r#"{"related_assessment": "FinalExam"}"#).unwrap();
        assert_eq!(content.related_assessment, "FinalExam");
        assert!(!content.is_configured);
    }

    #[test]
    fn test_settings_round_trip_with_due_date() {
        let settings = SettingsFields {
            display_name: "Midterm checkpoint".to_string(),
            attempts: 3,
            due: Some("2026-06-01T00:00:00Z".parse().unwrap()),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: SettingsFields = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}
