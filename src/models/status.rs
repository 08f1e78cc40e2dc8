//! Verification status reported by the reverification service.
//!
//! The service answers status lookups with short lowercase strings. The
//! known values get variants so view code can branch on them; anything else
//! is preserved verbatim in `Other` because the student view renders
//! unrecognized statuses as-is.

/// Status of a user's re-verification for one (course, assessment) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationStatus {
    /// Photos were submitted and are awaiting review.
    Submitted,
    /// The identity check passed.
    Approved,
    /// The identity check failed.
    Denied,
    /// The verification attempt errored out on the service side.
    Error,
    /// The user chose to skip re-verification for this course.
    Skipped,
    /// Any status value this widget does not recognize, kept verbatim.
    Other(String),
}

impl VerificationStatus {
    pub fn is_skipped(&self) -> bool {
        matches!(self, VerificationStatus::Skipped)
    }

    pub fn as_str(&self) -> &str {
        match self {
            VerificationStatus::Submitted => "submitted",
            VerificationStatus::Approved => "approved",
            VerificationStatus::Denied => "denied",
            VerificationStatus::Error => "error",
            VerificationStatus::Skipped => "skipped",
            VerificationStatus::Other(value) => value,
        }
    }
}

impl std::fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for VerificationStatus {
    fn from(value: &str) -> Self {
        match value {
            "submitted" => VerificationStatus::Submitted,
            "approved" => VerificationStatus::Approved,
            "denied" => VerificationStatus::Denied,
            "error" => VerificationStatus::Error,
            "skipped" => VerificationStatus::Skipped,
            other => VerificationStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for VerificationStatus {
    fn from(value: String) -> Self {
        VerificationStatus::from(value.as_str())
    }
}
