//! JSON-shaped payloads for the widget's mutating handlers.
//!
//! The host delivers handler calls as JSON objects and relays the JSON
//! response back to the client scripts, so these types are the wire contract
//! of `submit_configuration` and `skip_verification`.

use serde::{Deserialize, Serialize};

use crate::models::{CourseId, UserId};

/// Payload of a configuration submission from the authoring form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitConfigurationRequest {
    /// Key of the assessment this checkpoint should gate.
    pub related_assessment: String,
    /// Permitted re-verification attempts.
    pub attempts: u32,
}

/// Payload of a skip request from the student-facing script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkipVerificationRequest {
    /// Checkpoint (assessment key) the skip applies to.
    pub checkpoint: String,
    pub user_id: UserId,
    pub course_id: CourseId,
}

/// Acknowledgment returned by both handlers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionResponse {
    pub result: String,
}

impl SubmissionResponse {
    pub fn success() -> Self {
        Self {
            result: "success".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submit_request_deserializes_from_form_json() {
        let request: SubmitConfigurationRequest =
            serde_json::from_value(json!({"related_assessment": "FinalExam", "attempts": 5}))
                .unwrap();
        assert_eq!(request.related_assessment, "FinalExam");
        assert_eq!(request.attempts, 5);
    }

    #[test]
    fn test_skip_request_accepts_numeric_user_id() {
        let request: SkipVerificationRequest = serde_json::from_value(json!({
            "checkpoint": "FinalExam",
            "user_id": 5,
            "course_id": "edX/Demo/Course"
        }))
        .unwrap();
        assert_eq!(request.user_id, UserId::from(5));
        assert_eq!(request.course_id, CourseId::from("edX/Demo/Course"));
    }

    #[test]
    fn test_success_response_serializes_as_result_success() {
        let response = SubmissionResponse::success();
        assert!(response.is_success());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"result": "success"})
        );
    }
}
