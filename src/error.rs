//! Error types for the checkpoint widget.
//!
//! The host runtime branches on the error kind: validation failures are
//! returned to the authoring form, dependency failures let the host pick a
//! fallback rendering, template failures indicate a packaging defect.

use crate::service::ServiceError;

/// Errors surfaced by widget operations.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// Configuration input was rejected before anything was persisted.
    #[error("validation error: {0}")]
    Validation(String),

    /// The injected reverification service failed or was required but absent.
    #[error("reverification service error: {0}")]
    Dependency(#[from] ServiceError),

    /// A bundled template referenced a context key that was not supplied.
    /// This is a packaging defect, not a user-triggerable condition.
    #[error("template error: {0}")]
    Template(String),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
