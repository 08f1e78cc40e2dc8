//! In-course identity re-verification checkpoint widget.
//!
//! A checkpoint is placed in a course by a host learning platform and gates
//! progress on identity re-verification. The host owns field persistence,
//! user/course identity, and final page assembly; this crate owns the
//! persisted field records, the view-selection logic, and the
//! template/fragment presentation layer.
//!
//! The actual verification flow lives in an external reverification service
//! the host may inject per render (see [`service::ReverificationService`]).
//! When no service is available, as in authoring-preview contexts, the
//! widget renders a static administrative preview instead.

pub mod error;
pub mod models;
pub mod render;
pub mod service;
pub mod validation;
pub mod widget;

pub use error::{Result, WidgetError};
pub use models::{ContentFields, CourseId, SettingsFields, UsageId, UserId, VerificationStatus};
pub use render::Fragment;
pub use service::{HostContext, ReverificationService, ServiceError};
pub use widget::{
    CheckpointWidget, Scenario, SkipVerificationRequest, SubmissionResponse,
    SubmitConfigurationRequest,
};
