pub mod fields;
pub mod keys;
pub mod status;

pub use fields::{ContentFields, SettingsFields};
pub use keys::{CourseId, UsageId, UserId};
pub use status::VerificationStatus;
