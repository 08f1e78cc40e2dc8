//! The injected reverification capability and the per-render host context.
//!
//! The widget never talks to a verification backend directly. The host
//! runtime may hand it an object implementing [`ReverificationService`]; in
//! authoring-preview contexts no such object exists, and the widget falls
//! back to a static preview. Absence is therefore a normal branch, not an
//! error — only operations that cannot proceed without the service (the skip
//! relay) report it as [`ServiceError::Unavailable`].

use crate::models::{CourseId, UsageId, UserId, VerificationStatus};

/// Failure reported by, or about, the reverification service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The service backend failed while handling a call.
    #[error("reverification backend failure: {0}")]
    Backend(String),

    /// The operation needed the service but the host supplied none.
    #[error("reverification service is not available in this context")]
    Unavailable,
}

/// External capability that tracks verification attempts and status for a
/// user within a course, and issues re-verification links.
///
/// The widget treats the service as opaque, trusted, and synchronous.
/// `start_verification` may be called again on every page load for a user
/// with no status yet; the service is responsible for making that safe.
pub trait ReverificationService {
    /// Current verification status for (user, course, assessment), or `None`
    /// if the user has not started re-verification at this checkpoint.
    fn get_status(
        &self,
        user: &UserId,
        course: &CourseId,
        related_assessment: &str,
    ) -> Result<Option<VerificationStatus>, ServiceError>;

    /// Begin (or resume) a verification attempt and return the link the
    /// student should follow.
    fn start_verification(
        &self,
        course: &CourseId,
        related_assessment: &str,
        usage: &UsageId,
    ) -> Result<String, ServiceError>;

    /// Record that the user skipped re-verification at the given checkpoint.
    fn skip_verification(
        &self,
        checkpoint: &str,
        user: &UserId,
        course: &CourseId,
    ) -> Result<(), ServiceError>;
}

/// Everything the host supplies for one render or handler call.
///
/// `user` is `None` in studio-preview contexts; the preview check mirrors
/// that (the host's anonymous ids are not a reliable signal). A missing
/// course id falls back to [`crate::models::keys::DEFAULT_COURSE_ID`] so
/// harness contexts still render.
pub struct HostContext<'a> {
    user: Option<UserId>,
    course: CourseId,
    usage: UsageId,
    service: Option<&'a dyn ReverificationService>,
}

impl<'a> HostContext<'a> {
    pub fn new(
        user: Option<UserId>,
        course: Option<CourseId>,
        usage: UsageId,
        service: Option<&'a dyn ReverificationService>,
    ) -> Self {
        Self {
            user,
            course: course.unwrap_or_default(),
            usage,
            service,
        }
    }

    /// Context for an authoring preview: no user, no service.
    pub fn preview(usage: UsageId) -> Self {
        Self::new(None, None, usage, None)
    }

    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    pub fn course(&self) -> &CourseId {
        &self.course
    }

    pub fn usage(&self) -> &UsageId {
        &self.usage
    }

    /// The injected reverification capability, if this context has one.
    pub fn service(&self) -> Option<&'a dyn ReverificationService> {
        self.service
    }

    /// True when rendering inside the authoring tool, which supplies no
    /// user identity.
    pub fn in_studio_preview(&self) -> bool {
        self.user.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::keys::DEFAULT_COURSE_ID;

    #[test]
    fn test_preview_context_has_no_user_or_service() {
        let ctx = HostContext::preview(UsageId::from("block-1"));
        assert!(ctx.in_studio_preview());
        assert!(ctx.service().is_none());
        assert_eq!(ctx.course().as_str(), DEFAULT_COURSE_ID);
    }

    #[test]
    fn test_missing_course_falls_back_to_default() {
        let ctx = HostContext::new(
            Some(UserId::from("u-1")),
            None,
            UsageId::from("block-1"),
            None,
        );
        assert!(!ctx.in_studio_preview());
        assert_eq!(ctx.course().as_str(), DEFAULT_COURSE_ID);
    }
}
