//! The checkpoint widget: view selection and configuration handling.
//!
//! This module ties the persisted fields, the injected reverification
//! service, and the template layer together:
//!
//! - `student_view` picks one of three renderings: studio preview when no
//!   service is available, the verify prompt when the user has no status
//!   yet, or the status display.
//! - `studio_view` renders the authoring form.
//! - `submit_configuration` and `skip_verification` are the two JSON
//!   handlers the client scripts post to.

mod handlers;

pub use handlers::{SkipVerificationRequest, SubmissionResponse, SubmitConfigurationRequest};

use tracing::{debug, error, info};

use crate::error::Result;
use crate::models::fields::meta;
use crate::models::{ContentFields, SettingsFields};
use crate::render::{assets, escape_html, render_template, Fragment, TemplateContext};
use crate::service::{HostContext, ServiceError};
use crate::validation;

/// Shown in the student view and preview until an author submits
/// configuration.
pub const NOT_CONFIGURED_MESSAGE: &str =
    "This checkpoint is not associated with an assessment yet.";

/// Shown in place of the raw status once a user has skipped re-verification.
pub const SKIPPED_MESSAGE: &str = "You have skipped re-verification.";

/// Client-side class initialized for the student prompt fragment.
const SKIP_JS_INIT: &str = "SkipReverification";

/// Client-side class initialized for the authoring form fragment.
const EDIT_JS_INIT: &str = "CheckpointEditBlock";

/// A workbench scenario exposed for host-side harness discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub title: &'static str,
    pub xml: &'static str,
}

/// One re-verification checkpoint instance placed in a course.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckpointWidget {
    pub settings: SettingsFields,
    pub content: ContentFields,
}

impl CheckpointWidget {
    /// A freshly placed checkpoint with default fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// A checkpoint restored from host field storage.
    pub fn from_fields(settings: SettingsFields, content: ContentFields) -> Self {
        Self { settings, content }
    }

    /// Label the host shows in the course navigation.
    pub fn display_name(&self) -> &str {
        &self.settings.display_name
    }

    /// Render the student-facing view.
    ///
    /// With no reverification service in the context this falls back to the
    /// studio preview. Otherwise the user's status decides between the
    /// verify prompt (no status yet, link issued by `start_verification`)
    /// and the status display.
    pub fn student_view(&self, ctx: &HostContext<'_>) -> Result<Fragment> {
        // The service is registered by the learning platform; authoring
        // contexts do not have it.
        let Some(service) = ctx.service() else {
            debug!(usage = %ctx.usage(), "no reverification service, rendering studio preview");
            return self.studio_preview(ctx);
        };

        let Some(user) = ctx.user() else {
            debug!(usage = %ctx.usage(), "no user identity, rendering studio preview");
            return self.studio_preview(ctx);
        };

        let related_assessment = &self.content.related_assessment;
        let status = service.get_status(user, ctx.course(), related_assessment)?;

        let mut fragment = Fragment::new();
        match status {
            Some(status) => {
                debug!(%status, %user, "rendering verification status");
                let message = if status.is_skipped() {
                    SKIPPED_MESSAGE.to_string()
                } else {
                    status.to_string()
                };
                let context = TemplateContext::new().with("status_message", message);
                fragment.add_content(render_template(assets::VERIFICATION_STATUS_HTML, &context)?);
            }
            None => {
                let link =
                    service.start_verification(ctx.course(), related_assessment, ctx.usage())?;
                debug!(%user, %link, "issued reverification link");
                let context = TemplateContext::new()
                    .with("configuration_notice", self.configuration_notice())
                    .with("related_assessment", related_assessment.as_str())
                    .with("course_id", ctx.course().as_str())
                    .with("reverification_link", link);
                fragment.add_content(render_template(assets::REVERIFICATION_HTML, &context)?);
                fragment.add_javascript(assets::SKIP_REVERIFICATION_JS);
                fragment.initialize_js(SKIP_JS_INIT);
            }
        }

        fragment.add_css(assets::REVERIFICATION_CSS);
        Ok(fragment)
    }

    /// Render the authoring form, pre-populated with the current fields.
    pub fn studio_view(&self) -> Result<Fragment> {
        let context = TemplateContext::new()
            .with("related_assessment_label", meta::RELATED_ASSESSMENT_LABEL)
            .with("related_assessment_help", meta::RELATED_ASSESSMENT_HELP)
            .with(
                "related_assessment",
                self.content.related_assessment.as_str(),
            )
            .with("attempts_label", meta::ATTEMPTS_LABEL)
            .with("attempts_help", meta::ATTEMPTS_HELP)
            .with("attempts", self.settings.attempts.to_string());

        let html = render_template(assets::CHECKPOINT_EDIT_HTML, &context)
            .inspect_err(|err| error!(%err, "error creating fragment for studio edit view"))?;

        let mut fragment = Fragment::new();
        fragment.add_content(html);
        fragment.add_javascript(assets::CHECKPOINT_EDIT_JS);
        fragment.initialize_js(EDIT_JS_INIT);
        Ok(fragment)
    }

    /// Persist a configuration submission from the authoring form.
    ///
    /// Malformed input is rejected before anything is assigned; a failed
    /// submission leaves all fields untouched. A successful submission sets
    /// `is_configured`, which never goes back to false.
    pub fn submit_configuration(
        &mut self,
        request: SubmitConfigurationRequest,
    ) -> Result<SubmissionResponse> {
        validation::validate_related_assessment(&request.related_assessment)?;
        validation::validate_attempts(request.attempts)?;

        self.content.related_assessment = request.related_assessment;
        self.settings.attempts = request.attempts;
        self.content.is_configured = true;

        info!(
            related_assessment = %self.content.related_assessment,
            attempts = self.settings.attempts,
            "checkpoint configuration updated"
        );
        Ok(SubmissionResponse::success())
    }

    /// Relay a skip request to the reverification service.
    ///
    /// Touches no local state. A context without the service cannot
    /// legitimately produce a skip request, so absence is a dependency
    /// error here rather than a preview branch.
    pub fn skip_verification(
        &self,
        ctx: &HostContext<'_>,
        request: SkipVerificationRequest,
    ) -> Result<SubmissionResponse> {
        let service = ctx.service().ok_or(ServiceError::Unavailable)?;
        service.skip_verification(&request.checkpoint, &request.user_id, &request.course_id)?;

        debug!(
            checkpoint = %request.checkpoint,
            user = %request.user_id,
            course = %request.course_id,
            "relayed skip request to reverification service"
        );
        Ok(SubmissionResponse::success())
    }

    /// JSON entry point for [`Self::submit_configuration`], matching the
    /// host's handler protocol: parsed JSON in, JSON acknowledgment out.
    pub fn submit_configuration_json(
        &mut self,
        data: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let request: SubmitConfigurationRequest = serde_json::from_value(data)
            .map_err(|err| crate::error::WidgetError::Validation(format!(
                "malformed configuration payload: {err}"
            )))?;
        let response = self.submit_configuration(request)?;
        Ok(serde_json::json!({ "result": response.result }))
    }

    /// JSON entry point for [`Self::skip_verification`].
    pub fn skip_verification_json(
        &self,
        ctx: &HostContext<'_>,
        data: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let request: SkipVerificationRequest = serde_json::from_value(data)
            .map_err(|err| crate::error::WidgetError::Validation(format!(
                "malformed skip payload: {err}"
            )))?;
        let response = self.skip_verification(ctx, request)?;
        Ok(serde_json::json!({ "result": response.result }))
    }

    /// Render the administrative preview used when no reverification
    /// service is available.
    pub fn studio_preview(&self, ctx: &HostContext<'_>) -> Result<Fragment> {
        let notice = if self.content.is_configured {
            format!(
                "<p class=\"preview-state\">This checkpoint is associated with \
                 <strong>{}</strong>.</p>",
                escape_html(&self.content.related_assessment)
            )
        } else {
            self.configuration_notice()
        };

        let context = TemplateContext::new()
            .with("configuration_notice", notice)
            .with(
                "view_container_link",
                format!("/container/{}", ctx.usage()),
            );

        let mut fragment = Fragment::new();
        fragment.add_content(render_template(assets::STUDIO_PREVIEW_HTML, &context)?);
        Ok(fragment)
    }

    /// Scenarios advertised to host-side workbench harnesses.
    pub fn workbench_scenarios() -> Vec<Scenario> {
        vec![Scenario {
            title: "Re-Verification Checkpoint",
            xml: assets::SCENARIO_XML,
        }]
    }

    /// Pre-rendered notice markup, empty once the checkpoint is configured.
    fn configuration_notice(&self) -> String {
        if self.content.is_configured {
            String::new()
        } else {
            format!("<p class=\"configuration-notice\">{NOT_CONFIGURED_MESSAGE}</p>")
        }
    }
}
