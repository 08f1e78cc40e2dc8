//! Resources bundled with the widget, embedded at compile time.

/// Student-facing prompt rendered when no verification status exists yet.
pub const REVERIFICATION_HTML: &str = include_str!("../../static/html/reverification.html");

/// Status display rendered once the service reports a verification status.
pub const VERIFICATION_STATUS_HTML: &str =
    include_str!("../../static/html/verification_status.html");

/// Authoring form for `related_assessment` and `attempts`.
pub const CHECKPOINT_EDIT_HTML: &str = include_str!("../../static/html/checkpoint_edit.html");

/// Administrative preview shown when no reverification service is available.
pub const STUDIO_PREVIEW_HTML: &str = include_str!("../../static/html/studio_preview.html");

/// Client-side skip affordance, initialized as `SkipReverification`.
pub const SKIP_REVERIFICATION_JS: &str = include_str!("../../static/js/skip_reverification.js");

/// Client-side authoring form, initialized as `CheckpointEditBlock`.
pub const CHECKPOINT_EDIT_JS: &str = include_str!("../../static/js/checkpoint_edit.js");

/// Stylesheet attached to every student-facing fragment.
pub const REVERIFICATION_CSS: &str = include_str!("../../static/css/reverification.css");

/// Example scenario payload for host-side harness discovery.
pub const SCENARIO_XML: &str = include_str!("../../static/xml/reverification_block_example.xml");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_assets_are_nonempty() {
        for asset in [
            REVERIFICATION_HTML,
            VERIFICATION_STATUS_HTML,
            CHECKPOINT_EDIT_HTML,
            STUDIO_PREVIEW_HTML,
            SKIP_REVERIFICATION_JS,
            CHECKPOINT_EDIT_JS,
            REVERIFICATION_CSS,
            SCENARIO_XML,
        ] {
            assert!(!asset.trim().is_empty());
        }
    }
}
