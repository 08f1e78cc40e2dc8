//! Minimal template substitution for the bundled HTML assets.
//!
//! Templates use `{{ key }}` placeholders, substituted from a string
//! context with HTML escaping. The `{{{ key }}}` form inserts the value
//! raw, for context entries that are themselves pre-rendered markup.
//! A placeholder with no matching context entry is a packaging defect and
//! fails the render.

use std::collections::HashMap;

use regex::Regex;
use tracing::error;

use crate::error::{Result, WidgetError};

/// String map substituted into a template.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: HashMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Builder-style insert for chained construction.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Escape a value for safe insertion into HTML text or attribute content.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Substitute `{{ key }}` (escaped) and `{{{ key }}}` (raw) placeholders
/// from the context into the template.
pub fn render_template(template: &str, context: &TemplateContext) -> Result<String> {
    // Raw form must be matched before the escaped form so that `{{{ key }}}`
    // is not consumed as `{{ {key} }}`.
    let placeholder = Regex::new(
        r"\{\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}\}|\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}",
    )
    .expect("Invalid placeholder pattern");

    let mut output = String::with_capacity(template.len());
    let mut last_end = 0;

    for caps in placeholder.captures_iter(template) {
        let whole = caps.get(0).expect("capture group 0 always present");
        output.push_str(&template[last_end..whole.start()]);
        last_end = whole.end();

        if let Some(raw_key) = caps.get(1) {
            let value = context.get(raw_key.as_str()).ok_or_else(|| {
                missing_key_error(raw_key.as_str())
            })?;
            output.push_str(value);
        } else if let Some(escaped_key) = caps.get(2) {
            let value = context.get(escaped_key.as_str()).ok_or_else(|| {
                missing_key_error(escaped_key.as_str())
            })?;
            output.push_str(&escape_html(value));
        }
    }

    output.push_str(&template[last_end..]);
    Ok(output)
}

fn missing_key_error(key: &str) -> WidgetError {
    error!(key, "template placeholder has no context entry");
    WidgetError::Template(format!("no context entry for placeholder '{key}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_escaped_placeholder() {
        let ctx = TemplateContext::new().with("name", "Tom & Jerry");
        let html = render_template("<p>{{ name }}</p>", &ctx).unwrap();
        assert_eq!(html, "<p>Tom &amp; Jerry</p>");
    }

    #[test]
    fn test_raw_placeholder_is_not_escaped() {
        let ctx = TemplateContext::new().with("notice", "<em>configured</em>");
        let html = render_template("<div>{{{ notice }}}</div>", &ctx).unwrap();
        assert_eq!(html, "<div><em>configured</em></div>");
    }

    #[test]
    fn test_missing_key_is_a_template_error() {
        let ctx = TemplateContext::new();
        let err = render_template("{{ absent }}", &ctx).unwrap_err();
        assert!(matches!(err, WidgetError::Template(_)));
    }

    #[test]
    fn test_repeated_and_adjacent_placeholders() {
        let ctx = TemplateContext::new().with("a", "1").with("b", "2");
        let html = render_template("{{ a }}{{ b }}{{ a }}", &ctx).unwrap();
        assert_eq!(html, "121");
    }

    #[test]
    fn test_text_without_placeholders_passes_through() {
        let ctx = TemplateContext::new();
        let html = render_template("<p>static</p>", &ctx).unwrap();
        assert_eq!(html, "<p>static</p>");
    }

    #[test]
    fn test_escapes_attribute_quotes() {
        let ctx = TemplateContext::new().with("value", "a\"b'c");
        let html = render_template("<input value=\"{{ value }}\">", &ctx).unwrap();
        assert_eq!(html, "<input value=\"a&quot;b&#39;c\">");
    }
}
