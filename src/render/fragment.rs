//! Renderable fragment returned to the host.
//!
//! A fragment is markup plus the script/style resources the host should
//! attach alongside it, and optionally the name of a client-side class to
//! initialize once the markup is in the page.

/// A rendered view: markup with attached resources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    content: String,
    javascript: Vec<String>,
    css: Vec<String>,
    js_init: Option<String>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append markup to the fragment body.
    pub fn add_content(&mut self, html: impl Into<String>) {
        self.content.push_str(&html.into());
    }

    /// Attach a javascript resource.
    pub fn add_javascript(&mut self, js: impl Into<String>) {
        self.javascript.push(js.into());
    }

    /// Attach a stylesheet resource.
    pub fn add_css(&mut self, css: impl Into<String>) {
        self.css.push(css.into());
    }

    /// Name the client-side class the host should initialize for this
    /// fragment.
    pub fn initialize_js(&mut self, class_name: impl Into<String>) {
        self.js_init = Some(class_name.into());
    }

    /// The fragment's markup body.
    pub fn body_html(&self) -> &str {
        &self.content
    }

    pub fn javascript(&self) -> &[String] {
        &self.javascript
    }

    pub fn css(&self) -> &[String] {
        &self.css
    }

    pub fn js_init(&self) -> Option<&str> {
        self.js_init.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_accumulates_content_and_resources() {
        let mut fragment = Fragment::new();
        fragment.add_content("<div>");
        fragment.add_content("</div>");
        fragment.add_javascript("console.log('hi');");
        fragment.add_css(".widget {}");
        fragment.initialize_js("SkipReverification");

        assert_eq!(fragment.body_html(), "<div></div>");
        assert_eq!(fragment.javascript().len(), 1);
        assert_eq!(fragment.css().len(), 1);
        assert_eq!(fragment.js_init(), Some("SkipReverification"));
    }

    #[test]
    fn test_empty_fragment() {
        let fragment = Fragment::new();
        assert_eq!(fragment.body_html(), "");
        assert!(fragment.js_init().is_none());
    }
}
