//! Presentation layer: fragments, template substitution, bundled assets.

pub mod assets;
pub mod fragment;
pub mod template;

pub use fragment::Fragment;
pub use template::{escape_html, render_template, TemplateContext};
