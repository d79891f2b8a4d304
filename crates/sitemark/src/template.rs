//! Page templates and base path rewriting

use std::fs;
use std::path::Path;

use crate::{io_error, Result};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML page template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        for placeholder in [TITLE_PLACEHOLDER, CONTENT_PLACEHOLDER] {
            if !source.contains(placeholder) {
                tracing::warn!(placeholder, "template has no placeholder");
            }
        }
        Self { source }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(io_error(path))?;
        Ok(Self::new(source))
    }

    /// Substitute every occurrence of both placeholders
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

/// Prefix root-relative `href="/` and `src="/` values with `base_path`.
///
/// This is a textual rewrite over the finished page. `base_path` is
/// expected to end with `/`.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}
