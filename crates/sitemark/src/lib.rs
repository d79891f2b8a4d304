//! # sitemark
//!
//! A small static site generator built on [`sitemark_core`].
//!
//! ## Layout
//!
//! Every `index.md` under the content directory becomes an `index.html` at
//! the same relative location under the output directory. The static
//! directory is copied verbatim first, after the output directory is wiped.
//!
//! ```text
//! content/index.md           ──▶ public/index.html
//! content/blog/post/index.md ──▶ public/blog/post/index.html
//! static/images/logo.png     ──▶ public/images/logo.png
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sitemark::{render_markdown_page, Template};
//!
//! let template = Template::new("<title>{{ Title }}</title><main>{{ Content }}</main>");
//! let html = render_markdown_page("# Home\n\n[About](/about)", &template, "/site/").unwrap();
//!
//! assert_eq!(
//!     html,
//!     r#"<title>Home</title><main><div><h1>Home</h1><p><a href="/site/about">About</a></p></div></main>"#
//! );
//! ```

pub mod assets;
pub mod config;
pub mod generate;
mod service;
pub mod template;

use std::path::PathBuf;

use sitemark_core::MarkdownError;

pub use assets::copy_static;
pub use config::{ConfigOverrides, SiteConfig};
pub use generate::{generate_page, generate_pages_recursive, render_markdown_page};
pub use service::{BuildReport, SiteGenerator};
pub use template::{rewrite_base_path, Template};

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to convert {}: {source}", path.display())]
    Markdown {
        path: PathBuf,
        source: MarkdownError,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// Attach a path to an I/O error
pub(crate) fn io_error(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> SiteError {
    let path = path.into();
    move |source| SiteError::Io { path, source }
}
