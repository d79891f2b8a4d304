//! sitemark-core - Markdown subset to HTML
//!
//! This crate provides the parsing and rendering pipeline used by the
//! `sitemark` static site generator. It understands a small, fixed subset of
//! Markdown: headings, fenced code blocks, block quotes, flat lists,
//! paragraphs, and bold/italic/code/link/image spans.
//!
//! # Architecture
//!
//! ```text
//!                ┌────────────┐   Blocks   ┌──────────────┐   Node    ┌──────────┐
//! Markdown ────▶ │  segment   │ ─────────▶ │    build     │ ────────▶ │  render  │ ──▶ HTML
//!                └────────────┘            └──────┬───────┘           └──────────┘
//!                                                 │ per inline region
//!                                          ┌──────▼───────┐
//!                                          │   tokenize   │
//!                                          └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use sitemark_core::{extract_title, parse_document, render};
//!
//! let markdown = "# Hello\n\nThis is **bold** text";
//!
//! let root = parse_document(markdown).unwrap();
//! let html = render(&root).unwrap();
//!
//! assert_eq!(html, "<div><h1>Hello</h1><p>This is <b>bold</b> text</p></div>");
//! assert_eq!(extract_title(markdown).unwrap(), "Hello");
//! ```

mod ast;
mod blocks;
mod convert;
pub mod node;
mod render;
mod title;
mod tokenize;

pub use ast::{Block, BlockKind, Span, SpanKind};
pub use blocks::{classify, segment};
pub use convert::{block_to_node, build, span_to_node};
pub use node::{Attributes, Node};
pub use render::render;
pub use title::extract_title;
pub use tokenize::{tokenize, Delimiter};

/// Error type for markdown conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    #[error("Invalid markdown: unclosed `{delimiter}` delimiter")]
    UnbalancedDelimiter { delimiter: Delimiter },

    #[error("No title found in markdown")]
    NoTitleFound,

    #[error("Invalid node: {0}")]
    InvalidNode(String),
}

pub type Result<T> = std::result::Result<T, MarkdownError>;

/// Parse a Markdown document into an HTML node tree rooted at a `div`.
pub fn parse_document(markdown: &str) -> Result<Node> {
    build(markdown)
}

/// Parse and render a Markdown document in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    let root = parse_document(markdown)?;
    render(&root)
}
