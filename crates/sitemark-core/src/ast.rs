//! Markdown syntax tree
//!
//! Inline content is a flat sequence of [`Span`]s; a document is a flat
//! sequence of classified [`Block`]s. Neither level nests.

/// The kind of an inline span, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// A typed fragment of inline text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Text with no markup
    Plain(String),

    /// `**bold**`
    Bold(String),

    /// `*italic*` or `_italic_`
    Italic(String),

    /// `` `code` ``
    Code(String),

    /// `[text](url)`
    Link { text: String, url: String },

    /// `![alt](url)`
    Image { alt: String, url: String },
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain(text.into())
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            Span::Plain(_) => SpanKind::Plain,
            Span::Bold(_) => SpanKind::Bold,
            Span::Italic(_) => SpanKind::Italic,
            Span::Code(_) => SpanKind::Code,
            Span::Link { .. } => SpanKind::Link,
            Span::Image { .. } => SpanKind::Image,
        }
    }

    /// Display text, or alt text for images
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    /// Target URL, only present for links and images
    pub fn url(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Span::Plain(_))
    }
}

/// Structural kind of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// ATX heading; level is the number of leading `#`, not capped
    Heading(usize),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// A blank-line delimited, trimmed run of lines with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    raw_text: String,
    kind: BlockKind,
}

impl Block {
    pub fn new(raw_text: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            raw_text: raw_text.into(),
            kind,
        }
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }
}
