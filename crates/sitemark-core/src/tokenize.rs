//! Inline span tokenization
//!
//! Tokenization is a fixed pipeline of passes over a span list. Each pass
//! rewrites only the spans still marked [`Span::Plain`] and leaves every
//! typed span untouched:
//!
//! 1. images `![alt](url)`
//! 2. links `[text](url)`
//! 3. bold `**`
//! 4. italic `*`, then italic `_`
//! 5. code `` ` ``
//!
//! Images must be extracted before links: the link pattern also matches the
//! tail of every image.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::ast::Span;
use crate::{MarkdownError, Result};

static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid image pattern"));

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("valid link pattern"));

/// An inline delimiter whose paired occurrences bound a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `**`
    DoubleAsterisk,
    /// `*`
    Asterisk,
    /// `_`
    Underscore,
    /// `` ` ``
    Backtick,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::DoubleAsterisk => "**",
            Delimiter::Asterisk => "*",
            Delimiter::Underscore => "_",
            Delimiter::Backtick => "`",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delimiter passes in application order, each with the span it produces
const DELIMITER_PASSES: &[(Delimiter, fn(String) -> Span)] = &[
    (Delimiter::DoubleAsterisk, Span::Bold),
    (Delimiter::Asterisk, Span::Italic),
    (Delimiter::Underscore, Span::Italic),
    (Delimiter::Backtick, Span::Code),
];

/// Tokenize a block's inline text into spans.
///
/// Fails with [`MarkdownError::UnbalancedDelimiter`] if any plain region
/// holds an odd number of occurrences of a delimiter.
pub fn tokenize(text: &str) -> Result<Vec<Span>> {
    let mut spans = if text.is_empty() {
        Vec::new()
    } else {
        vec![Span::plain(text)]
    };

    spans = split_pattern(spans, &IMAGE, |caps| Span::Image {
        alt: caps[1].to_string(),
        url: caps[2].to_string(),
    });
    spans = split_pattern(spans, &LINK, |caps| Span::Link {
        text: caps[1].to_string(),
        url: caps[2].to_string(),
    });

    for &(delimiter, make) in DELIMITER_PASSES {
        spans = split_delimiter(spans, delimiter, make)?;
    }

    tracing::trace!(spans = spans.len(), "tokenized inline text");
    Ok(spans)
}

/// Replace every match of `pattern` inside plain spans with the span built
/// by `make`, keeping the non-empty text around each match as plain spans.
fn split_pattern<F>(spans: Vec<Span>, pattern: &Regex, make: F) -> Vec<Span>
where
    F: Fn(&Captures) -> Span,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Plain(text) = span else {
            result.push(span);
            continue;
        };

        if !pattern.is_match(&text) {
            result.push(Span::Plain(text));
            continue;
        }

        let mut cursor = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            push_plain(&mut result, &text[cursor..whole.start()]);
            result.push(make(&caps));
            cursor = whole.end();
        }
        push_plain(&mut result, &text[cursor..]);
    }

    result
}

/// Split plain spans on `delimiter`; odd-indexed pieces are built by `make`.
fn split_delimiter(
    spans: Vec<Span>,
    delimiter: Delimiter,
    make: fn(String) -> Span,
) -> Result<Vec<Span>> {
    let mut result = Vec::with_capacity(spans.len());
    let marker = delimiter.as_str();

    for span in spans {
        let Span::Plain(text) = span else {
            result.push(span);
            continue;
        };

        if !text.contains(marker) {
            result.push(Span::Plain(text));
            continue;
        }

        let pieces: Vec<&str> = text.split(marker).collect();
        if pieces.len() % 2 == 0 {
            return Err(MarkdownError::UnbalancedDelimiter { delimiter });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                result.push(Span::plain(piece));
            } else {
                result.push(make(piece.to_string()));
            }
        }
    }

    Ok(result)
}

fn push_plain(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::plain(text));
    }
}
