//! Convert classified blocks into an HTML node tree

use crate::ast::{Block, BlockKind, Span};
use crate::blocks::segment;
use crate::node::Node;
use crate::tokenize::tokenize;
use crate::Result;

const CODE_FENCE: &str = "```";

/// Highest heading level HTML defines; deeper headings render as `h6`
const MAX_HEADING_LEVEL: usize = 6;

/// Build the node tree for a whole document.
///
/// The result is always a `div` parent with one child per block, in
/// document order.
pub fn build(document: &str) -> Result<Node> {
    let children = segment(document)
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent("div", children))
}

/// Convert one classified block into its node subtree
pub fn block_to_node(block: &Block) -> Result<Node> {
    let text = block.raw_text();

    match block.kind() {
        BlockKind::Heading(level) => heading_to_node(text, level),
        BlockKind::Code => Ok(code_to_node(text)),
        BlockKind::Quote => {
            let content = text.strip_prefix('>').unwrap_or(text).trim();
            Ok(Node::parent("blockquote", inline_nodes(content)?))
        }
        BlockKind::UnorderedList => list_to_node("ul", text, strip_bullet),
        BlockKind::OrderedList => list_to_node("ol", text, strip_number),
        BlockKind::Paragraph => Ok(Node::parent("p", inline_nodes(text)?)),
    }
}

/// Map a span to its leaf node
pub fn span_to_node(span: &Span) -> Node {
    match span {
        Span::Plain(text) => Node::text(text.as_str()),
        Span::Bold(text) => Node::leaf("b", text.as_str()),
        Span::Italic(text) => Node::leaf("i", text.as_str()),
        Span::Code(text) => Node::leaf("code", text.as_str()),
        Span::Link { text, url } => {
            Node::leaf_with_attrs("a", text.as_str(), vec![("href", url.as_str())])
        }
        Span::Image { alt, url } => Node::leaf_with_attrs(
            "img",
            "",
            vec![("src", url.as_str()), ("alt", alt.as_str())],
        ),
    }
}

fn inline_nodes(text: &str) -> Result<Vec<Node>> {
    Ok(tokenize(text)?.iter().map(span_to_node).collect())
}

fn heading_to_node(text: &str, level: usize) -> Result<Node> {
    let content = text.trim_start_matches('#');
    let content = content.strip_prefix(' ').unwrap_or(content);

    if level > MAX_HEADING_LEVEL {
        tracing::warn!(level, "heading level above 6, rendering as h6");
    }
    let tag = format!("h{}", level.min(MAX_HEADING_LEVEL));

    Ok(Node::parent(&tag, inline_nodes(content)?))
}

/// Code content is kept verbatim; inline markup is not interpreted.
fn code_to_node(text: &str) -> Node {
    let inner = text.strip_prefix(CODE_FENCE).unwrap_or(text);
    let inner = match inner.strip_suffix(CODE_FENCE) {
        Some(inner) => inner,
        None => {
            tracing::warn!("code block has no closing fence");
            inner
        }
    };

    Node::parent("pre", vec![Node::leaf("code", inner.trim())])
}

fn list_to_node(tag: &str, text: &str, strip_marker: fn(&str) -> &str) -> Result<Node> {
    let items = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| -> Result<Node> {
            Ok(Node::parent("li", inline_nodes(strip_marker(line).trim())?))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Node::parent(tag, items))
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix('-').unwrap_or(line)
}

/// Everything up to and including the first `.`, so `1.`, `2.` and `10.`
/// all strip the same way
fn strip_number(line: &str) -> &str {
    match line.find('.') {
        Some(dot) => &line[dot + 1..],
        None => line,
    }
}
