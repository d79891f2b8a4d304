//! HTML serialization
//!
//! Converts a [`Node`] tree into an HTML string. Values are written
//! verbatim; no escaping is applied.

use crate::node::{Attributes, Node};
use crate::{MarkdownError, Result};

/// Render a node tree to an HTML string.
///
/// Fails with [`MarkdownError::InvalidNode`] if a tag that the node's
/// variant requires is empty, or an attribute name is empty.
pub fn render(node: &Node) -> Result<String> {
    let mut output = String::with_capacity(1024);
    render_node(node, &mut output)?;
    Ok(output)
}

fn render_node(node: &Node, out: &mut String) -> Result<()> {
    match node {
        Node::Leaf {
            tag: None, value, ..
        } => {
            out.push_str(value);
        }

        Node::Leaf {
            tag: Some(tag),
            value,
            attributes,
        } => {
            check_tag(tag)?;
            open_tag(tag, attributes, out)?;
            out.push_str(value);
            close_tag(tag, out);
        }

        Node::Parent {
            tag,
            children,
            attributes,
        } => {
            check_tag(tag)?;
            open_tag(tag, attributes, out)?;
            for child in children {
                render_node(child, out)?;
            }
            close_tag(tag, out);
        }
    }

    Ok(())
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) -> Result<()> {
    out.push('<');
    out.push_str(tag);
    render_attributes(attributes, out)?;
    out.push('>');
    Ok(())
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// ` key="value"` for each pair, in insertion order
fn render_attributes(attributes: &Attributes, out: &mut String) -> Result<()> {
    for (key, value) in attributes {
        if key.is_empty() {
            return Err(MarkdownError::InvalidNode(
                "attribute name cannot be empty".to_string(),
            ));
        }
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    Ok(())
}

fn check_tag(tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(MarkdownError::InvalidNode("tag cannot be empty".to_string()));
    }
    Ok(())
}
