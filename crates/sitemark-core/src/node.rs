//! HTML node tree.
//!
//! A [`Node`] is either a [`Node::Leaf`] holding a value or a
//! [`Node::Parent`] owning an ordered list of children. Attribute order is
//! insertion order and is preserved in rendered output.

use indexmap::IndexMap;

use crate::{MarkdownError, Result};

/// Ordered attribute map; iteration order is serialization order
pub type Attributes = IndexMap<String, String>;

/// An element of the output HTML tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A childless node. Without a tag the value is emitted verbatim.
    Leaf {
        tag: Option<String>,
        value: String,
        attributes: Attributes,
    },

    /// A tagged node owning its children
    Parent {
        tag: String,
        children: Vec<Node>,
        attributes: Attributes,
    },
}

impl Node {
    /// Create an untagged text leaf
    pub fn text(value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attributes: Attributes::new(),
        }
    }

    /// Create a tagged leaf with attributes, kept in the given order
    pub fn leaf_with_attrs(tag: &str, value: impl Into<String>, attrs: Vec<(&str, &str)>) -> Self {
        Node::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attributes: collect_attrs(attrs),
        }
    }

    /// Create a parent node
    pub fn parent(tag: &str, children: Vec<Node>) -> Self {
        Node::Parent {
            tag: tag.to_string(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Create a parent node with attributes, kept in the given order
    pub fn parent_with_attrs(tag: &str, children: Vec<Node>, attrs: Vec<(&str, &str)>) -> Self {
        Node::Parent {
            tag: tag.to_string(),
            children,
            attributes: collect_attrs(attrs),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn is_parent(&self) -> bool {
        matches!(self, Node::Parent { .. })
    }

    /// Tag name, `None` for untagged text leaves
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } => tag.as_deref(),
            Node::Parent { tag, .. } => Some(tag.as_str()),
        }
    }

    /// Leaf value, `None` for parents
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf { value, .. } => Some(value.as_str()),
            Node::Parent { .. } => None,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Parent { attributes, .. } => attributes,
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes().get(name).map(String::as_str)
    }

    /// Set an attribute. An existing key keeps its original position.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let attributes = match self {
            Node::Leaf { attributes, .. } | Node::Parent { attributes, .. } => attributes,
        };
        attributes.insert(name.to_string(), value.to_string());
    }

    /// Child nodes; always empty for a leaf
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Parent { children, .. } => children.as_slice(),
        }
    }

    /// Append a child. Leaves cannot own children.
    pub fn add_child(&mut self, child: Node) -> Result<()> {
        match self {
            Node::Parent { children, .. } => {
                children.push(child);
                Ok(())
            }
            Node::Leaf { tag, .. } => Err(MarkdownError::InvalidNode(format!(
                "cannot add a child to leaf <{}>",
                tag.as_deref().unwrap_or("#text")
            ))),
        }
    }

    /// Concatenated leaf values of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Leaf { value, .. } => value.clone(),
            Node::Parent { children, .. } => children.iter().map(Node::text_content).collect(),
        }
    }
}

fn collect_attrs(attrs: Vec<(&str, &str)>) -> Attributes {
    attrs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
