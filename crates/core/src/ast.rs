//! Element tree produced by the parser.
//!
//! This is the restricted intermediate form the renderer interprets:
//! tag name, attributes, children. Expression values (`{...}`) are
//! carried as opaque text and are never evaluated.

use serde::{Deserialize, Serialize};

/// One node of the parsed fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<Attr>,
        children: Vec<Node>,
    },
    /// A literal text run between tags.
    Text(String),
    /// A `{...}` interpolation in text position, captured raw.
    Expr(String),
}

/// An attribute on an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr {
    pub name: String,
    pub value: AttrValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
    /// Quoted string value.
    Str(String),
    /// A `{...}` expression value, captured raw and never evaluated.
    Expr(String),
    /// Bare boolean attribute (`disabled`, `checked`).
    Empty,
}

impl Node {
    /// Tag name if this node is an element.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }
}
