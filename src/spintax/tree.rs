//! Tree representation of a spin
//!
//! A parsed masterspin is an n-ary tree of three node kinds:
//!
//! - `Literal` - an indivisible run of text, always a leaf
//! - `Or` - one brace group, children are the mutually exclusive perforations
//! - `And` - an implicit merge point, children are concatenated in order
//!
//! The tree exposes three read-only projections: a human-readable outline
//! (`render_outline`, also the `Display` impl), a nested structured map
//! (`to_map`) and its JSON encoding (`to_json`).
//!
//! ## Example
//!
//! ```text
//! masterspin: {a|{b|c}}{d|e}
//! outline:
//!     AND
//!     __OR
//!     ____a
//!     ____OR
//!     ______b
//!     ______c
//!     __OR
//!     ____d
//!     ____e
//! ```

use std::fmt;

use serde_json::{Map, Value};

use crate::spintax::error::SpinError;

/// A node in the tree representation of a spin.
///
/// The kind invariants of the spin tree hold structurally: a `Literal` never
/// has children, `Or`/`And` never carry text, and a node cannot be of two
/// kinds at once. Derived equality compares shape, literal values and child
/// order, which is exactly the isomorphism the parser guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinTree {
    /// An indivisible run of literal text
    Literal(String),
    /// A brace group: exactly one child is selected when spinning
    Or(Vec<SpinTree>),
    /// An implicit concatenation: every child contributes, in order
    And(Vec<SpinTree>),
}

impl SpinTree {
    /// Create a leaf node holding literal text
    pub fn new_literal(text: impl Into<String>) -> Self {
        SpinTree::Literal(text.into())
    }

    /// Create an empty OR node
    pub fn new_or() -> Self {
        SpinTree::Or(Vec::new())
    }

    /// Create an empty AND node
    pub fn new_and() -> Self {
        SpinTree::And(Vec::new())
    }

    /// Append a new branch to the current node.
    ///
    /// Only `Or` and `And` nodes can carry children; appending to a
    /// `Literal` fails with [`SpinError::InvalidNode`].
    pub fn add_child(&mut self, child: SpinTree) -> Result<(), SpinError> {
        match self {
            SpinTree::Or(children) | SpinTree::And(children) => {
                children.push(child);
                Ok(())
            }
            SpinTree::Literal(_) => Err(SpinError::InvalidNode(
                "literal nodes cannot have children".to_string(),
            )),
        }
    }

    /// The ordered children of this node (empty for literals)
    pub fn children(&self) -> &[SpinTree] {
        match self {
            SpinTree::Literal(_) => &[],
            SpinTree::Or(children) | SpinTree::And(children) => children,
        }
    }

    /// The display label of this node: the literal text, or `OR`/`AND`
    fn label(&self) -> &str {
        match self {
            SpinTree::Literal(text) => text,
            SpinTree::Or(_) => "OR",
            SpinTree::And(_) => "AND",
        }
    }

    /// Render the tree as a printable multi-line outline.
    ///
    /// The node label sits on its own line; every child is rendered one
    /// level deeper, prefixed with two underscores per depth level.
    pub fn render_outline(&self) -> String {
        let mut out = String::new();
        self.append_outline(0, &mut out);
        out
    }

    fn append_outline(&self, depth: usize, out: &mut String) {
        out.push_str(self.label());
        for child in self.children() {
            out.push('\n');
            out.push_str(&"__".repeat(depth + 1));
            child.append_outline(depth + 1, out);
        }
    }

    /// Convert the tree to a nested structured map.
    ///
    /// Literal leaves map to `{"value": text}`; `Or`/`And` nodes map to
    /// `{"or": [...]}`/`{"and": [...]}` with one entry per child. A
    /// childless `Or`/`And` produces an empty map.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        match self {
            SpinTree::Literal(text) => {
                map.insert("value".to_string(), Value::String(text.clone()));
            }
            SpinTree::Or(children) | SpinTree::And(children) => {
                if !children.is_empty() {
                    let key = match self {
                        SpinTree::Or(_) => "or",
                        _ => "and",
                    };
                    let entries = children
                        .iter()
                        .map(|child| Value::Object(child.to_map()))
                        .collect();
                    map.insert(key.to_string(), Value::Array(entries));
                }
            }
        }
        map
    }

    /// Convert the tree to a JSON string (the serialized form of `to_map`)
    pub fn to_json(&self) -> String {
        Value::Object(self.to_map()).to_string()
    }
}

impl fmt::Display for SpinTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render_outline())
    }
}
