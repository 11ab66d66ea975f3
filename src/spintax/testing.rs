//! Test support for tree assertions
//!
//! What every parser test wants is assurance on the exact tree shape:
//! node kinds, literal values and child order. Writing nested
//! `SpinTree::Or(vec![...])` constructions by hand drowns that shape in
//! noise, so tests build expected trees with the short `lit`/`or_of`/
//! `and_of` helpers and compare with [`assert_tree`], which prints both
//! outlines on mismatch instead of a one-line `assert_eq!` dump.

use crate::spintax::tree::SpinTree;

/// Shorthand for a literal leaf
pub fn lit(text: &str) -> SpinTree {
    SpinTree::new_literal(text)
}

/// Shorthand for an OR node over the given children
pub fn or_of(children: Vec<SpinTree>) -> SpinTree {
    SpinTree::Or(children)
}

/// Shorthand for an AND node over the given children
pub fn and_of(children: Vec<SpinTree>) -> SpinTree {
    SpinTree::And(children)
}

/// Assert that two trees are structurally identical, printing both
/// outlines when they are not.
pub fn assert_tree(actual: &SpinTree, expected: &SpinTree) {
    assert_eq!(
        actual,
        expected,
        "tree mismatch\n--- actual ---\n{}\n--- expected ---\n{}",
        actual.render_outline(),
        expected.render_outline()
    );
}
