//! Masterspin parsing
//!
//! Builds a [`SpinTree`] out of a flat masterspin by innermost-first
//! reduction. The source text carries no nesting markers beyond matched
//! `{}` pairs, so the parser works over a sequence of fragments - runs of
//! raw text interleaved with already-reduced subtrees - and repeatedly
//! collapses the leftmost innermost brace group:
//!
//! 1. Pair the leftmost `}` with the nearest `{` before it. Everything in
//!    between is the group body; it may span text pieces and subtrees
//!    produced by earlier reductions.
//! 2. Split the body on the delimiter into perforations and turn each one
//!    into a child: a lone text piece becomes a literal, a lone subtree is
//!    reused as-is, and a mixed run is merged under an implicit AND node.
//! 3. Put the resulting OR node back in place of the `{...}` span and
//!    repeat until no brace group remains.
//!
//! Reduction is driven purely by string search and splicing; no grammar is
//! involved, and parsing the same masterspin always yields the same tree.
//! Unbalanced braces are rejected with
//! [`MalformedTemplate`](SpinError::MalformedTemplate).

use crate::spintax::error::SpinError;
use crate::spintax::tree::SpinTree;

/// The default perforation delimiter
pub const DEFAULT_DELIMITER: char = '|';

/// One piece of a partially reduced masterspin: raw text, or a subtree
/// built from an already-collapsed brace group.
enum Fragment {
    Text(String),
    Tree(SpinTree),
}

impl Fragment {
    /// Turn the fragment into a tree node, wrapping text as a literal
    fn into_tree(self) -> SpinTree {
        match self {
            Fragment::Text(text) => SpinTree::Literal(text),
            Fragment::Tree(tree) => tree,
        }
    }
}

/// Parse a masterspin into its tree representation with the default `|`
/// delimiter.
pub fn parse(masterspin: &str) -> Result<SpinTree, SpinError> {
    parse_with_delimiter(masterspin, DEFAULT_DELIMITER)
}

/// Parse a masterspin into its tree representation.
///
/// Deterministic: the produced tree depends only on the masterspin and the
/// delimiter. Fails with [`SpinError::MalformedTemplate`] when the brace
/// nesting is unbalanced.
pub fn parse_with_delimiter(masterspin: &str, delimiter: char) -> Result<SpinTree, SpinError> {
    let mut fragments = vec![Fragment::Text(masterspin.to_string())];

    while let Some((close_idx, close_pos)) = find_close(&fragments) {
        let Some((open_idx, open_pos)) = find_open_before(&fragments, close_idx, close_pos)
        else {
            return Err(SpinError::MalformedTemplate(
                "unmatched '}' with no opening brace before it".to_string(),
            ));
        };
        reduce_group(
            &mut fragments,
            (open_idx, open_pos),
            (close_idx, close_pos),
            delimiter,
        );
    }

    let unopened = fragments
        .iter()
        .any(|frag| matches!(frag, Fragment::Text(text) if text.contains('{')));
    if unopened {
        return Err(SpinError::MalformedTemplate(
            "unmatched '{' with no closing brace after it".to_string(),
        ));
    }

    Ok(assemble(fragments))
}

/// Locate the leftmost `}` across all text fragments
fn find_close(fragments: &[Fragment]) -> Option<(usize, usize)> {
    for (idx, frag) in fragments.iter().enumerate() {
        if let Fragment::Text(text) = frag {
            if let Some(pos) = text.find('}') {
                return Some((idx, pos));
            }
        }
    }
    None
}

/// Locate the nearest `{` before the given `}`.
///
/// Scanning backwards from the leftmost `}` guarantees the pair delimits an
/// innermost group: no other brace can sit between them.
fn find_open_before(
    fragments: &[Fragment],
    close_idx: usize,
    close_pos: usize,
) -> Option<(usize, usize)> {
    if let Fragment::Text(text) = &fragments[close_idx] {
        if let Some(pos) = text[..close_pos].rfind('{') {
            return Some((close_idx, pos));
        }
    }
    for idx in (0..close_idx).rev() {
        if let Fragment::Text(text) = &fragments[idx] {
            if let Some(pos) = text.rfind('{') {
                return Some((idx, pos));
            }
        }
    }
    None
}

/// Collapse one innermost brace group into an OR node, splicing the node
/// (plus any leftover text around the braces) over the consumed span.
fn reduce_group(
    fragments: &mut Vec<Fragment>,
    (open_idx, open_pos): (usize, usize),
    (close_idx, close_pos): (usize, usize),
    delimiter: char,
) {
    let mut removed: Vec<Fragment> = fragments.drain(open_idx..=close_idx).collect();
    let mut body: Vec<Fragment> = Vec::new();
    let prefix: String;
    let suffix: String;

    let Some(Fragment::Text(last)) = removed.pop() else {
        unreachable!("brace positions point into text fragments");
    };
    if removed.is_empty() {
        // Both braces sit in the same text fragment
        prefix = last[..open_pos].to_string();
        push_text(&mut body, &last[open_pos + 1..close_pos]);
        suffix = last[close_pos + 1..].to_string();
    } else {
        let mut inner = removed.into_iter();
        let Some(Fragment::Text(first)) = inner.next() else {
            unreachable!("brace positions point into text fragments");
        };
        prefix = first[..open_pos].to_string();
        push_text(&mut body, &first[open_pos + 1..]);
        body.extend(inner);
        push_text(&mut body, &last[..close_pos]);
        suffix = last[close_pos + 1..].to_string();
    }

    let children = split_perforations(body, delimiter)
        .into_iter()
        .map(perforation_child)
        .collect();

    let mut replacement: Vec<Fragment> = Vec::new();
    if !prefix.is_empty() {
        replacement.push(Fragment::Text(prefix));
    }
    replacement.push(Fragment::Tree(SpinTree::Or(children)));
    if !suffix.is_empty() {
        replacement.push(Fragment::Text(suffix));
    }
    for (offset, frag) in replacement.into_iter().enumerate() {
        fragments.insert(open_idx + offset, frag);
    }
}

fn push_text(body: &mut Vec<Fragment>, text: &str) {
    if !text.is_empty() {
        body.push(Fragment::Text(text.to_string()));
    }
}

/// Split a group body on the delimiter into perforations.
///
/// Delimiters only ever occur in text fragments; subtrees pass through
/// whole. Empty text pieces are dropped, but an empty perforation (as in
/// `{|a}`) is kept - it stands for the empty alternative.
fn split_perforations(body: Vec<Fragment>, delimiter: char) -> Vec<Vec<Fragment>> {
    let mut perforations: Vec<Vec<Fragment>> = Vec::new();
    let mut current: Vec<Fragment> = Vec::new();
    for frag in body {
        match frag {
            Fragment::Tree(tree) => current.push(Fragment::Tree(tree)),
            Fragment::Text(text) => {
                let mut pieces = text.split(delimiter);
                if let Some(first) = pieces.next() {
                    push_text(&mut current, first);
                }
                for piece in pieces {
                    perforations.push(std::mem::take(&mut current));
                    push_text(&mut current, piece);
                }
            }
        }
    }
    perforations.push(current);
    perforations
}

/// Turn one perforation into an OR-node child.
///
/// A lone fragment is used directly (no needless one-child AND); several
/// fragments merge under an implicit AND node in order. An empty
/// perforation is the empty alternative.
fn perforation_child(mut fragments: Vec<Fragment>) -> SpinTree {
    match fragments.len() {
        0 => SpinTree::new_literal(""),
        1 => fragments.remove(0).into_tree(),
        _ => SpinTree::And(fragments.into_iter().map(Fragment::into_tree).collect()),
    }
}

/// Final assembly once no brace group remains
fn assemble(mut fragments: Vec<Fragment>) -> SpinTree {
    match fragments.len() {
        0 => SpinTree::new_literal(""),
        1 => fragments.remove(0).into_tree(),
        _ => SpinTree::And(fragments.into_iter().map(Fragment::into_tree).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spintax::testing::{and_of, lit, or_of};

    #[test]
    fn brace_free_input_is_a_single_literal() {
        let tree = parse("just some text").unwrap();
        assert_eq!(tree, lit("just some text"));
    }

    #[test]
    fn empty_input_is_an_empty_literal() {
        assert_eq!(parse("").unwrap(), lit(""));
    }

    #[test]
    fn whole_group_input_returns_the_or_node_directly() {
        let tree = parse("{a|b}").unwrap();
        assert_eq!(tree, or_of(vec![lit("a"), lit("b")]));
    }

    #[test]
    fn empty_alternative_is_kept_as_empty_literal() {
        let tree = parse("{|a}").unwrap();
        assert_eq!(tree, or_of(vec![lit(""), lit("a")]));
    }

    #[test]
    fn nested_groups_build_the_canonical_and_or_shape() {
        let tree = parse("{a|{b|c}}{d|e}").unwrap();
        let expected = and_of(vec![
            or_of(vec![lit("a"), or_of(vec![lit("b"), lit("c")])]),
            or_of(vec![lit("d"), lit("e")]),
        ]);
        assert_eq!(tree, expected);
    }

    #[test]
    fn text_around_a_group_merges_under_an_and_node() {
        let tree = parse("pre {a|b} post").unwrap();
        let expected = and_of(vec![
            lit("pre "),
            or_of(vec![lit("a"), lit("b")]),
            lit(" post"),
        ]);
        assert_eq!(tree, expected);
    }

    #[test]
    fn group_with_leading_subtree_and_trailing_text_splices_in_order() {
        // The inner group reduces first; the outer perforation then mixes
        // the spliced subtree with its surrounding text.
        let tree = parse("{{a|b}c|d}").unwrap();
        let expected = or_of(vec![
            and_of(vec![or_of(vec![lit("a"), lit("b")]), lit("c")]),
            lit("d"),
        ]);
        assert_eq!(tree, expected);
    }

    #[test]
    fn custom_delimiter_is_honored() {
        let tree = parse_with_delimiter("{a/b|c}", '/').unwrap();
        assert_eq!(tree, or_of(vec![lit("a"), lit("b|c")]));
    }

    #[test]
    fn singleton_group_keeps_a_single_child_or() {
        let tree = parse("{a}").unwrap();
        assert_eq!(tree, or_of(vec![lit("a")]));
    }

    #[test]
    fn stray_close_brace_is_rejected() {
        let err = parse("a}b").unwrap_err();
        assert!(matches!(err, SpinError::MalformedTemplate(_)));
    }

    #[test]
    fn leftover_open_brace_is_rejected() {
        let err = parse("{a").unwrap_err();
        assert!(matches!(err, SpinError::MalformedTemplate(_)));
    }

    #[test]
    fn extra_close_after_a_valid_group_is_rejected() {
        let err = parse("{a}}").unwrap_err();
        assert!(matches!(err, SpinError::MalformedTemplate(_)));
    }
}
