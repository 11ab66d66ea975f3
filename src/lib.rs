//! # spintax
//!
//! A parser and renderer for spintax templates.
//!
//! Spintax is a compact templating syntax: brace groups of pipe-delimited
//! alternatives, nestable, e.g. `{a|{b|c}}{d|e}`. This crate turns a
//! masterspin (the full template) into a structured AND/OR tree that
//! disambiguates the nesting, and renders it into spuns - concrete strings
//! with every group resolved to one randomly chosen alternative.
//!
//! ```text
//! masterspin: {Hello|Hi} world
//! spuns:      "Hello world" or "Hi world"
//! ```
//!
//! Entry points: [`Spin`] for holding and spinning a masterspin,
//! [`parse`](spintax::parser::parse) for building a [`SpinTree`], and
//! [`duplicate_evolution`](spintax::analysis::duplicate_evolution) for
//! scoring output diversity.

pub mod spintax;

pub use spintax::analysis::{duplicate_evolution, DiversityPoint, DiversityReport};
pub use spintax::error::SpinError;
pub use spintax::parser::{parse, parse_with_delimiter, DEFAULT_DELIMITER};
pub use spintax::spin::Spin;
pub use spintax::tree::SpinTree;
