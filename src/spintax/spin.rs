//! Spin: masterspin holder and spun generation
//!
//! [`Spin`] owns the masterspin source text, loaded from a literal string or
//! read whole from a file, and generates spuns from it. Spinning operates
//! directly on text: every innermost brace group is replaced with one
//! uniformly chosen perforation until no group remains. No tree is involved;
//! tree construction is delegated to [`parser`](crate::spintax::parser).

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::{Captures, Regex};

use crate::spintax::error::SpinError;
use crate::spintax::parser::{self, DEFAULT_DELIMITER};
use crate::spintax::tree::SpinTree;

/// A brace group containing no nested braces, i.e. an innermost group
static INNERMOST_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]*)\}").expect("innermost group pattern is valid"));

/// A masterspin source, ready to be spun or parsed.
#[derive(Debug, Clone)]
pub struct Spin {
    masterspin: String,
}

impl Spin {
    /// Create a spin from a literal masterspin string
    pub fn new(masterspin: impl Into<String>) -> Self {
        Self {
            masterspin: masterspin.into(),
        }
    }

    /// Create a spin from a masterspin file, read whole.
    ///
    /// Read failures surface as [`SpinError::Io`] wrapping the cause.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpinError> {
        let masterspin = fs::read_to_string(path)?;
        Ok(Self { masterspin })
    }

    /// Create a spin from whichever source was supplied.
    ///
    /// An inline template wins over a file path; supplying neither fails
    /// with [`SpinError::EmptyConfiguration`].
    pub fn from_options(template: Option<&str>, path: Option<&Path>) -> Result<Self, SpinError> {
        match (template, path) {
            (Some(template), _) => Ok(Self::new(template)),
            (None, Some(path)) => Self::from_file(path),
            (None, None) => Err(SpinError::EmptyConfiguration),
        }
    }

    /// The masterspin source text
    pub fn masterspin(&self) -> &str {
        &self.masterspin
    }

    /// Build the tree representation of the masterspin
    pub fn tree(&self) -> Result<SpinTree, SpinError> {
        parser::parse(&self.masterspin)
    }

    /// Build the tree representation with a custom perforation delimiter
    pub fn tree_with_delimiter(&self, delimiter: char) -> Result<SpinTree, SpinError> {
        parser::parse_with_delimiter(&self.masterspin, delimiter)
    }

    /// Generate a spun from the masterspin with the default delimiter and
    /// thread-local randomness.
    pub fn unspin(&self) -> String {
        self.unspin_with(DEFAULT_DELIMITER, &mut rand::thread_rng())
    }

    /// Generate a spun from the masterspin.
    ///
    /// Every pass replaces all innermost brace groups with one uniformly
    /// chosen perforation each; passes repeat until no group remains. The
    /// result is trimmed of surrounding whitespace. Deterministic under a
    /// seeded [`Rng`]; each call draws fresh choices.
    pub fn unspin_with<R: Rng>(&self, delimiter: char, rng: &mut R) -> String {
        let mut spun = self.masterspin.clone();
        loop {
            let mut replaced = false;
            spun = INNERMOST_GROUP
                .replace_all(&spun, |caps: &Captures<'_>| {
                    replaced = true;
                    let perforations: Vec<&str> = caps[1].split(delimiter).collect();
                    perforations
                        .choose(rng)
                        .copied()
                        .unwrap_or_default()
                        .to_string()
                })
                .into_owned();
            if !replaced {
                break;
            }
        }
        spun.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    #[test]
    fn brace_free_masterspin_is_returned_trimmed() {
        let spin = Spin::new("  plain text  ");
        assert_eq!(spin.unspin(), "plain text");
    }

    #[test]
    fn single_group_picks_one_perforation() {
        let spin = Spin::new("{a|b|c}");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let spun = spin.unspin_with(DEFAULT_DELIMITER, &mut rng);
            assert!(["a", "b", "c"].contains(&spun.as_str()), "got {spun:?}");
        }
    }

    #[test]
    fn empty_group_is_removed() {
        let spin = Spin::new("a{}b");
        assert_eq!(spin.unspin(), "ab");
    }

    #[test]
    fn same_seed_gives_the_same_spun() {
        let spin = Spin::new("{a|{b|c}} {{d|e}|f} and {x|y}");
        let first = spin.unspin_with(DEFAULT_DELIMITER, &mut StdRng::seed_from_u64(42));
        let second = spin.unspin_with(DEFAULT_DELIMITER, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn custom_delimiter_splits_perforations() {
        let spin = Spin::new("{yes/no}");
        let mut rng = StdRng::seed_from_u64(1);
        let spun = spin.unspin_with('/', &mut rng);
        assert!(["yes", "no"].contains(&spun.as_str()));
    }

    #[test]
    fn from_options_requires_a_source() {
        let err = Spin::from_options(None, None).unwrap_err();
        assert!(matches!(err, SpinError::EmptyConfiguration));
    }

    #[test]
    fn from_options_prefers_the_inline_template() {
        let spin = Spin::from_options(Some("inline"), Some(Path::new("/nonexistent"))).unwrap();
        assert_eq!(spin.masterspin(), "inline");
    }

    #[test]
    fn from_file_reads_the_whole_template() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{a|b}} c").unwrap();
        let spin = Spin::from_file(file.path()).unwrap();
        assert_eq!(spin.masterspin(), "{a|b} c");
    }

    #[test]
    fn from_file_surfaces_read_failures() {
        let err = Spin::from_file("/nonexistent/masterspin.txt").unwrap_err();
        assert!(matches!(err, SpinError::Io(_)));
    }
}
