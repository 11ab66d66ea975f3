//! Error types for spintax parsing and rendering

use std::fmt;

/// Error that can occur when building, parsing or spinning a template
#[derive(Debug)]
pub enum SpinError {
    /// Attempted to grow a tree node that cannot carry children
    InvalidNode(String),
    /// Unbalanced or otherwise unparsable brace nesting in the template
    MalformedTemplate(String),
    /// Neither a template string nor an input file was supplied
    EmptyConfiguration,
    /// IO error when reading a template file
    Io(std::io::Error),
}

impl fmt::Display for SpinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinError::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            SpinError::MalformedTemplate(msg) => write!(f, "Malformed template: {}", msg),
            SpinError::EmptyConfiguration => {
                write!(f, "A masterspin must be specified, either inline or as a file")
            }
            SpinError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for SpinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpinError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SpinError {
    fn from(err: std::io::Error) -> Self {
        SpinError::Io(err)
    }
}
