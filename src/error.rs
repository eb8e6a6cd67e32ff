//! Crate-level error types.

use std::fmt;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Body table parsing/serialization failure.
    TableParse(String),
    /// A table cell could not be read as a number.
    InvalidQuantity(String),
    /// A body record failed scene-setup validation.
    InvalidBody {
        /// Name of the offending record.
        name: String,
        /// What was wrong with it.
        reason: String,
    },
    /// Mesh generation parameters out of range.
    Geometry(String),
    /// A vertex attribute has no GPU vertex format equivalent.
    VertexFormat(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::TableParse(msg) => {
                write!(f, "body table parse error: {msg}")
            }
            Self::InvalidQuantity(text) => {
                write!(f, "not a numeric quantity: {text:?}")
            }
            Self::InvalidBody { name, reason } => {
                write!(f, "invalid body {name}: {reason}")
            }
            Self::Geometry(msg) => write!(f, "geometry error: {msg}"),
            Self::VertexFormat(msg) => {
                write!(f, "unsupported vertex format: {msg}")
            }
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
