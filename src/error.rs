//! Crate-level error types.

use std::fmt;

/// Errors produced by the voxrig crate.
#[derive(Debug)]
pub enum RigError {
    /// An animation document named an action that is neither `ROTATE` nor
    /// `MOVE`.
    UnknownAction(String),
    /// An animation document was missing a field or had the wrong shape.
    Document(serde_json::Error),
    /// A node with this name already exists in the model.
    DuplicateNode(String),
    /// No node with this name exists in the model.
    UnknownNode(String),
    /// No model is registered under this name.
    UnknownModel(String),
    /// No texture offset was registered under this part name.
    UnknownTextureOffset(String),
    /// A pose transition was requested with a non-positive or non-finite
    /// duration.
    InvalidDuration(f32),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownAction(name) => {
                write!(f, "unknown animation action '{name}'")
            }
            Self::Document(e) => write!(f, "animation document error: {e}"),
            Self::DuplicateNode(name) => {
                write!(f, "model already has a node named '{name}'")
            }
            Self::UnknownNode(name) => write!(f, "no node named '{name}'"),
            Self::UnknownModel(name) => write!(f, "no model registered as '{name}'"),
            Self::UnknownTextureOffset(name) => {
                write!(f, "no texture offset registered for '{name}'")
            }
            Self::InvalidDuration(d) => {
                write!(f, "transition duration must be positive, got {d}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Document(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Document(e)
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
