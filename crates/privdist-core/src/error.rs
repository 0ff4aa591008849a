//! Error types for privdist.
//!
//! Resolution has exactly one failure mode, [`MissingVariableError`]. The
//! [`Error`] enum covers the configuration layer's I/O and parse failures.

use std::path::PathBuf;
use thiserror::Error;

/// A placeholder named a variable that neither the process environment nor
/// the `.env` file defines.
///
/// Fatal to the single install/update or download it was raised for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Can't resolve placeholder {{%{name}}}. Environment variable '{name}' is not set.")]
pub struct MissingVariableError {
    /// Variable name inside the placeholder.
    pub name: String,
    /// The string the placeholder appeared in.
    pub input: String,
}

impl MissingVariableError {
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
        }
    }

    /// The placeholder as written in the input, e.g. `{%KEY_FOO}`.
    pub fn placeholder(&self) -> String {
        format!("{{%{}}}", self.name)
    }
}

/// Configuration error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file could not be read or written.
    #[error("config I/O at {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::config::PrivdistConfig`].
    #[error("failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("cannot locate XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

pub type Result<T> = std::result::Result<T, Error>;
