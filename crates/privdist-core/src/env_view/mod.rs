//! Two-tier variable lookup: process environment first, then a `.env` file.
//!
//! An [`EnvironmentView`] is built per resolution and thrown away afterwards.
//! The `.env` file is read lazily, at most once per view, and only when the
//! process environment does not already define a requested name.

pub mod dotenv;
mod source;

pub use dotenv::DEFAULT_DOTENV_FILENAME;
pub use source::{ProcessEnv, VariableSource};

use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Process,
    DotEnv,
}

/// Where to find the `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotEnvLocation {
    /// `filename` inside the working directory at the time the view is built.
    WorkingDir { filename: String },
    /// A fixed path.
    Path(PathBuf),
    /// No file fallback at all.
    Disabled,
}

impl Default for DotEnvLocation {
    fn default() -> Self {
        DotEnvLocation::WorkingDir {
            filename: DEFAULT_DOTENV_FILENAME.to_string(),
        }
    }
}

impl DotEnvLocation {
    /// Concrete path to read, if any. `WorkingDir` is evaluated now, so a
    /// later `chdir` is picked up by the next view.
    pub fn path(&self) -> Option<PathBuf> {
        match self {
            DotEnvLocation::WorkingDir { filename } => match std::env::current_dir() {
                Ok(dir) => Some(dir.join(filename)),
                Err(e) => {
                    tracing::warn!("cannot determine working directory for .env lookup: {}", e);
                    None
                }
            },
            DotEnvLocation::Path(p) => Some(p.clone()),
            DotEnvLocation::Disabled => None,
        }
    }
}

/// Read-only view over the process environment and an optional `.env` file.
pub struct EnvironmentView<P = ProcessEnv> {
    process: P,
    dotenv_path: Option<PathBuf>,
    dotenv: OnceCell<HashMap<String, String>>,
}

impl EnvironmentView<ProcessEnv> {
    /// Live process environment plus `.env` in the current working directory.
    pub fn from_current_dir() -> Self {
        Self::new(ProcessEnv, &DotEnvLocation::default())
    }
}

impl<P: VariableSource> EnvironmentView<P> {
    pub fn new(process: P, location: &DotEnvLocation) -> Self {
        Self {
            process,
            dotenv_path: location.path(),
            dotenv: OnceCell::new(),
        }
    }

    pub fn dotenv_path(&self) -> Option<&Path> {
        self.dotenv_path.as_deref()
    }

    /// Value and origin of `name`. Process environment wins over `.env`.
    pub fn lookup(&self, name: &str) -> Option<(String, Origin)> {
        if let Some(value) = self.process.lookup(name) {
            return Some((value, Origin::Process));
        }
        self.dotenv_vars()
            .get(name)
            .map(|value| (value.clone(), Origin::DotEnv))
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.lookup(name).map(|(value, _)| value)
    }

    fn dotenv_vars(&self) -> &HashMap<String, String> {
        self.dotenv.get_or_init(|| {
            let Some(path) = self.dotenv_path.as_deref() else {
                return HashMap::new();
            };
            match dotenv::load(path) {
                Ok(Some(vars)) => {
                    tracing::debug!("loaded {} variable(s) from {}", vars.len(), path.display());
                    vars
                }
                Ok(None) => {
                    tracing::debug!("no .env file at {}", path.display());
                    HashMap::new()
                }
                Err(e) => {
                    tracing::warn!("ignoring unreadable .env file {}: {}", path.display(), e);
                    HashMap::new()
                }
            }
        })
    }
}
