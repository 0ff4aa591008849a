use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::env_view::{DotEnvLocation, DEFAULT_DOTENV_FILENAME};
use crate::error::{Error, Result};
use crate::rewrite::DEFAULT_FRAGMENT_PREFIX;

/// Version injection behaviour (optional `[version]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    /// Leave dist URLs without any `{%...}` placeholder untouched instead of
    /// appending the version fragment. Set this to match the long-standing
    /// installer-plugin behaviour, where packages without placeholders are
    /// never touched and their version is never read.
    #[serde(default)]
    pub only_with_placeholders: bool,
    /// Appended before the version when the URL has no `{%version}`.
    #[serde(default = "default_fragment_prefix")]
    pub fragment_prefix: String,
}

fn default_fragment_prefix() -> String {
    DEFAULT_FRAGMENT_PREFIX.to_string()
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            only_with_placeholders: false,
            fragment_prefix: default_fragment_prefix(),
        }
    }
}

/// Global configuration loaded from `~/.config/privdist/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivdistConfig {
    /// Name of the key-value file consulted after the process environment.
    pub dotenv_filename: String,
    /// Directory holding the file; the working directory when unset.
    #[serde(default)]
    pub dotenv_dir: Option<PathBuf>,
    #[serde(default)]
    pub version: VersionConfig,
}

impl Default for PrivdistConfig {
    fn default() -> Self {
        Self {
            dotenv_filename: DEFAULT_DOTENV_FILENAME.to_string(),
            dotenv_dir: None,
            version: VersionConfig::default(),
        }
    }
}

impl PrivdistConfig {
    pub fn dotenv_location(&self) -> DotEnvLocation {
        match &self.dotenv_dir {
            Some(dir) => DotEnvLocation::Path(dir.join(&self.dotenv_filename)),
            None => DotEnvLocation::WorkingDir {
                filename: self.dotenv_filename.clone(),
            },
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("privdist")?;
    xdg_dirs
        .place_config_file("config.toml")
        .map_err(|source| Error::ConfigIo {
            path: xdg_dirs.get_config_home().join("config.toml"),
            source,
        })
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PrivdistConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PrivdistConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::ConfigIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, toml).map_err(|source| Error::ConfigIo {
            path: path.clone(),
            source,
        })?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).map_err(|source| Error::ConfigIo {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| Error::ConfigParse { path, source })
}
