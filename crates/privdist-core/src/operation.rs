//! Host package operations, reduced to what version injection needs.

use serde::{Deserialize, Serialize};

/// A package as seen by version injection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    /// Human-readable version, e.g. `1.2.3` or `dev-main`.
    pub pretty_version: String,
    /// Raw distribution URL; packages installed from source have none.
    #[serde(default)]
    pub dist_url: Option<String>,
}

impl Package {
    pub fn new(name: impl Into<String>, pretty_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pretty_version: pretty_version.into(),
            dist_url: None,
        }
    }

    pub fn with_dist_url(mut self, url: impl Into<String>) -> Self {
        self.dist_url = Some(url.into());
        self
    }
}

/// One step of a host install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageOperation {
    Install { package: Package },
    Update { initial: Package, target: Package },
    Uninstall { package: Package },
    MarkAliasInstalled { package: Package },
    MarkAliasUninstalled { package: Package },
}

impl PackageOperation {
    /// Host job-type name.
    pub fn job_type(&self) -> &'static str {
        match self {
            PackageOperation::Install { .. } => "install",
            PackageOperation::Update { .. } => "update",
            PackageOperation::Uninstall { .. } => "uninstall",
            PackageOperation::MarkAliasInstalled { .. } => "markAliasInstalled",
            PackageOperation::MarkAliasUninstalled { .. } => "markAliasUninstalled",
        }
    }

    /// Package whose dist URL gets the version: the installed package, or
    /// the target of an update. Every other operation has none.
    pub fn version_target(&self) -> Option<&Package> {
        match self {
            PackageOperation::Install { package } => Some(package),
            PackageOperation::Update { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn version_target_mut(&mut self) -> Option<&mut Package> {
        match self {
            PackageOperation::Install { package } => Some(package),
            PackageOperation::Update { target, .. } => Some(target),
            _ => None,
        }
    }
}
