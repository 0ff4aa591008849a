//! URL rewriting at the two host lifecycle points.
//!
//! - Before install/update: [`UrlRewriter::inject_version`] puts the package
//!   version into the raw dist URL.
//! - Before each transfer: [`UrlRewriter::inject_placeholders`] fills the
//!   remaining `{%NAME}` placeholders and hands back a private-URL override.
//!
//! The two passes share no state and may be called in any order or
//! concurrently for different packages.

mod download;
mod fetch;
mod version;

pub use download::inject_placeholders;
pub use fetch::{FetchConfig, RewriteResult};
pub use version::{inject_version, DEFAULT_FRAGMENT_PREFIX};

use crate::config::{PrivdistConfig, VersionConfig};
use crate::error::MissingVariableError;
use crate::operation::PackageOperation;
use crate::resolver::{PlaceholderResolver, Resolver};

/// Entry point for host integrations.
#[derive(Debug, Clone, Default)]
pub struct UrlRewriter<R = PlaceholderResolver> {
    resolver: R,
    version: VersionConfig,
}

impl UrlRewriter<PlaceholderResolver> {
    /// Rewriter over the live process environment, configured from `cfg`.
    pub fn from_config(cfg: &PrivdistConfig) -> Self {
        Self::new(
            PlaceholderResolver::new(Default::default(), cfg.dotenv_location()),
            cfg.version.clone(),
        )
    }
}

impl<R: Resolver> UrlRewriter<R> {
    pub fn new(resolver: R, version: VersionConfig) -> Self {
        Self { resolver, version }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Version injection for one dist URL.
    ///
    /// Replaces `{%version}` or appends the version fragment; other
    /// placeholders are left for download time. With
    /// `only_with_placeholders` set, URLs without any placeholder come back
    /// unchanged.
    pub fn inject_version(&self, dist_url: &str, pretty_version: &str) -> String {
        if self.version.only_with_placeholders && !version::needs_injection(dist_url) {
            tracing::debug!("dist URL has no placeholders; skipping version injection");
            return dist_url.to_string();
        }
        version::inject_version_with_prefix(dist_url, pretty_version, &self.version.fragment_prefix)
    }

    /// Version injection for a host operation, applied in place.
    ///
    /// Installs use their package, updates their target package. Any other
    /// operation, and packages without a dist URL, are left untouched.
    /// Returns whether the dist URL changed.
    pub fn inject_version_into(&self, operation: &mut PackageOperation) -> bool {
        let job_type = operation.job_type();
        let Some(package) = operation.version_target_mut() else {
            tracing::debug!("{} operation carries no package to version", job_type);
            return false;
        };
        let Some(dist_url) = package.dist_url.as_deref() else {
            tracing::debug!("{} has no dist URL; skipping version injection", package.name);
            return false;
        };

        let rewritten = self.inject_version(dist_url, &package.pretty_version);
        if rewritten == dist_url {
            return false;
        }
        tracing::info!(
            "injected version {} into dist URL of {} ({})",
            package.pretty_version,
            package.name,
            job_type
        );
        package.dist_url = Some(rewritten);
        true
    }

    /// Download-time placeholder injection; see [`inject_placeholders`].
    pub fn inject_placeholders(
        &self,
        processed_url: &str,
        current: &FetchConfig,
    ) -> Result<RewriteResult, MissingVariableError> {
        download::inject_placeholders(&self.resolver, processed_url, current)
    }
}
