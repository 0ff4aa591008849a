//! Transport options carried through a rewrite, and the rewrite outcome.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Transport-level options for one download.
///
/// The core never interprets these; it only copies them forward into the
/// private-URL override. Values are immutable once built: a rewrite produces
/// a new `FetchConfig` instead of mutating the caller's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// TLS verification disabled for this transfer.
    #[serde(default)]
    pub tls_disabled: bool,
    /// Custom CA bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cafile: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// Extra request headers (auth and the like).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Opaque host-specific options (stream context options, credentials bag).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_json::Value>,
    /// Request target overriding the host's processed URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_url: Option<String>,
}

impl FetchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tls_disabled(mut self, disabled: bool) -> Self {
        self.tls_disabled = disabled;
        self
    }

    pub fn with_cafile(mut self, cafile: impl Into<PathBuf>) -> Self {
        self.cafile = Some(cafile.into());
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Copy of `self` with every transport option kept and the request
    /// target set to `url`.
    pub fn with_private_url(&self, url: impl Into<String>) -> Self {
        Self {
            private_url: Some(url.into()),
            ..self.clone()
        }
    }

    /// URL the transfer must actually request.
    pub fn request_url<'a>(&'a self, processed_url: &'a str) -> &'a str {
        self.private_url.as_deref().unwrap_or(processed_url)
    }
}

/// Result of download-time placeholder injection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RewriteResult {
    /// No placeholders; the caller keeps its URL and fetch config untouched.
    Unchanged,
    /// Placeholders were substituted; the caller must download through `fetch`.
    Rewritten {
        url: String,
        fetch: FetchConfig,
    },
}

impl RewriteResult {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, RewriteResult::Rewritten { .. })
    }

    /// Rewritten URL, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            RewriteResult::Rewritten { url, .. } => Some(url.as_str()),
            RewriteResult::Unchanged => None,
        }
    }

    /// Fetch config to download with: the override when rewritten, otherwise `current`.
    pub fn into_fetch(self, current: FetchConfig) -> FetchConfig {
        match self {
            RewriteResult::Rewritten { fetch, .. } => fetch,
            RewriteResult::Unchanged => current,
        }
    }
}
