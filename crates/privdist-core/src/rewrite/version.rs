//! Version injection into a package's raw dist URL.

use crate::placeholder::{self, placeholder_for, VERSION_TOKEN};

/// Fragment prefix appended when the URL has no `{%version}` token.
pub const DEFAULT_FRAGMENT_PREFIX: &str = "#v";

/// Replaces every `{%version}` with `pretty_version`, or appends
/// `#v<pretty_version>` when the token is absent.
///
/// Other placeholders are left for download time. Not idempotent when the
/// suffix is appended: call once per install/update.
pub fn inject_version(dist_url: &str, pretty_version: &str) -> String {
    inject_version_with_prefix(dist_url, pretty_version, DEFAULT_FRAGMENT_PREFIX)
}

pub(crate) fn inject_version_with_prefix(
    dist_url: &str,
    pretty_version: &str,
    fragment_prefix: &str,
) -> String {
    let version_token = placeholder_for(VERSION_TOKEN);
    if dist_url.contains(&version_token) {
        dist_url.replace(&version_token, pretty_version)
    } else {
        format!("{dist_url}{fragment_prefix}{pretty_version}")
    }
}

/// Whether the URL carries any placeholder, including `{%version}`.
pub(crate) fn needs_injection(dist_url: &str) -> bool {
    placeholder::has_placeholders(dist_url)
}
