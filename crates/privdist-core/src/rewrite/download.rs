//! Download-time placeholder injection.

use crate::error::MissingVariableError;
use crate::resolver::Resolver;

use super::fetch::{FetchConfig, RewriteResult};

/// Resolves placeholders in `processed_url` and, when any were substituted,
/// returns a private-URL override built from `current`.
///
/// On a missing variable nothing is produced: no partial URL and no new
/// fetch config.
pub fn inject_placeholders<R: Resolver + ?Sized>(
    resolver: &R,
    processed_url: &str,
    current: &FetchConfig,
) -> Result<RewriteResult, MissingVariableError> {
    let resolution = resolver.resolution(processed_url)?;
    if resolution.is_noop() {
        tracing::debug!("no placeholders in download URL");
        return Ok(RewriteResult::Unchanged);
    }

    tracing::info!(
        "substituted {} placeholder(s) in download URL: {}",
        resolution.substituted.len(),
        resolution.substituted.join(", ")
    );
    let fetch = current.with_private_url(resolution.value.as_str());
    Ok(RewriteResult::Rewritten {
        url: resolution.value,
        fetch,
    })
}
