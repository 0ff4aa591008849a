//! `privdist rewrite <url>` – download-time placeholder injection.

use anyhow::{Context, Result};
use clap::Args;
use privdist_core::config::PrivdistConfig;
use privdist_core::{FetchConfig, RewriteResult, UrlRewriter};
use std::path::PathBuf;

/// Transport options copied forward into the private-URL override.
#[derive(Debug, Clone, Default, Args)]
pub struct TransportArgs {
    /// Transfer runs with TLS verification disabled.
    #[arg(long)]
    pub tls_disabled: bool,

    /// Custom CA bundle.
    #[arg(long, value_name = "PATH")]
    pub cafile: Option<PathBuf>,

    /// Proxy URL.
    #[arg(long)]
    pub proxy: Option<String>,

    /// Extra request header as NAME=VALUE (repeatable).
    #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,
}

impl TransportArgs {
    pub fn into_fetch_config(self) -> FetchConfig {
        let mut fetch = FetchConfig::new().with_tls_disabled(self.tls_disabled);
        if let Some(cafile) = self.cafile {
            fetch = fetch.with_cafile(cafile);
        }
        if let Some(proxy) = self.proxy {
            fetch = fetch.with_proxy(proxy);
        }
        for (name, value) in self.headers {
            fetch = fetch.with_header(name, value);
        }
        fetch
    }
}

/// Parses `NAME=VALUE`.
pub fn parse_header(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{s}'")),
    }
}

pub fn run_rewrite(
    cfg: &PrivdistConfig,
    url: &str,
    json: bool,
    transport: TransportArgs,
) -> Result<()> {
    let rewriter = UrlRewriter::from_config(cfg);
    let current = transport.into_fetch_config();
    let result = rewriter.inject_placeholders(url, &current)?;

    if json {
        let out = serde_json::to_string_pretty(&result).context("serialize rewrite result")?;
        println!("{out}");
        return Ok(());
    }
    println!("{}", describe_target(url, result, current));
    Ok(())
}

/// URL the download would request, or `unchanged` when no override applies.
fn describe_target(processed_url: &str, result: RewriteResult, current: FetchConfig) -> String {
    let fetch = result.into_fetch(current);
    match fetch.private_url {
        Some(_) => fetch.request_url(processed_url).to_string(),
        None => "unchanged".to_string(),
    }
}
