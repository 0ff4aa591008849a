//! `privdist inject-version <url> <version>`.

use anyhow::Result;
use privdist_core::config::PrivdistConfig;
use privdist_core::UrlRewriter;

pub fn run_inject_version(cfg: &PrivdistConfig, url: &str, version: &str) -> Result<()> {
    let rewriter = UrlRewriter::from_config(cfg);
    println!("{}", rewriter.inject_version(url, version));
    Ok(())
}
