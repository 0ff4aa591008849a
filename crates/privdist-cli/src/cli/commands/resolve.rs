//! `privdist resolve <input>` – print the input with placeholders filled in.

use anyhow::Result;
use privdist_core::config::PrivdistConfig;
use privdist_core::{Resolver, UrlRewriter};

pub fn run_resolve(cfg: &PrivdistConfig, input: &str) -> Result<()> {
    let rewriter = UrlRewriter::from_config(cfg);
    let resolved = rewriter.resolver().resolve(input)?;
    println!("{resolved}");
    Ok(())
}
