//! `privdist check <input>` – list placeholders and their sources.

use anyhow::Result;
use privdist_core::config::PrivdistConfig;
use privdist_core::env_view::Origin;
use privdist_core::UrlRewriter;

pub fn run_check(cfg: &PrivdistConfig, input: &str) -> Result<()> {
    let rewriter = UrlRewriter::from_config(cfg);
    let report = rewriter.resolver().explain(input);
    if report.is_empty() {
        println!("No placeholders.");
        return Ok(());
    }

    println!("{:<32} {:<8} {}", "NAME", "COUNT", "SOURCE");
    let mut missing = Vec::new();
    for entry in &report {
        let source = match entry.origin {
            Some(Origin::Process) => "env",
            Some(Origin::DotEnv) => ".env",
            None => {
                missing.push(entry.name.as_str());
                "missing"
            }
        };
        println!("{:<32} {:<8} {}", entry.name, entry.occurrences, source);
    }

    if !missing.is_empty() {
        anyhow::bail!("unset variable(s): {}", missing.join(", "));
    }
    Ok(())
}
