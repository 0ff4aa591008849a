//! CLI for privdist.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use privdist_core::config::{self, PrivdistConfig};
use std::path::PathBuf;

use commands::{
    run_check, run_completions, run_inject_version, run_resolve, run_rewrite, TransportArgs,
};

/// Top-level CLI for privdist.
#[derive(Debug, Parser)]
#[command(name = "privdist")]
#[command(
    about = "privdist: resolve {%NAME} placeholders in private package download URLs",
    long_about = None
)]
pub struct Cli {
    /// Read placeholder values from this file instead of `.env` in the working directory.
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve every placeholder in a string and print the result.
    Resolve {
        /// String containing `{%NAME}` placeholders.
        input: String,
    },

    /// Inject a package version into a dist URL.
    InjectVersion {
        /// Raw dist URL, optionally containing `{%version}`.
        url: String,
        /// Pretty version of the package, e.g. 1.2.3.
        version: String,
    },

    /// Resolve placeholders in a download URL and print the private-URL override.
    Rewrite {
        /// Fully processed download URL.
        url: String,

        /// Print the rewrite result (including fetch options) as JSON.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        transport: TransportArgs,
    },

    /// Show where each placeholder's value would come from, without printing values.
    Check {
        /// String containing `{%NAME}` placeholders.
        input: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        if !cli.command.needs_config() {
            if let CliCommand::Completions { shell } = cli.command {
                run_completions(shell)?;
            }
            return Ok(());
        }

        let cfg = cli.load_config()?;
        match cli.command {
            CliCommand::Resolve { input } => run_resolve(&cfg, &input)?,
            CliCommand::InjectVersion { url, version } => run_inject_version(&cfg, &url, &version)?,
            CliCommand::Rewrite {
                url,
                json,
                transport,
            } => run_rewrite(&cfg, &url, json, transport)?,
            CliCommand::Check { input } => run_check(&cfg, &input)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }

    /// Loads config.toml (creating it on first use) and applies `--env-file`.
    fn load_config(&self) -> Result<PrivdistConfig> {
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        if let Some(path) = &self.env_file {
            cfg.dotenv_dir = path.parent().map(|p| p.to_path_buf());
            if let Some(name) = path.file_name() {
                cfg.dotenv_filename = name.to_string_lossy().into_owned();
            }
        }
        Ok(cfg)
    }
}

impl CliCommand {
    /// Whether the command reads config.toml; others must not create it.
    pub fn needs_config(&self) -> bool {
        !matches!(self, CliCommand::Completions { .. })
    }
}

#[cfg(test)]
mod tests;
