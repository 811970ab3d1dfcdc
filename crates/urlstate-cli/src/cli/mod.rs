//! CLI for inspecting and rewriting URL query state.

mod commands;
mod field_spec;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlstate_core::{config, DuplicateKeyPolicy, UrlStateOptions};

use commands::{run_config, run_delete, run_parse, run_set};
pub use field_spec::FieldSpec;

/// Top-level CLI for urlstate.
#[derive(Debug, Parser)]
#[command(name = "urlstate")]
#[command(about = "urlstate: typed state in URL query strings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse the query of an href against a list of fields and print JSON.
    Parse {
        /// Path plus query, e.g. "/items?page=2".
        href: String,

        /// Field as NAME:KIND[=FALLBACK], KIND one of string, number, date.
        #[arg(long = "field", short = 'f', value_name = "SPEC")]
        fields: Vec<FieldSpec>,

        /// Fail on invalid or missing values instead of falling back.
        #[arg(long)]
        strict: bool,

        /// Use the first occurrence of a repeated key (default: last).
        #[arg(long)]
        first_wins: bool,
    },

    /// Print the replace target after setting KEY to VALUE.
    Set {
        href: String,
        key: String,
        value: String,
    },

    /// Print the replace target after removing KEY.
    Delete { href: String, key: String },

    /// Print the effective configuration.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let mut options = UrlStateOptions::from(&cfg);

        match cli.command {
            CliCommand::Parse {
                href,
                fields,
                strict,
                first_wins,
            } => {
                if first_wins {
                    options.duplicate_keys = DuplicateKeyPolicy::FirstWins;
                }
                run_parse(&href, &fields, strict, options)?;
            }
            CliCommand::Set { href, key, value } => run_set(&href, &key, &value, options)?,
            CliCommand::Delete { href, key } => run_delete(&href, &key, options)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
