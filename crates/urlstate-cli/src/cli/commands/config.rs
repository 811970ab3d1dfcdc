//! Config command: show the effective configuration.

use anyhow::Result;
use urlstate_core::config::{self, UrlStateConfig};

pub fn run_config(cfg: &UrlStateConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
