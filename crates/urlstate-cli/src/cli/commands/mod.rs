//! CLI command handlers.

mod config;
mod mutate;
mod parse;

pub use config::run_config;
pub use mutate::{run_delete, run_set};
pub use parse::run_parse;

#[cfg(test)]
pub use mutate::mutated_href;
#[cfg(test)]
pub use parse::parse_href;
