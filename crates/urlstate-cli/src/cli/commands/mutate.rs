//! Set and delete commands: print the replace target for one mutation.

use anyhow::{Context, Result};
use urlstate_core::{
    use_url_with, MemoryNavigator, QueryRecord, UrlStateOptions, ValidationError,
};

/// Applies one mutation to `href` through a navigator and returns the replace target.
pub fn mutated_href(
    href: &str,
    key: &str,
    value: Option<&str>,
    options: UrlStateOptions,
) -> Result<String> {
    let mut navigator = MemoryNavigator::from_href(href)?;
    let any = |_: &QueryRecord| Ok::<(), ValidationError>(());
    let state = use_url_with(&navigator, &any, options)?;
    match value {
        Some(value) => state.set_value(&mut navigator, key, value),
        None => state.delete_value(&mut navigator, key),
    }
    navigator
        .last_replace()
        .map(str::to_string)
        .context("no navigation was requested")
}

pub fn run_set(href: &str, key: &str, value: &str, options: UrlStateOptions) -> Result<()> {
    println!("{}", mutated_href(href, key, Some(value), options)?);
    Ok(())
}

pub fn run_delete(href: &str, key: &str, options: UrlStateOptions) -> Result<()> {
    println!("{}", mutated_href(href, key, None, options)?);
    Ok(())
}
