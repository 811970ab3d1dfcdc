//! Parse command: read an href's query through a list of fields.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use urlstate_core::schema::DynamicObject;
use urlstate_core::{use_url_with, MemoryNavigator, UrlStateOptions};

use crate::cli::FieldSpec;

/// Parses `href` and returns the state object.
pub fn parse_href(
    href: &str,
    fields: &[FieldSpec],
    strict: bool,
    options: UrlStateOptions,
) -> Result<Map<String, Value>> {
    let schema = fields
        .iter()
        .map(|spec| spec.to_field(strict))
        .collect::<Result<DynamicObject, _>>()
        .context("invalid field fallback")?;
    let navigator = MemoryNavigator::from_href(href)?;
    let state = use_url_with(&navigator, &schema, options)?;
    Ok(state.into_value())
}

/// Print the parsed state as pretty JSON.
pub fn run_parse(
    href: &str,
    fields: &[FieldSpec],
    strict: bool,
    options: UrlStateOptions,
) -> Result<()> {
    let state = parse_href(href, fields, strict, options)?;
    println!("{}", serde_json::to_string_pretty(&Value::Object(state))?);
    Ok(())
}
