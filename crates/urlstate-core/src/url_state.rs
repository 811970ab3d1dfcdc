//! Typed state read from, and written back to, the URL query.
//!
//! Read side: [`compute_state`] flattens a query snapshot and runs an
//! [`ObjectSchema`] over it; [`use_url`] does the same against a
//! [`Navigator`]'s current location and keeps the snapshot.
//!
//! Write side: [`UrlState::set_value`] and [`UrlState::delete_value`] rebuild
//! the query from the snapshot captured by `use_url` (never from the parsed
//! value) and request replace navigation. Two mutations on the same
//! `UrlState` do not compose: the second one starts from the same snapshot and
//! overwrites the first. Call `use_url` again after navigating.

use crate::config::UrlStateConfig;
use crate::error::ValidationError;
use crate::navigation::Navigator;
use crate::query::{compute_mutated_query, href_for, DuplicateKeyPolicy, QueryParams, QueryRecord};
use crate::schema::ObjectSchema;

/// Read/write knobs for URL state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlStateOptions {
    pub duplicate_keys: DuplicateKeyPolicy,
    /// Navigate to `<path>` instead of `<path>?` when a mutation empties the query.
    pub strip_empty_query_marker: bool,
}

impl From<&UrlStateConfig> for UrlStateOptions {
    fn from(cfg: &UrlStateConfig) -> Self {
        Self {
            duplicate_keys: cfg.duplicate_keys,
            strip_empty_query_marker: cfg.strip_empty_query_marker,
        }
    }
}

/// Parses a query snapshot with `schema`. Pure.
pub fn compute_state<S: ObjectSchema>(
    params: &QueryParams,
    schema: &S,
    policy: DuplicateKeyPolicy,
) -> Result<S::Output, ValidationError> {
    let record = QueryRecord::from_params(params, policy);
    schema.parse_record(&record)
}

/// Reads the navigator's current location with default options.
pub fn use_url<N, S>(navigator: &N, schema: &S) -> Result<UrlState<S::Output>, ValidationError>
where
    N: Navigator + ?Sized,
    S: ObjectSchema,
{
    use_url_with(navigator, schema, UrlStateOptions::default())
}

/// Reads the navigator's current location.
///
/// Fails only when `schema` has a strict field that rejects its value.
pub fn use_url_with<N, S>(
    navigator: &N,
    schema: &S,
    options: UrlStateOptions,
) -> Result<UrlState<S::Output>, ValidationError>
where
    N: Navigator + ?Sized,
    S: ObjectSchema,
{
    let location = navigator.location();
    let value = compute_state(location.query(), schema, options.duplicate_keys).map_err(|err| {
        tracing::debug!(path = location.path(), "url state rejected: {}", err);
        err
    })?;
    Ok(UrlState {
        value,
        path: location.path().to_string(),
        snapshot: location.query().clone(),
        options,
    })
}

/// Parsed state plus the location snapshot its mutators work from.
#[derive(Debug, Clone)]
pub struct UrlState<T> {
    value: T,
    path: String,
    snapshot: QueryParams,
    options: UrlStateOptions,
}

impl<T> UrlState<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn snapshot(&self) -> &QueryParams {
        &self.snapshot
    }

    /// Target that `set_value(key, value)` would navigate to.
    pub fn set_href(&self, key: &str, value: &str) -> String {
        self.href_with(key, Some(value))
    }

    /// Target that `delete_value(key)` would navigate to.
    pub fn delete_href(&self, key: &str) -> String {
        self.href_with(key, None)
    }

    /// Sets `key` to `value` and requests replace navigation.
    ///
    /// `value` is not validated; the next read decides what it means.
    pub fn set_value<N: Navigator + ?Sized>(&self, navigator: &mut N, key: &str, value: &str) {
        let href = self.set_href(key, value);
        tracing::debug!(key, value, href = %href, "set url value");
        navigator.replace(&href);
    }

    /// Removes `key` and requests replace navigation.
    pub fn delete_value<N: Navigator + ?Sized>(&self, navigator: &mut N, key: &str) {
        let href = self.delete_href(key);
        tracing::debug!(key, href = %href, "delete url value");
        navigator.replace(&href);
    }

    fn href_with(&self, key: &str, value: Option<&str>) -> String {
        let query = compute_mutated_query(&self.snapshot, key, value);
        href_for(&self.path, &query, self.options.strip_empty_query_marker)
    }
}
