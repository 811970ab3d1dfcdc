//! Current path plus query snapshot.

use std::fmt;
use std::str::FromStr;

use crate::error::LocationError;
use crate::query::{href_for, QueryParams};

/// Base used to resolve relative hrefs; only path and query are kept.
const RESOLVE_BASE: &str = "http://localhost/";

/// Path and query parameters of a navigation target.
///
/// The fragment and origin of a parsed href are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: QueryParams,
}

impl Location {
    pub fn new(path: impl Into<String>, query: QueryParams) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    /// Reads `href` (`/items?sort=asc`, `?page=2`, or an absolute URL).
    pub fn parse(href: &str) -> Result<Self, LocationError> {
        let base = url::Url::parse(RESOLVE_BASE).map_err(|source| LocationError::InvalidHref {
            href: RESOLVE_BASE.to_string(),
            source,
        })?;
        let url = base.join(href).map_err(|source| LocationError::InvalidHref {
            href: href.to_string(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(LocationError::MissingPath(href.to_string()));
        }
        Ok(Self {
            path: url.path().to_string(),
            query: QueryParams::parse(url.query().unwrap_or("")),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// `<path>?<query>`, or just `<path>` when the query is empty.
    pub fn href(&self) -> String {
        href_for(&self.path, &self.query.to_query_string(), true)
    }
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_relative_href() {
        let loc = Location::parse("/items?sort=asc&page=2").unwrap();
        assert_eq!(loc.path(), "/items");
        assert_eq!(loc.query().get("sort"), Some("asc"));
        assert_eq!(loc.query().get("page"), Some("2"));
    }

    #[test]
    fn parse_absolute_href_drops_origin_and_fragment() {
        let loc = Location::parse("https://example.com/a/b?x=1#top").unwrap();
        assert_eq!(loc.path(), "/a/b");
        assert_eq!(loc.href(), "/a/b?x=1");
    }

    #[test]
    fn parse_query_only_href() {
        let loc = Location::parse("?page=3").unwrap();
        assert_eq!(loc.path(), "/");
        assert_eq!(loc.query().get("page"), Some("3"));
    }

    #[test]
    fn new_location_matches_parsed() {
        let built = Location::new("/items", QueryParams::parse("sort=asc"));
        assert_eq!(built, Location::parse("/items?sort=asc").unwrap());
        assert_eq!(built.href(), "/items?sort=asc");
    }

    #[test]
    fn empty_query_renders_bare_path() {
        let loc = Location::parse("/items?").unwrap();
        assert!(loc.query().is_empty());
        assert_eq!(loc.to_string(), "/items");
    }

    #[test]
    fn non_hierarchical_href_is_rejected() {
        assert!(matches!(
            Location::parse("mailto:someone@example.com"),
            Err(LocationError::MissingPath(_))
        ));
    }

    #[test]
    fn invalid_href_is_rejected() {
        assert!(matches!(
            Location::parse("http://[::1"),
            Err(LocationError::InvalidHref { .. })
        ));
    }
}
