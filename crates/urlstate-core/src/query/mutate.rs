//! Pure query-string recomputation used by the write side.

use super::QueryParams;

/// Returns the query string obtained by applying one mutation to `params`.
///
/// `Some(value)` sets `key`, `None` deletes it. `params` itself is untouched,
/// so two calls on the same snapshot do not see each other's effect.
pub fn compute_mutated_query(params: &QueryParams, key: &str, value: Option<&str>) -> String {
    let mut next = params.clone();
    match value {
        Some(value) => next.set(key, value),
        None => next.delete(key),
    }
    next.to_query_string()
}

/// Joins a path and an encoded query into a navigation target.
///
/// Always `<path>?<query>`, even for an empty query, unless
/// `strip_empty_marker` is set.
pub fn href_for(path: &str, query: &str, strip_empty_marker: bool) -> String {
    if query.is_empty() && strip_empty_marker {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_new_key_is_appended() {
        let params = QueryParams::parse("sort=asc");
        assert_eq!(
            compute_mutated_query(&params, "page", Some("2")),
            "sort=asc&page=2"
        );
    }

    #[test]
    fn delete_existing_key() {
        let params = QueryParams::parse("sort=asc&page=2");
        assert_eq!(compute_mutated_query(&params, "page", None), "sort=asc");
    }

    #[test]
    fn snapshot_is_not_modified() {
        let params = QueryParams::parse("a=1");
        let _ = compute_mutated_query(&params, "b", Some("2"));
        assert_eq!(params.to_query_string(), "a=1");
    }

    #[test]
    fn href_for_empty_query() {
        assert_eq!(href_for("/items", "", false), "/items?");
        assert_eq!(href_for("/items", "", true), "/items");
        assert_eq!(href_for("/items", "a=1", false), "/items?a=1");
        assert_eq!(href_for("/items", "a=1", true), "/items?a=1");
    }
}
