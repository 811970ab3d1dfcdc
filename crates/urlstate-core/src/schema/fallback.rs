//! Lenient schemas that fall back instead of failing.
//!
//! A lenient schema is `inner.optional().catch(fallback)`: absent values are
//! accepted, and every rejection (wrong type, constraint, bad date) yields the
//! fallback, which defaults to `None`.

use super::{Catch, Optional, Schema};

/// An optional schema whose failures resolve to a fallback.
pub type Lenient<S> = Catch<Optional<S>>;

/// Turns `schema` into a builder of lenient schemas, one per fallback value.
///
/// ```
/// use urlstate_core::schema::{fallback, NumberSchema, Schema};
///
/// let page = fallback(NumberSchema::new().int().min(1.0));
/// assert_eq!(page(Some(1.0)).parse(Some("0")).unwrap(), Some(1.0));
/// assert_eq!(page(None).parse(Some("3")).unwrap(), Some(3.0));
/// ```
pub fn fallback<S>(schema: S) -> impl Fn(Option<S::Output>) -> Lenient<S>
where
    S: Schema + Clone,
    S::Output: Clone,
{
    move |value| schema.clone().optional().catch(value)
}

/// Prebuilt lenient scalars for URL state.
pub mod url_schema {
    use chrono::{DateTime, Utc};

    use super::{fallback, Lenient};
    use crate::schema::{DateSchema, NumberSchema, StringSchema};

    pub fn date(fallback_value: Option<DateTime<Utc>>) -> Lenient<DateSchema> {
        fallback(DateSchema::new())(fallback_value)
    }

    pub fn string(fallback_value: Option<String>) -> Lenient<StringSchema> {
        fallback(StringSchema::new())(fallback_value)
    }

    pub fn number(fallback_value: Option<f64>) -> Lenient<NumberSchema> {
        fallback(NumberSchema::new())(fallback_value)
    }
}
