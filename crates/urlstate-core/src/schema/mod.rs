//! Schemas for query values.
//!
//! A [`Schema`] validates one optional raw query value into a typed output;
//! an [`ObjectSchema`] turns a whole [`QueryRecord`] into a state object.
//! Query values are always strings, so scalar schemas coerce (`"42"` → `42.0`).
//!
//! [`Schema::optional`] accepts an absent value and [`Schema::catch`] swaps any
//! failure for a fallback; `url_schema` combines both for the common scalars.

mod dynamic;
pub mod fallback;
mod modifiers;
mod scalar;

pub use dynamic::{DynamicField, DynamicObject, FieldKind, FieldMode};
pub use fallback::{fallback, url_schema, Lenient};
pub use modifiers::{Catch, Optional};
pub use scalar::{DateSchema, NumberSchema, StringSchema};

use crate::error::ValidationError;
use crate::query::QueryRecord;

/// Validates a single query value.
pub trait Schema {
    type Output;

    /// Parses `input` (`None` when the key is absent from the query).
    fn parse(&self, input: Option<&str>) -> Result<Self::Output, ValidationError>;

    /// Accepts an absent value as `None`.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    /// Returns `fallback` instead of failing.
    fn catch(self, fallback: Self::Output) -> Catch<Self>
    where
        Self: Sized,
        Self::Output: Clone,
    {
        Catch::new(self, fallback)
    }
}

/// Validates a whole query record into a state object.
///
/// Implemented for closures so that typed state can be described inline:
///
/// ```
/// use urlstate_core::query::QueryRecord;
/// use urlstate_core::schema::url_schema;
/// use urlstate_core::ValidationError;
///
/// struct Filters {
///     page: Option<f64>,
/// }
///
/// let schema = |record: &QueryRecord| -> Result<Filters, ValidationError> {
///     Ok(Filters {
///         page: record.field("page", &url_schema::number(None))?,
///     })
/// };
/// # let _ = schema;
/// ```
pub trait ObjectSchema {
    type Output;

    fn parse_record(&self, record: &QueryRecord) -> Result<Self::Output, ValidationError>;
}

impl<F, T> ObjectSchema for F
where
    F: Fn(&QueryRecord) -> Result<T, ValidationError>,
{
    type Output = T;

    fn parse_record(&self, record: &QueryRecord) -> Result<T, ValidationError> {
        self(record)
    }
}
