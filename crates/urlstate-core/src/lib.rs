//! Typed UI state kept in the URL query string.
//!
//! - [`query`]: query snapshots, duplicate-key policy, pure set/delete.
//! - [`schema`]: scalar/object schemas and the lenient `url_schema` builders.
//! - [`url_state`]: `use_url` read side and `set_value` / `delete_value`
//!   write side over a [`Navigator`].

pub mod config;
pub mod error;
pub mod location;
pub mod logging;
pub mod navigation;
pub mod query;
pub mod schema;
pub mod url_state;

pub use error::{Issue, IssueKind, LocationError, ValidationError};
pub use location::Location;
pub use navigation::{MemoryNavigator, Navigator};
pub use query::{DuplicateKeyPolicy, QueryParams, QueryRecord};
pub use schema::{url_schema, ObjectSchema, Schema};
pub use url_state::{compute_state, use_url, use_url_with, UrlState, UrlStateOptions};
