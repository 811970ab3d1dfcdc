//! Query parameter snapshots.
//!
//! Decoding, duplicate-key flattening and the pure set/delete recomputation
//! that backs URL state mutators.

mod mutate;
mod params;
mod record;

pub use mutate::{compute_mutated_query, href_for};
pub use params::QueryParams;
pub use record::{DuplicateKeyPolicy, QueryRecord};
