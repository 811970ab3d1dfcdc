//! Flat key → value view over a query snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::QueryParams;
use crate::error::ValidationError;
use crate::schema::Schema;

/// How repeated keys collapse when a snapshot is flattened into a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuplicateKeyPolicy {
    /// The last occurrence in query order wins (browser iteration behaviour).
    #[default]
    #[serde(rename = "last")]
    LastWins,
    /// The first occurrence in query order wins.
    #[serde(rename = "first")]
    FirstWins,
}

/// Plain key → string mapping handed to object schemas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRecord {
    fields: BTreeMap<String, String>,
}

impl QueryRecord {
    pub fn from_params(params: &QueryParams, policy: DuplicateKeyPolicy) -> Self {
        let mut fields = BTreeMap::new();
        for (key, value) in params.iter() {
            match policy {
                DuplicateKeyPolicy::LastWins => {
                    fields.insert(key.to_string(), value.to_string());
                }
                DuplicateKeyPolicy::FirstWins => {
                    fields
                        .entry(key.to_string())
                        .or_insert_with(|| value.to_string());
                }
            }
        }
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parses the field `name` with `schema`; issues are reported under `name`.
    pub fn field<S: Schema>(&self, name: &str, schema: &S) -> Result<S::Output, ValidationError> {
        schema
            .parse(self.get(name))
            .map_err(|err| err.prefixed(name))
    }
}

impl From<&QueryParams> for QueryRecord {
    fn from(params: &QueryParams) -> Self {
        Self::from_params(params, DuplicateKeyPolicy::default())
    }
}
