//! `NAME:KIND[=FALLBACK]` field specs for the parse command.

use std::str::FromStr;
use thiserror::Error;
use urlstate_core::schema::{DynamicField, FieldKind};
use urlstate_core::ValidationError;

#[derive(Debug, Error, PartialEq)]
pub enum SpecError {
    #[error("field spec {0:?} must look like NAME:KIND[=FALLBACK]")]
    Malformed(String),

    #[error("field spec {spec:?}: {reason}")]
    Kind { spec: String, reason: String },
}

/// A field as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub fallback: Option<String>,
}

impl FieldSpec {
    /// Builds the schema field; strict fields ignore the fallback.
    pub fn to_field(&self, strict: bool) -> Result<DynamicField, ValidationError> {
        if strict {
            Ok(DynamicField::strict(&self.name, self.kind))
        } else {
            DynamicField::lenient(&self.name, self.kind, self.fallback.as_deref())
        }
    }
}

impl FromStr for FieldSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, rest) = s
            .split_once(':')
            .ok_or_else(|| SpecError::Malformed(s.to_string()))?;
        if name.is_empty() {
            return Err(SpecError::Malformed(s.to_string()));
        }
        let (kind, fallback) = match rest.split_once('=') {
            Some((kind, fallback)) => (kind, Some(fallback.to_string())),
            None => (rest, None),
        };
        let kind = kind.parse::<FieldKind>().map_err(|reason| SpecError::Kind {
            spec: s.to_string(),
            reason,
        })?;
        Ok(Self {
            name: name.to_string(),
            kind,
            fallback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_kind() {
        let spec: FieldSpec = "page:number".parse().unwrap();
        assert_eq!(spec.name, "page");
        assert_eq!(spec.kind, FieldKind::Number);
        assert_eq!(spec.fallback, None);
    }

    #[test]
    fn with_fallback() {
        let spec: FieldSpec = "sort:string=asc".parse().unwrap();
        assert_eq!(spec.kind, FieldKind::String);
        assert_eq!(spec.fallback.as_deref(), Some("asc"));
    }

    #[test]
    fn malformed_specs() {
        assert!(matches!("page".parse::<FieldSpec>(), Err(SpecError::Malformed(_))));
        assert!(matches!(":number".parse::<FieldSpec>(), Err(SpecError::Malformed(_))));
        assert!(matches!(
            "page:bool".parse::<FieldSpec>(),
            Err(SpecError::Kind { .. })
        ));
    }

    #[test]
    fn bad_fallback_is_reported_when_building() {
        let spec: FieldSpec = "page:number=lots".parse().unwrap();
        assert!(spec.to_field(false).is_err());
        assert!(spec.to_field(true).is_ok());
    }
}
