//! Object schema assembled at runtime, producing JSON.

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use super::{url_schema, DateSchema, NumberSchema, ObjectSchema, Schema, StringSchema};
use crate::error::{Issue, ValidationError};
use crate::query::QueryRecord;

/// Scalar kind of a dynamic field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Date,
}

impl FieldKind {
    /// Parses `input` strictly and renders the result as JSON.
    fn parse_strict(self, input: Option<&str>) -> Result<Value, ValidationError> {
        match self {
            FieldKind::String => StringSchema::new().parse(input).map(Value::String),
            FieldKind::Number => NumberSchema::new().parse(input).map(Value::from),
            FieldKind::Date => DateSchema::new()
                .parse(input)
                .map(|d| Value::String(d.to_rfc3339())),
        }
    }

    fn parse_lenient(self, input: Option<&str>) -> Option<Value> {
        // Lenient schemas never fail, so the results are unwrapped with `ok()`.
        match self {
            FieldKind::String => url_schema::string(None)
                .parse(input)
                .ok()
                .flatten()
                .map(Value::String),
            FieldKind::Number => url_schema::number(None)
                .parse(input)
                .ok()
                .flatten()
                .map(Value::from),
            FieldKind::Date => url_schema::date(None)
                .parse(input)
                .ok()
                .flatten()
                .map(|d| Value::String(d.to_rfc3339())),
        }
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Ok(FieldKind::String),
            "number" => Ok(FieldKind::Number),
            "date" => Ok(FieldKind::Date),
            other => Err(format!(
                "unknown field kind {:?} (expected string, number or date)",
                other
            )),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
        };
        f.write_str(name)
    }
}

/// Whether a field raises on bad input or falls back.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMode {
    Strict,
    /// Optional; failures yield `fallback` (JSON `null` when `None`).
    Lenient { fallback: Option<Value> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DynamicField {
    pub name: String,
    pub kind: FieldKind,
    pub mode: FieldMode,
}

impl DynamicField {
    pub fn strict(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            mode: FieldMode::Strict,
        }
    }

    /// Lenient field; a raw `fallback` is validated with the field's kind.
    pub fn lenient(
        name: impl Into<String>,
        kind: FieldKind,
        fallback: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let fallback = match fallback {
            Some(raw) => Some(
                kind.parse_strict(Some(raw))
                    .map_err(|err| err.prefixed(&name))?,
            ),
            None => None,
        };
        Ok(Self {
            name,
            kind,
            mode: FieldMode::Lenient { fallback },
        })
    }

    fn parse(&self, record: &QueryRecord) -> Result<Value, ValidationError> {
        let input = record.get(&self.name);
        match &self.mode {
            FieldMode::Strict => self.kind.parse_strict(input),
            FieldMode::Lenient { fallback } => Ok(match input {
                None => Value::Null,
                Some(_) => self
                    .kind
                    .parse_lenient(input)
                    .or_else(|| fallback.clone())
                    .unwrap_or(Value::Null),
            }),
        }
    }
}

/// Object schema over a runtime list of fields.
///
/// Unlike hand-written closures, it reports the issues of every failing field
/// at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicObject {
    fields: Vec<DynamicField>,
}

impl DynamicObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: DynamicField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[DynamicField] {
        &self.fields
    }
}

impl FromIterator<DynamicField> for DynamicObject {
    fn from_iter<I: IntoIterator<Item = DynamicField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl ObjectSchema for DynamicObject {
    type Output = Map<String, Value>;

    fn parse_record(&self, record: &QueryRecord) -> Result<Self::Output, ValidationError> {
        let mut out = Map::new();
        let mut issues: Vec<Issue> = Vec::new();
        for field in &self.fields {
            match field.parse(record) {
                Ok(value) => {
                    out.insert(field.name.clone(), value);
                }
                Err(err) => issues.extend(err.prefixed(&field.name).issues),
            }
        }
        if issues.is_empty() {
            Ok(out)
        } else {
            Err(ValidationError::new(issues))
        }
    }
}
