//! Scalar schemas: string, number, date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use super::Schema;
use crate::error::{IssueKind, ValidationError};

fn required(input: Option<&str>) -> Result<&str, ValidationError> {
    input.ok_or_else(|| ValidationError::single(IssueKind::Required))
}

/// Any present string, with optional length and membership constraints.
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    min_len: Option<usize>,
    max_len: Option<usize>,
    one_of: Option<Vec<String>>,
}

impl StringSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum length in characters.
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = Some(min_len);
        self
    }

    /// Maximum length in characters.
    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Restricts the value to a fixed set.
    pub fn one_of<I, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.one_of = Some(options.into_iter().map(Into::into).collect());
        self
    }
}

impl Schema for StringSchema {
    type Output = String;

    fn parse(&self, input: Option<&str>) -> Result<String, ValidationError> {
        let raw = required(input)?;
        let len = raw.chars().count();
        if let Some(min_len) = self.min_len {
            if len < min_len {
                return Err(ValidationError::single(IssueKind::TooShort { min_len }));
            }
        }
        if let Some(max_len) = self.max_len {
            if len > max_len {
                return Err(ValidationError::single(IssueKind::TooLong { max_len }));
            }
        }
        if let Some(options) = &self.one_of {
            if !options.iter().any(|o| o == raw) {
                return Err(ValidationError::single(IssueKind::InvalidEnumValue {
                    options: options.clone(),
                    received: raw.to_string(),
                }));
            }
        }
        Ok(raw.to_string())
    }
}

/// Finite `f64` coerced from the query value.
#[derive(Debug, Clone, Default)]
pub struct NumberSchema {
    int: bool,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn int(mut self) -> Self {
        self.int = true;
        self
    }

    /// Inclusive lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

impl Schema for NumberSchema {
    type Output = f64;

    fn parse(&self, input: Option<&str>) -> Result<f64, ValidationError> {
        let raw = required(input)?;
        let invalid = || {
            ValidationError::single(IssueKind::InvalidType {
                expected: "number",
                received: raw.to_string(),
            })
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }
        let value: f64 = trimmed.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        if self.int && value.fract() != 0.0 {
            return Err(ValidationError::single(IssueKind::NotInteger));
        }
        if let Some(minimum) = self.min {
            if value < minimum {
                return Err(ValidationError::single(IssueKind::TooSmall { minimum }));
            }
        }
        if let Some(maximum) = self.max {
            if value > maximum {
                return Err(ValidationError::single(IssueKind::TooBig { maximum }));
            }
        }
        Ok(value)
    }
}

/// UTC timestamp coerced from the query value.
///
/// Accepts RFC 3339 (`2024-05-01T10:00:00+02:00`), a bare date (`2024-05-01`,
/// midnight UTC) or a local date-time without offset (read as UTC).
#[derive(Debug, Clone, Default)]
pub struct DateSchema;

impl DateSchema {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&ndt));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight))
}

impl Schema for DateSchema {
    type Output = DateTime<Utc>;

    fn parse(&self, input: Option<&str>) -> Result<DateTime<Utc>, ValidationError> {
        let raw = required(input)?;
        parse_date(raw).ok_or_else(|| {
            ValidationError::single(IssueKind::InvalidDate {
                received: raw.to_string(),
            })
        })
    }
}
