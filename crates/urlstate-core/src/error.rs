//! Error types for schema validation and href handling.

use std::fmt;
use thiserror::Error;

/// What went wrong with a single value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IssueKind {
    #[error("required")]
    Required,

    #[error("expected {expected}, received {received:?}")]
    InvalidType {
        expected: &'static str,
        received: String,
    },

    #[error("invalid date {received:?}")]
    InvalidDate { received: String },

    #[error("must be an integer")]
    NotInteger,

    #[error("must be greater than or equal to {minimum}")]
    TooSmall { minimum: f64 },

    #[error("must be less than or equal to {maximum}")]
    TooBig { maximum: f64 },

    #[error("must contain at least {min_len} character(s)")]
    TooShort { min_len: usize },

    #[error("must contain at most {max_len} character(s)")]
    TooLong { max_len: usize },

    #[error("invalid value {received:?}, expected one of {options:?}")]
    InvalidEnumValue {
        options: Vec<String>,
        received: String,
    },
}

/// One validation failure, located by its field path.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub path: Vec<String>,
    pub kind: IssueKind,
}

impl Issue {
    pub fn new(kind: IssueKind) -> Self {
        Self {
            path: Vec::new(),
            kind,
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.kind)
        }
    }
}

/// Raised when a strict schema rejects its input.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed: {}", join_issues(&.issues))]
pub struct ValidationError {
    pub issues: Vec<Issue>,
}

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn single(kind: IssueKind) -> Self {
        Self::new(vec![Issue::new(kind)])
    }

    /// Nests every issue under `segment` (outermost first).
    pub fn prefixed(mut self, segment: &str) -> Self {
        for issue in &mut self.issues {
            issue.path.insert(0, segment.to_string());
        }
        self
    }

    /// Kinds of the issues whose path is exactly `path`.
    pub fn issues_at<'a>(&'a self, path: &'a [&str]) -> impl Iterator<Item = &'a IssueKind> + 'a {
        self.issues
            .iter()
            .filter(move |issue| issue.path.iter().map(String::as_str).eq(path.iter().copied()))
            .map(|issue| &issue.kind)
    }
}

/// A navigation target that cannot be read as a path plus query.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("invalid href {href:?}: {source}")]
    InvalidHref {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error("href {0:?} has no path")]
    MissingPath(String),
}
