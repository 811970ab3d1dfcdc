//! `optional` and `catch` wrappers.

use super::Schema;
use crate::error::ValidationError;

/// Accepts an absent value as `None`; present values go to the inner schema.
#[derive(Debug, Clone)]
pub struct Optional<S> {
    inner: S,
}

impl<S> Optional<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: Schema> Schema for Optional<S> {
    type Output = Option<S::Output>;

    fn parse(&self, input: Option<&str>) -> Result<Self::Output, ValidationError> {
        match input {
            None => Ok(None),
            Some(raw) => self.inner.parse(Some(raw)).map(Some),
        }
    }
}

/// Never fails: any validation error becomes a clone of `fallback`.
#[derive(Debug, Clone)]
pub struct Catch<S: Schema> {
    inner: S,
    fallback: S::Output,
}

impl<S: Schema> Catch<S>
where
    S::Output: Clone,
{
    pub fn new(inner: S, fallback: S::Output) -> Self {
        Self { inner, fallback }
    }

    pub fn fallback_value(&self) -> &S::Output {
        &self.fallback
    }
}

impl<S: Schema> Schema for Catch<S>
where
    S::Output: Clone,
{
    type Output = S::Output;

    fn parse(&self, input: Option<&str>) -> Result<Self::Output, ValidationError> {
        match self.inner.parse(input) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::trace!(%err, "value rejected, using fallback");
                Ok(self.fallback.clone())
            }
        }
    }
}
