//! Navigation provider interface and an in-memory implementation.
//!
//! URL state only reads the current location and asks for replace-style
//! navigation; applying it (and re-reading afterwards) is the provider's job.

use crate::error::LocationError;
use crate::location::Location;

/// Router/history collaborator.
pub trait Navigator {
    /// Snapshot of the current path and query.
    fn location(&self) -> Location;

    /// Replaces the current history entry with `href`. Fire-and-forget.
    fn replace(&mut self, href: &str);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn location(&self) -> Location {
        (**self).location()
    }

    fn replace(&mut self, href: &str) {
        (**self).replace(href)
    }
}

/// History stack kept in memory, with an unbounded log of every replace request.
#[derive(Debug, Clone)]
pub struct MemoryNavigator {
    entries: Vec<Location>,
    replaced: Vec<String>,
}

impl MemoryNavigator {
    pub fn new(location: Location) -> Self {
        Self {
            entries: vec![location],
            replaced: Vec::new(),
        }
    }

    pub fn from_href(href: &str) -> Result<Self, LocationError> {
        Ok(Self::new(Location::parse(href)?))
    }

    /// Pushes a new history entry.
    pub fn push(&mut self, href: &str) -> Result<(), LocationError> {
        let location = Location::parse(href)?;
        tracing::debug!(href = %location, "push navigation");
        self.entries.push(location);
        Ok(())
    }

    pub fn current(&self) -> &Location {
        // `entries` is never empty: it starts with one entry and only grows.
        &self.entries[self.entries.len() - 1]
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    /// Every replace target requested so far, in order.
    ///
    /// The log is unbounded; keep `MemoryNavigator` to tests and short-lived processes.
    pub fn replaced(&self) -> &[String] {
        &self.replaced
    }

    pub fn last_replace(&self) -> Option<&str> {
        self.replaced.last().map(String::as_str)
    }
}

impl Navigator for MemoryNavigator {
    fn location(&self) -> Location {
        self.current().clone()
    }

    fn replace(&mut self, href: &str) {
        self.replaced.push(href.to_string());
        match Location::parse(href) {
            Ok(location) => {
                tracing::debug!(href, "replace navigation");
                let last = self.entries.len() - 1;
                self.entries[last] = location;
            }
            Err(err) => tracing::warn!(href, "replace navigation ignored: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_does_not_grow_history() {
        let mut nav = MemoryNavigator::from_href("/items?sort=asc").unwrap();
        nav.replace("/items?sort=desc");
        assert_eq!(nav.history_len(), 1);
        assert_eq!(nav.location().href(), "/items?sort=desc");
        assert_eq!(nav.replaced(), ["/items?sort=desc".to_string()]);
    }

    #[test]
    fn push_grows_history() {
        let mut nav = MemoryNavigator::from_href("/a").unwrap();
        nav.push("/b?x=1").unwrap();
        assert_eq!(nav.history_len(), 2);
        assert_eq!(nav.current().path(), "/b");
        nav.replace("/c");
        assert_eq!(nav.history_len(), 2);
        assert_eq!(nav.current().path(), "/c");
    }

    #[test]
    fn bad_replace_target_is_recorded_but_ignored() {
        let mut nav = MemoryNavigator::from_href("/a?x=1").unwrap();
        nav.replace("http://[::1");
        assert_eq!(nav.last_replace(), Some("http://[::1"));
        assert_eq!(nav.location().href(), "/a?x=1");
    }

    #[test]
    fn mutable_reference_is_a_navigator() {
        fn go<N: Navigator>(mut nav: N) {
            nav.replace("/z");
        }
        let mut nav = MemoryNavigator::from_href("/a").unwrap();
        go(&mut nav);
        assert_eq!(nav.current().path(), "/z");
    }
}
