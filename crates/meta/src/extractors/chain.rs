// ABOUTME: First-non-empty combinator shared by every metadata fallback chain.
// ABOUTME: Candidates are named closures evaluated lazily, in order, until one yields a value.

//! Fallback chains.
//!
//! Title, description, canonical link and language all resolve the same
//! way: try an ordered list of sources and keep the first non-empty result.
//! [`Chain`] expresses that once so the individual chains cannot drift
//! apart. Later candidates are never evaluated once an earlier one wins.

use tracing::debug;

type Candidate<'a> = (&'static str, Box<dyn FnOnce() -> String + 'a>);

/// An ordered list of lazily evaluated candidate sources for one field.
pub struct Chain<'a> {
    field: &'static str,
    candidates: Vec<Candidate<'a>>,
}

impl<'a> Chain<'a> {
    /// Start a chain for the named field. The name is only used for logging.
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            candidates: Vec::new(),
        }
    }

    /// Append a candidate source.
    pub fn or(mut self, source: &'static str, candidate: impl FnOnce() -> String + 'a) -> Self {
        self.candidates.push((source, Box::new(candidate)));
        self
    }

    /// Evaluate candidates in order and return the first non-empty value.
    pub fn first_non_empty(self) -> Option<String> {
        for (source, candidate) in self.candidates {
            let value = candidate();
            if !value.is_empty() {
                debug!(field = self.field, source, "resolved");
                return Some(value);
            }
        }
        debug!(field = self.field, "no candidate matched");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_first_non_empty_wins() {
        let value = Chain::new("test")
            .or("empty", String::new)
            .or("second", || "b".to_string())
            .or("third", || "c".to_string())
            .first_non_empty();
        assert_eq!(value.as_deref(), Some("b"));
    }

    #[test]
    fn test_later_candidates_are_not_evaluated() {
        let calls = Cell::new(0);
        let value = Chain::new("test")
            .or("first", || {
                calls.set(calls.get() + 1);
                "a".to_string()
            })
            .or("second", || {
                calls.set(calls.get() + 1);
                "b".to_string()
            })
            .first_non_empty();
        assert_eq!(value.as_deref(), Some("a"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_all_empty_is_none() {
        let value = Chain::new("test")
            .or("a", String::new)
            .or("b", String::new)
            .first_non_empty();
        assert!(value.is_none());
        assert!(Chain::new("nothing").first_non_empty().is_none());
    }
}
