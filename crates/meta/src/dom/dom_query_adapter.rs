// ABOUTME: DocumentQuery implementation for dom_query documents.
// ABOUTME: Resolves selectors through the shared compiled-selector cache.

use dom_query::{Document, Matcher, Selection};
use tracing::trace;

use crate::dom::{DocumentQuery, DomNode};
use crate::extractors::compiled::get_or_compile;

impl<'a> DomNode for Selection<'a> {
    fn attr(&self, name: &str) -> Option<String> {
        Selection::attr(self, name).map(|v| v.to_string())
    }

    fn text(&self) -> String {
        Selection::text(self).to_string()
    }
}

impl DocumentQuery for Document {
    type Node<'a> = Selection<'a>
    where
        Self: 'a;

    fn find<'a>(&'a self, selector: &str) -> Vec<Selection<'a>> {
        let matcher = match get_or_compile(selector) {
            Some(m) => m,
            None => {
                trace!(selector, "invalid selector");
                return Vec::new();
            }
        };
        self.select_matcher(&matcher).iter().collect()
    }

    fn find_uncached<'a>(&'a self, selector: &str) -> Vec<Selection<'a>> {
        match Matcher::new(selector) {
            Ok(matcher) => self.select_matcher(&matcher).iter().collect(),
            Err(_) => {
                trace!(selector, "invalid selector");
                Vec::new()
            }
        }
    }
}
