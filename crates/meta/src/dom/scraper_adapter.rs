// ABOUTME: DocumentQuery implementation for scraper's Html tree.
// ABOUTME: Lets callers that already hold a scraper document run the extractors without reparsing.

use scraper::{ElementRef, Html, Selector};
use tracing::trace;

use crate::dom::{DocumentQuery, DomNode};

impl<'a> DomNode for ElementRef<'a> {
    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}

impl DocumentQuery for Html {
    type Node<'a> = ElementRef<'a>
    where
        Self: 'a;

    fn find<'a>(&'a self, selector: &str) -> Vec<ElementRef<'a>> {
        let sel = match Selector::parse(selector) {
            Ok(s) => s,
            Err(_) => {
                trace!(selector, "invalid selector");
                return Vec::new();
            }
        };
        self.select(&sel).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_attr_ci() {
        let doc = Html::parse_document(
            r#"<html><head><meta name="HEADLINE" content="Big News"></head><body></body></html>"#,
        );
        let nodes = doc.find_by_attr_ci("meta", "name", "headline");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].attr("content").as_deref(), Some("Big News"));
    }

    #[test]
    fn test_text_concatenates_descendants() {
        let doc = Html::parse_document("<html><body><p>Hello <b>world</b></p></body></html>");
        let nodes = doc.find("p");
        assert_eq!(DomNode::text(&nodes[0]), "Hello world");
    }

    #[test]
    fn test_invalid_selector_is_empty() {
        let doc = Html::parse_document("<html></html>");
        assert!(doc.find("[[[invalid").is_empty());
    }
}
