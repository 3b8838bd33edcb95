// ABOUTME: Document-query capability consumed by the extractors, plus adapters for concrete HTML engines.
// ABOUTME: Keeps extraction logic independent of dom_query/scraper so it can run against any tree.

//! Document-query abstraction.
//!
//! The extractors only need four things from a parsed document: run a CSS
//! selector, run a case-insensitive attribute-equality query, read an
//! attribute from a node, and read a node's text. [`DocumentQuery`] and
//! [`DomNode`] capture exactly that, with implementations for
//! `dom_query::Document` and `scraper::Html`.

pub mod dom_query_adapter;
pub mod scraper_adapter;

/// A node returned by a document query.
pub trait DomNode {
    /// Attribute value, or `None` when the attribute is absent.
    fn attr(&self, name: &str) -> Option<String>;

    /// Concatenated text content of the node and its descendants.
    fn text(&self) -> String;
}

/// Query capability over a parsed document.
///
/// Invalid selectors yield an empty result rather than an error; absence of
/// markup is never a failure for the extractors.
pub trait DocumentQuery {
    type Node<'a>: DomNode
    where
        Self: 'a;

    /// All nodes matching a CSS selector, in document order.
    fn find<'a>(&'a self, selector: &str) -> Vec<Self::Node<'a>>;

    /// Same as [`find`](Self::find), for selectors built from document
    /// content. Implementations that cache compiled selectors must not
    /// retain these.
    fn find_uncached<'a>(&'a self, selector: &str) -> Vec<Self::Node<'a>> {
        self.find(selector)
    }

    /// Nodes matching `tag` whose `attr` equals `value`, compared
    /// ASCII case-insensitively. `tag` may carry a combinator prefix such as
    /// `html > head > meta`.
    fn find_by_attr_ci<'a>(&'a self, tag: &str, attr: &str, value: &str) -> Vec<Self::Node<'a>> {
        self.find(&attr_equals_ci(tag, attr, value))
    }
}

/// Builds `tag[attr="value" i]`.
pub fn attr_equals_ci(tag: &str, attr: &str, value: &str) -> String {
    format!("{}[{}=\"{}\" i]", tag, attr, css_escape_string(value))
}

/// Builds `tag[attr^="prefix"]` (case-sensitive prefix match).
pub fn attr_prefix(tag: &str, attr: &str, prefix: &str) -> String {
    format!("{}[{}^=\"{}\"]", tag, attr, css_escape_string(prefix))
}

/// Escapes a value for use inside a double-quoted CSS string.
pub fn css_escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\a "),
            '\r' => out.push_str("\\d "),
            '\0' => out.push('\u{FFFD}'),
            _ => out.push(c),
        }
    }
    out
}
