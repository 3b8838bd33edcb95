// ABOUTME: Generic field lookup helpers over any DocumentQuery implementation.
// ABOUTME: Provides attribute-by-attribute lookups, first-text lookups and OpenGraph property collection.

//! Field lookup helpers.
//!
//! Key behaviors:
//! - Matches are scanned in document order; the first non-empty value wins.
//! - Attribute values are trimmed; text is whitespace-normalized.
//! - Missing nodes or attributes resolve to an empty string.

use std::collections::BTreeMap;

use crate::dom::{attr_prefix, DocumentQuery, DomNode};
use crate::text::text_normalise;

/// Returns the trimmed `target` attribute of the first `tag` element whose
/// `attr` equals `value` (ASCII case-insensitive) and carries a non-empty
/// `target`.
pub fn attr_by_attr_ci<D: DocumentQuery>(
    doc: &D,
    tag: &str,
    attr: &str,
    value: &str,
    target: &str,
) -> String {
    for node in doc.find_by_attr_ci(tag, attr, value) {
        if let Some(v) = node.attr(target) {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    String::new()
}

/// Returns the trimmed `content` of the first `meta` element whose `attr`
/// equals `value`, compared case-insensitively.
pub fn meta_content_ci<D: DocumentQuery>(doc: &D, attr: &str, value: &str) -> String {
    attr_by_attr_ci(doc, "meta", attr, value, "content")
}

/// Returns the whitespace-normalized text of the first element matching
/// `selector` that has non-blank text.
pub fn first_text<D: DocumentQuery>(doc: &D, selector: &str) -> String {
    for node in doc.find(selector) {
        let normalized = text_normalise(&node.text());
        if !normalized.is_empty() {
            return normalized;
        }
    }
    String::new()
}

/// Drops the first colon-delimited segment of a property name.
///
/// `og:image:width` becomes `image:width`; `og:` becomes the empty string.
pub fn strip_namespace(property: &str) -> String {
    property.split(':').skip(1).collect::<Vec<_>>().join(":")
}

/// Inserts every `meta[property^="{namespace}:"]` element into `results`,
/// keyed by its property without the namespace. Later nodes overwrite
/// earlier ones with the same key; a missing `content` stores `""`.
pub fn collect_properties<D: DocumentQuery>(
    doc: &D,
    namespace: &str,
    results: &mut BTreeMap<String, String>,
) {
    insert_properties(doc.find(&property_selector(namespace)), results);
}

/// [`collect_properties`] for a namespace read from the document itself.
/// The selector bypasses the compiled-selector cache.
pub fn collect_document_properties<D: DocumentQuery>(
    doc: &D,
    namespace: &str,
    results: &mut BTreeMap<String, String>,
) {
    insert_properties(doc.find_uncached(&property_selector(namespace)), results);
}

fn property_selector(namespace: &str) -> String {
    attr_prefix("meta", "property", &format!("{}:", namespace))
}

fn insert_properties<N: DomNode>(nodes: Vec<N>, results: &mut BTreeMap<String, String>) {
    for node in nodes {
        let Some(property) = node.attr("property") else {
            continue;
        };
        results.insert(
            strip_namespace(&property),
            node.attr("content").unwrap_or_default(),
        );
    }
}
