// ABOUTME: Pre-compiled CSS selector cache for the dom_query document adapter.
// ABOUTME: Compiles each selector string once, including the attribute selectors built per document.

//! Selector caching for efficient repeated DOM queries.
//!
//! The meta extractor issues the same handful of selectors for every
//! document, so parsing them each time would dominate the cost of the
//! actual matching. Invalid selectors are cached too, as `None`.
//!
//! Only selectors from a fixed vocabulary belong here. Selectors built from
//! document content (the `og:type` namespace) go through
//! `DocumentQuery::find_uncached` so the cache stays bounded.

use std::collections::HashMap;
use std::sync::RwLock;

use dom_query::Matcher;
use once_cell::sync::Lazy;
use tracing::trace;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Matcher>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `Some(Matcher)` if the selector is valid, `None` if invalid.
/// A poisoned lock is recovered rather than propagated; the cache only ever
/// holds fully-inserted entries.
pub fn get_or_compile(css: &str) -> Option<Matcher> {
    {
        let cache = SELECTOR_CACHE.read().unwrap_or_else(|e| e.into_inner());
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    trace!(selector = css, "compiling selector");
    let compiled = Matcher::new(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap_or_else(|e| e.into_inner());
    // Another thread may have inserted while we compiled.
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Returns true if `css` has an entry in the cache, valid or not.
pub fn is_cached(css: &str) -> bool {
    SELECTOR_CACHE
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .contains_key(css)
}

/// Number of cached selector entries, valid or not.
pub fn cached_len() -> usize {
    SELECTOR_CACHE
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .len()
}
