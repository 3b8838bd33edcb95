// ABOUTME: Metadata extraction strategies and the helpers they share.
// ABOUTME: Includes the meta extractor, title cleaner, fallback chains and selector cache.

//! Metadata extraction module.
//!
//! Submodules:
//! - `meta`: the six-step page metadata extractor.
//! - `title`: title cleaning heuristic.
//! - `chain`: first-non-empty combinator for fallback chains.
//! - `fields`: attribute and text lookups over a `DocumentQuery`.
//! - `compiled`: compiled-selector cache for the dom_query adapter.

pub mod chain;
pub mod compiled;
pub mod fields;
pub mod meta;
pub mod title;
