// ABOUTME: Article record shared by the extraction stages for one document.
// ABOUTME: Holds the URL fields from normalization plus the metadata the extractors resolve.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::url_norm::CleanedUrl;

/// Extracted page metadata for a single document.
///
/// The URL fields are filled before extraction; the metadata fields are
/// overwritten by the meta stage. Empty strings mean "not found".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Article {
    pub url: String,
    pub final_url: String,
    pub link_hash: String,
    pub domain: String,
    pub title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub canonical_link: String,
    pub language: String,
    pub open_graph: BTreeMap<String, String>,
}

impl Article {
    /// Seed an article with the URL fields of a normalized URL.
    pub fn from_cleaned_url(cleaned: &CleanedUrl) -> Self {
        Self {
            url: cleaned.url.clone(),
            final_url: cleaned.final_url.clone(),
            link_hash: cleaned.link_hash.clone(),
            domain: cleaned.domain().to_string(),
            ..Default::default()
        }
    }

    /// Returns true if no metadata field has been resolved.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.meta_description.is_empty()
            && self.meta_keywords.is_empty()
            && self.open_graph.is_empty()
    }
}
