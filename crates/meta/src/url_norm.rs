// ABOUTME: URL normalization producing the canonical, hashable form used by the extraction pipeline.
// ABOUTME: Rewrites hash-bang URLs to the _escaped_fragment_ convention and hashes the original string.

//! URL normalization.
//!
//! `normalize` parses a raw URL into its components, rewrites every `#!`
//! into an `_escaped_fragment_` query parameter (joined with `&` when the
//! URL already carries a non-empty query, `?` otherwise) and computes a
//! link hash over the *original* string.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use url::Url;

use crate::error::ExtractError;

/// Parsed components of a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UrlParts {
    pub scheme: String,
    pub host: Option<String>,
    /// Explicit port; `None` when absent or the scheme default.
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl From<&Url> for UrlParts {
    fn from(url: &Url) -> Self {
        let user = url.username();
        Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().map(str::to_string),
            port: url.port(),
            user: if user.is_empty() {
                None
            } else {
                Some(user.to_string())
            },
            password: url.password().map(str::to_string),
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
        }
    }
}

/// A normalized URL record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedUrl {
    /// The URL exactly as given.
    pub url: String,
    pub parts: UrlParts,
    /// Hex digest of `url`, used downstream as a cache/dedup key.
    pub link_hash: String,
    /// `url` with every `#!` rewritten to an `_escaped_fragment_` parameter.
    pub final_url: String,
}

impl CleanedUrl {
    /// Host of the URL, or an empty string when it has none.
    pub fn domain(&self) -> &str {
        self.parts.host.as_deref().unwrap_or("")
    }
}

/// Normalize a raw URL string.
///
/// # Errors
/// Returns a `MalformedUrl` error if the string cannot be parsed into URL
/// components. Relative references have no base to resolve against and are
/// rejected as well.
pub fn normalize(raw: &str) -> Result<CleanedUrl, ExtractError> {
    let parsed = Url::parse(raw).map_err(|e| {
        ExtractError::malformed_url(
            raw,
            "normalize",
            Some(anyhow::anyhow!("cannot be processed: {}", e)),
        )
    })?;
    let parts = UrlParts::from(&parsed);

    let prefix = match parts.query.as_deref() {
        Some(q) if !q.is_empty() => '&',
        _ => '?',
    };
    let final_url = raw.replace("#!", &format!("{}_escaped_fragment_=", prefix));

    Ok(CleanedUrl {
        url: raw.to_string(),
        parts,
        link_hash: link_hash(raw),
        final_url,
    })
}

/// Stable hex digest of a URL string.
pub fn link_hash(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}
