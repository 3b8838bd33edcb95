// ABOUTME: Main library entry point for the digests-meta page metadata extractor.
// ABOUTME: Re-exports the public API: Client, MetaExtractor, Pipeline, normalize, Article, Configuration.

//! digests-meta - page metadata extraction for the article pipeline.
//!
//! This crate resolves title, description, keywords, canonical link,
//! declared language and OpenGraph data from an already-parsed HTML
//! document, and normalizes URLs into a crawlable, hashable form.
//!
//! # Example
//!
//! ```
//! use digests_meta::{Client, ExtractError};
//!
//! fn main() -> Result<(), ExtractError> {
//!     let html = r#"<html lang="en"><head><title>Hello | example.com</title></head></html>"#;
//!     let mut client = Client::builder().build();
//!     let article = client.extract_html("https://example.com/hello", html)?;
//!     assert_eq!(article.title, "Hello");
//!     Ok(())
//! }
//! ```

pub mod article;
pub mod client;
pub mod dom;
pub mod error;
pub mod extractors;
pub mod options;
pub mod pipeline;
pub mod resource;
pub mod text;
pub mod url_norm;

pub use crate::article::Article;
pub use crate::client::Client;
pub use crate::dom::{DocumentQuery, DomNode};
pub use crate::error::{ErrorCode, ExtractError};
pub use crate::extractors::meta::MetaExtractor;
pub use crate::extractors::title::clean_title;
pub use crate::options::{ClientBuilder, Configuration, ConfigurationBuilder};
pub use crate::pipeline::{Context, Pipeline, Stage};
pub use crate::text::text_normalise;
pub use crate::url_norm::{normalize, CleanedUrl, UrlParts};
