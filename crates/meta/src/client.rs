// ABOUTME: Client facade that wires URL normalization, HTML parsing and the extraction pipeline.
// ABOUTME: Provides extract_html() and extract_bytes(); it never performs network I/O.

use dom_query::Document;
use tracing::debug;

use crate::article::Article;
use crate::error::ExtractError;
use crate::options::{ClientBuilder, Configuration};
use crate::pipeline::Pipeline;
use crate::resource::decode_body;
use crate::url_norm::normalize;

/// Runs the extraction pipeline over documents the caller already fetched.
///
/// The client owns its [`Configuration`], so the language resolved for one
/// document becomes the default for the next one extracted by the same
/// client. Use one client per worker.
#[derive(Debug)]
pub struct Client {
    config: Configuration,
    pipeline: Pipeline<Document>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(Configuration::default(), Pipeline::with_defaults())
    }
}

impl Client {
    pub fn new(config: Configuration, pipeline: Pipeline<Document>) -> Self {
        Self { config, pipeline }
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    /// Extract metadata from an HTML string served at `url`.
    ///
    /// # Errors
    /// Fails only if `url` is malformed.
    pub fn extract_html(&mut self, url: &str, html: &str) -> Result<Article, ExtractError> {
        let cleaned = normalize(url)?;
        debug!(url, final_url = %cleaned.final_url, "extracting");

        let doc = Document::from(html);
        let mut article = Article::from_cleaned_url(&cleaned);
        self.pipeline.run(&doc, &mut article, &mut self.config);
        if article.is_empty() {
            debug!(url, "no metadata found");
        }
        Ok(article)
    }

    /// Extract metadata from raw bytes, decoding them with the charset from
    /// `content_type` or by detection.
    pub fn extract_bytes(
        &mut self,
        url: &str,
        body: &[u8],
        content_type: Option<&str>,
    ) -> Result<Article, ExtractError> {
        let html = decode_body(body, content_type);
        self.extract_html(url, &html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ARTICLE_HTML: &str = r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>Fallback | Example News</title>
            <meta property="og:site_name" content="Example News">
            <meta property="og:title" content="Example News | Rust 2.0 Released">
            <meta property="og:type" content="article">
            <meta property="article:author" content="Jane">
            <meta name="description" content="All about it.">
            <meta name="keywords" content="rust, release">
        </head>
        <body><p>Body</p></body>
        </html>"#;

    #[test]
    fn test_extract_html() {
        let mut client = Client::default();
        let article = client
            .extract_html("https://news.example.com/r#!2", ARTICLE_HTML)
            .unwrap();

        assert_eq!(article.title, "Rust 2.0 Released");
        assert_eq!(article.meta_description, "All about it.");
        assert_eq!(article.meta_keywords, "rust, release");
        assert_eq!(article.domain, "news.example.com");
        assert_eq!(
            article.canonical_link,
            "https://news.example.com/r?_escaped_fragment_=2"
        );
        assert_eq!(article.language, "en");
        assert_eq!(
            article.open_graph.get("author").map(String::as_str),
            Some("Jane")
        );
    }

    #[test]
    fn test_malformed_url() {
        let mut client = Client::default();
        let err = client.extract_html("http://[::1", ARTICLE_HTML).unwrap_err();
        assert!(err.is_malformed_url());
    }

    #[test]
    fn test_language_carries_over_between_documents() {
        let mut client = Client::builder().language("en").build();
        client
            .extract_html("https://example.fr/a", r#"<html lang="fr"></html>"#)
            .unwrap();
        let second = client
            .extract_html("https://example.fr/b", "<html></html>")
            .unwrap();
        assert_eq!(second.language, "fr");
        assert_eq!(client.config().language(), "fr");
    }

    #[test]
    fn test_extract_bytes_latin1() {
        let mut body = b"<html><head><title>Caf".to_vec();
        body.push(0xe9);
        body.extend_from_slice(b"</title></head></html>");

        let mut client = Client::default();
        let article = client
            .extract_bytes(
                "https://example.com/",
                &body,
                Some("text/html; charset=ISO-8859-1"),
            )
            .unwrap();
        assert_eq!(article.title, "Café");
    }
}
