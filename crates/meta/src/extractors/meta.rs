// ABOUTME: MetaExtractor resolves title, description, keywords, canonical link, language and OpenGraph data.
// ABOUTME: Runs six ordered steps against a DocumentQuery, mutating the Article and the shared Configuration.

//! Page metadata extraction.
//!
//! The steps run in a fixed order because later ones read what earlier ones
//! wrote: title cleaning needs the OpenGraph map, and the canonical link
//! falls back to the article's final URL.
//!
//! 1. OpenGraph (`og:` properties, then `{og:type}:` properties)
//! 2. Title
//! 3. Meta description
//! 4. Meta keywords
//! 5. Canonical link
//! 6. Language (written back into the configuration)

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::article::Article;
use crate::dom::{DocumentQuery, DomNode};
use crate::extractors::chain::Chain;
use crate::extractors::fields::{
    attr_by_attr_ci, collect_document_properties, collect_properties, first_text,
    meta_content_ci,
};
use crate::extractors::title::clean_title;
use crate::options::Configuration;
use crate::pipeline::{Context, Stage};

static LANGUAGE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{2}$").unwrap());

/// Extracts page-level metadata into an [`Article`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaExtractor;

impl MetaExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Run every extraction step against `doc`, mutating and returning `article`.
    ///
    /// `article.domain` and `article.final_url` are read, everything else the
    /// extractor owns is overwritten. The resolved language is also stored in
    /// `config`, so a later document without a usable language inherits it.
    pub fn run<'a, D: DocumentQuery>(
        &self,
        doc: &D,
        article: &'a mut Article,
        config: &mut Configuration,
    ) -> &'a mut Article {
        article.open_graph = open_graph(doc);
        article.title = title(doc, &article.open_graph, &article.domain);
        article.meta_description = meta_description(doc);
        article.meta_keywords = meta_keywords(doc);
        article.canonical_link = canonical_link(doc, &article.final_url);
        article.language = meta_language(doc).unwrap_or_else(|| config.language().to_string());

        config.set_language(article.language.clone());

        debug!(
            url = %article.final_url,
            open_graph = article.open_graph.len(),
            language = %article.language,
            "metadata extracted"
        );
        article
    }
}

impl<D: DocumentQuery> Stage<D> for MetaExtractor {
    fn name(&self) -> &'static str {
        "meta"
    }

    fn process(&self, ctx: &mut Context<'_, D>) {
        self.run(ctx.doc, &mut *ctx.article, &mut *ctx.config);
    }
}

/// OpenGraph properties, plus the properties of the declared `og:type`
/// namespace (`article:author` for `og:type=article`).
pub fn open_graph<D: DocumentQuery>(doc: &D) -> BTreeMap<String, String> {
    let mut results = BTreeMap::new();
    collect_properties(doc, "og", &mut results);

    let kind = results.get("type").filter(|t| !t.is_empty()).cloned();
    if let Some(kind) = kind {
        collect_document_properties(doc, &kind, &mut results);
    }

    results
}

/// First non-empty cleaned title from OpenGraph, a `headline` meta, or `<title>`.
pub fn title<D: DocumentQuery>(
    doc: &D,
    open_graph: &BTreeMap<String, String>,
    domain: &str,
) -> String {
    let clean = |raw: &str| clean_title(raw, open_graph, domain);

    Chain::new("title")
        .or("og:title", || {
            open_graph
                .get("title")
                .map(|t| clean(t.as_str()))
                .unwrap_or_default()
        })
        .or("meta[name=headline]", || {
            clean(meta_content_ci(doc, "name", "headline").as_str())
        })
        .or("meta[property=headline]", || {
            clean(meta_content_ci(doc, "property", "headline").as_str())
        })
        .or("title", || clean(first_text(doc, "html > head > title").as_str()))
        .first_non_empty()
        .unwrap_or_default()
}

pub fn meta_description<D: DocumentQuery>(doc: &D) -> String {
    Chain::new("meta_description")
        .or("meta[name=description]", || {
            meta_content_ci(doc, "name", "description")
        })
        .or("meta[property=og:description]", || {
            meta_content_ci(doc, "property", "og:description")
        })
        .or("meta[name=twitter:description]", || {
            meta_content_ci(doc, "name", "twitter:description")
        })
        .first_non_empty()
        .unwrap_or_default()
}

pub fn meta_keywords<D: DocumentQuery>(doc: &D) -> String {
    meta_content_ci(doc, "name", "keywords")
}

/// Declared canonical URL, falling back to `final_url`.
pub fn canonical_link<D: DocumentQuery>(doc: &D, final_url: &str) -> String {
    Chain::new("canonical_link")
        .or("link[rel=canonical]", || {
            attr_by_attr_ci(doc, "link", "rel", "canonical", "href")
        })
        .or("meta[property=og:url]", || {
            meta_content_ci(doc, "property", "og:url")
        })
        .or("meta[name=twitter:url]", || {
            meta_content_ci(doc, "name", "twitter:url")
        })
        .first_non_empty()
        .unwrap_or_else(|| final_url.to_string())
}

/// Declared two-letter language code, lowercased.
///
/// The root `lang` attribute takes precedence, read as is; the head meta
/// tags are only consulted when it is missing or empty. A candidate that
/// is not exactly two ASCII letters (`en-US`, `" en "`) yields `None`.
pub fn meta_language<D: DocumentQuery>(doc: &D) -> Option<String> {
    let root = doc
        .find("html[lang]")
        .first()
        .and_then(|node| node.attr("lang"))
        .unwrap_or_default();

    let lang = if root.is_empty() {
        Chain::new("language")
            .or("meta[http-equiv=content-language]", || {
                attr_by_attr_ci(
                    doc,
                    "html > head > meta",
                    "http-equiv",
                    "content-language",
                    "content",
                )
            })
            .or("meta[name=lang]", || {
                attr_by_attr_ci(doc, "html > head > meta", "name", "lang", "content")
            })
            .first_non_empty()
            .unwrap_or_default()
    } else {
        root
    };

    if LANGUAGE_CODE_RE.is_match(&lang) {
        Some(lang.to_lowercase())
    } else {
        None
    }
}
