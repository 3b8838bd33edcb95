// ABOUTME: Pipeline configuration (default language plus free-form settings) and the builders.
// ABOUTME: ConfigurationBuilder and ClientBuilder provide fluent construction of Configuration and Client.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::pipeline::{Pipeline, Stage};

/// Language assumed until a document declares a valid one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Configuration key for the default language.
pub const LANGUAGE_KEY: &str = "language";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Pipeline-scoped settings shared by the stages.
///
/// `language` is read by the meta stage as a fallback and overwritten with
/// whatever language it resolves (last writer wins). Any other key is kept
/// verbatim for stages outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_language")]
    language: String,
    #[serde(flatten)]
    extras: HashMap<String, String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            language: default_language(),
            extras: HashMap::new(),
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Current default language.
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Look up a setting by key. `"language"` maps to the typed field.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            LANGUAGE_KEY => Some(self.language.as_str()),
            _ => self.extras.get(key).map(String::as_str),
        }
    }

    /// Store a setting by key. `"language"` maps to the typed field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if key == LANGUAGE_KEY {
            self.language = value.into();
        } else {
            self.extras.insert(key, value.into());
        }
    }
}

/// Builder for constructing a Configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self {
            config: Configuration::default(),
        }
    }

    /// Set the default language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.set_language(language);
        self
    }

    /// Set an arbitrary setting.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.set(key, value);
        self
    }

    pub fn build(self) -> Configuration {
        self.config
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: Configuration,
    pipeline: Option<Pipeline<dom_query::Document>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            config: Configuration::default(),
            pipeline: None,
        }
    }

    /// Set the default language.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.set_language(language);
        self
    }

    /// Replace the whole configuration.
    pub fn configuration(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    /// Append a stage after the metadata stage.
    pub fn stage(mut self, stage: impl Stage<dom_query::Document> + 'static) -> Self {
        let pipeline = self.pipeline.take().unwrap_or_else(Pipeline::with_defaults);
        self.pipeline = Some(pipeline.stage(stage));
        self
    }

    /// Build the Client with the configured options.
    pub fn build(self) -> Client {
        Client::new(
            self.config,
            self.pipeline.unwrap_or_else(Pipeline::with_defaults),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language() {
        let config = Configuration::default();
        assert_eq!(config.language(), "en");
        assert_eq!(config.get("language"), Some("en"));
    }

    #[test]
    fn test_get_set_language_key() {
        let mut config = Configuration::new();
        config.set("language", "fr");
        assert_eq!(config.language(), "fr");
        config.set_language("de");
        assert_eq!(config.get(LANGUAGE_KEY), Some("de"));
    }

    #[test]
    fn test_extras() {
        let mut config = Configuration::builder().option("browser", "firefox").build();
        assert_eq!(config.get("browser"), Some("firefox"));
        assert_eq!(config.get("missing"), None);
        config.set("browser", "chrome");
        assert_eq!(config.get("browser"), Some("chrome"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: Configuration = serde_json::from_str(r#"{"strict":"yes"}"#).unwrap();
        assert_eq!(config.language(), "en");
        assert_eq!(config.get("strict"), Some("yes"));

        let config: Configuration = serde_json::from_str(r#"{"language":"nl"}"#).unwrap();
        assert_eq!(config.language(), "nl");
    }

    #[test]
    fn test_client_builder_language() {
        let client = ClientBuilder::new().language("ja").build();
        assert_eq!(client.config().language(), "ja");
    }
}
