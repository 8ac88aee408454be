//! Read-only views over the settings bundle.
//!
//! Each view has a fixed key set. [`ModelConfig::to_map`] and
//! [`ApiConfig::to_map`] expose them as plain `string -> JSON value` mappings
//! for consumers that treat configuration as untyped data.

use std::net::IpAddr;

use semver::Version;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Model-related view: model identifiers plus chunking and retrieval knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Embedding model identifier.
    pub embedding_model: String,
    /// Generation model identifier.
    pub llm_model: String,
    /// Chunk size.
    pub chunk_size: usize,
    /// Chunk overlap.
    pub chunk_overlap: usize,
    /// Documents returned per query.
    pub top_k: usize,
    /// Minimum similarity score.
    pub similarity_threshold: f64,
}

impl ModelConfig {
    /// Keys of [`ModelConfig::to_map`], in declaration order.
    pub const KEYS: [&'static str; 6] = [
        "embedding_model",
        "llm_model",
        "chunk_size",
        "chunk_overlap",
        "top_k",
        "similarity_threshold",
    ];

    /// Returns the view as a key/value mapping.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let values = [
            Value::from(self.embedding_model.as_str()),
            Value::from(self.llm_model.as_str()),
            Value::from(self.chunk_size),
            Value::from(self.chunk_overlap),
            Value::from(self.top_k),
            Value::from(self.similarity_threshold),
        ];

        Self::KEYS
            .iter()
            .map(|key| (*key).to_owned())
            .zip(values)
            .collect()
    }
}

/// API-related view: identity and network binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API title.
    pub title: String,
    /// API version.
    pub version: Version,
    /// Bind host.
    pub host: IpAddr,
    /// Bind port.
    pub port: u16,
}

impl ApiConfig {
    /// Keys of [`ApiConfig::to_map`], in declaration order.
    pub const KEYS: [&'static str; 4] = ["title", "version", "host", "port"];

    /// Returns the view as a key/value mapping.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let values = [
            Value::from(self.title.as_str()),
            Value::from(self.version.to_string()),
            Value::from(self.host.to_string()),
            Value::from(self.port),
        ];

        Self::KEYS
            .iter()
            .map(|key| (*key).to_owned())
            .zip(values)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Settings;

    #[test]
    fn model_map_has_exactly_six_keys() {
        let map = Settings::default().model_config().to_map();

        assert_eq!(map.len(), 6);
        for key in ModelConfig::KEYS {
            assert!(map.contains_key(key), "missing key {key}");
        }

        assert_eq!(map["embedding_model"], json!("BAAI/bge-m3"));
        assert_eq!(map["llm_model"], json!("gemini-1.5-flash"));
        assert_eq!(map["chunk_size"], json!(2000));
        assert_eq!(map["chunk_overlap"], json!(100));
        assert_eq!(map["top_k"], json!(5));
        assert_eq!(map["similarity_threshold"], json!(0.7));
    }

    #[test]
    fn api_map_has_exactly_four_keys() {
        let map = Settings::default().api_config().to_map();

        assert_eq!(map.len(), 4);
        assert_eq!(map["title"], json!("IntelliClaim RAG API"));
        assert_eq!(map["version"], json!("1.0.0"));
        assert_eq!(map["host"], json!("0.0.0.0"));
        assert_eq!(map["port"], json!(8000));
    }

    #[test]
    fn map_matches_serde_representation() {
        let settings = Settings::default();

        let model = settings.model_config();
        assert_eq!(
            Value::Object(model.to_map()),
            serde_json::to_value(&model).unwrap()
        );

        let api = settings.api_config();
        assert_eq!(
            Value::Object(api.to_map()),
            serde_json::to_value(&api).unwrap()
        );
    }
}
