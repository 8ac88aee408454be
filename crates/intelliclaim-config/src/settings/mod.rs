//! The base settings bundle.
//!
//! ```text
//! Settings
//! ├── api: ApiSettings              # Title, version, bind host and port
//! ├── model: ModelSettings          # Embedding and generation models
//! ├── document: DocumentSettings    # Chunking and upload size limit
//! ├── storage: StorageSettings      # Vector store and upload directories
//! ├── retrieval: RetrievalSettings  # Top-K and similarity threshold
//! ├── processing: ProcessingSettings # Time limit and batch size
//! ├── security: SecuritySettings    # CORS origins and API key header
//! ├── logging: LoggingSettings      # Level and record format
//! └── features: FeatureFlags        # Optional behaviour toggles
//! ```
//!
//! [`Settings::default`] is the base bundle every profile starts from.

mod api;
mod document;
mod features;
mod logging;
mod model;
mod retrieval;
mod security;

pub use api::ApiSettings;
pub use document::{DocumentSettings, StorageSettings};
pub use features::FeatureFlags;
pub use logging::{LogFormatFields, LogLevel, LoggingSettings};
pub use model::ModelSettings;
pub use retrieval::{ProcessingSettings, RetrievalSettings};
pub use security::SecuritySettings;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::views::{ApiConfig, ModelConfig};

/// Base values for every setting.
pub(crate) mod defaults {
    use std::net::{IpAddr, Ipv4Addr};

    /// API title shown in generated documentation.
    pub const API_TITLE: &str = "IntelliClaim RAG API";

    /// API version.
    pub const API_VERSION: semver::Version = semver::Version::new(1, 0, 0);

    /// Bind address: all IPv4 interfaces.
    pub const API_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

    /// Bind port.
    pub const API_PORT: u16 = 8000;

    /// Sentence embedding model identifier.
    pub const EMBEDDING_MODEL: &str = "BAAI/bge-m3";

    /// Generation model identifier.
    pub const LLM_MODEL: &str = "gemini-1.5-flash";

    /// Chunk size in characters.
    pub const CHUNK_SIZE: usize = 2000;

    /// Overlap between adjacent chunks in characters.
    pub const CHUNK_OVERLAP: usize = 100;

    /// Largest accepted upload (50 MiB).
    pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

    /// Vector store directory.
    pub const VECTOR_STORE_PATH: &str = "./chroma_db";

    /// Upload directory.
    pub const UPLOAD_PATH: &str = "./uploads";

    /// Number of documents returned by retrieval.
    pub const TOP_K_DOCUMENTS: usize = 5;

    /// Minimum similarity for a retrieved chunk to be used.
    pub const SIMILARITY_THRESHOLD: f64 = 0.7;

    /// Per-request processing budget in seconds.
    pub const MAX_PROCESSING_TIME_SECS: u64 = 30;

    /// Documents per embedding batch.
    pub const BATCH_SIZE: usize = 50;

    /// Wildcard origin accepted by the base bundle.
    pub const ALLOWED_ORIGIN_ANY: &str = "*";

    /// Header carrying the API key.
    pub const API_KEY_HEADER: &str = "X-API-Key";

    /// Record layout for log lines.
    pub const LOG_FORMAT: &str = "%(asctime)s - %(name)s - %(levelname)s - %(message)s";
}

/// Complete, immutable settings bundle.
///
/// Construct it with [`Settings::default`] for the base bundle, or through
/// [`SettingsRegistry`](crate::SettingsRegistry) to get the bundle with a
/// profile applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use = "settings do nothing unless you use them"]
pub struct Settings {
    /// Debug mode; set by the active profile.
    #[serde(default)]
    pub debug: bool,

    /// API identity and network binding.
    #[serde(default)]
    pub api: ApiSettings,

    /// Model selection.
    #[serde(default)]
    pub model: ModelSettings,

    /// Document processing.
    #[serde(default)]
    pub document: DocumentSettings,

    /// Storage paths.
    #[serde(default)]
    pub storage: StorageSettings,

    /// Retrieval parameters.
    #[serde(default)]
    pub retrieval: RetrievalSettings,

    /// Processing limits.
    #[serde(default)]
    pub processing: ProcessingSettings,

    /// Security.
    #[serde(default)]
    pub security: SecuritySettings,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Feature flags.
    #[serde(default)]
    pub features: FeatureFlags,
}

impl Default for Settings {
    /// Returns the base bundle.
    fn default() -> Self {
        Self {
            debug: false,
            api: ApiSettings::default(),
            model: ModelSettings::default(),
            document: DocumentSettings::default(),
            storage: StorageSettings::default(),
            retrieval: RetrievalSettings::default(),
            processing: ProcessingSettings::default(),
            security: SecuritySettings::default(),
            logging: LoggingSettings::default(),
            features: FeatureFlags::default(),
        }
    }
}

impl Settings {
    /// Returns the model-related view.
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            embedding_model: self.model.embedding_model.clone(),
            llm_model: self.model.llm_model.clone(),
            chunk_size: self.document.chunk_size,
            chunk_overlap: self.document.chunk_overlap,
            top_k: self.retrieval.top_k,
            similarity_threshold: self.retrieval.similarity_threshold,
        }
    }

    /// Returns the API-related view.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            title: self.api.title.clone(),
            version: self.api.version.clone(),
            host: self.api.host,
            port: self.api.port,
        }
    }

    /// Validates every group and returns the first violation found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSetting`](crate::Error::InvalidSetting) naming
    /// the offending field.
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.model.validate()?;
        self.document.validate()?;
        self.storage.validate()?;
        self.retrieval.validate()?;
        self.processing.validate()?;
        self.security.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn base_bundle_matches_constants() {
        let settings = Settings::default();

        assert!(!settings.debug);
        assert_eq!(settings.api.title, "IntelliClaim RAG API");
        assert_eq!(settings.api.version.to_string(), "1.0.0");
        assert_eq!(settings.api.host.to_string(), "0.0.0.0");
        assert_eq!(settings.api.port, 8000);
        assert_eq!(settings.model.embedding_model, "BAAI/bge-m3");
        assert_eq!(settings.model.llm_model, "gemini-1.5-flash");
        assert_eq!(settings.document.chunk_size, 2000);
        assert_eq!(settings.document.chunk_overlap, 100);
        assert_eq!(settings.document.max_file_size, 52_428_800);
        assert_eq!(settings.storage.vector_store_path, Path::new("./chroma_db"));
        assert_eq!(settings.storage.upload_path, Path::new("./uploads"));
        assert_eq!(settings.retrieval.top_k, 5);
        assert_eq!(settings.retrieval.similarity_threshold, 0.7);
        assert_eq!(settings.processing.max_processing_time_secs, 30);
        assert_eq!(settings.processing.batch_size, 50);
        assert_eq!(settings.security.allowed_origins, vec!["*"]);
        assert_eq!(settings.security.api_key_header, "X-API-Key");
        assert_eq!(settings.logging.level, LogLevel::Info);
        assert_eq!(
            settings.logging.format,
            "%(asctime)s - %(name)s - %(levelname)s - %(message)s"
        );
        assert!(settings.features.enable_caching);
        assert!(!settings.features.enable_rate_limiting);
        assert!(settings.features.enable_audit_trail);
        assert!(settings.features.enable_explainability);
    }

    #[test]
    fn base_bundle_is_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn validate_reports_first_offending_field() {
        let mut settings = Settings::default();
        settings.document.chunk_overlap = settings.document.chunk_size;
        settings.retrieval.top_k = 0;

        let err = settings.validate().unwrap_err();
        assert_eq!(err.field(), Some("document.chunk_overlap"));
    }

    #[test]
    fn views_follow_groups() {
        let mut settings = Settings::default();
        settings.document.chunk_size = 512;
        settings.api.port = 9000;

        assert_eq!(settings.model_config().chunk_size, 512);
        assert_eq!(settings.api_config().port, 9000);
    }

    #[test]
    fn missing_groups_deserialize_to_base_values() {
        let settings: Settings = serde_json::from_str(r#"{ "debug": true }"#).unwrap();

        assert!(settings.debug);
        assert_eq!(settings.model, ModelSettings::default());
        assert_eq!(settings.security, SecuritySettings::default());
    }

    #[test]
    fn partial_groups_fill_missing_fields_from_base() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "api": { "port": 9000 },
                "retrieval": { "top_k": 8 },
                "logging": { "level": "ERROR" },
                "features": { "enable_caching": false }
            }"#,
        )
        .unwrap();
        let base = Settings::default();

        assert_eq!(settings.api.port, 9000);
        assert_eq!(settings.api.title, base.api.title);
        assert_eq!(settings.api.host, base.api.host);
        assert_eq!(settings.retrieval.top_k, 8);
        assert_eq!(
            settings.retrieval.similarity_threshold,
            base.retrieval.similarity_threshold
        );
        assert_eq!(settings.logging.level, LogLevel::Error);
        assert_eq!(settings.logging.format, base.logging.format);
        assert!(!settings.features.enable_caching);
        assert!(settings.features.enable_audit_trail);
        assert!(settings.validate().is_ok());
    }
}
