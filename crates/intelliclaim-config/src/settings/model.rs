//! Model selection.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{Error, Result};

/// Identifiers of the models the pipeline talks to.
///
/// No profile overrides these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[must_use = "config does nothing unless you use it"]
pub struct ModelSettings {
    /// Embedding model identifier, e.g. a Hugging Face repository name.
    pub embedding_model: String,

    /// Generation model identifier.
    pub llm_model: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            embedding_model: defaults::EMBEDDING_MODEL.to_owned(),
            llm_model: defaults::LLM_MODEL.to_owned(),
        }
    }
}

impl ModelSettings {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.embedding_model.trim().is_empty() {
            return Err(Error::invalid_setting(
                "model.embedding_model",
                "must not be empty",
            ));
        }

        if self.llm_model.trim().is_empty() {
            return Err(Error::invalid_setting("model.llm_model", "must not be empty"));
        }

        Ok(())
    }
}
