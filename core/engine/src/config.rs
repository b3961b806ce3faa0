//! FILENAME: core/engine/src/config.rs
//! PURPOSE: Settings for a document pass.
//! CONTEXT: The UI hands these over as JSON; every field has a default so a
//! partial (or empty) object is valid.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid document config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Markers that start a comment running to end of line.
    pub comment_prefixes: Vec<String>,
    /// Whether a blank line starts a new block for `total`.
    pub reset_total_on_blank: bool,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            comment_prefixes: vec!["#".to_string(), "//".to_string()],
            reset_total_on_blank: true,
        }
    }
}

impl DocumentConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
