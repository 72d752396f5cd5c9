//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{KvittoError, Result};

/// Main configuration for kvitto.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KvittoConfig {
    /// PDF reading configuration.
    pub pdf: PdfConfig,

    /// Receipt line repair and segmentation configuration.
    pub receipt: ReceiptConfig,
}

/// PDF reading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum baseline distance (in page units) for two runs to share a row.
    pub row_tolerance: f64,

    /// Maximum pages to process (0 = unlimited).
    pub max_pages: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            row_tolerance: 1.0,
            max_pages: 0,
        }
    }
}

/// Receipt processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    /// Unit tokens that, when they end a row, mean the total price was
    /// pushed onto the next physical row.
    pub unit_suffixes: Vec<String>,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            unit_suffixes: vec!["st".to_string(), "kg".to_string()],
        }
    }
}

impl KvittoConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| KvittoError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| KvittoError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
