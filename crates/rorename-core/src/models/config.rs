//! Configuration structures for the batch pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::rename::CollisionPolicy;

/// Main configuration for rorename.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RorenameConfig {
    /// Folder processed when none is given on the command line.
    pub default_folder: Option<PathBuf>,

    /// Batch processing configuration.
    pub batch: BatchConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Batch processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// What to do when the rename target already exists.
    pub on_collision: CollisionPolicy,

    /// File name prefix of generated summary reports.
    pub summary_prefix: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            on_collision: CollisionPolicy::Fail,
            summary_prefix: "summary".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file written alongside console output (`null` disables it).
    pub log_file: Option<PathBuf>,

    /// Base log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from("pdf_processing.log")),
            level: "info".to_string(),
        }
    }
}

impl RorenameConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
