//! YAML configuration file support for lexreport.
//!
//! Every section is optional; omitted sections and fields keep their
//! defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "bacon reports"
//!
//! tokenize:
//!   lowercase: true
//!   strip_punctuation: true
//!   split_contractions: true
//!
//! corpus:
//!   base_url: "https://baconipsum.com"
//!   kind: "all-meat"
//!   max_paragraphs: 100
//!   timeout_secs: 30
//!
//! chart:
//!   top_words: 10
//!   top_lengths: 20
//!   top_bigrams: 20
//!   top_trigrams: 20
//!
//! tables:
//!   rows: 5
//!
//! report:
//!   margin: 72
//!   body_size: 10
//!
//! store:
//!   backend: "redb"
//!   path: "/var/lib/lexreport/metrics.redb"
//! ```

use std::fs;
use std::path::Path;

use chart::ChartConfig;
use corpus::CorpusConfig;
use report::{ReportConfig, TableConfig};
use serde::{Deserialize, Serialize};
use store::StoreConfig;
use thiserror::Error;
use tokenize::TokenizeConfig;

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for the whole pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct LexreportConfig {
    /// Configuration format version.
    pub version: String,
    pub name: Option<String>,
    pub tokenize: TokenizeConfig,
    pub corpus: CorpusConfig,
    pub chart: ChartConfig,
    pub tables: TableConfig,
    pub report: ReportConfig,
    pub store: StoreConfig,
}

impl Default for LexreportConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            tokenize: TokenizeConfig::default(),
            corpus: CorpusConfig::default(),
            chart: ChartConfig::default(),
            tables: TableConfig::default(),
            report: ReportConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

impl LexreportConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: LexreportConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => {}
            v => return Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }

        if self.corpus.base_url.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "corpus.base_url must not be empty".into(),
            ));
        }
        if self.corpus.timeout_secs == 0 {
            return Err(ConfigLoadError::Validation(
                "corpus.timeout_secs must be > 0".into(),
            ));
        }
        if self.tables.rows == 0 {
            return Err(ConfigLoadError::Validation(
                "tables.rows must be > 0".into(),
            ));
        }
        if let StoreConfig::Redb { path } = &self.store {
            if path.trim().is_empty() {
                return Err(ConfigLoadError::Validation(
                    "store.path must not be empty".into(),
                ));
            }
        }

        self.chart
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        self.report
            .validate()
            .map_err(|e| ConfigLoadError::Validation(e.to_string()))?;
        Ok(())
    }
}
