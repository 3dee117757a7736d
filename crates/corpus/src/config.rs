use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where paragraphs come from and how many may be requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub base_url: String,
    /// Bacon Ipsum text flavour, `all-meat` or `meat-and-filler`.
    pub kind: String,
    pub max_paragraphs: u32,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            base_url: "https://baconipsum.com".to_string(),
            kind: "all-meat".to_string(),
            max_paragraphs: 100,
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

impl CorpusConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
