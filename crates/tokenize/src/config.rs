//! Configuration for the tokenizer.
//!
//! The defaults reproduce the report pipeline's behaviour: lowercase the
//! text, drop ASCII punctuation, then split into words with the usual
//! English treebank conventions for fused forms.
//!
//! ```rust
//! use tokenize::TokenizeConfig;
//!
//! let cfg = TokenizeConfig::default();
//! assert!(cfg.lowercase);
//! assert!(cfg.strip_punctuation);
//! assert!(cfg.split_contractions);
//! ```

use serde::{Deserialize, Serialize};

/// Switches for each tokenizer step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TokenizeConfig {
    /// Apply Unicode lowercasing before anything else.
    pub lowercase: bool,
    /// Remove the ASCII punctuation set before splitting.
    pub strip_punctuation: bool,
    /// Split fused forms such as `cannot` into `can` + `not`.
    pub split_contractions: bool,
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_punctuation: true,
            split_contractions: true,
        }
    }
}
