//! Chart geometry and panel sizes.
//!
//! ```rust
//! use chart::ChartConfig;
//!
//! let cfg = ChartConfig::default();
//! assert_eq!(cfg.top_words, 10);
//! assert!(cfg.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::ChartError;

/// Controls the size of the drawing and how many bars each panel shows.
///
/// Sizes are in points, so the default 468×468 drawing spans the full
/// content width of a letter page with one-inch margins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: u32,
    pub height: u32,
    pub top_words: usize,
    pub top_lengths: usize,
    pub top_bigrams: usize,
    pub top_trigrams: usize,
    pub title_size: f64,
    pub panel_title_size: f64,
    pub label_size: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 468,
            height: 468,
            top_words: 10,
            top_lengths: 20,
            top_bigrams: 20,
            top_trigrams: 20,
            title_size: 14.0,
            panel_title_size: 8.0,
            label_size: 6.0,
        }
    }
}

impl ChartConfig {
    /// Rejects geometry that cannot hold four panels and non-positive sizes.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.width < 100 || self.height < 100 {
            return Err(ChartError::InvalidConfig(format!(
                "drawing must be at least 100x100, got {}x{}",
                self.width, self.height
            )));
        }
        let tops = [
            ("top_words", self.top_words),
            ("top_lengths", self.top_lengths),
            ("top_bigrams", self.top_bigrams),
            ("top_trigrams", self.top_trigrams),
        ];
        if let Some((name, _)) = tops.iter().find(|(_, k)| *k == 0) {
            return Err(ChartError::InvalidConfig(format!("{name} must be > 0")));
        }
        for (name, size) in [
            ("title_size", self.title_size),
            ("panel_title_size", self.panel_title_size),
            ("label_size", self.label_size),
        ] {
            if !(size.is_finite() && size > 0.0) {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be a positive number"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_top_k() {
        let cfg = ChartConfig {
            top_bigrams: 0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ChartError::InvalidConfig("top_bigrams must be > 0".into()))
        );
    }

    #[test]
    fn rejects_tiny_canvas_and_bad_fonts() {
        let small = ChartConfig {
            width: 20,
            ..Default::default()
        };
        assert!(small.validate().is_err());

        let nan = ChartConfig {
            label_size: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let cfg: ChartConfig = serde_json::from_str(r#"{"top_words": 5}"#).expect("parse");
        assert_eq!(cfg.top_words, 5);
        assert_eq!(cfg.top_trigrams, 20);
        assert_eq!(cfg.width, 468);
    }
}
