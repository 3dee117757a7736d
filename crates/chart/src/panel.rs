use frequency::{Distributions, FreqDist, KeyLabel};
use std::hash::Hash;

use crate::{ChartConfig, ChartError};

pub const WORD_TITLE: &str = "Word Frequency Distribution";
pub const LENGTH_TITLE: &str = "Word Length Distribution";
pub const BIGRAM_TITLE: &str = "Bigram Frequency Distribution";
pub const TRIGRAM_TITLE: &str = "Trigram Frequency Distribution";

/// One bar: its axis label and height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub count: u64,
}

/// The bars of one chart panel, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub bars: Vec<Bar>,
    /// Tick labels are drawn rotated a quarter turn.
    pub rotate_labels: bool,
}

impl Panel {
    fn from_dist<K>(
        title: &'static str,
        dist: &FreqDist<K>,
        top: usize,
        rotate_labels: bool,
    ) -> Result<Self, ChartError>
    where
        K: KeyLabel + Eq + Hash + Clone,
    {
        let bars: Vec<Bar> = dist
            .most_common(top)
            .into_iter()
            .map(|row| Bar {
                label: row.key.axis_label(),
                count: row.count,
            })
            .collect();
        if bars.is_empty() {
            return Err(ChartError::EmptyPanel(title));
        }
        Ok(Self {
            title,
            bars,
            rotate_labels,
        })
    }

    /// Height of the tallest bar.
    pub fn max_count(&self) -> u64 {
        self.bars.iter().map(|bar| bar.count).max().unwrap_or(0)
    }
}

/// Selects the four panels in grid order: words, lengths, bigrams, trigrams.
pub fn panels(dists: &Distributions, cfg: &ChartConfig) -> Result<[Panel; 4], ChartError> {
    Ok([
        Panel::from_dist(WORD_TITLE, &dists.words, cfg.top_words, true)?,
        Panel::from_dist(LENGTH_TITLE, &dists.lengths, cfg.top_lengths, false)?,
        Panel::from_dist(BIGRAM_TITLE, &dists.bigrams, cfg.top_bigrams, true)?,
        Panel::from_dist(TRIGRAM_TITLE, &dists.trigrams, cfg.top_trigrams, true)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use frequency::analyze;

    #[test]
    fn bars_follow_ranking_and_limits() {
        let dists = analyze(&["ham", "hock", "ham", "jowl", "ham", "hock"]);
        let cfg = ChartConfig {
            top_words: 2,
            ..Default::default()
        };
        let [words, lengths, bigrams, trigrams] = panels(&dists, &cfg).expect("panels");

        let labels: Vec<&str> = words.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["ham", "hock"]);
        assert_eq!(words.max_count(), 3);
        assert!(words.rotate_labels);

        assert_eq!(lengths.bars[0], Bar { label: "3".into(), count: 3 });
        assert!(!lengths.rotate_labels);

        assert_eq!(bigrams.bars[0].label, "ham hock");
        assert_eq!(bigrams.bars[0].count, 2);
        assert_eq!(trigrams.bars.len(), 4);
    }

    #[test]
    fn missing_trigrams_is_an_empty_panel() {
        let dists = analyze(&["ham", "hock"]);
        assert_eq!(
            panels(&dists, &ChartConfig::default()),
            Err(ChartError::EmptyPanel(TRIGRAM_TITLE))
        );
    }
}
