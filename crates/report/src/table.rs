use std::hash::Hash;

use frequency::{Distributions, FreqDist, KeyLabel};
use serde::Serialize;

use crate::TableConfig;

const FREQUENCY_HEADER: &str = "Frequency";

/// One ranked row: the key as displayed and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub key: String,
    pub frequency: u64,
}

/// A two-column table: key header plus "Frequency".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub key_header: &'static str,
    pub rows: Vec<TableRow>,
}

impl Table {
    fn from_dist<K>(key_header: &'static str, dist: &FreqDist<K>, rows: usize) -> Self
    where
        K: KeyLabel + Eq + Hash + Clone,
    {
        let rows = dist
            .most_common(rows)
            .into_iter()
            .map(|row| TableRow {
                key: row.key.table_label(),
                frequency: row.count,
            })
            .collect();
        Self { key_header, rows }
    }

    pub fn headers(&self) -> [&str; 2] {
        [self.key_header, FREQUENCY_HEADER]
    }

    /// Header row followed by the data rows, as display strings.
    pub fn cells(&self) -> Vec<[String; 2]> {
        let header = self.headers().map(str::to_owned);
        std::iter::once(header)
            .chain(
                self.rows
                    .iter()
                    .map(|row| [row.key.clone(), row.frequency.to_string()]),
            )
            .collect()
    }
}

/// Four tables in a 2×2 grid matching the chart layout: words and
/// lengths on top, bigrams and trigrams below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableGrid {
    pub cells: [[Table; 2]; 2],
}

impl TableGrid {
    pub fn build(dists: &Distributions, cfg: &TableConfig) -> Self {
        let rows = cfg.rows;
        Self {
            cells: [
                [
                    Table::from_dist("Word", &dists.words, rows),
                    Table::from_dist("Word Length", &dists.lengths, rows),
                ],
                [
                    Table::from_dist("Bigram", &dists.bigrams, rows),
                    Table::from_dist("Trigram", &dists.trigrams, rows),
                ],
            ],
        }
    }

    /// Tables in reading order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.cells.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frequency::analyze;

    #[test]
    fn builds_top_rows_in_grid_order() {
        let dists = analyze(&["bacon", "bacon", "pork"]);
        let grid = TableGrid::build(&dists, &TableConfig::default());

        let headers: Vec<&str> = grid.tables().map(|t| t.key_header).collect();
        assert_eq!(headers, vec!["Word", "Word Length", "Bigram", "Trigram"]);

        let words = &grid.cells[0][0];
        assert_eq!(
            words.cells(),
            vec![
                ["Word".to_string(), "Frequency".to_string()],
                ["bacon".to_string(), "2".to_string()],
                ["pork".to_string(), "1".to_string()],
            ]
        );

        let bigrams = &grid.cells[1][0];
        assert_eq!(bigrams.rows[0].key, "('bacon', 'bacon')");
        assert_eq!(bigrams.rows[1].key, "('bacon', 'pork')");
        assert_eq!(grid.cells[1][1].rows[0].key, "('bacon', 'bacon', 'pork')");
    }

    #[test]
    fn tables_hold_at_most_the_configured_rows() {
        let tokens: Vec<String> = (0..40).map(|i| format!("w{}", i % 12)).collect();
        let grid = TableGrid::build(&analyze(&tokens), &TableConfig::default());
        // Only two distinct lengths: "w0".."w9" and "w10", "w11".
        assert_eq!(grid.cells[0][1].rows.len(), 2);
        for table in grid.tables().filter(|t| t.key_header != "Word Length") {
            assert_eq!(table.rows.len(), 5);
            assert_eq!(table.cells().len(), 6);
        }
        for table in grid.tables() {
            let counts: Vec<u64> = table.rows.iter().map(|r| r.frequency).collect();
            assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn serializes_for_clients() {
        let grid = TableGrid::build(&analyze(&["ham", "hock", "ham"]), &TableConfig { rows: 1 });
        let json = serde_json::to_value(&grid).expect("serialize");
        assert_eq!(json["cells"][0][0]["rows"][0]["key"], "ham");
        assert_eq!(json["cells"][0][0]["rows"][0]["frequency"], 2);
    }
}
