//! Summary tables and PDF assembly for lexreport.
//!
//! [`TableGrid::build`] turns the four distributions into 2×2 top-k tables;
//! [`assemble`] lays out the original paragraphs, the narrative, the tables
//! and a rendered chart on US letter pages and returns the PDF bytes. No
//! file is written.
//!
//! ```rust
//! use chart::{render_chart, ChartConfig};
//! use frequency::analyze;
//! use report::{assemble, ReportConfig, TableConfig, TableGrid};
//!
//! let paragraphs = ["Bacon ipsum dolor amet pork belly bacon jowl."];
//! let dists = analyze(&["bacon", "ipsum", "dolor", "amet", "pork", "belly", "bacon", "jowl"]);
//! let tables = TableGrid::build(&dists, &TableConfig::default());
//! let chart = render_chart(&dists, &ChartConfig::default()).unwrap();
//!
//! let doc = assemble(&paragraphs, &tables, &chart, &ReportConfig::default()).unwrap();
//! assert!(doc.as_bytes().starts_with(b"%PDF"));
//! ```

mod config;
mod document;
mod error;
mod layout;
mod table;
mod text;

pub use crate::config::{ReportConfig, TableConfig};
pub use crate::document::{
    assemble, ReportDocument, FINDINGS_HEADING, NARRATIVE, ORIGINAL_TEXT_HEADING,
};
pub use crate::error::ReportError;
pub use crate::table::{Table, TableGrid, TableRow};
pub use crate::text::{fit, wrap};

#[cfg(test)]
mod tests {
    use super::*;
    use chart::{render_chart, ChartArtifact, ChartConfig};
    use frequency::{analyze, Distributions};
    use lopdf::content::Content;
    use lopdf::{Document, Object};

    const PARAGRAPHS: [&str; 2] = [
        "Bacon ipsum dolor amet pork belly bacon jowl, pork loin ham hock.",
        "Beef ribs bacon pork chop turducken. Ham hock pork belly bacon.",
    ];

    fn inputs(paragraphs: &[&str]) -> (Distributions, TableGrid, ChartArtifact) {
        let tokens: Vec<String> = paragraphs
            .iter()
            .flat_map(|p| p.split_whitespace())
            .map(|w| w.trim_matches(|c: char| c.is_ascii_punctuation()).to_lowercase())
            .collect();
        let dists = analyze(&tokens);
        let tables = TableGrid::build(&dists, &TableConfig::default());
        let chart = render_chart(&dists, &ChartConfig::default()).expect("chart");
        (dists, tables, chart)
    }

    #[test]
    fn produces_a_parseable_pdf() {
        let (_, tables, chart) = inputs(&PARAGRAPHS);
        let doc = assemble(&PARAGRAPHS, &tables, &chart, &ReportConfig::default()).expect("pdf");

        assert!(doc.as_bytes().starts_with(b"%PDF-1.5"));
        assert!(!doc.is_empty());

        let parsed = Document::load_mem(doc.as_bytes()).expect("parse");
        assert_eq!(parsed.get_pages().len(), doc.page_count());
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        let (_, tables, chart) = inputs(&PARAGRAPHS);
        let cfg = ReportConfig::default();
        let first = assemble(&PARAGRAPHS, &tables, &chart, &cfg).expect("pdf");
        let second = assemble(&PARAGRAPHS, &tables, &chart, &cfg).expect("pdf");
        assert_eq!(first, second);
    }

    #[test]
    fn long_corpus_spans_several_pages() {
        let long = "Pork loin shank capicola tongue, ham hock flank brisket. ".repeat(60);
        let paragraphs: Vec<&str> = std::iter::repeat(long.as_str()).take(5).collect();
        let (_, tables, chart) = inputs(&paragraphs);
        let doc = assemble(&paragraphs, &tables, &chart, &ReportConfig::default()).expect("pdf");
        assert!(doc.page_count() > 2);

        let parsed = Document::load_mem(doc.as_bytes()).expect("parse");
        assert_eq!(parsed.get_pages().len(), doc.page_count());
    }

    #[test]
    fn page_text_carries_sections_in_order() {
        let (_, tables, chart) = inputs(&PARAGRAPHS);
        let doc = assemble(&PARAGRAPHS, &tables, &chart, &ReportConfig::default()).expect("pdf");
        let parsed = Document::load_mem(doc.as_bytes()).expect("parse");
        let page_id = parsed.get_pages()[&1];
        let content = Content::decode(&parsed.get_page_content(page_id).expect("content"))
            .expect("decode");
        let shown: Vec<String> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            })
            .collect();

        let position = |needle: &str| shown.iter().position(|t| t == needle);
        let original = position(ORIGINAL_TEXT_HEADING).expect("original heading");
        let findings = position(FINDINGS_HEADING).expect("findings heading");
        let table = position("Frequency").expect("table header");
        assert!(original < findings && findings < table);
    }

    #[test]
    fn rejects_invalid_page_geometry() {
        let (_, tables, chart) = inputs(&PARAGRAPHS);
        let cfg = ReportConfig {
            margin: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            assemble(&PARAGRAPHS, &tables, &chart, &cfg),
            Err(ReportError::InvalidConfig(_))
        ));
    }
}
