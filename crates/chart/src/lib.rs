//! Four-panel bar chart of the frequency distributions.
//!
//! [`render_chart`] draws the word, length, bigram and trigram panels under
//! the "Visual Representations" title and keeps the result as a list of PDF
//! content-stream operations, ready to be placed in a document as a form
//! XObject. [`render_chart_svg`] draws the same chart as an SVG string for
//! previews.
//!
//! Rendering never touches the filesystem, so concurrent requests each get
//! their own artifact.
//!
//! ```rust
//! use chart::{render_chart, ChartConfig};
//! use frequency::analyze;
//!
//! let dists = analyze(&["bacon", "bacon", "pork", "loin"]);
//! let artifact = render_chart(&dists, &ChartConfig::default()).unwrap();
//! assert_eq!(artifact.width(), 468);
//! assert!(!artifact.operations().is_empty());
//! ```

mod config;
mod draw;
mod error;
mod font;
mod panel;
mod pdf;

use frequency::Distributions;
use lopdf::content::{Content, Operation};
use plotters::prelude::*;
use tracing::debug;

pub use crate::config::ChartConfig;
pub use crate::draw::TITLE;
pub use crate::error::ChartError;
pub use crate::font::{encode_win_ansi, text_width};
pub use crate::panel::{
    panels, Bar, Panel, BIGRAM_TITLE, LENGTH_TITLE, TRIGRAM_TITLE, WORD_TITLE,
};
pub use crate::pdf::{PdfBackend, BOLD_FONT, REGULAR_FONT};

use crate::draw::{draw_grid, drawing};

/// A rendered chart held as PDF drawing operations.
///
/// The operations use PDF user space with the origin at the bottom-left of
/// a `width × height` box and reference the fonts [`REGULAR_FONT`] and
/// [`BOLD_FONT`].
#[derive(Debug, Clone)]
pub struct ChartArtifact {
    width: u32,
    height: u32,
    operations: Vec<Operation>,
}

impl ChartArtifact {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Encodes the operations as a content stream body.
    pub fn content(&self) -> Result<Vec<u8>, ChartError> {
        Content {
            operations: self.operations.clone(),
        }
        .encode()
        .map_err(|e| ChartError::Drawing(e.to_string()))
    }
}

/// Renders the four panels into a [`ChartArtifact`].
///
/// Fails with [`ChartError::EmptyPanel`] when any distribution is empty,
/// e.g. trigrams for a corpus of fewer than three tokens.
pub fn render_chart(dists: &Distributions, cfg: &ChartConfig) -> Result<ChartArtifact, ChartError> {
    cfg.validate()?;
    let panels = panels(dists, cfg)?;

    let mut operations = Vec::new();
    {
        let root = PdfBackend::new(&mut operations, (cfg.width, cfg.height)).into_drawing_area();
        draw_grid(&root, &panels, cfg)?;
        root.present().map_err(drawing)?;
    }

    debug!(
        operations = operations.len(),
        width = cfg.width,
        height = cfg.height,
        "chart rendered"
    );
    Ok(ChartArtifact {
        width: cfg.width,
        height: cfg.height,
        operations,
    })
}

/// Renders the same chart as a standalone SVG document.
pub fn render_chart_svg(dists: &Distributions, cfg: &ChartConfig) -> Result<String, ChartError> {
    cfg.validate()?;
    let panels = panels(dists, cfg)?;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (cfg.width, cfg.height)).into_drawing_area();
        draw_grid(&root, &panels, cfg)?;
        root.present().map_err(drawing)?;
    }
    debug!(bytes = svg.len(), "chart rendered as svg");
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use frequency::analyze;
    use lopdf::Object;

    const TEXT: &str = "bacon ipsum dolor amet pork belly bacon jowl pork loin \
                        ham hock bacon pork chop beef ribs bacon";

    fn tokens() -> Vec<&'static str> {
        TEXT.split_whitespace().collect()
    }

    fn drawn_text(artifact: &ChartArtifact) -> Vec<String> {
        artifact
            .operations()
            .iter()
            .filter(|op| op.operator == "Tj")
            .filter_map(|op| match op.operands.first() {
                Some(Object::String(bytes, _)) => Some(String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn draws_title_and_all_panel_captions() {
        let artifact = render_chart(&analyze(&tokens()), &ChartConfig::default()).expect("chart");
        let text = drawn_text(&artifact);
        for caption in [TITLE, WORD_TITLE, LENGTH_TITLE, BIGRAM_TITLE, TRIGRAM_TITLE] {
            assert!(text.iter().any(|t| t == caption), "missing {caption}");
        }
        assert!(text.iter().any(|t| t == "bacon"));
        assert!(text.iter().any(|t| t == "pork belly"));
    }

    #[test]
    fn draws_one_filled_bar_per_entry() {
        let dists = analyze(&["ham", "ham", "hock"]);
        let artifact = render_chart(&dists, &ChartConfig::default()).expect("chart");
        assert!(artifact.operations().iter().any(|op| op.operator == "re"));
        assert!(!artifact.content().expect("encode").is_empty());
    }

    #[test]
    fn rendering_is_deterministic() {
        let dists = analyze(&tokens());
        let cfg = ChartConfig::default();
        let first = render_chart(&dists, &cfg).expect("chart").content().expect("encode");
        let second = render_chart(&dists, &cfg).expect("chart").content().expect("encode");
        assert_eq!(first, second);
    }

    #[test]
    fn too_few_tokens_fail_with_empty_panel() {
        let err = render_chart(&analyze(&["ham", "hock"]), &ChartConfig::default()).unwrap_err();
        assert_eq!(err, ChartError::EmptyPanel(TRIGRAM_TITLE));

        let none: [&str; 0] = [];
        let err = render_chart(&analyze(&none), &ChartConfig::default()).unwrap_err();
        assert_eq!(err, ChartError::EmptyPanel(WORD_TITLE));
    }

    #[test]
    fn invalid_config_is_rejected_before_drawing() {
        let cfg = ChartConfig {
            height: 10,
            ..Default::default()
        };
        assert!(matches!(
            render_chart(&analyze(&tokens()), &cfg),
            Err(ChartError::InvalidConfig(_))
        ));
    }

    #[test]
    fn svg_preview_contains_captions() {
        let svg = render_chart_svg(&analyze(&tokens()), &ChartConfig::default()).expect("svg");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(TITLE));
        assert!(svg.contains(TRIGRAM_TITLE));
    }
}
