use chart::{ChartArtifact, BOLD_FONT, REGULAR_FONT};
use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use tracing::debug;

use crate::layout::{Layout, CHART_XOBJECT};
use crate::{ReportConfig, ReportError, TableGrid};

pub const ORIGINAL_TEXT_HEADING: &str = "Original Text";
pub const FINDINGS_HEADING: &str = "Analytical Findings";

/// Fixed description of the analysis, printed under [`FINDINGS_HEADING`].
pub const NARRATIVE: &str = "The word analysis made to the original text were: frequently \
occurring words, the distribution of word lengths, bigrams (two consecutive words) and \
trigrams (three consecutive words) analysis, and the following tables display the 5 most \
common of each analysis.";

const PDF_VERSION: &str = "1.5";

/// A finished PDF held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    bytes: Vec<u8>,
    pages: usize,
}

impl ReportDocument {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

fn encode(err: impl std::fmt::Display) -> ReportError {
    ReportError::Encode(err.to_string())
}

/// Lays out the report and serializes it as a PDF.
///
/// Sections appear in a fixed order: the original paragraphs, the
/// narrative, the table grid and finally the chart. The document carries
/// no creation date, so the same inputs always produce the same bytes.
pub fn assemble<S: AsRef<str>>(
    paragraphs: &[S],
    tables: &TableGrid,
    chart: &ChartArtifact,
    cfg: &ReportConfig,
) -> Result<ReportDocument, ReportError> {
    cfg.validate()?;

    let mut layout = Layout::new(cfg);
    layout.heading(ORIGINAL_TEXT_HEADING);
    for paragraph in paragraphs {
        layout.paragraph(paragraph.as_ref());
        layout.spacer(cfg.spacer);
    }
    layout.heading(FINDINGS_HEADING);
    layout.paragraph(NARRATIVE);
    layout.spacer(cfg.spacer);
    layout.table_grid(tables);
    layout.spacer(cfg.spacer);
    layout.chart(chart);
    let pages = layout.finish();

    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let font = |base: &str| {
        dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => Object::Name(base.as_bytes().to_vec()),
            "Encoding" => "WinAnsiEncoding",
        }
    };
    let regular_id = doc.add_object(font("Helvetica"));
    let bold_id = doc.add_object(font("Helvetica-Bold"));
    let fonts = dictionary! {
        REGULAR_FONT => regular_id,
        BOLD_FONT => bold_id,
    };

    let chart_form = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => vec![
                real(0.0),
                real(0.0),
                real(chart.width() as f32),
                real(chart.height() as f32),
            ],
            "Resources" => dictionary! { "Font" => fonts.clone() },
        },
        chart.content().map_err(encode)?,
    );
    let chart_id = doc.add_object(chart_form);

    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
        "XObject" => dictionary! { CHART_XOBJECT => chart_id },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    let page_count = pages.len();
    for operations in pages {
        let content = Content { operations }.encode().map_err(encode)?;
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                real(0.0),
                real(0.0),
                real(cfg.page_width),
                real(cfg.page_height),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ReportError::Write(e.to_string()))?;

    debug!(pages = page_count, bytes = bytes.len(), "report assembled");
    Ok(ReportDocument {
        bytes,
        pages: page_count,
    })
}
