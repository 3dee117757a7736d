//! Top-to-bottom page flow.
//!
//! [`Layout`] keeps a cursor measured from the bottom of the page, as PDF
//! user space is, and starts a new page whenever the next block does not
//! fit above the bottom margin.

use chart::{encode_win_ansi, ChartArtifact, BOLD_FONT, REGULAR_FONT};
use lopdf::content::Operation;
use lopdf::Object;

use crate::table::{Table, TableGrid};
use crate::text::{fit, wrap};
use crate::ReportConfig;

/// Resource name the chart form XObject is registered under.
pub const CHART_XOBJECT: &str = "Chart0";

const GRID_GAP: f32 = 6.0;
const CELL_PADDING: f32 = 4.0;
/// Share of a table's width given to its key column.
const KEY_COLUMN: f32 = 0.7;

fn real(value: f32) -> Object {
    Object::Real(value)
}

pub struct Layout<'a> {
    cfg: &'a ReportConfig,
    pages: Vec<Vec<Operation>>,
    cursor: f32,
}

impl<'a> Layout<'a> {
    pub fn new(cfg: &'a ReportConfig) -> Self {
        Self {
            cfg,
            pages: vec![Vec::new()],
            cursor: cfg.page_height - cfg.margin,
        }
    }

    fn top(&self) -> f32 {
        self.cfg.page_height - self.cfg.margin
    }

    fn remaining(&self) -> f32 {
        self.cursor - self.cfg.margin
    }

    fn at_page_top(&self) -> bool {
        self.cursor >= self.top()
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
        self.cursor = self.top();
    }

    /// Moves to a fresh page unless `height` fits below the cursor. A block
    /// taller than a whole page is placed at the top of one and overflows.
    fn reserve(&mut self, height: f32) {
        if height > self.remaining() && !self.at_page_top() {
            self.new_page();
        }
    }

    fn ops(&mut self) -> &mut Vec<Operation> {
        // `pages` always holds the current page.
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn text(&mut self, text: &str, x: f32, baseline: f32, size: f32, bold: bool) {
        let font = if bold { BOLD_FONT } else { REGULAR_FONT };
        let ops = self.ops();
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new("Tf", vec![font.into(), real(size)]));
        ops.push(Operation::new("Td", vec![real(x), real(baseline)]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(text))],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32)) {
        let ops = self.ops();
        ops.push(Operation::new("w", vec![real(0.5)]));
        ops.push(Operation::new("m", vec![real(from.0), real(from.1)]));
        ops.push(Operation::new("l", vec![real(to.0), real(to.1)]));
        ops.push(Operation::new("S", vec![]));
    }

    /// A bold heading, kept on the same page as the line that follows it.
    pub fn heading(&mut self, text: &str) {
        let size = self.cfg.heading_size;
        let height = size * self.cfg.leading;
        let next_line = self.cfg.body_size * self.cfg.leading;
        self.reserve(height + next_line);

        let max_width = self.cfg.content_width();
        for line in wrap(text, size, true, max_width) {
            self.reserve(height);
            let baseline = self.cursor - size;
            self.text(&line, self.cfg.margin, baseline, size, true);
            self.cursor -= height;
        }
        self.cursor -= size * 0.5;
    }

    /// A body paragraph wrapped to the content width. Lines flow onto the
    /// next page one at a time.
    pub fn paragraph(&mut self, text: &str) {
        let size = self.cfg.body_size;
        let height = size * self.cfg.leading;
        for line in wrap(text, size, false, self.cfg.content_width()) {
            self.reserve(height);
            let baseline = self.cursor - size;
            self.text(&line, self.cfg.margin, baseline, size, false);
            self.cursor -= height;
        }
    }

    /// Vertical space. Space that runs past the bottom margin is dropped
    /// rather than carried to the next page.
    pub fn spacer(&mut self, height: f32) {
        self.cursor = (self.cursor - height).max(self.cfg.margin);
    }

    /// The 2×2 grid of tables, one grid row at a time.
    pub fn table_grid(&mut self, grid: &TableGrid) {
        let row_height = self.cfg.table_size * 1.6;
        let cell_width = self.cfg.content_width() / 2.0;

        for (row_idx, pair) in grid.cells.iter().enumerate() {
            let rows = pair.iter().map(|t| t.rows.len() + 1).max().unwrap_or(1);
            let height = rows as f32 * row_height;
            if row_idx > 0 {
                self.spacer(GRID_GAP);
            }
            self.reserve(height);

            let top = self.cursor;
            for (col, table) in pair.iter().enumerate() {
                let x = self.cfg.margin + col as f32 * cell_width;
                self.table(table, x, top, cell_width, row_height);
            }
            self.cursor = top - height;
        }
    }

    fn table(&mut self, table: &Table, x: f32, top: f32, width: f32, row_height: f32) {
        let size = self.cfg.table_size;
        let key_width = width * KEY_COLUMN;
        let value_x = x + key_width + CELL_PADDING;
        let value_width = width - key_width - 2.0 * CELL_PADDING;

        for (idx, [key, value]) in table.cells().iter().enumerate() {
            let bold = idx == 0;
            let baseline = top - idx as f32 * row_height - (row_height + size) / 2.0 + size * 0.2;
            let key = fit(key, size, bold, key_width - 2.0 * CELL_PADDING);
            let value = fit(value, size, bold, value_width);
            self.text(&key, x + CELL_PADDING, baseline, size, bold);
            self.text(&value, value_x, baseline, size, bold);
        }

        let rule = top - row_height;
        self.line((x + CELL_PADDING, rule), (x + width - CELL_PADDING, rule));
    }

    /// The chart, centered and scaled down to fit the content box.
    pub fn chart(&mut self, chart: &ChartArtifact) {
        let (w, h) = (chart.width() as f32, chart.height() as f32);
        let scale = (self.cfg.content_width() / w)
            .min(self.cfg.content_height() / h)
            .min(1.0);
        let (w, h) = (w * scale, h * scale);
        self.reserve(h);

        let x = self.cfg.margin + (self.cfg.content_width() - w) / 2.0;
        let y = self.cursor - h;
        let ops = self.ops();
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![real(scale), real(0.0), real(0.0), real(scale), real(x), real(y)],
        ));
        ops.push(Operation::new("Do", vec![CHART_XOBJECT.into()]));
        ops.push(Operation::new("Q", vec![]));
        self.cursor = y;
    }

    /// Content operations, one list per page.
    pub fn finish(self) -> Vec<Vec<Operation>> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(pages: &[Vec<Operation>], operator: &str) -> usize {
        pages
            .iter()
            .flatten()
            .filter(|op| op.operator == operator)
            .count()
    }

    #[test]
    fn short_content_stays_on_one_page() {
        let cfg = ReportConfig::default();
        let mut layout = Layout::new(&cfg);
        layout.heading("Original Text");
        layout.paragraph("bacon ipsum dolor amet");
        layout.spacer(cfg.spacer);
        let pages = layout.finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(count(&pages, "Tj"), 2);
    }

    #[test]
    fn long_paragraphs_flow_onto_new_pages() {
        let cfg = ReportConfig::default();
        let mut layout = Layout::new(&cfg);
        let paragraph = "pork belly ".repeat(2000);
        layout.paragraph(&paragraph);
        let pages = layout.finish();
        assert!(pages.len() > 1);
        assert!(pages.iter().all(|page| !page.is_empty()));
    }

    #[test]
    fn chart_that_does_not_fit_starts_a_page() {
        let cfg = ReportConfig::default();
        let mut layout = Layout::new(&cfg);
        layout.cursor = cfg.margin + 100.0;
        let dists = frequency::analyze(&["ham", "hock", "jowl", "ham"]);
        let chart = chart::render_chart(&dists, &chart::ChartConfig::default()).expect("chart");
        layout.chart(&chart);
        let pages = layout.finish();
        assert_eq!(pages.len(), 2);
        assert_eq!(count(&pages[1..], "Do"), 1);
    }
}
