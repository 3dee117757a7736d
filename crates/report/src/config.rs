use serde::{Deserialize, Serialize};

use crate::ReportError;

/// Number of rows shown in each summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub rows: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { rows: 5 }
    }
}

/// Page geometry and type sizes, in points.
///
/// The defaults describe a US letter page with one-inch margins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub heading_size: f32,
    pub body_size: f32,
    pub table_size: f32,
    /// Line height as a multiple of the font size.
    pub leading: f32,
    /// Vertical gap after each paragraph and section.
    pub spacer: f32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            margin: 72.0,
            heading_size: 18.0,
            body_size: 10.0,
            table_size: 9.0,
            leading: 1.2,
            spacer: 12.0,
        }
    }
}

impl ReportConfig {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    pub fn content_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        let sizes = [
            ("page_width", self.page_width),
            ("page_height", self.page_height),
            ("heading_size", self.heading_size),
            ("body_size", self.body_size),
            ("table_size", self.table_size),
            ("leading", self.leading),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(ReportError::InvalidConfig(format!(
                    "{name} must be a positive number"
                )));
            }
        }
        if !(self.margin >= 0.0 && self.spacer >= 0.0) {
            return Err(ReportError::InvalidConfig(
                "margin and spacer must not be negative".into(),
            ));
        }
        // Room for at least one heading line.
        let line = self.heading_size * self.leading;
        if self.content_width() < line || self.content_height() < 2.0 * line {
            return Err(ReportError::InvalidConfig(format!(
                "margins of {} leave no room on a {}x{} page",
                self.margin, self.page_width, self.page_height
            )));
        }
        Ok(())
    }
}
