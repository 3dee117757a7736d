use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::{FontStyle, FontTransform};

use crate::font::text_width;
use crate::panel::Panel;
use crate::{ChartConfig, ChartError};

pub const TITLE: &str = "Visual Representations";

const FONT: &str = "sans-serif";
const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Rotated labels may take at most this share of a panel's height.
const MAX_LABEL_SHARE: f64 = 0.4;

pub(crate) fn drawing<E>(err: DrawingAreaErrorKind<E>) -> ChartError
where
    E: std::error::Error + Send + Sync,
{
    ChartError::Drawing(err.to_string())
}

/// Draws the titled 2×2 grid of panels onto `root`.
pub(crate) fn draw_grid<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &[Panel; 4],
    cfg: &ChartConfig,
) -> Result<(), ChartError> {
    root.fill(&WHITE).map_err(drawing)?;

    let title = (FONT, cfg.title_size).into_font().style(FontStyle::Bold);
    let body = root.titled(TITLE, title).map_err(drawing)?;

    for (area, panel) in body.split_evenly((2, 2)).iter().zip(panels) {
        draw_panel(area, panel, cfg)?;
    }
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    cfg: &ChartConfig,
) -> Result<(), ChartError> {
    let slots = panel.bars.len() as u32;
    let top = panel.max_count();
    let y_max = top + top / 10 + 1;

    let (_, panel_height) = area.dim_in_pixel();
    let x_area = x_label_area(panel, cfg.label_size, panel_height);
    let y_area = text_width(&y_max.to_string(), cfg.label_size as f32, false).ceil() as u32 + 8;

    let mut chart = ChartBuilder::on(area)
        .caption(panel.title, TextStyle::from((FONT, cfg.panel_title_size).into_font()))
        .margin(4u32)
        .x_label_area_size(x_area)
        .y_label_area_size(y_area)
        .build_cartesian_2d((0u32..slots).into_segmented(), 0u64..y_max)
        .map_err(drawing)?;

    let formatter = |value: &SegmentValue<u32>| match value {
        SegmentValue::CenterOf(idx) => panel
            .bars
            .get(*idx as usize)
            .map(|bar| bar.label.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };

    let mut x_font = (FONT, cfg.label_size).into_font();
    if panel.rotate_labels {
        x_font = x_font.transform(FontTransform::Rotate90);
    }

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(panel.bars.len() + 1)
        .y_labels(5)
        .x_label_formatter(&formatter)
        .x_label_style(TextStyle::from(x_font))
        .y_label_style(TextStyle::from((FONT, cfg.label_size).into_font()))
        .draw()
        .map_err(drawing)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(1)
                .data(
                    panel
                        .bars
                        .iter()
                        .enumerate()
                        .map(|(idx, bar)| (idx as u32, bar.count)),
                ),
        )
        .map_err(drawing)?;

    Ok(())
}

/// Height reserved under the x axis: one line of text, or the longest
/// rotated label, capped to a share of the panel.
fn x_label_area(panel: &Panel, label_size: f64, panel_height: u32) -> u32 {
    let line = label_size.ceil() as u32 + 10;
    if !panel.rotate_labels {
        return line;
    }
    let longest = panel
        .bars
        .iter()
        .map(|bar| text_width(&bar.label, label_size as f32, false))
        .fold(0.0_f32, f32::max);
    let cap = (f64::from(panel_height) * MAX_LABEL_SHARE) as u32;
    (longest.ceil() as u32 + 10).clamp(line, cap.max(line))
}
