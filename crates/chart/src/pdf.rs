//! A `plotters` backend that records PDF content-stream operations.
//!
//! Coordinates arrive in plotters' space (origin top-left, y down) and are
//! flipped into PDF user space (origin bottom-left, y up) against the canvas
//! height. Text is set in the base Helvetica faces referenced by the
//! resource names [`REGULAR_FONT`] and [`BOLD_FONT`]; whoever places the
//! operations in a document must provide those fonts.

use std::convert::Infallible;

use lopdf::content::Operation;
use lopdf::Object;
use plotters_backend::text_anchor::{HPos, VPos};
use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind,
    FontStyle, FontTransform,
};

use crate::font::{encode_win_ansi, text_width};

/// Resource name of the Helvetica font.
pub const REGULAR_FONT: &str = "F1";
/// Resource name of the Helvetica-Bold font.
pub const BOLD_FONT: &str = "F2";

type DrawResult<T> = Result<T, DrawingErrorKind<Infallible>>;

/// Builds a real-number operand.
pub fn real(value: f32) -> Object {
    Object::Real(value)
}

/// Drawing backend writing into a caller-owned operation list.
pub struct PdfBackend<'a> {
    ops: &'a mut Vec<Operation>,
    size: (u32, u32),
}

impl<'a> PdfBackend<'a> {
    pub fn new(ops: &'a mut Vec<Operation>, size: (u32, u32)) -> Self {
        Self { ops, size }
    }

    fn flip(&self, (x, y): (f32, f32)) -> (f32, f32) {
        (x, self.size.1 as f32 - y)
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }

    fn fill_color(&mut self, color: BackendColor) {
        self.push("rg", rgb(color));
    }

    fn stroke_color(&mut self, color: BackendColor, width: u32) {
        self.push("RG", rgb(color));
        self.push("w", vec![real(width.max(1) as f32)]);
    }

    fn path(&mut self, points: impl IntoIterator<Item = BackendCoord>) -> bool {
        let mut started = false;
        for (x, y) in points {
            let (px, py) = self.flip((x as f32, y as f32));
            let op = if started { "l" } else { "m" };
            self.push(op, vec![real(px), real(py)]);
            started = true;
        }
        started
    }

    fn rect(&mut self, upper_left: BackendCoord, bottom_right: BackendCoord) {
        let (x0, y0) = (upper_left.0.min(bottom_right.0), upper_left.1.max(bottom_right.1));
        let width = (bottom_right.0 - upper_left.0).abs() as f32;
        let height = (bottom_right.1 - upper_left.1).abs() as f32;
        let (px, py) = self.flip((x0 as f32, y0 as f32));
        self.push("re", vec![real(px), real(py), real(width), real(height)]);
    }
}

fn rgb(color: BackendColor) -> Vec<Object> {
    let (r, g, b) = color.rgb;
    vec![
        real(f32::from(r) / 255.0),
        real(f32::from(g) / 255.0),
        real(f32::from(b) / 255.0),
    ]
}

fn invisible(color: BackendColor) -> bool {
    color.alpha <= 0.0
}

/// `(cos, sin)` of the clockwise on-screen rotation.
fn rotation(transform: FontTransform) -> (f32, f32) {
    match transform {
        FontTransform::None => (1.0, 0.0),
        FontTransform::Rotate90 => (0.0, 1.0),
        FontTransform::Rotate180 => (-1.0, 0.0),
        FontTransform::Rotate270 => (0.0, -1.0),
    }
}

impl DrawingBackend for PdfBackend<'_> {
    type ErrorType = Infallible;

    fn get_size(&self) -> (u32, u32) {
        self.size
    }

    fn ensure_prepared(&mut self) -> DrawResult<()> {
        Ok(())
    }

    fn present(&mut self) -> DrawResult<()> {
        Ok(())
    }

    fn draw_pixel(&mut self, point: BackendCoord, color: BackendColor) -> DrawResult<()> {
        if invisible(color) {
            return Ok(());
        }
        self.fill_color(color);
        self.rect(point, (point.0 + 1, point.1 + 1));
        self.push("f", vec![]);
        Ok(())
    }

    fn draw_line<S: BackendStyle>(
        &mut self,
        from: BackendCoord,
        to: BackendCoord,
        style: &S,
    ) -> DrawResult<()> {
        if invisible(style.color()) {
            return Ok(());
        }
        self.stroke_color(style.color(), style.stroke_width());
        self.path([from, to]);
        self.push("S", vec![]);
        Ok(())
    }

    fn draw_rect<S: BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> DrawResult<()> {
        if invisible(style.color()) {
            return Ok(());
        }
        if fill {
            self.fill_color(style.color());
            self.rect(upper_left, bottom_right);
            self.push("f", vec![]);
        } else {
            self.stroke_color(style.color(), style.stroke_width());
            self.rect(upper_left, bottom_right);
            self.push("S", vec![]);
        }
        Ok(())
    }

    fn draw_path<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> DrawResult<()> {
        if invisible(style.color()) {
            return Ok(());
        }
        self.stroke_color(style.color(), style.stroke_width());
        if self.path(path) {
            self.push("S", vec![]);
        }
        Ok(())
    }

    fn fill_polygon<S: BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        vert: I,
        style: &S,
    ) -> DrawResult<()> {
        if invisible(style.color()) {
            return Ok(());
        }
        self.fill_color(style.color());
        if self.path(vert) {
            self.push("h", vec![]);
            self.push("f", vec![]);
        }
        Ok(())
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> DrawResult<()> {
        let color = style.color();
        if invisible(color) || text.is_empty() {
            return Ok(());
        }

        let size = style.size() as f32;
        let bold = matches!(style.style(), FontStyle::Bold);
        let width = text_width(text, size, bold);
        let anchor = style.anchor();

        // Offset from the anchor to the baseline start, in the text's own
        // frame (x along the text, y pointing down).
        let dx = match anchor.h_pos {
            HPos::Left => 0.0,
            HPos::Center => -width / 2.0,
            HPos::Right => -width,
        };
        let dy = match anchor.v_pos {
            VPos::Top => size * 0.76,
            VPos::Center => size * 0.3,
            VPos::Bottom => 0.0,
        };

        let (cos, sin) = rotation(style.transform());
        let screen = (
            pos.0 as f32 + dx * cos - dy * sin,
            pos.1 as f32 + dx * sin + dy * cos,
        );
        let (x, y) = self.flip(screen);
        let font = if bold { BOLD_FONT } else { REGULAR_FONT };

        self.push("BT", vec![]);
        self.push("Tf", vec![font.into(), real(size)]);
        self.fill_color(color);
        self.push(
            "Tm",
            vec![real(cos), real(-sin), real(sin), real(cos), real(x), real(y)],
        );
        self.push("Tj", vec![Object::string_literal(encode_win_ansi(text))]);
        self.push("ET", vec![]);
        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> DrawResult<(u32, u32)> {
        let size = style.size() as f32;
        let bold = matches!(style.style(), FontStyle::Bold);
        let width = text_width(text, size, bold).ceil() as u32;
        let height = size.ceil() as u32;
        Ok(match style.transform() {
            FontTransform::Rotate90 | FontTransform::Rotate270 => (height, width),
            _ => (width, height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotters_backend::FontFamily;

    struct Solid(BackendColor);

    impl BackendStyle for Solid {
        fn color(&self) -> BackendColor {
            self.0
        }
    }

    struct Text {
        size: f64,
        transform: FontTransform,
    }

    impl BackendTextStyle for Text {
        type FontError = Infallible;

        fn size(&self) -> f64 {
            self.size
        }

        fn transform(&self) -> FontTransform {
            self.transform.clone()
        }

        fn family(&self) -> FontFamily<'_> {
            FontFamily::SansSerif
        }

        fn layout_box(&self, _text: &str) -> Result<((i32, i32), (i32, i32)), Self::FontError> {
            Ok(((0, 0), (0, 0)))
        }

        fn draw<E, DrawFunc: FnMut(i32, i32, BackendColor) -> Result<(), E>>(
            &self,
            _text: &str,
            _pos: BackendCoord,
            _draw: DrawFunc,
        ) -> Result<Result<(), E>, Self::FontError> {
            Ok(Ok(()))
        }
    }

    const BLACK: BackendColor = BackendColor {
        alpha: 1.0,
        rgb: (0, 0, 0),
    };

    fn numbers(op: &Operation) -> Vec<f32> {
        op.operands
            .iter()
            .map(|obj| match obj {
                Object::Real(value) => *value,
                other => panic!("expected a real operand, got {other:?}"),
            })
            .collect()
    }

    fn operators(ops: &[Operation]) -> Vec<&str> {
        ops.iter().map(|op| op.operator.as_str()).collect()
    }

    #[test]
    fn filled_rect_is_flipped_into_pdf_space() {
        let mut ops = Vec::new();
        let mut backend = PdfBackend::new(&mut ops, (100, 50));
        backend
            .draw_rect((10, 5), (30, 15), &Solid(BLACK), true)
            .expect("infallible");
        drop(backend);

        assert_eq!(operators(&ops), vec!["rg", "re", "f"]);
        assert_eq!(numbers(&ops[1]), vec![10.0, 35.0, 20.0, 10.0]);
    }

    #[test]
    fn transparent_shapes_are_skipped() {
        let mut ops = Vec::new();
        let mut backend = PdfBackend::new(&mut ops, (10, 10));
        let clear = BackendColor {
            alpha: 0.0,
            rgb: (255, 255, 255),
        };
        backend
            .draw_line((0, 0), (5, 5), &Solid(clear))
            .expect("infallible");
        drop(backend);
        assert!(ops.is_empty());
    }

    #[test]
    fn path_strokes_every_point() {
        let mut ops = Vec::new();
        let mut backend = PdfBackend::new(&mut ops, (10, 10));
        backend
            .draw_path(vec![(0, 0), (5, 5), (9, 0)], &Solid(BLACK))
            .expect("infallible");
        drop(backend);
        assert_eq!(operators(&ops), vec!["RG", "w", "m", "l", "l", "S"]);
        assert_eq!(numbers(&ops[3]), vec![5.0, 5.0]);
    }

    #[test]
    fn rotated_text_swaps_its_extent() {
        let mut ops = Vec::new();
        let backend = PdfBackend::new(&mut ops, (100, 100));
        let style = Text {
            size: 10.0,
            transform: FontTransform::Rotate90,
        };
        let (w, h) = backend.estimate_text_size("ham", &style).expect("infallible");
        // "ham" is 19.45 pt wide at 10 pt.
        assert_eq!((w, h), (10, 20));
    }

    #[test]
    fn text_is_placed_with_a_text_matrix() {
        let mut ops = Vec::new();
        let mut backend = PdfBackend::new(&mut ops, (100, 100));
        let style = Text {
            size: 10.0,
            transform: FontTransform::None,
        };
        backend.draw_text("ham", &style, (20, 30)).expect("infallible");
        drop(backend);

        assert_eq!(operators(&ops), vec!["BT", "Tf", "rg", "Tm", "Tj", "ET"]);
        // Left/top anchor: baseline sits 0.76 em below the anchor.
        let matrix = numbers(&ops[3]);
        assert_eq!(&matrix[..5], &[1.0, 0.0, 0.0, 1.0, 20.0]);
        assert!((matrix[5] - 62.4).abs() < 1e-3);
        match &ops[4].operands[0] {
            Object::String(bytes, _) => assert_eq!(bytes.as_slice(), b"ham"),
            other => panic!("expected a string operand, got {other:?}"),
        }
    }
}
