//! Abstract 2D paint surface
//!
//! Figures render through [`PaintSurface`], an immediate-mode interface that
//! mirrors the subset of the HTML canvas 2D context the editor needs. The
//! core never keeps surface state across calls beyond one paint pass.
//!
//! [`RecordingSurface`] captures every call as a [`PaintOp`]; it backs the
//! tests and is handy for headless debugging.

use crate::color::Color;

/// Immediate-mode drawing target.
pub trait PaintSurface {
    fn set_stroke_style(&mut self, color: &Color);
    fn set_fill_style(&mut self, color: &Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, segments: &[f64]);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    #[allow(clippy::too_many_arguments)]
    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    );
    fn close_path(&mut self);

    fn stroke(&mut self);
    fn fill(&mut self);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn set_font(&mut self, font: &str);
    fn stroke_text(&mut self, text: &str, x: f64, y: f64);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    StrokeStyle(String),
    FillStyle(String),
    LineWidth(f64),
    LineDash(Vec<f64>),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rect(f64, f64, f64, f64),
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    ClosePath,
    Stroke,
    Fill,
    StrokeRect(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
    Font(String),
    StrokeText(String, f64, f64),
}

/// Surface that records calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Number of recorded ops matching `pred`.
    pub fn count(&self, pred: impl Fn(&PaintOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl PaintSurface for RecordingSurface {
    fn set_stroke_style(&mut self, color: &Color) {
        self.ops.push(PaintOp::StrokeStyle(color.to_css()));
    }

    fn set_fill_style(&mut self, color: &Color) {
        self.ops.push(PaintOp::FillStyle(color.to_css()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(PaintOp::LineWidth(width));
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        self.ops.push(PaintOp::LineDash(segments.to_vec()));
    }

    fn begin_path(&mut self) {
        self.ops.push(PaintOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(PaintOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(PaintOp::LineTo(x, y));
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(PaintOp::Rect(x, y, w, h));
    }

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        _rotation: f64,
        _start_angle: f64,
        _end_angle: f64,
    ) {
        self.ops.push(PaintOp::Ellipse { cx, cy, rx, ry });
    }

    fn close_path(&mut self) {
        self.ops.push(PaintOp::ClosePath);
    }

    fn stroke(&mut self) {
        self.ops.push(PaintOp::Stroke);
    }

    fn fill(&mut self) {
        self.ops.push(PaintOp::Fill);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(PaintOp::StrokeRect(x, y, w, h));
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(PaintOp::FillRect(x, y, w, h));
    }

    fn set_font(&mut self, font: &str) {
        self.ops.push(PaintOp::Font(font.to_string()));
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        self.ops.push(PaintOp::StrokeText(text.to_string(), x, y));
    }
}
