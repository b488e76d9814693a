//! Browser canvas adapter
//!
//! Implements [`PaintSurface`] for `web_sys::CanvasRenderingContext2d` so
//! a drawing can be painted straight into an HTML canvas from wasm.

use crate::color::Color;
use crate::paint::PaintSurface;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

impl PaintSurface for CanvasRenderingContext2d {
    fn set_stroke_style(&mut self, color: &Color) {
        #[allow(deprecated)]
        CanvasRenderingContext2d::set_stroke_style(self, &JsValue::from_str(&color.to_css()));
    }

    fn set_fill_style(&mut self, color: &Color) {
        #[allow(deprecated)]
        CanvasRenderingContext2d::set_fill_style(self, &JsValue::from_str(&color.to_css()));
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_line_dash(&mut self, segments: &[f64]) {
        let dash = js_sys::Array::new();
        for segment in segments {
            dash.push(&JsValue::from_f64(*segment));
        }
        if let Err(err) = CanvasRenderingContext2d::set_line_dash(self, &dash) {
            tracing::warn!("set_line_dash rejected: {:?}", err);
        }
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::rect(self, x, y, w, h);
    }

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start_angle: f64,
        end_angle: f64,
    ) {
        if let Err(err) = CanvasRenderingContext2d::ellipse(
            self,
            cx,
            cy,
            rx,
            ry,
            rotation,
            start_angle,
            end_angle,
        ) {
            tracing::warn!("ellipse rejected: {:?}", err);
        }
    }

    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn set_font(&mut self, font: &str) {
        CanvasRenderingContext2d::set_font(self, font);
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        if let Err(err) = CanvasRenderingContext2d::stroke_text(self, text, x, y) {
            tracing::warn!("stroke_text rejected: {:?}", err);
        }
    }
}
