use std::f64::consts::TAU;

use figurekit_core::{BoundingBox, Color, PaintSurface};

use super::stroke::finish_closed;
use super::{FigureShape, Stroke};

/// Axis-aligned ellipse inscribed in the normalized box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignEllipse {
    pub stroke: Stroke,
    pub fill: bool,
}

impl DesignEllipse {
    pub fn new(stroke: Stroke, fill: bool) -> Self {
        Self { stroke, fill }
    }
}

impl FigureShape for DesignEllipse {
    fn tag(&self) -> &'static str {
        "Ellipse"
    }

    fn draw(&self, bbox: &BoundingBox, color: &Color, surface: &mut dyn PaintSurface) {
        let center = bbox.center();

        self.stroke.apply(color, surface);
        surface.begin_path();
        surface.ellipse(
            center.x,
            center.y,
            bbox.wr() / 2.0,
            bbox.hr() / 2.0,
            0.0,
            0.0,
            TAU,
        );
        surface.close_path();
        finish_closed(color, self.fill, surface);
    }
}
