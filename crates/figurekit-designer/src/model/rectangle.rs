use figurekit_core::{BoundingBox, Color, PaintSurface};

use super::{FigureShape, Stroke};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignRectangle {
    pub stroke: Stroke,
    pub fill: bool,
}

impl DesignRectangle {
    pub fn new(stroke: Stroke, fill: bool) -> Self {
        Self { stroke, fill }
    }
}

impl FigureShape for DesignRectangle {
    fn tag(&self) -> &'static str {
        "Rectangle"
    }

    fn draw(&self, bbox: &BoundingBox, color: &Color, surface: &mut dyn PaintSurface) {
        self.stroke.apply(color, surface);
        if self.fill {
            surface.set_fill_style(color);
            surface.fill_rect(bbox.xr(), bbox.yr(), bbox.wr(), bbox.hr());
        } else {
            surface.stroke_rect(bbox.xr(), bbox.yr(), bbox.wr(), bbox.hr());
        }
    }
}
