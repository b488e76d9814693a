use figurekit_core::{BoundingBox, Color, PaintSurface};

use super::{FigureShape, Stroke};

/// Straight segment from the box origin to the opposite raw corner.
///
/// The raw (signed) box is used so the segment keeps the direction it was
/// drawn in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignLine {
    pub stroke: Stroke,
}

impl DesignLine {
    pub fn new(stroke: Stroke) -> Self {
        Self { stroke }
    }
}

impl FigureShape for DesignLine {
    fn tag(&self) -> &'static str {
        "Line"
    }

    fn draw(&self, bbox: &BoundingBox, color: &Color, surface: &mut dyn PaintSurface) {
        self.stroke.apply(color, surface);
        surface.begin_path();
        surface.move_to(bbox.x(), bbox.y());
        surface.line_to(bbox.x() + bbox.w(), bbox.y() + bbox.h());
        surface.stroke();
    }
}
