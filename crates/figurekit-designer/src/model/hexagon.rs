use std::f64::consts::FRAC_PI_3;

use figurekit_core::{BoundingBox, Color, PaintSurface, Point};

use super::stroke::finish_closed;
use super::{FigureShape, Stroke};

/// Regular hexagon centred in the box, sized by its smaller side.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignHexagon {
    pub stroke: Stroke,
    pub fill: bool,
}

impl DesignHexagon {
    pub fn new(stroke: Stroke, fill: bool) -> Self {
        Self { stroke, fill }
    }

    /// Vertex `i` sits at angle `i * 60°` from the centre.
    pub fn vertices(bbox: &BoundingBox) -> [Point; 6] {
        let center = bbox.center();
        let radius = bbox.wr().min(bbox.hr()) / 2.0;

        std::array::from_fn(|i| {
            let angle = FRAC_PI_3 * i as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
    }
}

impl FigureShape for DesignHexagon {
    fn tag(&self) -> &'static str {
        "Hexagon"
    }

    fn draw(&self, bbox: &BoundingBox, color: &Color, surface: &mut dyn PaintSurface) {
        let [first, rest @ ..] = Self::vertices(bbox);

        self.stroke.apply(color, surface);
        surface.begin_path();
        surface.move_to(first.x, first.y);
        for vertex in rest {
            surface.line_to(vertex.x, vertex.y);
        }
        surface.close_path();
        finish_closed(color, self.fill, surface);
    }
}
