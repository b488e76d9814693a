use figurekit_core::{BoundingBox, Color, PaintSurface};

use super::FigureShape;

/// Composite marker. A group has no draw step of its own; the figure
/// record paints its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesignGroup;

impl FigureShape for DesignGroup {
    fn tag(&self) -> &'static str {
        "Group"
    }

    fn draw(&self, _bbox: &BoundingBox, _color: &Color, _surface: &mut dyn PaintSurface) {}
}
