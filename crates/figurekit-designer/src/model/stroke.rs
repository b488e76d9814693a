//! Stroke and fill helpers shared by the geometric shapes.

use figurekit_core::{Color, PaintSurface};
use serde::{Deserialize, Serialize};

/// Line thickness plus dash pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub line_thickness: f64,
    /// Canvas dash segments; empty means solid.
    pub line_style: Vec<f64>,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::solid(1.0)
    }
}

impl Stroke {
    pub fn new(line_thickness: f64, line_style: Vec<f64>) -> Self {
        Self {
            line_thickness,
            line_style,
        }
    }

    pub fn solid(line_thickness: f64) -> Self {
        Self::new(line_thickness, Vec::new())
    }

    pub fn is_dashed(&self) -> bool {
        !self.line_style.is_empty()
    }

    /// Sets stroke color, width and dash on the surface.
    pub fn apply(&self, color: &Color, surface: &mut dyn PaintSurface) {
        surface.set_stroke_style(color);
        surface.set_line_width(self.line_thickness);
        surface.set_line_dash(&self.line_style);
    }
}

/// Finishes a closed path: optional fill in the figure color, then stroke.
pub(crate) fn finish_closed(color: &Color, fill: bool, surface: &mut dyn PaintSurface) {
    if fill {
        surface.set_fill_style(color);
        surface.fill();
    }
    surface.stroke();
}
