use figurekit_core::{BoundingBox, Color, PaintSurface};

use super::FigureShape;

pub const DEFAULT_FONT_SIZE: &str = "48px";
pub const DEFAULT_FONT_FAMILY: &str = "serif";

/// Outlined text anchored at the bottom-left of the normalized box.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignText {
    pub text: String,
    /// CSS font size, e.g. `48px`.
    pub font_size: String,
    pub font_family: String,
}

impl Default for DesignText {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl DesignText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }

    pub fn with_font(mut self, font_size: impl Into<String>, font_family: impl Into<String>) -> Self {
        self.font_size = font_size.into();
        self.font_family = font_family.into();
        self
    }

    /// CSS font shorthand.
    pub fn font(&self) -> String {
        format!("{} {}", self.font_size, self.font_family)
    }
}

impl FigureShape for DesignText {
    fn tag(&self) -> &'static str {
        "Text"
    }

    fn draw(&self, bbox: &BoundingBox, color: &Color, surface: &mut dyn PaintSurface) {
        surface.set_stroke_style(color);
        surface.set_font(&self.font());
        surface.stroke_text(&self.text, bbox.xr(), bbox.yr() + bbox.hr());
    }
}
