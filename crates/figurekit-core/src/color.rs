//! RGBA color model
//!
//! Colors are stored as four 8-bit channels and rendered to CSS as
//! `rgba(r,g,b,alpha)` with the alpha channel expressed as a 0-1 fraction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque black, the default stroke color of new figures.
    pub const BLACK: Color = Color::new(0, 0, 0, 255);

    /// Fully transparent, the color of a freshly created group.
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    /// Outline and handle color of a selected figure.
    pub const SELECTION: Color = Color::new(28, 116, 232, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Alpha as a fraction between 0 and 1.
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// CSS `rgba(...)` string.
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.alpha())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
