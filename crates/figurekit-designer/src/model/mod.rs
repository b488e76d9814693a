//! Figure model
//!
//! A [`Figure`] is the common record every shape shares (identity, bounding
//! box, color, selection flag, children). What differs between shapes lives
//! in the [`Shape`] enum; each variant implements [`FigureShape`] for its
//! draw step, and the enum delegates to the active variant.

pub mod control_point;
pub mod ellipse;
pub mod figure;
pub mod group;
pub mod hexagon;
pub mod line;
pub mod rectangle;
pub mod stroke;
pub mod text;

pub use control_point::{Cardinal, ControlPoint};
pub use ellipse::DesignEllipse;
pub use figure::Figure;
pub use group::DesignGroup;
pub use hexagon::DesignHexagon;
pub use line::DesignLine;
pub use rectangle::DesignRectangle;
pub use stroke::Stroke;
pub use text::DesignText;

use figurekit_core::{BoundingBox, Color, PaintSurface};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Behaviour every shape variant provides.
pub trait FigureShape {
    /// Class tag used by the serialization registry.
    fn tag(&self) -> &'static str;

    /// Variant-specific draw step. Children and the selection overlay are
    /// painted by [`Figure::paint`].
    fn draw(&self, bbox: &BoundingBox, color: &Color, surface: &mut dyn PaintSurface);
}

/// Shape kinds, used by creation tools and the registry bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Line,
    Rectangle,
    Ellipse,
    Hexagon,
    Text,
    Group,
}

impl ShapeType {
    pub const ALL: [ShapeType; 6] = [
        ShapeType::Line,
        ShapeType::Rectangle,
        ShapeType::Ellipse,
        ShapeType::Hexagon,
        ShapeType::Text,
        ShapeType::Group,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            ShapeType::Line => "Line",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Ellipse => "Ellipse",
            ShapeType::Hexagon => "Hexagon",
            ShapeType::Text => "Text",
            ShapeType::Group => "Group",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(DesignLine),
    Rectangle(DesignRectangle),
    Ellipse(DesignEllipse),
    Hexagon(DesignHexagon),
    Text(DesignText),
    Group(DesignGroup),
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Line(_) => ShapeType::Line,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Hexagon(_) => ShapeType::Hexagon,
            Shape::Text(_) => ShapeType::Text,
            Shape::Group(_) => ShapeType::Group,
        }
    }

    /// Stroke settings, for the variants that have them.
    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            Shape::Line(s) => Some(&s.stroke),
            Shape::Rectangle(s) => Some(&s.stroke),
            Shape::Ellipse(s) => Some(&s.stroke),
            Shape::Hexagon(s) => Some(&s.stroke),
            Shape::Text(_) | Shape::Group(_) => None,
        }
    }

    /// Fill flag of the closed variants.
    pub fn fill(&self) -> Option<bool> {
        match self {
            Shape::Rectangle(s) => Some(s.fill),
            Shape::Ellipse(s) => Some(s.fill),
            Shape::Hexagon(s) => Some(s.fill),
            _ => None,
        }
    }
}

impl FigureShape for Shape {
    fn tag(&self) -> &'static str {
        match self {
            Shape::Line(s) => s.tag(),
            Shape::Rectangle(s) => s.tag(),
            Shape::Ellipse(s) => s.tag(),
            Shape::Hexagon(s) => s.tag(),
            Shape::Text(s) => s.tag(),
            Shape::Group(s) => s.tag(),
        }
    }

    fn draw(&self, bbox: &BoundingBox, color: &Color, surface: &mut dyn PaintSurface) {
        match self {
            Shape::Line(s) => s.draw(bbox, color, surface),
            Shape::Rectangle(s) => s.draw(bbox, color, surface),
            Shape::Ellipse(s) => s.draw(bbox, color, surface),
            Shape::Hexagon(s) => s.draw(bbox, color, surface),
            Shape::Text(s) => s.draw(bbox, color, surface),
            Shape::Group(s) => s.draw(bbox, color, surface),
        }
    }
}
