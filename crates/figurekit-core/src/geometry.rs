//! Geometry primitives
//!
//! Points, sizes and the signed bounding box every figure owns. A box's size
//! may be negative while a drag is still in progress; every geometric query
//! goes through the normalized form (`xr`, `yr`, `wr`, `hr`).

use crate::color::Color;
use crate::paint::PaintSurface;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half the side of a control-point handle. Also inflates the point hit test
/// of a bounding box so clicks just outside an edge still select it.
pub const HANDLE_HALF_SIZE: f64 = 4.0;

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A signed width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Position plus signed size.
///
/// The raw form keeps whatever direction the user dragged in. The normalized
/// accessors always describe the same rectangle with its origin at the
/// top-left corner and a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub position: Point,
    pub size: Size,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            position: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// Builds the box spanned by a drag from `down` to `up`.
    pub fn from_corners(down: Point, up: Point) -> Self {
        Self::new(down.x, down.y, up.x - down.x, up.y - down.y)
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn w(&self) -> f64 {
        self.size.w
    }

    pub fn h(&self) -> f64 {
        self.size.h
    }

    /// Normalized left edge.
    pub fn xr(&self) -> f64 {
        if self.size.w > 0.0 {
            self.position.x
        } else {
            self.position.x + self.size.w
        }
    }

    /// Normalized top edge.
    pub fn yr(&self) -> f64 {
        if self.size.h > 0.0 {
            self.position.y
        } else {
            self.position.y + self.size.h
        }
    }

    /// Normalized width.
    pub fn wr(&self) -> f64 {
        self.size.w.abs()
    }

    /// Normalized height.
    pub fn hr(&self) -> f64 {
        self.size.h.abs()
    }

    pub fn right(&self) -> f64 {
        self.xr() + self.wr()
    }

    pub fn bottom(&self) -> f64 {
        self.yr() + self.hr()
    }

    /// Returns the normalized copy of this box.
    pub fn normalized(&self) -> Self {
        Self::new(self.xr(), self.yr(), self.wr(), self.hr())
    }

    /// Center of the normalized box.
    pub fn center(&self) -> Point {
        Point::new(self.xr() + self.wr() / 2.0, self.yr() + self.hr() / 2.0)
    }

    /// True when the box encloses no area.
    pub fn is_empty(&self) -> bool {
        self.size.w == 0.0 || self.size.h == 0.0
    }

    /// Point hit test against the normalized box inflated by
    /// [`HANDLE_HALF_SIZE`] on every side.
    pub fn contains(&self, point: Point) -> bool {
        let left = self.xr() - HANDLE_HALF_SIZE;
        let right = self.right() + HANDLE_HALF_SIZE;
        let top = self.yr() - HANDLE_HALF_SIZE;
        let bottom = self.bottom() + HANDLE_HALF_SIZE;

        left <= point.x && point.x <= right && top <= point.y && point.y <= bottom
    }

    /// Region test: true when this box lies inside the rectangle spanned by
    /// `down` and `up`, whichever direction the drag went.
    pub fn contained_in(&self, down: Point, up: Point) -> bool {
        let left = down.x.min(up.x);
        let right = down.x.max(up.x);
        let top = down.y.min(up.y);
        let bottom = down.y.max(up.y);

        self.xr() >= left && self.right() <= right && self.yr() >= top && self.bottom() <= bottom
    }

    /// Point selection when `up` is `None`, region selection otherwise.
    pub fn select(&self, down: Point, up: Option<Point>) -> bool {
        match up {
            Some(up) => self.contained_in(down, up),
            None => self.contains(down),
        }
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.position.x += dx;
        self.position.y += dy;
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.position.x = x;
        self.position.y = y;
    }

    /// Grows (or shrinks) the signed size.
    pub fn resize(&mut self, dw: f64, dh: f64) {
        self.size.w += dw;
        self.size.h += dh;
    }

    pub fn scale(&mut self, rx: f64, ry: f64) {
        self.size.w *= rx;
        self.size.h *= ry;
    }

    /// Collapses the box to a zero-size box at the origin.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Smallest normalized box covering both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let left = self.xr().min(other.xr());
        let top = self.yr().min(other.yr());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        BoundingBox::new(left, top, right - left, bottom - top)
    }

    /// Draws the selection outline.
    pub fn paint(&self, surface: &mut dyn PaintSurface) {
        surface.set_stroke_style(&Color::SELECTION);
        surface.set_line_width(1.0);
        surface.set_line_dash(&[]);
        surface.begin_path();
        surface.rect(self.position.x, self.position.y, self.size.w, self.size.h);
        surface.stroke();
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.position.x, self.position.y, self.size.w, self.size.h
        )
    }
}
