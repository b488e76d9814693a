//! Resize handles
//!
//! Every figure exposes eight handles on the corners and edge midpoints of
//! its raw bounding box. Dragging a handle moves that edge or corner and
//! keeps the opposite one fixed.

use figurekit_core::{BoundingBox, Color, PaintSurface, Point, Size, HANDLE_HALF_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Figure;

/// Compass position of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinal {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Which side of the box a handle sits on along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Left or top edge: dragging moves the origin.
    Near,
    /// Handle does not act on this axis.
    Middle,
    /// Right or bottom edge: dragging changes only the size.
    Far,
}

impl Cardinal {
    /// Handle order, clockwise from north.
    pub const ALL: [Cardinal; 8] = [
        Cardinal::North,
        Cardinal::NorthEast,
        Cardinal::East,
        Cardinal::SouthEast,
        Cardinal::South,
        Cardinal::SouthWest,
        Cardinal::West,
        Cardinal::NorthWest,
    ];

    fn horizontal(&self) -> Side {
        match self {
            Cardinal::West | Cardinal::NorthWest | Cardinal::SouthWest => Side::Near,
            Cardinal::East | Cardinal::NorthEast | Cardinal::SouthEast => Side::Far,
            Cardinal::North | Cardinal::South => Side::Middle,
        }
    }

    fn vertical(&self) -> Side {
        match self {
            Cardinal::North | Cardinal::NorthWest | Cardinal::NorthEast => Side::Near,
            Cardinal::South | Cardinal::SouthWest | Cardinal::SouthEast => Side::Far,
            Cardinal::East | Cardinal::West => Side::Middle,
        }
    }

    /// CSS cursor shown while hovering the handle.
    pub fn cursor(&self) -> &'static str {
        match self {
            Cardinal::North | Cardinal::South => "s-resize",
            Cardinal::East | Cardinal::West => "w-resize",
            Cardinal::NorthWest => "nw-resize",
            Cardinal::SouthEast => "sw-resize",
            Cardinal::SouthWest => "se-resize",
            Cardinal::NorthEast => "ne-resize",
        }
    }

    /// Handle centre on the raw box.
    pub fn position(&self, bbox: &BoundingBox) -> Point {
        let x = match self.horizontal() {
            Side::Near => bbox.x(),
            Side::Middle => bbox.x() + bbox.w() / 2.0,
            Side::Far => bbox.x() + bbox.w(),
        };
        let y = match self.vertical() {
            Side::Near => bbox.y(),
            Side::Middle => bbox.y() + bbox.h() / 2.0,
            Side::Far => bbox.y() + bbox.h(),
        };
        Point::new(x, y)
    }

    /// Splits a pointer delta into the `(move, resize)` pair applied to the
    /// figure.
    pub fn drag_delta(&self, dx: f64, dy: f64) -> (Point, Size) {
        let (mx, rw) = axis_drag(self.horizontal(), dx);
        let (my, rh) = axis_drag(self.vertical(), dy);
        (Point::new(mx, my), Size::new(rw, rh))
    }

    /// Pointer delta that changes the size by `(dw, dh)` through this handle.
    ///
    /// Components the handle does not act on come back as zero.
    pub fn size_delta_to_drag(&self, dw: f64, dh: f64) -> (f64, f64) {
        (axis_inverse(self.horizontal(), dw), axis_inverse(self.vertical(), dh))
    }
}

fn axis_drag(side: Side, delta: f64) -> (f64, f64) {
    match side {
        Side::Near => (delta, -delta),
        Side::Middle => (0.0, 0.0),
        Side::Far => (0.0, delta),
    }
}

fn axis_inverse(side: Side, size_delta: f64) -> f64 {
    match side {
        Side::Near => -size_delta,
        Side::Middle => 0.0,
        Side::Far => size_delta,
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cardinal::North => "N",
            Cardinal::NorthEast => "NE",
            Cardinal::East => "E",
            Cardinal::SouthEast => "SE",
            Cardinal::South => "S",
            Cardinal::SouthWest => "SW",
            Cardinal::West => "W",
            Cardinal::NorthWest => "NW",
        };
        f.write_str(name)
    }
}

/// A handle of one figure, positioned for the figure's current box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub cardinal: Cardinal,
    pub position: Point,
}

impl ControlPoint {
    pub fn new(cardinal: Cardinal, bbox: &BoundingBox) -> Self {
        Self {
            cardinal,
            position: cardinal.position(bbox),
        }
    }

    /// The eight handles of `bbox`, in [`Cardinal::ALL`] order.
    pub fn all(bbox: &BoundingBox) -> [ControlPoint; 8] {
        Cardinal::ALL.map(|cardinal| ControlPoint::new(cardinal, bbox))
    }

    /// True when `point` lies in the square hit zone around the handle.
    pub fn contains(&self, point: Point) -> bool {
        (point.x - self.position.x).abs() <= HANDLE_HALF_SIZE
            && (point.y - self.position.y).abs() <= HANDLE_HALF_SIZE
    }

    pub fn cursor(&self) -> &'static str {
        self.cardinal.cursor()
    }

    /// Applies a pointer drag of `(dx, dy)` to `figure` through this handle.
    pub fn drag(&self, figure: &mut Figure, dx: f64, dy: f64) {
        let (offset, growth) = self.cardinal.drag_delta(dx, dy);
        if offset != Point::default() {
            figure.move_by(offset.x, offset.y);
        }
        figure.resize(growth.w, growth.h);
    }

    pub fn paint(&self, surface: &mut dyn PaintSurface) {
        surface.set_fill_style(&Color::SELECTION);
        surface.fill_rect(
            self.position.x - HANDLE_HALF_SIZE,
            self.position.y - HANDLE_HALF_SIZE,
            2.0 * HANDLE_HALF_SIZE,
            2.0 * HANDLE_HALF_SIZE,
        );
    }
}
