//! Pointer tools
//!
//! A tool turns a pointer gesture (down, moves, up) into drawing calls.
//! Hosts forward pointer events in canvas coordinates and repaint on the
//! drawing's events; tools keep only the state of the gesture in progress.

use figurekit_core::{BoundingBox, Color, FigureId, PaintSurface, Point, Size};

use crate::drawing::Drawing;
use crate::model::{Cardinal, DesignText, Figure, ShapeType, Stroke};

/// Cursor shown when no figure or handle is under the pointer.
pub const DEFAULT_CURSOR: &str = "default";

/// Cursor shown over a selected figure.
pub const MOVE_CURSOR: &str = "move";

pub trait Tool {
    fn name(&self) -> &'static str;

    fn pointer_down(&mut self, drawing: &mut Drawing, point: Point);

    fn pointer_move(&mut self, drawing: &mut Drawing, point: Point);

    fn pointer_up(&mut self, drawing: &mut Drawing, point: Point);

    /// Cursor for a hovering (button released) pointer.
    fn cursor(&self, _drawing: &Drawing, _point: Point) -> &'static str {
        DEFAULT_CURSOR
    }

    /// Paints the in-progress gesture on a feedback layer.
    fn paint_feedback(&self, _surface: &mut dyn PaintSurface) {}
}

/// Style applied to figures created by a [`CreationTool`].
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    pub color: Color,
    pub stroke: Stroke,
    pub fill: bool,
    pub font_size: String,
    pub font_family: String,
}

impl Default for FigureStyle {
    fn default() -> Self {
        let text = DesignText::default();
        Self {
            color: Color::BLACK,
            stroke: Stroke::new(5.0, vec![5.0, 15.0]),
            fill: false,
            font_size: text.font_size,
            font_family: text.font_family,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragTarget {
    Handle {
        id: FigureId,
        handle: Cardinal,
        old_size: Size,
    },
    Figure {
        id: FigureId,
        old_position: Point,
    },
    Region,
}

/// Selects, moves and resizes figures.
///
/// A press on a handle of a selected figure resizes it, a press inside a
/// selected figure moves it, anything else starts a selection. A click
/// selects the topmost figure under the pointer; a drag selects every
/// figure fully inside the dragged rectangle.
#[derive(Debug, Clone, Default)]
pub struct SelectionTool {
    menu_bar_height: f64,
    origin: Option<Point>,
    last: Option<Point>,
    target: Option<DragTarget>,
}

impl SelectionTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presses at or above this y coordinate are ignored.
    pub fn with_menu_bar_height(mut self, height: f64) -> Self {
        self.menu_bar_height = height;
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    fn reset(&mut self) {
        self.origin = None;
        self.last = None;
        self.target = None;
    }
}

impl Tool for SelectionTool {
    fn name(&self) -> &'static str {
        "SelectionTool"
    }

    fn pointer_down(&mut self, drawing: &mut Drawing, point: Point) {
        if point.y <= self.menu_bar_height {
            return;
        }

        let target = if let Some((id, handle)) = drawing.control_point_at(point) {
            let old_size = drawing.figure(id).map(Figure::size).unwrap_or_default();
            DragTarget::Handle {
                id,
                handle: handle.cardinal,
                old_size,
            }
        } else if let Some(id) = drawing.selected_figure_at(point) {
            let old_position = drawing.figure(id).map(Figure::position).unwrap_or_default();
            DragTarget::Figure { id, old_position }
        } else {
            drawing.deselect_all();
            DragTarget::Region
        };

        self.origin = Some(point);
        self.last = Some(point);
        self.target = Some(target);
    }

    fn pointer_move(&mut self, drawing: &mut Drawing, point: Point) {
        let (Some(last), Some(target)) = (self.last, self.target) else {
            return;
        };
        let (dx, dy) = (point.x - last.x, point.y - last.y);

        match target {
            DragTarget::Handle { id, handle, .. } => {
                drawing.resize_figure(id, handle, dx, dy);
            }
            DragTarget::Figure { id, .. } => {
                drawing.move_figure(id, dx, dy);
            }
            DragTarget::Region => {}
        }
        self.last = Some(point);
    }

    fn pointer_up(&mut self, drawing: &mut Drawing, point: Point) {
        let (Some(origin), Some(target)) = (self.origin, self.target) else {
            return;
        };

        match target {
            DragTarget::Handle {
                id,
                handle,
                old_size,
            } => {
                drawing.end_figure_resize(id, handle, old_size);
            }
            DragTarget::Figure { id, old_position } => {
                drawing.end_figure_move(id, old_position);
            }
            DragTarget::Region if origin == point => {
                drawing.select(point, None);
            }
            DragTarget::Region => {
                drawing.select(origin, Some(point));
            }
        }
        self.reset();
    }

    fn cursor(&self, drawing: &Drawing, point: Point) -> &'static str {
        if let Some((_, handle)) = drawing.control_point_at(point) {
            return handle.cursor();
        }
        if drawing.selected_figure_at(point).is_some() {
            MOVE_CURSOR
        } else {
            DEFAULT_CURSOR
        }
    }

    fn paint_feedback(&self, surface: &mut dyn PaintSurface) {
        if let (Some(origin), Some(last), Some(DragTarget::Region)) =
            (self.origin, self.last, self.target)
        {
            BoundingBox::from_corners(origin, last).paint(surface);
        }
    }
}

/// Creates one kind of figure from a drag.
///
/// The figure spans the rectangle from press to release. A release at the
/// press point creates nothing.
#[derive(Debug, Clone)]
pub struct CreationTool {
    kind: ShapeType,
    style: FigureStyle,
    text: String,
    menu_bar_height: f64,
    down: Option<Point>,
    current: Option<Point>,
}

impl CreationTool {
    pub fn new(kind: ShapeType, style: FigureStyle) -> Self {
        Self {
            kind,
            style,
            text: String::new(),
            menu_bar_height: 0.0,
            down: None,
            current: None,
        }
    }

    /// Tool that places `text`.
    pub fn text(text: impl Into<String>, style: FigureStyle) -> Self {
        let mut tool = Self::new(ShapeType::Text, style);
        tool.text = text.into();
        tool
    }

    pub fn with_menu_bar_height(mut self, height: f64) -> Self {
        self.menu_bar_height = height;
        self
    }

    pub fn kind(&self) -> ShapeType {
        self.kind
    }

    /// Builds the figure for `bbox`. Groups are never created by drawing.
    pub fn create_figure(&self, bbox: BoundingBox) -> Option<Figure> {
        let FigureStyle {
            color,
            stroke,
            fill,
            font_size,
            font_family,
        } = self.style.clone();

        let figure = match self.kind {
            ShapeType::Line => Figure::line(bbox, color, stroke),
            ShapeType::Rectangle => Figure::rectangle(bbox, color, stroke, fill),
            ShapeType::Ellipse => Figure::ellipse(bbox, color, stroke, fill),
            ShapeType::Hexagon => Figure::hexagon(bbox, color, stroke, fill),
            ShapeType::Text => Figure::text(
                bbox,
                color,
                DesignText::new(self.text.clone()).with_font(font_size, font_family),
            ),
            ShapeType::Group => return None,
        };
        Some(figure)
    }
}

impl Tool for CreationTool {
    fn name(&self) -> &'static str {
        match self.kind {
            ShapeType::Line => "LineCreationTool",
            ShapeType::Rectangle => "RectangleCreationTool",
            ShapeType::Ellipse => "EllipseCreationTool",
            ShapeType::Hexagon => "HexagonCreationTool",
            ShapeType::Text => "TextCreationTool",
            ShapeType::Group => "GroupCreationTool",
        }
    }

    fn pointer_down(&mut self, _drawing: &mut Drawing, point: Point) {
        if point.y <= self.menu_bar_height {
            return;
        }
        self.down = Some(point);
        self.current = Some(point);
    }

    fn pointer_move(&mut self, _drawing: &mut Drawing, point: Point) {
        if self.down.is_some() {
            self.current = Some(point);
        }
    }

    fn pointer_up(&mut self, drawing: &mut Drawing, point: Point) {
        self.current = None;
        let Some(down) = self.down.take() else {
            return;
        };
        if down == point {
            return;
        }

        match self.create_figure(BoundingBox::from_corners(down, point)) {
            Some(figure) => {
                drawing.add_figure(figure, true);
            }
            None => tracing::error!("{} cannot create figures", self.name()),
        }
    }

    fn paint_feedback(&self, surface: &mut dyn PaintSurface) {
        if let (Some(down), Some(current)) = (self.down, self.current) {
            if let Some(preview) = self.create_figure(BoundingBox::from_corners(down, current)) {
                preview.paint(surface);
            }
        }
    }
}
