//! The figure record shared by every shape.

use figurekit_core::{BoundingBox, Color, FigureId, PaintSurface, Point, Size};

use super::{
    ControlPoint, DesignEllipse, DesignGroup, DesignHexagon, DesignLine, DesignRectangle,
    DesignText, FigureShape, Shape, ShapeType, Stroke,
};

/// A drawable figure.
///
/// A figure owns its children; a group is simply a figure whose shape is
/// [`Shape::Group`]. Geometric edits (move, resize, color) propagate to every
/// descendant so a group behaves as one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    id: FigureId,
    bbox: BoundingBox,
    color: Color,
    selected: bool,
    children: Vec<Figure>,
    shape: Shape,
}

impl Figure {
    pub fn new(shape: Shape, bbox: BoundingBox, color: Color) -> Self {
        Self {
            id: FigureId::new(),
            bbox,
            color,
            selected: false,
            children: Vec::new(),
            shape,
        }
    }

    pub fn line(bbox: BoundingBox, color: Color, stroke: Stroke) -> Self {
        Self::new(Shape::Line(DesignLine::new(stroke)), bbox, color)
    }

    pub fn rectangle(bbox: BoundingBox, color: Color, stroke: Stroke, fill: bool) -> Self {
        Self::new(
            Shape::Rectangle(DesignRectangle::new(stroke, fill)),
            bbox,
            color,
        )
    }

    pub fn ellipse(bbox: BoundingBox, color: Color, stroke: Stroke, fill: bool) -> Self {
        Self::new(Shape::Ellipse(DesignEllipse::new(stroke, fill)), bbox, color)
    }

    pub fn hexagon(bbox: BoundingBox, color: Color, stroke: Stroke, fill: bool) -> Self {
        Self::new(Shape::Hexagon(DesignHexagon::new(stroke, fill)), bbox, color)
    }

    pub fn text(bbox: BoundingBox, color: Color, text: DesignText) -> Self {
        Self::new(Shape::Text(text), bbox, color)
    }

    /// Empty transparent group.
    pub fn group() -> Self {
        Self::new(
            Shape::Group(DesignGroup),
            BoundingBox::default(),
            Color::TRANSPARENT,
        )
    }

    pub fn id(&self) -> FigureId {
        self.id
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    pub fn tag(&self) -> &'static str {
        self.shape.tag()
    }

    pub fn is_group(&self) -> bool {
        matches!(self.shape, Shape::Group(_))
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Raw position of the box.
    pub fn position(&self) -> Point {
        self.bbox.position
    }

    /// Raw (signed) size of the box.
    pub fn size(&self) -> Size {
        self.bbox.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn children(&self) -> &[Figure] {
        &self.children
    }

    /// Paints the shape, then the children, then the selection overlay.
    pub fn paint(&self, surface: &mut dyn PaintSurface) {
        self.shape.draw(&self.bbox, &self.color, surface);

        for child in &self.children {
            child.paint(surface);
        }

        if self.selected {
            self.bbox.paint(surface);
            for point in self.control_points() {
                point.paint(surface);
            }
        }
    }

    /// Point selection when `up` is `None`, region selection otherwise.
    /// Stores and returns the result.
    pub fn select(&mut self, down: Point, up: Option<Point>) -> bool {
        self.selected = self.bbox.select(down, up);
        self.selected
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bbox.contains(point)
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.bbox.move_by(dx, dy);
        for child in &mut self.children {
            child.move_by(dx, dy);
        }
    }

    pub fn resize(&mut self, dw: f64, dh: f64) {
        self.bbox.resize(dw, dh);
        for child in &mut self.children {
            child.resize(dw, dh);
        }
    }

    /// Sets the color of this figure and every descendant.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        for child in &mut self.children {
            child.set_color(color);
        }
    }

    /// Colors of this figure and its descendants, in pre-order.
    pub fn colors(&self) -> Vec<Color> {
        let mut colors = Vec::new();
        self.collect_colors(&mut colors);
        colors
    }

    fn collect_colors(&self, colors: &mut Vec<Color>) {
        colors.push(self.color);
        for child in &self.children {
            child.collect_colors(colors);
        }
    }

    /// Restores a pre-order snapshot taken by [`Figure::colors`].
    ///
    /// Returns the number of entries consumed. A short snapshot leaves the
    /// remaining descendants untouched.
    pub fn restore_colors(&mut self, colors: &[Color]) -> usize {
        let Some(first) = colors.first() else {
            return 0;
        };
        self.color = *first;

        let mut consumed = 1;
        for child in &mut self.children {
            consumed += child.restore_colors(&colors[consumed..]);
        }
        consumed
    }

    /// Raw boxes of this figure and its descendants, in pre-order.
    pub fn boxes(&self) -> Vec<BoundingBox> {
        let mut boxes = Vec::new();
        self.collect_boxes(&mut boxes);
        boxes
    }

    fn collect_boxes(&self, boxes: &mut Vec<BoundingBox>) {
        boxes.push(self.bbox);
        for child in &self.children {
            child.collect_boxes(boxes);
        }
    }

    /// Restores a pre-order snapshot taken by [`Figure::boxes`].
    ///
    /// Returns the number of entries consumed.
    pub fn restore_boxes(&mut self, boxes: &[BoundingBox]) -> usize {
        let Some(first) = boxes.first() else {
            return 0;
        };
        self.bbox = *first;

        let mut consumed = 1;
        for child in &mut self.children {
            consumed += child.restore_boxes(&boxes[consumed..]);
        }
        consumed
    }

    /// Overrides this figure's own box; children are not touched.
    pub(crate) fn set_bbox(&mut self, bbox: BoundingBox) {
        self.bbox = bbox;
    }

    /// Appends `child` and grows the box to cover every child.
    pub fn add_child(&mut self, mut child: Figure) {
        child.selected = false;
        self.children.push(child);
        self.recompute_bbox();
    }

    /// Detaches every child and collapses the box.
    pub fn flush_children(&mut self) -> Vec<Figure> {
        self.bbox.reset();
        std::mem::take(&mut self.children)
    }

    fn recompute_bbox(&mut self) {
        let mut boxes = self.children.iter().map(|child| child.bbox);
        if let Some(first) = boxes.next() {
            self.bbox = boxes.fold(first.normalized(), |acc, bbox| acc.union(&bbox));
        }
    }

    /// Number of figures in this subtree, this one included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Figure::subtree_len).sum::<usize>()
    }

    pub fn control_points(&self) -> [ControlPoint; 8] {
        ControlPoint::all(&self.bbox)
    }

    /// First handle whose hit zone contains `point`.
    pub fn control_point_at(&self, point: Point) -> Option<ControlPoint> {
        self.control_points()
            .into_iter()
            .find(|handle| handle.contains(point))
    }
}
