use figurekit_core::{BoundingBox, Color, PaintOp, Point, RecordingSurface};
use figurekit_designer::{DesignText, Figure, ShapeType, Stroke};

fn rect(x: f64, y: f64, w: f64, h: f64) -> Figure {
    Figure::rectangle(BoundingBox::new(x, y, w, h), Color::BLACK, Stroke::default(), false)
}

#[test]
fn test_tags_per_shape() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let stroke = Stroke::default();
    let figures = [
        Figure::line(bbox, Color::BLACK, stroke.clone()),
        Figure::rectangle(bbox, Color::BLACK, stroke.clone(), false),
        Figure::ellipse(bbox, Color::BLACK, stroke.clone(), true),
        Figure::hexagon(bbox, Color::BLACK, stroke, false),
        Figure::text(bbox, Color::BLACK, DesignText::new("abc")),
        Figure::group(),
    ];

    let tags: Vec<&str> = figures.iter().map(Figure::tag).collect();
    assert_eq!(tags, ["Line", "Rectangle", "Ellipse", "Hexagon", "Text", "Group"]);
    assert_eq!(figures[5].shape_type(), ShapeType::Group);
    assert!(figures[5].is_group());
    assert_eq!(figures[5].color(), Color::TRANSPARENT);
}

#[test]
fn test_unselected_figure_paints_only_itself() {
    let mut surface = RecordingSurface::new();
    rect(10.0, 10.0, 20.0, 20.0).paint(&mut surface);

    assert_eq!(surface.count(|op| matches!(op, PaintOp::StrokeRect(..))), 1);
    assert_eq!(surface.count(|op| matches!(op, PaintOp::FillRect(..))), 0);
}

#[test]
fn test_selected_figure_paints_outline_and_handles() {
    let mut figure = rect(10.0, 10.0, 20.0, 20.0);
    figure.set_selected(true);

    let mut surface = RecordingSurface::new();
    figure.paint(&mut surface);

    assert!(surface.ops().contains(&PaintOp::Rect(10.0, 10.0, 20.0, 20.0)));
    assert_eq!(surface.count(|op| matches!(op, PaintOp::FillRect(..))), 8);
    assert!(surface.ops().contains(&PaintOp::FillRect(26.0, 26.0, 8.0, 8.0)));
}

#[test]
fn test_group_paints_children_in_order() {
    let mut group = Figure::group();
    group.add_child(rect(0.0, 0.0, 5.0, 5.0));
    group.add_child(rect(10.0, 10.0, 5.0, 5.0));

    let mut surface = RecordingSurface::new();
    group.paint(&mut surface);

    let rects: Vec<&PaintOp> = surface
        .ops()
        .iter()
        .filter(|op| matches!(op, PaintOp::StrokeRect(..)))
        .collect();
    assert_eq!(
        rects,
        [
            &PaintOp::StrokeRect(0.0, 0.0, 5.0, 5.0),
            &PaintOp::StrokeRect(10.0, 10.0, 5.0, 5.0),
        ]
    );
}

#[test]
fn test_select_sets_flag() {
    let mut figure = rect(10.0, 10.0, 20.0, 20.0);
    assert!(figure.select(Point::new(15.0, 15.0), None));
    assert!(figure.is_selected());
    assert!(!figure.select(Point::new(100.0, 100.0), None));
    assert!(!figure.is_selected());

    assert!(figure.select(Point::new(0.0, 0.0), Some(Point::new(40.0, 40.0))));
    assert!(!figure.select(Point::new(0.0, 0.0), Some(Point::new(20.0, 20.0))));
}

#[test]
fn test_resize_propagates_to_children() {
    let mut group = Figure::group();
    group.add_child(rect(0.0, 0.0, 10.0, 10.0));
    group.add_child(rect(20.0, 20.0, 10.0, 10.0));

    group.resize(5.0, -2.0);

    assert_eq!(group.size().w, 35.0);
    assert_eq!(group.size().h, 28.0);
    for child in group.children() {
        assert_eq!(child.size().w, 15.0);
        assert_eq!(child.size().h, 8.0);
    }
}

#[test]
fn test_set_color_is_deep() {
    let mut inner = Figure::group();
    inner.add_child(rect(0.0, 0.0, 1.0, 1.0));
    let mut outer = Figure::group();
    outer.add_child(inner);
    outer.add_child(rect(2.0, 2.0, 1.0, 1.0));

    let blue = Color::rgb(0, 0, 255);
    outer.set_color(blue);

    assert_eq!(outer.colors(), vec![blue; 4]);
    assert_eq!(outer.children()[0].children()[0].color(), blue);
}

#[test]
fn test_negative_box_still_hit() {
    let figure = rect(100.0, 100.0, -50.0, -50.0);
    assert!(figure.contains(Point::new(75.0, 75.0)));
    assert!(!figure.contains(Point::new(125.0, 125.0)));
}
