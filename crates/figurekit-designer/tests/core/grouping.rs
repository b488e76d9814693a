use std::sync::{Arc, Mutex};

use figurekit_core::{BoundingBox, Color, DrawingEvent, FigureId, Point, SharedListener};
use figurekit_designer::{Cardinal, Drawing, Figure, Stroke};

fn rect(x: f64, y: f64, w: f64, h: f64) -> Figure {
    Figure::rectangle(BoundingBox::new(x, y, w, h), Color::BLACK, Stroke::default(), false)
}

fn ids(drawing: &Drawing) -> Vec<FigureId> {
    drawing.figures().iter().map(Figure::id).collect()
}

fn select_region(drawing: &mut Drawing, x0: f64, y0: f64, x1: f64, y1: f64) {
    drawing.deselect_all();
    drawing.select(Point::new(x0, y0), Some(Point::new(x1, y1)));
}

#[test]
fn test_group_bounding_box_and_undo() {
    let mut drawing = Drawing::new();
    let a = drawing.add_figure(rect(10.0, 10.0, 50.0, 50.0), false);
    let b = drawing.add_figure(rect(100.0, 100.0, 40.0, 40.0), false);
    drawing.select_all();

    let group = drawing.group().unwrap();

    assert_eq!(ids(&drawing), vec![group]);
    let figure = drawing.figure(group).unwrap();
    assert_eq!(*figure.bbox(), BoundingBox::new(10.0, 10.0, 130.0, 130.0));
    assert!(figure.is_selected());
    assert_eq!(figure.color(), Color::TRANSPARENT);
    let children: Vec<FigureId> = figure.children().iter().map(Figure::id).collect();
    assert_eq!(children, vec![a, b]);
    assert!(figure.children().iter().all(|c| !c.is_selected()));
    assert_eq!(drawing.undo_label(), "GROUP");

    drawing.undo();
    assert_eq!(ids(&drawing), vec![a, b]);
    assert_eq!(drawing.num_selected(), 2);
    assert_eq!(
        *drawing.figure(a).unwrap().bbox(),
        BoundingBox::new(10.0, 10.0, 50.0, 50.0)
    );

    drawing.redo();
    assert_eq!(ids(&drawing), vec![group]);
    assert_eq!(
        *drawing.figure(group).unwrap().bbox(),
        BoundingBox::new(10.0, 10.0, 130.0, 130.0)
    );
}

#[test]
fn test_group_event_order() {
    let mut drawing = Drawing::new();
    drawing.add_figure(rect(0.0, 0.0, 10.0, 10.0), false);
    drawing.select_all();

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let listener: SharedListener = Arc::new(move |event: &DrawingEvent| {
        sink.lock().unwrap().push(*event);
    });
    drawing.add_listener(listener);

    drawing.group();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            DrawingEvent::FigureRemoved,
            DrawingEvent::FigureAdded,
            DrawingEvent::FigureSelected,
            DrawingEvent::Group,
            DrawingEvent::UndoRedo,
        ]
    );
}

#[test]
fn test_group_without_selection_is_a_no_op() {
    let mut drawing = Drawing::new();
    drawing.add_figure(rect(0.0, 0.0, 10.0, 10.0), false);

    assert!(drawing.group().is_none());
    assert_eq!(drawing.len(), 1);
    assert!(!drawing.can_undo());
}

#[test]
fn test_group_undo_restores_interleaved_order() {
    let mut drawing = Drawing::new();
    let a = drawing.add_figure(rect(0.0, 0.0, 10.0, 10.0), false);
    let b = drawing.add_figure(rect(100.0, 100.0, 10.0, 10.0), false);
    let c = drawing.add_figure(rect(20.0, 0.0, 10.0, 10.0), false);

    select_region(&mut drawing, -5.0, -5.0, 35.0, 15.0);
    assert_eq!(drawing.selected_ids(), vec![a, c]);

    let group = drawing.group().unwrap();
    assert_eq!(ids(&drawing), vec![b, group]);

    drawing.undo();
    assert_eq!(ids(&drawing), vec![a, b, c]);
}

#[test]
fn test_grouped_figures_move_together() {
    let mut drawing = Drawing::new();
    drawing.add_figure(rect(10.0, 10.0, 50.0, 50.0), false);
    drawing.add_figure(rect(100.0, 100.0, 40.0, 40.0), false);
    drawing.select_all();
    let group = drawing.group().unwrap();

    drawing.move_figure(group, 5.0, 5.0);

    let figure = drawing.figure(group).unwrap();
    assert_eq!(figure.position(), Point::new(15.0, 15.0));
    assert_eq!(figure.children()[0].position(), Point::new(15.0, 15.0));
    assert_eq!(figure.children()[1].position(), Point::new(105.0, 105.0));
}

#[test]
fn test_ungroup_and_undo() {
    let mut drawing = Drawing::new();
    let a = drawing.add_figure(rect(10.0, 10.0, 50.0, 50.0), false);
    let b = drawing.add_figure(rect(100.0, 100.0, 40.0, 40.0), false);
    let c = drawing.add_figure(rect(300.0, 300.0, 10.0, 10.0), false);
    select_region(&mut drawing, 0.0, 0.0, 150.0, 150.0);
    let group = drawing.group().unwrap();
    assert_eq!(ids(&drawing), vec![c, group]);

    drawing.move_figure(c, 1.0, 0.0);
    let released = drawing.ungroup();

    assert_eq!(released, vec![a, b]);
    assert_eq!(ids(&drawing), vec![c, a, b]);
    assert_eq!(drawing.selected_ids(), vec![a, b]);
    assert_eq!(drawing.undo_label(), "UNGROUP");

    drawing.undo();
    assert_eq!(ids(&drawing), vec![c, group]);
    assert_eq!(drawing.figure(group).unwrap().children().len(), 2);

    drawing.redo();
    assert_eq!(ids(&drawing), vec![c, a, b]);
}

#[test]
fn test_ungroup_several_groups_in_place() {
    let mut drawing = Drawing::new();
    let a = drawing.add_figure(rect(0.0, 0.0, 10.0, 10.0), false);
    let b = drawing.add_figure(rect(20.0, 0.0, 10.0, 10.0), false);
    let c = drawing.add_figure(rect(100.0, 0.0, 10.0, 10.0), false);
    let d = drawing.add_figure(rect(200.0, 0.0, 10.0, 10.0), false);
    let e = drawing.add_figure(rect(220.0, 0.0, 10.0, 10.0), false);

    select_region(&mut drawing, -5.0, -5.0, 35.0, 15.0);
    let g1 = drawing.group().unwrap();
    select_region(&mut drawing, 195.0, -5.0, 235.0, 15.0);
    let g2 = drawing.group().unwrap();
    assert_eq!(ids(&drawing), vec![c, g1, g2]);

    drawing.select_all();
    let released = drawing.ungroup();

    assert_eq!(released.len(), 4);
    assert_eq!(ids(&drawing), vec![c, a, b, d, e]);

    drawing.undo();
    assert_eq!(ids(&drawing), vec![c, g1, g2]);

    drawing.redo();
    assert_eq!(ids(&drawing), vec![c, a, b, d, e]);
}

#[test]
fn test_ungroup_ignores_plain_figures() {
    let mut drawing = Drawing::new();
    drawing.add_figure(rect(0.0, 0.0, 10.0, 10.0), false);
    drawing.select_all();

    assert!(drawing.ungroup().is_empty());
    assert!(!drawing.can_undo());
}

#[test]
fn test_nested_groups() {
    let mut drawing = Drawing::new();
    drawing.add_figure(rect(0.0, 0.0, 10.0, 10.0), false);
    drawing.add_figure(rect(20.0, 20.0, 10.0, 10.0), false);
    drawing.select_all();
    let inner = drawing.group().unwrap();

    drawing.add_figure(rect(50.0, 50.0, 10.0, 10.0), false);
    drawing.select_all();
    let outer = drawing.group().unwrap();

    let figure = drawing.figure(outer).unwrap();
    assert_eq!(*figure.bbox(), BoundingBox::new(0.0, 0.0, 60.0, 60.0));
    assert_eq!(figure.children()[0].id(), inner);
    assert_eq!(figure.subtree_len(), 5);
}

#[test]
fn test_ungroup_undo_keeps_flipped_group_box() {
    let mut drawing = Drawing::new();
    let a = drawing.add_figure(rect(0.0, 0.0, 16.0, 12.0), false);
    let b = drawing.add_figure(rect(10.0, 8.0, 16.0, 12.0), false);
    drawing.select_all();
    let group = drawing.group().unwrap();
    let grouped = drawing.figure(group).unwrap().size();

    // Dragging the south handle past the north edge flips the group.
    drawing.resize_figure(group, Cardinal::South, 0.0, -30.0);
    assert!(drawing.end_figure_resize(group, Cardinal::South, grouped));
    let flipped = *drawing.figure(group).unwrap().bbox();
    assert!(flipped.size.h < 0.0);

    drawing.select_all();
    drawing.ungroup();

    drawing.undo();
    assert_eq!(*drawing.figure(group).unwrap().bbox(), flipped);
    drawing.undo();
    assert_eq!(
        *drawing.figure(group).unwrap().bbox(),
        BoundingBox::new(0.0, 0.0, 26.0, 20.0)
    );
    drawing.undo();
    assert_eq!(ids(&drawing), vec![a, b]);
    assert_eq!(
        *drawing.figure(a).unwrap().bbox(),
        BoundingBox::new(0.0, 0.0, 16.0, 12.0)
    );
    assert_eq!(
        *drawing.figure(b).unwrap().bbox(),
        BoundingBox::new(10.0, 8.0, 16.0, 12.0)
    );

    drawing.redo();
    drawing.redo();
    assert_eq!(*drawing.figure(group).unwrap().bbox(), flipped);
}
