use figurekit_core::{BoundingBox, Color, FigureId, Point, Size};
use figurekit_designer::{Cardinal, Drawing, Figure, Stroke, UndoHelper};
use proptest::prelude::*;

fn rect(x: f64, y: f64, w: f64, h: f64) -> Figure {
    Figure::rectangle(BoundingBox::new(x, y, w, h), Color::BLACK, Stroke::default(), false)
}

fn colored(x: f64, y: f64, color: Color) -> Figure {
    let mut figure = rect(x, y, 10.0, 10.0);
    figure.set_color(color);
    figure
}

#[test]
fn test_color_undo_restores_every_descendant() {
    let red = Color::rgb(255, 0, 0);
    let green = Color::rgb(0, 255, 0);
    let blue = Color::rgb(0, 0, 255);

    let mut drawing = Drawing::new();
    drawing.add_figure(colored(0.0, 0.0, red), false);
    drawing.add_figure(colored(20.0, 20.0, green), false);
    drawing.select_all();
    let group = drawing.group().unwrap();

    assert!(drawing.set_figure_color(group, blue, true));
    assert_eq!(drawing.figure(group).unwrap().colors(), vec![blue; 3]);
    assert_eq!(drawing.undo_label(), "FIGURE COLOR");

    drawing.undo();
    let figure = drawing.figure(group).unwrap();
    assert_eq!(figure.color(), Color::TRANSPARENT);
    assert_eq!(figure.children()[0].color(), red);
    assert_eq!(figure.children()[1].color(), green);

    drawing.redo();
    assert_eq!(drawing.figure(group).unwrap().colors(), vec![blue; 3]);
}

#[test]
fn test_resize_undo_is_exact_for_every_handle() {
    for handle in Cardinal::ALL {
        let mut drawing = Drawing::new();
        let id = drawing.add_figure(rect(10.0, 10.0, 100.0, 50.0), false);
        let original = *drawing.figure(id).unwrap().bbox();

        drawing.resize_figure(id, handle, 7.0, -3.0);
        drawing.resize_figure(id, handle, 2.0, 11.0);
        let resized = *drawing.figure(id).unwrap().bbox();
        assert!(drawing.end_figure_resize(id, handle, original.size));
        assert_eq!(drawing.undo_label(), "FIGURE SIZE");

        drawing.undo();
        assert_eq!(*drawing.figure(id).unwrap().bbox(), original, "undo via {handle}");

        drawing.redo();
        assert_eq!(*drawing.figure(id).unwrap().bbox(), resized, "redo via {handle}");
    }
}

#[test]
fn test_end_resize_without_change_records_nothing() {
    let mut drawing = Drawing::new();
    let id = drawing.add_figure(rect(10.0, 10.0, 100.0, 50.0), false);

    assert!(!drawing.end_figure_resize(id, Cardinal::East, Size::new(100.0, 50.0)));
    assert!(!drawing.can_undo());
}

#[test]
fn test_set_figure_position_and_size() {
    let mut drawing = Drawing::new();
    let id = drawing.add_figure(rect(10.0, 10.0, 100.0, 50.0), false);

    assert!(drawing.set_figure_position(id, Point::new(0.0, 5.0)));
    assert_eq!(drawing.figure(id).unwrap().position(), Point::new(0.0, 5.0));

    // Through the west handle the right edge stays put.
    assert!(drawing.set_figure_size(id, Cardinal::West, Size::new(60.0, 50.0)));
    assert_eq!(
        *drawing.figure(id).unwrap().bbox(),
        BoundingBox::new(40.0, 5.0, 60.0, 50.0)
    );
    assert!(!drawing.can_undo());
}

#[test]
fn test_labels_follow_stacks() {
    let mut drawing = Drawing::new();
    assert_eq!(drawing.undo_label(), "");
    assert_eq!(drawing.redo_label(), "");

    let id = drawing.add_figure(rect(0.0, 0.0, 10.0, 10.0), true);
    drawing.remove_figure(id, true);
    assert_eq!(drawing.undo_label(), "DELETE FIGURE");

    drawing.undo();
    assert_eq!(drawing.undo_label(), "ADD FIGURE");
    assert_eq!(drawing.redo_label(), "DELETE FIGURE");
}

#[test]
fn test_new_edit_clears_redo() {
    let mut drawing = Drawing::new();
    drawing.add_figure(rect(0.0, 0.0, 10.0, 10.0), true);
    drawing.undo();
    assert!(drawing.can_redo());

    drawing.add_figure(rect(5.0, 5.0, 10.0, 10.0), true);
    assert!(!drawing.can_redo());
}

#[test]
fn test_undo_depth_drops_oldest() {
    let mut drawing = Drawing::with_history(UndoHelper::with_depth(2));
    for i in 0..3 {
        drawing.add_figure(rect(f64::from(i), 0.0, 1.0, 1.0), true);
    }

    assert!(drawing.undo());
    assert!(drawing.undo());
    assert!(!drawing.undo());
    assert_eq!(drawing.len(), 1);
}

#[test]
fn test_undo_on_empty_history() {
    let mut drawing = Drawing::new();
    assert!(!drawing.undo());
    assert!(!drawing.redo());
}

#[test]
fn test_selected_color_records_one_edit_per_figure() {
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);

    let mut drawing = Drawing::new();
    let a = drawing.add_figure(colored(0.0, 0.0, red), false);
    let b = drawing.add_figure(colored(20.0, 0.0, red), false);
    let c = drawing.add_figure(colored(40.0, 0.0, red), false);
    drawing.select(Point::new(-1.0, -1.0), Some(Point::new(31.0, 11.0)));

    assert_eq!(drawing.set_selected_color(blue), 2);
    assert_eq!(drawing.figure(a).unwrap().color(), blue);
    assert_eq!(drawing.figure(b).unwrap().color(), blue);
    assert_eq!(drawing.figure(c).unwrap().color(), red);
    assert_eq!(drawing.undo_label(), "FIGURE COLOR");

    assert!(drawing.undo());
    assert_eq!(drawing.figure(b).unwrap().color(), red);
    assert_eq!(drawing.figure(a).unwrap().color(), blue);
    assert!(drawing.undo());
    assert_eq!(drawing.figure(a).unwrap().color(), red);
    assert!(!drawing.can_undo());
}

#[test]
fn test_group_move_replay_does_not_drift() {
    let mut drawing = Drawing::new();
    drawing.add_figure(rect(0.1, 0.2, 10.0, 10.0), false);
    drawing.add_figure(rect(20.7, 0.3, 10.0, 10.0), false);
    drawing.select_all();
    let group = drawing.group().unwrap();

    let start = drawing.figure(group).unwrap().position();
    let before = drawing.figure(group).unwrap().boxes();
    for _ in 0..3 {
        drawing.move_figure(group, 0.1, 0.3);
    }
    assert!(drawing.end_figure_move(group, start));
    let after = drawing.figure(group).unwrap().boxes();

    for _ in 0..5 {
        drawing.undo();
        assert_eq!(drawing.figure(group).unwrap().boxes(), before);
        assert_eq!(drawing.figure(group).unwrap().position(), start);
        drawing.redo();
        assert_eq!(drawing.figure(group).unwrap().boxes(), after);
    }
}

#[derive(Debug, Clone)]
enum Edit {
    Add(i32, i32, i32, i32),
    Remove(usize),
    Recolor(usize, u8, u8, u8),
    Move(usize, i32, i32),
    Resize(usize, Cardinal, i32, i32),
    Group(i32, i32, i32, i32),
    Ungroup,
}

fn edit() -> impl Strategy<Value = Edit> {
    let coord = 0..120i32;
    prop_oneof![
        (coord.clone(), coord.clone(), 1..40i32, 1..40i32)
            .prop_map(|(x, y, w, h)| Edit::Add(x, y, w, h)),
        any::<usize>().prop_map(Edit::Remove),
        (any::<usize>(), any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(i, r, g, b)| Edit::Recolor(i, r, g, b)),
        (any::<usize>(), -20..20i32, -20..20i32).prop_map(|(i, dx, dy)| Edit::Move(i, dx, dy)),
        (
            any::<usize>(),
            prop::sample::select(Cardinal::ALL.to_vec()),
            -40..40i32,
            -40..40i32
        )
            .prop_map(|(i, handle, dx, dy)| Edit::Resize(i, handle, dx, dy)),
        (coord.clone(), coord.clone(), coord.clone(), coord)
            .prop_map(|(x0, y0, x1, y1)| Edit::Group(x0, y0, x1, y1)),
        Just(Edit::Ungroup),
    ]
}

fn pick(drawing: &Drawing, index: usize) -> Option<FigureId> {
    if drawing.is_empty() {
        return None;
    }
    Some(drawing.figures()[index % drawing.len()].id())
}

fn apply(drawing: &mut Drawing, edit: &Edit) {
    match *edit {
        Edit::Add(x, y, w, h) => {
            let figure = rect(f64::from(x), f64::from(y), f64::from(w), f64::from(h));
            drawing.add_figure(figure, true);
        }
        Edit::Remove(index) => {
            if let Some(id) = pick(drawing, index) {
                drawing.remove_figure(id, true);
            }
        }
        Edit::Recolor(index, r, g, b) => {
            if let Some(id) = pick(drawing, index) {
                drawing.set_figure_color(id, Color::rgb(r, g, b), true);
            }
        }
        Edit::Move(index, dx, dy) => {
            if let Some(id) = pick(drawing, index) {
                let start = drawing.figure(id).unwrap().position();
                drawing.move_figure(id, f64::from(dx), f64::from(dy));
                drawing.end_figure_move(id, start);
            }
        }
        Edit::Resize(index, handle, dx, dy) => {
            if let Some(id) = pick(drawing, index) {
                let start = drawing.figure(id).unwrap().size();
                drawing.resize_figure(id, handle, f64::from(dx), f64::from(dy));
                drawing.end_figure_resize(id, handle, start);
            }
        }
        Edit::Group(x0, y0, x1, y1) => {
            drawing.deselect_all();
            drawing.select(
                Point::new(f64::from(x0), f64::from(y0)),
                Some(Point::new(f64::from(x1), f64::from(y1))),
            );
            drawing.group();
        }
        Edit::Ungroup => {
            drawing.select_all();
            drawing.ungroup();
        }
    }
}

#[derive(Debug, PartialEq)]
struct Node {
    id: FigureId,
    boxes: Vec<BoundingBox>,
    colors: Vec<Color>,
    children: Vec<Node>,
}

fn node(figure: &Figure) -> Node {
    Node {
        id: figure.id(),
        boxes: figure.boxes(),
        colors: figure.colors(),
        children: figure.children().iter().map(node).collect(),
    }
}

fn state(drawing: &Drawing) -> Vec<Node> {
    drawing.figures().iter().map(node).collect()
}

proptest! {
    #[test]
    fn prop_undo_all_then_redo_all(edits in prop::collection::vec(edit(), 1..30)) {
        let mut drawing = Drawing::new();
        drawing.add_figure(rect(0.0, 0.0, 30.0, 20.0), false);
        drawing.add_figure(rect(40.0, 10.0, 20.0, 30.0), false);
        drawing.add_figure(rect(70.0, 60.0, 25.0, 25.0), false);
        let initial = state(&drawing);

        for edit in &edits {
            apply(&mut drawing, edit);
        }
        let edited = state(&drawing);

        let mut undone = 0;
        while drawing.undo() {
            undone += 1;
        }
        prop_assert_eq!(state(&drawing), initial);

        let mut redone = 0;
        while drawing.redo() {
            redone += 1;
        }
        prop_assert_eq!(redone, undone);
        prop_assert_eq!(state(&drawing), edited);
    }
}
