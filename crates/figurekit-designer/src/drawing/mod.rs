//! Drawing aggregate.
//!
//! The drawing owns the ordered list of top-level figures, notifies
//! listeners after each mutation and records user edits for undo/redo.
//!
//! This module is split into submodules:
//! - `selection`: point/region selection and handle lookup
//! - `grouping`: group and ungroup
//! - `file_io`: save, list and open through a persistence service

mod file_io;
mod grouping;
mod selection;

use std::sync::Arc;

use figurekit_core::{
    BoundingBox, Color, DrawingEvent, DrawingListeners, FigureId, ListenerHandle, PaintSurface,
    Point, SharedListener, Size,
};

use crate::commands::{AddFigure, DrawingEdit, FigureColor, FigureMove, FigureResize, RemoveFigure};
use crate::history::UndoHelper;
use crate::model::{Cardinal, ControlPoint, Figure};
use crate::persistence::PersistenceService;

/// Ordered set of top-level figures plus listeners and edit history.
///
/// List order is z-order: later figures paint on top and are hit-tested
/// first. Operations address figures by [`FigureId`]; an unknown id is a
/// silent no-op reported through the return value.
pub struct Drawing {
    pub(crate) figures: Vec<Figure>,
    listeners: DrawingListeners,
    pub(crate) history: UndoHelper,
    persistence: Option<Arc<dyn PersistenceService>>,
    /// Subtree boxes of the figure being dragged, taken at the first step.
    drag_start: Option<(FigureId, Vec<BoundingBox>)>,
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Drawing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drawing")
            .field("figures", &self.figures.len())
            .field("listeners", &self.listeners.len())
            .field("undo", &self.history.undo_len())
            .field("redo", &self.history.redo_len())
            .field("persistence", &self.persistence.is_some())
            .finish()
    }
}

impl Drawing {
    pub fn new() -> Self {
        Self::with_history(UndoHelper::new())
    }

    pub fn with_history(history: UndoHelper) -> Self {
        Self {
            figures: Vec::new(),
            listeners: DrawingListeners::new(),
            history,
            persistence: None,
            drag_start: None,
        }
    }

    pub fn with_persistence(mut self, service: Arc<dyn PersistenceService>) -> Self {
        self.persistence = Some(service);
        self
    }

    pub fn set_persistence(&mut self, service: Arc<dyn PersistenceService>) {
        self.persistence = Some(service);
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn figure(&self, id: FigureId) -> Option<&Figure> {
        self.figures.iter().find(|figure| figure.id() == id)
    }

    pub(crate) fn figure_mut(&mut self, id: FigureId) -> Option<&mut Figure> {
        self.figures.iter_mut().find(|figure| figure.id() == id)
    }

    /// Z-position of a top-level figure.
    pub fn index_of(&self, id: FigureId) -> Option<usize> {
        self.figures.iter().position(|figure| figure.id() == id)
    }

    pub fn history(&self) -> &UndoHelper {
        &self.history
    }

    // Listeners

    pub fn add_listener(&mut self, listener: SharedListener) -> ListenerHandle {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    pub(crate) fn notify(&self, event: DrawingEvent) {
        self.listeners.notify(event);
    }

    pub(crate) fn record_edit(&mut self, edit: DrawingEdit) {
        tracing::debug!("Recording edit {}", edit.label());
        self.drag_start = None;
        self.history.add_edit(edit);
        self.notify(DrawingEvent::UndoRedo);
    }

    // Figure list

    /// Appends a figure on top of the drawing.
    pub fn add_figure(&mut self, figure: Figure, is_user_event: bool) -> FigureId {
        let id = figure.id();
        tracing::debug!("Adding {} {}", figure.tag(), id);
        self.figures.push(figure);
        self.notify(DrawingEvent::FigureAdded);

        if is_user_event {
            self.record_edit(DrawingEdit::AddFigure(AddFigure { id, figure: None }));
        }
        id
    }

    /// Removes a top-level figure and hands it back.
    ///
    /// A user removal records an edit that keeps its own copy of the figure
    /// so undo can put it back at the same z-position.
    pub fn remove_figure(&mut self, id: FigureId, is_user_event: bool) -> Option<Figure> {
        let index = self.index_of(id)?;
        let figure = self.figures.remove(index);
        tracing::debug!("Removed {} {} at {}", figure.tag(), id, index);
        self.notify(DrawingEvent::FigureRemoved);

        if is_user_event {
            self.record_edit(DrawingEdit::RemoveFigure(RemoveFigure {
                id,
                index,
                figure: Some(figure.clone()),
            }));
        }
        Some(figure)
    }

    /// Non-user removal used by replays and grouping.
    pub(crate) fn take_figure(&mut self, id: FigureId) -> Option<Figure> {
        self.remove_figure(id, false)
    }

    /// Inserts at `index`, clamped to the end of the list.
    pub(crate) fn insert_figure(&mut self, index: usize, figure: Figure) {
        let index = index.min(self.figures.len());
        self.figures.insert(index, figure);
        self.notify(DrawingEvent::FigureAdded);
    }

    /// Paints every figure in z-order.
    pub fn paint(&self, surface: &mut dyn PaintSurface) {
        for figure in &self.figures {
            figure.paint(surface);
        }
    }

    /// Removes every figure and forgets the edit history.
    pub fn clear(&mut self) {
        self.figures.clear();
        self.drag_start = None;
        self.notify(DrawingEvent::DrawingCleared);
        self.history.flush_undo();
        self.history.flush_redo();
    }

    // Geometry

    /// Continuous drag step. Clears redo; the coalesced edit is recorded by
    /// [`Drawing::end_figure_move`].
    pub fn move_figure(&mut self, id: FigureId, dx: f64, dy: f64) -> bool {
        self.begin_drag(id);
        if !self.apply_move(id, dx, dy) {
            return false;
        }
        self.history.flush_redo();
        true
    }

    /// Continuous resize step through `handle`. Clears redo.
    pub fn resize_figure(&mut self, id: FigureId, handle: Cardinal, dx: f64, dy: f64) -> bool {
        self.begin_drag(id);
        if !self.apply_drag(id, handle, dx, dy) {
            return false;
        }
        self.history.flush_redo();
        true
    }

    /// Records one move edit for a finished drag that started at
    /// `old_position`. Returns false when nothing moved.
    pub fn end_figure_move(&mut self, id: FigureId, old_position: Point) -> bool {
        let start = self.take_drag_start(id);
        let Some(figure) = self.figure(id) else {
            return false;
        };
        let new_position = figure.position();
        if new_position == old_position {
            return false;
        }

        let new_boxes = figure.boxes();
        let old_boxes = match start {
            Some(boxes) if boxes.first().map(|b| b.position) == Some(old_position) => boxes,
            _ => {
                let mut before = figure.clone();
                before.move_by(old_position.x - new_position.x, old_position.y - new_position.y);
                let mut boxes = before.boxes();
                if let Some(own) = boxes.first_mut() {
                    own.position = old_position;
                }
                boxes
            }
        };

        self.record_edit(DrawingEdit::FigureMove(FigureMove {
            id,
            old_boxes,
            new_boxes,
        }));
        true
    }

    /// Records one resize edit for a finished handle drag that started at
    /// `old_size`. Returns false when the size did not change.
    pub fn end_figure_resize(&mut self, id: FigureId, handle: Cardinal, old_size: Size) -> bool {
        let start = self.take_drag_start(id);
        let Some(figure) = self.figure(id) else {
            return false;
        };
        let new_size = figure.size();
        if new_size == old_size {
            return false;
        }

        let new_boxes = figure.boxes();
        let old_boxes = match start {
            Some(boxes) if boxes.first().map(|b| b.size) == Some(old_size) => boxes,
            _ => {
                let mut before = figure.clone();
                let (dx, dy) =
                    handle.size_delta_to_drag(old_size.w - new_size.w, old_size.h - new_size.h);
                ControlPoint::new(handle, before.bbox()).drag(&mut before, dx, dy);
                let mut boxes = before.boxes();
                if let Some(own) = boxes.first_mut() {
                    own.size = old_size;
                }
                boxes
            }
        };

        self.record_edit(DrawingEdit::FigureResize(FigureResize {
            id,
            handle,
            old_boxes,
            new_boxes,
        }));
        true
    }

    /// Moves the figure so its raw origin lands on `position`.
    pub fn set_figure_position(&mut self, id: FigureId, position: Point) -> bool {
        let Some(current) = self.figure(id).map(Figure::position) else {
            return false;
        };
        self.apply_move(id, position.x - current.x, position.y - current.y)
    }

    /// Resizes through `handle` until the raw size equals `size`, moving
    /// the origin the way a drag on that handle would.
    pub fn set_figure_size(&mut self, id: FigureId, handle: Cardinal, size: Size) -> bool {
        let Some(current) = self.figure(id).map(Figure::size) else {
            return false;
        };
        let (dx, dy) = handle.size_delta_to_drag(size.w - current.w, size.h - current.h);
        self.apply_drag(id, handle, dx, dy)
    }

    fn begin_drag(&mut self, id: FigureId) {
        if matches!(&self.drag_start, Some((dragged, _)) if *dragged == id) {
            return;
        }
        self.drag_start = self.figure(id).map(|figure| (id, figure.boxes()));
    }

    /// Boxes captured when the drag of `id` began, if that drag is current.
    fn take_drag_start(&mut self, id: FigureId) -> Option<Vec<BoundingBox>> {
        match self.drag_start.take() {
            Some((dragged, boxes)) if dragged == id => Some(boxes),
            _ => None,
        }
    }

    fn apply_move(&mut self, id: FigureId, dx: f64, dy: f64) -> bool {
        let Some(figure) = self.figure_mut(id) else {
            return false;
        };
        figure.move_by(dx, dy);
        self.notify(DrawingEvent::FigureModified);
        true
    }

    fn apply_drag(&mut self, id: FigureId, handle: Cardinal, dx: f64, dy: f64) -> bool {
        let Some(figure) = self.figure_mut(id) else {
            return false;
        };
        let point = ControlPoint::new(handle, figure.bbox());
        point.drag(figure, dx, dy);
        self.notify(DrawingEvent::FigureModified);
        true
    }

    pub(crate) fn restore_figure_boxes(&mut self, id: FigureId, boxes: &[BoundingBox]) -> bool {
        let Some(figure) = self.figure_mut(id) else {
            return false;
        };
        figure.restore_boxes(boxes);
        self.notify(DrawingEvent::FigureModified);
        true
    }

    /// Colors the figure and all its descendants.
    pub fn set_figure_color(&mut self, id: FigureId, color: Color, is_user_event: bool) -> bool {
        let Some(figure) = self.figure_mut(id) else {
            return false;
        };
        let old_colors = figure.colors();
        figure.set_color(color);
        self.notify(DrawingEvent::FigureModified);

        if is_user_event {
            self.record_edit(DrawingEdit::FigureColor(FigureColor {
                id,
                old_colors,
                new_color: color,
            }));
        }
        true
    }

    pub(crate) fn restore_figure_colors(&mut self, id: FigureId, colors: &[Color]) -> bool {
        let Some(figure) = self.figure_mut(id) else {
            return false;
        };
        figure.restore_colors(colors);
        self.notify(DrawingEvent::FigureModified);
        true
    }

    // History

    /// Reverts the most recent edit.
    pub fn undo(&mut self) -> bool {
        let Some(mut edit) = self.history.pop_undo() else {
            return false;
        };
        tracing::debug!("Undo {}", edit.label());
        self.drag_start = None;
        edit.undo(self);
        self.history.push_redo(edit);
        self.notify(DrawingEvent::UndoRedo);
        true
    }

    /// Reapplies the most recently undone edit.
    pub fn redo(&mut self) -> bool {
        let Some(mut edit) = self.history.pop_redo() else {
            return false;
        };
        tracing::debug!("Redo {}", edit.label());
        self.drag_start = None;
        edit.redo(self);
        self.history.push_undo(edit);
        self.notify(DrawingEvent::UndoRedo);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_label(&self) -> &'static str {
        self.history.undo_label()
    }

    pub fn redo_label(&self) -> &'static str {
        self.history.redo_label()
    }
}
