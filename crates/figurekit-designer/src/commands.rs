//! Undoable drawing edits
//!
//! Every user-driven mutation of a [`Drawing`] is recorded as one
//! [`DrawingEdit`]. The undo log in [`crate::history`] owns the edits and
//! replays them against the drawing.

use figurekit_core::{BoundingBox, Color, FigureId};

use crate::drawing::Drawing;
use crate::model::{Cardinal, Figure};

/// A reversible change to a drawing.
///
/// Edits are recorded after the user action has already happened, so
/// `redo` reapplies the change and `undo` reverts it. Both replay through
/// non-user drawing paths and never record new edits. Figures that leave
/// the drawing are parked inside the edit until it is replayed.
#[derive(Debug, Clone)]
pub enum DrawingEdit {
    AddFigure(AddFigure),
    RemoveFigure(RemoveFigure),
    FigureColor(FigureColor),
    FigureMove(FigureMove),
    FigureResize(FigureResize),
    Group(GroupFigures),
    Ungroup(Vec<GroupFigures>),
}

#[derive(Debug, Clone)]
pub struct AddFigure {
    pub id: FigureId,
    pub figure: Option<Figure>, // Some while undone
}

#[derive(Debug, Clone)]
pub struct RemoveFigure {
    pub id: FigureId,
    /// Z-position the figure had before removal.
    pub index: usize,
    pub figure: Option<Figure>, // Some while removed
}

#[derive(Debug, Clone)]
pub struct FigureColor {
    pub id: FigureId,
    /// Pre-order colors of the figure's subtree before the change.
    pub old_colors: Vec<Color>,
    pub new_color: Color,
}

#[derive(Debug, Clone)]
pub struct FigureMove {
    pub id: FigureId,
    /// Pre-order boxes of the subtree before and after the drag.
    pub old_boxes: Vec<BoundingBox>,
    pub new_boxes: Vec<BoundingBox>,
}

#[derive(Debug, Clone)]
pub struct FigureResize {
    pub id: FigureId,
    pub handle: Cardinal,
    /// Pre-order boxes of the subtree before and after the drag.
    pub old_boxes: Vec<BoundingBox>,
    pub new_boxes: Vec<BoundingBox>,
}

/// One group and where its members sit when it is dissolved.
#[derive(Debug, Clone)]
pub struct GroupFigures {
    pub group_id: FigureId,
    /// Z-position of the group while it exists.
    pub group_index: usize,
    /// Member ids with their top-level index while ungrouped, in child order.
    pub members: Vec<(FigureId, usize)>,
    pub group: Option<Figure>, // Some while dissolved
    /// Raw box of the group when it was dissolved.
    pub bbox: Option<BoundingBox>,
}

impl GroupFigures {
    /// Breaks the group up: members go back to their recorded indices,
    /// selected, and the emptied group is parked here.
    pub(crate) fn dissolve(&mut self, drawing: &mut Drawing) {
        let Some(mut group) = drawing.take_figure(self.group_id) else {
            tracing::warn!("Group {} not found, nothing to dissolve", self.group_id);
            return;
        };

        self.bbox = Some(*group.bbox());
        for (mut child, (_, index)) in group.flush_children().into_iter().zip(&self.members) {
            child.set_selected(true);
            drawing.insert_figure(*index, child);
        }
        self.group = Some(group);
    }

    /// Pulls the members back under the parked group and reinserts it.
    pub(crate) fn restore(&mut self, drawing: &mut Drawing) {
        let Some(mut group) = self.group.take() else {
            return;
        };

        for (id, _) in &self.members {
            if let Some(member) = drawing.take_figure(*id) {
                group.add_child(member);
            }
        }
        // The member union is normalized; put back the signed box.
        if let Some(bbox) = self.bbox.take() {
            group.set_bbox(bbox);
        }
        group.set_selected(true);
        drawing.insert_figure(self.group_index, group);
    }
}

impl DrawingEdit {
    /// Menu label of the edit.
    pub fn label(&self) -> &'static str {
        match self {
            DrawingEdit::AddFigure(_) => "ADD FIGURE",
            DrawingEdit::RemoveFigure(_) => "DELETE FIGURE",
            DrawingEdit::FigureColor(_) => "FIGURE COLOR",
            DrawingEdit::FigureMove(_) => "FIGURE POSITION",
            DrawingEdit::FigureResize(_) => "FIGURE SIZE",
            DrawingEdit::Group(_) => "GROUP",
            DrawingEdit::Ungroup(_) => "UNGROUP",
        }
    }

    /// Reapplies the change.
    pub fn redo(&mut self, drawing: &mut Drawing) {
        match self {
            DrawingEdit::AddFigure(edit) => {
                if let Some(figure) = edit.figure.take() {
                    drawing.add_figure(figure, false);
                }
            }
            DrawingEdit::RemoveFigure(edit) => {
                edit.figure = drawing.take_figure(edit.id);
            }
            DrawingEdit::FigureColor(edit) => {
                drawing.set_figure_color(edit.id, edit.new_color, false);
            }
            DrawingEdit::FigureMove(edit) => {
                drawing.restore_figure_boxes(edit.id, &edit.new_boxes);
            }
            DrawingEdit::FigureResize(edit) => {
                drawing.restore_figure_boxes(edit.id, &edit.new_boxes);
            }
            DrawingEdit::Group(group) => group.restore(drawing),
            DrawingEdit::Ungroup(groups) => {
                for group in groups.iter_mut() {
                    group.dissolve(drawing);
                }
            }
        }
    }

    /// Reverts the change.
    pub fn undo(&mut self, drawing: &mut Drawing) {
        match self {
            DrawingEdit::AddFigure(edit) => {
                edit.figure = drawing.take_figure(edit.id);
            }
            DrawingEdit::RemoveFigure(edit) => {
                if let Some(figure) = edit.figure.take() {
                    drawing.insert_figure(edit.index, figure);
                }
            }
            DrawingEdit::FigureColor(edit) => {
                drawing.restore_figure_colors(edit.id, &edit.old_colors);
            }
            DrawingEdit::FigureMove(edit) => {
                drawing.restore_figure_boxes(edit.id, &edit.old_boxes);
            }
            DrawingEdit::FigureResize(edit) => {
                drawing.restore_figure_boxes(edit.id, &edit.old_boxes);
            }
            DrawingEdit::Group(group) => group.dissolve(drawing),
            DrawingEdit::Ungroup(groups) => {
                for group in groups.iter_mut().rev() {
                    group.restore(drawing);
                }
            }
        }
    }
}
