//! Drawing event types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Change notifications fanned out by a drawing.
///
/// Every event fires after the mutation it reports is fully applied.
/// Listeners must not rely on any ordering between events beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrawingEvent {
    /// A figure joined the top-level list
    FigureAdded,
    /// A figure left the top-level list
    FigureRemoved,
    /// Selection flags changed
    FigureSelected,
    /// A figure's geometry or color changed
    FigureModified,
    /// The figure list was emptied
    DrawingCleared,
    /// The drawing was stored
    DrawingSaved,
    /// The figure list was replaced by a loaded document
    DrawingLoaded,
    /// Selected figures were grouped
    Group,
    /// Selected groups were dissolved
    Ungroup,
    /// The undo or redo stack changed
    UndoRedo,
}

impl DrawingEvent {
    /// Upper-case wire name, e.g. `FIGURE_ADDED`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawingEvent::FigureAdded => "FIGURE_ADDED",
            DrawingEvent::FigureRemoved => "FIGURE_REMOVED",
            DrawingEvent::FigureSelected => "FIGURE_SELECTED",
            DrawingEvent::FigureModified => "FIGURE_MODIFIED",
            DrawingEvent::DrawingCleared => "DRAWING_CLEARED",
            DrawingEvent::DrawingSaved => "DRAWING_SAVED",
            DrawingEvent::DrawingLoaded => "DRAWING_LOADED",
            DrawingEvent::Group => "GROUP",
            DrawingEvent::Ungroup => "UNGROUP",
            DrawingEvent::UndoRedo => "UNDO_REDO",
        }
    }

    /// True for events after which the canvas needs a repaint.
    pub fn needs_repaint(&self) -> bool {
        !matches!(self, DrawingEvent::DrawingSaved | DrawingEvent::UndoRedo)
    }
}

impl fmt::Display for DrawingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
