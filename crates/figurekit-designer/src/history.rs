//! Undo/redo stacks
//!
//! [`UndoHelper`] only stores edits. Replaying them needs the drawing, so
//! [`crate::Drawing::undo`] and [`crate::Drawing::redo`] pop an edit here,
//! apply it and push it onto the opposite stack.

use crate::commands::DrawingEdit;

/// Default number of edits kept on the undo stack.
pub const DEFAULT_UNDO_DEPTH: usize = 100;

#[derive(Debug, Clone)]
pub struct UndoHelper {
    undo_stack: Vec<DrawingEdit>,
    redo_stack: Vec<DrawingEdit>,
    max_depth: usize,
}

impl Default for UndoHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoHelper {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_UNDO_DEPTH)
    }

    /// A depth of zero is treated as one.
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Records a new user edit. Clears the redo stack.
    pub fn add_edit(&mut self, edit: DrawingEdit) {
        self.redo_stack.clear();
        self.push_undo(edit);
    }

    /// Pushes onto the undo stack without touching redo, dropping the
    /// oldest entry beyond the depth limit.
    pub fn push_undo(&mut self, edit: DrawingEdit) {
        self.undo_stack.push(edit);
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
    }

    pub fn push_redo(&mut self, edit: DrawingEdit) {
        self.redo_stack.push(edit);
    }

    pub fn pop_undo(&mut self) -> Option<DrawingEdit> {
        self.undo_stack.pop()
    }

    pub fn pop_redo(&mut self) -> Option<DrawingEdit> {
        self.redo_stack.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Label of the edit `undo` would revert, or `""`.
    pub fn undo_label(&self) -> &'static str {
        self.undo_stack.last().map(DrawingEdit::label).unwrap_or("")
    }

    /// Label of the edit `redo` would reapply, or `""`.
    pub fn redo_label(&self) -> &'static str {
        self.redo_stack.last().map(DrawingEdit::label).unwrap_or("")
    }

    pub fn flush_undo(&mut self) {
        self.undo_stack.clear();
    }

    pub fn flush_redo(&mut self) {
        self.redo_stack.clear();
    }
}
