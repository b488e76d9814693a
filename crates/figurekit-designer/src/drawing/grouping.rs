//! Group and ungroup.

use figurekit_core::{DrawingEvent, FigureId};

use super::Drawing;
use crate::commands::{DrawingEdit, GroupFigures};
use crate::model::Figure;

impl Drawing {
    /// Moves every selected top-level figure into a new group placed on
    /// top of the drawing. The group is left selected.
    ///
    /// Returns `None` when nothing is selected.
    pub fn group(&mut self) -> Option<FigureId> {
        let members: Vec<(FigureId, usize)> = self
            .figures
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_selected())
            .map(|(index, f)| (f.id(), index))
            .collect();
        if members.is_empty() {
            return None;
        }

        let mut group = Figure::group();
        for (id, _) in &members {
            if let Some(member) = self.take_figure(*id) {
                group.add_child(member);
            }
        }
        group.set_selected(true);

        let group_id = group.id();
        let group_index = self.figures.len();
        tracing::debug!("Grouping {} figure(s) into {}", members.len(), group_id);
        self.add_figure(group, false);

        self.notify(DrawingEvent::FigureSelected);
        self.notify(DrawingEvent::Group);
        self.record_edit(DrawingEdit::Group(GroupFigures {
            group_id,
            group_index,
            members,
            group: None,
            bbox: None,
        }));
        Some(group_id)
    }

    /// Dissolves every selected top-level group in place. The released
    /// members take the group's z-position and are left selected.
    ///
    /// Returns the ids of the released members; empty when no group is
    /// selected.
    pub fn ungroup(&mut self) -> Vec<FigureId> {
        let targets: Vec<(usize, FigureId)> = self
            .figures
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_selected() && f.is_group())
            .map(|(index, f)| (index, f.id()))
            .collect();
        if targets.is_empty() {
            return Vec::new();
        }

        // Highest first so lower indices stay valid.
        let mut records = Vec::with_capacity(targets.len());
        let mut released = Vec::new();
        for (group_index, group_id) in targets.into_iter().rev() {
            let members: Vec<(FigureId, usize)> = self.figures[group_index]
                .children()
                .iter()
                .enumerate()
                .map(|(offset, child)| (child.id(), group_index + offset))
                .collect();
            released.extend(members.iter().map(|(id, _)| *id));

            let mut record = GroupFigures {
                group_id,
                group_index,
                members,
                group: None,
            bbox: None,
            };
            record.dissolve(self);
            records.push(record);
        }
        tracing::debug!("Ungrouped {} group(s)", records.len());

        self.notify(DrawingEvent::FigureSelected);
        self.notify(DrawingEvent::Ungroup);
        self.record_edit(DrawingEdit::Ungroup(records));
        released
    }
}
