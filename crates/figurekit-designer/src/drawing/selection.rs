//! Selection queries and updates.

use figurekit_core::{Color, DrawingEvent, FigureId, Point};

use super::Drawing;
use crate::model::{ControlPoint, Figure};

impl Drawing {
    /// Point selection when `up` is `None`, region selection otherwise.
    ///
    /// Figures are tested from the top of the z-order down. A point
    /// selection stops at the first hit, so figures below it keep their
    /// previous flag; a region selection tests every figure. Returns the
    /// number of hits.
    pub fn select(&mut self, down: Point, up: Option<Point>) -> usize {
        let mut hits = 0;
        for index in (0..self.figures.len()).rev() {
            if !self.figures[index].select(down, up) {
                continue;
            }
            hits += 1;
            self.notify(DrawingEvent::FigureSelected);
            if up.is_none() {
                break;
            }
        }
        tracing::debug!("Selection at {} hit {} figure(s)", down, hits);
        hits
    }

    pub fn select_all(&mut self) {
        self.set_all_selected(true);
    }

    pub fn deselect_all(&mut self) {
        self.set_all_selected(false);
    }

    fn set_all_selected(&mut self, selected: bool) {
        for figure in &mut self.figures {
            figure.set_selected(selected);
        }
        self.notify(DrawingEvent::FigureSelected);
    }

    pub fn num_selected(&self) -> usize {
        self.figures.iter().filter(|f| f.is_selected()).count()
    }

    /// Ids of the selected top-level figures in z-order.
    pub fn selected_ids(&self) -> Vec<FigureId> {
        self.figures
            .iter()
            .filter(|f| f.is_selected())
            .map(Figure::id)
            .collect()
    }

    /// Topmost selected figure containing `point`.
    pub fn selected_figure_at(&self, point: Point) -> Option<FigureId> {
        self.figures
            .iter()
            .rev()
            .find(|f| f.is_selected() && f.contains(point))
            .map(Figure::id)
    }

    /// Handle under `point` among the selected figures, topmost first.
    pub fn control_point_at(&self, point: Point) -> Option<(FigureId, ControlPoint)> {
        self.figures
            .iter()
            .rev()
            .filter(|f| f.is_selected())
            .find_map(|f| f.control_point_at(point).map(|handle| (f.id(), handle)))
    }

    /// Colors every selected figure as one user edit each.
    pub fn set_selected_color(&mut self, color: Color) -> usize {
        let ids = self.selected_ids();
        for id in &ids {
            self.set_figure_color(*id, color, true);
        }
        ids.len()
    }
}
