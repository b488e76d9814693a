//! Save and load through the attached persistence service.

use std::sync::Arc;

use figurekit_core::{DrawingError, DrawingEvent, Error, Result};

use super::Drawing;
use crate::persistence::PersistenceService;

impl Drawing {
    fn service(&self) -> Result<Arc<dyn PersistenceService>> {
        self.persistence
            .clone()
            .ok_or(Error::Drawing(DrawingError::NoPersistence))
    }

    /// Stores the current figures as `name`. Returns the bytes written.
    pub async fn save(&mut self, account: &str, name: &str) -> Result<usize> {
        let service = self.service()?;
        let written = service.store(account, name, &self.figures).await.map_err(|err| {
            tracing::warn!("Saving {} failed: {}", name, err);
            err
        })?;

        self.notify(DrawingEvent::DrawingSaved);
        Ok(written)
    }

    /// Names of the drawings stored for `account`.
    pub async fn list(&mut self, account: &str) -> Result<Vec<String>> {
        let service = self.service()?;
        Ok(service.list(account).await?)
    }

    /// Replaces the figures with drawing `name` and forgets the history.
    ///
    /// On failure the current figures are kept. Returns the number of
    /// figures loaded.
    pub async fn open(&mut self, account: &str, name: &str) -> Result<usize> {
        let service = self.service()?;
        let figures = service.load(account, name).await.map_err(|err| {
            tracing::warn!("Opening {} failed: {}", name, err);
            err
        })?;

        self.figures = figures;
        self.drag_start = None;
        self.history.flush_undo();
        self.history.flush_redo();
        self.notify(DrawingEvent::DrawingLoaded);
        Ok(self.figures.len())
    }
}
