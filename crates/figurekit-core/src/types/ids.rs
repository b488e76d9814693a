//! Opaque identities.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a figure.
///
/// Assigned once when a figure is constructed or decoded and never reused.
/// Drawing operations and undo records address top-level figures by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FigureId(Uuid);

impl FigureId {
    /// Create a new unique figure id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FigureId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fig({})", &self.0.to_string()[..8])
    }
}
