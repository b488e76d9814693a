//! # FigureKit Core
//!
//! Core types, traits, and utilities for FigureKit.
//! Provides the value types figures are built from, the abstract paint
//! surface they render to, the drawing notification model and the error
//! types shared by every crate in the workspace.

pub mod color;
pub mod core;
pub mod error;
pub mod geometry;
pub mod paint;
pub mod types;
#[cfg(feature = "web")]
pub mod web;

pub use color::Color;

pub use crate::core::{DrawingEvent, DrawingListener, DrawingListeners, ListenerHandle, SharedListener};

pub use error::{
    DrawingError, Error, PersistenceError, PersistenceResult, Result, SerializationError,
    SerializationResult,
};

pub use geometry::{BoundingBox, Point, Size, HANDLE_HALF_SIZE};

pub use paint::{PaintOp, PaintSurface, RecordingSurface};

pub use types::{thread_safe_rw, thread_safe_rw_map, FigureId, ThreadSafeRw, ThreadSafeRwMap};
