//! # FigureKit Storage
//!
//! The document store side of drawing persistence.
//!
//! A drawing is persisted by sending an [`ApiRequest`] (`store`, `list` or
//! `load`) to a [`DocumentBackend`] and reading the `{value, error}`
//! [`ApiResponse`] it returns. Any [`DocumentStore`] answers that protocol
//! through [`dispatch`]; two stores ship with the crate:
//!
//! - [`MemoryStore`]: process-local, shared by cloning
//! - [`FileStore`]: one JSON file per document under `<root>/<account>/`

pub mod api;
pub mod backend;

pub use api::{ApiCommand, ApiRequest, ApiResponse, FigureDoc, JsonFigure};
pub use backend::{dispatch, validate_name, DocumentBackend, DocumentStore, FileStore, MemoryStore};
