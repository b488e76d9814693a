//! FigureKit Settings Crate
//!
//! Handles editor defaults, the storage backend selection and logging
//! configuration, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings, LoggingSettings, StorageBackend, StorageSettings};
pub use error::{SettingsError, SettingsResult};
