//! Error handling for FigureKit
//!
//! Provides error types for all layers of the editor:
//! - Drawing errors (missing collaborators)
//! - Serialization errors (tagged figure records)
//! - Persistence errors (document store protocol and I/O)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Drawing error type
///
/// Figure lookups and history steps report through their return values;
/// only the persistence entry points of a drawing fail with an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawingError {
    /// The drawing has no persistence service attached
    #[error("No persistence service configured")]
    NoPersistence,
}

/// Serialization error type
///
/// Represents failures while mapping figures to and from their
/// `{clazz, object}` records.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// No factory is registered for the record's class tag
    #[error("{clazz} class factory not registered")]
    UnregisteredFactory {
        /// The unregistered class tag.
        clazz: String,
    },

    /// The record's object does not match the shape its tag announces
    #[error("Malformed {clazz} record: {reason}")]
    MalformedRecord {
        /// The class tag of the record.
        clazz: String,
        /// Why the object could not be decoded.
        reason: String,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistence error type
///
/// Represents failures of the store/list/load document protocol.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Account or document name was empty
    #[error("MISSING PARAMETERS")]
    MissingParameters,

    /// List was called without an account
    #[error("NO ACCOUNT PROVIDED")]
    NoAccount,

    /// The document store answered with an error string
    #[error("Remote error: {message}")]
    Remote {
        /// The error string returned by the store.
        message: String,
    },

    /// The document store answered with a value that could not be understood
    #[error("Invalid response for {command}: {reason}")]
    InvalidResponse {
        /// The command that was sent.
        command: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Account or document name contains characters the store refuses
    #[error("Invalid name: {name}")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// Encoding or decoding the document failed
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::Serialization(SerializationError::Json(err))
    }
}

/// Main error type for FigureKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Drawing error
    #[error(transparent)]
    Drawing(#[from] DrawingError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl Error {
    /// Check if this is a persistence error
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for serialization operations.
pub type SerializationResult<T> = std::result::Result<T, SerializationError>;

/// Result type alias for persistence operations.
pub type PersistenceResult<T> = std::result::Result<T, PersistenceError>;
