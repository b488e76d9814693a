//! Wire types of the document protocol
//!
//! Requests are `{cmd, acc, fnm, fig}` objects, responses are
//! `{value, error}` objects where an empty `error` means success. A stored
//! document is the envelope `{"figures": [{"clazz": .., "object": ..}, ..]}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One figure in its tagged form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonFigure {
    /// Class tag naming the factory that rebuilds the figure.
    pub clazz: String,
    /// Variant-specific fields.
    pub object: serde_json::Value,
}

/// Envelope of a saved drawing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FigureDoc {
    pub figures: Vec<JsonFigure>,
}

/// Protocol command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiCommand {
    Store,
    List,
    Load,
}

impl fmt::Display for ApiCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store => write!(f, "store"),
            Self::List => write!(f, "list"),
            Self::Load => write!(f, "load"),
        }
    }
}

/// A request to the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub cmd: ApiCommand,
    /// Account the document belongs to.
    pub acc: String,
    /// Document name; unused by `list`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub fnm: String,
    /// Document body; only sent with `store`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fig: Option<FigureDoc>,
}

impl ApiRequest {
    pub fn store(account: impl Into<String>, name: impl Into<String>, doc: FigureDoc) -> Self {
        Self {
            cmd: ApiCommand::Store,
            acc: account.into(),
            fnm: name.into(),
            fig: Some(doc),
        }
    }

    pub fn list(account: impl Into<String>) -> Self {
        Self {
            cmd: ApiCommand::List,
            acc: account.into(),
            fnm: String::new(),
            fig: None,
        }
    }

    pub fn load(account: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cmd: ApiCommand::Load,
            acc: account.into(),
            fnm: name.into(),
            fig: None,
        }
    }
}

/// Answer of the document store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub error: String,
}

impl ApiResponse {
    pub fn ok(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: String::new(),
        }
    }

    pub fn failed(value: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            error: error.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}
