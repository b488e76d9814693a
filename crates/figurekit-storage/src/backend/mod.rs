//! Document store backends
//!
//! [`DocumentStore`] is the typed storage seam (put/get/names);
//! [`DocumentBackend`] is the request/response protocol endpoint. Every
//! store is a backend through [`dispatch`], which validates requests and
//! maps store results and failures onto `{value, error}` responses.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::api::{ApiCommand, ApiRequest, ApiResponse};
use async_trait::async_trait;
use figurekit_core::{PersistenceError, PersistenceResult};

/// Typed document storage.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persist `document` under `(account, name)`, returning bytes written.
    async fn put(&self, account: &str, name: &str, document: &str) -> PersistenceResult<usize>;

    /// Fetch a document; `None` when it does not exist.
    async fn get(&self, account: &str, name: &str) -> PersistenceResult<Option<String>>;

    /// Document names of an account, sorted.
    async fn names(&self, account: &str) -> PersistenceResult<Vec<String>>;
}

/// Request/response endpoint of the document protocol.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    async fn handle(&self, request: ApiRequest) -> ApiResponse;
}

#[async_trait]
impl<T> DocumentBackend for T
where
    T: DocumentStore + ?Sized,
{
    async fn handle(&self, request: ApiRequest) -> ApiResponse {
        dispatch(self, request).await
    }
}

/// Answer one protocol request against a store.
pub async fn dispatch<S>(store: &S, request: ApiRequest) -> ApiResponse
where
    S: DocumentStore + ?Sized,
{
    let ApiRequest { cmd, acc, fnm, fig } = request;
    tracing::debug!("{} acc={} fnm={}", cmd, acc, fnm);

    match cmd {
        ApiCommand::Store => {
            let Some(doc) = fig else {
                return ApiResponse::failed("-1", PersistenceError::MissingParameters.to_string());
            };
            if acc.is_empty() || fnm.is_empty() {
                return ApiResponse::failed("-1", PersistenceError::MissingParameters.to_string());
            }
            let body = match serde_json::to_string(&doc) {
                Ok(body) => body,
                Err(err) => return ApiResponse::failed("-1", err.to_string()),
            };
            match store.put(&acc, &fnm, &body).await {
                Ok(written) => ApiResponse::ok(written.to_string()),
                Err(err) => {
                    tracing::warn!("store {}/{} failed: {}", acc, fnm, err);
                    ApiResponse::failed("-1", err.to_string())
                }
            }
        }
        ApiCommand::List => {
            if acc.is_empty() {
                return ApiResponse::failed("", PersistenceError::NoAccount.to_string());
            }
            let names = match store.names(&acc).await {
                Ok(names) => names,
                Err(err) => {
                    tracing::warn!("list {} failed: {}", acc, err);
                    return ApiResponse::failed("", err.to_string());
                }
            };
            match serde_json::to_string(&names) {
                Ok(value) => ApiResponse::ok(value),
                Err(err) => ApiResponse::failed("", err.to_string()),
            }
        }
        ApiCommand::Load => {
            if acc.is_empty() || fnm.is_empty() {
                return ApiResponse::failed("", PersistenceError::MissingParameters.to_string());
            }
            match store.get(&acc, &fnm).await {
                Ok(Some(doc)) => ApiResponse::ok(doc),
                Ok(None) => ApiResponse::ok(""),
                Err(err) => {
                    tracing::warn!("load {}/{} failed: {}", acc, fnm, err);
                    ApiResponse::failed("", err.to_string())
                }
            }
        }
    }
}

/// Accepts names made of ASCII letters, digits, `-`, `_`, `.` and spaces
/// that do not start with a dot.
pub fn validate_name(name: &str) -> PersistenceResult<()> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ' '));

    if valid {
        Ok(())
    } else {
        Err(PersistenceError::InvalidName {
            name: name.to_string(),
        })
    }
}
