//! Persistence client
//!
//! [`PersistenceService`] is the seam a [`crate::Drawing`] saves and loads
//! through. [`ApiService`] implements it by encoding figures with a
//! [`FigureRegistry`] and exchanging `{cmd, acc, fnm, fig}` requests with a
//! [`DocumentBackend`].

use std::sync::Arc;

use async_trait::async_trait;
use figurekit_core::{PersistenceError, PersistenceResult};
use figurekit_storage::{ApiCommand, ApiRequest, ApiResponse, DocumentBackend, FigureDoc};

use crate::model::Figure;
use crate::serialization::FigureRegistry;

/// Stores, lists and loads named drawings per account.
#[async_trait]
pub trait PersistenceService: Send + Sync {
    /// Saves `figures` as `name`. Returns the number of bytes written.
    async fn store(&self, account: &str, name: &str, figures: &[Figure]) -> PersistenceResult<usize>;

    /// Names of the drawings stored for `account`.
    async fn list(&self, account: &str) -> PersistenceResult<Vec<String>>;

    /// Loads drawing `name`. A document that does not exist loads as an
    /// empty list.
    async fn load(&self, account: &str, name: &str) -> PersistenceResult<Vec<Figure>>;
}

/// Protocol client over a document backend.
pub struct ApiService {
    registry: FigureRegistry,
    backend: Arc<dyn DocumentBackend>,
}

impl std::fmt::Debug for ApiService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiService")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl ApiService {
    pub fn new(registry: FigureRegistry, backend: Arc<dyn DocumentBackend>) -> Self {
        Self { registry, backend }
    }

    /// Client with the built-in figure factories.
    pub fn with_backend(backend: Arc<dyn DocumentBackend>) -> Self {
        Self::new(FigureRegistry::with_builtin_factories(), backend)
    }

    pub fn registry(&self) -> &FigureRegistry {
        &self.registry
    }

    async fn send(&self, request: ApiRequest) -> PersistenceResult<String> {
        let command = request.cmd;
        let ApiResponse { value, error } = self.backend.handle(request).await;
        if !error.is_empty() {
            tracing::warn!("{} failed: {}", command, error);
            return Err(PersistenceError::Remote { message: error });
        }
        Ok(value)
    }
}

fn invalid(command: ApiCommand, reason: impl ToString) -> PersistenceError {
    PersistenceError::InvalidResponse {
        command: command.to_string(),
        reason: reason.to_string(),
    }
}

#[async_trait]
impl PersistenceService for ApiService {
    async fn store(&self, account: &str, name: &str, figures: &[Figure]) -> PersistenceResult<usize> {
        if account.is_empty() || name.is_empty() {
            return Err(PersistenceError::MissingParameters);
        }

        let doc = self.registry.encode_document(figures)?;
        let value = self.send(ApiRequest::store(account, name, doc)).await?;
        let written = value
            .trim()
            .parse::<usize>()
            .map_err(|err| invalid(ApiCommand::Store, err))?;

        tracing::info!("Stored {}/{}: {} bytes", account, name, written);
        Ok(written)
    }

    async fn list(&self, account: &str) -> PersistenceResult<Vec<String>> {
        if account.is_empty() {
            return Err(PersistenceError::NoAccount);
        }

        let value = self.send(ApiRequest::list(account)).await?;
        if value.is_empty() {
            return Ok(Vec::new());
        }
        let names: Vec<String> =
            serde_json::from_str(&value).map_err(|err| invalid(ApiCommand::List, err))?;

        tracing::info!("Listed {} drawing(s) for {}", names.len(), account);
        Ok(names)
    }

    async fn load(&self, account: &str, name: &str) -> PersistenceResult<Vec<Figure>> {
        if account.is_empty() || name.is_empty() {
            return Err(PersistenceError::MissingParameters);
        }

        let value = self.send(ApiRequest::load(account, name)).await?;
        if value.is_empty() {
            tracing::info!("{}/{} is empty", account, name);
            return Ok(Vec::new());
        }
        let doc: FigureDoc =
            serde_json::from_str(&value).map_err(|err| invalid(ApiCommand::Load, err))?;
        let figures = self.registry.decode_document(&doc);

        tracing::info!("Loaded {}/{}: {} figure(s)", account, name, figures.len());
        Ok(figures)
    }
}
