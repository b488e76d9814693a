//! File-system document store.

use super::{validate_name, DocumentStore};
use async_trait::async_trait;
use figurekit_core::PersistenceResult;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

const EXTENSION: &str = "json";

/// Stores each document as `<root>/<account>/<name>.json`.
///
/// Writes are serialized through an async mutex; reads go straight to disk.
pub struct FileStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn account_dir(&self, account: &str) -> PersistenceResult<PathBuf> {
        validate_name(account)?;
        Ok(self.root.join(account))
    }

    fn document_path(&self, account: &str, name: &str) -> PersistenceResult<PathBuf> {
        validate_name(name)?;
        Ok(self
            .account_dir(account)?
            .join(format!("{}.{}", name, EXTENSION)))
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn put(&self, account: &str, name: &str, document: &str) -> PersistenceResult<usize> {
        let path = self.document_path(account, name)?;
        let _guard = self.write_lock.lock().await;

        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::write(&path, document.as_bytes()).await?;
        tracing::debug!("wrote {} bytes to {}", document.len(), path.display());
        Ok(document.len())
    }

    async fn get(&self, account: &str, name: &str) -> PersistenceResult<Option<String>> {
        let path = self.document_path(account, name)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(doc) => Ok(Some(doc)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn names(&self, account: &str) -> PersistenceResult<Vec<String>> {
        let dir = self.account_dir(account)?;
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}
