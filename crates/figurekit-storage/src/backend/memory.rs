//! In-memory document store.

use super::DocumentStore;
use async_trait::async_trait;
use figurekit_core::{thread_safe_rw_map, PersistenceResult, ThreadSafeRwMap};
use std::collections::BTreeMap;

/// Process-local store. Clones share the same documents.
#[derive(Clone)]
pub struct MemoryStore {
    documents: ThreadSafeRwMap<String, BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            documents: thread_safe_rw_map(),
        }
    }

    /// Total number of documents across all accounts.
    pub fn len(&self) -> usize {
        self.documents.read().values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn put(&self, account: &str, name: &str, document: &str) -> PersistenceResult<usize> {
        self.documents
            .write()
            .entry(account.to_string())
            .or_default()
            .insert(name.to_string(), document.to_string());
        Ok(document.len())
    }

    async fn get(&self, account: &str, name: &str) -> PersistenceResult<Option<String>> {
        Ok(self
            .documents
            .read()
            .get(account)
            .and_then(|docs| docs.get(name))
            .cloned())
    }

    async fn names(&self, account: &str) -> PersistenceResult<Vec<String>> {
        Ok(self
            .documents
            .read()
            .get(account)
            .map(|docs| docs.keys().cloned().collect())
            .unwrap_or_default())
    }
}
