//! Type aliases for commonly used shared-state types.
//!
//! Document stores are shared between the persistence client and whatever
//! hosts them, and they may be reached from several tokio tasks at once.
//! These aliases keep those signatures readable.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// A thread-safe reader-writer lock wrapper for read-heavy workloads.
///
/// Uses `parking_lot::RwLock` for better performance than `std::sync::RwLock`.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// A thread-safe reader-writer hash map.
pub type ThreadSafeRwMap<K, V> = ThreadSafeRw<HashMap<K, V>>;

/// Create a new `ThreadSafeRw<T>` from a value.
#[inline]
pub fn thread_safe_rw<T>(value: T) -> ThreadSafeRw<T> {
    Arc::new(RwLock::new(value))
}

/// Create a new empty `ThreadSafeRwMap<K, V>`.
#[inline]
pub fn thread_safe_rw_map<K, V>() -> ThreadSafeRwMap<K, V> {
    thread_safe_rw(HashMap::new())
}
