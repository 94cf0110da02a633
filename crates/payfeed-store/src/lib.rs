//! Snapshot store capability for payfeed.
//!
//! This crate contains:
//! - The [`SnapshotStore`] trait consumed by cache-aware adapters
//! - [`MemoryStore`], a thread-safe in-memory implementation
//! - [`NullStore`], a no-op implementation used to disable caching without
//!   branching at call sites

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;

/// Errors reported by snapshot store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No snapshot has ever been persisted; a read is a miss.
    #[error("no snapshot has been persisted")]
    Empty,
    /// The underlying storage backend failed.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// A specialized `Result` for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Boxed future returned by store operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = StoreResult<T>> + Send + 'a>>;

/// Whole-list snapshot persistence contract.
///
/// A store holds at most one snapshot: `persist` replaces whatever was there
/// before, and `load` returns the most recently persisted list. Reads from a
/// store that was never written fail with [`StoreError::Empty`].
pub trait SnapshotStore<T>: Send + Sync {
    /// Replaces the stored snapshot with `items`.
    fn persist(&self, items: Vec<T>) -> StoreFuture<'_, ()>;

    /// Returns the most recently persisted snapshot.
    fn load(&self) -> StoreFuture<'_, Vec<T>>;
}

/// Thread-safe in-memory snapshot store.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    inner: Arc<tokio::sync::RwLock<Option<Vec<T>>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(tokio::sync::RwLock::new(None)),
        }
    }
}

impl<T> SnapshotStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn persist(&self, items: Vec<T>) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            let mut snapshot = self.inner.write().await;
            *snapshot = Some(items);
            Ok(())
        })
    }

    fn load(&self) -> StoreFuture<'_, Vec<T>> {
        Box::pin(async move {
            let snapshot = self.inner.read().await;
            snapshot.clone().ok_or(StoreError::Empty)
        })
    }
}

/// Null-object snapshot store.
///
/// `persist` accepts and discards any snapshot; `load` always misses. Wiring
/// this in place of a real store disables caching for a composition without
/// introducing a conditional at every call site.
#[derive(Debug)]
pub struct NullStore<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> NullStore<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for NullStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NullStore<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> SnapshotStore<T> for NullStore<T>
where
    T: Send + Sync + 'static,
{
    fn persist(&self, _items: Vec<T>) -> StoreFuture<'_, ()> {
        Box::pin(async { Ok(()) })
    }

    fn load(&self) -> StoreFuture<'_, Vec<T>> {
        Box::pin(async { Err(StoreError::Empty) })
    }
}
