//! Network capability contracts consumed by the source adapters.
//!
//! One trait per domain, implemented elsewhere by the real transport layer.
//! Each exposes a single asynchronous load of the full entity list; errors
//! arrive on the same opaque channel the rest of the layer uses.

use std::future::Future;
use std::pin::Pin;

use crate::domain::{Card, Friend, Transfer};
use crate::service::LoadError;

/// Boxed future returned by the per-domain load operations.
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<Vec<T>, LoadError>> + Send + 'a>>;

pub trait FriendsApi: Send + Sync {
    fn load(&self) -> ApiFuture<'_, Friend>;
}

pub trait CardsApi: Send + Sync {
    fn load(&self) -> ApiFuture<'_, Card>;
}

pub trait TransfersApi: Send + Sync {
    fn load(&self) -> ApiFuture<'_, Transfer>;
}
