//! The item-loading capability contract.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use payfeed_store::StoreError;
use thiserror::Error;

use crate::ItemViewModel;

/// Opaque failure from a loading path.
///
/// The loading layer never classifies errors: any failure means "this path
/// did not produce data", and whatever message the collaborator reported is
/// carried through verbatim to wherever the composition surfaces it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<StoreError> for LoadError {
    fn from(error: StoreError) -> Self {
        Self::new(error.to_string())
    }
}

/// Outcome of a single `load_items` invocation.
pub type LoadResult = Result<Vec<ItemViewModel>, LoadError>;

/// Boxed future returned by [`ItemsService::load_items`].
pub type LoadFuture<'a> = Pin<Box<dyn Future<Output = LoadResult> + Send + 'a>>;

/// Capability contract: asynchronously produce an ordered list of display
/// rows, or fail.
///
/// Every implementation — leaf adapter or combinator — exposes exactly this
/// one operation with this one signature. That uniformity is what allows
/// unlimited nesting: a composed service is indistinguishable from a leaf to
/// whoever holds it. Implementations deliver the result exactly once, and any
/// side effects (such as cache writes) complete before the future resolves.
pub trait ItemsService: Send + Sync {
    fn load_items(&self) -> LoadFuture<'_>;
}

/// Shared handle to a composed service, as handed to the presentation layer.
pub type SharedItemsService = Arc<dyn ItemsService>;
