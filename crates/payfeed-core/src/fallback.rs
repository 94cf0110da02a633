//! Primary/fallback service composition.

use std::sync::Arc;

use crate::service::{ItemsService, LoadFuture, SharedItemsService};

/// Tries the primary service; on failure, delivers the fallback's result.
///
/// Exactly one of the two results reaches the caller per invocation. Once the
/// fallback is attempted the primary's error is discarded: the fallback's
/// outcome — success or failure — is final. There is no timeout and no
/// partial merge.
pub struct FallbackService {
    primary: SharedItemsService,
    fallback: SharedItemsService,
}

impl FallbackService {
    pub fn new(primary: SharedItemsService, fallback: SharedItemsService) -> Self {
        Self { primary, fallback }
    }
}

impl ItemsService for FallbackService {
    fn load_items(&self) -> LoadFuture<'_> {
        Box::pin(async move {
            match self.primary.load_items().await {
                Ok(items) => Ok(items),
                Err(error) => {
                    tracing::debug!(%error, "primary source failed, trying fallback");
                    self.fallback.load_items().await
                }
            }
        })
    }
}

/// Convenience constructor mirroring how compositions read at the call site.
pub fn with_fallback(primary: SharedItemsService, fallback: SharedItemsService) -> SharedItemsService {
    Arc::new(FallbackService::new(primary, fallback))
}
