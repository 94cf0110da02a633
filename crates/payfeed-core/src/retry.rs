//! Retry expressed as fallback composition.

use std::sync::Arc;

use crate::fallback::FallbackService;
use crate::service::SharedItemsService;

/// Wraps `service` so that a failure triggers up to `retries` additional
/// attempts against the same service, the last attempt's outcome winning.
///
/// This is pure reuse of [`FallbackService`]: the service is chained as its
/// own fallback, once per retry. There is no retry state machine, no backoff
/// and no jitter — attempts are immediate, and any failure triggers the next
/// one regardless of its kind. `retries == 0` returns the service unchanged.
pub fn retrying(service: SharedItemsService, retries: u32) -> SharedItemsService {
    let base = Arc::clone(&service);
    (0..retries).fold(service, |chain, _| {
        Arc::new(FallbackService::new(chain, Arc::clone(&base))) as SharedItemsService
    })
}
