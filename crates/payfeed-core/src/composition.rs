//! Tier-based strategy assembly.
//!
//! Pure wiring: given collaborator handles and the caller-determined premium
//! flag, these functions assemble the adapter/combinator tree each list
//! screen uses. The presentation layer receives one [`SharedItemsService`]
//! per screen and never reaches into the composition.

use std::sync::Arc;

use payfeed_store::{NullStore, SnapshotStore};

use crate::adapters::{CachedFriendsAdapter, CardsAdapter, FriendsAdapter, TransfersAdapter};
use crate::api::{CardsApi, FriendsApi, TransfersApi};
use crate::domain::{Card, Friend, Transfer};
use crate::fallback::with_fallback;
use crate::retry::retrying;
use crate::service::SharedItemsService;
use crate::view_model::SelectionHandler;

/// Network attempts beyond the first for the friends list.
const FRIENDS_RETRIES: u32 = 2;
/// Network attempts beyond the first for either transfers list.
const TRANSFERS_RETRIES: u32 = 1;

/// Friends strategy for the given tier.
pub fn friends_service(
    api: Arc<dyn FriendsApi>,
    store: Arc<dyn SnapshotStore<Friend>>,
    on_select: SelectionHandler<Friend>,
    is_premium: bool,
) -> SharedItemsService {
    if is_premium {
        premium_friends_service(api, store, on_select)
    } else {
        standard_friends_service(api, on_select)
    }
}

/// Premium tier: the network adapter writes through to the real store and is
/// retried twice; when all three attempts fail, the last cached list is
/// served instead.
pub fn premium_friends_service(
    api: Arc<dyn FriendsApi>,
    store: Arc<dyn SnapshotStore<Friend>>,
    on_select: SelectionHandler<Friend>,
) -> SharedItemsService {
    let network = Arc::new(FriendsAdapter::new(
        api,
        Arc::clone(&store),
        Arc::clone(&on_select),
    ));
    let cached = Arc::new(CachedFriendsAdapter::new(store, on_select));
    with_fallback(retrying(network, FRIENDS_RETRIES), cached)
}

/// Non-premium tier: same retried network adapter, but wired to the null
/// store and with no fallback — failures propagate directly.
pub fn standard_friends_service(
    api: Arc<dyn FriendsApi>,
    on_select: SelectionHandler<Friend>,
) -> SharedItemsService {
    let network = Arc::new(FriendsAdapter::new(
        api,
        Arc::new(NullStore::new()),
        on_select,
    ));
    retrying(network, FRIENDS_RETRIES)
}

/// Cards carry no resilience wiring at all.
pub fn cards_service(
    api: Arc<dyn CardsApi>,
    on_select: SelectionHandler<Card>,
) -> SharedItemsService {
    Arc::new(CardsAdapter::new(api, on_select))
}

pub fn sent_transfers_service(
    api: Arc<dyn TransfersApi>,
    on_select: SelectionHandler<Transfer>,
) -> SharedItemsService {
    retrying(
        Arc::new(TransfersAdapter::sent(api, on_select)),
        TRANSFERS_RETRIES,
    )
}

pub fn received_transfers_service(
    api: Arc<dyn TransfersApi>,
    on_select: SelectionHandler<Transfer>,
) -> SharedItemsService {
    retrying(
        Arc::new(TransfersAdapter::received(api, on_select)),
        TRANSFERS_RETRIES,
    )
}
