//! Composable data-loading strategies for payfeed list screens.
//!
//! This crate contains:
//! - Canonical domain entities and display view models
//! - The `ItemsService` capability contract and its opaque error channel
//! - Source adapters wrapping the network and snapshot-store collaborators
//! - Fallback and retry combinators over the same contract
//! - UI-context dispatch for display-facing delivery
//! - Tier-based composition of the above

pub mod adapters;
pub mod api;
pub mod composition;
pub mod dispatch;
pub mod domain;
pub mod fallback;
pub mod retry;
pub mod service;
pub mod testing;
pub mod view_model;

pub use adapters::{CachedFriendsAdapter, CardsAdapter, FriendsAdapter, TransfersAdapter};
pub use api::{ApiFuture, CardsApi, FriendsApi, TransfersApi};
pub use composition::{
    cards_service, friends_service, premium_friends_service, received_transfers_service,
    sent_transfers_service, standard_friends_service,
};
pub use dispatch::{deliver_items, UiContext, UiLoop};
pub use domain::{Card, Friend, Transfer, TransferDirection};
pub use fallback::{with_fallback, FallbackService};
pub use payfeed_store::{MemoryStore, NullStore, SnapshotStore, StoreError, StoreResult};
pub use retry::retrying;
pub use service::{ItemsService, LoadError, LoadFuture, LoadResult, SharedItemsService};
pub use view_model::{DateStyle, ItemViewModel, SelectionHandler};
