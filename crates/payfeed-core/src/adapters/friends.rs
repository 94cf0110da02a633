//! Friends list adapters: network with write-through, and cache-backed read.

use std::sync::Arc;

use payfeed_store::SnapshotStore;

use crate::api::FriendsApi;
use crate::domain::Friend;
use crate::service::{ItemsService, LoadError, LoadFuture};
use crate::view_model::{ItemViewModel, SelectionHandler};

/// Loads friends from the network and writes the fresh list through to the
/// snapshot store before delivering.
///
/// The write-through happens on every successful load, whether the store is
/// real or the null variant; a failed write is logged and never changes the
/// outcome. Failures from the wrapped capability are forwarded verbatim.
pub struct FriendsAdapter {
    api: Arc<dyn FriendsApi>,
    store: Arc<dyn SnapshotStore<Friend>>,
    on_select: SelectionHandler<Friend>,
}

impl FriendsAdapter {
    pub fn new(
        api: Arc<dyn FriendsApi>,
        store: Arc<dyn SnapshotStore<Friend>>,
        on_select: SelectionHandler<Friend>,
    ) -> Self {
        Self {
            api,
            store,
            on_select,
        }
    }
}

impl ItemsService for FriendsAdapter {
    fn load_items(&self) -> LoadFuture<'_> {
        Box::pin(async move {
            let friends = self.api.load().await?;
            if let Err(error) = self.store.persist(friends.clone()).await {
                tracing::warn!(%error, "friends write-through failed");
            }
            Ok(map_friends(friends, &self.on_select))
        })
    }
}

/// Loads friends from the snapshot store instead of the network.
///
/// Same mapping and selection behavior as [`FriendsAdapter`]; reads do not
/// re-persist. A miss surfaces as a load failure.
pub struct CachedFriendsAdapter {
    store: Arc<dyn SnapshotStore<Friend>>,
    on_select: SelectionHandler<Friend>,
}

impl CachedFriendsAdapter {
    pub fn new(store: Arc<dyn SnapshotStore<Friend>>, on_select: SelectionHandler<Friend>) -> Self {
        Self { store, on_select }
    }
}

impl ItemsService for CachedFriendsAdapter {
    fn load_items(&self) -> LoadFuture<'_> {
        Box::pin(async move {
            let friends = self.store.load().await.map_err(LoadError::from)?;
            Ok(map_friends(friends, &self.on_select))
        })
    }
}

fn map_friends(friends: Vec<Friend>, on_select: &SelectionHandler<Friend>) -> Vec<ItemViewModel> {
    friends
        .into_iter()
        .map(|friend| {
            let handler = Arc::clone(on_select);
            let title = friend.name.clone();
            let subtitle = friend.phone.clone();
            ItemViewModel::new(title, subtitle, move || handler(friend.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use payfeed_store::{MemoryStore, NullStore, StoreError};
    use std::sync::Mutex;

    struct StubFriendsApi {
        outcome: Result<Vec<Friend>, LoadError>,
    }

    impl FriendsApi for StubFriendsApi {
        fn load(&self) -> crate::api::ApiFuture<'_, Friend> {
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    fn ignore_selection() -> SelectionHandler<Friend> {
        Arc::new(|_friend| {})
    }

    fn sample_friends() -> Vec<Friend> {
        vec![Friend::new("Ana", "+1 555 0100"), Friend::new("Bo", "+1 555 0101")]
    }

    #[tokio::test]
    async fn maps_loaded_friends_to_view_models() {
        let api = Arc::new(StubFriendsApi {
            outcome: Ok(sample_friends()),
        });
        let adapter = FriendsAdapter::new(api, Arc::new(NullStore::new()), ignore_selection());

        let items = adapter.load_items().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), "Ana");
        assert_eq!(items[0].subtitle(), "+1 555 0100");
        assert_eq!(items[1].title(), "Bo");
    }

    #[tokio::test]
    async fn persists_fresh_list_before_delivering() {
        let friends = sample_friends();
        let api = Arc::new(StubFriendsApi {
            outcome: Ok(friends.clone()),
        });
        let store = Arc::new(MemoryStore::new());
        let adapter = FriendsAdapter::new(api, store.clone(), ignore_selection());

        adapter.load_items().await.unwrap();

        assert_eq!(store.load().await.unwrap(), friends);
    }

    #[tokio::test]
    async fn forwards_api_failures_verbatim_without_persisting() {
        let api = Arc::new(StubFriendsApi {
            outcome: Err(LoadError::new("connectivity")),
        });
        let store = Arc::new(MemoryStore::new());
        let adapter = FriendsAdapter::new(api, store.clone(), ignore_selection());

        let error = adapter.load_items().await.unwrap_err();

        assert_eq!(error, LoadError::new("connectivity"));
        assert_eq!(store.load().await.unwrap_err(), StoreError::Empty);
    }

    #[tokio::test]
    async fn cached_adapter_reads_from_the_store() {
        let friends = sample_friends();
        let store = Arc::new(MemoryStore::new());
        store.persist(friends.clone()).await.unwrap();
        let adapter = CachedFriendsAdapter::new(store, ignore_selection());

        let items = adapter.load_items().await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), friends[0].name);
    }

    #[tokio::test]
    async fn cached_adapter_miss_surfaces_as_failure() {
        let adapter = CachedFriendsAdapter::new(
            Arc::new(MemoryStore::new()),
            ignore_selection(),
        );

        let error = adapter.load_items().await.unwrap_err();
        assert_eq!(error, LoadError::from(StoreError::Empty));
    }

    #[tokio::test]
    async fn selection_reports_the_original_friend() {
        let friends = sample_friends();
        let api = Arc::new(StubFriendsApi {
            outcome: Ok(friends.clone()),
        });
        let selected: Arc<Mutex<Vec<Friend>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&selected);
        let adapter = FriendsAdapter::new(
            api,
            Arc::new(NullStore::new()),
            Arc::new(move |friend| sink.lock().unwrap().push(friend)),
        );

        let items = adapter.load_items().await.unwrap();
        items[1].select();

        assert_eq!(*selected.lock().unwrap(), vec![friends[1].clone()]);
    }
}
