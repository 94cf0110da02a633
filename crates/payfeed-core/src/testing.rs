//! Scripted collaborator doubles for exercising compositions without real
//! transports, in the spirit of the mock-mode adapters used elsewhere in the
//! workspace. These panic on misuse (an exhausted script) rather than guess.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use payfeed_store::{MemoryStore, SnapshotStore, StoreFuture};

use crate::api::{ApiFuture, CardsApi, FriendsApi, TransfersApi};
use crate::domain::{Card, Friend, Transfer};
use crate::service::{ItemsService, LoadFuture, LoadResult};

enum ScriptMode<R> {
    Repeat(R),
    Sequence(VecDeque<R>),
}

/// Outcome script shared by the doubles below: either one outcome repeated
/// forever, or a finite sequence consumed one invocation at a time.
struct Script<R> {
    mode: Mutex<ScriptMode<R>>,
    invocations: AtomicUsize,
}

impl<R: Clone> Script<R> {
    fn always(outcome: R) -> Self {
        Self {
            mode: Mutex::new(ScriptMode::Repeat(outcome)),
            invocations: AtomicUsize::new(0),
        }
    }

    fn sequence(outcomes: Vec<R>) -> Self {
        Self {
            mode: Mutex::new(ScriptMode::Sequence(outcomes.into())),
            invocations: AtomicUsize::new(0),
        }
    }

    fn next(&self) -> R {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        match &mut *self.mode.lock().unwrap() {
            ScriptMode::Repeat(outcome) => outcome.clone(),
            ScriptMode::Sequence(queue) => queue.pop_front().expect("script exhausted"),
        }
    }

    fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

/// An [`ItemsService`] that replays scripted outcomes and counts invocations.
pub struct ScriptedService {
    script: Script<LoadResult>,
}

impl ScriptedService {
    pub fn always(outcome: LoadResult) -> Arc<Self> {
        Arc::new(Self {
            script: Script::always(outcome),
        })
    }

    pub fn sequence(outcomes: Vec<LoadResult>) -> Arc<Self> {
        Arc::new(Self {
            script: Script::sequence(outcomes),
        })
    }

    pub fn invocations(&self) -> usize {
        self.script.invocations()
    }
}

impl ItemsService for ScriptedService {
    fn load_items(&self) -> LoadFuture<'_> {
        let outcome = self.script.next();
        Box::pin(async move { outcome })
    }
}

macro_rules! scripted_api {
    ($name:ident, $trait:ident, $entity:ty) => {
        #[doc = concat!("A scripted [`", stringify!($trait), "`] double.")]
        pub struct $name {
            script: Script<Result<Vec<$entity>, crate::service::LoadError>>,
        }

        impl $name {
            pub fn always(outcome: Result<Vec<$entity>, crate::service::LoadError>) -> Arc<Self> {
                Arc::new(Self {
                    script: Script::always(outcome),
                })
            }

            pub fn sequence(
                outcomes: Vec<Result<Vec<$entity>, crate::service::LoadError>>,
            ) -> Arc<Self> {
                Arc::new(Self {
                    script: Script::sequence(outcomes),
                })
            }

            pub fn invocations(&self) -> usize {
                self.script.invocations()
            }
        }

        impl $trait for $name {
            fn load(&self) -> ApiFuture<'_, $entity> {
                let outcome = self.script.next();
                Box::pin(async move { outcome })
            }
        }
    };
}

scripted_api!(ScriptedFriendsApi, FriendsApi, Friend);
scripted_api!(ScriptedCardsApi, CardsApi, Card);
scripted_api!(ScriptedTransfersApi, TransfersApi, Transfer);

/// A snapshot store that records every persisted list while behaving like
/// [`MemoryStore`].
pub struct CountingStore<T> {
    inner: MemoryStore<T>,
    persisted: Mutex<Vec<Vec<T>>>,
}

impl<T> CountingStore<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: MemoryStore::new(),
            persisted: Mutex::new(Vec::new()),
        })
    }

    pub fn persist_calls(&self) -> usize {
        self.persisted.lock().unwrap().len()
    }
}

impl<T: Clone> CountingStore<T> {
    /// Every list handed to `persist`, in call order.
    pub fn persisted(&self) -> Vec<Vec<T>> {
        self.persisted.lock().unwrap().clone()
    }
}

impl<T> SnapshotStore<T> for CountingStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn persist(&self, items: Vec<T>) -> StoreFuture<'_, ()> {
        self.persisted.lock().unwrap().push(items.clone());
        self.inner.persist(items)
    }

    fn load(&self) -> StoreFuture<'_, Vec<T>> {
        self.inner.load()
    }
}
