//! Cards list adapter.

use std::sync::Arc;

use crate::api::CardsApi;
use crate::domain::Card;
use crate::service::{ItemsService, LoadFuture};
use crate::view_model::{ItemViewModel, SelectionHandler};

/// Loads the user's cards and maps them to masked display rows.
pub struct CardsAdapter {
    api: Arc<dyn CardsApi>,
    on_select: SelectionHandler<Card>,
}

impl CardsAdapter {
    pub fn new(api: Arc<dyn CardsApi>, on_select: SelectionHandler<Card>) -> Self {
        Self { api, on_select }
    }
}

impl ItemsService for CardsAdapter {
    fn load_items(&self) -> LoadFuture<'_> {
        Box::pin(async move {
            let cards = self.api.load().await?;
            Ok(cards
                .into_iter()
                .map(|card| {
                    let handler = Arc::clone(&self.on_select);
                    let title = format!("**** {}", card.last_four);
                    let subtitle = card.holder.clone();
                    ItemViewModel::new(title, subtitle, move || handler(card.clone()))
                })
                .collect())
        })
    }
}
