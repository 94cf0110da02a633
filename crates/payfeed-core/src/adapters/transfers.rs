//! Sent and received transfer list adapters.
//!
//! Both directions share one capability: the API returns the full transfer
//! history, and each adapter keeps only its own direction before mapping.
//! Sent rows render a long-form date, received rows a short-form one.

use std::sync::Arc;

use time::macros::format_description;
use time::OffsetDateTime;

use crate::api::TransfersApi;
use crate::domain::{Transfer, TransferDirection};
use crate::service::{ItemsService, LoadFuture};
use crate::view_model::{DateStyle, ItemViewModel, SelectionHandler};

pub struct TransfersAdapter {
    api: Arc<dyn TransfersApi>,
    direction: TransferDirection,
    on_select: SelectionHandler<Transfer>,
}

impl TransfersAdapter {
    /// Adapter for transfers the user initiated.
    pub fn sent(api: Arc<dyn TransfersApi>, on_select: SelectionHandler<Transfer>) -> Self {
        Self {
            api,
            direction: TransferDirection::Sent,
            on_select,
        }
    }

    /// Adapter for transfers the user received.
    pub fn received(api: Arc<dyn TransfersApi>, on_select: SelectionHandler<Transfer>) -> Self {
        Self {
            api,
            direction: TransferDirection::Received,
            on_select,
        }
    }

    const fn date_style(&self) -> DateStyle {
        match self.direction {
            TransferDirection::Sent => DateStyle::Long,
            TransferDirection::Received => DateStyle::Short,
        }
    }
}

impl ItemsService for TransfersAdapter {
    fn load_items(&self) -> LoadFuture<'_> {
        Box::pin(async move {
            let transfers = self.api.load().await?;
            let style = self.date_style();
            Ok(transfers
                .into_iter()
                .filter(|transfer| transfer.direction == self.direction)
                .map(|transfer| {
                    let handler = Arc::clone(&self.on_select);
                    let title = transfer.counterpart.clone();
                    let subtitle = format!(
                        "{} on {}",
                        transfer.formatted_amount(),
                        format_date(transfer.occurred_at, style)
                    );
                    ItemViewModel::new(title, subtitle, move || handler(transfer.clone()))
                        .with_date_style(style)
                })
                .collect())
        })
    }
}

fn format_date(occurred_at: OffsetDateTime, style: DateStyle) -> String {
    let description = match style {
        DateStyle::Long => format_description!(
            "[month repr:long] [day padding:none], [year] at [hour repr:12 padding:none]:[minute] [period case:upper]"
        ),
        DateStyle::Short => format_description!("[month]/[day]/[year repr:last_two]"),
    };
    occurred_at
        .format(description)
        .unwrap_or_else(|_| occurred_at.to_string())
}
