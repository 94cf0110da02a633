//! Domain entities delivered by the network and store collaborators.
//!
//! These are opaque records as far as the loading layer is concerned: the core
//! reads the fields it needs for display and filtering, and never mutates
//! them.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A contact the user can send money to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
}

impl Friend {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// A payment card registered to the user's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub holder: String,
    /// Last four digits of the card number; the full number never reaches
    /// this layer.
    pub last_four: String,
}

impl Card {
    pub fn new(holder: impl Into<String>, last_four: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            holder: holder.into(),
            last_four: last_four.into(),
        }
    }
}

/// Direction of a transfer relative to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferDirection {
    /// The user initiated the transfer.
    Sent,
    /// The user was the recipient.
    Received,
}

/// A money transfer between the user and a counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: Uuid,
    pub counterpart: String,
    pub amount_cents: i64,
    pub currency: String,
    pub direction: TransferDirection,
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
}

impl Transfer {
    pub fn new(
        counterpart: impl Into<String>,
        amount_cents: i64,
        currency: impl Into<String>,
        direction: TransferDirection,
        occurred_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            counterpart: counterpart.into(),
            amount_cents,
            currency: currency.into(),
            direction,
            occurred_at,
        }
    }

    /// Renders the amount as `"12.34 USD"`.
    pub fn formatted_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!("{sign}{}.{:02} {}", cents / 100, cents % 100, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn formatted_amount_pads_cents() {
        let transfer = Transfer::new(
            "Ana",
            1_205,
            "USD",
            TransferDirection::Sent,
            datetime!(2026-03-14 09:26:00 UTC),
        );
        assert_eq!(transfer.formatted_amount(), "12.05 USD");
    }

    #[test]
    fn formatted_amount_handles_negative_values() {
        let transfer = Transfer::new(
            "Bo",
            -50,
            "EUR",
            TransferDirection::Received,
            datetime!(2026-03-14 09:26:00 UTC),
        );
        assert_eq!(transfer.formatted_amount(), "-0.50 EUR");
    }
}
