//! Leaf adapters wrapping one external capability each behind [`ItemsService`].
//!
//! [`ItemsService`]: crate::ItemsService

mod cards;
mod friends;
mod transfers;

pub use cards::CardsAdapter;
pub use friends::{CachedFriendsAdapter, FriendsAdapter};
pub use transfers::TransfersAdapter;
