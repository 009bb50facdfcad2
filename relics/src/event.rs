//! Notifications emitted by relic ledger mutations.

use grove_types::{ItemId, PlayerAddress};

/// A notification describing a completed relic mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelicEvent {
    Minted {
        account: PlayerAddress,
        id: ItemId,
        qty: u64,
    },
    Burned {
        account: PlayerAddress,
        id: ItemId,
        qty: u64,
    },
}
