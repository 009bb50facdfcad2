//! Relic ledger errors.

use grove_types::{ItemId, PlayerAddress};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelicError {
    #[error("{caller} is not the holder of the tokens and has no operator approval from {owner}")]
    NotAuthorized {
        caller: PlayerAddress,
        owner: PlayerAddress,
    },

    #[error("insufficient {id}: need {needed}, available {available}")]
    InsufficientBalance {
        id: ItemId,
        needed: u64,
        available: u64,
    },

    #[error("quantity must be non-zero")]
    ZeroQuantity,

    #[error("arithmetic overflow in {0} supply")]
    Overflow(ItemId),

    #[error("snapshot codec error: {0}")]
    Snapshot(String),
}
