//! Claim engine errors.

use crate::rarity::RarityError;
use crate::registry::RewardError;
use grove_relics::RelicError;
use grove_sap::SapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("can claim only once per day")]
    CooldownNotElapsed,

    #[error(transparent)]
    Rarity(#[from] RarityError),

    #[error(transparent)]
    Reward(#[from] RewardError),

    #[error(transparent)]
    Sap(#[from] SapError),

    #[error(transparent)]
    Relic(#[from] RelicError),

    #[error("snapshot codec error: {0}")]
    Snapshot(String),
}
