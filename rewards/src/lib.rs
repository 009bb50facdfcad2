//! Daily reward engine.
//!
//! A claim rolls against the configured rarity thresholds, looks up the
//! reward slot for the resolved band (or an explicitly selected slot),
//! dispenses SAP or a relic, and records the claimer's cooldown — all as a
//! single atomic operation against the ledgers.

pub mod cooldown;
pub mod engine;
pub mod error;
pub mod event;
pub mod rarity;
pub mod registry;

pub use cooldown::{ClaimLedger, CLAIM_PERIOD_SECS};
pub use engine::{ClaimEngine, ClaimOutcome, Dispensed, SlotSelector};
pub use error::ClaimError;
pub use event::{EventBus, RewardEvent};
pub use rarity::{Band, RarityError, RarityTable};
pub use registry::{RewardDescriptor, RewardError, RewardPayload, RewardRegistry, RewardType};
