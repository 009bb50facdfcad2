//! Reward slot configuration.
//!
//! A slot is keyed by (reward type, slot index) and holds a descriptor
//! decoded once at configuration time — claims never re-parse payload
//! bytes, and a malformed payload is rejected before anything is written.

use grove_types::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Reward registry errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewardError {
    #[error("wrong reward type {0}")]
    WrongRewardType(u64),

    #[error("malformed reward payload: {0}")]
    MalformedPayload(String),

    #[error("unknown reward payload kind {0}")]
    UnknownPayloadKind(u8),

    #[error("item pool must not be empty")]
    EmptyPool,

    #[error("explicit item reward must name exactly one id, got {0}")]
    NotSingleId(usize),
}

/// The fixed enumeration of configurable reward types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RewardType {
    /// Fungible SAP currency.
    Sap,
    /// Semi-fungible relic.
    Relic,
}

impl RewardType {
    /// The wire code used by configuration calls and claim logs.
    pub fn code(&self) -> u64 {
        match self {
            RewardType::Sap => 0,
            RewardType::Relic => 1,
        }
    }
}

impl TryFrom<u64> for RewardType {
    type Error = RewardError;

    fn try_from(code: u64) -> Result<Self, RewardError> {
        match code {
            0 => Ok(RewardType::Sap),
            1 => Ok(RewardType::Relic),
            other => Err(RewardError::WrongRewardType(other)),
        }
    }
}

/// Wire shape of a reward payload: (kind, amount, candidate item ids),
/// bincode-encoded. Produced by configuration tooling, decoded here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RewardPayload {
    pub kind: u8,
    pub amount: u128,
    pub item_ids: Vec<u64>,
}

impl RewardPayload {
    pub fn encode(&self) -> Vec<u8> {
        bincode::serialize(self).expect("reward payload serialization cannot fail")
    }
}

/// What a configured slot dispenses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardDescriptor {
    /// Mint a fixed amount of SAP.
    Sap { amount: u128 },
    /// Mint one unit of an id picked from the pool.
    RelicFromPool { pool: Vec<ItemId> },
    /// Mint one unit of exactly this id.
    RelicById { id: ItemId },
}

impl RewardDescriptor {
    /// Decode a payload blob into a descriptor.
    ///
    /// Hard failure on malformed bytes, unknown kind, or an invalid shape
    /// for the kind — nothing is ever stored from a payload that does not
    /// fully decode.
    pub fn decode(payload: &[u8]) -> Result<Self, RewardError> {
        let raw: RewardPayload = bincode::deserialize(payload)
            .map_err(|e| RewardError::MalformedPayload(e.to_string()))?;
        match raw.kind {
            0 => Ok(RewardDescriptor::Sap { amount: raw.amount }),
            1 => {
                if raw.item_ids.is_empty() {
                    return Err(RewardError::EmptyPool);
                }
                Ok(RewardDescriptor::RelicFromPool {
                    pool: raw.item_ids.into_iter().map(ItemId::new).collect(),
                })
            }
            2 => {
                if raw.item_ids.len() != 1 {
                    return Err(RewardError::NotSingleId(raw.item_ids.len()));
                }
                Ok(RewardDescriptor::RelicById {
                    id: ItemId::new(raw.item_ids[0]),
                })
            }
            other => Err(RewardError::UnknownPayloadKind(other)),
        }
    }
}

/// A stored slot: the decoded descriptor plus the raw bytes it came from.
/// The raw bytes are replayed verbatim into claim logs for auditability.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredReward {
    descriptor: RewardDescriptor,
    raw: Vec<u8>,
}

/// The reward slot table. Slots are independently settable; last write wins.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RewardRegistry {
    slots: HashMap<(RewardType, u16), StoredReward>,
}

impl RewardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure (or overwrite) the slot at `(reward_type, slot)`.
    ///
    /// Returns the validated reward type so callers can echo it into their
    /// configuration event.
    pub fn set_reward(
        &mut self,
        reward_type: u64,
        slot: u16,
        payload: &[u8],
    ) -> Result<RewardType, RewardError> {
        let reward_type = RewardType::try_from(reward_type)?;
        let descriptor = RewardDescriptor::decode(payload)?;
        self.slots.insert(
            (reward_type, slot),
            StoredReward {
                descriptor,
                raw: payload.to_vec(),
            },
        );
        Ok(reward_type)
    }

    /// The descriptor configured at `(reward_type, slot)`, if any.
    pub fn get(&self, reward_type: RewardType, slot: u16) -> Option<&RewardDescriptor> {
        self.slots.get(&(reward_type, slot)).map(|s| &s.descriptor)
    }

    /// Descriptor plus the raw payload bytes it was configured with.
    pub fn get_with_raw(
        &self,
        reward_type: RewardType,
        slot: u16,
    ) -> Option<(&RewardDescriptor, &[u8])> {
        self.slots
            .get(&(reward_type, slot))
            .map(|s| (&s.descriptor, s.raw.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
