//! Claim orchestration.

use crate::cooldown::{ClaimLedger, CLAIM_PERIOD_SECS};
use crate::error::ClaimError;
use crate::event::{EventBus, RewardEvent};
use crate::rarity::{Band, RarityTable};
use crate::registry::{RewardDescriptor, RewardRegistry, RewardType};
use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use grove_relics::RelicLedger;
use grove_sap::SapLedger;
use grove_types::{ItemId, PlayerAddress, Timestamp};
use serde::{Deserialize, Serialize};

type Blake2b256 = Blake2b<U32>;

/// How a claim picks its reward slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotSelector {
    /// Resolve the slot from the roll via the rarity thresholds.
    ByRarity,
    /// Read this exact slot, bypassing rarity resolution
    /// ("claim this specific reward" flows).
    Slot(u16),
}

/// What a claim actually dispensed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispensed {
    /// The slot was unset (or configured with a zero amount).
    Nothing,
    Sap { amount: u128 },
    Relic { id: ItemId, qty: u64 },
}

/// The result of a successful claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// The resolved rarity band; `None` for explicit-slot claims.
    pub band: Option<Band>,
    /// The registry slot that was read.
    pub slot: u16,
    pub dispensed: Dispensed,
}

/// The claim engine — rarity table, reward slots, cooldowns, dispensing.
///
/// Privileged SAP mints are performed under the engine's `operator`
/// address, which the host grants the game-contract role on the SAP
/// ledger at deployment.
pub struct ClaimEngine {
    pub rarity: RarityTable,
    pub registry: RewardRegistry,
    pub claims: ClaimLedger,
    operator: PlayerAddress,
    pub events: EventBus,
}

/// Serializable engine state (everything except the operator identity and
/// the subscribed listeners).
#[derive(Serialize, Deserialize)]
struct EngineState {
    rarity: RarityTable,
    registry: RewardRegistry,
    claims: ClaimLedger,
}

impl ClaimEngine {
    pub fn new(operator: PlayerAddress) -> Self {
        Self {
            rarity: RarityTable::new(),
            registry: RewardRegistry::new(),
            claims: ClaimLedger::new(),
            operator,
            events: EventBus::new(),
        }
    }

    /// The address this engine mints SAP under.
    pub fn operator(&self) -> &PlayerAddress {
        &self.operator
    }

    /// Replace the rarity thresholds and notify subscribers.
    pub fn set_rarity_rolls(
        &mut self,
        common: u16,
        uncommon: u16,
        rare: u16,
        epic: u16,
        legendary: u16,
        max_roll: u16,
    ) -> Result<(), ClaimError> {
        self.rarity
            .set_rarity_rolls(common, uncommon, rare, epic, legendary, max_roll)?;
        tracing::info!(common, uncommon, rare, epic, legendary, max_roll, "rarity rolls updated");
        self.events.emit(&RewardEvent::RarityRolls {
            common,
            uncommon,
            rare,
            epic,
            legendary,
            max_roll,
        });
        Ok(())
    }

    /// Configure a reward slot and notify subscribers with the raw inputs.
    pub fn set_reward(
        &mut self,
        reward_type: u64,
        slot: u16,
        payload: &[u8],
    ) -> Result<(), ClaimError> {
        self.registry.set_reward(reward_type, slot, payload)?;
        tracing::info!(reward_type, slot, "reward slot configured");
        self.events.emit(&RewardEvent::SetReward {
            reward_type,
            slot,
            payload: payload.to_vec(),
        });
        Ok(())
    }

    /// Dispense a daily claim.
    ///
    /// The whole operation is atomic: the cooldown gate, type validation
    /// and slot resolution run before any mutation, and the claim record is
    /// only written once dispensing has fully succeeded. A failure at any
    /// point leaves every ledger exactly as before the call.
    ///
    /// An unset slot dispenses nothing but still records the claim and
    /// emits a zero-amount log, so an empty configuration cannot be used to
    /// burn a player's daily attempt repeatedly at no cost to the operator.
    #[allow(clippy::too_many_arguments)]
    pub fn claim(
        &mut self,
        sap: &mut SapLedger,
        relics: &mut RelicLedger,
        account: &PlayerAddress,
        context_seed: u64,
        reward_type: u64,
        selector: SlotSelector,
        roll: u16,
        now: Timestamp,
    ) -> Result<ClaimOutcome, ClaimError> {
        if !self.claims.can_claim(account, now) {
            if let Some(last) = self.claims.last_claim(account) {
                let remaining = last.as_secs() + CLAIM_PERIOD_SECS - now.as_secs();
                tracing::debug!(
                    %account,
                    retry_in = %grove_utils::format_duration(remaining),
                    "claim rejected, cooldown not elapsed"
                );
            }
            return Err(ClaimError::CooldownNotElapsed);
        }
        let reward_type = RewardType::try_from(reward_type)?;

        let (band, slot) = match selector {
            SlotSelector::ByRarity => {
                let band = self.rarity.band_of(roll)?;
                (Some(band), band.slot())
            }
            SlotSelector::Slot(slot) => (None, slot),
        };

        let configured = self
            .registry
            .get_with_raw(reward_type, slot)
            .map(|(descriptor, raw)| (descriptor.clone(), raw.to_vec()));

        let dispensed = match &configured {
            None => Dispensed::Nothing,
            Some((RewardDescriptor::Sap { amount }, _)) => {
                if *amount == 0 {
                    Dispensed::Nothing
                } else {
                    sap.game_mint(&self.operator, account, *amount)?;
                    Dispensed::Sap { amount: *amount }
                }
            }
            Some((RewardDescriptor::RelicFromPool { pool }, _)) => {
                let id = pool[pool_index(context_seed, roll, pool.len())];
                relics.mint(account, id, 1)?;
                Dispensed::Relic { id, qty: 1 }
            }
            Some((RewardDescriptor::RelicById { id }, _)) => {
                relics.mint(account, *id, 1)?;
                Dispensed::Relic { id: *id, qty: 1 }
            }
        };

        self.claims.record_claim(account, now);

        let amount_or_id = match dispensed {
            Dispensed::Nothing => 0,
            Dispensed::Sap { amount } => amount,
            Dispensed::Relic { id, .. } => id.raw() as u128,
        };
        let reward_data = configured.map(|(_, raw)| raw).unwrap_or_default();
        tracing::debug!(%account, rarity_or_slot = slot, amount_or_id, "claim dispensed");
        self.events.emit(&RewardEvent::DailyClaim {
            account: account.clone(),
            amount_or_id,
            reward_type: reward_type.code(),
            rarity_or_slot: slot,
            reward_data,
        });

        Ok(ClaimOutcome {
            band,
            slot,
            dispensed,
        })
    }

    /// Serialize thresholds, reward slots and claim records.
    pub fn snapshot(&self) -> Result<Vec<u8>, ClaimError> {
        let state = EngineState {
            rarity: self.rarity.clone(),
            registry: self.registry.clone(),
            claims: self.claims.clone(),
        };
        bincode::serialize(&state).map_err(|e| ClaimError::Snapshot(e.to_string()))
    }

    /// Restore an engine from a snapshot, under a (possibly new) operator.
    pub fn restore(operator: PlayerAddress, bytes: &[u8]) -> Result<Self, ClaimError> {
        let state: EngineState =
            bincode::deserialize(bytes).map_err(|e| ClaimError::Snapshot(e.to_string()))?;
        Ok(Self {
            rarity: state.rarity,
            registry: state.registry,
            claims: state.claims,
            operator,
            events: EventBus::new(),
        })
    }
}

/// Deterministic pool pick: Blake2b over (seed, roll), reduced mod the pool
/// length. Pure in its inputs so reward distribution is reproducible in
/// tests; where the seed and roll come from is the host's trust concern.
fn pool_index(seed: u64, roll: u16, len: usize) -> usize {
    let mut hasher = Blake2b256::new();
    hasher.update(seed.to_be_bytes());
    hasher.update(roll.to_be_bytes());
    let digest = hasher.finalize();
    let word = u64::from_be_bytes(digest[..8].try_into().expect("digest is 32 bytes"));
    (word % len as u64) as usize
}
