//! Events emitted by the reward engine for subscribers.

use grove_types::PlayerAddress;

/// Reward engine events that observers can subscribe to via the [`EventBus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RewardEvent {
    /// The rarity thresholds were replaced.
    RarityRolls {
        common: u16,
        uncommon: u16,
        rare: u16,
        epic: u16,
        legendary: u16,
        max_roll: u16,
    },
    /// A reward slot was configured. Carries the raw inputs for audit.
    SetReward {
        reward_type: u64,
        slot: u16,
        payload: Vec<u8>,
    },
    /// A claim was dispensed (possibly a zero-reward claim on an unset slot).
    DailyClaim {
        account: PlayerAddress,
        /// The minted SAP amount, or the minted item id for relic rewards.
        amount_or_id: u128,
        reward_type: u64,
        /// The resolved rarity band slot, or the explicitly selected slot.
        rarity_or_slot: u16,
        /// Raw payload bytes of the slot that was dispensed; empty if unset.
        reward_data: Vec<u8>,
    },
}

/// Synchronous fan-out event bus for reward events.
///
/// Listeners are invoked inline on the emitting thread; keep handlers fast
/// to avoid stalling claim processing.
pub struct EventBus {
    listeners: Vec<Box<dyn Fn(&RewardEvent) + Send + Sync>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&RewardEvent) + Send + Sync>) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &RewardEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
