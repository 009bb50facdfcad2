//! The relic ledger.

use crate::error::RelicError;
use crate::event::RelicEvent;
use grove_types::{ItemId, PlayerAddress};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The relic ledger — per-account balances and per-id supply counters.
///
/// Invariant: `total_supply(id)` is exactly the units minted minus the
/// units burned for that id and never goes negative (a burn beyond the
/// holder's balance fails). An id exists while its supply is above zero.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RelicLedger {
    /// account → (id → held units). Empty inner entries are pruned.
    balances: HashMap<PlayerAddress, HashMap<ItemId, u64>>,
    /// id → outstanding units.
    supply: HashMap<ItemId, u64>,
    /// owner → operators approved to act on all of the owner's relics.
    approvals: HashMap<PlayerAddress, HashSet<PlayerAddress>>,
}

impl RelicLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, account: &PlayerAddress, id: ItemId) -> u64 {
        self.balances
            .get(account)
            .and_then(|held| held.get(&id))
            .copied()
            .unwrap_or(0)
    }

    /// Outstanding units of `id` across all holders.
    pub fn total_supply(&self, id: ItemId) -> u64 {
        self.supply.get(&id).copied().unwrap_or(0)
    }

    /// Whether any units of `id` are currently outstanding.
    pub fn exists(&self, id: ItemId) -> bool {
        self.total_supply(id) > 0
    }

    /// Approve (or revoke) `operator` to act on all of `owner`'s relics.
    pub fn set_approval_for_all(
        &mut self,
        owner: &PlayerAddress,
        operator: &PlayerAddress,
        approved: bool,
    ) {
        if approved {
            self.approvals
                .entry(owner.clone())
                .or_default()
                .insert(operator.clone());
        } else if let Some(ops) = self.approvals.get_mut(owner) {
            ops.remove(operator);
            if ops.is_empty() {
                self.approvals.remove(owner);
            }
        }
    }

    pub fn is_approved_for_all(&self, owner: &PlayerAddress, operator: &PlayerAddress) -> bool {
        self.approvals
            .get(owner)
            .map_or(false, |ops| ops.contains(operator))
    }

    /// Mint `qty` units of `id` to `account`.
    pub fn mint(
        &mut self,
        account: &PlayerAddress,
        id: ItemId,
        qty: u64,
    ) -> Result<RelicEvent, RelicError> {
        if qty == 0 {
            return Err(RelicError::ZeroQuantity);
        }
        let supply = self
            .total_supply(id)
            .checked_add(qty)
            .ok_or(RelicError::Overflow(id))?;
        let balance = self
            .balance_of(account, id)
            .checked_add(qty)
            .ok_or(RelicError::Overflow(id))?;
        self.supply.insert(id, supply);
        self.balances
            .entry(account.clone())
            .or_default()
            .insert(id, balance);
        Ok(RelicEvent::Minted {
            account: account.clone(),
            id,
            qty,
        })
    }

    /// Burn `qty` units of `id` held by `owner`.
    ///
    /// Only the holder, or an operator the holder approved, may burn.
    pub fn burn(
        &mut self,
        caller: &PlayerAddress,
        owner: &PlayerAddress,
        id: ItemId,
        qty: u64,
    ) -> Result<RelicEvent, RelicError> {
        if qty == 0 {
            return Err(RelicError::ZeroQuantity);
        }
        if caller != owner && !self.is_approved_for_all(owner, caller) {
            return Err(RelicError::NotAuthorized {
                caller: caller.clone(),
                owner: owner.clone(),
            });
        }
        let available = self.balance_of(owner, id);
        if available < qty {
            return Err(RelicError::InsufficientBalance {
                id,
                needed: qty,
                available,
            });
        }
        if available == qty {
            if let Some(held) = self.balances.get_mut(owner) {
                held.remove(&id);
                if held.is_empty() {
                    self.balances.remove(owner);
                }
            }
        } else {
            self.balances
                .entry(owner.clone())
                .or_default()
                .insert(id, available - qty);
        }
        let remaining = self.total_supply(id) - qty;
        if remaining == 0 {
            self.supply.remove(&id);
        } else {
            self.supply.insert(id, remaining);
        }
        Ok(RelicEvent::Burned {
            account: owner.clone(),
            id,
            qty,
        })
    }

    /// Serialize the full ledger state.
    pub fn snapshot(&self) -> Result<Vec<u8>, RelicError> {
        bincode::serialize(self).map_err(|e| RelicError::Snapshot(e.to_string()))
    }

    /// Restore a ledger from a snapshot.
    pub fn restore(bytes: &[u8]) -> Result<Self, RelicError> {
        bincode::deserialize(bytes).map_err(|e| RelicError::Snapshot(e.to_string()))
    }
}
