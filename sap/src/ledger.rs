//! The SAP currency ledger.

use crate::error::SapError;
use crate::event::SapEvent;
use crate::roles::{Role, RoleTable};
use grove_types::PlayerAddress;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The SAP ledger — balances, bridging, and role-gated game operations.
///
/// Invariant: the sum of all balances equals `total_supply`. Deposits and
/// mints increase supply; withdrawals and burns decrease it. All arithmetic
/// is checked; overflow is an error, never a wrap.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SapLedger {
    balances: HashMap<PlayerAddress, u128>,
    total_supply: u128,
    /// Role grants for privileged operations.
    pub roles: RoleTable,
}

impl SapLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, account: &PlayerAddress) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    pub fn grant_role(&mut self, account: &PlayerAddress, role: Role) {
        self.roles.grant(account, role);
    }

    pub fn revoke_role(&mut self, account: &PlayerAddress, role: Role) {
        self.roles.revoke(account, role);
    }

    pub fn has_role(&self, account: &PlayerAddress, role: Role) -> bool {
        self.roles.has(account, role)
    }

    /// Standard holder-authorized transfer.
    ///
    /// The host ledger guarantees `from` is the transaction signer; this
    /// operation only enforces balance sufficiency.
    pub fn transfer(
        &mut self,
        from: &PlayerAddress,
        to: &PlayerAddress,
        amount: u128,
    ) -> Result<SapEvent, SapError> {
        self.move_balance(from, to, amount)?;
        Ok(SapEvent::Transfer {
            from: Some(from.clone()),
            to: Some(to.clone()),
            amount,
        })
    }

    /// Bridge entry: mint deposited root-chain value to `account`.
    ///
    /// Only the depositor role may call this. The payload is a
    /// bincode-encoded u128 amount; a payload that fails to decode to a
    /// positive amount fails with [`SapError::DepositFailed`] and mints
    /// nothing.
    pub fn deposit(
        &mut self,
        caller: &PlayerAddress,
        account: &PlayerAddress,
        payload: &[u8],
    ) -> Result<SapEvent, SapError> {
        self.roles.require(caller, Role::Depositor)?;
        let amount = decode_deposit_amount(payload)?;
        self.credit(account, amount)?;
        Ok(SapEvent::Transfer {
            from: None,
            to: Some(account.clone()),
            amount,
        })
    }

    /// Bridge exit: the caller burns `amount` from their own balance.
    pub fn withdraw(
        &mut self,
        caller: &PlayerAddress,
        amount: u128,
    ) -> Result<SapEvent, SapError> {
        self.debit(caller, amount)?;
        Ok(SapEvent::Transfer {
            from: Some(caller.clone()),
            to: None,
            amount,
        })
    }

    /// Administrative mint, master role only.
    pub fn mint(
        &mut self,
        caller: &PlayerAddress,
        account: &PlayerAddress,
        amount: u128,
    ) -> Result<SapEvent, SapError> {
        self.roles.require(caller, Role::Master)?;
        self.credit(account, amount)?;
        Ok(SapEvent::Transfer {
            from: None,
            to: Some(account.clone()),
            amount,
        })
    }

    /// Game economy mint, contract role only.
    pub fn game_mint(
        &mut self,
        caller: &PlayerAddress,
        account: &PlayerAddress,
        amount: u128,
    ) -> Result<SapEvent, SapError> {
        self.roles.require(caller, Role::GameContract)?;
        self.credit(account, amount)?;
        Ok(SapEvent::GameMint {
            account: account.clone(),
            amount,
        })
    }

    /// Game economy burn, contract role only.
    pub fn game_burn(
        &mut self,
        caller: &PlayerAddress,
        account: &PlayerAddress,
        amount: u128,
    ) -> Result<SapEvent, SapError> {
        self.roles.require(caller, Role::GameContract)?;
        self.debit(account, amount)?;
        Ok(SapEvent::GameBurn {
            account: account.clone(),
            amount,
        })
    }

    /// Game economy transfer bypassing holder authorization, contract role only.
    pub fn game_transfer_from(
        &mut self,
        caller: &PlayerAddress,
        from: &PlayerAddress,
        to: &PlayerAddress,
        amount: u128,
    ) -> Result<SapEvent, SapError> {
        self.roles.require(caller, Role::GameContract)?;
        self.move_balance(from, to, amount)?;
        Ok(SapEvent::GameTransferFrom {
            from: from.clone(),
            to: to.clone(),
            amount,
        })
    }

    /// Game economy bridge exit on behalf of `account`, contract role only.
    pub fn game_withdraw(
        &mut self,
        caller: &PlayerAddress,
        account: &PlayerAddress,
        amount: u128,
    ) -> Result<SapEvent, SapError> {
        self.roles.require(caller, Role::GameContract)?;
        self.debit(account, amount)?;
        Ok(SapEvent::GameWithdraw {
            account: account.clone(),
            amount,
        })
    }

    /// Serialize the full ledger state (balances, supply, roles).
    pub fn snapshot(&self) -> Result<Vec<u8>, SapError> {
        bincode::serialize(self).map_err(|e| SapError::Snapshot(e.to_string()))
    }

    /// Restore a ledger from a snapshot.
    pub fn restore(bytes: &[u8]) -> Result<Self, SapError> {
        bincode::deserialize(bytes).map_err(|e| SapError::Snapshot(e.to_string()))
    }

    fn credit(&mut self, account: &PlayerAddress, amount: u128) -> Result<(), SapError> {
        if amount == 0 {
            return Err(SapError::ZeroAmount);
        }
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(SapError::Overflow)?;
        let balance = self.balance_of(account);
        // Balance cannot overflow if supply did not, but keep both checked.
        let balance = balance.checked_add(amount).ok_or(SapError::Overflow)?;
        self.total_supply = supply;
        self.balances.insert(account.clone(), balance);
        Ok(())
    }

    fn debit(&mut self, account: &PlayerAddress, amount: u128) -> Result<(), SapError> {
        if amount == 0 {
            return Err(SapError::ZeroAmount);
        }
        let available = self.balance_of(account);
        if available < amount {
            return Err(SapError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        self.total_supply -= amount;
        if available == amount {
            self.balances.remove(account);
        } else {
            self.balances.insert(account.clone(), available - amount);
        }
        Ok(())
    }

    fn move_balance(
        &mut self,
        from: &PlayerAddress,
        to: &PlayerAddress,
        amount: u128,
    ) -> Result<(), SapError> {
        if amount == 0 {
            return Err(SapError::ZeroAmount);
        }
        let available = self.balance_of(from);
        if available < amount {
            return Err(SapError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(SapError::Overflow)?;
        if available == amount {
            self.balances.remove(from);
        } else {
            self.balances.insert(from.clone(), available - amount);
        }
        self.balances.insert(to.clone(), to_balance);
        Ok(())
    }
}

/// Decode the bridged amount from a deposit payload.
///
/// The root-chain bridge encodes a single u128. Anything that does not
/// decode to a positive amount is a failed deposit.
fn decode_deposit_amount(payload: &[u8]) -> Result<u128, SapError> {
    let amount: u128 = bincode::deserialize(payload).map_err(|_| SapError::DepositFailed)?;
    if amount == 0 {
        return Err(SapError::DepositFailed);
    }
    Ok(amount)
}
