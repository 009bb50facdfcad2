//! Flat capability roles for privileged ledger operations.
//!
//! An address may hold any subset of the three roles. Every privileged
//! operation checks exactly one role; holding one never implies another.

use crate::error::SapError;
use grove_types::PlayerAddress;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A capability grantable to an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May call the administrative `mint`.
    Master,
    /// May call the `game_*` economy operations.
    GameContract,
    /// May call the bridging `deposit`.
    Depositor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Master => write!(f, "master"),
            Role::GameContract => write!(f, "game-contract"),
            Role::Depositor => write!(f, "depositor"),
        }
    }
}

/// Per-address role grants.
///
/// Grant administration itself is the host's concern; the table only
/// answers "does this address hold this role" at each entry point.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RoleTable {
    grants: HashMap<PlayerAddress, HashSet<Role>>,
}

impl RoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&mut self, account: &PlayerAddress, role: Role) {
        self.grants.entry(account.clone()).or_default().insert(role);
    }

    pub fn revoke(&mut self, account: &PlayerAddress, role: Role) {
        if let Some(set) = self.grants.get_mut(account) {
            set.remove(&role);
            if set.is_empty() {
                self.grants.remove(account);
            }
        }
    }

    pub fn has(&self, account: &PlayerAddress, role: Role) -> bool {
        self.grants
            .get(account)
            .map_or(false, |set| set.contains(&role))
    }

    /// Check a role, returning the ledger's authorization error if absent.
    pub fn require(&self, account: &PlayerAddress, role: Role) -> Result<(), SapError> {
        if self.has(account, role) {
            Ok(())
        } else {
            Err(SapError::MissingRole {
                account: account.clone(),
                role,
            })
        }
    }
}
