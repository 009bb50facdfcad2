//! SAP ledger errors.

use crate::roles::Role;
use grove_types::PlayerAddress;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SapError {
    #[error("account {account} is missing the {role} role")]
    MissingRole { account: PlayerAddress, role: Role },

    #[error("insufficient SAP: need {needed}, available {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("deposit failed")]
    DepositFailed,

    #[error("amount must be non-zero")]
    ZeroAmount,

    #[error("arithmetic overflow in SAP supply")]
    Overflow,

    #[error("snapshot codec error: {0}")]
    Snapshot(String),
}
