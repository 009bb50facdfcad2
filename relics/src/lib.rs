//! Semi-fungible relic ledger.
//!
//! Relics are the semi-fungible items dispensed by claims: many units can
//! exist per id, and the ledger tracks the outstanding supply of each id as
//! exactly minted-minus-burned.

pub mod error;
pub mod event;
pub mod ledger;

pub use error::RelicError;
pub use event::RelicEvent;
pub use ledger::RelicLedger;
