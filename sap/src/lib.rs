//! SAP currency ledger.
//!
//! SAP is the fungible in-game currency. The ledger keeps standard
//! transferable balances, mints on root-chain deposits and burns on
//! withdrawals (bridging), and exposes privileged "game economy" operations
//! gated by three independent roles.

pub mod error;
pub mod event;
pub mod ledger;
pub mod roles;

pub use error::SapError;
pub use event::SapEvent;
pub use ledger::SapLedger;
pub use roles::{Role, RoleTable};
