//! Semi-fungible item identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a semi-fungible relic class.
///
/// Relics of the same id are interchangeable; the relic ledger tracks an
/// outstanding supply per id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}
