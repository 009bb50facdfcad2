//! Player address type with `grv_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Grove player address, always prefixed with `grv_`.
///
/// On the host ledger this corresponds to the account the transaction was
/// signed by; the engines only ever compare addresses for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerAddress(String);

impl PlayerAddress {
    /// The standard prefix for all Grove player addresses.
    pub const PREFIX: &'static str = "grv_";

    /// Create a new player address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `grv_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with grv_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for PlayerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlayerAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
