//! Per-account claim cooldown ledger.

use grove_types::{PlayerAddress, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Minimum interval between two claims by the same account: one full day.
pub const CLAIM_PERIOD_SECS: u64 = 86_400;

/// Last-claim timestamps per account.
///
/// The record is written exactly once per successful claim, after the
/// dispensing effect; a rejected claim never touches it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClaimLedger {
    last_claim: HashMap<PlayerAddress, Timestamp>,
}

impl ClaimLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the account has never claimed or a full period has elapsed.
    pub fn can_claim(&self, account: &PlayerAddress, now: Timestamp) -> bool {
        self.last_claim
            .get(account)
            .map_or(true, |last| last.has_expired(CLAIM_PERIOD_SECS, now))
    }

    /// The account's last recorded claim, if any.
    pub fn last_claim(&self, account: &PlayerAddress) -> Option<Timestamp> {
        self.last_claim.get(account).copied()
    }

    /// Overwrite the account's last-claim timestamp.
    pub fn record_claim(&mut self, account: &PlayerAddress, now: Timestamp) {
        self.last_claim.insert(account.clone(), now);
    }
}
