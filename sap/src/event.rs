//! Notifications emitted by SAP ledger mutations.

use grove_types::PlayerAddress;

/// A notification describing a completed ledger mutation.
///
/// Every mutating operation returns the event it would emit, so callers
/// (and tests) observe exactly the fields of the mutation that happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SapEvent {
    /// Balance movement. `from: None` is a mint, `to: None` is a burn.
    Transfer {
        from: Option<PlayerAddress>,
        to: Option<PlayerAddress>,
        amount: u128,
    },
    /// Privileged mint by the game economy.
    GameMint {
        account: PlayerAddress,
        amount: u128,
    },
    /// Privileged burn by the game economy.
    GameBurn {
        account: PlayerAddress,
        amount: u128,
    },
    /// Privileged transfer bypassing holder authorization.
    GameTransferFrom {
        from: PlayerAddress,
        to: PlayerAddress,
        amount: u128,
    },
    /// Privileged withdrawal (bridge exit) on behalf of an account.
    GameWithdraw {
        account: PlayerAddress,
        amount: u128,
    },
}
