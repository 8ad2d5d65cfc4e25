//! Wallet-related types for the wallet ledger
//!
//! This module defines the Wallet record and the money-scale helpers used
//! to keep every balance and processed amount at the ledger's 2-decimal
//! scale.

use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

/// Wallet identifier
///
/// Wallets are keyed by an opaque UUID assigned out-of-band (seed data).
pub type WalletId = Uuid;

/// Number of decimal digits carried by every balance and processed amount
pub const MONEY_SCALE: u32 = 2;

/// Wallet record
///
/// Represents a single wallet: its identifier and its current balance.
/// The balance is never negative; all mutation goes through the store's
/// conditional-adjust operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    /// The wallet's unique identifier
    pub wallet_id: WalletId,

    /// Current balance, kept at [`MONEY_SCALE`] decimal digits
    ///
    /// Invariant: `balance >= 0` at all times.
    pub balance: Decimal,
}

impl Wallet {
    /// Create a new wallet record
    ///
    /// # Arguments
    ///
    /// * `wallet_id` - The wallet's unique identifier
    /// * `balance` - The wallet's starting balance
    pub fn new(wallet_id: WalletId, balance: Decimal) -> Self {
        Wallet { wallet_id, balance }
    }
}

/// Normalize an amount to the ledger's money scale
///
/// Rounds to [`MONEY_SCALE`] decimal digits using half-up rounding
/// (midpoints round away from zero), then rescales so the result always
/// carries exactly two decimal digits (`200` becomes `200.00`).
///
/// # Arguments
///
/// * `amount` - The amount to normalize
///
/// # Returns
///
/// The amount rounded and rescaled to 2 decimal digits
pub fn to_money_scale(amount: Decimal) -> Decimal {
    let mut scaled =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    scaled.rescale(MONEY_SCALE);
    scaled
}
