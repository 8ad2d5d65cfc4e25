//! Operation-related types for the wallet ledger
//!
//! This module defines the operation kind discriminator and the transient
//! request/receipt values that flow through one ledger call.

use super::wallet::WalletId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Operation kinds supported by the ledger
///
/// The discriminator selecting which conditional adjust to apply:
/// deposits add to the balance unconditionally once the wallet exists,
/// withdrawals subtract only when sufficient funds are available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    /// Credit funds to a wallet
    Deposit,

    /// Debit funds from a wallet
    ///
    /// Requires the wallet balance to cover the full amount; the check and
    /// the subtraction happen as one atomic step in the store.
    Withdraw,
}

impl OperationKind {
    /// Human-readable label for this operation kind
    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Deposit => "Deposit",
            OperationKind::Withdraw => "Withdrawal",
        }
    }
}

/// A single balance-mutation request
///
/// Transient value: exists only for the duration of one call and is never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    /// The wallet this operation applies to
    pub wallet_id: WalletId,

    /// Which adjustment to perform
    pub kind: OperationKind,

    /// The amount to apply; must be positive
    pub amount: Decimal,
}

/// The outcome of a successful operation
///
/// Carries the human-readable description of the kind performed and the
/// amount that was processed, normalized to 2 decimal digits.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationReceipt {
    /// Label of the operation kind that was performed
    pub description: String,

    /// The processed amount at 2-decimal scale
    pub amount: Decimal,
}
