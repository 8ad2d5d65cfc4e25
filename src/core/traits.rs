//! Core trait for balance storage
//!
//! This module defines the storage seam the orchestrator talks through,
//! so the concurrent in-memory store and test doubles are interchangeable.

use crate::types::{LedgerError, WalletId};
use rust_decimal::Decimal;

/// Storage contract for wallet balances
///
/// The adjust operations return the number of rows affected (0 or 1), the
/// same signal a conditional `UPDATE ... WHERE` statement would produce.
/// A zero tells the caller the precondition did not hold: the wallet is
/// missing, or (for a decrement) the balance could not cover the amount.
///
/// Implementations must make each adjust a single atomic step: the
/// precondition check and the write may never be separated by a window in
/// which another caller can slip in.
pub trait BalanceStore {
    /// Check whether a wallet record is present
    fn exists(&self, wallet: WalletId) -> bool;

    /// Atomically add `amount` to the wallet's balance
    ///
    /// The add applies only when the wallet exists; returns the rows
    /// affected (1 if a record was matched, 0 if the wallet is absent).
    ///
    /// # Errors
    ///
    /// Returns an error if the addition would overflow.
    fn increment(&self, wallet: WalletId, amount: Decimal) -> Result<usize, LedgerError>;

    /// Atomically subtract `amount` from the wallet's balance, but only if
    /// `balance >= amount`
    ///
    /// The comparison and the write are one indivisible step. Returns the
    /// rows affected: 1 if the condition held and the balance was updated,
    /// 0 if the condition failed (insufficient funds) or the wallet does
    /// not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the subtraction would underflow despite the
    /// condition holding (cannot happen for non-negative balances, kept as
    /// checked arithmetic for integrity).
    fn decrement(&self, wallet: WalletId, amount: Decimal) -> Result<usize, LedgerError>;

    /// Read the wallet's current balance
    ///
    /// Returns `None` when no record exists for the identifier. Never
    /// mutates state.
    fn balance(&self, wallet: WalletId) -> Option<Decimal>;
}
