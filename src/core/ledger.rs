//! Wallet operation orchestration
//!
//! This module provides the `WalletLedger` struct, which coordinates one
//! balance mutation or query end to end: validate, check existence,
//! dispatch to the store's conditional adjust, and translate the
//! rows-affected outcome into a typed result.
//!
//! The ledger holds no state of its own and takes no locks; correctness
//! under concurrency is delegated entirely to the store's atomic
//! conditional-update primitive.

use crate::core::traits::BalanceStore;
use crate::types::{
    to_money_scale, LedgerError, OperationKind, OperationReceipt, OperationRequest, WalletId,
};
use rust_decimal::Decimal;
use tracing::info;

/// Orchestrates wallet operations over a [`BalanceStore`]
///
/// Generic over the store so the concurrent in-memory implementation and
/// test doubles interchange freely.
pub struct WalletLedger<S> {
    store: S,
}

impl<S: BalanceStore> WalletLedger<S> {
    /// Create a ledger over the given store
    pub fn new(store: S) -> Self {
        WalletLedger { store }
    }

    /// Access the underlying store
    ///
    /// Used by the hosting binary for snapshotting; the request path only
    /// goes through [`execute`](Self::execute) and
    /// [`balance`](Self::balance).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Execute a single deposit or withdrawal
    ///
    /// The amount is normalized to the money scale (2 digits, half-up)
    /// before adjusting, so balances never accumulate sub-cent residue and
    /// the receipt reports exactly what was applied.
    ///
    /// # Errors
    ///
    /// * `InvalidRequest` - the normalized amount is not positive
    /// * `WalletNotFound` - no record exists for the identifier (checked
    ///   first), or a deposit matched zero rows because the wallet
    ///   vanished mid-operation
    /// * `InsufficientFunds` - a withdrawal's conditional decrement
    ///   matched zero rows
    ///
    /// On every failure path the balance is untouched: the store either
    /// applies the full check-and-adjust atomically or changes nothing.
    pub fn execute(&self, request: &OperationRequest) -> Result<OperationReceipt, LedgerError> {
        let wallet = request.wallet_id;
        let amount = to_money_scale(request.amount);

        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_request(
                "the operation amount must be greater than 0",
            ));
        }

        info!(%wallet, kind = request.kind.label(), %amount, "attempting wallet operation");

        if !self.store.exists(wallet) {
            return Err(LedgerError::wallet_not_found(wallet));
        }

        let affected = match request.kind {
            OperationKind::Deposit => self.store.increment(wallet, amount)?,
            OperationKind::Withdraw => self.store.decrement(wallet, amount)?,
        };

        if affected == 0 {
            // Zero rows from a withdrawal means the balance condition
            // failed; zero rows from a deposit means the wallet vanished
            // between the existence check and the adjust.
            return Err(match request.kind {
                OperationKind::Withdraw => LedgerError::insufficient_funds(wallet),
                OperationKind::Deposit => LedgerError::wallet_not_found(wallet),
            });
        }

        info!(%wallet, kind = request.kind.label(), "wallet operation successful");

        Ok(OperationReceipt {
            description: request.kind.label().to_string(),
            amount,
        })
    }

    /// Query the current balance of a wallet
    ///
    /// Read-only: repeated calls return identical results absent
    /// concurrent writes.
    ///
    /// # Errors
    ///
    /// * `WalletNotFound` - no record exists for the identifier
    pub fn balance(&self, wallet: WalletId) -> Result<Decimal, LedgerError> {
        info!(%wallet, "balance request");

        self.store
            .balance(wallet)
            .ok_or_else(|| LedgerError::wallet_not_found(wallet))
    }
}
