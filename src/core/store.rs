//! Thread-safe wallet balance store
//!
//! This module provides the `MemoryStore` struct, the concurrent key-value
//! mapping from wallet identifier to balance that backs the ledger.
//!
//! # Design
//!
//! `MemoryStore` uses `DashMap` (a concurrent HashMap) to provide
//! thread-safe balance storage with fine-grained locking. Each adjust
//! operation runs entirely under the entry's write lock, so the
//! precondition check and the write form one indivisible step, the
//! in-memory equivalent of a conditional `UPDATE ... WHERE` statement.
//!
//! # Thread Safety
//!
//! Multiple request handlers can safely adjust different wallets
//! concurrently; operations on the same wallet serialize on its entry
//! lock. Two simultaneous withdrawals can therefore never both succeed
//! past the available balance.

use crate::core::traits::BalanceStore;
use crate::types::{LedgerError, Wallet, WalletId};
use dashmap::DashMap;
use rust_decimal::Decimal;

/// Concurrent in-memory wallet balance store
///
/// Wallets are created out-of-band through [`MemoryStore::insert`] (seed
/// data); the request path only ever mutates existing entries through the
/// conditional adjust operations of the [`BalanceStore`] trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Concurrent map of wallet identifiers to balances
    ///
    /// DashMap shards its entries internally, so different wallets can be
    /// adjusted in parallel without a global lock.
    balances: DashMap<WalletId, Decimal>,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self {
            balances: DashMap::new(),
        }
    }

    /// Build a store from a collection of wallet records
    ///
    /// # Arguments
    ///
    /// * `wallets` - The wallet records to load
    ///
    /// # Errors
    ///
    /// Returns an error if a wallet identifier appears more than once or a
    /// record carries a negative balance. Nothing about the input order is
    /// assumed.
    pub fn from_wallets(wallets: Vec<Wallet>) -> Result<Self, LedgerError> {
        let store = Self::new();
        for wallet in wallets {
            store.insert(wallet)?;
        }
        Ok(store)
    }

    /// Insert a new wallet record
    ///
    /// This is the out-of-band creation path (seeding); it is not part of
    /// the [`BalanceStore`] contract the request path uses.
    ///
    /// # Errors
    ///
    /// * `DuplicateWallet` if a record already exists for the identifier
    /// * `NegativeBalance` if the record violates the balance invariant
    pub fn insert(&self, wallet: Wallet) -> Result<(), LedgerError> {
        if wallet.balance < Decimal::ZERO {
            return Err(LedgerError::negative_balance(
                wallet.wallet_id,
                wallet.balance,
            ));
        }

        // entry() holds the shard lock, so the duplicate check and the
        // insert are one step.
        let mut inserted = false;
        self.balances.entry(wallet.wallet_id).or_insert_with(|| {
            inserted = true;
            wallet.balance
        });

        if inserted {
            Ok(())
        } else {
            Err(LedgerError::duplicate_wallet(wallet.wallet_id))
        }
    }

    /// Snapshot all wallets, sorted by identifier for deterministic output
    ///
    /// The snapshot reflects each wallet at the moment its entry was read;
    /// concurrent adjustments made afterwards are not included.
    pub fn wallets(&self) -> Vec<Wallet> {
        let mut wallets: Vec<Wallet> = self
            .balances
            .iter()
            .map(|entry| Wallet::new(*entry.key(), *entry.value()))
            .collect();
        wallets.sort_by_key(|wallet| wallet.wallet_id);
        wallets
    }

    /// Number of wallets currently stored
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Whether the store holds no wallets
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl BalanceStore for MemoryStore {
    fn exists(&self, wallet: WalletId) -> bool {
        self.balances.contains_key(&wallet)
    }

    fn increment(&self, wallet: WalletId, amount: Decimal) -> Result<usize, LedgerError> {
        // The add happens under the entry write lock and only when the
        // wallet exists, so the deposit path is race-free like the
        // withdrawal path.
        match self.balances.get_mut(&wallet) {
            Some(mut balance) => {
                let next = balance
                    .checked_add(amount)
                    .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", wallet))?;
                *balance = next;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn decrement(&self, wallet: WalletId, amount: Decimal) -> Result<usize, LedgerError> {
        // Comparison and write under one entry lock: the lost-update race
        // between concurrent withdrawals cannot occur.
        match self.balances.get_mut(&wallet) {
            Some(mut balance) => {
                if *balance < amount {
                    return Ok(0);
                }
                let next = balance
                    .checked_sub(amount)
                    .ok_or_else(|| LedgerError::arithmetic_underflow("withdrawal", wallet))?;
                *balance = next;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn balance(&self, wallet: WalletId) -> Option<Decimal> {
        self.balances.get(&wallet).map(|balance| *balance)
    }
}
