//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `wallet`: Wallet record, identifier alias, and money-scale helpers
//! - `operation`: Operation kinds and transient request/receipt values
//! - `error`: Error types for the wallet ledger

pub mod error;
pub mod operation;
pub mod wallet;

pub use error::LedgerError;
pub use operation::{OperationKind, OperationReceipt, OperationRequest};
pub use wallet::{to_money_scale, Wallet, WalletId, MONEY_SCALE};
