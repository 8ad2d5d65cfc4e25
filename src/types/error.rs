//! Error types for the wallet ledger
//!
//! This module defines all error types that can occur while serving wallet
//! operations or loading seed data. Errors are designed to be descriptive
//! and carry enough context to be surfaced to API clients directly.
//!
//! # Error Categories
//!
//! - **Business Errors**: Unknown wallet, insufficient funds, invalid request
//! - **Seed I/O Errors**: File not found, malformed CSV, duplicate wallets
//! - **Arithmetic Errors**: Overflow in balance adjustments

use super::wallet::WalletId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the wallet ledger
///
/// This enum represents all possible errors that can occur while processing
/// wallet operations. Each variant includes relevant context to help
/// diagnose and report the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// No wallet record exists for the given identifier
    ///
    /// Surfaced to the caller as a client error; never retried.
    #[error("Wallet with UUID {wallet} not found")]
    WalletNotFound {
        /// The wallet identifier that was not found
        wallet: WalletId,
    },

    /// Withdrawal amount exceeds the current balance at the atomic check
    ///
    /// Surfaced to the caller as a client error; never retried. A retried
    /// withdrawal must re-evaluate the current balance.
    #[error("Insufficient funds on wallet {wallet} to complete the operation")]
    InsufficientFunds {
        /// The wallet whose balance could not cover the amount
        wallet: WalletId,
    },

    /// Malformed request input (missing or non-positive amount)
    ///
    /// Rejected before any balance adjustment is attempted.
    #[error("{message}")]
    InvalidRequest {
        /// Description of the validation failure
        message: String,
    },

    /// A path or parameter value could not be parsed as a wallet identifier
    #[error("Invalid wallet identifier '{value}'")]
    InvalidIdentifier {
        /// The raw value that failed to parse
        value: String,
    },

    /// Seed file not found at the specified path
    ///
    /// This is a fatal error that prevents the server from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing seed data
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred while reading seed data
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Parse {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// The same wallet identifier appeared more than once in seed data
    #[error("Duplicate wallet {wallet} in seed data")]
    DuplicateWallet {
        /// The duplicated wallet identifier
        wallet: WalletId,
    },

    /// A wallet record carried a negative balance
    ///
    /// Balances are non-negative by invariant; seed data violating this is
    /// rejected outright.
    #[error("Negative balance {balance} for wallet {wallet}")]
    NegativeBalance {
        /// The offending wallet identifier
        wallet: WalletId,
        /// The negative balance that was rejected
        balance: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// The adjustment is rejected to maintain balance integrity.
    #[error("Arithmetic overflow in {operation} for wallet {wallet}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// The wallet whose balance was being adjusted
        wallet: WalletId,
    },

    /// Arithmetic underflow would occur
    ///
    /// The adjustment is rejected to maintain balance integrity.
    #[error("Arithmetic underflow in {operation} for wallet {wallet}")]
    ArithmeticUnderflow {
        /// Operation that would underflow
        operation: String,
        /// The wallet whose balance was being adjusted
        wallet: WalletId,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        LedgerError::Parse {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a WalletNotFound error
    pub fn wallet_not_found(wallet: WalletId) -> Self {
        LedgerError::WalletNotFound { wallet }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(wallet: WalletId) -> Self {
        LedgerError::InsufficientFunds { wallet }
    }

    /// Create an InvalidRequest error
    pub fn invalid_request(message: &str) -> Self {
        LedgerError::InvalidRequest {
            message: message.to_string(),
        }
    }

    /// Create an InvalidIdentifier error
    pub fn invalid_identifier(value: &str) -> Self {
        LedgerError::InvalidIdentifier {
            value: value.to_string(),
        }
    }

    /// Create a DuplicateWallet error
    pub fn duplicate_wallet(wallet: WalletId) -> Self {
        LedgerError::DuplicateWallet { wallet }
    }

    /// Create a NegativeBalance error
    pub fn negative_balance(wallet: WalletId, balance: Decimal) -> Self {
        LedgerError::NegativeBalance { wallet, balance }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, wallet: WalletId) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            wallet,
        }
    }

    /// Create an ArithmeticUnderflow error
    pub fn arithmetic_underflow(operation: &str, wallet: WalletId) -> Self {
        LedgerError::ArithmeticUnderflow {
            operation: operation.to_string(),
            wallet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use uuid::uuid;

    const WALLET: WalletId = uuid!("e1bfceb8-4b8c-4d9f-9c66-f5c8e1a3b7d2");

    #[rstest]
    #[case::wallet_not_found(
        LedgerError::WalletNotFound { wallet: WALLET },
        "Wallet with UUID e1bfceb8-4b8c-4d9f-9c66-f5c8e1a3b7d2 not found"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { wallet: WALLET },
        "Insufficient funds on wallet e1bfceb8-4b8c-4d9f-9c66-f5c8e1a3b7d2 to complete the operation"
    )]
    #[case::invalid_request(
        LedgerError::InvalidRequest { message: "the operation amount must be greater than 0".to_string() },
        "the operation amount must be greater than 0"
    )]
    #[case::invalid_identifier(
        LedgerError::InvalidIdentifier { value: "not-a-uuid".to_string() },
        "Invalid wallet identifier 'not-a-uuid'"
    )]
    #[case::file_not_found(
        LedgerError::FileNotFound { path: "wallets.csv".to_string() },
        "File not found: wallets.csv"
    )]
    #[case::io_error(
        LedgerError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        LedgerError::Parse { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        LedgerError::Parse { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::duplicate_wallet(
        LedgerError::DuplicateWallet { wallet: WALLET },
        "Duplicate wallet e1bfceb8-4b8c-4d9f-9c66-f5c8e1a3b7d2 in seed data"
    )]
    #[case::negative_balance(
        LedgerError::NegativeBalance { wallet: WALLET, balance: Decimal::new(-10050, 2) },
        "Negative balance -100.50 for wallet e1bfceb8-4b8c-4d9f-9c66-f5c8e1a3b7d2"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), wallet: WALLET },
        "Arithmetic overflow in deposit for wallet e1bfceb8-4b8c-4d9f-9c66-f5c8e1a3b7d2"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::wallet_not_found(
        LedgerError::wallet_not_found(WALLET),
        LedgerError::WalletNotFound { wallet: WALLET }
    )]
    #[case::insufficient_funds(
        LedgerError::insufficient_funds(WALLET),
        LedgerError::InsufficientFunds { wallet: WALLET }
    )]
    #[case::invalid_request(
        LedgerError::invalid_request("bad amount"),
        LedgerError::InvalidRequest { message: "bad amount".to_string() }
    )]
    #[case::duplicate_wallet(
        LedgerError::duplicate_wallet(WALLET),
        LedgerError::DuplicateWallet { wallet: WALLET }
    )]
    #[case::arithmetic_overflow(
        LedgerError::arithmetic_overflow("deposit", WALLET),
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), wallet: WALLET }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
