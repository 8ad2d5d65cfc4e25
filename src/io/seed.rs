//! CSV format handling for wallet seed data and snapshots
//!
//! This module centralizes the seed-file format concerns, providing:
//! - SeedRecord structure for deserialization
//! - Conversion from seed records to wallet records
//! - Wallet snapshot serialization
//!
//! Wallets are created out-of-band: the seed file is the only creation
//! path, read once at startup. The snapshot writer produces the same
//! format, so a snapshot can be fed back in as the next run's seed.

use crate::types::{to_money_scale, LedgerError, Wallet, WalletId, MONEY_SCALE};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Seed record structure for deserialization
///
/// Matches the seed CSV format with columns: wallet_id, balance.
/// Both fields are read as strings so conversion can produce precise,
/// line-oriented error messages.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SeedRecord {
    pub wallet_id: String,
    pub balance: String,
}

/// Convert a SeedRecord to a Wallet
///
/// This function:
/// - Parses the wallet_id string into a UUID
/// - Parses the balance string into a Decimal
/// - Rejects negative balances and balances with more than 2 decimal digits
/// - Rescales the balance to exactly 2 decimal digits
///
/// # Arguments
///
/// * `record` - The deserialized seed record
///
/// # Returns
///
/// Result containing either:
/// - Ok(Wallet) - Successfully converted record
/// - Err(String) - Error message describing the conversion failure
pub fn convert_seed_record(record: SeedRecord) -> Result<Wallet, String> {
    let wallet_id = WalletId::from_str(record.wallet_id.trim())
        .map_err(|_| format!("Invalid wallet id '{}'", record.wallet_id))?;

    let balance = Decimal::from_str(record.balance.trim())
        .map_err(|_| format!("Invalid balance '{}' for wallet {}", record.balance, wallet_id))?;

    if balance < Decimal::ZERO {
        return Err(format!(
            "Negative balance '{}' for wallet {}",
            record.balance, wallet_id
        ));
    }

    if balance.scale() > MONEY_SCALE {
        return Err(format!(
            "Balance '{}' for wallet {} has more than {} decimal digits",
            record.balance, wallet_id, MONEY_SCALE
        ));
    }

    Ok(Wallet::new(wallet_id, to_money_scale(balance)))
}

/// Read wallet records from a seed CSV file
///
/// Opens the file, deserializes each row, and converts it to a wallet
/// record. Reading stops at the first malformed row: seed data is trusted
/// input, and starting with a partial ledger would be worse than not
/// starting at all.
///
/// # Arguments
///
/// * `path` - Path to the seed CSV file
///
/// # Returns
///
/// * `Ok(Vec<Wallet>)` with every record in file order
/// * `Err(LedgerError)` if the file is missing, unreadable, or malformed
pub fn read_wallets_csv(path: &Path) -> Result<Vec<Wallet>, LedgerError> {
    if !path.exists() {
        return Err(LedgerError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

    let mut wallets = Vec::new();
    for (index, result) in reader.deserialize::<SeedRecord>().enumerate() {
        let record = result?;
        // Header occupies line 1; the first data row is line 2.
        let line = index as u64 + 2;
        let wallet = convert_seed_record(record)
            .map_err(|message| LedgerError::Parse {
                line: Some(line),
                message,
            })?;
        wallets.push(wallet);
    }

    Ok(wallets)
}

/// Write wallet states to CSV format
///
/// Writes wallets with columns: wallet_id, balance. Wallets are sorted by
/// identifier for deterministic output, and balances always carry two
/// decimal digits.
///
/// # Arguments
///
/// * `wallets` - Slice of wallet states to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(LedgerError)` if a write error occurred
pub fn write_wallets_csv(wallets: &[Wallet], output: &mut dyn Write) -> Result<(), LedgerError> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer.write_record(["wallet_id", "balance"])?;

    // Sort by wallet id for deterministic output
    let mut sorted_wallets = wallets.to_vec();
    sorted_wallets.sort_by_key(|wallet| wallet.wallet_id);

    for wallet in sorted_wallets {
        writer.write_record(&[
            wallet.wallet_id.to_string(),
            format!("{:.2}", wallet.balance),
        ])?;
    }

    writer.flush()?;

    Ok(())
}
