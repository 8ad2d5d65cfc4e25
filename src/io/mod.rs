//! I/O module
//!
//! Handles the wallet seed file and state snapshots.
//!
//! # Components
//!
//! - `seed` - Seed CSV format handling (record conversion, snapshot serialization)

pub mod seed;

pub use seed::{convert_seed_record, read_wallets_csv, write_wallets_csv, SeedRecord};
