//! Wallet Ledger Server
//!
//! HTTP server exposing deposit/withdraw operations and balance queries
//! for UUID-keyed wallets.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- wallets.csv
//! cargo run -- --host 0.0.0.0 --port 9090 wallets.csv
//! cargo run -- --snapshot wallets-out.csv wallets.csv
//! ```
//!
//! The server seeds its wallets from the given CSV file (wallets are
//! created out-of-band only), serves the wallet API until interrupted,
//! and optionally writes a snapshot of the final balances on shutdown.
//!
//! # Endpoints
//!
//! - `POST /api/v1/wallet` - perform a deposit or withdrawal
//! - `GET /api/v1/wallet/{wallet_uuid}` - query a wallet's balance
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (seed file missing or malformed, bind failure, etc.)

use actix_web::{web, App, HttpServer};
use std::fs::File;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wallet_ledger::{api, cli, io, MemoryStore, WalletLedger};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Default to info-level logs unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Load the seed file, or start with an empty ledger
    let store = match &args.seed_file {
        Some(path) => match io::read_wallets_csv(path).and_then(MemoryStore::from_wallets) {
            Ok(store) => store,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => MemoryStore::new(),
    };

    info!(
        wallets = store.len(),
        host = %args.host,
        port = args.port,
        "starting wallet ledger server"
    );

    let ledger = web::Data::new(WalletLedger::new(store));

    let app_ledger = ledger.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(app_ledger.clone())
            .configure(api::configure)
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;

    // Server has stopped; persist the final balances if requested
    if let Some(path) = &args.snapshot {
        let result = File::create(path).map_err(wallet_ledger::LedgerError::from).and_then(
            |mut file| io::write_wallets_csv(&ledger.store().wallets(), &mut file),
        );
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        info!(path = %path.display(), "wallet snapshot written");
    }

    Ok(())
}
