use clap::Parser;
use std::path::PathBuf;

/// Serve a wallet balance ledger over HTTP
#[derive(Parser, Debug)]
#[command(name = "wallet-ledger")]
#[command(about = "Serve a wallet balance ledger over HTTP", long_about = None)]
pub struct CliArgs {
    /// Seed CSV file with initial wallet records (wallet_id,balance)
    #[arg(value_name = "SEED", help = "Path to the seed CSV file")]
    pub seed_file: Option<PathBuf>,

    /// Address to bind the HTTP server to
    #[arg(
        long = "host",
        value_name = "HOST",
        default_value = "127.0.0.1",
        help = "Address to bind the HTTP server to"
    )]
    pub host: String,

    /// Port to bind the HTTP server to
    #[arg(
        long = "port",
        value_name = "PORT",
        default_value_t = 8080,
        help = "Port to bind the HTTP server to"
    )]
    pub port: u16,

    /// Where to write a wallet snapshot when the server shuts down
    #[arg(
        long = "snapshot",
        value_name = "PATH",
        help = "Write a wallet snapshot CSV to this path on shutdown"
    )]
    pub snapshot: Option<PathBuf>,
}
