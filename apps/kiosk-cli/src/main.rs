//! # Kiosk Entry Point
//!
//! Parses command-line flags and hands over to [`kiosk_cli::run`].
//!
//! ```bash
//! # Default catalog, 150.00 balance, euro symbol
//! cargo run -p kiosk-cli
//!
//! # Custom balance and catalog
//! cargo run -p kiosk-cli -- --balance 40 --catalog demos/catalog.json
//! ```

use clap::Parser;
use kiosk_cli::Args;

fn main() -> anyhow::Result<()> {
    kiosk_cli::run(Args::parse())
}
