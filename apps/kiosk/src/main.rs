//! # Grill Point Kiosk Entry Point
//!
//! ## Usage
//! ```bash
//! # Interactive session
//! cargo run -p grill-kiosk
//!
//! # Replay a script without the 3 s confirmation wait
//! cargo run -p grill-kiosk -- --script demo.txt --confirmation-delay-ms 0
//!
//! # Send orders to another number
//! GRILL_WHATSAPP_PHONE=5521988887777 cargo run -p grill-kiosk
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = grill_kiosk_lib::Cli::parse();

    if let Err(e) = grill_kiosk_lib::run(cli).await {
        tracing::error!("Kiosk failed: {e}");
        eprintln!("grill-kiosk: {e}");
        std::process::exit(1);
    }
}
