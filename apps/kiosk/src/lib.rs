//! # Grill Point Kiosk Library
//!
//! The ordering kiosk and admin shell for Grill Point.
//!
//! ## Module Organization
//! ```text
//! grill_kiosk_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── shell.rs        ◄─── Line parsing and dispatch
//! ├── channel.rs      ◄─── Where checkout messages go
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Customer cart
//! │   ├── admin.rs    ◄─── Admin store
//! │   └── config.rs   ◄─── Configuration
//! ├── commands/
//! │   ├── menu.rs     ◄─── Storefront listing + admin catalog
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── checkout.rs ◄─── WhatsApp hand-off
//! │   ├── orders.rs   ◄─── Order status workflow
//! │   ├── store.rs    ◄─── Store settings
//! │   ├── users.rs    ◄─── Staff users
//! │   ├── dashboard.rs
//! │   └── settings.rs ◄─── Theme, reset, backup, config
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Output Streams
//! Replies go to stdout as JSON; logs go to stderr. Piping stdout into
//! `jq` therefore works without filtering.

pub mod channel;
pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::path::PathBuf;

use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use channel::ConsoleChannel;
use shell::Shell;
use state::{AdminState, CartState, ConfigError, ConfigState};

/// Command-line flags. Each one overrides the matching `GRILL_*` variable.
#[derive(Debug, Default, Parser)]
#[command(name = "grill-kiosk", author, version, about = "Grill Point ordering kiosk and admin shell")]
pub struct Cli {
    /// WhatsApp number that receives orders (digits, with country code)
    #[arg(long)]
    pub phone: Option<String>,

    /// Milliseconds to wait before a checkout is confirmed
    #[arg(long)]
    pub confirmation_delay_ms: Option<u64>,

    /// Orders listed under "recent orders" on the dashboard
    #[arg(long)]
    pub recent_orders: Option<usize>,

    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,
}

impl Cli {
    /// Applies the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut ConfigState) -> Result<(), ConfigError> {
        if let Some(phone) = &self.phone {
            config.set_whatsapp_phone(phone, "--phone")?;
        }
        if let Some(delay) = self.confirmation_delay_ms {
            config.confirmation_delay_ms = delay;
        }
        if let Some(limit) = self.recent_orders {
            config.recent_orders_limit = limit;
        }
        Ok(())
    }
}

/// Runs the kiosk.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr            │
/// │     • Default: warn, info for grill crates; RUST_LOG overrides         │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • .env file, GRILL_* variables, then command-line flags            │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CartState: empty cart                                            │
/// │     • AdminState: demo data                                            │
/// │     • ConfigState: from step 2                                         │
/// │                                                                         │
/// │  4. Run the Shell ────────────────────────────────────────────────────► │
/// │     • Script file or stdin, until end of input or `quit`              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut config = ConfigState::load()?;
    cli.apply(&mut config)?;

    info!(
        phone = %config.whatsapp_phone,
        delay_ms = config.confirmation_delay_ms,
        "Starting Grill Point kiosk"
    );

    let channel = ConsoleChannel::new(config.confirmation_delay());
    let shell = Shell::new(CartState::new(), AdminState::demo(), config, channel);
    let stdout = tokio::io::stdout();

    let handled = match &cli.script {
        Some(path) => {
            info!(?path, "Reading commands from script");
            let file = tokio::fs::File::open(path).await?;
            shell.run(BufReader::new(file), stdout).await?
        }
        None => shell.run(BufReader::new(tokio::io::stdin()), stdout).await?,
    };

    info!(commands = handled, "Session ended");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=grill=trace` - Trace for grill crates only
/// - Default: `warn,grill=info`
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,grill=info"));

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from([
            "grill-kiosk",
            "--phone",
            "5521988887777",
            "--confirmation-delay-ms",
            "0",
        ])
        .unwrap();

        let mut config = ConfigState::default();
        cli.apply(&mut config).unwrap();

        assert_eq!(config.whatsapp_phone, "5521988887777");
        assert_eq!(config.confirmation_delay_ms, 0);
        assert_eq!(config.recent_orders_limit, 5);
    }

    #[test]
    fn test_cli_rejects_bad_phone() {
        let cli = Cli {
            phone: Some("abc".to_string()),
            ..Cli::default()
        };
        assert!(cli.apply(&mut ConfigState::default()).is_err());
    }
}
