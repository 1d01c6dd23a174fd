//! # Seed Data Dump
//!
//! Prints the demo data set as JSON, for front-end fixtures.
//!
//! ## Usage
//! ```bash
//! # Everything (menu, settings, orders, users, theme)
//! cargo run -p grill-store --bin seed
//!
//! # A single collection
//! cargo run -p grill-store --bin seed -- --only menu
//!
//! # Single-line JSON
//! cargo run -p grill-store --bin seed -- --compact
//! ```

use clap::{Parser, ValueEnum};

use grill_store::seed::weekly_sales;
use grill_store::AdminSnapshot;

/// Grill Point seed data
#[derive(Debug, Parser)]
#[command(name = "seed", version, about = "Prints the Grill Point demo data as JSON")]
struct Args {
    /// Print a single collection instead of the whole snapshot
    #[arg(short, long, value_enum)]
    only: Option<Collection>,

    /// Single-line JSON
    #[arg(short, long)]
    compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Collection {
    Menu,
    Settings,
    Orders,
    Users,
    Theme,
    /// Weekly sales series shown on the dashboard chart
    Sales,
}

fn render(only: Option<Collection>, compact: bool) -> serde_json::Result<String> {
    let seed = AdminSnapshot::demo();
    let value = match only {
        None => serde_json::to_value(&seed)?,
        Some(Collection::Menu) => serde_json::to_value(&seed.menu)?,
        Some(Collection::Settings) => serde_json::to_value(&seed.settings)?,
        Some(Collection::Orders) => serde_json::to_value(&seed.orders)?,
        Some(Collection::Users) => serde_json::to_value(&seed.users)?,
        Some(Collection::Theme) => serde_json::to_value(seed.theme)?,
        Some(Collection::Sales) => serde_json::to_value(weekly_sales())?,
    };

    if compact {
        serde_json::to_string(&value)
    } else {
        serde_json::to_string_pretty(&value)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    println!("{}", render(args.only, args.compact)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_collection_names() {
        let args = Args::try_parse_from(["seed", "--only", "orders", "-c"]).unwrap();
        assert_eq!(args.only, Some(Collection::Orders));
        assert!(args.compact);

        assert!(Args::try_parse_from(["seed", "--only", "inventory"]).is_err());
        assert!(Args::try_parse_from(["seed", "--verbose"]).is_err());
    }

    #[test]
    fn test_render_single_collection() {
        let json = render(Some(Collection::Theme), true).unwrap();
        assert_eq!(json, "\"dark\"");

        let menu: serde_json::Value = serde_json::from_str(&render(Some(Collection::Menu), false).unwrap()).unwrap();
        assert_eq!(menu.as_array().unwrap().len(), 13);
    }

    #[test]
    fn test_render_everything() {
        let all: serde_json::Value = serde_json::from_str(&render(None, true).unwrap()).unwrap();
        for key in ["menu", "settings", "orders", "users", "theme"] {
            assert!(all.get(key).is_some(), "missing {}", key);
        }
    }
}
