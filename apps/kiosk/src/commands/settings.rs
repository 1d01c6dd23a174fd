//! # Settings Commands
//!
//! Theme switch, demo reset, JSON backup and the kiosk configuration.

use tracing::{debug, info};

use grill_core::Theme;
use grill_store::AdminSnapshot;

use crate::state::{AdminState, ConfigState};

pub fn get_theme(admin: &AdminState) -> Theme {
    admin.with_store(|s| s.theme())
}

pub fn set_theme(admin: &AdminState, theme: Theme) -> Theme {
    debug!(?theme, "set_theme command");
    admin.with_store_mut(|s| {
        s.set_theme(theme);
        s.theme()
    })
}

pub fn toggle_theme(admin: &AdminState) -> Theme {
    admin.with_store_mut(|s| s.toggle_theme())
}

/// Restores every admin collection to the demo data.
///
/// The customer's cart is separate state and is left alone.
pub fn reset_demo(admin: &AdminState) -> AdminSnapshot {
    let snapshot = admin.with_store_mut(|s| {
        s.reset_demo();
        s.snapshot()
    });
    info!("Demo data restored");
    snapshot
}

/// Current admin data for export. Nothing is written anywhere.
pub fn backup(admin: &AdminState) -> AdminSnapshot {
    debug!("backup command");
    admin.with_store(|s| s.snapshot())
}

pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
