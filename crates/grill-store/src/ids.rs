//! # Id and Clock Providers
//!
//! Adding a menu item or a user needs a fresh id, and adding a user needs
//! today's date. Both come from injected providers so tests stay
//! deterministic.
//!
//! | Provider        | Menu item id          | User id          |
//! |-----------------|-----------------------|------------------|
//! | `UuidIds`       | `custom-<uuid>`       | `u-<uuid>`       |
//! | `SequentialIds` | `custom-1`, `custom-2`| `u-1`, `u-2`     |

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

/// Source of ids for newly added records.
pub trait IdGenerator: Send + Sync + Debug {
    fn menu_item_id(&self) -> String;
    fn user_id(&self) -> String;
}

/// Source of the current calendar date.
pub trait Clock: Send + Sync + Debug {
    fn today(&self) -> NaiveDate;
}

// =============================================================================
// Production Providers
// =============================================================================

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn menu_item_id(&self) -> String {
        format!("custom-{}", Uuid::new_v4().simple())
    }

    fn user_id(&self) -> String {
        format!("u-{}", Uuid::new_v4().simple())
    }
}

/// Today's date in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

// =============================================================================
// Deterministic Providers
// =============================================================================

/// Counter-based ids. One counter is shared by both kinds.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl IdGenerator for SequentialIds {
    fn menu_item_id(&self) -> String {
        format!("custom-{}", self.bump())
    }

    fn user_id(&self) -> String {
        format!("u-{}", self.bump())
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
