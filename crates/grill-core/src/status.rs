//! # Order Status Workflow
//!
//! Fulfillment progress of a submitted order.
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌────────────┐    ┌──────┐
//! │ received │───►│ preparing │───►│ delivering │───►│ done │ (terminal)
//! └──────────┘    └───────────┘    └────────────┘    └──────┘
//!       advance()       advance()         advance()      advance() = no-op
//! ```
//!
//! [`advance`] is the guarded helper: one step forward, never past `done`.
//! The store's raw setter may assign any status; [`OrderStatus::is_forward_step`]
//! lets it tell a normal step apart from an override.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::Order;

/// Where an order is in the kitchen-to-door flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order arrived, nobody has started on it.
    Received,
    /// In the kitchen.
    Preparing,
    /// Out for delivery.
    Delivering,
    /// Delivered. Terminal.
    Done,
}

impl OrderStatus {
    /// The fixed sequence every order moves through.
    pub const FLOW: [OrderStatus; 4] = [
        OrderStatus::Received,
        OrderStatus::Preparing,
        OrderStatus::Delivering,
        OrderStatus::Done,
    ];

    /// Position in [`OrderStatus::FLOW`].
    pub const fn position(&self) -> usize {
        match self {
            OrderStatus::Received => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::Delivering => 2,
            OrderStatus::Done => 3,
        }
    }

    /// The state after this one, or `None` at `done`.
    pub fn next(&self) -> Option<OrderStatus> {
        Self::FLOW.get(self.position() + 1).copied()
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Done)
    }

    /// True when moving to `to` is exactly one step forward.
    pub fn is_forward_step(&self, to: OrderStatus) -> bool {
        self.next() == Some(to)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "received",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Done => "done",
        }
    }

    /// Label shown on status badges.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Received => "Recebido",
            OrderStatus::Preparing => "Em Preparo",
            OrderStatus::Delivering => "Saiu p/ Entrega",
            OrderStatus::Done => "Finalizado",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Received
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::FLOW
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: Self::FLOW.iter().map(|st| st.as_str().to_string()).collect(),
            })
    }
}

/// Moves an order one step forward.
///
/// Returns the new status, or `None` when the order was already `done`
/// (in which case it is left untouched).
pub fn advance(order: &mut Order) -> Option<OrderStatus> {
    let next = order.status.next()?;
    order.status = next;
    Some(next)
}

// =============================================================================
// Unit Tests
// =============================================================================
