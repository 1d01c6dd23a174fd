//! # Order Commands
//!
//! The admin orders page: list with a status filter, and the two ways of
//! moving a status (the "advance" button and the status dropdown).

use serde::Serialize;
use tracing::{debug, info};

use grill_core::{Order, OrderStatus};

use crate::error::ApiError;
use crate::state::AdminState;

/// Outcome of pressing "advance" on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceResponse {
    pub order: Order,
    /// `false` when the order was already done.
    pub advanced: bool,
}

/// Outcome of choosing a status from the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub id: String,
    pub from: OrderStatus,
    pub to: OrderStatus,
}

/// One row of the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    #[serde(flatten)]
    pub order: Order,
    pub status_label: &'static str,
    pub line_count: usize,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        OrderRow {
            status_label: order.status.label(),
            line_count: order.line_count(),
            order: order.clone(),
        }
    }
}

pub fn list_orders(admin: &AdminState, status: Option<OrderStatus>) -> Vec<OrderRow> {
    debug!(?status, "list_orders command");
    admin.with_store(|s| match status {
        Some(status) => s.orders().with_status(status).map(OrderRow::from).collect(),
        None => s.orders().list().iter().map(OrderRow::from).collect(),
    })
}

pub fn get_order(admin: &AdminState, id: &str) -> Result<Order, ApiError> {
    admin
        .with_store(|s| s.orders().get(id).cloned())
        .ok_or_else(|| ApiError::not_found("Order", id))
}

/// Moves the order one step along the workflow. A done order is returned
/// unchanged with `advanced: false`.
pub fn advance_order(admin: &AdminState, id: &str) -> Result<AdvanceResponse, ApiError> {
    let (next, order) = admin.with_store_mut(|s| {
        let next = s.orders_mut().advance(id);
        (next, s.orders().get(id).cloned())
    });
    let order = order.ok_or_else(|| ApiError::not_found("Order", id))?;

    if let Some(to) = next {
        info!(id = %id, status = %to, "Order advanced");
    }
    Ok(AdvanceResponse {
        order,
        advanced: next.is_some(),
    })
}

/// Sets any status, including backwards moves.
pub fn set_order_status(
    admin: &AdminState,
    id: &str,
    status: OrderStatus,
) -> Result<StatusChange, ApiError> {
    let from = admin
        .with_store_mut(|s| s.orders_mut().update_status(id, status))
        .ok_or_else(|| ApiError::not_found("Order", id))?;

    info!(id = %id, from = %from, to = %status, "Order status set");
    Ok(StatusChange {
        id: id.to_string(),
        from,
        to: status,
    })
}
