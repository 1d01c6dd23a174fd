//! # Order Book
//!
//! Orders are never created or deleted here; only their status moves.
//!
//! ## Two Ways to Change a Status
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  advance(id)                     update_status(id, status)             │
//! │  ───────────                     ─────────────────────────             │
//! │  one step along                  raw setter, any value                 │
//! │  received → preparing            done → received is accepted           │
//! │  → delivering → done             (logged as a warning)                 │
//! │  no-op at done                                                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, warn};

use grill_core::status;
use grill_core::{Order, OrderStatus};

/// Repository for orders.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>) -> Self {
        OrderBook { orders }
    }

    /// Sets the status unconditionally.
    ///
    /// Returns the previous status, or `None` for an unknown id.
    pub fn update_status(&mut self, id: &str, status: OrderStatus) -> Option<OrderStatus> {
        let order = self.get_mut(id)?;
        let previous = order.status;

        if previous != status && !previous.is_forward_step(status) {
            warn!(
                id = %id,
                from = %previous,
                to = %status,
                "Order status set outside the forward workflow"
            );
        } else {
            debug!(id = %id, from = %previous, to = %status, "Order status updated");
        }

        order.status = status;
        Some(previous)
    }

    /// Moves the order one step forward.
    ///
    /// Returns the new status, or `None` when the id is unknown or the order
    /// is already done.
    pub fn advance(&mut self, id: &str) -> Option<OrderStatus> {
        let order = self.get_mut(id)?;
        let next = status::advance(order);

        match next {
            Some(to) => debug!(id = %id, to = %to, "Order advanced"),
            None => debug!(id = %id, "Order already done"),
        }
        next
    }

    /// All orders in seed order.
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn with_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(move |o| o.status == status)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|o| o.id == id)
    }

    pub(crate) fn replace_all(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::AdminSnapshot;

    fn book() -> OrderBook {
        OrderBook::new(AdminSnapshot::demo().orders)
    }

    #[test]
    fn test_advance_walks_to_done() {
        let mut orders = book();

        assert_eq!(orders.advance("PED-001"), Some(OrderStatus::Preparing));
        assert_eq!(orders.advance("PED-001"), Some(OrderStatus::Delivering));
        assert_eq!(orders.advance("PED-001"), Some(OrderStatus::Done));
        assert_eq!(orders.advance("PED-001"), None);
        assert_eq!(orders.get("PED-001").unwrap().status, OrderStatus::Done);
    }

    #[test]
    fn test_advance_unknown_id() {
        let mut orders = book();
        let before = orders.list().to_vec();

        assert_eq!(orders.advance("PED-999"), None);
        assert_eq!(orders.list(), before.as_slice());
    }

    #[test]
    fn test_update_status_is_permissive() {
        let mut orders = book();

        assert_eq!(
            orders.update_status("PED-004", OrderStatus::Received),
            Some(OrderStatus::Done)
        );
        assert_eq!(orders.get("PED-004").unwrap().status, OrderStatus::Received);

        assert_eq!(
            orders.update_status("PED-001", OrderStatus::Done),
            Some(OrderStatus::Received)
        );
        assert_eq!(orders.update_status("PED-999", OrderStatus::Done), None);
    }

    #[test]
    fn test_with_status() {
        let orders = book();
        let received: Vec<&str> = orders
            .with_status(OrderStatus::Received)
            .map(|o| o.id.as_str())
            .collect();

        assert_eq!(received, vec!["PED-001", "PED-005"]);
        assert_eq!(orders.with_status(OrderStatus::Done).count(), 2);
    }

    #[test]
    fn test_status_change_keeps_total() {
        let mut orders = book();
        orders.advance("PED-002");

        let order = orders.get("PED-002").unwrap();
        assert_eq!(order.total.cents(), 5170);
        assert_eq!(order.items.len(), 2);
    }
}
