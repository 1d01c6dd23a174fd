//! # Dashboard Command
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬──────────────┐
//! │ Itens Ativos │ Pedidos      │ Faturamento  │ Pendentes    │
//! │     13       │     6        │ R$ 477,10    │     4        │
//! └──────────────┴──────────────┴──────────────┴──────────────┘
//!  Vendas da semana (Seg..Dom)       Pedidos recentes (first N)
//! ```

use serde::Serialize;
use tracing::debug;

use grill_core::stats::recent_orders;
use grill_core::{DashboardStats, Order, SalesPoint};
use grill_store::seed::weekly_sales;

use crate::state::{AdminState, ConfigState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub weekly_sales: Vec<SalesPoint>,
    pub recent_orders: Vec<Order>,
}

pub fn get_dashboard(admin: &AdminState, config: &ConfigState) -> DashboardResponse {
    debug!("get_dashboard command");
    admin.with_store(|s| DashboardResponse {
        stats: s.stats(),
        weekly_sales: weekly_sales(),
        recent_orders: recent_orders(s.orders().list(), config.recent_orders_limit).to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::orders::advance_order;

    #[test]
    fn test_dashboard_numbers() {
        let admin = AdminState::demo();
        let dashboard = get_dashboard(&admin, &ConfigState::default());

        assert_eq!(dashboard.stats.active_items, 13);
        assert_eq!(dashboard.stats.revenue.to_string(), "R$ 477,10");
        assert_eq!(dashboard.stats.pending_orders, 4);
        assert_eq!(dashboard.recent_orders.len(), 5);
        assert_eq!(dashboard.weekly_sales.len(), 7);
    }

    #[test]
    fn test_pending_drops_when_order_finishes() {
        let admin = AdminState::demo();
        advance_order(&admin, "PED-003").unwrap();

        let config = ConfigState {
            recent_orders_limit: 2,
            ..ConfigState::default()
        };
        let dashboard = get_dashboard(&admin, &config);
        assert_eq!(dashboard.stats.pending_orders, 3);
        assert_eq!(dashboard.recent_orders.len(), 2);
    }
}
