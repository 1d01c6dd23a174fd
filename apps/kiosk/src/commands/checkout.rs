//! # Checkout Command
//!
//! Turns the cart into a WhatsApp message and hands it off.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checkout "Lucas Silva" "Rua Augusta, 200"                             │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  1. Validate name and address (trimmed, non-empty)                     │
//! │  2. Snapshot the cart into an OrderSummary (empty cart → CART_ERROR)   │
//! │  3. Render the message with the store name from settings               │
//! │  4. Build the link for the configured WhatsApp number                  │
//! │  5. channel.deliver(link).await                                        │
//! │        ├── Ok  → clear the cart, return the delivery                   │
//! │        └── Err → cart untouched, CHANNEL_ERROR                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No lock is held across the `.await`.

use serde::Serialize;
use tracing::{debug, info};

use grill_core::validation::{validate_address, validate_customer_name};
use grill_core::{CoreError, OrderSummary, WhatsAppLink};

use crate::channel::{Delivery, MessageChannel};
use crate::error::ApiError;
use crate::state::{AdminState, CartState, ConfigState};

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub summary: OrderSummary,
    pub message: String,
    pub delivery: Delivery,
}

pub async fn checkout<C: MessageChannel>(
    cart: &CartState,
    admin: &AdminState,
    config: &ConfigState,
    channel: &C,
    name: &str,
    address: &str,
) -> Result<CheckoutResponse, ApiError> {
    debug!("checkout command");

    let name = validate_customer_name(name)?;
    let address = validate_address(address)?;

    let summary = cart.with_cart(|c| {
        if c.is_empty() {
            Err(CoreError::EmptyCart)
        } else {
            Ok(OrderSummary::from_cart(c, &name, &address))
        }
    })?;

    let store_name = admin.with_store(|s| s.settings().name.clone());
    let message = summary.render(&store_name);
    let link = WhatsAppLink::new(config.whatsapp_phone.clone(), message.clone());

    let delivery = channel.deliver(&link).await?;

    cart.with_cart_mut(|c| c.clear());
    info!(
        customer = %summary.customer,
        total = %summary.total,
        lines = summary.items.len(),
        "Order handed off"
    );

    Ok(CheckoutResponse {
        summary,
        message,
        delivery,
    })
}
