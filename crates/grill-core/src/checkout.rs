//! # Checkout Hand-off
//!
//! Turns the cart into the text message the restaurant receives on WhatsApp.
//!
//! ```text
//! Cart ──► OrderSummary::from_cart ──► render(store name) ──► WhatsAppLink::url
//!  (snapshot at submit time)            (message text)        (outbound link)
//! ```
//!
//! Nothing here sends anything. The caller hands the link to a delivery
//! channel and clears the cart once that channel acknowledges.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;
use crate::types::OrderItem;

/// Endpoint for click-to-chat links.
pub const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// What the customer is ordering, frozen at the moment of submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    pub customer: String,
    pub address: String,
    pub items: Vec<OrderItem>,
    pub total: Money,
}

impl OrderSummary {
    /// Snapshots the cart's current lines and total.
    pub fn from_cart(cart: &Cart, customer: &str, address: &str) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|entry| OrderItem {
                name: entry.item.name.clone(),
                quantity: entry.quantity,
                price: entry.item.price,
            })
            .collect();

        OrderSummary {
            customer: customer.trim().to_string(),
            address: address.trim().to_string(),
            items,
            total: cart.total(),
        }
    }

    /// Renders the message body (WhatsApp markdown, `*bold*`).
    pub fn render(&self, store_name: &str) -> String {
        let lines = self
            .items
            .iter()
            .map(|i| format!("▸ {}x {} — {}", i.quantity, i.name, i.line_total()))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "🔥 *Novo Pedido - {store}*\n\n\
             👤 *Nome:* {customer}\n\
             📍 *Endereço:* {address}\n\n\
             📋 *Itens:*\n{lines}\n\n\
             💰 *Total: {total}*",
            store = store_name,
            customer = self.customer,
            address = self.address,
            lines = lines,
            total = self.total,
        )
    }
}

/// A click-to-chat link carrying a prefilled message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WhatsAppLink {
    /// Destination number, digits only with country code (`5511999999999`).
    pub phone: String,
    pub text: String,
}

impl WhatsAppLink {
    pub fn new(phone: impl Into<String>, text: impl Into<String>) -> Self {
        WhatsAppLink {
            phone: phone.into(),
            text: text.into(),
        }
    }

    /// Full URL with the message percent-encoded.
    pub fn url(&self) -> String {
        format!(
            "{}?phone={}&text={}",
            WHATSAPP_SEND_URL,
            urlencoding::encode(&self.phone),
            urlencoding::encode(&self.text)
        )
    }
}
