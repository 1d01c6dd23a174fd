//! # Message Channel
//!
//! The outbound side of checkout. The kiosk never talks to WhatsApp
//! itself: it hands a prefilled click-to-chat link to a channel and waits
//! for the channel to acknowledge it.
//!
//! ```text
//! checkout ──► MessageChannel::deliver(link) ──► Ok(Delivery) ──► clear cart
//!                                           └──► Err(ChannelError) ──► cart kept
//! ```

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use grill_core::WhatsAppLink;

/// Why a hand-off was not acknowledged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("Message channel unavailable: {0}")]
    Unavailable(String),

    #[error("Message rejected: {0}")]
    Rejected(String),
}

/// Acknowledgement of a delivered hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub url: String,
    pub acknowledged_at: DateTime<Utc>,
}

impl Delivery {
    pub fn now(link: &WhatsAppLink) -> Self {
        Delivery {
            url: link.url(),
            acknowledged_at: Utc::now(),
        }
    }
}

/// Somewhere an order message can be sent.
pub trait MessageChannel: Send + Sync {
    fn deliver(
        &self,
        link: &WhatsAppLink,
    ) -> impl Future<Output = Result<Delivery, ChannelError>> + Send;
}

/// Prints the link and acknowledges after a fixed delay, like the
/// "Pedido enviado!" confirmation screen.
#[derive(Debug, Clone)]
pub struct ConsoleChannel {
    delay: Duration,
}

impl ConsoleChannel {
    pub fn new(delay: Duration) -> Self {
        ConsoleChannel { delay }
    }
}

impl MessageChannel for ConsoleChannel {
    fn deliver(
        &self,
        link: &WhatsAppLink,
    ) -> impl Future<Output = Result<Delivery, ChannelError>> + Send {
        let url = link.url();
        let delivery = Delivery::now(link);
        let delay = self.delay;

        async move {
            info!(url = %url, "Open this link to send the order");
            tokio::time::sleep(delay).await;
            Ok(Delivery {
                acknowledged_at: Utc::now(),
                ..delivery
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_console_channel_acknowledges() {
        let channel = ConsoleChannel::new(Duration::from_millis(0));
        let link = WhatsAppLink::new("5511999999999", "Olá");

        let delivery = channel.deliver(&link).await.unwrap();
        assert_eq!(delivery.url, link.url());
    }

    #[tokio::test(start_paused = true)]
    async fn test_console_channel_waits_for_delay() {
        let channel = ConsoleChannel::new(Duration::from_millis(3000));
        let link = WhatsAppLink::new("5511999999999", "Olá");

        let started = tokio::time::Instant::now();
        channel.deliver(&link).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(3000));
    }
}
