//! # State Module
//!
//! Owned state containers handed to every command.
//!
//! Each command takes only the containers it needs, so tests can build
//! exactly the state a scenario requires.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Shell / run()                              │   │
//! │  │  let cart = CartState::new();                                   │   │
//! │  │  let admin = AdminState::demo();                                │   │
//! │  │  let config = ConfigState::load()?;                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │  AdminState  │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  whatsapp_phone  │              │
//! │  │    Cart>>    │  │  AdminStore>>│  │  delay, limits   │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod admin;
mod cart;
mod config;

pub use admin::AdminState;
pub use cart::CartState;
pub use config::{ConfigError, ConfigState};
