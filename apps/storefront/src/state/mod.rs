//! # State Module
//!
//! Application state for the storefront cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Application scope (run)                       │   │
//! │  │  let config = StoreConfig::load_or_default(None);               │   │
//! │  │  let mut store = CartStore::with_config(&config);               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │             ┌────────────────┴────────────────┐                        │
//! │             ▼                                 ▼                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │     CartStore        │          │    StoreConfig       │            │
//! │  │                      │          │                      │            │
//! │  │  Arc<CartState>      │          │  currency symbol     │            │
//! │  │  subscribers         │          │  drawer default      │            │
//! │  └──────────────────────┘          └──────────────────────┘            │
//! │                                                                         │
//! │  CartStore: single owner, mutated through &mut, no lock                │
//! │  StoreConfig: read-only after initialization                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartStore, Listener, SubscriptionId};
pub use config::{StoreConfig, CONFIG_PATH_ENV};
