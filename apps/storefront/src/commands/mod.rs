//! # Commands Module
//!
//! The intent functions the storefront UI calls.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── cart.rs     ◄─── Cart intents and the cart response shape
//! ```
//!
//! ## State Injection
//! Commands take the store and config they need as parameters:
//! ```rust,ignore
//! // Only reads
//! fn get_cart(store: &CartStore, config: &StoreConfig) -> CartResponse
//!
//! // Mutates
//! fn add_item_to_cart(store: &mut CartStore, config: &StoreConfig, product: &Product)
//! ```

pub mod cart;
