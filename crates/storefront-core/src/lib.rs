//! # storefront-core: Pure Cart Logic
//!
//! Shopping-cart state for the storefront as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Cart Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Storefront UI                             │   │
//! │  │    Product card ──► Cart icon (count) ──► Cart drawer (items)   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ intents / snapshots                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              apps/storefront (CartStore, commands)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  reducer  │  │   │
//! │  │   │  Product  │  │   Money   │  │ add/remove│  │ CartState │  │   │
//! │  │   │  LineItem │  │           │  │ clear     │  │ CartIntent│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, LineItem, ProductId
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Line item reconciliation and derived totals
//! - [`reducer`] - CartState, actions, intents
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::reducer::{apply_intent, CartIntent, CartState};
//! use storefront_core::{Money, Product};
//!
//! let hat = Product::new(1, "Hat", Money::from_cents(1000));
//! let scarf = Product::new(2, "Scarf", Money::from_cents(500));
//!
//! let mut state = CartState::new();
//! for intent in [
//!     CartIntent::AddItem(hat.clone()),
//!     CartIntent::AddItem(hat),
//!     CartIntent::AddItem(scarf),
//! ] {
//!     state = apply_intent(&state, &intent).unwrap();
//! }
//!
//! assert_eq!(state.count(), 3);
//! assert_eq!(state.total().cents(), 2500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod reducer;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::CartTotals;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use reducer::{CartAction, CartIntent, CartState};
pub use types::*;
