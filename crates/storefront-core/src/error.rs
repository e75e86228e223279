//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  └── CoreError        - Cart rule violations                           │
//! │                                                                         │
//! │  storefront app errors (separate crate)                                │
//! │  ├── StoreError       - Intent dispatch, config, driver I/O            │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: CoreError → StoreError → ApiError → UI                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::ProductId;

/// Core cart logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A decrement was requested for a product that is not in the cart.
    ///
    /// ## When This Occurs
    /// - The UI rendered a stale cart and the user clicked "-" on a row
    ///   that was already removed
    /// - A caller passed an id that never entered the cart
    ///
    /// The cart is left untouched when this is returned.
    #[error("Product {0} is not in the cart")]
    ItemNotInCart(ProductId),

    /// Another unit would push a line quantity past `i64::MAX`.
    #[error("Quantity of product {0} is too large")]
    QuantityOverflow(ProductId),

    /// A line total or the cart total does not fit in `i64` cents.
    ///
    /// Prices come from outside, so this is a rejected intent rather than
    /// a panic. The cart is left untouched.
    #[error("Cart total is too large")]
    TotalOverflow,
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
