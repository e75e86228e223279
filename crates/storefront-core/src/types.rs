//! # Domain Types
//!
//! The shapes that flow between the catalogue UI and the cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   add_item_to_cart    ┌─────────────────┐         │
//! │  │    Product      │ ────────────────────► │    LineItem     │         │
//! │  │  ─────────────  │                       │  ─────────────  │         │
//! │  │  id             │                       │  id             │         │
//! │  │  name           │                       │  name           │         │
//! │  │  price (Money)  │                       │  price (Money)  │         │
//! │  │  image_url      │                       │  image_url      │         │
//! │  └─────────────────┘                       │  quantity ≥ 1   │         │
//! │                                            │  added_at       │         │
//! │                                            └─────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A line item is a product snapshot plus a quantity. Line items are unique
//! by `id` within a cart.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product ID
// =============================================================================

/// Catalogue identifier of a product. The cart keys line items by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(#[ts(type = "number")] u64);

impl ProductId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as the catalogue UI hands it to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    pub id: ProductId,

    /// Display name shown in the cart drawer.
    pub name: String,

    /// Unit price in cents.
    pub price: Money,

    /// Thumbnail shown next to the line in the cart drawer.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    pub fn new(id: u64, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            price,
            image_url: None,
        }
    }

    /// Builder-style setter for the thumbnail.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in the cart with its quantity.
///
/// ## Invariants
/// - `quantity >= 1`. A line that would reach 0 is removed from the cart
///   instead; see [`crate::cart::remove_item`].
/// - Display fields are frozen copies of the product at the time it was
///   first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image_url: Option<String>,
    #[ts(type = "number")]
    pub quantity: i64,

    /// When the product first entered the cart. Quantity changes keep it.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a quantity-1 line from a product.
    pub fn from_product(product: &Product) -> Self {
        LineItem {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns a copy of this line with a different quantity.
    pub fn with_quantity(&self, quantity: i64) -> Self {
        LineItem {
            quantity,
            ..self.clone()
        }
    }

    /// Unit price × quantity, or `None` if it does not fit in `i64` cents.
    #[inline]
    pub fn line_total(&self) -> Option<Money> {
        self.price.checked_mul_quantity(self.quantity)
    }
}
