//! # Cart Commands
//!
//! Intent functions for cart manipulation, one per UI action.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_item_to_cart   ┌──────────┐                         │
//! │  │  Empty   │ ──────────────────► │ In Cart  │ ◄──┐ add / remove       │
//! │  │  Cart    │ ◄────────────────── │          │ ───┘ clear              │
//! │  └──────────┘  last line removed  └──────────┘                         │
//! │                                                                         │
//! │  set_is_cart_open toggles the drawer in either state.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the whole cart so the UI never has to patch its
//! own copy.

use std::sync::Arc;

use serde::Serialize;
use storefront_core::{CartIntent, CartState, LineItem, Money, Product, ProductId};
use tracing::{debug, warn};

use crate::error::{ApiError, StoreResult};
use crate::state::{CartStore, StoreConfig};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<LineItem>,
    pub is_open: bool,
    pub count: i64,
    pub total: Money,

    /// `total` formatted with the configured currency.
    pub total_display: String,
}

impl CartResponse {
    pub fn from_state(state: &CartState, config: &StoreConfig) -> Self {
        CartResponse {
            items: state.items().to_vec(),
            is_open: state.is_open(),
            count: state.count(),
            total: state.total(),
            total_display: config.format_currency(state.total().cents()),
        }
    }
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart drawer                                                           │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  Brown Brim              ‹ 2 ›          $50.00             ×  │    │
/// │  │  Blue Beanie             ‹ 1 ›          $18.00             ×  │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  TOTAL (3 items)                         $68.00               │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(store: &CartStore, config: &StoreConfig) -> CartResponse {
    CartResponse::from_state(&store.snapshot(), config)
}

/// Opens or closes the cart drawer.
pub fn set_is_cart_open(
    store: &mut CartStore,
    config: &StoreConfig,
    is_open: bool,
) -> Result<CartResponse, ApiError> {
    debug!(is_open, "set_is_cart_open command");
    respond(store.set_is_cart_open(is_open), config, "set_is_cart_open")
}

/// Adds one unit of a product to the cart.
///
/// ## Errors
/// `CART_ERROR` if the cart total would no longer fit in 64-bit cents. The
/// cart is unchanged.
pub fn add_item_to_cart(
    store: &mut CartStore,
    config: &StoreConfig,
    product: &Product,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product.id, "add_item_to_cart command");
    respond(store.add_item_to_cart(product), config, "add_item_to_cart")
}

/// Removes one unit of a product from the cart.
///
/// ## Errors
/// `CART_ERROR` if the product is not in the cart (e.g. a double click on a
/// row that already disappeared). The cart is unchanged.
pub fn remove_item_from_cart(
    store: &mut CartStore,
    config: &StoreConfig,
    product_id: &ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "remove_item_from_cart command");
    respond(store.remove_item_from_cart(product_id), config, "remove_item_from_cart")
}

/// Removes a product's line from the cart whatever its quantity.
pub fn clear_item_from_cart(
    store: &mut CartStore,
    config: &StoreConfig,
    product_id: &ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "clear_item_from_cart command");
    respond(store.clear_item_from_cart(product_id), config, "clear_item_from_cart")
}

/// Routes a decoded intent to the matching command.
pub fn dispatch(
    store: &mut CartStore,
    config: &StoreConfig,
    intent: &CartIntent,
) -> Result<CartResponse, ApiError> {
    match intent {
        CartIntent::SetIsCartOpen(is_open) => set_is_cart_open(store, config, *is_open),
        CartIntent::AddItem(product) => add_item_to_cart(store, config, product),
        CartIntent::RemoveItem(id) => remove_item_from_cart(store, config, id),
        CartIntent::ClearItem(id) => clear_item_from_cart(store, config, id),
    }
}

fn respond(
    result: StoreResult<Arc<CartState>>,
    config: &StoreConfig,
    command: &'static str,
) -> Result<CartResponse, ApiError> {
    result
        .map(|state| CartResponse::from_state(&state, config))
        .map_err(|e| {
            warn!(command, "Cart command rejected: {}", e);
            ApiError::from(e)
        })
}
