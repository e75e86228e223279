//! # Cart Reducer
//!
//! The cart state and the only two ways it can change.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart State Transitions                           │
//! │                                                                         │
//! │   CartIntent (what the UI asked for)                                   │
//! │   ├── AddItem(product)    ──┐                                          │
//! │   ├── RemoveItem(id)      ──┼──► new item list ──► SetCartItems ──┐    │
//! │   ├── ClearItem(id)       ──┘                                     │    │
//! │   └── SetIsCartOpen(bool) ───────────────────────► SetIsCartOpen ─┤    │
//! │                                                                   ▼    │
//! │                                                      reduce(state, a)  │
//! │                                                                   │    │
//! │   SetCartItems:  items replaced, count/total recomputed from them │    │
//! │   SetIsCartOpen: is_open replaced, items/count/total untouched    │    │
//! │                                                                   ▼    │
//! │                                                         new CartState  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `CartAction` is a closed enum, so every action is handled at compile
//! time. There is no "unknown action" branch to fall into.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{add_item, clear_item, recompute, remove_item, CartTotals};
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{LineItem, Product, ProductId};

// =============================================================================
// Cart State
// =============================================================================

/// A complete, self-consistent view of the cart.
///
/// ## Invariants
/// - `count` and `total` always equal `recompute(&items)`; fields are
///   private, so items only change through [`reduce`], which recomputes
/// - `items` are unique by id with every quantity >= 1 when they were built
///   by [`apply_intent`]. `reduce` takes a `SetCartItems` list as given and
///   does not re-check this.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    items: Vec<LineItem>,
    is_open: bool,
    #[ts(type = "number")]
    count: i64,
    total: Money,
}

impl CartState {
    /// Empty cart, drawer closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the drawer flag.
    pub fn with_is_open(self, is_open: bool) -> Self {
        CartState { is_open, ..self }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart drawer is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            count: self.count,
            total: self.total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up the line for a product.
    pub fn line(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == *id)
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Low-level state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Replace the item list. Totals are derived from the new list.
    SetCartItems(Vec<LineItem>),

    /// Show or hide the cart drawer.
    SetIsCartOpen(bool),
}

/// Applies one action and returns the next state.
///
/// ## Errors
/// `CoreError::TotalOverflow` if the new items' totals do not fit in `i64`.
/// Toggling the drawer never fails.
pub fn reduce(state: &CartState, action: CartAction) -> CoreResult<CartState> {
    let next = match action {
        CartAction::SetCartItems(items) => {
            let CartTotals { count, total } = recompute(&items)?;
            CartState {
                items,
                is_open: state.is_open,
                count,
                total,
            }
        }
        CartAction::SetIsCartOpen(is_open) => state.clone().with_is_open(is_open),
    };
    Ok(next)
}

// =============================================================================
// Intents
// =============================================================================

/// A user action coming from the UI.
///
/// ## Wire Format
/// Adjacently tagged so the UI can send
/// `{"type":"addItem","payload":{"id":1,"name":"Hat","price":1000}}` or
/// `{"type":"setIsCartOpen","payload":true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
#[ts(export)]
pub enum CartIntent {
    SetIsCartOpen(bool),
    AddItem(Product),
    RemoveItem(ProductId),
    ClearItem(ProductId),
}

impl CartIntent {
    /// Every `type` tag the wire format accepts.
    pub const TAGS: [&'static str; 4] = ["setIsCartOpen", "addItem", "removeItem", "clearItem"];

    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            CartIntent::SetIsCartOpen(_) => "set_is_cart_open",
            CartIntent::AddItem(_) => "add_item",
            CartIntent::RemoveItem(_) => "remove_item",
            CartIntent::ClearItem(_) => "clear_item",
        }
    }

    /// The product this intent targets, if any.
    pub fn product_id(&self) -> Option<ProductId> {
        match self {
            CartIntent::SetIsCartOpen(_) => None,
            CartIntent::AddItem(product) => Some(product.id),
            CartIntent::RemoveItem(id) | CartIntent::ClearItem(id) => Some(*id),
        }
    }
}

/// Resolves an intent against `state` into the action to reduce.
///
/// Item intents build a brand-new list from the current one; the visibility
/// intent maps straight through.
pub fn plan(state: &CartState, intent: &CartIntent) -> CoreResult<CartAction> {
    let action = match intent {
        CartIntent::SetIsCartOpen(is_open) => CartAction::SetIsCartOpen(*is_open),
        CartIntent::AddItem(product) => CartAction::SetCartItems(add_item(&state.items, product)?),
        CartIntent::RemoveItem(id) => CartAction::SetCartItems(remove_item(&state.items, id)?),
        CartIntent::ClearItem(id) => CartAction::SetCartItems(clear_item(&state.items, id)),
    };
    Ok(action)
}

/// `plan` then `reduce`. On error `state` is left as it was.
///
/// ## Example
/// ```rust
/// use storefront_core::reducer::{apply_intent, CartIntent, CartState};
/// use storefront_core::{Money, Product};
///
/// let hat = Product::new(1, "Hat", Money::from_cents(1000));
/// let state = apply_intent(&CartState::new(), &CartIntent::AddItem(hat)).unwrap();
///
/// assert_eq!(state.count(), 1);
/// assert_eq!(state.total().cents(), 1000);
/// ```
pub fn apply_intent(state: &CartState, intent: &CartIntent) -> CoreResult<CartState> {
    let action = plan(state, intent)?;
    reduce(state, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn hat() -> Product {
        Product::new(1, "Hat", Money::from_cents(1000))
    }

    #[test]
    fn test_set_cart_items_recomputes_totals() {
        let items = vec![
            LineItem::from_product(&hat()).with_quantity(2),
            LineItem::from_product(&Product::new(2, "Scarf", Money::from_cents(500))),
        ];
        let state = reduce(&CartState::new(), CartAction::SetCartItems(items)).unwrap();

        assert_eq!(state.count(), 3);
        assert_eq!(state.total().cents(), 2500);
        assert_eq!(Ok(state.totals()), recompute(state.items()));
    }

    #[test]
    fn test_set_cart_items_keeps_drawer_flag() {
        let open = reduce(&CartState::new(), CartAction::SetIsCartOpen(true)).unwrap();
        let next = reduce(&open, CartAction::SetCartItems(Vec::new())).unwrap();
        assert!(next.is_open());
    }

    #[test]
    fn test_add_past_max_total_leaves_state() {
        let crown = Product::new(9, "Crown", Money::from_cents(5_000_000_000_000_000_000));
        let state = apply_intent(&CartState::new(), &CartIntent::AddItem(crown.clone())).unwrap();

        let err = apply_intent(&state, &CartIntent::AddItem(crown)).unwrap_err();

        assert_eq!(err, CoreError::TotalOverflow);
        assert_eq!(state.count(), 1);
        assert_eq!(state.total().cents(), 5_000_000_000_000_000_000);
    }

    #[test]
    fn test_toggle_drawer_leaves_items_untouched() {
        let state = apply_intent(&CartState::new(), &CartIntent::AddItem(hat())).unwrap();

        let opened = apply_intent(&state, &CartIntent::SetIsCartOpen(true)).unwrap();
        let closed = apply_intent(&opened, &CartIntent::SetIsCartOpen(false)).unwrap();

        assert!(opened.is_open());
        assert!(!closed.is_open());
        assert_eq!(closed.items(), state.items());
        assert_eq!(closed.count(), state.count());
        assert_eq!(closed.total(), state.total());
    }

    #[test]
    fn test_add_remove_scenario() {
        let hat = hat();
        let id = hat.id;

        let s1 = apply_intent(&CartState::new(), &CartIntent::AddItem(hat.clone())).unwrap();
        assert_eq!(s1.items().len(), 1);
        assert_eq!(s1.line(&id).map(|l| l.quantity), Some(1));
        assert_eq!((s1.count(), s1.total().cents()), (1, 1000));

        let s2 = apply_intent(&s1, &CartIntent::AddItem(hat)).unwrap();
        assert_eq!(s2.line(&id).map(|l| l.quantity), Some(2));
        assert_eq!((s2.count(), s2.total().cents()), (2, 2000));

        let s3 = apply_intent(&s2, &CartIntent::RemoveItem(id)).unwrap();
        assert_eq!(s3.line(&id).map(|l| l.quantity), Some(1));
        assert_eq!((s3.count(), s3.total().cents()), (1, 1000));

        let s4 = apply_intent(&s3, &CartIntent::RemoveItem(id)).unwrap();
        assert!(s4.is_empty());
        assert_eq!((s4.count(), s4.total().cents()), (0, 0));
    }

    #[test]
    fn test_clear_item_intent() {
        let state = apply_intent(&CartState::new(), &CartIntent::AddItem(hat())).unwrap();
        let state = apply_intent(&state, &CartIntent::AddItem(hat())).unwrap();
        let cleared = apply_intent(&state, &CartIntent::ClearItem(hat().id)).unwrap();

        assert!(cleared.is_empty());
        assert_eq!(cleared.count(), 0);
        assert!(cleared.total().is_zero());
    }

    #[test]
    fn test_remove_absent_leaves_state() {
        let state = apply_intent(&CartState::new(), &CartIntent::AddItem(hat())).unwrap();
        let err = apply_intent(&state, &CartIntent::RemoveItem(ProductId::new(2))).unwrap_err();

        assert_eq!(err, CoreError::ItemNotInCart(ProductId::new(2)));
        assert_eq!(state.count(), 1);
    }

    #[test]
    fn test_intent_wire_format() {
        let intent: CartIntent = serde_json::from_str(
            r#"{"type":"addItem","payload":{"id":1,"name":"Hat","price":1000}}"#,
        )
        .unwrap();
        assert_eq!(intent, CartIntent::AddItem(hat()));

        let intent: CartIntent =
            serde_json::from_str(r#"{"type":"removeItem","payload":1}"#).unwrap();
        assert_eq!(intent, CartIntent::RemoveItem(ProductId::new(1)));

        let intent: CartIntent =
            serde_json::from_str(r#"{"type":"setIsCartOpen","payload":true}"#).unwrap();
        assert_eq!(intent.kind(), "set_is_cart_open");
        assert_eq!(intent.product_id(), None);
    }

    #[test]
    fn test_tags_cover_every_variant() {
        let intents = [
            CartIntent::SetIsCartOpen(true),
            CartIntent::AddItem(hat()),
            CartIntent::RemoveItem(ProductId::new(1)),
            CartIntent::ClearItem(ProductId::new(1)),
        ];
        for intent in intents {
            let json = serde_json::to_value(&intent).unwrap();
            let tag = json["type"].as_str().unwrap().to_string();
            assert!(CartIntent::TAGS.contains(&tag.as_str()), "missing tag {}", tag);
        }
    }

    #[test]
    fn test_unknown_intent_tag_is_rejected() {
        let result = serde_json::from_str::<CartIntent>(r#"{"type":"emptyCart","payload":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_state_json_shape() {
        let state = apply_intent(&CartState::new(), &CartIntent::AddItem(hat())).unwrap();
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["isOpen"], false);
        assert_eq!(json["count"], 1);
        assert_eq!(json["total"], 1000);
        assert_eq!(json["items"][0]["quantity"], 1);
    }
}
