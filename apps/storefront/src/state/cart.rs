//! # Cart Store
//!
//! Owns the current cart snapshot and the subscribers that render it.
//!
//! ## Ownership
//! The store is created by the top-level application scope and passed by
//! `&mut` to whatever needs to change it. There is no global instance.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  UI Action               Store Method              Snapshot Change      │
//! │  ─────────               ────────────              ───────────────      │
//! │                                                                         │
//! │  Click "Add to cart" ──► add_item_to_cart() ─────► qty + 1 / append    │
//! │                                                                         │
//! │  Click "-" ────────────► remove_item_from_cart() ► qty - 1 / drop      │
//! │                                                                         │
//! │  Click "×" ────────────► clear_item_from_cart() ─► drop line           │
//! │                                                                         │
//! │  Click cart icon ──────► set_is_cart_open() ─────► is_open             │
//! │                                                                         │
//! │  Render ───────────────► snapshot() ─────────────► (read only)         │
//! │                                                                         │
//! │  Every successful change: new Arc<CartState>, then each subscriber is  │
//! │  called in subscription order with it.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Snapshots are immutable. A component holding an older `Arc<CartState>`
//! keeps seeing exactly the cart it rendered.

use std::fmt;
use std::sync::Arc;

use storefront_core::reducer::apply_intent;
use storefront_core::{CartIntent, CartState, Product, ProductId};
use tracing::debug;

use crate::error::StoreResult;
use crate::state::StoreConfig;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback run after every committed change.
pub type Listener = Box<dyn FnMut(&CartState)>;

/// The cart store.
pub struct CartStore {
    state: Arc<CartState>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Creates an empty store with the drawer closed.
    pub fn new() -> Self {
        CartStore {
            state: Arc::new(CartState::new()),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Creates an empty store with the drawer as configured.
    pub fn with_config(config: &StoreConfig) -> Self {
        let state = CartState::new().with_is_open(config.drawer_open_on_start);
        CartStore {
            state: Arc::new(state),
            ..Self::new()
        }
    }

    /// Current snapshot. Cheap to clone and never mutated afterwards.
    pub fn snapshot(&self) -> Arc<CartState> {
        Arc::clone(&self.state)
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Registers a listener called with every new snapshot.
    ///
    /// The listener is not called for the current state; read
    /// [`CartStore::snapshot`] for the initial render.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        debug!(subscription = id.0, "Cart subscriber added");
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Applies any intent. On error the snapshot is unchanged and no
    /// subscriber runs.
    pub fn dispatch(&mut self, intent: &CartIntent) -> StoreResult<Arc<CartState>> {
        debug!(
            intent = intent.kind(),
            product_id = ?intent.product_id(),
            "Dispatching cart intent"
        );
        let next = apply_intent(&self.state, intent)?;
        Ok(self.commit(next))
    }

    /// Shows or hides the cart drawer. Items and totals are untouched.
    pub fn set_is_cart_open(&mut self, is_open: bool) -> StoreResult<Arc<CartState>> {
        self.dispatch(&CartIntent::SetIsCartOpen(is_open))
    }

    /// Adds one unit of `product`.
    ///
    /// ## Errors
    /// `CoreError::TotalOverflow` if the cart total would leave `i64` cents.
    pub fn add_item_to_cart(&mut self, product: &Product) -> StoreResult<Arc<CartState>> {
        self.dispatch(&CartIntent::AddItem(product.clone()))
    }

    /// Removes one unit of the product with `id`.
    ///
    /// ## Errors
    /// `CoreError::ItemNotInCart` if the product is not in the cart.
    pub fn remove_item_from_cart(&mut self, id: &ProductId) -> StoreResult<Arc<CartState>> {
        self.dispatch(&CartIntent::RemoveItem(*id))
    }

    /// Drops the line for `id` whatever its quantity.
    pub fn clear_item_from_cart(&mut self, id: &ProductId) -> StoreResult<Arc<CartState>> {
        self.dispatch(&CartIntent::ClearItem(*id))
    }

    fn commit(&mut self, next: CartState) -> Arc<CartState> {
        self.state = Arc::new(next);
        for (_, listener) in self.listeners.iter_mut() {
            listener(self.state.as_ref());
        }
        Arc::clone(&self.state)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}
