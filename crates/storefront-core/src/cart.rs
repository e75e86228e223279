//! # Cart Reconciliation
//!
//! Pure list transformations over cart line items, plus the derived totals.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Line Item Reconciliation                             │
//! │                                                                         │
//! │  UI Action           Function          Result                          │
//! │  ─────────           ────────          ──────                          │
//! │                                                                         │
//! │  Click "Add" ──────► add_item() ─────► qty + 1, or append with qty 1   │
//! │                                                                         │
//! │  Click "-" ────────► remove_item() ──► qty - 1, or drop line at qty 1  │
//! │                                                                         │
//! │  Click "×" ────────► clear_item() ───► drop line whatever its qty      │
//! │                                                                         │
//! │  Any of the above ─► recompute() ────► count = Σ qty                   │
//! │                                        total = Σ qty × price           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function takes the current items by slice and returns a brand-new
//! `Vec`. The input is never mutated, so a snapshot handed to the UI before a
//! change stays valid after it.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{LineItem, Product, ProductId};

/// Adds one unit of `product` to the cart.
///
/// ## Behavior
/// - If a line with `product.id` exists: that line's quantity increases by
///   one, every other line is carried over unchanged, order is preserved
/// - Otherwise: a quantity-1 line is appended at the end
/// - `CoreError::QuantityOverflow` if the line is already at `i64::MAX`
///
/// ## Example
/// ```rust
/// use storefront_core::cart::add_item;
/// use storefront_core::{Money, Product};
///
/// let hat = Product::new(1, "Hat", Money::from_cents(1000));
/// let items = add_item(&[], &hat).unwrap();
/// let items = add_item(&items, &hat).unwrap();
///
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].quantity, 2);
/// ```
pub fn add_item(items: &[LineItem], product: &Product) -> CoreResult<Vec<LineItem>> {
    if let Some(existing) = items.iter().find(|item| item.id == product.id) {
        let quantity = existing
            .quantity
            .checked_add(1)
            .ok_or(CoreError::QuantityOverflow(product.id))?;

        return Ok(items
            .iter()
            .map(|item| {
                if item.id == product.id {
                    item.with_quantity(quantity)
                } else {
                    item.clone()
                }
            })
            .collect());
    }

    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(LineItem::from_product(product));
    Ok(next)
}

/// Removes one unit of the product with `id` from the cart.
///
/// ## Behavior
/// - Quantity 1: the line is dropped
/// - Quantity > 1: quantity decreases by one, all other fields kept
/// - Not in cart: `CoreError::ItemNotInCart`, nothing changes
pub fn remove_item(items: &[LineItem], id: &ProductId) -> CoreResult<Vec<LineItem>> {
    let existing = items
        .iter()
        .find(|item| item.id == *id)
        .ok_or(CoreError::ItemNotInCart(*id))?;

    if existing.quantity <= 1 {
        return Ok(items.iter().filter(|item| item.id != *id).cloned().collect());
    }

    Ok(items
        .iter()
        .map(|item| {
            if item.id == *id {
                item.with_quantity(item.quantity - 1)
            } else {
                item.clone()
            }
        })
        .collect())
}

/// Drops the line for `id` entirely, whatever its quantity.
///
/// Clearing a product that is not in the cart returns an unchanged copy.
pub fn clear_item(items: &[LineItem], id: &ProductId) -> Vec<LineItem> {
    items.iter().filter(|item| item.id != *id).cloned().collect()
}

// =============================================================================
// Derived Totals
// =============================================================================

/// Aggregates derived from the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Sum of all line quantities (the badge on the cart icon).
    #[ts(type = "number")]
    pub count: i64,

    /// Sum of quantity × unit price.
    pub total: Money,
}

/// Recomputes count and total by a full pass over `items`.
///
/// ## Errors
/// `CoreError::TotalOverflow` if the count or any partial total leaves
/// `i64`.
///
/// ## Example
/// ```rust
/// use storefront_core::cart::{add_item, recompute};
/// use storefront_core::{Money, Product};
///
/// let items = add_item(&[], &Product::new(1, "Hat", Money::from_cents(1000))).unwrap();
/// let items = add_item(&items, &Product::new(2, "Scarf", Money::from_cents(500))).unwrap();
///
/// let totals = recompute(&items).unwrap();
/// assert_eq!(totals.count, 2);
/// assert_eq!(totals.total.cents(), 1500);
/// ```
pub fn recompute(items: &[LineItem]) -> CoreResult<CartTotals> {
    items
        .iter()
        .try_fold(CartTotals::default(), |acc, item| {
            Some(CartTotals {
                count: acc.count.checked_add(item.quantity)?,
                total: acc.total.checked_add(item.line_total()?)?,
            })
        })
        .ok_or(CoreError::TotalOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::Index;

    fn product(id: u64, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(price_cents))
    }

    fn line(id: u64, price_cents: i64, quantity: i64) -> LineItem {
        LineItem::from_product(&product(id, price_cents)).with_quantity(quantity)
    }

    fn ids(items: &[LineItem]) -> Vec<u64> {
        items.iter().map(|item| item.id.get()).collect()
    }

    #[test]
    fn test_add_new_product_appends_with_quantity_one() {
        let items = vec![line(1, 1000, 2), line(2, 500, 1)];
        let next = add_item(&items, &product(3, 700)).unwrap();

        assert_eq!(next.len(), items.len() + 1);
        assert_eq!(ids(&next), vec![1, 2, 3]);
        assert_eq!(next[2].quantity, 1);
        assert_eq!(next[2].price.cents(), 700);
    }

    #[test]
    fn test_add_existing_product_increments_only_that_line() {
        let items = vec![line(1, 1000, 2), line(2, 500, 1), line(3, 700, 5)];
        let next = add_item(&items, &product(2, 500)).unwrap();

        assert_eq!(next.len(), items.len());
        assert_eq!(ids(&next), vec![1, 2, 3]);
        assert_eq!(next[1].quantity, 2);
        assert_eq!(next[0], items[0]);
        assert_eq!(next[2], items[2]);
    }

    #[test]
    fn test_add_does_not_touch_input() {
        let items = vec![line(1, 1000, 1)];
        let _ = add_item(&items, &product(1, 1000)).unwrap();
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_add_keeps_frozen_fields_of_existing_line() {
        let items = vec![line(1, 1000, 1)];
        // Catalogue price changed since the line was added
        let next = add_item(&items, &product(1, 9999)).unwrap();

        assert_eq!(next[0].price.cents(), 1000);
        assert_eq!(next[0].added_at, items[0].added_at);
    }

    #[test]
    fn test_add_at_max_quantity_is_an_error() {
        let items = vec![line(1, 1, i64::MAX)];
        let err = add_item(&items, &product(1, 1)).unwrap_err();
        assert_eq!(err, CoreError::QuantityOverflow(ProductId::new(1)));
    }

    #[test]
    fn test_remove_last_unit_drops_line() {
        let items = vec![line(1, 1000, 2), line(2, 500, 1), line(3, 700, 1)];
        let next = remove_item(&items, &ProductId::new(2)).unwrap();

        assert_eq!(next.len(), items.len() - 1);
        assert_eq!(ids(&next), vec![1, 3]);
    }

    #[test]
    fn test_remove_decrements_quantity() {
        let items = vec![line(1, 1000, 3), line(2, 500, 1)];
        let next = remove_item(&items, &ProductId::new(1)).unwrap();

        assert_eq!(ids(&next), vec![1, 2]);
        assert_eq!(next[0].quantity, 2);
        assert_eq!(next[0].name, items[0].name);
        assert_eq!(next[1], items[1]);
    }

    #[test]
    fn test_remove_absent_is_an_error() {
        let items = vec![line(1, 1000, 1)];
        let err = remove_item(&items, &ProductId::new(9)).unwrap_err();
        assert_eq!(err, CoreError::ItemNotInCart(ProductId::new(9)));
    }

    #[test]
    fn test_clear_drops_line_regardless_of_quantity() {
        let items = vec![line(1, 1000, 7), line(2, 500, 1)];
        let next = clear_item(&items, &ProductId::new(1));

        assert_eq!(next.len(), 1);
        assert_eq!(ids(&next), vec![2]);
    }

    #[test]
    fn test_clear_absent_is_unchanged() {
        let items = vec![line(1, 1000, 7), line(2, 500, 1)];
        let next = clear_item(&items, &ProductId::new(5));
        assert_eq!(next, items);
    }

    #[test]
    fn test_recompute_totals() {
        let items = vec![line(1, 1000, 2), line(2, 500, 1)];
        let totals = recompute(&items).unwrap();

        assert_eq!(totals.count, 3);
        assert_eq!(totals.total.cents(), 2500);
    }

    #[test]
    fn test_recompute_empty() {
        assert_eq!(recompute(&[]), Ok(CartTotals::default()));
    }

    #[test]
    fn test_recompute_overflow_is_an_error() {
        let huge = 5_000_000_000_000_000_000;

        // One line whose quantity × price leaves i64
        assert_eq!(recompute(&[line(1, huge, 2)]), Err(CoreError::TotalOverflow));

        // Two lines that fit on their own but not together
        assert_eq!(
            recompute(&[line(1, huge, 1), line(2, huge, 1)]),
            Err(CoreError::TotalOverflow)
        );
    }

    // =========================================================================
    // Properties over arbitrary carts
    // =========================================================================

    /// Carts with unique ids, quantities >= 1 and prices small enough that
    /// totals never overflow.
    fn cart_strategy(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<LineItem>> {
        prop::collection::btree_map(0u64..1_000, (0i64..1_000_000, 1i64..50), len).prop_map(
            |lines| {
                lines
                    .into_iter()
                    .map(|(id, (price, quantity))| line(id, price, quantity))
                    .collect()
            },
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

        #[test]
        fn test_any_cart_add_new_product_appends(
            items in cart_strategy(0..16),
            price in 0i64..1_000_000,
        ) {
            // Ids in the cart are < 1000
            let next = add_item(&items, &product(5_000, price)).unwrap();

            prop_assert_eq!(next.len(), items.len() + 1);
            prop_assert_eq!(&next[..items.len()], &items[..]);
            let added = &next[items.len()];
            prop_assert_eq!(added.id, ProductId::new(5_000));
            prop_assert_eq!(added.quantity, 1);
        }

        #[test]
        fn test_any_cart_add_existing_increments_only_that_line(
            items in cart_strategy(1..16),
            pick in any::<Index>(),
        ) {
            let at = pick.index(items.len());
            let target = &items[at];
            let next = add_item(&items, &product(target.id.get(), target.price.cents())).unwrap();

            prop_assert_eq!(next.len(), items.len());
            for (i, (before, after)) in items.iter().zip(&next).enumerate() {
                if i == at {
                    prop_assert_eq!(after.quantity, before.quantity + 1);
                    prop_assert_eq!(&after.with_quantity(before.quantity), before);
                } else {
                    prop_assert_eq!(after, before);
                }
            }
        }

        #[test]
        fn test_any_cart_remove_last_unit_drops_line(
            items in cart_strategy(1..16),
            pick in any::<Index>(),
        ) {
            let at = pick.index(items.len());
            let mut items = items;
            items[at] = items[at].with_quantity(1);
            let id = items[at].id;

            let next = remove_item(&items, &id).unwrap();

            prop_assert_eq!(next.len(), items.len() - 1);
            prop_assert!(next.iter().all(|item| item.id != id));
        }

        #[test]
        fn test_any_cart_remove_decrements_quantity(
            items in cart_strategy(1..16),
            pick in any::<Index>(),
            quantity in 2i64..1_000,
        ) {
            let at = pick.index(items.len());
            let mut items = items;
            items[at] = items[at].with_quantity(quantity);

            let next = remove_item(&items, &items[at].id).unwrap();

            prop_assert_eq!(next.len(), items.len());
            prop_assert_eq!(next[at].quantity, quantity - 1);
            prop_assert_eq!(ids(&next), ids(&items));
        }

        #[test]
        fn test_any_cart_clear_removes_id_whatever_its_quantity(
            items in cart_strategy(0..16),
            id in 0u64..1_000,
        ) {
            let id = ProductId::new(id);
            let present = items.iter().any(|item| item.id == id);

            let next = clear_item(&items, &id);

            prop_assert!(next.iter().all(|item| item.id != id));
            prop_assert_eq!(next.len(), items.len() - usize::from(present));
        }

        #[test]
        fn test_any_cart_recompute_matches_naive_sums(items in cart_strategy(0..32)) {
            let totals = recompute(&items).unwrap();

            let count: i64 = items.iter().map(|item| item.quantity).sum();
            let total: i64 = items.iter().map(|item| item.quantity * item.price.cents()).sum();
            prop_assert_eq!(totals.count, count);
            prop_assert_eq!(totals.total.cents(), total);
        }
    }
}
