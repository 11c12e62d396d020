//! Shopping cart

use std::num::NonZeroU32;

use serde::Serialize;

use crate::{
    prices::Price,
    products::{Product, ProductId},
    shipping::ShippingPolicy,
};

/// One cart entry pairing a product with a quantity.
///
/// Quantities are stored as [`NonZeroU32`]; a zero-quantity line cannot be
/// represented, so removal is always deletion of the line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    product: Product,
    quantity: NonZeroU32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        CartLine {
            product,
            quantity: NonZeroU32::MIN,
        }
    }

    /// The product this line refers to.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Unit count for the line.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity.get())
    }

    /// Consumes the line, returning its product snapshot.
    #[must_use]
    pub fn into_product(self) -> Product {
        self.product
    }
}

/// Derived checkout totals for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Number of distinct lines.
    pub line_count: usize,

    /// Sum of quantities across all lines (cart-icon badge).
    pub total_units: u32,

    /// Sum of line totals before shipping.
    pub subtotal: Price,

    /// Shipping fee for the subtotal.
    pub shipping: Price,

    /// Subtotal plus shipping.
    pub total: Price,
}

/// An ordered collection of cart lines, keyed by product id.
///
/// Invariants: at most one line per product id, and every line has quantity
/// at least 1. Insertion order is preserved; updating an existing line's
/// quantity does not change its position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Cart::default()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.product.id == *id)
    }

    /// Adds one unit of the product.
    ///
    /// If a line for the product already exists its quantity is incremented
    /// in place; otherwise a new line with quantity 1 is appended. Total for
    /// any valid product.
    pub fn add(&mut self, product: Product) {
        match self.position(&product.id) {
            Some(index) => {
                if let Some(line) = self.lines.get_mut(index) {
                    line.quantity = line.quantity.saturating_add(1);
                }
            }
            None => self.lines.push(CartLine::new(product)),
        }
    }

    /// Sets the quantity of the matching line to exactly `quantity`.
    ///
    /// A quantity of 0 deletes the line, equivalent to [`Cart::remove`].
    /// An unknown product id is a silent no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            self.remove(id);
            return;
        };

        if let Some(line) = self
            .position(id)
            .and_then(|index| self.lines.get_mut(index))
        {
            line.quantity = quantity;
        }
    }

    /// Deletes the line matching the product id, if present. Idempotent.
    pub fn remove(&mut self, id: &ProductId) {
        self.lines.retain(|line| line.product.id != *id);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of distinct lines (distinct products), not total units.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |sum, line| sum.saturating_add(line.quantity.get()))
    }

    /// Sum of line totals before shipping.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Shipping fee for the current subtotal under the storefront policy.
    #[must_use]
    pub fn shipping_fee(&self) -> Price {
        ShippingPolicy::STOREFRONT.fee(self.subtotal())
    }

    /// Subtotal plus shipping.
    #[must_use]
    pub fn total(&self) -> Price {
        self.subtotal().plus(self.shipping_fee())
    }

    /// Derived totals for the checkout display.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        let subtotal = self.subtotal();
        let shipping = ShippingPolicy::STOREFRONT.fee(subtotal);

        CartSummary {
            line_count: self.line_count(),
            total_units: self.total_units(),
            subtotal,
            shipping,
            total: subtotal.plus(shipping),
        }
    }

    /// Iterates over the lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::products::Category;

    use super::*;

    fn product(id: &str, major: u64) -> Product {
        Product {
            id: ProductId::from(id),
            name: format!("Test Piece {id}"),
            artisan: "Maria Santos".to_string(),
            category: Category::Pottery,
            price: Price::from_major(major),
            original_price: None,
            image: String::new(),
            rating: 4.5,
            reviews: 10,
            new: false,
            featured: false,
        }
    }

    fn quantities(cart: &Cart) -> Vec<(String, u32)> {
        cart.iter()
            .map(|line| (line.product().id.to_string(), line.quantity()))
            .collect()
    }

    #[test]
    fn adding_a_product_creates_a_line_with_quantity_one() {
        let mut cart = Cart::new();

        cart.add(product("p1", 30));

        assert_eq!(quantities(&cart), vec![("p1".to_string(), 1)]);
    }

    #[test]
    fn re_adding_a_product_increments_its_quantity_in_place() {
        let mut cart = Cart::new();

        cart.add(product("a", 10));
        cart.add(product("b", 20));
        cart.add(product("a", 10));

        assert_eq!(
            quantities(&cart),
            vec![("a".to_string(), 2), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn one_line_per_product_id_however_often_added() {
        let mut cart = Cart::new();

        for _ in 0..5 {
            cart.add(product("p1", 10));
        }
        cart.add(product("p2", 10));

        assert_eq!(cart.line_count(), 2);
        assert_eq!(
            quantities(&cart),
            vec![("p1".to_string(), 5), ("p2".to_string(), 1)]
        );
    }

    #[test]
    fn update_quantity_sets_the_exact_value() {
        let mut cart = Cart::new();

        cart.add(product("p1", 10));
        cart.update_quantity(&ProductId::from("p1"), 7);

        assert_eq!(quantities(&cart), vec![("p1".to_string(), 7)]);
    }

    #[test]
    fn update_quantity_zero_deletes_the_line() {
        let mut cart = Cart::new();

        cart.add(product("p1", 10));
        cart.update_quantity(&ProductId::from("p1"), 0);

        assert!(cart.is_empty());

        // Repeating the zero update is a no-op, not an error.
        cart.update_quantity(&ProductId::from("p1"), 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_unknown_id_is_a_silent_no_op() {
        let mut cart = Cart::new();

        cart.add(product("p1", 10));
        cart.update_quantity(&ProductId::from("ghost"), 3);

        assert_eq!(quantities(&cart), vec![("p1".to_string(), 1)]);
    }

    #[test]
    fn update_quantity_does_not_move_the_line() {
        let mut cart = Cart::new();

        cart.add(product("a", 10));
        cart.add(product("b", 20));
        cart.add(product("c", 30));
        cart.update_quantity(&ProductId::from("b"), 9);

        let order: Vec<String> = cart
            .iter()
            .map(|line| line.product().id.to_string())
            .collect();

        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new();

        cart.add(product("p1", 10));
        cart.add(product("p2", 20));

        cart.remove(&ProductId::from("p1"));
        cart.remove(&ProductId::from("p1"));

        assert_eq!(quantities(&cart), vec![("p2".to_string(), 1)]);
    }

    #[test]
    fn totals_count_units_not_lines() {
        let mut cart = Cart::new();

        cart.add(product("a", 10));
        cart.add(product("a", 10));
        cart.add(product("b", 20));

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_units(), 3);
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        let mut cart = Cart::new();

        cart.add(product("a", 30));
        cart.add(product("a", 30));
        cart.add(product("b", 45));

        assert_eq!(cart.subtotal(), Price::from_major(105));
    }

    #[test]
    fn total_is_subtotal_plus_shipping_across_states() {
        let mut cart = Cart::new();

        for step in [
            ("a", 10_u64),
            ("b", 95),
            ("a", 10),
            ("c", 5),
        ] {
            cart.add(product(step.0, step.1));

            let expected = cart
                .subtotal()
                .plus(ShippingPolicy::STOREFRONT.fee(cart.subtotal()));

            assert_eq!(cart.total(), expected);
        }
    }

    #[test]
    fn empty_cart_still_charges_shipping() {
        let cart = Cart::new();

        assert_eq!(cart.subtotal(), Price::ZERO);
        assert_eq!(cart.shipping_fee(), Price::from_major(15));
        assert_eq!(cart.total(), Price::from_major(15));
    }

    #[test]
    fn summary_reflects_the_checkout_walkthrough() {
        let mut cart = Cart::new();

        // Empty cart.
        assert_eq!(cart.summary().total, Price::from_major(15));

        // One $30 piece: subtotal 30, shipping 15, total 45.
        cart.add(product("p1", 30));
        assert_eq!(cart.summary().subtotal, Price::from_major(30));
        assert_eq!(cart.summary().total, Price::from_major(45));

        // Same piece again: subtotal 60, total 75.
        cart.add(product("p1", 30));
        assert_eq!(cart.summary().subtotal, Price::from_major(60));
        assert_eq!(cart.summary().total, Price::from_major(75));

        // A $45 piece pushes the subtotal over the free-shipping line.
        cart.add(product("p2", 45));
        let summary = cart.summary();
        assert_eq!(summary.subtotal, Price::from_major(105));
        assert_eq!(summary.shipping, Price::ZERO);
        assert_eq!(summary.total, Price::from_major(105));

        // Zeroing the first line drops back under the threshold.
        cart.update_quantity(&ProductId::from("p1"), 0);
        let summary = cart.summary();
        assert_eq!(summary.line_count, 1);
        assert_eq!(summary.subtotal, Price::from_major(45));
        assert_eq!(summary.total, Price::from_major(60));

        // Removing the last line leaves only the flat fee.
        cart.remove(&ProductId::from("p2"));
        let summary = cart.summary();
        assert_eq!(summary.subtotal, Price::ZERO);
        assert_eq!(summary.total, Price::from_major(15));
    }

    #[test]
    fn subtotal_exactly_at_threshold_still_pays_shipping() {
        let mut cart = Cart::new();

        cart.add(product("p1", 100));

        assert_eq!(cart.subtotal(), Price::from_major(100));
        assert_eq!(cart.shipping_fee(), Price::from_major(15));
    }

    #[test]
    fn clear_resets_to_the_empty_state() {
        let mut cart = Cart::new();

        cart.add(product("p1", 10));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_units(), 0);
    }
}
