//! Cart models

use serde::Serialize;
use uuid::Uuid;

use artenact::cart::{Cart, CartLine, CartSummary};

/// A session cart's lines and derived totals, as handed to display layers.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    /// Session cart UUID.
    pub uuid: Uuid,

    /// Lines in insertion order.
    pub lines: Vec<CartLine>,

    /// Derived checkout totals.
    pub summary: CartSummary,
}

impl CartView {
    /// Snapshots a cart's lines and totals under its session UUID.
    #[must_use]
    pub fn of(uuid: Uuid, cart: &Cart) -> Self {
        CartView {
            uuid,
            lines: cart.iter().cloned().collect(),
            summary: cart.summary(),
        }
    }
}
