//! Shipping

use serde::{Deserialize, Serialize};

use crate::prices::Price;

/// Flat-fee shipping with a free-shipping threshold.
///
/// The threshold is exclusive: a subtotal exactly at `free_over` still pays
/// the flat fee; only a subtotal strictly greater ships free. An empty cart
/// (subtotal zero) pays the fee like any other below-threshold order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Orders strictly above this subtotal ship free.
    pub free_over: Price,

    /// Fee charged at or below the threshold.
    pub flat_fee: Price,
}

impl ShippingPolicy {
    /// The storefront policy: $15.00 flat, free strictly above $100.00.
    pub const STOREFRONT: ShippingPolicy = ShippingPolicy {
        free_over: Price::from_major(100),
        flat_fee: Price::from_major(15),
    };

    /// Shipping fee for the given order subtotal.
    #[must_use]
    pub fn fee(&self, subtotal: Price) -> Price {
        if subtotal > self.free_over {
            Price::ZERO
        } else {
            self.flat_fee
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy::STOREFRONT
    }
}
