//! Artenact
//!
//! Artenact is the domain core of a marketplace storefront for artisan goods:
//! a product catalog, a shopping cart with derived checkout totals, static
//! content collections, and a branding studio that fabricates structured
//! marketing copy.

pub mod branding;
pub mod cart;
pub mod content;
pub mod fixtures;
pub mod prices;
pub mod products;
pub mod shipping;
