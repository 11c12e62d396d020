//! Storefront domains.

pub mod branding;
pub mod carts;
pub mod catalog;
pub mod content;
