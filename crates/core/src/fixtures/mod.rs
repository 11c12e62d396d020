//! Fixtures
//!
//! The storefront's static catalog and editorial content, checked in as
//! code. Production services serve these collections directly; tests use
//! them as realistic data.

mod content;
mod products;

pub use content::{artisans, events, heritage_items, stories};
pub use products::products;
