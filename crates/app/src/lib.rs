//! Session services for the Artenact storefront.

pub mod context;
pub mod domain;
