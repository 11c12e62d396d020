//! Carts service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartsServiceError {
    /// No session cart with the requested UUID.
    #[error("cart not found")]
    CartNotFound,

    /// The referenced product does not exist in the catalog.
    #[error("product not found")]
    ProductNotFound,
}
