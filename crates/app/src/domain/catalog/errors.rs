//! Catalog service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No product with the requested id.
    #[error("product not found")]
    NotFound,
}
