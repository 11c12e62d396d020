//! Catalog service.

use async_trait::async_trait;
use mockall::automock;

use artenact::products::{Category, Product, ProductId};

use crate::domain::catalog::errors::CatalogError;

/// Serves a fixed product catalog held in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalogService {
    products: Vec<Product>,
}

impl StaticCatalogService {
    /// The storefront catalog.
    #[must_use]
    pub fn storefront() -> Self {
        Self::with_products(artenact::fixtures::products())
    }

    /// A catalog over the given products.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogService for StaticCatalogService {
    async fn products(&self, category: Option<Category>) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|product| category.is_none_or(|category| product.category == category))
            .cloned()
            .collect())
    }

    async fn product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|product| product.id == *id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Lists products, optionally restricted to one category.
    async fn products(&self, category: Option<Category>) -> Result<Vec<Product>, CatalogError>;

    /// Retrieves a single product by id.
    async fn product(&self, id: &ProductId) -> Result<Product, CatalogError>;
}
