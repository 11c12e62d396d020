//! Carts service.
//!
//! Session carts live in memory only: each browser session owns one cart,
//! addressed by UUID, created empty and discarded with the session. There
//! is no persistence and no cross-session state.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use artenact::{cart::Cart, products::ProductId};

use crate::domain::{
    carts::{errors::CartsServiceError, models::CartView},
    catalog::{CatalogError, CatalogService},
};

pub struct InMemoryCartsService {
    catalog: Arc<dyn CatalogService>,
    carts: RwLock<FxHashMap<Uuid, Cart>>,
}

impl InMemoryCartsService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog,
            carts: RwLock::new(FxHashMap::default()),
        }
    }
}

impl std::fmt::Debug for InMemoryCartsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCartsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for InMemoryCartsService {
    async fn create_cart(&self) -> Result<CartView, CartsServiceError> {
        let uuid = Uuid::now_v7();
        let cart = Cart::new();
        let view = CartView::of(uuid, &cart);

        self.carts.write().await.insert(uuid, cart);

        debug!(%uuid, "created session cart");

        Ok(view)
    }

    async fn cart(&self, uuid: Uuid) -> Result<CartView, CartsServiceError> {
        self.carts
            .read()
            .await
            .get(&uuid)
            .map(|cart| CartView::of(uuid, cart))
            .ok_or(CartsServiceError::CartNotFound)
    }

    async fn delete_cart(&self, uuid: Uuid) -> Result<(), CartsServiceError> {
        if self.carts.write().await.remove(&uuid).is_none() {
            return Err(CartsServiceError::CartNotFound);
        }

        debug!(%uuid, "discarded session cart");

        Ok(())
    }

    async fn add_item(
        &self,
        uuid: Uuid,
        product: &ProductId,
    ) -> Result<CartView, CartsServiceError> {
        // Resolve the product snapshot before taking the write lock.
        let product = self.catalog.product(product).await.map_err(|error| match error {
            CatalogError::NotFound => CartsServiceError::ProductNotFound,
        })?;

        let mut carts = self.carts.write().await;
        let cart = carts
            .get_mut(&uuid)
            .ok_or(CartsServiceError::CartNotFound)?;

        debug!(%uuid, product = %product.id, "adding item to cart");

        cart.add(product);

        Ok(CartView::of(uuid, cart))
    }

    async fn update_item(
        &self,
        uuid: Uuid,
        product: &ProductId,
        quantity: u32,
    ) -> Result<CartView, CartsServiceError> {
        let mut carts = self.carts.write().await;
        let cart = carts
            .get_mut(&uuid)
            .ok_or(CartsServiceError::CartNotFound)?;

        debug!(%uuid, %product, quantity, "updating cart line");

        cart.update_quantity(product, quantity);

        Ok(CartView::of(uuid, cart))
    }

    async fn remove_item(
        &self,
        uuid: Uuid,
        product: &ProductId,
    ) -> Result<CartView, CartsServiceError> {
        let mut carts = self.carts.write().await;
        let cart = carts
            .get_mut(&uuid)
            .ok_or(CartsServiceError::CartNotFound)?;

        debug!(%uuid, %product, "removing cart line");

        cart.remove(product);

        Ok(CartView::of(uuid, cart))
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Creates a new, empty session cart.
    async fn create_cart(&self) -> Result<CartView, CartsServiceError>;

    /// Retrieves a session cart's lines and totals.
    async fn cart(&self, uuid: Uuid) -> Result<CartView, CartsServiceError>;

    /// Discards a session cart.
    async fn delete_cart(&self, uuid: Uuid) -> Result<(), CartsServiceError>;

    /// Adds one unit of a catalog product to the cart.
    async fn add_item(
        &self,
        uuid: Uuid,
        product: &ProductId,
    ) -> Result<CartView, CartsServiceError>;

    /// Sets a line's quantity to exactly `quantity`; 0 deletes the line.
    /// A product with no line in the cart is a silent no-op.
    async fn update_item(
        &self,
        uuid: Uuid,
        product: &ProductId,
        quantity: u32,
    ) -> Result<CartView, CartsServiceError>;

    /// Deletes the line for the given product, if present.
    async fn remove_item(
        &self,
        uuid: Uuid,
        product: &ProductId,
    ) -> Result<CartView, CartsServiceError>;
}
