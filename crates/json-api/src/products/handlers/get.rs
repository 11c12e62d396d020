//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use artenact::{
    prices::Price,
    products::{Product, ProductId},
};

use crate::{extensions::*, products::errors::into_status_error, state::State};

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: String,

    /// The display name of the product
    pub name: String,

    /// The artisan who made the piece
    pub artisan: String,

    /// The catalog category label
    pub category: String,

    /// The current unit price in cents
    pub price: u64,

    /// The pre-discount price in cents, when on sale
    pub original_price: Option<u64>,

    /// Rounded percentage saved against the pre-discount price
    pub discount_percent: u32,

    /// The product image URL
    pub image: String,

    /// Average review rating
    pub rating: f32,

    /// Number of reviews behind the rating
    pub reviews: u32,

    /// Recently added to the catalog
    pub new: bool,

    /// Featured on the storefront
    pub featured: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let discount_percent = product.discount_percent();

        ProductResponse {
            id: product.id.to_string(),
            name: product.name,
            artisan: product.artisan,
            category: product.category.to_string(),
            price: product.price.minor(),
            original_price: product.original_price.map(Price::minor),
            discount_percent,
            image: product.image,
            rating: product.rating,
            reviews: product.reviews,
            new: product.new,
            featured: product.featured,
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .catalog
        .product(&ProductId::new(product.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
