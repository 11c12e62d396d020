//! Get Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use artenact::cart::{CartLine, CartSummary};
use artenact_app::domain::carts::models::CartView;

use crate::{
    carts::errors::into_status_error, extensions::*, products::get::ProductResponse, state::State,
};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The unique identifier of the session cart
    pub uuid: Uuid,

    /// The lines in the cart, in insertion order
    pub lines: Vec<CartLineResponse>,

    /// Derived checkout totals
    pub summary: CartSummaryResponse,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        CartResponse {
            uuid: view.uuid,
            lines: view.lines.into_iter().map(CartLineResponse::from).collect(),
            summary: view.summary.into(),
        }
    }
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The product on this line
    pub product: ProductResponse,

    /// Unit count for the line
    pub quantity: u32,

    /// Unit price times quantity, in cents
    pub line_total: u64,
}

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        CartLineResponse {
            quantity: line.quantity(),
            line_total: line.line_total().minor(),
            product: line.into_product().into(),
        }
    }
}

/// Cart Summary Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartSummaryResponse {
    /// Number of distinct lines
    pub line_count: usize,

    /// Sum of quantities across all lines
    pub total_units: u32,

    /// Sum of line totals before shipping, in cents
    pub subtotal: u64,

    /// Shipping fee, in cents
    pub shipping: u64,

    /// Subtotal plus shipping, in cents
    pub total: u64,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        CartSummaryResponse {
            line_count: summary.line_count,
            total_units: summary.total_units,
            subtotal: summary.subtotal.minor(),
            shipping: summary.shipping.minor(),
            total: summary.total.minor(),
        }
    }
}

/// Get Cart Handler
///
/// Returns a session cart's lines and totals.
#[endpoint(
    tags("carts"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cart = state
        .app
        .carts
        .cart(cart.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
