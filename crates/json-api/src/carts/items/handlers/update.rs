//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use artenact::products::ProductId;

use crate::{
    carts::errors::into_status_error, carts::get::CartResponse, extensions::*, state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New unit count for the line; 0 deletes the line
    pub quantity: u32,
}

/// Update Cart Item Handler
///
/// Sets a line's quantity to exactly the requested value. A quantity of 0
/// deletes the line. A product with no line in the cart leaves the cart
/// unchanged.
#[endpoint(
    tags("carts"),
    summary = "Update Cart Item",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    cart: PathParam<Uuid>,
    product: PathParam<String>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = ProductId::new(product.into_inner());

    let view = state
        .app
        .carts
        .update_item(cart.into_inner(), &product, json.into_inner().quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(view.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use artenact_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::test_helpers::{cart_view_with, carts_service, empty_cart_view};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("carts/{cart}/items/{product}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_update_sets_the_exact_quantity() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .withf(move |u, product, quantity| {
                *u == uuid && product.as_str() == "p1" && *quantity == 3
            })
            .return_once(move |_, _, _| Ok(cart_view_with(uuid, &[("p1", 30, 3)])));

        let response: CartResponse =
            TestClient::put(format!("http://example.com/carts/{uuid}/items/p1"))
                .json(&json!({ "quantity": 3 }))
                .send(&make_service(carts))
                .await
                .take_json()
                .await?;

        assert_eq!(response.summary.total_units, 3);
        assert_eq!(response.summary.subtotal, 90_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_to_zero_returns_the_emptied_cart() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .withf(move |u, product, quantity| {
                *u == uuid && product.as_str() == "p1" && *quantity == 0
            })
            .return_once(move |_, _, _| Ok(empty_cart_view(uuid)));

        let response: CartResponse =
            TestClient::put(format!("http://example.com/carts/{uuid}/items/p1"))
                .json(&json!({ "quantity": 0 }))
                .send(&make_service(carts))
                .await
                .take_json()
                .await?;

        assert_eq!(response.summary.line_count, 0);
        assert_eq!(response.summary.total, 15_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_unknown_cart_returns_404() -> TestResult {
        let uuid = Uuid::now_v7();

        let mut carts = MockCartsService::new();

        carts
            .expect_update_item()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::CartNotFound));

        let res = TestClient::put(format!("http://example.com/carts/{uuid}/items/p1"))
            .json(&json!({ "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_negative_quantity_returns_400() -> TestResult {
        let uuid = Uuid::now_v7();

        // Quantities are unsigned at the boundary; a negative body value
        // never reaches the carts service.
        let carts = MockCartsService::new();

        let res = TestClient::put(format!("http://example.com/carts/{uuid}/items/p1"))
            .json(&json!({ "quantity": -1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
