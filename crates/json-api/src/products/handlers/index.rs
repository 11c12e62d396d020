//! Product Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use artenact::products::Category;

use crate::{
    extensions::*, products::errors::into_status_error, products::get::ProductResponse,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

/// Product Index Handler
///
/// Returns a list of products, optionally filtered by category.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = category
        .into_inner()
        .map(|value| value.parse::<Category>())
        .transpose()
        .or_400("could not parse \"category\" query parameter")?;

    let products = state
        .app
        .catalog
        .products(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use artenact_app::domain::catalog::MockCatalogService;

    use crate::test_helpers::{catalog_service, make_product};

    use super::*;

    fn make_service(catalog: MockCatalogService) -> Service {
        catalog_service(catalog, Router::with_path("products").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_products() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_products()
            .once()
            .withf(|filter| filter.is_none())
            .return_once(|_| Ok(vec![make_product("1", 89), make_product("2", 65)]));

        catalog.expect_product().never();

        let response: ProductsResponse = TestClient::get("http://example.com/products")
            .send(&make_service(catalog))
            .await
            .take_json()
            .await?;

        assert_eq!(response.products.len(), 2, "expected two products");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_forwards_category_filter() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_products()
            .once()
            .withf(|filter| *filter == Some(Category::Textiles))
            .return_once(|_| Ok(vec![]));

        catalog.expect_product().never();

        let res = TestClient::get("http://example.com/products?category=textiles")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_unknown_category_returns_400() -> TestResult {
        let catalog = MockCatalogService::new();

        let res = TestClient::get("http://example.com/products?category=macrame")
            .send(&make_service(catalog))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
