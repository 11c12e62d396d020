//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use artenact::{
    cart::Cart,
    prices::Price,
    products::{Category, Product, ProductId},
};
use artenact_app::{
    context::AppContext,
    domain::{
        branding::MockBrandingGenerator, carts::MockCartsService, carts::models::CartView,
        catalog::MockCatalogService, content::ContentService,
    },
};

use crate::state::State;

pub(crate) fn make_product(id: &str, major: u64) -> Product {
    Product {
        id: ProductId::from(id),
        name: format!("Piece {id}"),
        artisan: "Maria Santos".to_string(),
        category: Category::Pottery,
        price: Price::from_major(major),
        original_price: None,
        image: String::new(),
        rating: 4.5,
        reviews: 12,
        new: false,
        featured: false,
    }
}

pub(crate) fn empty_cart_view(uuid: Uuid) -> CartView {
    CartView::of(uuid, &Cart::new())
}

pub(crate) fn cart_view_with(uuid: Uuid, products: &[(&str, u64, u32)]) -> CartView {
    let mut cart = Cart::new();

    for (id, major, quantity) in products {
        cart.add(make_product(id, *major));
        cart.update_quantity(&ProductId::from(*id), *quantity);
    }

    CartView::of(uuid, &cart)
}

fn strict_catalog_mock() -> MockCatalogService {
    let mut catalog = MockCatalogService::new();

    catalog.expect_products().never();
    catalog.expect_product().never();

    catalog
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_cart().never();
    carts.expect_delete_cart().never();
    carts.expect_add_item().never();
    carts.expect_update_item().never();
    carts.expect_remove_item().never();

    carts
}

fn strict_branding_mock() -> MockBrandingGenerator {
    let mut branding = MockBrandingGenerator::new();

    branding.expect_generate().never();

    branding
}

fn make_state(
    catalog: MockCatalogService,
    carts: MockCartsService,
    branding: MockBrandingGenerator,
) -> Arc<State> {
    Arc::new(State::new(AppContext {
        catalog: Arc::new(catalog),
        carts: Arc::new(carts),
        branding: Arc::new(branding),
        content: Arc::new(ContentService::storefront()),
    }))
}

fn service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    service(
        make_state(catalog, strict_carts_mock(), strict_branding_mock()),
        route,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    service(
        make_state(strict_catalog_mock(), carts, strict_branding_mock()),
        route,
    )
}

pub(crate) fn branding_service(branding: MockBrandingGenerator, route: Router) -> Service {
    service(
        make_state(strict_catalog_mock(), strict_carts_mock(), branding),
        route,
    )
}

pub(crate) fn content_service(route: Router) -> Service {
    service(
        make_state(
            strict_catalog_mock(),
            strict_carts_mock(),
            strict_branding_mock(),
        ),
        route,
    )
}
