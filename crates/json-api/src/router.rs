//! App Router

use salvo::Router;

use crate::{branding, carts, content, healthcheck, products};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(
            Router::with_path("carts")
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::delete::handler)
                        .push(
                            Router::with_path("items")
                                .post(carts::items::create::handler)
                                .push(
                                    Router::with_path("{product}")
                                        .put(carts::items::update::handler)
                                        .delete(carts::items::delete::handler),
                                ),
                        ),
                ),
        )
        .push(Router::with_path("branding").post(branding::generate::handler))
        .push(Router::with_path("events").get(content::events::handler))
        .push(Router::with_path("stories").get(content::stories::handler))
        .push(Router::with_path("heritage").get(content::heritage::handler))
        .push(Router::with_path("artisans").get(content::artisans::handler))
}
