//! App Context

use std::sync::Arc;

use crate::domain::{
    branding::{BrandingGenerator, TemplateGenerator},
    carts::{CartsService, InMemoryCartsService},
    catalog::{CatalogService, StaticCatalogService},
    content::ContentService,
};

/// The services a storefront session runs against.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub carts: Arc<dyn CartsService>,
    pub branding: Arc<dyn BrandingGenerator>,
    pub content: Arc<ContentService>,
}

impl AppContext {
    /// Builds the storefront context: the fixture catalog, in-memory session
    /// carts, the given branding generator, and the editorial collections.
    #[must_use]
    pub fn storefront(branding: Arc<dyn BrandingGenerator>) -> Self {
        let catalog: Arc<dyn CatalogService> = Arc::new(StaticCatalogService::storefront());

        Self {
            carts: Arc::new(InMemoryCartsService::new(Arc::clone(&catalog))),
            catalog,
            branding,
            content: Arc::new(ContentService::storefront()),
        }
    }

    /// The storefront context with the offline template generator.
    #[must_use]
    pub fn with_template_branding() -> Self {
        Self::storefront(Arc::new(TemplateGenerator))
    }
}
