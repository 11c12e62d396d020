//! Branding service.

use async_trait::async_trait;
use mockall::automock;

use artenact::branding::{BrandingRequest, BrandingResult, templates};

use crate::domain::branding::errors::BrandingServiceError;

/// Produces a brand identity from an artisan's request.
///
/// Failure is all-or-nothing: a failed generation surfaces one error and
/// leaves no partial result behind.
#[automock]
#[async_trait]
pub trait BrandingGenerator: Send + Sync {
    /// Generates a complete brand identity.
    async fn generate(
        &self,
        request: &BrandingRequest,
    ) -> Result<BrandingResult, BrandingServiceError>;
}

/// Generator backed by the studio's stock templates. Never leaves the
/// process; deterministic for a given request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

#[async_trait]
impl BrandingGenerator for TemplateGenerator {
    async fn generate(
        &self,
        request: &BrandingRequest,
    ) -> Result<BrandingResult, BrandingServiceError> {
        Ok(templates::fabricate(request)?)
    }
}
