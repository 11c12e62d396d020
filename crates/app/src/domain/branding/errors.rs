//! Branding service errors.

use thiserror::Error;

use artenact::branding::BrandingError;

#[derive(Debug, Error)]
pub enum BrandingServiceError {
    /// The request was rejected before any generation happened.
    #[error(transparent)]
    InvalidRequest(#[from] BrandingError),

    /// The remote collaborator could not be reached.
    #[error("branding generation request failed")]
    Transport(#[source] reqwest::Error),

    /// The remote collaborator answered with a non-success status.
    #[error("branding generation returned status {0}")]
    UnexpectedStatus(u16),

    /// The remote collaborator answered with a body that is not a
    /// branding result.
    #[error("branding generation returned a malformed result")]
    MalformedResult(#[source] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build branding HTTP client")]
    Client(#[source] reqwest::Error),
}
