//! Branding

pub mod errors;
pub mod remote;
pub mod service;

pub use errors::BrandingServiceError;
pub use service::*;
