//! Errors

use salvo::http::StatusError;
use tracing::error;

use artenact_app::domain::branding::BrandingServiceError;

pub(crate) fn into_status_error(error: BrandingServiceError) -> StatusError {
    match error {
        BrandingServiceError::InvalidRequest(source) => {
            StatusError::unprocessable_entity().brief(source.to_string())
        }
        BrandingServiceError::Transport(_)
        | BrandingServiceError::UnexpectedStatus(_)
        | BrandingServiceError::MalformedResult(_) => {
            error!("brand generation failed: {error}");

            StatusError::bad_gateway().brief("Brand generation failed")
        }
        BrandingServiceError::Client(source) => {
            error!("branding client unavailable: {source}");

            StatusError::internal_server_error()
        }
    }
}
