//! Errors

use salvo::http::StatusError;

use artenact_app::domain::catalog::CatalogError;

pub(crate) fn into_status_error(error: CatalogError) -> StatusError {
    match error {
        CatalogError::NotFound => StatusError::not_found().brief("Product not found"),
    }
}
