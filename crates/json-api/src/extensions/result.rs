//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::error;

/// Map errors to HTTP status errors at the handler boundary.
pub(crate) trait ResultExt<T> {
    /// Logs the error and answers with an internal server error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Answers with a bad request carrying the given brief.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|_source| StatusError::bad_request().brief(brief))
    }
}
