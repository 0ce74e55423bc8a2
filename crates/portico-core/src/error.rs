use http::StatusCode;

use crate::catalog::ErrorCode;

/// Trait for domain errors that resolve to a catalog entry
///
/// Implemented by error types whose variants map one-to-one onto the
/// catalog. The server layer converts these into actual HTTP responses,
/// keeping domain errors decoupled from axum.
pub trait HttpFault: std::error::Error {
    /// Catalog entry for this error
    fn error_code(&self) -> ErrorCode;

    /// HTTP status code, taken from the catalog entry
    fn status_code(&self) -> StatusCode {
        self.error_code().status()
    }

    /// Message safe to expose to API consumers
    ///
    /// Always the fixed catalog message, never the error's own display
    /// output, which may carry internal detail.
    fn client_message(&self) -> &'static str {
        self.error_code().message()
    }
}
