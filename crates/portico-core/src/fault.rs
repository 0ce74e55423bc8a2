use thiserror::Error;

use crate::catalog::ErrorCode;
use crate::error::HttpFault;

/// Typed failure condition raised by request-handling code
///
/// Display output is operator-facing and may carry request detail; the
/// client only ever sees the catalog entry resolved via [`HttpFault`].
#[derive(Debug, Error)]
pub enum Fault {
    /// Request was malformed or failed validation
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request lacks valid authentication credentials
    #[error("authentication required")]
    Unauthorized,

    /// Authenticated caller may not perform this operation
    #[error("access denied")]
    Forbidden,

    /// Addressed resource does not exist
    #[error("resource not found: {resource}")]
    ResourceNotFound { resource: String },

    /// Email address is already registered
    #[error("email already registered: {email}")]
    EmailDuplicated { email: String },

    /// Unexpected internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl HttpFault for Fault {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidRequest(_) => ErrorCode::InvalidRequest,
            Self::Unauthorized => ErrorCode::Unauthorized,
            Self::Forbidden => ErrorCode::Forbidden,
            Self::ResourceNotFound { .. } => ErrorCode::ResourceNotFound,
            Self::EmailDuplicated { .. } => ErrorCode::EmailDuplicated,
            Self::Internal(_) => ErrorCode::FailedInternalSystemProcessing,
        }
    }
}
