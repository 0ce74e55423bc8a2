use http::StatusCode;
use strum::EnumIter;

/// The fixed error catalog
///
/// A closed set of symbolic codes, each bound to exactly one HTTP status and
/// one client-facing message for the lifetime of the process. The catalog is
/// populated at compile time and exposes no mutation; lookup cannot fail
/// because the key space is the enum itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ErrorCode {
    /// Request was malformed or failed validation
    InvalidRequest,
    /// Request lacks valid authentication credentials
    Unauthorized,
    /// Authenticated caller may not perform this operation
    Forbidden,
    /// Addressed resource does not exist
    ResourceNotFound,
    /// Email address is already registered
    EmailDuplicated,
    /// Catch-all for conditions with no cataloged translation
    FailedInternalSystemProcessing,
}

impl ErrorCode {
    /// HTTP status for this entry
    #[must_use]
    pub const fn status(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::EmailDuplicated => StatusCode::CONFLICT,
            Self::FailedInternalSystemProcessing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Symbolic code, unique across the catalog
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::EmailDuplicated => "EMAIL_DUPLICATED",
            Self::FailedInternalSystemProcessing => "FAILED_INTERNAL_SYSTEM_PROCESSING",
        }
    }

    /// Client-safe message for this entry
    ///
    /// Fixed per entry; never carries request-specific detail.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid request",
            Self::Unauthorized => "authentication required",
            Self::Forbidden => "access denied",
            Self::ResourceNotFound => "requested resource was not found",
            Self::EmailDuplicated => "email is already registered",
            Self::FailedInternalSystemProcessing => "internal system processing failed",
        }
    }
}
