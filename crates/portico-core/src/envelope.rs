use serde::Serialize;

use crate::catalog::ErrorCode;

/// Success envelope
///
/// Wraps a handler's return value for serialization. The serialized body has
/// exactly one key, `payload`; `code` and `message` never appear on the
/// success path.
#[derive(Debug, Serialize)]
pub struct Success<T> {
    pub payload: T,
}

impl<T> Success<T> {
    #[must_use]
    pub const fn new(payload: T) -> Self {
        Self { payload }
    }
}

/// Error envelope
///
/// Both fields are copied verbatim from a single catalog entry; the body has
/// exactly the keys `code` and `message` and never a `payload`. Internal
/// failure detail is logged server-side and does not pass through here.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: &'static str,
}

impl From<ErrorCode> for ErrorBody {
    fn from(code: ErrorCode) -> Self {
        Self {
            code: code.as_str(),
            message: code.message(),
        }
    }
}
