//! Core types for the Portico response boundary
//!
//! Defines the response envelopes, the fixed error catalog, and the typed
//! failure condition domain code raises. Nothing here depends on axum; the
//! server layer owns the HTTP glue.

mod catalog;
mod envelope;
mod error;
mod fault;

pub use catalog::ErrorCode;
pub use envelope::{ErrorBody, Success};
pub use error::HttpFault;
pub use fault::Fault;
