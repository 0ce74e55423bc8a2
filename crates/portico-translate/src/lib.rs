//! Centralized failure translation
//!
//! A [`TranslatorRegistry`] is the single point converting raised failure
//! conditions into catalog entries. Translators are consulted in an
//! explicitly declared priority order; conditions no translator recognizes
//! fall back to the internal-failure entry and are logged with full detail.

mod fault;
mod registry;

use portico_core::ErrorCode;

pub use fault::FaultTranslator;
pub use registry::{ErrorChain, RegistryError, TranslatorRegistry};

/// A single translation strategy
///
/// Implementations inspect the concrete error (typically via
/// `downcast_ref`) and return the matching catalog entry, or `None` when
/// the condition is not theirs to translate.
pub trait Translate: Send + Sync {
    /// Stable identifier, used in configuration and logs
    fn name(&self) -> &'static str;

    /// Translate the condition, or decline it
    fn translate(&self, error: &(dyn std::error::Error + 'static)) -> Option<ErrorCode>;
}
