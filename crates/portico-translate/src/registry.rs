use std::fmt;

use portico_core::ErrorCode;
use thiserror::Error;

use crate::Translate;

/// Registry construction failures
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two translators declared the same priority, which would make
    /// dispatch order ambiguous
    #[error("duplicate translator priority {priority}: `{first}` and `{second}`")]
    DuplicatePriority {
        priority: i32,
        first: &'static str,
        second: &'static str,
    },
}

/// Priority-ordered set of translators
///
/// Built once at startup and shared read-only across request tasks.
/// Dispatch walks translators in ascending priority value (lower value
/// wins); registration order is never consulted, and duplicate priorities
/// are rejected at construction so the order is always deterministic.
pub struct TranslatorRegistry {
    translators: Vec<(i32, Box<dyn Translate>)>,
}

impl TranslatorRegistry {
    /// Build a registry from explicitly prioritized translators
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicatePriority`] if two translators
    /// share a priority value
    pub fn new(mut entries: Vec<(i32, Box<dyn Translate>)>) -> Result<Self, RegistryError> {
        entries.sort_by_key(|(priority, _)| *priority);

        for pair in entries.windows(2) {
            let (first_priority, first) = &pair[0];
            let (second_priority, second) = &pair[1];
            if first_priority == second_priority {
                return Err(RegistryError::DuplicatePriority {
                    priority: *first_priority,
                    first: first.name(),
                    second: second.name(),
                });
            }
        }

        Ok(Self { translators: entries })
    }

    /// Translate a raised condition into its catalog entry
    ///
    /// The first translator (in priority order) returning a match wins.
    /// Conditions nothing matches are logged with their full chain for
    /// operator diagnosis and resolved to the generic internal-failure
    /// entry; the original detail never reaches the caller.
    pub fn resolve(&self, error: &(dyn std::error::Error + 'static)) -> ErrorCode {
        for (_, translator) in &self.translators {
            if let Some(code) = translator.translate(error) {
                return code;
            }
        }

        tracing::error!(error = %ErrorChain(error), "no translator matched condition");
        ErrorCode::FailedInternalSystemProcessing
    }

    /// Number of registered translators
    #[must_use]
    pub fn len(&self) -> usize {
        self.translators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translators.is_empty()
    }
}

impl fmt::Debug for TranslatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (priority, translator) in &self.translators {
            map.entry(priority, &translator.name());
        }
        map.finish()
    }
}

/// Formats an error with its source chain on one line
///
/// Used wherever a condition's internal detail is logged for operators
/// before the generic envelope goes to the caller.
pub struct ErrorChain<'a>(pub &'a (dyn std::error::Error + 'static));

impl fmt::Display for ErrorChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(cause) = source {
            write!(f, ": {cause}")?;
            source = cause.source();
        }
        Ok(())
    }
}
