use portico_core::{ErrorCode, Fault, HttpFault};

use crate::Translate;
use crate::registry::ErrorChain;

/// Built-in translator for the typed [`Fault`] condition
///
/// Exact type match: anything that is not a `Fault` is declined and left
/// for lower-precedence translators or the catch-all.
#[derive(Debug, Default)]
pub struct FaultTranslator;

impl Translate for FaultTranslator {
    fn name(&self) -> &'static str {
        "fault"
    }

    fn translate(&self, error: &(dyn std::error::Error + 'static)) -> Option<ErrorCode> {
        let fault = error.downcast_ref::<Fault>()?;
        let code = fault.error_code();

        // The generic envelope hides the cause; record it for operators
        if code == ErrorCode::FailedInternalSystemProcessing {
            tracing::error!(error = %ErrorChain(fault), "internal condition translated to generic failure");
        }

        Some(code)
    }
}
