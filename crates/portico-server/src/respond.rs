use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use portico_core::{ErrorBody, ErrorCode, Fault, HttpFault, Success};
use portico_translate::{ErrorChain, TranslatorRegistry};
use serde::Serialize;

/// Success response wrapper that implements `IntoResponse`
///
/// Serializes the payload inside the success envelope with status 200.
#[derive(Debug)]
pub struct ApiSuccess<T>(pub T);

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(Success::new(self.0))).into_response()
    }
}

/// Error response wrapper that implements `IntoResponse`
///
/// Carries the resolved catalog entry; the serialized body is the error
/// envelope and the status line comes from the same entry.
#[derive(Debug)]
pub struct ApiFailure(ErrorCode);

impl ApiFailure {
    /// Resolve an arbitrary raised condition through the registry
    #[must_use]
    pub fn resolve(registry: &TranslatorRegistry, error: &(dyn std::error::Error + 'static)) -> Self {
        Self(registry.resolve(error))
    }

    /// Catalog entry this failure resolved to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.0
    }
}

impl From<ErrorCode> for ApiFailure {
    fn from(code: ErrorCode) -> Self {
        Self(code)
    }
}

impl From<Fault> for ApiFailure {
    fn from(fault: Fault) -> Self {
        let code = fault.error_code();

        // The generic envelope hides the cause; record it for operators
        if code == ErrorCode::FailedInternalSystemProcessing {
            tracing::error!(error = %ErrorChain(&fault), "internal condition resolved at response boundary");
        }

        Self(code)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> axum::response::Response {
        (self.0.status(), Json(ErrorBody::from(self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_response_wraps_payload() {
        let response = ApiSuccess("created").into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "payload": "created" }));
    }

    #[tokio::test]
    async fn failure_response_uses_catalog_entry() {
        let fault = Fault::EmailDuplicated {
            email: "dup@example.com".to_owned(),
        };
        let response = ApiFailure::from(fault).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({
                "code": "EMAIL_DUPLICATED",
                "message": "email is already registered",
            })
        );
    }

    #[tokio::test]
    async fn failure_body_never_includes_payload_key() {
        let response = ApiFailure::from(ErrorCode::Forbidden).into_response();
        let body = body_json(response).await;
        assert!(body.get("payload").is_none());
    }

    #[test]
    fn internal_fault_conversion_logs_the_chain() {
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct LogSink(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for LogSink {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = Arc::new(Mutex::new(Vec::new()));
        let writer_sink = Arc::clone(&sink);
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || LogSink(Arc::clone(&writer_sink)))
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let failure = ApiFailure::from(Fault::Internal(anyhow::anyhow!("migration table locked")));
            assert_eq!(failure.code(), ErrorCode::FailedInternalSystemProcessing);
        });

        let logs = String::from_utf8(sink.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("migration table locked"));
    }
}
