use axum::Json;
use axum::response::IntoResponse;
use portico_core::ErrorCode;
use serde::Serialize;
use strum::IntoEnumIterator;

/// One row of the catalog listing
#[derive(Debug, Serialize)]
struct CatalogEntry {
    code: &'static str,
    status: u16,
    message: &'static str,
}

/// List every catalog entry
///
/// Operator-facing, read-only; the catalog never changes at runtime.
pub async fn catalog_handler() -> impl IntoResponse {
    let entries: Vec<CatalogEntry> = ErrorCode::iter()
        .map(|code| CatalogEntry {
            code: code.as_str(),
            status: code.status().as_u16(),
            message: code.message(),
        })
        .collect();

    Json(entries)
}
