//! Minimal application routes that raise conditions through the boundary

use std::sync::Arc;

use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use portico_core::Fault;
use portico_server::{ApiFailure, ApiSuccess};
use portico_translate::TranslatorRegistry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Email that the demo register handler treats as already taken
pub const TAKEN_EMAIL: &str = "taken@example.com";

/// Internal detail carried by the uncataloged failure
pub const SECRET_DETAIL: &str = "connection to 10.0.0.5:5432 refused";

/// A failure kind no translator knows about
#[derive(Debug, Error)]
#[error("storage backend unavailable: {0}")]
pub struct StorageError(pub String);

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    email: String,
}

#[derive(Debug, Serialize)]
struct Member {
    id: u64,
    email: String,
}

async fn register(Json(req): Json<RegisterRequest>) -> Result<ApiSuccess<Member>, ApiFailure> {
    if req.email.trim().is_empty() {
        return Err(Fault::InvalidRequest("email must not be empty".to_owned()).into());
    }
    if req.email == TAKEN_EMAIL {
        return Err(Fault::EmailDuplicated { email: req.email }.into());
    }
    Ok(ApiSuccess(Member { id: 1, email: req.email }))
}

async fn member(Path(id): Path<u64>) -> Result<ApiSuccess<Member>, ApiFailure> {
    if id == 1 {
        Ok(ApiSuccess(Member {
            id,
            email: "member@example.com".to_owned(),
        }))
    } else {
        Err(Fault::ResourceNotFound {
            resource: format!("member/{id}"),
        }
        .into())
    }
}

async fn private() -> Result<ApiSuccess<()>, ApiFailure> {
    Err(Fault::Unauthorized.into())
}

async fn admin() -> Result<ApiSuccess<()>, ApiFailure> {
    Err(Fault::Forbidden.into())
}

async fn explode(Extension(registry): Extension<Arc<TranslatorRegistry>>) -> ApiFailure {
    let error = StorageError(SECRET_DETAIL.to_owned());
    ApiFailure::resolve(&registry, &error)
}

/// Routes mounted on the test server
pub fn routes() -> Router {
    Router::new()
        .route("/members", post(register))
        .route("/members/{id}", get(member))
        .route("/private", get(private))
        .route("/admin", get(admin))
        .route("/explode", get(explode))
}
