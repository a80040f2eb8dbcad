//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use stockroom_core::{ErrorKind, store::StoreError};
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A failure raised by the inventory rules themselves.
  #[error("{message}")]
  Domain { kind: ErrorKind, message: String },

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Classify a store error: domain failures keep their kind, anything else
  /// is an internal error.
  pub fn from_store<E: StoreError>(e: E) -> Self {
    match e.domain() {
      Some(d) => ApiError::Domain {
        kind:    d.kind(),
        message: d.to_string(),
      },
      None => ApiError::Store(Box::new(e)),
    }
  }
}

impl From<QueryRejection> for ApiError {
  fn from(r: QueryRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

impl From<JsonRejection> for ApiError {
  fn from(r: JsonRejection) -> Self { ApiError::BadRequest(r.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, kind, message) = match &self {
      ApiError::Domain { kind, message } => {
        let status = match kind {
          ErrorKind::Validation => StatusCode::BAD_REQUEST,
          ErrorKind::NotFound => StatusCode::NOT_FOUND,
          ErrorKind::StateConflict => StatusCode::CONFLICT,
        };
        (status, <&'static str>::from(*kind), message.clone())
      }
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, "bad_request", m.clone())
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal", e.to_string())
      }
    };
    (status, Json(json!({ "error": message, "kind": kind }))).into_response()
  }
}
