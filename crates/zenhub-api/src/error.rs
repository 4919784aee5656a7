//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  /// Admission refused — the event is at capacity.
  #[error("conflict: {0}")]
  Conflict(String),

  #[error("unauthorized: {0}")]
  Unauthorized(String),

  #[error("forbidden: {0}")]
  Forbidden(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, m.clone()),
      ApiError::Forbidden(m) => (StatusCode::FORBIDDEN, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

/// Map a backend error onto the API taxonomy.
///
/// Ledger refusals carry proper status codes when the backend surfaces
/// [`zenhub_core::Error`] anywhere in its source chain; everything else is
/// a 500.
pub fn map_store_err<E>(err: E) -> ApiError
where
  E: std::error::Error + Send + Sync + 'static,
{
  let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&err);
  while let Some(e) = source {
    if let Some(core) = e.downcast_ref::<zenhub_core::Error>() {
      return match core {
        zenhub_core::Error::EventNotFound(id) => {
          ApiError::NotFound(format!("event {id} not found"))
        }
        zenhub_core::Error::EventFull(id) => {
          ApiError::Conflict(format!("event {id} is at capacity"))
        }
      };
    }
    source = e.source();
  }
  ApiError::Store(Box::new(err))
}
