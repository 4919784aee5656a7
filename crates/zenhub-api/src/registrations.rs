//! Handlers for `/registrations` endpoints — the pre-registration flow.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/registrations` | Body: `{"user_id":"...","event_id":"..."}`; 201, 404 event absent, 409 event full |
//! | `GET`  | `/registrations` | `?user_id=` required; each entry joins its event, `null` when deleted |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use zenhub_core::{registration::UserRegistration, store::CatalogStore};

use crate::error::{ApiError, map_store_err};

// ─── Register ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
  pub user_id:  String,
  pub event_id: String,
}

/// `POST /registrations`
///
/// Idempotent per `(user_id, event_id)` pair: re-posting an existing pair
/// returns the original record and leaves occupancy untouched.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let registration = store
    .register_for_event(&body.user_id, &body.event_id)
    .await
    .map_err(map_store_err)?;
  Ok((StatusCode::CREATED, Json(registration)))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub user_id: String,
}

/// `GET /registrations?user_id=<id>`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<UserRegistration>>, ApiError>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let held = store
    .registrations_for_user(&params.user_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(held))
}
