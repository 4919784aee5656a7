//! Handlers for `/events` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/events` | Optional `?event_type=workshop\|retreat\|online`, `?featured=true` |
//! | `GET`    | `/events/:id` | 404 if not found |
//! | `POST`   | `/events` | Admin; body: [`NewEvent`]; 201 + created event |
//! | `PATCH`  | `/events/:id` | Admin; body: [`EventPatch`]; 404 if not found |
//! | `DELETE` | `/events/:id` | Admin; 204 / 404 |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use zenhub_core::{
  event::{Event, EventPatch, EventType, NewEvent},
  store::CatalogStore,
};

use crate::{auth::RequireAdmin, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub event_type: Option<EventType>,
  /// When `true`, return the home-page curation subset; the type filter is
  /// ignored.
  #[serde(default)]
  pub featured:   bool,
}

/// `GET /events[?event_type=<type>][&featured=true]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Event>>, ApiError>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let events = if params.featured {
    store.list_featured_events().await
  } else {
    store.list_events(params.event_type).await
  }
  .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(events))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /events/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Event>, ApiError>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let event = store
    .get_event(&id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("event {id} not found")))?;
  Ok(Json(event))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /events` — admin only; body is a [`NewEvent`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  RequireAdmin(_admin): RequireAdmin,
  Json(body): Json<NewEvent>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let event = store
    .create_event(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(event)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /events/:id` — admin only; body is an [`EventPatch`].
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  RequireAdmin(_admin): RequireAdmin,
  Path(id): Path<String>,
  Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, ApiError>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let event = store
    .update_event(&id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("event {id} not found")))?;
  Ok(Json(event))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /events/:id` — admin only.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  RequireAdmin(_admin): RequireAdmin,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let removed = store
    .delete_event(&id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if removed {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("event {id} not found")))
  }
}
