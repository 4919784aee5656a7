//! Handlers for `/articles` endpoints.
//!
//! Articles are resolved by slug, not id — the slug is the stable key
//! detail pages link with.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use zenhub_core::{
  content::{Article, NewArticle},
  store::CatalogStore,
};

use crate::{auth::RequireAdmin, error::ApiError};

/// `GET /articles`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Article>>, ApiError>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let articles = store
    .list_articles()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(articles))
}

/// `GET /articles/:slug`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(slug): Path<String>,
) -> Result<Json<Article>, ApiError>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let article = store
    .get_article_by_slug(&slug)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("article {slug} not found")))?;
  Ok(Json(article))
}

/// `POST /articles` — admin only; body is a [`NewArticle`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  RequireAdmin(_admin): RequireAdmin,
  Json(body): Json<NewArticle>,
) -> Result<impl IntoResponse, ApiError>
where
  S: CatalogStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let article = store
    .create_article(body)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(article)))
}
