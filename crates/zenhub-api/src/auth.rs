//! Role gate for admin routes.
//!
//! Deliberately not an authentication scheme: the client presents a user id
//! in the `x-user-id` header and the gate checks the resolved user's role.
//! This mirrors the demo login, which is a role-selection toggle with no
//! credential check; the "current user" blob itself lives client-side.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use zenhub_core::{
  store::CatalogStore,
  user::{User, UserRole},
};

use crate::error::ApiError;

/// Header carrying the acting user's id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor admitting only users with [`UserRole::Admin`].
///
/// Rejects with 401 when the header is missing or names an unknown user,
/// and 403 when the user exists but is not an admin.
pub struct RequireAdmin(pub User);

impl<S> FromRequestParts<Arc<S>> for RequireAdmin
where
  S: CatalogStore + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    store: &Arc<S>,
  ) -> Result<Self, ApiError> {
    let id = parts
      .headers
      .get(USER_ID_HEADER)
      .and_then(|v| v.to_str().ok())
      .ok_or_else(|| {
        ApiError::Unauthorized(format!("missing {USER_ID_HEADER} header"))
      })?;

    let user = store
      .get_user(id)
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?
      .ok_or_else(|| ApiError::Unauthorized(format!("unknown user {id}")))?;

    if user.role != UserRole::Admin {
      return Err(ApiError::Forbidden(format!("user {id} is not an admin")));
    }

    Ok(Self(user))
  }
}
