//! JSON REST API for the ZenHub wellness catalog.
//!
//! Exposes an axum [`Router`] backed by any
//! [`zenhub_core::store::CatalogStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = zenhub_api::api_router(Arc::new(MemoryStore::seeded()));
//! ```

pub mod auth;
pub mod content;
pub mod error;
pub mod events;
pub mod registrations;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::get,
};
use serde::Deserialize;
use zenhub_core::store::CatalogStore;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `ZENHUB_*` environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:           String,
  #[serde(default = "default_port")]
  pub port:           u16,
  /// Seed the store with the demo catalog on startup.
  #[serde(default = "default_seed")]
  pub seed_demo_data: bool,
}

fn default_host() -> String {
  "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
  8080
}

fn default_seed() -> bool {
  true
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CatalogStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Events
    .route("/events", get(events::list::<S>).post(events::create::<S>))
    .route(
      "/events/{id}",
      get(events::get_one::<S>)
        .patch(events::update_one::<S>)
        .delete(events::delete_one::<S>),
    )
    // Articles
    .route("/articles", get(content::list::<S>).post(content::create::<S>))
    .route("/articles/{slug}", get(content::get_one::<S>))
    // Users
    .route("/users", get(users::list::<S>))
    .route("/users/{id}", get(users::get_one::<S>))
    // Registrations
    .route(
      "/registrations",
      get(registrations::list::<S>).post(registrations::create::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
