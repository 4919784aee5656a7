//! Editorial content — articles looked up by slug.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An editorial piece. The slug is the primary lookup key for detail pages;
/// the id exists for admin bookkeeping only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
  pub id:           String,
  /// Unique, stable, human-readable lookup key.
  pub slug:         String,
  pub title:        String,
  pub cover_image:  String,
  pub body:         String,
  pub tags:         Vec<String>,
  pub author:       String,
  pub published_at: NaiveDate,
  /// Display string, e.g. `"5 min"`.
  pub reading_time: String,
}

/// Input to [`CatalogStore::create_article`](crate::store::CatalogStore::create_article).
/// The id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
  pub slug:         String,
  pub title:        String,
  pub cover_image:  String,
  pub body:         String,
  #[serde(default)]
  pub tags:         Vec<String>,
  pub author:       String,
  pub published_at: NaiveDate,
  pub reading_time: String,
}
