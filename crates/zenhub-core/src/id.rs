//! Injectable id generation.
//!
//! The seed catalog uses short human-readable ids (`e1`, `c2`); stores keep
//! that scheme going with a monotonic counter per collection, while
//! standalone deployments can opt into UUIDs. Kept behind a trait so tests
//! can assert deterministic ids.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh identifiers for store-created records.
pub trait IdProvider: Send + Sync {
  fn next_event_id(&self) -> String;
  fn next_article_id(&self) -> String;
  fn next_registration_id(&self) -> String;
}

// ─── SequenceIds ─────────────────────────────────────────────────────────────

/// Monotonic per-collection counters producing `e<n>` / `c<n>` / `r<n>`.
/// Counters only ever advance, so an id is never reused after a delete.
#[derive(Debug)]
pub struct SequenceIds {
  events:        AtomicU64,
  articles:      AtomicU64,
  registrations: AtomicU64,
}

impl SequenceIds {
  /// Start every counter at 1.
  pub fn new() -> Self {
    Self::starting_at(1, 1)
  }

  /// Start the event and article counters past existing seed ids.
  pub fn starting_at(next_event: u64, next_article: u64) -> Self {
    Self {
      events:        AtomicU64::new(next_event),
      articles:      AtomicU64::new(next_article),
      registrations: AtomicU64::new(1),
    }
  }
}

impl Default for SequenceIds {
  fn default() -> Self {
    Self::new()
  }
}

impl IdProvider for SequenceIds {
  fn next_event_id(&self) -> String {
    format!("e{}", self.events.fetch_add(1, Ordering::Relaxed))
  }

  fn next_article_id(&self) -> String {
    format!("c{}", self.articles.fetch_add(1, Ordering::Relaxed))
  }

  fn next_registration_id(&self) -> String {
    format!("r{}", self.registrations.fetch_add(1, Ordering::Relaxed))
  }
}

// ─── UuidIds ─────────────────────────────────────────────────────────────────

/// Random v4 UUIDs for every collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdProvider for UuidIds {
  fn next_event_id(&self) -> String {
    Uuid::new_v4().to_string()
  }

  fn next_article_id(&self) -> String {
    Uuid::new_v4().to_string()
  }

  fn next_registration_id(&self) -> String {
    Uuid::new_v4().to_string()
  }
}
