//! Event types — the bookable experiences the catalog exists to sell.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The format of a wellness experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
  Workshop,
  Retreat,
  Online,
}

/// Admin-controlled publication label.
///
/// `Draft` is a reachable creation state with no exposed transition out of
/// it; the admin toggle flips between `Published` and `SoldOut`. Reaching
/// capacity never changes the label on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
  Draft,
  Published,
  SoldOut,
}

/// A bookable wellness experience with finite capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
  pub id:                    String,
  pub title:                 String,
  pub description:           String,
  pub location:              String,
  pub venue:                 String,
  pub start_date:            NaiveDate,
  pub end_date:              NaiveDate,
  pub price:                 f64,
  pub capacity:              u32,
  /// Occupancy count; mutated only by the registration ledger.
  /// Invariant: `0 <= current_registrations <= capacity`.
  pub current_registrations: u32,
  pub organizer:             String,
  pub cover_image:           String,
  pub event_type:            EventType,
  pub status:                EventStatus,
  /// Curation flag for home-page inclusion, independent of status or
  /// capacity.
  #[serde(default)]
  pub is_featured:           bool,
}

impl Event {
  /// No spots left. This is the rule the registration gate uses; the
  /// `status` label plays no part in admission.
  pub fn is_full(&self) -> bool {
    self.current_registrations >= self.capacity
  }

  /// Display-level availability: the admin label, or a full house. The two
  /// signals are never reconciled, so availability checks take the
  /// disjunction.
  pub fn is_sold_out(&self) -> bool {
    self.status == EventStatus::SoldOut || self.is_full()
  }

  pub fn spots_left(&self) -> u32 {
    self.capacity.saturating_sub(self.current_registrations)
  }
}

// ─── NewEvent ────────────────────────────────────────────────────────────────

/// Input to [`CatalogStore::create_event`](crate::store::CatalogStore::create_event).
/// The id and occupancy count are always assigned by the store; they are not
/// accepted from callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
  pub title:       String,
  pub description: String,
  pub location:    String,
  pub venue:       String,
  pub start_date:  NaiveDate,
  pub end_date:    NaiveDate,
  pub price:       f64,
  pub capacity:    u32,
  pub organizer:   String,
  pub cover_image: String,
  pub event_type:  EventType,
  pub status:      EventStatus,
  #[serde(default)]
  pub is_featured: bool,
}

// ─── EventPatch ──────────────────────────────────────────────────────────────

/// A partial update for [`CatalogStore::update_event`](crate::store::CatalogStore::update_event).
/// Fields left `None` are untouched. The id and occupancy count are never
/// patchable; occupancy belongs to the registration ledger alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPatch {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub location:    Option<String>,
  pub venue:       Option<String>,
  pub start_date:  Option<NaiveDate>,
  pub end_date:    Option<NaiveDate>,
  pub price:       Option<f64>,
  pub capacity:    Option<u32>,
  pub organizer:   Option<String>,
  pub cover_image: Option<String>,
  pub event_type:  Option<EventType>,
  pub status:      Option<EventStatus>,
  pub is_featured: Option<bool>,
}

impl EventPatch {
  /// Fold the set fields into `event`, leaving the rest as they were.
  pub fn apply(self, event: &mut Event) {
    if let Some(v) = self.title {
      event.title = v;
    }
    if let Some(v) = self.description {
      event.description = v;
    }
    if let Some(v) = self.location {
      event.location = v;
    }
    if let Some(v) = self.venue {
      event.venue = v;
    }
    if let Some(v) = self.start_date {
      event.start_date = v;
    }
    if let Some(v) = self.end_date {
      event.end_date = v;
    }
    if let Some(v) = self.price {
      event.price = v;
    }
    if let Some(v) = self.capacity {
      event.capacity = v;
    }
    if let Some(v) = self.organizer {
      event.organizer = v;
    }
    if let Some(v) = self.cover_image {
      event.cover_image = v;
    }
    if let Some(v) = self.event_type {
      event.event_type = v;
    }
    if let Some(v) = self.status {
      event.status = v;
    }
    if let Some(v) = self.is_featured {
      event.is_featured = v;
    }
  }
}
