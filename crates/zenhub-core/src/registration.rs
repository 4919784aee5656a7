//! Registration records — the link between a user and an event.
//!
//! A registration is created at most once per `(user, event)` pair and is
//! never deleted; deleting an event leaves its registrations pointing at a
//! dangling key, which the join in
//! [`CatalogStore::registrations_for_user`](crate::store::CatalogStore::registrations_for_user)
//! tolerates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Lifecycle label for a registration. `Cancelled` exists in the data model
/// but no exposed operation currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
  Registered,
  Cancelled,
}

/// A record linking one user to one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
  pub id:            String,
  pub user_id:       String,
  /// Lookup key, not an ownership pointer; the event may no longer exist.
  pub event_id:      String,
  pub status:        RegistrationStatus,
  /// Store-assigned creation timestamp.
  pub registered_at: DateTime<Utc>,
}

/// A registration joined to its event. The event side is `None` when the
/// event has since been deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegistration {
  pub registration: Registration,
  pub event:        Option<Event>,
}
