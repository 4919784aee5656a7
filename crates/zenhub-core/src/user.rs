//! User identities.
//!
//! Only the two fixed demo identities exist; there is no general signup.
//! The role is the sole authorization gate distinguishing admin-only
//! surfaces.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
  User,
  Admin,
  Organizer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub id:        String,
  pub name:      String,
  pub email:     String,
  pub role:      UserRole,
  pub interests: Vec<String>,
  pub avatar:    Option<String>,
}
