//! Error types for `zenhub-core`.
//!
//! "Not found" on a plain read is signalled as an absent result, not an
//! error; the variants here cover the registration ledger, which refuses
//! admission rather than degrading to a missing value.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("event not found: {0}")]
  EventNotFound(String),

  /// Admission refused: the event is at capacity and the caller holds no
  /// prior registration for it.
  #[error("event {0} is at capacity")]
  EventFull(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
