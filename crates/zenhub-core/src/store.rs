//! The `CatalogStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `zenhub-store-memory`).
//! Higher layers (`zenhub-api`) depend on this abstraction, not on any
//! concrete backend. It folds the three roles of the system into one
//! surface: the catalog reads, the registration ledger, and the admin
//! mutation API.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use crate::{
  content::{Article, NewArticle},
  event::{Event, EventPatch, EventType, NewEvent},
  registration::{Registration, UserRegistration},
  user::User,
};

/// Abstraction over a ZenHub catalog backend.
///
/// Plain reads signal "not found" as an absent result, never an error.
/// The registration ledger is the one surface with contractual weight; see
/// [`CatalogStore::register_for_event`].
pub trait CatalogStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Catalog reads ─────────────────────────────────────────────────────

  /// List events in insertion order, optionally restricted to one
  /// [`EventType`].
  fn list_events(
    &self,
    event_type: Option<EventType>,
  ) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send + '_;

  /// The subsequence of [`list_events`](Self::list_events) with
  /// `is_featured` set, in the same order.
  fn list_featured_events(
    &self,
  ) -> impl Future<Output = Result<Vec<Event>, Self::Error>> + Send + '_;

  /// Retrieve an event by id. Returns `None` if not found.
  fn get_event<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Event>, Self::Error>> + Send + 'a;

  /// List articles in insertion order.
  fn list_articles(
    &self,
  ) -> impl Future<Output = Result<Vec<Article>, Self::Error>> + Send + '_;

  /// Retrieve an article by its slug. Returns `None` if not found.
  fn get_article_by_slug<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<Option<Article>, Self::Error>> + Send + 'a;

  /// List the known user identities.
  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  /// Retrieve a user by id. Returns `None` if not found.
  fn get_user<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  // ── Registration ledger ───────────────────────────────────────────────

  /// Register `user_id` for `event_id`.
  ///
  /// Idempotent per pair: if a registration already exists it is returned
  /// unchanged, with no second occupancy increment. That short-circuit runs
  /// before the capacity gate, so an already-registered user is never
  /// rejected for a now-full event.
  ///
  /// Errors with [`EventNotFound`](crate::Error::EventNotFound) when the
  /// event is absent, and [`EventFull`](crate::Error::EventFull) when
  /// `current_registrations >= capacity` at the time of the call. On a
  /// genuinely new, admitted registration the record append and the
  /// occupancy increment happen in the same critical section.
  fn register_for_event<'a>(
    &'a self,
    user_id: &'a str,
    event_id: &'a str,
  ) -> impl Future<Output = Result<Registration, Self::Error>> + Send + 'a;

  /// All registrations held by `user_id`, each joined to its event. The
  /// event side is `None` when the event has since been deleted.
  fn registrations_for_user<'a>(
    &'a self,
    user_id: &'a str,
  ) -> impl Future<Output = Result<Vec<UserRegistration>, Self::Error>> + Send + 'a;

  // ── Admin mutations ───────────────────────────────────────────────────

  /// Create an event with a fresh unique id and zero occupancy, appended at
  /// the end of the collection.
  fn create_event(
    &self,
    input: NewEvent,
  ) -> impl Future<Output = Result<Event, Self::Error>> + Send + '_;

  /// Replace only the fields set in `patch` on the matching event.
  /// Returns the updated event, or `None` if the id is absent.
  fn update_event<'a>(
    &'a self,
    id: &'a str,
    patch: EventPatch,
  ) -> impl Future<Output = Result<Option<Event>, Self::Error>> + Send + 'a;

  /// Remove an event. Existing registrations keep their dangling
  /// `event_id`; there is no cascading delete. Returns whether an event was
  /// removed.
  fn delete_event<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Create an article with a fresh unique id, appended at the end.
  fn create_article(
    &self,
    input: NewArticle,
  ) -> impl Future<Output = Result<Article, Self::Error>> + Send + '_;
}
