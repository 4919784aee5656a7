//! [`MemoryStore`] — the in-memory implementation of [`CatalogStore`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use zenhub_core::{
  Error,
  content::{Article, NewArticle},
  event::{Event, EventPatch, EventType, NewEvent},
  id::{IdProvider, SequenceIds},
  registration::{Registration, RegistrationStatus, UserRegistration},
  store::CatalogStore,
  user::User,
};

use crate::fixtures;

// ─── State ───────────────────────────────────────────────────────────────────

/// The collections the store owns exclusively. Insertion order is the
/// listing order.
#[derive(Default)]
struct State {
  events:        Vec<Event>,
  articles:      Vec<Article>,
  users:         Vec<User>,
  registrations: Vec<Registration>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A catalog store holding every collection in process memory.
///
/// Cloning is cheap — the inner state is reference-counted. All mutations
/// run under the single write lock, so the ledger's capacity
/// check-then-increment is atomic under concurrent callers.
#[derive(Clone)]
pub struct MemoryStore {
  state: Arc<RwLock<State>>,
  ids:   Arc<dyn IdProvider>,
}

impl MemoryStore {
  /// An empty store with sequential ids.
  pub fn new() -> Self {
    Self::with_ids(Arc::new(SequenceIds::new()))
  }

  /// An empty store drawing ids from `ids`.
  pub fn with_ids(ids: Arc<dyn IdProvider>) -> Self {
    Self {
      state: Arc::new(RwLock::new(State::default())),
      ids,
    }
  }

  /// A store seeded with the demo catalog, its id counters advanced past
  /// the seed ids.
  pub fn seeded() -> Self {
    let events   = fixtures::events();
    let articles = fixtures::articles();
    let ids      = SequenceIds::starting_at(
      events.len() as u64 + 1,
      articles.len() as u64 + 1,
    );

    Self {
      state: Arc::new(RwLock::new(State {
        events,
        articles,
        users: fixtures::users(),
        registrations: Vec::new(),
      })),
      ids:   Arc::new(ids),
    }
  }
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::new()
  }
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for MemoryStore {
  type Error = Error;

  // ── Catalog reads ─────────────────────────────────────────────────────────

  async fn list_events(&self, event_type: Option<EventType>) -> Result<Vec<Event>, Error> {
    let state = self.state.read().await;
    Ok(
      state
        .events
        .iter()
        .filter(|e| event_type.is_none_or(|t| e.event_type == t))
        .cloned()
        .collect(),
    )
  }

  async fn list_featured_events(&self) -> Result<Vec<Event>, Error> {
    let state = self.state.read().await;
    Ok(
      state
        .events
        .iter()
        .filter(|e| e.is_featured)
        .cloned()
        .collect(),
    )
  }

  async fn get_event(&self, id: &str) -> Result<Option<Event>, Error> {
    let state = self.state.read().await;
    Ok(state.events.iter().find(|e| e.id == id).cloned())
  }

  async fn list_articles(&self) -> Result<Vec<Article>, Error> {
    let state = self.state.read().await;
    Ok(state.articles.clone())
  }

  async fn get_article_by_slug(&self, slug: &str) -> Result<Option<Article>, Error> {
    let state = self.state.read().await;
    Ok(state.articles.iter().find(|a| a.slug == slug).cloned())
  }

  async fn list_users(&self) -> Result<Vec<User>, Error> {
    let state = self.state.read().await;
    Ok(state.users.clone())
  }

  async fn get_user(&self, id: &str) -> Result<Option<User>, Error> {
    let state = self.state.read().await;
    Ok(state.users.iter().find(|u| u.id == id).cloned())
  }

  // ── Registration ledger ───────────────────────────────────────────────────

  async fn register_for_event(
    &self,
    user_id:  &str,
    event_id: &str,
  ) -> Result<Registration, Error> {
    let mut state = self.state.write().await;

    let event_idx = state
      .events
      .iter()
      .position(|e| e.id == event_id)
      .ok_or_else(|| Error::EventNotFound(event_id.to_owned()))?;

    // Idempotency before the capacity gate: a user who already holds a
    // registration is never rejected for a now-full event.
    if let Some(existing) = state
      .registrations
      .iter()
      .find(|r| r.user_id == user_id && r.event_id == event_id)
    {
      return Ok(existing.clone());
    }

    if state.events[event_idx].is_full() {
      return Err(Error::EventFull(event_id.to_owned()));
    }

    let registration = Registration {
      id:            self.ids.next_registration_id(),
      user_id:       user_id.to_owned(),
      event_id:      event_id.to_owned(),
      status:        RegistrationStatus::Registered,
      registered_at: Utc::now(),
    };

    // Record append and occupancy increment happen under the same write
    // lock; no partial state is observable.
    state.registrations.push(registration.clone());
    state.events[event_idx].current_registrations += 1;

    Ok(registration)
  }

  async fn registrations_for_user(&self, user_id: &str) -> Result<Vec<UserRegistration>, Error> {
    let state = self.state.read().await;
    Ok(
      state
        .registrations
        .iter()
        .filter(|r| r.user_id == user_id)
        .map(|r| UserRegistration {
          registration: r.clone(),
          // The event may have been deleted since; the key stays dangling.
          event:        state.events.iter().find(|e| e.id == r.event_id).cloned(),
        })
        .collect(),
    )
  }

  // ── Admin mutations ───────────────────────────────────────────────────────

  async fn create_event(&self, input: NewEvent) -> Result<Event, Error> {
    let mut state = self.state.write().await;

    // The fresh id must be distinct from every existing id, whatever the
    // provider hands out.
    let mut id = self.ids.next_event_id();
    while state.events.iter().any(|e| e.id == id) {
      id = self.ids.next_event_id();
    }

    let event = Event {
      id,
      title: input.title,
      description: input.description,
      location: input.location,
      venue: input.venue,
      start_date: input.start_date,
      end_date: input.end_date,
      price: input.price,
      capacity: input.capacity,
      current_registrations: 0,
      organizer: input.organizer,
      cover_image: input.cover_image,
      event_type: input.event_type,
      status: input.status,
      is_featured: input.is_featured,
    };

    state.events.push(event.clone());
    Ok(event)
  }

  async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Option<Event>, Error> {
    let mut state = self.state.write().await;
    Ok(match state.events.iter_mut().find(|e| e.id == id) {
      Some(event) => {
        patch.apply(event);
        Some(event.clone())
      }
      None => None,
    })
  }

  async fn delete_event(&self, id: &str) -> Result<bool, Error> {
    let mut state = self.state.write().await;
    let before = state.events.len();
    // Registrations keep their event_id; the join in
    // registrations_for_user tolerates the dangling key.
    state.events.retain(|e| e.id != id);
    Ok(state.events.len() != before)
  }

  async fn create_article(&self, input: NewArticle) -> Result<Article, Error> {
    let mut state = self.state.write().await;

    let mut id = self.ids.next_article_id();
    while state.articles.iter().any(|a| a.id == id) {
      id = self.ids.next_article_id();
    }

    let article = Article {
      id,
      slug: input.slug,
      title: input.title,
      cover_image: input.cover_image,
      body: input.body,
      tags: input.tags,
      author: input.author,
      published_at: input.published_at,
      reading_time: input.reading_time,
    };

    state.articles.push(article.clone());
    Ok(article)
  }
}
