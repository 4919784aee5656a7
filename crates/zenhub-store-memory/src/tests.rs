//! Integration tests for `MemoryStore` against the seeded demo catalog.

use zenhub_core::{
  Error,
  content::NewArticle,
  event::{EventPatch, EventStatus, EventType, NewEvent},
  id::{SequenceIds, UuidIds},
  store::CatalogStore,
  user::UserRole,
};

use crate::MemoryStore;

fn store() -> MemoryStore {
  MemoryStore::seeded()
}

fn new_event(title: &str, capacity: u32) -> NewEvent {
  NewEvent {
    title:       title.to_owned(),
    description: "A test event".to_owned(),
    location:    "Izmir".to_owned(),
    venue:       "Test Hall".to_owned(),
    start_date:  chrono::NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
    end_date:    chrono::NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
    price:       100.0,
    capacity,
    organizer:   "Test Org".to_owned(),
    cover_image: "https://example.com/cover.jpg".to_owned(),
    event_type:  EventType::Workshop,
    status:      EventStatus::Published,
    is_featured: false,
  }
}

fn new_article(slug: &str) -> NewArticle {
  NewArticle {
    slug:         slug.to_owned(),
    title:        "A test article".to_owned(),
    cover_image:  "https://example.com/cover.jpg".to_owned(),
    body:         "Body text".to_owned(),
    tags:         vec!["Test".to_owned()],
    author:       "Test Author".to_owned(),
    published_at: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    reading_time: "2 min".to_owned(),
  }
}

// ─── Catalog reads ───────────────────────────────────────────────────────────

#[tokio::test]
async fn seeded_events_list_in_insertion_order() {
  let s = store();
  let events = s.list_events(None).await.unwrap();

  let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
  assert_eq!(ids, ["e1", "e2", "e3"]);
}

#[tokio::test]
async fn list_events_filtered_by_type() {
  let s = store();
  let retreats = s.list_events(Some(EventType::Retreat)).await.unwrap();

  assert_eq!(retreats.len(), 2);
  assert!(retreats.iter().all(|e| e.event_type == EventType::Retreat));
}

#[tokio::test]
async fn featured_events_are_a_subsequence() {
  let s = store();
  let featured = s.list_featured_events().await.unwrap();

  let ids: Vec<_> = featured.iter().map(|e| e.id.as_str()).collect();
  assert_eq!(ids, ["e1", "e2"]);
  assert!(featured.iter().all(|e| e.is_featured));
}

#[tokio::test]
async fn get_event_missing_returns_none() {
  let s = store();
  assert!(s.get_event("no-such-event").await.unwrap().is_none());
}

#[tokio::test]
async fn get_article_by_slug() {
  let s = store();

  let article = s
    .get_article_by_slug("modern-dunyada-mindfulness")
    .await
    .unwrap()
    .unwrap();
  assert_eq!(article.title, "Modern Dünyada Mindfulness Pratiği");

  assert!(s.get_article_by_slug("nonexistent").await.unwrap().is_none());
}

#[tokio::test]
async fn demo_identities_are_seeded() {
  let s = store();

  let users = s.list_users().await.unwrap();
  assert_eq!(users.len(), 2);

  let admin = s.get_user("admin-1").await.unwrap().unwrap();
  assert_eq!(admin.role, UserRole::Admin);

  assert!(s.get_user("nobody").await.unwrap().is_none());
}

// ─── Registration ledger ─────────────────────────────────────────────────────

#[tokio::test]
async fn register_admits_and_increments_occupancy() {
  let s = store();

  let registration = s.register_for_event("u42", "e1").await.unwrap();
  assert_eq!(registration.user_id, "u42");
  assert_eq!(registration.event_id, "e1");

  let event = s.get_event("e1").await.unwrap().unwrap();
  assert_eq!(event.current_registrations, 13);
}

#[tokio::test]
async fn register_twice_is_idempotent() {
  let s = store();

  let first  = s.register_for_event("u42", "e1").await.unwrap();
  let second = s.register_for_event("u42", "e1").await.unwrap();

  assert_eq!(first.id, second.id);

  let event = s.get_event("e1").await.unwrap().unwrap();
  assert_eq!(event.current_registrations, 13);

  let held = s.registrations_for_user("u42").await.unwrap();
  assert_eq!(held.len(), 1);
}

#[tokio::test]
async fn register_full_event_is_rejected() {
  let s = store();

  // e3 is seeded at capacity: 15/15.
  let err = s.register_for_event("newUser", "e3").await.unwrap_err();
  assert!(matches!(err, Error::EventFull(_)));

  let event = s.get_event("e3").await.unwrap().unwrap();
  assert_eq!(event.current_registrations, 15);
}

#[tokio::test]
async fn register_unknown_event_is_rejected() {
  let s = store();
  let err = s.register_for_event("u1", "no-such-event").await.unwrap_err();
  assert!(matches!(err, Error::EventNotFound(_)));
}

#[tokio::test]
async fn duplicate_on_full_event_still_succeeds() {
  let s = store();

  let event = s.create_event(new_event("Tiny", 1)).await.unwrap();
  s.register_for_event("u1", &event.id).await.unwrap();

  // The event is now full; a fresh user is refused but the holder of the
  // existing registration is not.
  let err = s.register_for_event("u2", &event.id).await.unwrap_err();
  assert!(matches!(err, Error::EventFull(_)));

  let again = s.register_for_event("u1", &event.id).await.unwrap();
  assert_eq!(again.user_id, "u1");

  let event = s.get_event(&event.id).await.unwrap().unwrap();
  assert_eq!(event.current_registrations, 1);
}

#[tokio::test]
async fn occupancy_never_exceeds_capacity() {
  let s = store();

  let event = s.create_event(new_event("Small", 3)).await.unwrap();
  for i in 0..6 {
    let _ = s.register_for_event(&format!("user-{i}"), &event.id).await;
  }

  let event = s.get_event(&event.id).await.unwrap().unwrap();
  assert_eq!(event.current_registrations, event.capacity);
}

#[tokio::test]
async fn registrations_for_user_joins_events() {
  let s = store();

  s.register_for_event("user-1", "e1").await.unwrap();
  s.register_for_event("user-1", "e2").await.unwrap();

  let held = s.registrations_for_user("user-1").await.unwrap();
  assert_eq!(held.len(), 2);
  assert!(held.iter().all(|ur| ur.event.is_some()));

  assert!(s.registrations_for_user("stranger").await.unwrap().is_empty());
}

// ─── Admin mutations ─────────────────────────────────────────────────────────

#[tokio::test]
async fn create_event_assigns_fresh_id_and_zero_occupancy() {
  let s = store();

  let event = s.create_event(new_event("Brand New", 10)).await.unwrap();
  assert_eq!(event.id, "e4");
  assert_eq!(event.current_registrations, 0);

  let events = s.list_events(None).await.unwrap();
  assert_eq!(events.last().unwrap().id, "e4");
}

#[tokio::test]
async fn created_ids_stay_distinct_after_delete() {
  let s = store();

  assert!(s.delete_event("e2").await.unwrap());
  let event = s.create_event(new_event("Replacement", 10)).await.unwrap();

  let events = s.list_events(None).await.unwrap();
  let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
  assert_eq!(ids.iter().filter(|id| **id == event.id).count(), 1);
  assert!(!ids.contains(&"e2"));
}

#[tokio::test]
async fn update_event_patches_only_given_fields() {
  let s = store();

  let before = s.get_event("e2").await.unwrap().unwrap();
  let updated = s
    .update_event("e2", EventPatch {
      status: Some(EventStatus::SoldOut),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.status, EventStatus::SoldOut);
  assert_eq!(updated.title, before.title);
  assert_eq!(updated.price, before.price);
  assert_eq!(updated.current_registrations, before.current_registrations);

  let fetched = s.get_event("e2").await.unwrap().unwrap();
  assert_eq!(fetched.status, EventStatus::SoldOut);
}

#[tokio::test]
async fn update_missing_event_returns_none() {
  let s = store();
  let result = s
    .update_event("no-such-event", EventPatch::default())
    .await
    .unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn delete_event_leaves_registrations_dangling() {
  let s = store();

  s.register_for_event("u42", "e1").await.unwrap();
  assert!(s.delete_event("e1").await.unwrap());
  assert!(s.get_event("e1").await.unwrap().is_none());

  let held = s.registrations_for_user("u42").await.unwrap();
  assert_eq!(held.len(), 1);
  assert_eq!(held[0].registration.event_id, "e1");
  assert!(held[0].event.is_none());
}

#[tokio::test]
async fn delete_missing_event_returns_false() {
  let s = store();
  assert!(!s.delete_event("no-such-event").await.unwrap());
}

#[tokio::test]
async fn create_article_appends_and_resolves_by_slug() {
  let s = store();

  let article = s.create_article(new_article("fresh-take")).await.unwrap();
  assert_eq!(article.id, "c3");

  let found = s.get_article_by_slug("fresh-take").await.unwrap().unwrap();
  assert_eq!(found.id, article.id);

  let all = s.list_articles().await.unwrap();
  assert_eq!(all.last().unwrap().id, "c3");
}

// ─── Id providers ────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_with_sequence_ids_starts_at_one() {
  let s = MemoryStore::with_ids(std::sync::Arc::new(SequenceIds::new()));

  let event = s.create_event(new_event("First", 5)).await.unwrap();
  assert_eq!(event.id, "e1");

  let article = s.create_article(new_article("first-post")).await.unwrap();
  assert_eq!(article.id, "c1");
}

#[tokio::test]
async fn uuid_ids_produce_distinct_events() {
  let s = MemoryStore::with_ids(std::sync::Arc::new(UuidIds));

  let a = s.create_event(new_event("A", 5)).await.unwrap();
  let b = s.create_event(new_event("B", 5)).await.unwrap();
  assert_ne!(a.id, b.id);
}
