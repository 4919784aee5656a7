//! The demo catalog: two identities, three events, two articles.
//!
//! Ids follow the `e<n>` / `c<n>` scheme that the sequential id provider
//! continues from when the store is seeded.

use chrono::NaiveDate;
use zenhub_core::{
  content::Article,
  event::{Event, EventStatus, EventType},
  user::{User, UserRole},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

// ─── Users ───────────────────────────────────────────────────────────────────

/// The two fixed demo identities. Login is a role-selection toggle between
/// these; no general signup exists.
pub fn users() -> Vec<User> {
  vec![demo_user(), admin_user()]
}

pub fn demo_user() -> User {
  User {
    id:        "user-1".to_owned(),
    name:      "Ayşe Yılmaz".to_owned(),
    email:     "ayse@example.com".to_owned(),
    role:      UserRole::User,
    interests: vec![
      "Yoga".to_owned(),
      "Meditation".to_owned(),
      "Healthy Living".to_owned(),
    ],
    avatar:    Some("https://picsum.photos/seed/ayse/200/200".to_owned()),
  }
}

pub fn admin_user() -> User {
  User {
    id:        "admin-1".to_owned(),
    name:      "ZenHub Admin".to_owned(),
    email:     "admin@zenhub.com".to_owned(),
    role:      UserRole::Admin,
    interests: vec!["Management".to_owned()],
    avatar:    Some("https://picsum.photos/seed/admin/200/200".to_owned()),
  }
}

// ─── Events ──────────────────────────────────────────────────────────────────

pub fn events() -> Vec<Event> {
  vec![
    Event {
      id:                    "e1".to_owned(),
      title:                 "Weekend Yoga Retreat in Bodrum".to_owned(),
      description:           "Join us for a 3-day immersive yoga experience \
                              overlooking the Aegean Sea. Perfect for all levels."
        .to_owned(),
      location:              "Bodrum".to_owned(),
      venue:                 "Sea View Sanctuary".to_owned(),
      start_date:            date(2024, 6, 15),
      end_date:              date(2024, 6, 18),
      price:                 450.0,
      capacity:              20,
      current_registrations: 12,
      organizer:             "Zeynep Yoga".to_owned(),
      cover_image:           "https://picsum.photos/seed/retreat1/800/600".to_owned(),
      event_type:            EventType::Retreat,
      status:                EventStatus::Published,
      is_featured:           true,
    },
    Event {
      id:                    "e2".to_owned(),
      title:                 "Mindfulness Workshop: Breath & Focus".to_owned(),
      description:           "Learn ancient breathing techniques to reduce stress \
                              and improve mental clarity in this intensive one-day \
                              workshop."
        .to_owned(),
      location:              "Istanbul".to_owned(),
      venue:                 "Kolektif House Levent".to_owned(),
      start_date:            date(2024, 5, 20),
      end_date:              date(2024, 5, 20),
      price:                 80.0,
      capacity:              30,
      current_registrations: 28,
      organizer:             "Mert Koç".to_owned(),
      cover_image:           "https://picsum.photos/seed/workshop1/800/600".to_owned(),
      event_type:            EventType::Workshop,
      status:                EventStatus::Published,
      is_featured:           true,
    },
    Event {
      id:                    "e3".to_owned(),
      title:                 "Digital Detox & Silence Retreat".to_owned(),
      description:           "Escape the noise. Five days of silence, meditation, \
                              and reconnecting with nature in the mountains of Bolu."
        .to_owned(),
      location:              "Bolu".to_owned(),
      venue:                 "Pine Forest Lodge".to_owned(),
      start_date:            date(2024, 7, 10),
      end_date:              date(2024, 7, 15),
      price:                 600.0,
      capacity:              15,
      current_registrations: 15,
      organizer:             "Quiet Mind Collective".to_owned(),
      cover_image:           "https://picsum.photos/seed/retreat2/800/600".to_owned(),
      event_type:            EventType::Retreat,
      status:                EventStatus::SoldOut,
      is_featured:           false,
    },
  ]
}

// ─── Articles ────────────────────────────────────────────────────────────────

pub fn articles() -> Vec<Article> {
  vec![
    Article {
      id:           "c1".to_owned(),
      title:        "Modern Dünyada Mindfulness Pratiği".to_owned(),
      slug:         "modern-dunyada-mindfulness".to_owned(),
      cover_image:  "https://picsum.photos/seed/blog1/800/400".to_owned(),
      body:         "Mindfulness, günümüzün hızlı tempolu dünyasında bir lüks \
                     değil, bir gereklilik haline geldi..."
        .to_owned(),
      tags:         vec!["Mindfulness".to_owned(), "Meditasyon".to_owned()],
      author:       "Deniz Aksu".to_owned(),
      published_at: date(2024, 4, 1),
      reading_time: "5 min".to_owned(),
    },
    Article {
      id:           "c2".to_owned(),
      title:        "Sabah Rutininizi Değiştirecek 5 İpucu".to_owned(),
      slug:         "sabah-rutini-ipuclari".to_owned(),
      cover_image:  "https://picsum.photos/seed/blog2/800/400".to_owned(),
      body:         "Güne nasıl başladığınız, gününüzün geri kalanını nasıl \
                     geçireceğinizi belirler..."
        .to_owned(),
      tags:         vec!["Lifestyle".to_owned(), "Wellness".to_owned()],
      author:       "Caner Öz".to_owned(),
      published_at: date(2024, 4, 5),
      reading_time: "3 min".to_owned(),
    },
  ]
}
