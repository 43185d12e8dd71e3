//! Event catalog - loading, filtering and search
//!
//! # Overview
//!
//! The catalog is fetched once per session and is read-only afterwards.
//! It answers:
//! - full listing
//! - category filter (with the `"Today"` sentinel)
//! - case-insensitive name prefix search
//! - a deterministic daily pick of three featured events
//!
//! # Architecture
//!
//! ```text
//! Remote service
//!     │
//!     └── GET /events     ← JSON array of events
//!            │
//!            ▼
//!     EventSource (http | static)
//!            │
//!            ▼
//!     EventCatalog        ← fail-soft load, pure queries
//! ```

mod event;
pub mod query;
mod service;
mod source;

pub use event::{Event, EventId};
pub use query::{
    distinct_categories, filter_by_category, filter_by_category_on, pick_daily_featured,
    search_by_prefix, suggestions, FEATURED_COUNT, SUGGESTION_LIMIT, TODAY_CATEGORY,
};
pub use service::EventCatalog;
pub use source::{EventSource, HttpEventSource, StaticEventSource};
