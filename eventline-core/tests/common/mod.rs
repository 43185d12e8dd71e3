//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::{DateTime, Duration, FixedOffset, Local, Utc};
use eventline_core::{Event, EventId};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn event_at(id: i64, name: &str, category: &str, start: DateTime<FixedOffset>) -> Event {
    Event {
        id: EventId::Number(id),
        name: name.to_string(),
        description: format!("{name} description"),
        category: category.to_string(),
        starttime: start,
        endtime: start + Duration::hours(2),
        spots_remaining: 20,
    }
}

/// Eight events, exactly two of which start on the current local date
/// ("Community Concert" and "Cooking Class"). Timestamps are in UTC, as the
/// remote service sends them.
pub fn week_of_events() -> Vec<Event> {
    let now = Local::now().with_timezone(&Utc).fixed_offset();
    let days = |n: i64| now + Duration::days(n);

    vec![
        event_at(1, "Community Concert", "Concert", now),
        event_at(2, "Outdoor Yoga", "Outdoors", days(2)),
        event_at(3, "Tech Meetup", "Meetup", days(-2)),
        event_at(4, "Charity Fun Run", "Charity", days(3)),
        event_at(5, "Art Exhibition", "Exhibition", days(4)),
        event_at(6, "Cooking Class", "Class", now),
        event_at(7, "Community Market", "Market", days(-3)),
        event_at(8, "Film Screening", "Screening", days(5)),
    ]
}

/// The same catalog as the remote service would serve it
pub fn week_of_events_json() -> serde_json::Value {
    serde_json::to_value(week_of_events()).expect("events serialize")
}
