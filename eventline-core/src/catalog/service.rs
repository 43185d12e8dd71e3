//! The in-memory event catalog for one session

use chrono::NaiveDate;
use tracing::{info, warn};

use super::query;
use super::source::EventSource;
use super::{Event, EventId};

/// Canonical, read-only list of events for a session
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Build a catalog from records already in hand.
    ///
    /// Records whose `starttime` is after their `endtime` are dropped.
    pub fn new(events: Vec<Event>) -> Self {
        let total = events.len();
        let events: Vec<Event> = events
            .into_iter()
            .filter(|e| {
                let ok = e.is_well_formed();
                if !ok {
                    warn!(
                        "Dropping event {} ('{}'): starttime {} is after endtime {}",
                        e.id, e.name, e.starttime, e.endtime
                    );
                }
                ok
            })
            .collect();

        if events.len() != total {
            warn!("Dropped {} malformed event(s)", total - events.len());
        }

        Self { events }
    }

    /// Load the catalog from a source.
    ///
    /// Never fails: any fetch error is logged and yields an empty catalog.
    pub async fn load(source: &dyn EventSource) -> Self {
        match source.fetch_events().await {
            Ok(events) => {
                info!(
                    "Loaded {} event(s) from {} source",
                    events.len(),
                    source.name()
                );
                Self::new(events)
            }
            Err(e) => {
                warn!("{}; continuing with an empty catalog", e);
                Self::default()
            }
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Look up an event by its identifier as displayed
    pub fn find(&self, id: &EventId) -> Option<&Event> {
        self.events
            .iter()
            .find(|e| &e.id == id || e.id.to_string() == id.to_string())
    }

    pub fn by_category(&self, category: &str) -> Vec<&Event> {
        query::filter_by_category(&self.events, category)
    }

    pub fn suggestions(&self, text: &str) -> Vec<&Event> {
        query::suggestions(&self.events, text)
    }

    pub fn featured(&self, today: NaiveDate) -> Vec<&Event> {
        query::pick_daily_featured(&self.events, today)
    }

    pub fn categories(&self) -> Vec<String> {
        query::distinct_categories(&self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticEventSource;
    use crate::error::CatalogError;
    use async_trait::async_trait;
    use chrono::DateTime;

    struct FailingSource;

    #[async_trait]
    impl EventSource for FailingSource {
        async fn fetch_events(&self) -> Result<Vec<Event>, CatalogError> {
            Err(CatalogError::Status {
                url: "http://test/events".to_string(),
                status: 503,
            })
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn event(id: EventId, start: &str, end: &str) -> Event {
        Event {
            id,
            name: "Art Exhibition".to_string(),
            description: "Local artists exhibit their latest work.".to_string(),
            category: "Exhibition".to_string(),
            starttime: DateTime::parse_from_rfc3339(start).unwrap(),
            endtime: DateTime::parse_from_rfc3339(end).unwrap(),
            spots_remaining: 80,
        }
    }

    #[tokio::test]
    async fn test_load_failure_degrades_to_empty() {
        let catalog = EventCatalog::load(&FailingSource).await;
        assert!(catalog.is_empty());
        assert_eq!(catalog.categories(), vec!["Today"]);
    }

    #[tokio::test]
    async fn test_load_from_static_source() {
        let source = StaticEventSource::new(vec![event(
            EventId::Number(5),
            "2025-04-01T10:00:00Z",
            "2025-04-01T15:00:00Z",
        )]);
        let catalog = EventCatalog::load(&source).await;
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find(&EventId::Number(5)).is_some());
    }

    #[test]
    fn test_inverted_time_range_dropped() {
        let catalog = EventCatalog::new(vec![
            event(EventId::Number(1), "2025-04-01T10:00:00Z", "2025-04-01T09:00:00Z"),
            event(EventId::Number(2), "2025-04-01T10:00:00Z", "2025-04-01T10:00:00Z"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.events()[0].id, EventId::Number(2));
    }

    #[test]
    fn test_find_matches_numeric_text_ids() {
        let catalog = EventCatalog::new(vec![event(
            EventId::Text("12".to_string()),
            "2025-04-01T10:00:00Z",
            "2025-04-01T11:00:00Z",
        )]);
        let id: EventId = "12".parse().unwrap();
        assert!(catalog.find(&id).is_some());
        assert!(catalog.find(&EventId::Number(13)).is_none());
    }
}
