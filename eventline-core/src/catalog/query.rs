//! Catalog queries
//!
//! Pure functions over a slice of events. None of them allocate new events;
//! results borrow from the input and keep its order.

use chrono::NaiveDate;

use super::Event;

/// Category sentinel selecting events that start today
pub const TODAY_CATEGORY: &str = "Today";

/// Maximum number of search suggestions shown
pub const SUGGESTION_LIMIT: usize = 6;

/// Number of events in the daily featured pick
pub const FEATURED_COUNT: usize = 3;

const FEATURED_SEED_MODULUS: u32 = 100_000;

/// Current local calendar date
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Filter by category, treating [`TODAY_CATEGORY`] as "starts on the current local date"
pub fn filter_by_category<'a>(events: &'a [Event], category: &str) -> Vec<&'a Event> {
    filter_by_category_on(events, category, local_today())
}

/// Filter by category with an explicit notion of today
pub fn filter_by_category_on<'a>(
    events: &'a [Event],
    category: &str,
    today: NaiveDate,
) -> Vec<&'a Event> {
    if category == TODAY_CATEGORY {
        events.iter().filter(|e| e.is_on(today)).collect()
    } else {
        events.iter().filter(|e| e.category == category).collect()
    }
}

/// Case-insensitive name prefix search.
///
/// A blank query returns nothing rather than the whole catalog.
pub fn search_by_prefix<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    events
        .iter()
        .filter(|e| e.name.to_lowercase().starts_with(&needle))
        .collect()
}

/// Prefix search capped at [`SUGGESTION_LIMIT`] results
pub fn suggestions<'a>(events: &'a [Event], query: &str) -> Vec<&'a Event> {
    let mut results = search_by_prefix(events, query);
    results.truncate(SUGGESTION_LIMIT);
    results
}

/// Seed for the daily pick: sum of the character codes of `YYYY-MM-DD`, mod 100000
pub fn featured_seed(today: NaiveDate) -> u32 {
    today
        .format("%Y-%m-%d")
        .to_string()
        .chars()
        .fold(0u32, |sum, c| (sum + c as u32) % FEATURED_SEED_MODULUS)
}

/// Deterministic daily selection of three consecutive events, wrapping around.
///
/// Catalogs with fewer than three events yield repeats.
pub fn pick_daily_featured(events: &[Event], today: NaiveDate) -> Vec<&Event> {
    if events.is_empty() {
        return Vec::new();
    }

    let start = featured_seed(today) as usize % events.len();
    (0..FEATURED_COUNT)
        .map(|offset| &events[(start + offset) % events.len()])
        .collect()
}

/// `"Today"` followed by every category in first-seen order, without duplicates
pub fn distinct_categories(events: &[Event]) -> Vec<String> {
    let mut categories = vec![TODAY_CATEGORY.to_string()];
    for event in events {
        if !categories.iter().any(|c| c == &event.category) {
            categories.push(event.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EventId;
    use chrono::{DateTime, FixedOffset};

    fn at(ts: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(ts).unwrap()
    }

    fn event(id: i64, name: &str, category: &str, start: &str) -> Event {
        Event {
            id: EventId::Number(id),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            starttime: at(start),
            endtime: at(start),
            spots_remaining: 10,
        }
    }

    fn names<'a>(events: &[&'a Event]) -> Vec<&'a str> {
        events.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_featured_seed_matches_char_sum() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let expected: u32 = "2025-01-01".bytes().map(u32::from).sum();
        assert_eq!(featured_seed(date), expected);
        assert_eq!(expected, 485);
    }

    #[test]
    fn test_pick_daily_featured_wraps() {
        let events: Vec<Event> = (0..5)
            .map(|i| event(i, &format!("E{i}"), "Misc", "2025-01-01T10:00:00Z"))
            .collect();
        // "2025-01-01" sums to 485, 485 % 5 == 0
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(
            names(&pick_daily_featured(&events, date)),
            vec!["E0", "E1", "E2"]
        );

        // "2025-01-03": 487 % 5 == 2 -> indices 2, 3, 4
        let date = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(
            names(&pick_daily_featured(&events, date)),
            vec!["E2", "E3", "E4"]
        );

        // "2025-01-04": 488 % 5 == 3 -> indices 3, 4, 0
        let date = NaiveDate::from_ymd_opt(2025, 1, 4).unwrap();
        assert_eq!(
            names(&pick_daily_featured(&events, date)),
            vec!["E3", "E4", "E0"]
        );
    }

    #[test]
    fn test_pick_daily_featured_small_catalogs() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();
        assert!(pick_daily_featured(&[], date).is_empty());

        let one = vec![event(1, "Solo", "Misc", "2025-06-09T10:00:00Z")];
        assert_eq!(
            names(&pick_daily_featured(&one, date)),
            vec!["Solo", "Solo", "Solo"]
        );

        let two = vec![
            event(1, "A", "Misc", "2025-06-09T10:00:00Z"),
            event(2, "B", "Misc", "2025-06-09T10:00:00Z"),
        ];
        let picked = pick_daily_featured(&two, date);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked[0], picked[2]);
    }

    #[test]
    fn test_pick_daily_featured_is_repeatable() {
        let events: Vec<Event> = (0..11)
            .map(|i| event(i, &format!("E{i}"), "Misc", "2025-01-01T10:00:00Z"))
            .collect();
        let mut day = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        for _ in 0..40 {
            let first = pick_daily_featured(&events, day);
            let second = pick_daily_featured(&events, day);
            assert_eq!(first, second);
            assert_eq!(first.len(), FEATURED_COUNT);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_search_blank_query_is_empty() {
        let events = vec![event(1, "Community Concert", "Concert", "2025-01-01T10:00:00Z")];
        assert!(search_by_prefix(&events, "").is_empty());
        assert!(search_by_prefix(&events, "   ").is_empty());
    }

    #[test]
    fn test_search_is_prefix_and_case_insensitive() {
        let events = vec![
            event(1, "Community Concert", "Concert", "2025-01-01T10:00:00Z"),
            event(2, "Outdoor Yoga", "Outdoors", "2025-01-01T10:00:00Z"),
            event(3, "Cooking Class", "Class", "2025-01-01T10:00:00Z"),
            event(4, "Tech Meetup", "Meetup", "2025-01-01T10:00:00Z"),
        ];

        assert_eq!(
            names(&search_by_prefix(&events, "co")),
            vec!["Community Concert", "Cooking Class"]
        );
        assert_eq!(
            names(&search_by_prefix(&events, "  COOK ")),
            vec!["Cooking Class"]
        );
        // Substring matches do not count
        assert!(search_by_prefix(&events, "yoga").is_empty());
    }

    #[test]
    fn test_suggestions_capped() {
        let events: Vec<Event> = (0..10)
            .map(|i| event(i, &format!("Market {i}"), "Market", "2025-01-01T10:00:00Z"))
            .collect();
        let results = suggestions(&events, "mark");
        assert_eq!(results.len(), SUGGESTION_LIMIT);
        assert_eq!(results[0].name, "Market 0");
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let events = vec![
            event(1, "A", "Concert", "2025-01-01T10:00:00Z"),
            event(2, "B", "Class", "2025-01-01T10:00:00Z"),
            event(3, "C", "Concert", "2025-01-01T10:00:00Z"),
        ];
        let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_eq!(
            names(&filter_by_category_on(&events, "Concert", today)),
            vec!["A", "C"]
        );
        assert!(filter_by_category_on(&events, "concert", today).is_empty());
    }

    fn local_as_utc(date: NaiveDate, hour: u32) -> DateTime<FixedOffset> {
        use chrono::{Local, TimeZone, Utc};
        Local
            .from_local_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
            .fixed_offset()
    }

    #[test]
    fn test_filter_today_sentinel() {
        let today = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let mut events = Vec::new();
        for (id, name, day, hour) in [
            (1, "Yesterday", today.pred_opt().unwrap(), 10),
            (2, "Morning", today, 8),
            (3, "Tomorrow", today.succ_opt().unwrap(), 10),
            (4, "Evening", today, 19),
        ] {
            let mut e = event(id, name, "Misc", "2025-01-01T00:00:00Z");
            e.starttime = local_as_utc(day, hour);
            e.endtime = e.starttime;
            events.push(e);
        }

        assert_eq!(
            names(&filter_by_category_on(&events, TODAY_CATEGORY, today)),
            vec!["Morning", "Evening"]
        );
    }

    #[test]
    fn test_distinct_categories() {
        assert_eq!(distinct_categories(&[]), vec!["Today"]);

        let events = vec![
            event(1, "A", "Concert", "2025-01-01T10:00:00Z"),
            event(2, "B", "Class", "2025-01-01T10:00:00Z"),
            event(3, "C", "Concert", "2025-01-01T10:00:00Z"),
            event(4, "D", "Today", "2025-01-01T10:00:00Z"),
            event(5, "E", "Market", "2025-01-01T10:00:00Z"),
        ];
        assert_eq!(
            distinct_categories(&events),
            vec!["Today", "Concert", "Class", "Market"]
        );
    }
}
