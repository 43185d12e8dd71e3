//! Event records as served by the remote catalog

use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Event identifier
///
/// The remote service has used both numeric and string ids, so either is
/// accepted and round-tripped as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{n}"),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for EventId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(n) => EventId::Number(n),
            Err(_) => EventId::Text(s.to_string()),
        })
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        EventId::Number(n)
    }
}

/// A community event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier
    pub id: EventId,

    /// Display name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Category label (e.g. "Concert", "Outdoors")
    pub category: String,

    /// Start of the event
    pub starttime: DateTime<FixedOffset>,

    /// End of the event
    pub endtime: DateTime<FixedOffset>,

    /// Remaining capacity
    pub spots_remaining: u32,
}

impl Event {
    /// Whether the record satisfies `starttime <= endtime`
    pub fn is_well_formed(&self) -> bool {
        self.starttime <= self.endtime
    }

    /// Whether the event starts on the local calendar date `date`
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.starttime.with_timezone(&Local).date_naive() == date
    }

    /// Registration is only offered while spots remain
    pub fn registration_open(&self) -> bool {
        self.spots_remaining > 0
    }

    /// `"YYYY-MM-DD HH:MM - HH:MM"` label for list and detail views
    pub fn time_range_label(&self) -> String {
        format!(
            "{} {} - {}",
            self.starttime.format("%Y-%m-%d"),
            self.starttime.format("%H:%M"),
            self.endtime.format("%H:%M")
        )
    }
}
