use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Event, EventListing};

/// Errors raised while ordering listings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("event {event_id} has an unparseable date: {value:?}")]
    InvalidDate { event_id: String, value: String },
}

/// Ordering applied to a result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Distance,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Distance => "distance",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "distance" => Ok(SortKey::Distance),
            other => Err(format!("unknown sort key '{}', expected 'date' or 'distance'", other)),
        }
    }
}

/// Parse an event date
///
/// Accepts `YYYY-MM-DD` (midnight UTC), RFC 3339, and naive
/// `YYYY-MM-DDTHH:MM[:SS]` (taken as UTC).
pub fn parse_event_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// Parsed start date of an event, or [`SortError::InvalidDate`]
pub fn event_date(event: &Event) -> Result<DateTime<Utc>, SortError> {
    parse_event_date(&event.date).ok_or_else(|| SortError::InvalidDate {
        event_id: event.id.clone(),
        value: event.date.clone(),
    })
}

/// Return a new ordering of `listings` by `key`
///
/// Both orderings are ascending and stable. Listings without a distance sort
/// as if they were at distance zero.
pub fn sort_events(listings: &[EventListing], key: SortKey) -> Result<Vec<EventListing>, SortError> {
    match key {
        SortKey::Date => {
            // Parse every date up front so a bad one fails the whole sort
            let mut keyed = listings
                .iter()
                .map(|listing| event_date(&listing.event).map(|date| (date, listing)))
                .collect::<Result<Vec<_>, SortError>>()?;

            keyed.sort_by_key(|(date, _)| *date);
            Ok(keyed.into_iter().map(|(_, listing)| listing.clone()).collect())
        }
        SortKey::Distance => {
            let mut sorted = listings.to_vec();
            sorted.sort_by(|a, b| {
                a.distance_km
                    .unwrap_or(0.0)
                    .total_cmp(&b.distance_km.unwrap_or(0.0))
            });
            Ok(sorted)
        }
    }
}
