use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;

use crate::models::Event;

/// A dropdown choice: everything, or one exact value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    #[inline]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl FromStr for Selection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            Ok(Selection::Only(s.to_string()))
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(value) => f.write_str(value),
        }
    }
}

impl From<Option<String>> for Selection {
    fn from(value: Option<String>) -> Self {
        value
            .map(|v| v.parse().unwrap_or_default())
            .unwrap_or_default()
    }
}

/// Category and city selections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilters {
    pub category: Selection,
    pub city: Selection,
}

impl EventFilters {
    pub fn matches(&self, event: &Event) -> bool {
        self.category.matches(&event.category) && self.city.matches(&event.city)
    }
}

/// Unique categories in catalog order
pub fn available_categories(events: &[Event]) -> Vec<String> {
    unique(events.iter().map(|e| e.category.as_str()))
}

/// Unique cities in catalog order
pub fn available_cities(events: &[Event]) -> Vec<String> {
    unique(events.iter().map(|e| e.city.as_str()))
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
