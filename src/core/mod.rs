// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod finder;
pub mod sort;

pub use distance::{distance, haversine_distance, EARTH_RADIUS_KM};
pub use filters::{filter_by_radius, is_within_radius, to_listings, DEFAULT_RADIUS_KM};
pub use finder::{filter_and_sort, EventFinder, FindResult};
pub use sort::{event_date, parse_event_date, sort_events, SortError, SortKey};
