//! EventSpot - event discovery around the user's location
//!
//! The core is a small geo utility: Haversine distance, an inclusive radius
//! filter that annotates each surviving event with its distance, and a
//! date/distance sort. The `views` module is the caller: it detects the
//! user's location, applies category/city selections and renders results.

pub mod config;
pub mod core;
pub mod data;
pub mod models;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use crate::core::{distance, filter_and_sort, haversine_distance, EventFinder, SortError, SortKey};
pub use crate::models::{Coordinate, Event, EventListing, LocationData};
