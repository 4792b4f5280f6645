use crate::models::{Coordinate, Event, EventListing};

use super::distance::distance;

/// Radius applied when the caller does not pass one
pub const DEFAULT_RADIUS_KM: f64 = 100.0;

/// Wrap catalog events as listings without any distance attached
pub fn to_listings(events: &[Event]) -> Vec<EventListing> {
    events.iter().cloned().map(EventListing::from).collect()
}

/// Check whether a distance falls inside the radius (inclusive)
#[inline]
pub fn is_within_radius(distance_km: f64, radius_km: f64) -> bool {
    distance_km <= radius_km
}

/// Keep the listings within `radius_km` of `origin`, annotating each with its
/// distance
///
/// Input order is preserved and the input is left untouched. Any distance
/// already attached is replaced, so filtering twice with the same origin and
/// radius gives the same result as filtering once.
pub fn filter_by_radius(
    listings: &[EventListing],
    origin: Coordinate,
    radius_km: f64,
) -> Vec<EventListing> {
    listings
        .iter()
        .filter_map(|listing| {
            let distance_km = distance(origin, listing.event.coordinate());
            is_within_radius(distance_km, radius_km).then(|| EventListing {
                event: listing.event.clone(),
                distance_km: Some(distance_km),
            })
        })
        .collect()
}
