use crate::models::{Coordinate, Event, EventListing};
use crate::core::{
    filters::{filter_by_radius, to_listings, DEFAULT_RADIUS_KM},
    sort::{sort_events, SortError, SortKey},
};

/// Filter `events` to those within `radius_km` of `origin` and order them
///
/// Without an origin no distance filtering happens and listings carry no
/// distance. The radius defaults to [`DEFAULT_RADIUS_KM`].
pub fn filter_and_sort(
    events: &[Event],
    origin: Option<Coordinate>,
    radius_km: Option<f64>,
    sort_key: SortKey,
) -> Result<Vec<EventListing>, SortError> {
    EventFinder::new(radius_km.unwrap_or(DEFAULT_RADIUS_KM))
        .find(events, origin, sort_key, |_| true)
        .map(|result| result.events)
}

/// Result of a discovery run
#[derive(Debug, Clone)]
pub struct FindResult {
    pub events: Vec<EventListing>,
    pub total_candidates: usize,
}

/// Discovery pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Radius filter (only when an origin is known), annotating distance
/// 2. Caller-owned selection predicate (category, city, ...)
/// 3. Sort by date or distance
#[derive(Debug, Clone, Copy)]
pub struct EventFinder {
    radius_km: f64,
}

impl EventFinder {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Run the pipeline over `events`
    ///
    /// # Arguments
    /// * `events` - Catalog to search
    /// * `origin` - Where distance is measured from, if known
    /// * `sort_key` - Final ordering
    /// * `keep` - Extra selection applied after the radius filter
    pub fn find<F>(
        &self,
        events: &[Event],
        origin: Option<Coordinate>,
        sort_key: SortKey,
        keep: F,
    ) -> Result<FindResult, SortError>
    where
        F: Fn(&Event) -> bool,
    {
        let total_candidates = events.len();
        let listings = to_listings(events);

        // Stage 1: radius
        let nearby = match origin {
            Some(origin) => filter_by_radius(&listings, origin, self.radius_km),
            None => listings,
        };
        let within_radius = nearby.len();

        // Stage 2: caller selection
        let selected: Vec<EventListing> = nearby
            .into_iter()
            .filter(|listing| keep(&listing.event))
            .collect();

        tracing::debug!(
            "Discovery: {} candidates, {} within radius, {} selected",
            total_candidates,
            within_radius,
            selected.len()
        );

        // Stage 3: order
        let events = sort_events(&selected, sort_key)?;

        Ok(FindResult {
            events,
            total_candidates,
        })
    }
}

impl Default for EventFinder {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS_KM)
    }
}
