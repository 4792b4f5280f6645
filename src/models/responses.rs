use serde::{Deserialize, Serialize};

use crate::core::SortKey;
use crate::models::domain::{Coordinate, EventListing};

/// Machine-readable result of a discovery run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryResponse {
    pub events: Vec<EventListing>,
    pub total: usize,
    #[serde(rename = "radiusKm")]
    pub radius_km: f64,
    pub origin: Option<Coordinate>,
    #[serde(rename = "sortBy")]
    pub sort_by: SortKey,
}

/// Error payload printed in JSON mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
