use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees
///
/// Bounds are not enforced here; see [`crate::models::DiscoveryQuery`] for
/// input validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self::new(p.y(), p.x())
    }
}

/// An event from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub venue: String,
    /// Raw date, usually `YYYY-MM-DD`. Parsed lazily when sorting.
    pub date: String,
    /// Display time such as `6:00 PM`
    #[serde(default)]
    pub time: String,
    pub category: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Event {
    #[inline]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// An event as presented to the user, optionally annotated with its
/// distance from the current origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventListing {
    #[serde(flatten)]
    pub event: Event,
    #[serde(rename = "distanceKm", default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl EventListing {
    pub fn id(&self) -> &str {
        &self.event.id
    }
}

impl From<Event> for EventListing {
    fn from(event: Event) -> Self {
        Self {
            event,
            distance_km: None,
        }
    }
}

/// Detected user location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub city: Option<String>,
}

impl LocationData {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_axis_order() {
        let c = Coordinate::new(40.7829, -73.9654);
        let p: geo::Point<f64> = c.into();
        assert_eq!(p.x(), -73.9654);
        assert_eq!(p.y(), 40.7829);
        assert_eq!(Coordinate::from(p), c);
    }

    #[test]
    fn test_listing_serializes_flat() {
        let event = Event {
            id: "1".to_string(),
            name: "Jazz Night".to_string(),
            description: String::new(),
            venue: "Botanical Gardens".to_string(),
            date: "2024-08-16".to_string(),
            time: "7:30 PM".to_string(),
            category: "Music".to_string(),
            city: "Portland".to_string(),
            latitude: 45.5152,
            longitude: -122.6784,
            image_url: None,
        };

        let bare = serde_json::to_value(EventListing::from(event.clone())).unwrap();
        assert_eq!(bare["id"], "1");
        assert!(bare.get("distanceKm").is_none());
        assert!(bare.get("imageUrl").is_none());

        let listed = EventListing {
            event,
            distance_km: Some(1.5),
        };
        let json = serde_json::to_value(&listed).unwrap();
        assert_eq!(json["distanceKm"], 1.5);
        assert_eq!(json["city"], "Portland");
    }
}
