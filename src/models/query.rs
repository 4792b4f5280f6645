use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::Settings;
use crate::core::SortKey;
use crate::models::domain::Coordinate;

/// A discovery request as collected from the user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscoveryQuery {
    #[validate(range(min = -90.0, max = 90.0), custom(function = "validate_finite"))]
    pub latitude: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0), custom(function = "validate_finite"))]
    pub longitude: Option<f64>,
    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    #[serde(rename = "radiusKm")]
    pub radius_km: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(rename = "sortBy", default)]
    pub sort_by: SortKey,
}

/// Range checks let NaN through
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

impl DiscoveryQuery {
    /// Origin given explicitly by the user, if both halves are present
    pub fn origin(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)),
            _ => None,
        }
    }

    /// Fill whatever the user left out from `defaults`
    ///
    /// The origin is taken as a pair: a half-given origin is replaced whole.
    pub fn or(self, defaults: DiscoveryQuery) -> Self {
        let (latitude, longitude) = match self.origin() {
            Some(_) => (self.latitude, self.longitude),
            None => (defaults.latitude, defaults.longitude),
        };

        Self {
            latitude,
            longitude,
            radius_km: self.radius_km.or(defaults.radius_km),
            category: self.category.or(defaults.category),
            city: self.city.or(defaults.city),
            sort_by: self.sort_by,
        }
    }
}

impl From<&Settings> for DiscoveryQuery {
    fn from(settings: &Settings) -> Self {
        Self {
            latitude: settings.location.latitude,
            longitude: settings.location.longitude,
            radius_km: Some(settings.discovery.radius_km),
            category: None,
            city: None,
            sort_by: settings.discovery.sort_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lat: Option<f64>, lon: Option<f64>, radius: Option<f64>) -> DiscoveryQuery {
        DiscoveryQuery {
            latitude: lat,
            longitude: lon,
            radius_km: radius,
            category: None,
            city: None,
            sort_by: SortKey::Date,
        }
    }

    #[test]
    fn test_valid_query() {
        assert!(query(Some(40.0), Some(-75.0), Some(100.0)).validate().is_ok());
        assert!(query(None, None, None).validate().is_ok());
    }

    #[test]
    fn test_latitude_out_of_range() {
        assert!(query(Some(91.0), Some(0.0), None).validate().is_err());
    }

    #[test]
    fn test_longitude_out_of_range() {
        assert!(query(Some(0.0), Some(-181.0), None).validate().is_err());
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert!(query(None, None, Some(-1.0)).validate().is_err());
    }

    #[test]
    fn test_nan_rejected() {
        assert!(query(Some(f64::NAN), Some(0.0), None).validate().is_err());
    }

    #[test]
    fn test_infinite_radius_rejected() {
        assert!(query(None, None, Some(f64::INFINITY)).validate().is_err());
    }

    #[test]
    fn test_all_out_of_range_fields_reported() {
        let errors = query(Some(-91.0), Some(-181.0), Some(-1.0)).validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("latitude"));
        assert!(fields.contains_key("longitude"));
        assert!(fields.contains_key("radius_km"));
    }

    #[test]
    fn test_missing_values_filled_from_defaults() {
        let mut defaults = query(Some(40.0), Some(-75.0), Some(25.0));
        defaults.category = Some("Music".to_string());

        let filled = query(None, None, None).or(defaults.clone());
        assert_eq!(filled.origin(), Some(Coordinate::new(40.0, -75.0)));
        assert_eq!(filled.radius_km, Some(25.0));
        assert_eq!(filled.category.as_deref(), Some("Music"));

        let own = query(Some(10.0), Some(20.0), Some(5.0)).or(defaults);
        assert_eq!(own.origin(), Some(Coordinate::new(10.0, 20.0)));
        assert_eq!(own.radius_km, Some(5.0));
    }

    #[test]
    fn test_settings_values_are_validated() {
        let mut settings = Settings::default();
        assert!(DiscoveryQuery::from(&settings).validate().is_ok());

        settings.discovery.radius_km = -5.0;
        assert!(DiscoveryQuery::from(&settings).validate().is_err());

        settings.discovery.radius_km = 100.0;
        settings.location.latitude = Some(500.0);
        settings.location.longitude = Some(0.0);
        assert!(DiscoveryQuery::from(&settings).validate().is_err());
    }

    #[test]
    fn test_origin_requires_both_halves() {
        assert!(query(Some(40.0), None, None).origin().is_none());
        assert_eq!(
            query(Some(40.0), Some(-75.0), None).origin(),
            Some(Coordinate::new(40.0, -75.0))
        );
    }

    #[test]
    fn test_sort_defaults_to_date() {
        let q: DiscoveryQuery = serde_json::from_str(r#"{"latitude": null, "longitude": null, "radiusKm": null}"#).unwrap();
        assert_eq!(q.sort_by, SortKey::Date);
    }
}
