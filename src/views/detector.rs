use std::time::Duration;

use tokio::time::Instant;

use crate::models::LocationData;
use crate::services::location::{acquire, LocationError, LocationProvider, DEFAULT_TIMEOUT};

/// Label attached to a detected position; no reverse geocoding is done
pub const CURRENT_LOCATION_LABEL: &str = "Current Location";

/// Where the detector currently stands
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionState {
    Idle,
    Detecting,
    Located(LocationData),
    Failed(LocationError),
}

/// Tracks the user's location across detections and refreshes
#[derive(Debug)]
pub struct LocationDetector<P> {
    provider: P,
    timeout: Duration,
    max_attempts: u32,
    max_age: Duration,
    state: DetectionState,
    fixed_at: Option<Instant>,
}

impl<P: LocationProvider> LocationDetector<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            timeout: DEFAULT_TIMEOUT,
            max_attempts: 1,
            max_age: Duration::from_secs(300),
            state: DetectionState::Idle,
            fixed_at: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total attempts per detection; transient failures are retried up to this
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// How long a previous fix may be reused on refresh
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn state(&self) -> &DetectionState {
        &self.state
    }

    pub fn location(&self) -> Option<&LocationData> {
        match &self.state {
            DetectionState::Located(location) => Some(location),
            _ => None,
        }
    }

    /// Detect (or refresh) the user's location
    pub async fn detect(&mut self) -> Result<LocationData, LocationError> {
        if let (DetectionState::Located(location), Some(fixed_at)) = (&self.state, self.fixed_at) {
            if fixed_at.elapsed() < self.max_age {
                tracing::debug!("Reusing location fix from {:?} ago", fixed_at.elapsed());
                return Ok(location.clone());
            }
        }

        self.state = DetectionState::Detecting;

        let mut attempt = 1;
        let result = loop {
            match acquire(&self.provider, self.timeout).await {
                Ok(coordinate) => break Ok(coordinate),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    tracing::warn!("Location attempt {}/{} failed: {}", attempt, self.max_attempts, e);
                    attempt += 1;
                }
                Err(e) => break Err(e),
            }
        };

        match result {
            Ok(coordinate) => {
                let location = LocationData {
                    latitude: coordinate.latitude,
                    longitude: coordinate.longitude,
                    city: Some(CURRENT_LOCATION_LABEL.to_string()),
                };
                tracing::info!(
                    "Location detected: {:.4}, {:.4}",
                    location.latitude,
                    location.longitude
                );
                self.fixed_at = Some(Instant::now());
                self.state = DetectionState::Located(location.clone());
                Ok(location)
            }
            Err(e) => {
                tracing::warn!("Location detection failed: {}", e);
                self.fixed_at = None;
                self.state = DetectionState::Failed(e);
                Err(e)
            }
        }
    }

    /// One-line status for the location panel
    pub fn status_line(&self) -> String {
        match &self.state {
            DetectionState::Located(location) => format!(
                "{} • {:.4}, {:.4}",
                location.city.as_deref().unwrap_or(CURRENT_LOCATION_LABEL),
                location.latitude,
                location.longitude
            ),
            DetectionState::Failed(e) => e.to_string(),
            DetectionState::Idle | DetectionState::Detecting => {
                "Detecting your location...".to_string()
            }
        }
    }
}
