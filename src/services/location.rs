use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::models::Coordinate;

/// Default limit on a single location request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Reasons a location request can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location access denied. Please enable location permissions.")]
    PermissionDenied,

    #[error("Location information is unavailable.")]
    PositionUnavailable,

    #[error("Location request timed out.")]
    Timeout,

    #[error("Geolocation is not supported on this device.")]
    Unsupported,
}

impl LocationError {
    /// Whether asking again might succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, LocationError::PositionUnavailable | LocationError::Timeout)
    }
}

/// Source of the user's current position
pub trait LocationProvider {
    fn locate(&self) -> impl Future<Output = Result<Coordinate, LocationError>> + Send;
}

/// Position fixed ahead of time, e.g. from configuration or the command line
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    coordinate: Coordinate,
}

impl FixedLocation {
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate }
    }
}

impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Result<Coordinate, LocationError> {
        Ok(self.coordinate)
    }
}

/// Provider for environments without any positioning capability
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

impl LocationProvider for NoGeolocation {
    async fn locate(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::Unsupported)
    }
}

/// Ask `provider` for a position, giving up after `timeout`
pub async fn acquire<P: LocationProvider>(
    provider: &P,
    timeout: Duration,
) -> Result<Coordinate, LocationError> {
    match tokio::time::timeout(timeout, provider.locate()).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout),
    }
}
