// Service exports
pub mod catalog;
pub mod location;

pub use catalog::{load_catalog, load_or_sample, CatalogError};
pub use location::{acquire, FixedLocation, LocationError, LocationProvider, NoGeolocation};
