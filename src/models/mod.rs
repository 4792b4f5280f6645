// Model exports
pub mod domain;
pub mod query;
pub mod responses;

pub use domain::{Coordinate, Event, EventListing, LocationData};
pub use query::DiscoveryQuery;
pub use responses::{DiscoveryResponse, ErrorResponse};
