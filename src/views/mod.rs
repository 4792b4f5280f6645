// Presentation layer: everything that calls into the core
pub mod card;
pub mod detector;
pub mod favorites;
pub mod filters;
pub mod page;

pub use card::{map_url, render_card};
pub use detector::{DetectionState, LocationDetector};
pub use favorites::{FavoriteChange, FavoriteSet};
pub use filters::{EventFilters, Selection};
pub use page::DiscoveryPage;
