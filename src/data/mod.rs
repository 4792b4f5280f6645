pub mod sample_events;

pub use sample_events::sample_events;
