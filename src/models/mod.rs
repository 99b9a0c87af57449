//! Domain models for launch records.

pub mod record;

pub use record::{LaunchOutcome, LaunchRecord, PayloadBounds};
