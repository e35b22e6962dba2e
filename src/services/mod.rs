pub mod tracker;

pub use tracker::{TrackerOutcome, TrackerService};
