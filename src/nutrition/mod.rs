//! Nutrition calculation module
//!
//! Handles quantity scaling and totals aggregation.

pub mod aggregate;
pub mod scaling;
pub mod units;

pub use aggregate::{aggregate, aggregate_with, RoundingPolicy};
pub use scaling::scale;
pub use units::ScalingMode;
