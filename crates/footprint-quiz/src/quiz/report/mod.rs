mod insights;
mod summary;
pub mod views;

pub use summary::FootprintReport;

pub use insights::{METRIC_EXPLANATIONS, REFLECTIVE_QUESTIONS};

pub(crate) use insights::generate_insights;

/// Academic reference footprint for Peru, in global hectares.
pub const PERU_AVERAGE_GHA: f64 = 1.6;
/// World average footprint, in global hectares.
pub const WORLD_AVERAGE_GHA: f64 = 2.7;
