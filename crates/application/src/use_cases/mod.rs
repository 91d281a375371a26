pub mod measurements;
pub mod stats;

// Re-export use cases
pub use measurements::{GetLastMeasurementUseCase, GetMeasurementTypesUseCase};
pub use stats::{GetMeasurementStatsUseCase, StatsOutcome};
