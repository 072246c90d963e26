//! Savings projection - year-by-year growth of a savings plan
//!
//! This library provides:
//! - A pure projection engine with expected, worst-case and best-case tracks
//! - Growth-rate and annual cost assumptions
//! - Scenario parameters with input bounds and JSON configuration
//! - An interactive calculator that recomputes on every parameter change
//! - nl-NL display formatting for currency and percentages

pub mod assumptions;
pub mod error;
pub mod format;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{CostSchedule, GrowthRates, ProductVariant, Profile, Track};
pub use error::{ProjectionError, Result};
pub use projection::{project, ProjectionEngine, ProjectionInput, ProjectionOutput, YearlyResult};
pub use scenario::{Calculator, ScenarioParams, View};
