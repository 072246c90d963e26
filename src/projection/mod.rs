//! Projection engine for savings plans

mod engine;
mod result;

pub use engine::{project, round_half_up, ProjectionEngine, ProjectionInput};
pub use result::{ProjectionOutput, ProjectionSummary, YearlyResult};

// ============================================================================
// Default Growth Rates
// ============================================================================
// Annual rates applied once per year, after that year's contributions are added.

/// Default annual rate for the expected track (5%)
pub const DEFAULT_EXPECTED_ANNUAL_RATE: f64 = 0.05;

/// Default annual rate for the worst-case track (3%)
pub const DEFAULT_WORST_ANNUAL_RATE: f64 = 0.03;

/// Default annual rate for the best-case track (7%)
pub const DEFAULT_BEST_ANNUAL_RATE: f64 = 0.07;

/// Contributions are made monthly but credited as one annual lump
pub const MONTHS_PER_YEAR: f64 = 12.0;
