//! Annual growth rates for the three projection tracks

use serde::{Deserialize, Serialize};

/// One of the three parallel scenarios of a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Expected,
    Worst,
    Best,
}

impl Track {
    pub const ALL: [Track; 3] = [Track::Expected, Track::Worst, Track::Best];

    /// Display label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Track::Expected => "Verwacht",
            Track::Worst => "Slechter dan verwacht",
            Track::Best => "Beter dan verwacht",
        }
    }
}

/// Annual growth rate per track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRates {
    /// Annual rate for the expected track (e.g., 0.05 = 5%)
    pub expected: f64,
    /// Annual rate for the worst-case track
    pub worst: f64,
    /// Annual rate for the best-case track
    pub best: f64,
}

impl Default for GrowthRates {
    fn default() -> Self {
        Self {
            expected: crate::projection::DEFAULT_EXPECTED_ANNUAL_RATE,
            worst: crate::projection::DEFAULT_WORST_ANNUAL_RATE,
            best: crate::projection::DEFAULT_BEST_ANNUAL_RATE,
        }
    }
}

impl GrowthRates {
    /// Get the annual rate for a track
    pub fn rate(&self, track: Track) -> f64 {
        match track {
            Track::Expected => self.expected,
            Track::Worst => self.worst,
            Track::Best => self.best,
        }
    }

    /// Annual growth factor for a track, i.e. 1 + rate
    pub fn growth_factor(&self, track: Track) -> f64 {
        1.0 + self.rate(track)
    }
}
