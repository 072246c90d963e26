//! Flat annual cost percentages shown on the costs view
//!
//! These are static display figures. They are not deducted from the projected
//! balances.

use serde::{Deserialize, Serialize};

/// A labelled row of the cost overview
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostLine {
    pub label: &'static str,
    pub rate: f64,
}

/// Average annual costs as a fraction of invested capital
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSchedule {
    /// Management fee (e.g., 0.0038 = 0.38%)
    pub management_fee: f64,
    /// Broker cost
    pub broker_cost: f64,
    /// Underlying fund cost
    pub fund_cost: f64,
}

impl Default for CostSchedule {
    fn default() -> Self {
        Self {
            management_fee: 0.0038, // 0.38%
            broker_cost: 0.0010,    // 0.10%
            fund_cost: 0.0017,      // 0.17%
        }
    }
}

impl CostSchedule {
    /// Total annual cost across all components
    pub fn total(&self) -> f64 {
        self.management_fee + self.broker_cost + self.fund_cost
    }

    /// Component rows in display order (total excluded)
    pub fn lines(&self) -> [CostLine; 3] {
        [
            CostLine { label: "Beheervergoeding", rate: self.management_fee },
            CostLine { label: "Kosten broker", rate: self.broker_cost },
            CostLine { label: "Kosten fondsen", rate: self.fund_cost },
        ]
    }
}
