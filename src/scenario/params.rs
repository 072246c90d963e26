//! User-adjustable scenario parameters
//!
//! Defaults and bounds mirror the calculator's sliders: starting amount from
//! 1.000 to 1.000.000, a horizon of 1 to 30 years and a monthly contribution
//! of 0 to 2.000.

use serde::{Deserialize, Serialize};

use crate::assumptions::{ProductVariant, Profile};
use crate::error::{ProjectionError, Result};
use crate::projection::ProjectionInput;

/// Inclusive bounds for the numeric inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub min_starting_amount: f64,
    pub max_starting_amount: f64,
    pub min_horizon_years: u32,
    pub max_horizon_years: u32,
    pub min_monthly_contribution: f64,
    pub max_monthly_contribution: f64,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min_starting_amount: 1_000.0,
            max_starting_amount: 1_000_000.0,
            min_horizon_years: 1,
            max_horizon_years: 30,
            min_monthly_contribution: 0.0,
            max_monthly_contribution: 2_000.0,
        }
    }
}

/// Parameters for one projection scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Capital invested at the start (default: 350.000)
    #[serde(default = "default_starting_amount")]
    pub starting_amount: f64,

    /// Projection horizon in years (default: 3)
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,

    /// Contribution per month (default: 250)
    #[serde(default = "default_monthly_contribution")]
    pub monthly_contribution: f64,

    /// Risk profile label; does not affect the projection
    #[serde(default)]
    pub profile: Profile,

    /// Product variant label; does not affect the projection
    #[serde(default)]
    pub variant: ProductVariant,
}

fn default_starting_amount() -> f64 { 350_000.0 }
fn default_horizon_years() -> u32 { 3 }
fn default_monthly_contribution() -> f64 { 250.0 }

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            starting_amount: default_starting_amount(),
            horizon_years: default_horizon_years(),
            monthly_contribution: default_monthly_contribution(),
            profile: Profile::default(),
            variant: ProductVariant::default(),
        }
    }
}

impl ScenarioParams {
    /// Numeric inputs for the projection engine
    pub fn input(&self) -> ProjectionInput {
        ProjectionInput::new(self.starting_amount, self.horizon_years, self.monthly_contribution)
    }

    /// Reject inputs the engine would project into meaningless figures
    ///
    /// Checks that the horizon is at least one year and that both amounts are
    /// finite and non-negative. Slider bounds are not enforced here; see
    /// [`validate_within`](Self::validate_within).
    pub fn validate(&self) -> Result<()> {
        if self.horizon_years == 0 {
            return Err(ProjectionError::InvalidHorizon(self.horizon_years));
        }
        check_amount("starting_amount", self.starting_amount)?;
        check_amount("monthly_contribution", self.monthly_contribution)?;
        Ok(())
    }

    /// [`validate`](Self::validate) plus the given slider bounds
    pub fn validate_within(&self, bounds: &InputBounds) -> Result<()> {
        self.validate()?;
        check_range(
            "starting_amount",
            self.starting_amount,
            bounds.min_starting_amount,
            bounds.max_starting_amount,
        )?;
        check_range(
            "horizon_years",
            self.horizon_years as f64,
            bounds.min_horizon_years as f64,
            bounds.max_horizon_years as f64,
        )?;
        check_range(
            "monthly_contribution",
            self.monthly_contribution,
            bounds.min_monthly_contribution,
            bounds.max_monthly_contribution,
        )?;
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProjectionError::NegativeAmount { field, value });
    }
    Ok(())
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value < min || value > max {
        return Err(ProjectionError::OutOfRange { field, value, min, max });
    }
    Ok(())
}
