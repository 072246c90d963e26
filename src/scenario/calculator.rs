//! Interactive calculator state
//!
//! Holds the current parameter snapshot and recomputes the projection after
//! every change, replacing the previous output wholesale.

use log::debug;

use super::ScenarioParams;
use crate::assumptions::{CostSchedule, ProductVariant, Profile};
use crate::projection::{ProjectionEngine, ProjectionOutput, ProjectionSummary};

/// Which side of the result card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Projected balances and expected profit
    #[default]
    Returns,
    /// Annual cost percentages
    Costs,
}

impl View {
    pub fn flipped(self) -> Self {
        match self {
            View::Returns => View::Costs,
            View::Costs => View::Returns,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Calculator {
    engine: ProjectionEngine,
    costs: CostSchedule,
    params: ScenarioParams,
    output: ProjectionOutput,
    view: View,
}

impl Calculator {
    pub fn new(params: ScenarioParams) -> Self {
        Self::with_engine(ProjectionEngine::default(), params)
    }

    pub fn with_engine(engine: ProjectionEngine, params: ScenarioParams) -> Self {
        let output = engine.project(&params.input());
        Self {
            engine,
            costs: CostSchedule::default(),
            params,
            output,
            view: View::default(),
        }
    }

    pub fn params(&self) -> &ScenarioParams {
        &self.params
    }

    pub fn output(&self) -> &ProjectionOutput {
        &self.output
    }

    pub fn costs(&self) -> &CostSchedule {
        &self.costs
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn summary(&self) -> Option<ProjectionSummary> {
        self.output.summary()
    }

    pub fn set_starting_amount(&mut self, amount: f64) {
        self.params.starting_amount = amount;
        self.recompute();
    }

    pub fn set_horizon_years(&mut self, years: u32) {
        self.params.horizon_years = years;
        self.recompute();
    }

    pub fn set_monthly_contribution(&mut self, amount: f64) {
        self.params.monthly_contribution = amount;
        self.recompute();
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.params.profile = profile;
        self.recompute();
    }

    pub fn set_variant(&mut self, variant: ProductVariant) {
        self.params.variant = variant;
        self.recompute();
    }

    /// Replace all parameters at once
    pub fn set_params(&mut self, params: ScenarioParams) {
        self.params = params;
        self.recompute();
    }

    /// Toggle between returns and costs; the projection is left untouched
    pub fn flip(&mut self) {
        self.view = self.view.flipped();
    }

    pub fn show(&mut self, view: View) {
        self.view = view;
    }

    fn recompute(&mut self) {
        debug!("Recomputing projection for {:?}", self.params);
        self.output = self.engine.project(&self.params.input());
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(ScenarioParams::default())
    }
}
