//! Scenario parameters, loading and the interactive calculator

mod calculator;
pub mod loader;
mod params;
pub mod report;

pub use calculator::{Calculator, View};
pub use loader::{load_params_json, load_scenarios, load_scenarios_from_reader};
pub use params::{InputBounds, ScenarioParams};
