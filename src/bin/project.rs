//! Project a single savings scenario and print the returns or costs view
//!
//! Parameters come from an optional JSON file, overridden by any flags given.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use savings_projection::scenario::{load_params_json, report, InputBounds};
use savings_projection::{Calculator, ProductVariant, Profile, ScenarioParams, View};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Returns,
    Costs,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Returns => View::Returns,
            ViewArg::Costs => View::Costs,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "project", about = "Project expected, worst-case and best-case savings growth")]
struct Args {
    /// JSON file with scenario parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting amount
    #[arg(long)]
    start: Option<f64>,

    /// Horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Monthly contribution
    #[arg(long)]
    monthly: Option<f64>,

    /// Risk profile (Defensief, Neutraal, Offensief)
    #[arg(long)]
    profile: Option<Profile>,

    /// Product variant (Bloei, "Bloei Plus")
    #[arg(long)]
    variant: Option<ProductVariant>,

    /// Which side of the result to show
    #[arg(long, value_enum, default_value = "returns")]
    view: ViewArg,

    /// Print every projected year, not just the final one
    #[arg(long)]
    yearly: bool,

    /// Emit the full projection as JSON
    #[arg(long)]
    json: bool,

    /// Skip the slider bounds check, keeping only the basic sanity checks
    #[arg(long)]
    unbounded: bool,
}

impl Args {
    fn params(&self) -> Result<ScenarioParams> {
        let mut params = match &self.config {
            Some(path) => load_params_json(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ScenarioParams::default(),
        };
        if let Some(start) = self.start {
            params.starting_amount = start;
        }
        if let Some(years) = self.years {
            params.horizon_years = years;
        }
        if let Some(monthly) = self.monthly {
            params.monthly_contribution = monthly;
        }
        if let Some(profile) = self.profile {
            params.profile = profile;
        }
        if let Some(variant) = self.variant {
            params.variant = variant;
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = args.params()?;
    let checked = if args.unbounded {
        params.validate()
    } else {
        params.validate_within(&InputBounds::default())
    };
    checked.context("Invalid scenario parameters")?;
    info!("Projecting {:?}", params);

    let mut calc = Calculator::new(params);
    calc.show(args.view.into());

    if args.json {
        let json = serde_json::to_string_pretty(calc.output())
            .context("Failed to serialize projection")?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", report::render(&calc));
    if args.yearly && calc.view() == View::Returns {
        println!();
        print!("{}", report::render_yearly(calc.output()));
    }
    Ok(())
}
