//! Load scenario parameters from JSON configuration or CSV batches
//!
//! CSV batches use the header
//! `starting_amount,horizon_years,monthly_contribution[,profile,variant]`.
//! Label columns are optional and matched case-insensitively.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::ScenarioParams;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    starting_amount: f64,
    horizon_years: u32,
    monthly_contribution: f64,
    #[serde(default)]
    profile: Option<String>,
    #[serde(default)]
    variant: Option<String>,
}

impl ScenarioRow {
    fn into_params(self) -> Result<ScenarioParams> {
        let mut params = ScenarioParams {
            starting_amount: self.starting_amount,
            horizon_years: self.horizon_years,
            monthly_contribution: self.monthly_contribution,
            ..Default::default()
        };
        if let Some(profile) = self.profile.as_deref().filter(|s| !s.trim().is_empty()) {
            params.profile = profile.parse()?;
        }
        if let Some(variant) = self.variant.as_deref().filter(|s| !s.trim().is_empty()) {
            params.variant = variant.parse()?;
        }
        Ok(params)
    }
}

/// Parse scenarios from any CSV source
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<ScenarioParams>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for row in csv_reader.deserialize::<ScenarioRow>() {
        scenarios.push(row?.into_params()?);
    }
    Ok(scenarios)
}

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioParams>> {
    let path = path.as_ref();
    let scenarios = load_scenarios_from_reader(File::open(path)?)?;
    info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load a single scenario from a JSON file; missing fields take their defaults
pub fn load_params_json<P: AsRef<Path>>(path: P) -> Result<ScenarioParams> {
    let file = File::open(path.as_ref())?;
    let params = serde_json::from_reader(file)?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{ProductVariant, Profile};
    use crate::error::ProjectionError;

    #[test]
    fn test_load_with_labels() {
        let data = "\
starting_amount,horizon_years,monthly_contribution,profile,variant
350000,3,250,Neutraal,Bloei Plus
1000, 30, 0 ,offensief,bloei
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].profile, Profile::Neutraal);
        assert_eq!(scenarios[0].variant, ProductVariant::BloeiPlus);
        assert_eq!(scenarios[1].horizon_years, 30);
        assert_eq!(scenarios[1].monthly_contribution, 0.0);
        assert_eq!(scenarios[1].profile, Profile::Offensief);
    }

    #[test]
    fn test_load_without_label_columns() {
        let data = "starting_amount,horizon_years,monthly_contribution\n5000,5,100\n";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].profile, Profile::Defensief);
        assert_eq!(scenarios[0].variant, ProductVariant::Bloei);
    }

    #[test]
    fn test_unknown_label_is_an_error() {
        let data = "starting_amount,horizon_years,monthly_contribution,profile\n5000,5,100,Wild\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, ProjectionError::UnknownLabel { kind: "profile", .. }));
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let data = "starting_amount,horizon_years,monthly_contribution\nabc,5,100\n";
        assert!(matches!(
            load_scenarios_from_reader(data.as_bytes()),
            Err(ProjectionError::Csv(_))
        ));
    }
}
