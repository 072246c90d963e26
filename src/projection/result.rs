//! Projection output: one rounded row per projected year

use serde::{Deserialize, Serialize};

use super::engine::ProjectionInput;
use crate::assumptions::Track;

/// Balances at the end of one projection year, rounded to whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyResult {
    /// Projection year (1-indexed)
    pub year: u32,
    pub expected_balance: i64,
    pub worst_case_balance: i64,
    pub best_case_balance: i64,
}

impl YearlyResult {
    pub fn balance(&self, track: Track) -> i64 {
        match track {
            Track::Expected => self.expected_balance,
            Track::Worst => self.worst_case_balance,
            Track::Best => self.best_case_balance,
        }
    }
}

/// Final-year figures shown on the returns view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub total_invested: f64,
    pub expected_balance: i64,
    pub worst_case_balance: i64,
    pub best_case_balance: i64,
    /// Expected final balance less everything paid in
    pub expected_profit: f64,
}

/// Complete result of one projection
///
/// Always replaced wholesale when any input changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionOutput {
    input: ProjectionInput,
    years: Vec<YearlyResult>,
}

impl ProjectionOutput {
    pub(crate) fn new(input: ProjectionInput, years: Vec<YearlyResult>) -> Self {
        Self { input, years }
    }

    /// The inputs this output was projected from
    pub fn input(&self) -> &ProjectionInput {
        &self.input
    }

    /// Rows in ascending year order
    pub fn years(&self) -> &[YearlyResult] {
        &self.years
    }

    pub fn iter(&self) -> std::slice::Iter<'_, YearlyResult> {
        self.years.iter()
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Row for a given year, if within the horizon
    pub fn year(&self, year: u32) -> Option<&YearlyResult> {
        let idx = (year as usize).checked_sub(1)?;
        self.years.get(idx)
    }

    /// Last projected year, `None` for an empty projection
    pub fn final_year(&self) -> Option<&YearlyResult> {
        self.years.last()
    }

    /// Final expected balance minus starting capital and all contributions
    pub fn expected_profit(&self) -> Option<f64> {
        self.final_year()
            .map(|last| last.expected_balance as f64 - self.input.total_invested())
    }

    pub fn summary(&self) -> Option<ProjectionSummary> {
        let last = self.final_year()?;
        Some(ProjectionSummary {
            horizon_years: self.input.horizon_years,
            total_invested: self.input.total_invested(),
            expected_balance: last.expected_balance,
            worst_case_balance: last.worst_case_balance,
            best_case_balance: last.best_case_balance,
            expected_profit: last.expected_balance as f64 - self.input.total_invested(),
        })
    }
}

impl<'a> IntoIterator for &'a ProjectionOutput {
    type Item = &'a YearlyResult;
    type IntoIter = std::slice::Iter<'a, YearlyResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.years.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use approx::assert_relative_eq;

    #[test]
    fn test_expected_profit() {
        let input = ProjectionInput::new(350_000.0, 3, 250.0);
        let output = project(&input);

        let last = output.final_year().unwrap();
        let profit = output.expected_profit().unwrap();
        assert_relative_eq!(profit, last.expected_balance as f64 - 359_000.0);
    }

    #[test]
    fn test_summary_matches_final_year() {
        let output = project(&ProjectionInput::new(50_000.0, 10, 500.0));
        let summary = output.summary().unwrap();
        let last = output.final_year().unwrap();

        assert_eq!(summary.horizon_years, 10);
        assert_relative_eq!(summary.total_invested, 110_000.0);
        assert_eq!(summary.expected_balance, last.expected_balance);
        assert_eq!(summary.worst_case_balance, last.balance(Track::Worst));
        assert_eq!(summary.best_case_balance, last.balance(Track::Best));
    }

    #[test]
    fn test_empty_output_has_no_summary() {
        let output = project(&ProjectionInput::new(1_000.0, 0, 0.0));

        assert!(output.summary().is_none());
        assert!(output.expected_profit().is_none());
        assert!(output.year(0).is_none());
    }

    #[test]
    fn test_year_lookup() {
        let output = project(&ProjectionInput::new(1_000.0, 5, 10.0));

        assert_eq!(output.year(1).unwrap().year, 1);
        assert_eq!(output.year(5).unwrap().year, 5);
        assert!(output.year(6).is_none());
    }
}
