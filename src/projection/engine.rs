//! Year-by-year projection of the three growth tracks

use log::debug;
use serde::{Deserialize, Serialize};

use super::result::{ProjectionOutput, YearlyResult};
use super::MONTHS_PER_YEAR;
use crate::assumptions::{GrowthRates, Track};

/// Inputs that drive a projection
///
/// The engine does not validate these. A zero horizon yields an empty output and
/// negative amounts are projected as-is; use
/// [`ScenarioParams::validate`](crate::scenario::ScenarioParams::validate) to
/// reject them up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Capital invested at the start
    pub starting_amount: f64,
    /// Number of years to project
    pub horizon_years: u32,
    /// Contribution per month
    pub monthly_contribution: f64,
}

impl ProjectionInput {
    pub fn new(starting_amount: f64, horizon_years: u32, monthly_contribution: f64) -> Self {
        Self {
            starting_amount,
            horizon_years,
            monthly_contribution,
        }
    }

    /// Contributions added in a single year
    pub fn annual_contribution(&self) -> f64 {
        self.monthly_contribution * MONTHS_PER_YEAR
    }

    /// Starting capital plus every contribution over the horizon
    pub fn total_invested(&self) -> f64 {
        self.starting_amount + self.annual_contribution() * self.horizon_years as f64
    }
}

/// Unrounded running balance for each track
#[derive(Debug, Clone, Copy)]
struct TrackBalances {
    expected: f64,
    worst: f64,
    best: f64,
}

impl TrackBalances {
    fn starting_at(amount: f64) -> Self {
        Self {
            expected: amount,
            worst: amount,
            best: amount,
        }
    }

    fn get_mut(&mut self, track: Track) -> &mut f64 {
        match track {
            Track::Expected => &mut self.expected,
            Track::Worst => &mut self.worst,
            Track::Best => &mut self.best,
        }
    }

    fn snapshot(&self, year: u32) -> YearlyResult {
        YearlyResult {
            year,
            expected_balance: round_half_up(self.expected),
            worst_case_balance: round_half_up(self.worst),
            best_case_balance: round_half_up(self.best),
        }
    }
}

/// Projection engine parameterised by the growth rate of each track
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    rates: GrowthRates,
}

impl ProjectionEngine {
    pub fn new(rates: GrowthRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &GrowthRates {
        &self.rates
    }

    /// Project the three tracks over the input horizon
    ///
    /// Each year the annual contribution is added first and the whole balance
    /// then grows by that track's rate. Carried balances are never rounded;
    /// only the per-year snapshot is.
    pub fn project(&self, input: &ProjectionInput) -> ProjectionOutput {
        let annual_contribution = input.annual_contribution();
        let mut balances = TrackBalances::starting_at(input.starting_amount);
        let mut years = Vec::with_capacity(input.horizon_years as usize);

        for year in 1..=input.horizon_years {
            for track in Track::ALL {
                let balance = balances.get_mut(track);
                *balance += annual_contribution;
                *balance *= self.rates.growth_factor(track);
            }
            years.push(balances.snapshot(year));
        }

        debug!(
            "Projected {} years from {:.2} with {:.2}/month",
            input.horizon_years, input.starting_amount, input.monthly_contribution
        );

        ProjectionOutput::new(*input, years)
    }
}

/// Project with the default growth rates
pub fn project(input: &ProjectionInput) -> ProjectionOutput {
    ProjectionEngine::default().project(input)
}

/// Round to the nearest whole unit, ties toward positive infinity
///
/// `-2.5` rounds to `-2`, unlike [`f64::round`] which gives `-3`. Values beyond
/// the `i64` range saturate.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_year_default_scenario() {
        // (350000 + 250 * 12) = 353000 before growth
        let output = project(&ProjectionInput::new(350_000.0, 1, 250.0));

        assert_eq!(output.len(), 1);
        let year = &output.years()[0];
        assert_eq!(year.year, 1);
        assert_eq!(year.expected_balance, 370_650);
        assert_eq!(year.worst_case_balance, 363_590);
        assert_eq!(year.best_case_balance, 377_710);
    }

    #[test]
    fn test_single_year_half_unit_rounds_up() {
        // 352950 before growth lands every track exactly on .5
        let output = project(&ProjectionInput::new(349_950.0, 1, 250.0));
        let year = &output.years()[0];

        assert_eq!(year.expected_balance, 370_598);
        assert_eq!(year.worst_case_balance, 363_539);
        assert_eq!(year.best_case_balance, 377_657);
    }

    #[test]
    fn test_zero_inputs_stay_zero() {
        let output = project(&ProjectionInput::new(0.0, 30, 0.0));

        assert_eq!(output.len(), 30);
        for row in output.iter() {
            assert_eq!(row.expected_balance, 0);
            assert_eq!(row.worst_case_balance, 0);
            assert_eq!(row.best_case_balance, 0);
        }
    }

    #[test]
    fn test_zero_horizon_is_empty() {
        let output = project(&ProjectionInput::new(350_000.0, 0, 250.0));

        assert!(output.is_empty());
        assert!(output.final_year().is_none());
    }

    #[test]
    fn test_years_ascending_from_one() {
        let output = project(&ProjectionInput::new(1_000.0, 12, 100.0));

        let years: Vec<u32> = output.iter().map(|r| r.year).collect();
        assert_eq!(years, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_tracks_are_ordered() {
        let output = project(&ProjectionInput::new(25_000.0, 30, 2_000.0));

        for row in output.iter() {
            assert!(row.best_case_balance >= row.expected_balance);
            assert!(row.expected_balance >= row.worst_case_balance);
        }
    }

    #[test]
    fn test_idempotent() {
        let input = ProjectionInput::new(123_456.0, 17, 321.0);
        assert_eq!(project(&input), project(&input));
    }

    #[test]
    fn test_more_contribution_never_lowers_final_balance() {
        let mut previous = project(&ProjectionInput::new(10_000.0, 10, 0.0));
        for monthly in (100..=2_000).step_by(100) {
            let current = project(&ProjectionInput::new(10_000.0, 10, monthly as f64));
            let (prev_last, cur_last) = (previous.final_year().unwrap(), current.final_year().unwrap());

            assert!(cur_last.expected_balance >= prev_last.expected_balance);
            assert!(cur_last.worst_case_balance >= prev_last.worst_case_balance);
            assert!(cur_last.best_case_balance >= prev_last.best_case_balance);
            previous = current;
        }
    }

    #[test]
    fn test_carried_balance_is_not_rounded() {
        // Year 1 expected is 370597.5 exactly; rounding the carry would add 0.5 * 1.05
        let output = project(&ProjectionInput::new(349_950.0, 2, 250.0));
        let expected_year_two = ((349_950.0 + 3_000.0) * 1.05 + 3_000.0) * 1.05;

        assert_eq!(output.years()[1].expected_balance, round_half_up(expected_year_two));
        assert_eq!(output.years()[1].expected_balance, 392_277);
    }

    #[test]
    fn test_custom_rates() {
        let engine = ProjectionEngine::new(GrowthRates {
            expected: 0.0,
            worst: -0.10,
            best: 0.10,
        });
        let output = engine.project(&ProjectionInput::new(1_000.0, 1, 0.0));
        let row = &output.years()[0];

        assert_eq!(row.expected_balance, 1_000);
        assert_eq!(row.worst_case_balance, 900);
        assert_eq!(row.best_case_balance, 1_100);
    }

    #[test]
    fn test_negative_inputs_still_project() {
        let output = project(&ProjectionInput::new(-1_000.0, 1, 0.0));
        assert_eq!(output.years()[0].expected_balance, -1_050);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(370_597.5), 370_598);
        assert_eq!(round_half_up(1.49), 1);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(0.0), 0);
    }
}
