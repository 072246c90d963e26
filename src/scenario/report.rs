//! Plain-text rendering of the returns and costs views

use std::fmt::Write;

use super::{Calculator, ScenarioParams, View};
use crate::assumptions::{CostSchedule, Track};
use crate::format::{format_currency, format_percentage};
use crate::projection::ProjectionOutput;

/// Render whichever side the calculator is showing
pub fn render(calc: &Calculator) -> String {
    match calc.view() {
        View::Returns => render_returns(calc.params(), calc.output()),
        View::Costs => render_costs(calc.costs()),
    }
}

/// Final-year balances per track plus expected profit
pub fn render_returns(params: &ScenarioParams, output: &ProjectionOutput) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} / {} - {} jaar, start {}, inleg {} per maand",
        params.variant,
        params.profile,
        params.horizon_years,
        format_currency(params.starting_amount),
        format_currency(params.monthly_contribution),
    );

    let (Some(summary), Some(last)) = (output.summary(), output.final_year()) else {
        let _ = writeln!(out, "Geen resultaten");
        return out;
    };

    let _ = writeln!(out, "{:<24} {:>16}", "Verwacht eindvermogen", format_currency(summary.expected_balance as f64));
    let _ = writeln!(out, "{:<24} {:>16}", "Verwachte winst", format_currency(summary.expected_profit));
    let _ = writeln!(out);
    for track in [Track::Worst, Track::Expected, Track::Best] {
        let _ = writeln!(out, "{:<24} {:>16}", track.label(), format_currency(last.balance(track) as f64));
    }
    out
}

/// One row per projected year
pub fn render_yearly(output: &ProjectionOutput) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} {:>16} {:>16} {:>16}",
        "Jaar",
        Track::Worst.label(),
        Track::Expected.label(),
        Track::Best.label()
    );
    for row in output {
        let _ = writeln!(
            out,
            "{:>4} {:>16} {:>16} {:>16}",
            row.year,
            format_currency(row.worst_case_balance as f64),
            format_currency(row.expected_balance as f64),
            format_currency(row.best_case_balance as f64),
        );
    }
    out
}

/// Annual cost components and their total
pub fn render_costs(costs: &CostSchedule) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Gemiddelde jaarlijkse kosten");
    for line in costs.lines() {
        let _ = writeln!(out, "{:<24} {:>8}", line.label, format_percentage(line.rate));
    }
    let _ = writeln!(out, "{:<24} {:>8}", "Totaal", format_percentage(costs.total()));
    out
}
