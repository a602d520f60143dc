//! Core projection engine: periodic contributions with periodic compounding

use crate::error::{CalculatorError, Result};
use crate::plan::InvestmentPlan;
use super::point::{FinalResult, ProjectionPoint, YearEndSnapshot};

/// Future value of an ordinary annuity
///
/// `amount` deposited at the end of each of `periods` periods, compounding at
/// `periodic_rate`. Uses `ln_1p`/`exp_m1` so small rates keep full precision.
pub fn future_value_of_annuity(amount: f64, periodic_rate: f64, periods: u32) -> f64 {
    if periodic_rate == 0.0 {
        return amount * periods as f64;
    }
    let growth = (periods as f64 * periodic_rate.ln_1p()).exp_m1();
    amount * growth / periodic_rate
}

/// Compute one point per contribution period
///
/// The value after period `i` is the value after period `i - 1` grown by one
/// period of interest, plus the contribution deposited at the end of period
/// `i`. A zero rate takes the exact `amount * i` branch.
pub fn compute_projection(plan: &InvestmentPlan) -> Result<Vec<ProjectionPoint>> {
    plan.validate()?;

    let total_periods = plan.total_periods();
    let amount = plan.contribution_amount;
    let periodic_rate = plan.periodic_rate();
    let growth = 1.0 + periodic_rate;

    let mut points = Vec::with_capacity(total_periods as usize);
    let mut value = 0.0;

    for period in 1..=total_periods {
        let contributions = amount * period as f64;
        value = if periodic_rate == 0.0 {
            contributions
        } else {
            value * growth + amount
        };

        points.push(ProjectionPoint {
            period_index: period,
            cumulative_contributions: contributions,
            cumulative_value: value,
        });
    }

    log::debug!(
        "Projected {} periods at periodic rate {:.8}",
        points.len(),
        periodic_rate
    );

    Ok(points)
}

/// Totals taken from the last point of a projection
pub fn summarize(projection: &[ProjectionPoint]) -> Result<FinalResult> {
    projection
        .last()
        .map(FinalResult::from_point)
        .ok_or(CalculatorError::EmptyProjection)
}

/// Points closing each year of the plan
///
/// A trailing partial year (projection shorter than a whole number of years)
/// contributes no snapshot.
pub fn yearly_snapshots(plan: &InvestmentPlan, projection: &[ProjectionPoint]) -> Vec<YearEndSnapshot> {
    if plan.periods_per_year == 0 {
        return Vec::new();
    }

    projection
        .chunks_exact(plan.periods_per_year as usize)
        .zip(1..)
        .filter_map(|(year_points, year)| {
            year_points.last().map(|point| YearEndSnapshot { year, point: *point })
        })
        .collect()
}
