//! Required-rate solver
//!
//! Finds the annual rate at which a plan's contributions grow to a target value.

use crate::plan::InvestmentPlan;
use super::engine::future_value_of_annuity;

/// Highest annual rate the solver will consider (1000%)
const MAX_ANNUAL_RATE: f64 = 10.0;

/// Solve for the nominal annual rate that makes the plan reach `target_value`
/// at the end of its horizon, using Newton-Raphson with a bisection fallback.
///
/// Only the plan's amount, years and frequency are used; its rate is ignored.
///
/// # Returns
/// * `Some(0.0)` if contributions alone already reach the target
/// * `None` if the plan is invalid or the target needs more than 1000% a year
pub fn required_annual_rate(plan: &InvestmentPlan, target_value: f64) -> Option<f64> {
    if !target_value.is_finite() || plan.with_rate(0.0).validate().is_err() {
        return None;
    }

    let periods = plan.total_periods();
    let per_year = plan.periods_per_year as f64;
    let amount = plan.contribution_amount;
    let gap = |annual: f64| future_value_of_annuity(amount, annual / per_year, periods) - target_value;

    if gap(0.0) >= 0.0 {
        return Some(0.0);
    }
    if gap(MAX_ANNUAL_RATE) < 0.0 {
        return None;
    }

    let tolerance = 1e-12;
    let max_iterations = 1000;
    let mut rate = 0.05;

    for _ in 0..max_iterations {
        let value = gap(rate);
        let slope = fv_slope(amount, rate / per_year, periods) / per_year;

        if !slope.is_finite() || slope.abs() < 1e-20 {
            // Flat or unstable derivative near zero, fall back
            return solve_bisection(&gap);
        }

        let new_rate = (rate - value / slope).clamp(0.0, MAX_ANNUAL_RATE);
        if (new_rate - rate).abs() < tolerance {
            return Some(new_rate);
        }
        rate = new_rate;
    }

    solve_bisection(&gap)
}

/// Derivative of the annuity future value with respect to the periodic rate
fn fv_slope(amount: f64, periodic_rate: f64, periods: u32) -> f64 {
    let n = periods as f64;
    if periodic_rate.abs() < 1e-9 {
        // Limit as the rate goes to zero
        return amount * n * (n - 1.0) / 2.0;
    }
    let growth = (1.0 + periodic_rate).powf(n);
    let growth_prev = (1.0 + periodic_rate).powf(n - 1.0);
    amount * (n * growth_prev * periodic_rate - (growth - 1.0)) / (periodic_rate * periodic_rate)
}

fn solve_bisection(gap: &dyn Fn(f64) -> f64) -> Option<f64> {
    let mut low = 0.0_f64;
    let mut high = MAX_ANNUAL_RATE;
    let tolerance = 1e-12;

    for _ in 0..500 {
        let mid = (low + high) / 2.0;
        let value = gap(mid);

        if value.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(mid);
        }

        if value < 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }

    None
}
