//! Scenario runner for batches of plans
//!
//! Each plan is projected independently, so batches fan out across threads.
//! Batches never print reports or render charts; use `InvestmentCalculator`
//! for a single presented run.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::plan::InvestmentPlan;
use crate::projection::{compute_projection, summarize, FinalResult};

/// One row of a batch run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSummary {
    pub contribution_amount: f64,
    pub years: u32,
    pub periods_per_year: u32,
    pub annual_rate: f64,
    pub total_contributed: f64,
    pub total_earnings: f64,
    pub total_value: f64,
}

impl ScenarioSummary {
    pub fn new(plan: &InvestmentPlan, result: &FinalResult) -> Self {
        Self {
            contribution_amount: plan.contribution_amount,
            years: plan.years,
            periods_per_year: plan.periods_per_year,
            annual_rate: plan.annual_rate,
            total_contributed: result.total_contributed,
            total_earnings: result.total_earnings,
            total_value: result.total_value,
        }
    }
}

/// Runs many plans in parallel
///
/// # Example
/// ```
/// use invest_calc::{InvestmentPlan, ScenarioRunner};
///
/// let plan = InvestmentPlan::new(500.0, 20, 12, 0.0);
/// let results = ScenarioRunner::new().run_rate_sweep(&plan, &[0.03, 0.05, 0.07]);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Project one plan to its final totals, ignoring presentation flags
    pub fn run(&self, plan: &InvestmentPlan) -> Result<FinalResult> {
        summarize(&compute_projection(plan)?)
    }

    /// Run every plan; results come back in input order
    pub fn run_batch(&self, plans: &[InvestmentPlan]) -> Vec<Result<FinalResult>> {
        plans.par_iter().map(|plan| self.run(plan)).collect()
    }

    /// Run one plan at each of several annual rates
    pub fn run_rate_sweep(&self, plan: &InvestmentPlan, rates: &[f64]) -> Vec<Result<FinalResult>> {
        rates
            .par_iter()
            .map(|&rate| self.run(&plan.with_rate(rate)))
            .collect()
    }

    /// Run a batch and write one summary row per valid plan
    ///
    /// Invalid plans are logged and skipped. Returns the number of rows written.
    pub fn write_summary_csv<W: std::io::Write>(&self, plans: &[InvestmentPlan], out: W) -> Result<usize> {
        let mut writer = csv::Writer::from_writer(out);
        let mut written = 0;

        for (index, (plan, outcome)) in plans.iter().zip(self.run_batch(plans)).enumerate() {
            match outcome {
                Ok(result) => {
                    writer.serialize(ScenarioSummary::new(plan, &result))?;
                    written += 1;
                }
                Err(e) => log::warn!("Skipping plan {} (row {}): {}", index + 1, index + 2, e),
            }
        }

        writer.flush()?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;

    #[test]
    fn test_rate_sweep_orders_by_rate() {
        let runner = ScenarioRunner::new();
        let plan = InvestmentPlan::new(500.0, 20, 12, 0.0);

        let results: Vec<FinalResult> = runner
            .run_rate_sweep(&plan, &[0.03, 0.05, 0.07])
            .into_iter()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[2].total_value > results[1].total_value);
        assert!(results[1].total_value > results[0].total_value);
        assert!(results.iter().all(|r| r.total_contributed == 120_000.0));
    }

    #[test]
    fn test_batch_keeps_order_and_errors() {
        let runner = ScenarioRunner::new();
        let plans = vec![
            InvestmentPlan::new(100.0, 1, 1, 0.0),
            InvestmentPlan::new(100.0, 0, 1, 0.0),
            InvestmentPlan::new(200.0, 2, 1, 0.0),
        ];

        let results = runner.run_batch(&plans);
        assert_eq!(results[0].as_ref().unwrap().total_value, 100.0);
        assert!(matches!(results[1], Err(CalculatorError::InvalidParameter { field: "years", .. })));
        assert_eq!(results[2].as_ref().unwrap().total_value, 400.0);
    }

    #[test]
    fn test_summary_csv_skips_invalid_plans() {
        let runner = ScenarioRunner::new();
        let plans = vec![
            InvestmentPlan::new(100.0, 1, 1, 0.0),
            InvestmentPlan::new(-1.0, 1, 1, 0.0),
        ];

        let mut out = Vec::new();
        let written = runner.write_summary_csv(&plans, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(written, 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "contribution_amount,years,periods_per_year,annual_rate,total_contributed,total_earnings,total_value"
        );
        assert_eq!(lines.len(), 2);
        let fields: Vec<f64> = lines[1].split(',').map(|f| f.parse().unwrap()).collect();
        assert_eq!(fields, vec![100.0, 1.0, 1.0, 0.0, 100.0, 0.0, 100.0]);
    }
}
