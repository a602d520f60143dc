//! Calculation orchestration
//!
//! validate -> project -> summarize -> report (optional) -> chart (optional).
//! Chart rendering runs last and its failure is returned next to the result
//! instead of replacing it.

use std::io::{self, Write};

use crate::chart::{render_chart, RenderedChart};
use crate::config::CalculatorConfig;
use crate::error::{CalculatorError, Result};
use crate::plan::InvestmentPlan;
use crate::projection::{compute_projection, summarize, FinalResult, ProjectionPoint};
use crate::report::present_results;

/// Everything a calculation produced
#[derive(Debug)]
pub struct CalculationOutcome {
    pub result: FinalResult,

    /// `None` when the plan did not ask for a chart
    pub chart: Option<Result<RenderedChart>>,
}

impl CalculationOutcome {
    /// Chart failure, if the chart was requested and could not be produced
    pub fn chart_error(&self) -> Option<&CalculatorError> {
        self.chart.as_ref().and_then(|chart| chart.as_ref().err())
    }
}

/// Runs plans against a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct InvestmentCalculator {
    config: CalculatorConfig,
}

impl InvestmentCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Run a plan, printing the report to standard output
    pub fn run(&self, plan: &InvestmentPlan) -> Result<CalculationOutcome> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_writer(plan, &mut out)
    }

    /// Run a plan, writing the report (if requested) to `out`
    pub fn run_with_writer<W: Write>(&self, plan: &InvestmentPlan, out: &mut W) -> Result<CalculationOutcome> {
        let projection = compute_projection(plan)?;
        let result = summarize(&projection)?;

        if plan.show_details {
            present_results(plan, &projection, &result, self.config.yearly_breakdown, out)?;
            out.flush()?;
        }

        let chart = plan.render_chart.then(|| self.chart(plan, &projection));

        Ok(CalculationOutcome { result, chart })
    }

    fn chart(&self, plan: &InvestmentPlan, projection: &[ProjectionPoint]) -> Result<RenderedChart> {
        render_chart(plan, projection, &self.config.chart).inspect_err(|e| {
            log::warn!("Skipping chart: {}", e);
        })
    }
}

/// Run a plan with the default configuration
pub fn run_calculation(plan: &InvestmentPlan) -> Result<CalculationOutcome> {
    InvestmentCalculator::default().run(plan)
}
