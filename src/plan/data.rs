//! Recurring investment plan definition

use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, Result};

/// Upper bound on `years * periods_per_year` accepted by validation
pub const MAX_TOTAL_PERIODS: u32 = 1_000_000;

/// A recurring contribution plan. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    /// Amount deposited at the end of every period
    pub contribution_amount: f64,

    /// Investment horizon in years
    pub years: u32,

    /// Contributions per year (12 = monthly, 1 = annually)
    pub periods_per_year: u32,

    /// Nominal annual rate as a decimal (0.12 for 12%)
    pub annual_rate: f64,

    /// Print the breakdown report
    #[serde(default)]
    pub show_details: bool,

    /// Render the growth chart
    #[serde(default)]
    pub render_chart: bool,

    /// Write the chart to the output directory (needs `render_chart`)
    #[serde(default)]
    pub persist_chart: bool,
}

impl InvestmentPlan {
    /// Create a plan with all presentation options off
    pub fn new(contribution_amount: f64, years: u32, periods_per_year: u32, annual_rate: f64) -> Self {
        Self {
            contribution_amount,
            years,
            periods_per_year,
            annual_rate,
            show_details: false,
            render_chart: false,
            persist_chart: false,
        }
    }

    /// Enable or disable the printed report
    pub fn with_details(mut self, show_details: bool) -> Self {
        self.show_details = show_details;
        self
    }

    /// Enable chart rendering, optionally persisting it to disk
    pub fn with_chart(mut self, render_chart: bool, persist_chart: bool) -> Self {
        self.render_chart = render_chart;
        self.persist_chart = persist_chart;
        self
    }

    /// Same plan at a different annual rate
    pub fn with_rate(&self, annual_rate: f64) -> Self {
        Self {
            annual_rate,
            ..self.clone()
        }
    }

    /// Check every field against its constraint, reporting the first violation
    pub fn validate(&self) -> Result<()> {
        if !self.contribution_amount.is_finite() || self.contribution_amount <= 0.0 {
            return Err(CalculatorError::invalid(
                "contribution_amount",
                format!("must be a positive finite number, got {}", self.contribution_amount),
            ));
        }
        if self.years == 0 {
            return Err(CalculatorError::invalid("years", "must be at least 1"));
        }
        if self.periods_per_year == 0 {
            return Err(CalculatorError::invalid("periods_per_year", "must be at least 1"));
        }
        if !self.annual_rate.is_finite() || self.annual_rate < 0.0 {
            return Err(CalculatorError::invalid(
                "annual_rate",
                format!("must be a non-negative finite number, got {}", self.annual_rate),
            ));
        }
        match self.years.checked_mul(self.periods_per_year) {
            Some(n) if n <= MAX_TOTAL_PERIODS => Ok(()),
            _ => Err(CalculatorError::invalid(
                "periods_per_year",
                format!(
                    "{} years x {} periods exceeds the limit of {} periods",
                    self.years, self.periods_per_year, MAX_TOTAL_PERIODS
                ),
            )),
        }
    }

    /// Total number of contribution periods
    ///
    /// Only meaningful for a validated plan; saturates instead of overflowing.
    pub fn total_periods(&self) -> u32 {
        self.years.saturating_mul(self.periods_per_year)
    }

    /// Rate applied per period
    pub fn periodic_rate(&self) -> f64 {
        self.annual_rate / self.periods_per_year as f64
    }

    /// Human-readable contribution frequency
    pub fn frequency_label(&self) -> String {
        match self.periods_per_year {
            1 => "annually".to_string(),
            2 => "semi-annually".to_string(),
            4 => "quarterly".to_string(),
            12 => "monthly".to_string(),
            26 => "bi-weekly".to_string(),
            52 => "weekly".to_string(),
            365 => "daily".to_string(),
            n => format!("{} times per year", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_plan_derived_values() {
        let plan = InvestmentPlan::new(4000.0, 35, 12, 0.12);
        assert!(plan.validate().is_ok());
        assert_eq!(plan.total_periods(), 420);
        assert!((plan.periodic_rate() - 0.01).abs() < 1e-15);
        assert_eq!(plan.frequency_label(), "monthly");
    }

    #[test]
    fn test_each_invalid_field_is_named() {
        let cases = [
            (InvestmentPlan::new(0.0, 10, 12, 0.05), "contribution_amount"),
            (InvestmentPlan::new(-5.0, 10, 12, 0.05), "contribution_amount"),
            (InvestmentPlan::new(f64::NAN, 10, 12, 0.05), "contribution_amount"),
            (InvestmentPlan::new(100.0, 0, 12, 0.05), "years"),
            (InvestmentPlan::new(100.0, 10, 0, 0.05), "periods_per_year"),
            (InvestmentPlan::new(100.0, 10, 12, -0.01), "annual_rate"),
            (InvestmentPlan::new(100.0, 10, 12, f64::INFINITY), "annual_rate"),
        ];

        for (plan, field) in cases {
            let err = plan.validate().unwrap_err();
            assert_eq!(err.invalid_field(), Some(field), "plan {:?}", plan);
        }
    }

    #[test]
    fn test_period_limit() {
        let at_limit = InvestmentPlan::new(1.0, 1000, 1000, 0.05);
        assert!(at_limit.validate().is_ok());

        let over_limit = InvestmentPlan::new(1.0, 1001, 1000, 0.05);
        assert_eq!(over_limit.validate().unwrap_err().invalid_field(), Some("periods_per_year"));

        let overflow = InvestmentPlan::new(1.0, u32::MAX, u32::MAX, 0.05);
        assert!(overflow.validate().is_err());
        assert_eq!(overflow.total_periods(), u32::MAX);
    }

    #[test]
    fn test_builder_flags() {
        let plan = InvestmentPlan::new(100.0, 1, 1, 0.0)
            .with_details(true)
            .with_chart(true, false);
        assert!(plan.show_details);
        assert!(plan.render_chart);
        assert!(!plan.persist_chart);

        let repriced = plan.with_rate(0.07);
        assert_eq!(repriced.annual_rate, 0.07);
        assert!(repriced.show_details);
    }

    #[test]
    fn test_frequency_labels() {
        assert_eq!(InvestmentPlan::new(1.0, 1, 1, 0.0).frequency_label(), "annually");
        assert_eq!(InvestmentPlan::new(1.0, 1, 52, 0.0).frequency_label(), "weekly");
        assert_eq!(InvestmentPlan::new(1.0, 1, 6, 0.0).frequency_label(), "6 times per year");
    }
}
