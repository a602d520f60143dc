//! Load investment plans from CSV
//!
//! Expected header: `ContributionAmount,Years,PeriodsPerYear,AnnualRate` with
//! optional `ShowDetails,RenderChart,PersistChart` columns.

use csv::Reader;
use std::path::Path;

use super::InvestmentPlan;
use crate::error::Result;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ContributionAmount")]
    contribution_amount: f64,
    #[serde(rename = "Years")]
    years: u32,
    #[serde(rename = "PeriodsPerYear")]
    periods_per_year: u32,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "ShowDetails", default)]
    show_details: Option<bool>,
    #[serde(rename = "RenderChart", default)]
    render_chart: Option<bool>,
    #[serde(rename = "PersistChart", default)]
    persist_chart: Option<bool>,
}

impl CsvRow {
    fn into_plan(self) -> InvestmentPlan {
        InvestmentPlan::new(
            self.contribution_amount,
            self.years,
            self.periods_per_year,
            self.annual_rate,
        )
        .with_details(self.show_details.unwrap_or(false))
        .with_chart(
            self.render_chart.unwrap_or(false),
            self.persist_chart.unwrap_or(false),
        )
    }
}

/// Load all plans from a CSV file
///
/// Rows are not validated here; each plan is checked when it is calculated.
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<InvestmentPlan>> {
    let reader = Reader::from_path(path)?;
    collect_plans(reader)
}

/// Load plans from any reader (string buffer, stdin)
pub fn load_plans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<InvestmentPlan>> {
    collect_plans(Reader::from_reader(reader))
}

fn collect_plans<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<InvestmentPlan>> {
    let mut plans = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.into_plan());
    }
    log::debug!("Loaded {} plans", plans.len());
    Ok(plans)
}
