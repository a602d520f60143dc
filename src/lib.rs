//! Invest Calc - compound-interest projections for recurring investment plans
//!
//! This library provides:
//! - Per-period projection of contributions and compounded value
//! - Final totals (principal, earnings, value) and year-end snapshots
//! - A console breakdown report and CSV export
//! - SVG growth charts, optionally written to disk
//! - Batch and rate-sweep runs, plus a required-rate solver

pub mod error;
pub mod config;
pub mod plan;
pub mod projection;
pub mod report;
pub mod chart;
pub mod calculator;
pub mod scenario;

// Re-export commonly used types
pub use error::{CalculatorError, Result};
pub use config::{CalculatorConfig, ChartSettings};
pub use plan::InvestmentPlan;
pub use projection::{compute_projection, summarize, FinalResult, ProjectionPoint};
pub use calculator::{run_calculation, CalculationOutcome, InvestmentCalculator};
pub use scenario::ScenarioRunner;
