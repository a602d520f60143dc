//! Projection output structures

use serde::{Deserialize, Serialize};

/// Account state at the end of one contribution period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// 1-indexed period number
    pub period_index: u32,

    /// Sum of contributions made up to and including this period
    pub cumulative_contributions: f64,

    /// Account value including compounded interest
    pub cumulative_value: f64,
}

impl ProjectionPoint {
    /// Interest earned so far
    pub fn accrued_interest(&self) -> f64 {
        self.cumulative_value - self.cumulative_contributions
    }
}

/// The projection point that closes a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearEndSnapshot {
    /// 1-indexed year
    pub year: u32,
    pub point: ProjectionPoint,
}

/// Totals at the end of the horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalResult {
    pub total_contributed: f64,
    pub total_value: f64,
    pub total_earnings: f64,
}

impl FinalResult {
    /// Build from the last point of a projection
    pub fn from_point(point: &ProjectionPoint) -> Self {
        Self {
            total_contributed: point.cumulative_contributions,
            total_value: point.cumulative_value,
            total_earnings: point.accrued_interest(),
        }
    }
}
