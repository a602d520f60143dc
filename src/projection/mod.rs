//! Projection of a plan into per-period account values

mod engine;
mod point;
mod solver;

pub use engine::{compute_projection, future_value_of_annuity, summarize, yearly_snapshots};
pub use point::{FinalResult, ProjectionPoint, YearEndSnapshot};
pub use solver::required_annual_rate;
