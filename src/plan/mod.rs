//! Investment plan configuration and batch loading

mod data;
pub mod loader;

pub use data::{InvestmentPlan, MAX_TOTAL_PERIODS};
pub use loader::{load_plans, load_plans_from_reader};
