//! Error type shared by the calculator, report and chart layers

use thiserror::Error;

/// Errors produced while validating, computing or presenting a plan
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// A plan field violates its constraint
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: String,
    },

    /// Summary requested for a projection with no points
    #[error("cannot summarize an empty projection")]
    EmptyProjection,

    /// Chart backend failed or the output path is not writable
    #[error("chart rendering failed: {0}")]
    ChartRender(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CalculatorError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Field name for `InvalidParameter`, `None` for every other kind
    pub fn invalid_field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
