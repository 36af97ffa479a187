//! Error types for instance construction and configuration.
//!
//! Expected search outcomes (an infeasible instance, an exhausted time
//! budget) are reported through [`TspResult`](crate::result::TspResult)
//! and never through this type. `TspError` covers only contract
//! violations detected at the input boundary.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum TspError {
    /// A row of the input table does not have `n` entries.
    #[error("malformed cost matrix: row {row} has {len} entries, expected {expected}")]
    MalformedMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A cost is NaN or negative.
    #[error("invalid cost {value} for edge {from} -> {to}")]
    InvalidCost { from: usize, to: usize, value: f64 },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
