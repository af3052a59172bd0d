// File: crates/chart-shape/src/error.rs
// Summary: Error type for the fallible edges of the crate (name parsing, config loading).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("unknown chart type `{0}`")]
    UnknownChartType(String),
    #[error("unknown type category `{0}`")]
    UnknownCategory(String),
    #[error("unknown step type `{0}`")]
    UnknownStepType(String),
    #[error("unknown curve `{0}`")]
    UnknownCurve(String),
    #[error("invalid shape config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShapeError>;
