//! Error type shared by the library API

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid product selection: {0}")]
    InvalidSelection(String),

    #[error("unknown goal: {0}")]
    UnknownGoal(String),

    #[error("unknown product: {0}")]
    UnknownProduct(String),

    #[error("product {product} is not eligible for goal {goal}")]
    IneligibleProduct { goal: String, product: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimulatorError>;
