use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Horizon must be at least one year, got {0}")]
    InvalidHorizon(u32),

    #[error("{field} must be a finite, non-negative amount, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown {kind} label: '{label}'")]
    UnknownLabel { kind: &'static str, label: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
