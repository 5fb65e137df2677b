use thiserror::Error;

/// Domain-level errors for the profit calculation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Deviation must be positive and finite, got {0}")]
    InvalidDeviation(f64),

    #[error("Power must be finite, got {0}")]
    InvalidPower(f64),

    #[error("Price per unit must be finite, got {0}")]
    InvalidPrice(f64),

    #[error("Integration band is inverted: [{lower}, {upper}]")]
    InvalidBand { lower: f64, upper: f64 },

    #[error("Computation produced a non-finite value: {0}")]
    NumericAnomaly(String),
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
