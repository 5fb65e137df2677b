use thiserror::Error;

use crate::domain::{self, CalculationInput, DomainError};

#[derive(Debug, Clone, Copy)]
pub struct ComputeProfitsCommand {
    pub power: f64,
    pub price_per_unit: f64,
    pub deviation_before: f64,
    pub deviation_after: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ComputeProfitsResult {
    pub profit_before: f64,
    pub profit_after: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("Invalid input: {0}")]
    InvalidInput(DomainError),

    #[error("Calculation failed: {0}")]
    Numeric(DomainError),
}

/// Runs the before/after profit comparison. Stateless; one instance can
/// serve any number of concurrent requests.
pub struct ComputeProfitsUseCase;

impl ComputeProfitsUseCase {
    pub fn execute(
        &self,
        command: ComputeProfitsCommand,
    ) -> Result<ComputeProfitsResult, CalculationError> {
        let input = CalculationInput {
            power: command.power,
            price_per_unit: command.price_per_unit,
            deviation_before: command.deviation_before,
            deviation_after: command.deviation_after,
        };

        let output = domain::compute_profits(&input).map_err(|e| match e {
            DomainError::NumericAnomaly(_) => CalculationError::Numeric(e),
            _ => CalculationError::InvalidInput(e),
        })?;

        Ok(ComputeProfitsResult {
            profit_before: output.profit_before,
            profit_after: output.profit_after,
        })
    }
}
