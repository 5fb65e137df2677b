mod compute_profits;

pub use compute_profits::{
    CalculationError, ComputeProfitsCommand, ComputeProfitsResult, ComputeProfitsUseCase,
};
