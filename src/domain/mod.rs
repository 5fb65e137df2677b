pub mod density;
pub mod error;
pub mod profit;
pub mod quadrature;

pub use density::GaussianDensity;
pub use error::{DomainError, DomainResult};
pub use profit::{
    CalculationInput, CalculationOutput, HOURS_PER_DAY, ScenarioOutcome, compute_profits,
    scenario_outcome,
};
pub use quadrature::{
    INTEGRATION_STEPS, TOLERANCE_LOWER, TOLERANCE_UPPER, in_tolerance_percent, trapezoid,
};
