//! Generation Imbalance Profit Calculator
//!
//! A small stateless web service that estimates how much money a
//! generating unit gains by tightening the standard deviation of its
//! output around the nominal setpoint.
//!
//! # Architecture
//!
//! The crate follows Clean Architecture with clear separation of concerns:
//!
//! - **Domain**: pure computation — Gaussian density, trapezoidal
//!   quadrature over the acceptance band, and the profit/penalty model
//! - **Application**: the compute-profits use case (command in, result out)
//! - **Infrastructure**: JSON configuration loading
//! - **Presentation**: REST API and static front-end serving
//!
//! # Model
//!
//! Output power is modeled as normally distributed around `power`. The
//! share of probability mass inside the fixed acceptance band
//! `[4.75, 5.25]` is the share of a settlement day the unit earns the
//! unit price; the rest of the day's energy is fined at the same price.
//! The comparison runs twice, once per deviation scenario.
//!
//! # Example
//!
//! ```ignore
//! use imbalance_sim::{CalculatorService, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = CalculatorService::new(ServiceConfig::default());
//!     service.run().await.unwrap();
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{
    CalculationInput, CalculationOutput, DomainError, DomainResult, GaussianDensity,
    HOURS_PER_DAY, INTEGRATION_STEPS, ScenarioOutcome, TOLERANCE_LOWER, TOLERANCE_UPPER,
    compute_profits, in_tolerance_percent, scenario_outcome, trapezoid,
};

pub use application::{
    CalculationError, ComputeProfitsCommand, ComputeProfitsResult, ComputeProfitsUseCase,
};

pub use infrastructure::{AssetConfig, ConfigError, ServerConfig, ServiceConfig};

pub use presentation::{ApiError, AppState, create_router};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The calculator web service
pub struct CalculatorService {
    pub config: ServiceConfig,
}

impl CalculatorService {
    pub fn new(config: ServiceConfig) -> Self {
        CalculatorService { config }
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        let state = Arc::new(AppState::new(self.config.clone()));
        create_router(state)
    }

    /// Run the service
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let router = self.rest_router();

        tracing::info!("{} listening on {}", self.config.name, addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
