use axum::Json;

use crate::application::{CalculationError, ComputeProfitsCommand, ComputeProfitsUseCase};
use crate::presentation::rest::{ApiError, dto::*};

/// GET /ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {})
}

/// POST /calculator
pub async fn calculate(
    Json(req): Json<CalculationRequest>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let use_case = ComputeProfitsUseCase;

    let result = use_case
        .execute(ComputeProfitsCommand {
            power: req.power,
            price_per_unit: req.electricity,
            deviation_before: req.deviation1,
            deviation_after: req.deviation2,
        })
        .map_err(|e| match e {
            CalculationError::InvalidInput(inner) => {
                ApiError::invalid_parameter(inner.to_string())
            }
            CalculationError::Numeric(inner) => {
                tracing::error!("calculation anomaly: {}", inner);
                ApiError::internal(inner.to_string())
            }
        })?;

    Ok(Json(CalculationResponse {
        profit_before: result.profit_before,
        profit_after: result.profit_after,
    }))
}
