use serde::{Deserialize, Serialize};

/// Request to compare profit before and after a control improvement.
///
/// Field names are fixed by the browser front-end: `electricity` is the
/// price per unit of energy, `deviation1`/`deviation2` are the output
/// standard deviations before and after the improvement.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CalculationRequest {
    pub power: f64,
    pub electricity: f64,
    pub deviation1: f64,
    pub deviation2: f64,
}

/// Calculation response
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub profit_before: f64,
    pub profit_after: f64,
}

/// Empty ping response
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PingResponse {}

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: i32,
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        ErrorResponse {
            code,
            msg: msg.into(),
        }
    }
}
