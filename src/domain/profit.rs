//! Profit model for generation imbalances.
//!
//! Energy delivered inside the acceptance band earns the unit price;
//! energy outside it is fined at the same unit price. The model compares
//! one settlement day before and after a control improvement that
//! tightens the output deviation.

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::quadrature;

/// Operating hours assumed per settlement day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Inputs for one before/after comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    /// Nominal output level of the unit.
    pub power: f64,
    /// Monetary value of one unit of energy.
    pub price_per_unit: f64,
    /// Standard deviation of output before the improvement.
    pub deviation_before: f64,
    /// Standard deviation of output after the improvement.
    pub deviation_after: f64,
}

/// Net profit for each scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationOutput {
    pub profit_before: f64,
    pub profit_after: f64,
}

/// Breakdown of a single scenario evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioOutcome {
    /// Rounded share of time spent inside the acceptance band, 0..=100.
    pub in_tolerance_percent: f64,
    pub revenue: f64,
    pub penalty: f64,
    pub net_profit: f64,
}

/// Evaluate one scenario at the given deviation.
///
/// The in-tolerance share is rounded to a whole percent (half away from
/// zero) before the financial terms are derived. The rounding is part of
/// the settlement rules, not a display convenience.
pub fn scenario_outcome(
    power: f64,
    price_per_unit: f64,
    deviation: f64,
) -> DomainResult<ScenarioOutcome> {
    if !price_per_unit.is_finite() {
        return Err(DomainError::InvalidPrice(price_per_unit));
    }

    let pct = quadrature::in_tolerance_percent(power, deviation)?.round();
    let daily_energy = power * HOURS_PER_DAY;

    let revenue = daily_energy * pct / 100.0 * price_per_unit;
    let penalty = daily_energy * (1.0 - pct / 100.0) * price_per_unit;
    let net_profit = revenue - penalty;

    if !net_profit.is_finite() {
        return Err(DomainError::NumericAnomaly(format!(
            "net profit is not finite for power={}, price={}, deviation={}",
            power, price_per_unit, deviation
        )));
    }

    Ok(ScenarioOutcome {
        in_tolerance_percent: pct,
        revenue,
        penalty,
        net_profit,
    })
}

/// Run both scenarios of `input` and collect the net profits.
///
/// Pure and deterministic: identical inputs produce bit-identical outputs.
/// The two evaluations are independent of each other.
pub fn compute_profits(input: &CalculationInput) -> DomainResult<CalculationOutput> {
    let before = scenario_outcome(input.power, input.price_per_unit, input.deviation_before)?;
    let after = scenario_outcome(input.power, input.price_per_unit, input.deviation_after)?;

    Ok(CalculationOutput {
        profit_before: before.net_profit,
        profit_after: after.net_profit,
    })
}
