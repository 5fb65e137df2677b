//! Trapezoidal integration of the output-power density.
//!
//! The acceptance band is fixed policy: ±0.25 around an assumed nominal
//! power of 5.0. It does not scale with the supplied power input, so the
//! model is only meaningful for units operating near that setpoint. Known
//! limitation, kept for compatibility with the settlement rules it encodes.

use crate::domain::density::GaussianDensity;
use crate::domain::error::{DomainError, DomainResult};

/// Lower edge of the acceptance band.
pub const TOLERANCE_LOWER: f64 = 4.75;
/// Upper edge of the acceptance band.
pub const TOLERANCE_UPPER: f64 = 5.25;
/// Subinterval count for the composite trapezoidal rule.
pub const INTEGRATION_STEPS: u32 = 100_000;

/// Composite trapezoidal rule over `[lower, upper]` with `steps`
/// subintervals. Single pass, no adaptive refinement; the fixed step count
/// trades a small discretization error for predictable runtime.
pub fn trapezoid<F>(f: F, lower: f64, upper: f64, steps: u32) -> DomainResult<f64>
where
    F: Fn(f64) -> f64,
{
    if lower > upper {
        return Err(DomainError::InvalidBand { lower, upper });
    }

    let h = (upper - lower) / f64::from(steps);
    let mut sum = (f(lower) + f(upper)) / 2.0;
    for i in 1..steps {
        sum += f(lower + f64::from(i) * h);
    }

    Ok(h * sum)
}

/// Share of time the output stays inside the acceptance band, in percent.
///
/// Integrates the Gaussian density of output around `power` over
/// `[TOLERANCE_LOWER, TOLERANCE_UPPER]` and scales the probability mass
/// to a percentage.
pub fn in_tolerance_percent(power: f64, sigma: f64) -> DomainResult<f64> {
    let density = GaussianDensity::new(power, sigma)?;
    let integral = trapezoid(
        |x| density.eval(x),
        TOLERANCE_LOWER,
        TOLERANCE_UPPER,
        INTEGRATION_STEPS,
    )?;

    let percent = integral * 100.0;
    if !percent.is_finite() {
        return Err(DomainError::NumericAnomaly(format!(
            "in-tolerance share is not finite for power={}, sigma={}",
            power, sigma
        )));
    }
    Ok(percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_density_integrates_to_one() {
        // mean +/- 10 sigma captures essentially all probability mass
        let density = GaussianDensity::new(5.0, 0.3).unwrap();
        let integral = trapezoid(|x| density.eval(x), 5.0 - 3.0, 5.0 + 3.0, 100_000).unwrap();
        assert_relative_eq!(integral, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_tiny_sigma_concentrates_mass_in_band() {
        let pct = in_tolerance_percent(5.0, 0.01).unwrap();
        assert!(pct > 99.999, "got {}", pct);
        assert!(pct <= 100.0 + 1e-9);
    }

    #[test]
    fn test_percent_decreases_as_sigma_widens() {
        let sigmas = [0.05, 0.1, 0.2, 0.3, 0.5, 1.0];
        let percents: Vec<f64> = sigmas
            .iter()
            .map(|&s| in_tolerance_percent(5.0, s).unwrap())
            .collect();

        for pair in percents.windows(2) {
            assert!(
                pair[0] > pair[1],
                "expected strictly decreasing, got {:?}",
                percents
            );
        }
    }

    #[test]
    fn test_percent_stays_in_valid_range() {
        for sigma in [0.01, 0.1, 0.5, 2.0, 10.0] {
            let pct = in_tolerance_percent(5.0, sigma).unwrap();
            assert!(pct > 0.0);
            assert!(pct <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn test_known_value_against_normal_cdf() {
        // For power=5.0, sigma=0.25 the band is +/- 1 sigma: ~68.27%
        let pct = in_tolerance_percent(5.0, 0.25).unwrap();
        assert_relative_eq!(pct, 68.268949, epsilon = 1e-3);
    }

    #[test]
    fn test_inverted_band_is_rejected() {
        let density = GaussianDensity::new(5.0, 0.3).unwrap();
        let err = trapezoid(|x| density.eval(x), 5.25, 4.75, 100).unwrap_err();
        assert!(matches!(err, DomainError::InvalidBand { .. }));
    }

    #[test]
    fn test_invalid_sigma_propagates() {
        assert!(matches!(
            in_tolerance_percent(5.0, 0.0),
            Err(DomainError::InvalidDeviation(_))
        ));
        assert!(matches!(
            in_tolerance_percent(5.0, -1.0),
            Err(DomainError::InvalidDeviation(_))
        ));
    }

    #[test]
    fn test_integration_is_deterministic() {
        let a = in_tolerance_percent(5.0, 0.3).unwrap();
        let b = in_tolerance_percent(5.0, 0.3).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
