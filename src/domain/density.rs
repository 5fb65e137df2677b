use std::f64::consts::PI;

use crate::domain::error::{DomainError, DomainResult};

/// Normal distribution of generated power around its setpoint.
///
/// `sigma` is the standard deviation of output; smaller values mean
/// tighter control of the unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianDensity {
    mean: f64,
    sigma: f64,
}

impl GaussianDensity {
    /// Construct a density. Fails if `sigma` is not strictly positive or
    /// either parameter is non-finite; evaluating with `sigma == 0` would
    /// divide by zero and silently poison everything downstream with NaN.
    pub fn new(mean: f64, sigma: f64) -> DomainResult<Self> {
        if !mean.is_finite() {
            return Err(DomainError::InvalidPower(mean));
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(DomainError::InvalidDeviation(sigma));
        }
        Ok(GaussianDensity { mean, sigma })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Probability density at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let norm = 1.0 / (self.sigma * (2.0 * PI).sqrt());
        let z = (x - self.mean) / self.sigma;
        norm * (-0.5 * z * z).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_density_is_symmetric_around_mean() {
        let density = GaussianDensity::new(5.0, 0.3).unwrap();
        for d in [0.01, 0.1, 0.25, 1.0, 3.0] {
            assert_relative_eq!(
                density.eval(5.0 - d),
                density.eval(5.0 + d),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_density_peaks_at_mean() {
        let density = GaussianDensity::new(5.0, 0.3).unwrap();
        let peak = density.eval(5.0);
        assert!(peak > density.eval(4.9));
        assert!(peak > density.eval(5.1));
        // peak of N(mu, sigma) is 1/(sigma*sqrt(2*pi))
        assert_relative_eq!(
            peak,
            1.0 / (0.3 * (2.0 * PI).sqrt()),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_sigma_is_rejected() {
        let err = GaussianDensity::new(5.0, 0.0).unwrap_err();
        assert_eq!(err, DomainError::InvalidDeviation(0.0));
    }

    #[test]
    fn test_negative_sigma_is_rejected() {
        assert!(matches!(
            GaussianDensity::new(5.0, -0.5),
            Err(DomainError::InvalidDeviation(_))
        ));
    }

    #[test]
    fn test_non_finite_parameters_are_rejected() {
        assert!(GaussianDensity::new(f64::NAN, 0.3).is_err());
        assert!(GaussianDensity::new(5.0, f64::INFINITY).is_err());
    }
}
