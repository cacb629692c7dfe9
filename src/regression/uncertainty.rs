
//! Standard errors of least-squares regression coefficients.

use super::{InvalidRegressionError, variance_denominator};
use crate::util::{mean, mean_of_squares};

use serde::{Serialize, Deserialize};
use log::debug;

/// Standard errors of the coefficients of a
/// [`RegressionLine`](super::RegressionLine).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientErrors {
  pub slope: f64,
  pub intercept: f64,
}

/// Computes the standard errors `(sigma_slope, sigma_intercept)` of a
/// least-squares line through the points `(x[i], y[i])` with the
/// given slope.
///
/// ```text
/// D           = mean(x²) - mean(x)²
/// sigma_slope = sqrt((mean(y²) - mean(y)²) / D - slope²) / sqrt(n)
/// sigma_shift = sigma_slope * sqrt(D)
/// ```
///
/// Panics if `x` and `y` have different lengths.
pub fn least_squares_error(x: &[f64], y: &[f64], slope: f64) -> Result<CoefficientErrors, InvalidRegressionError> {
  assert!(x.len() == y.len(), "Expected two vectors of equal length");
  let n = x.len();
  let denominator = variance_denominator(x)?;
  let y_variance = mean_of_squares(y) - mean(y).powi(2);
  let mut radicand = y_variance / denominator - slope * slope;
  if !radicand.is_finite() {
    return Err(InvalidRegressionError::NonFiniteInput);
  }
  if radicand < 0.0 {
    // Exactly collinear data cancels to zero only up to rounding
    // error in the two terms.
    let tolerance = (slope * slope).max(y_variance / denominator) * f64::EPSILON.sqrt();
    if -radicand > tolerance {
      return Err(InvalidRegressionError::InconsistentSlope { slope, radicand });
    }
    radicand = 0.0;
  }
  let sigma_slope = radicand.sqrt() / (n as f64).sqrt();
  let sigma_intercept = sigma_slope * denominator.sqrt();
  debug!("Coefficient errors over {} points: sigma_slope = {}, sigma_intercept = {}", n, sigma_slope, sigma_intercept);
  Ok(CoefficientErrors { slope: sigma_slope, intercept: sigma_intercept })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::regression::RegressionLine;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_collinear_data_has_no_error() {
    let x = [0.0, 1.0, 2.0, 3.0];
    let y = [1.0, 3.0, 5.0, 7.0];
    let errors = least_squares_error(&x, &y, 2.0).unwrap();
    assert_eq!(errors, CoefficientErrors { slope: 0.0, intercept: 0.0 });
  }

  #[test]
  fn test_nearly_collinear_data_has_tiny_error() {
    let x = [0.1, 0.2, 0.3, 0.4, 0.5];
    let y: Vec<f64> = x.iter().map(|x| 3.0 * x - 0.7).collect();
    let line = RegressionLine::fit(&x, &y).unwrap();
    let errors = least_squares_error(&x, &y, line.slope).unwrap();
    assert_abs_diff_eq!(errors.slope, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(errors.intercept, 0.0, epsilon = 1e-6);
  }

  #[test]
  fn test_noisy_data() {
    // Fitted line is y = x with residuals (0.1, -0.2, 0.1).
    let x = [1.0, 2.0, 3.0];
    let y = [1.1, 1.8, 3.1];
    let errors = least_squares_error(&x, &y, 1.0).unwrap();
    // D = 2/3, var(y) = 0.6866..., radicand = 0.03
    assert_abs_diff_eq!(errors.slope, 0.1, epsilon = 1e-9);
    assert_abs_diff_eq!(errors.intercept, 0.1 * (2.0_f64 / 3.0).sqrt(), epsilon = 1e-9);
  }

  #[test]
  fn test_errors_are_non_negative() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.3, 0.9, 2.4, 2.8, 4.1];
    let line = RegressionLine::fit(&x, &y).unwrap();
    let errors = least_squares_error(&x, &y, line.slope).unwrap();
    assert!(errors.slope > 0.0);
    assert!(errors.intercept > 0.0);
  }

  #[test]
  fn test_constant_x() {
    let err = least_squares_error(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0], 1.0).unwrap_err();
    assert_eq!(err, InvalidRegressionError::ZeroVariance);
  }

  #[test]
  fn test_inconsistent_slope() {
    let err = least_squares_error(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0], 3.0).unwrap_err();
    assert_eq!(err, InvalidRegressionError::InconsistentSlope { slope: 3.0, radicand: -5.0 });
  }

  #[test]
  #[should_panic(expected = "Expected two vectors of equal length")]
  fn test_length_mismatch() {
    let _ = least_squares_error(&[1.0, 2.0], &[1.0, 2.0, 3.0], 1.0);
  }
}
