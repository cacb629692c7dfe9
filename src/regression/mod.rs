
//! Linear least-squares regression and the statistical error of its
//! coefficients.

pub mod line;
pub mod uncertainty;

pub use line::RegressionLine;
pub use uncertainty::{CoefficientErrors, least_squares_error};

use crate::util::{mean, mean_of_squares};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum InvalidRegressionError {
  #[error("Expected at least two data points, got {0}")]
  TooFewPoints(usize),
  #[error("X values have zero variance")]
  ZeroVariance,
  #[error("Input values are not finite")]
  NonFiniteInput,
  #[error("Slope {slope} is inconsistent with the variance of the data")]
  InconsistentSlope { slope: f64, radicand: f64 },
}

/// `mean(x²) - mean(x)²`, the (biased) variance of `x`. Fails if
/// there are fewer than two values or if the variance is zero up to
/// rounding error.
pub(crate) fn variance_denominator(x: &[f64]) -> Result<f64, InvalidRegressionError> {
  if x.len() < 2 {
    return Err(InvalidRegressionError::TooFewPoints(x.len()));
  }
  let mean_sq = mean_of_squares(x);
  let denominator = mean_sq - mean(x).powi(2);
  // Constant inputs cancel to zero, or to a few ulps of mean(x²)
  // either side of it.
  let tolerance = mean_sq.abs() * f64::EPSILON * x.len() as f64;
  if !denominator.is_finite() {
    return Err(InvalidRegressionError::NonFiniteInput);
  }
  if denominator <= tolerance {
    return Err(InvalidRegressionError::ZeroVariance);
  }
  Ok(denominator)
}
