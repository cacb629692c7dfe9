
//! Fitting a straight line to a set of points.

use super::{InvalidRegressionError, variance_denominator};
use crate::util::mean;

use serde::{Serialize, Deserialize};
use log::debug;

/// The coefficients of the line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionLine {
  pub slope: f64,
  pub intercept: f64,
}

impl RegressionLine {
  pub fn new(slope: f64, intercept: f64) -> Self {
    Self { slope, intercept }
  }

  /// Ordinary least-squares fit of a first-degree polynomial to the
  /// points `(x[i], y[i])`.
  ///
  /// Panics if `x` and `y` have different lengths.
  pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, InvalidRegressionError> {
    assert!(x.len() == y.len(), "Expected two vectors of equal length");
    variance_denominator(x)?;

    let x_mean = mean(x);
    let y_mean = mean(y);
    let (sxx, sxy) = x.iter().zip(y).fold((0.0, 0.0), |(sxx, sxy), (xi, yi)| {
      let dx = xi - x_mean;
      (sxx + dx * dx, sxy + dx * (yi - y_mean))
    });
    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    if !slope.is_finite() || !intercept.is_finite() {
      return Err(InvalidRegressionError::NonFiniteInput);
    }
    debug!("Fitted line to {} points: slope = {}, intercept = {}", x.len(), slope, intercept);
    Ok(Self { slope, intercept })
  }

  pub fn predict(&self, x: f64) -> f64 {
    self.slope * x + self.intercept
  }
}
