
//! Various utility functions.

pub mod point;

use thiserror::Error;

/// Two sequences which were meant to be paired element-wise have
/// different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Expected sequences of equal length, got {expected} and {actual}")]
pub struct LengthError {
  pub expected: usize,
  pub actual: usize,
}

impl LengthError {
  /// Succeeds if the two slices have equal length.
  pub fn check<T, S>(left: &[T], right: &[S]) -> Result<(), LengthError> {
    if left.len() == right.len() {
      Ok(())
    } else {
      Err(LengthError { expected: left.len(), actual: right.len() })
    }
  }
}

/// Zips two arrays of the same length together, using the given
/// function.
pub fn zip_with<const C: usize, T, S, U, F>(left: [T; C], right: [S; C], mut f: F) -> [U; C]
where F: FnMut(T, S) -> U {
  let res = left.into_iter().zip(right)
    .map(|(x, y)| f(x, y))
    .collect::<Vec<_>>()
    .try_into();
  match res {
    Ok(res) => res,
    Err(_) => panic!("Invalid array length"),
  }
}

/// Arithmetic mean of a slice. Returns NaN on an empty slice.
pub fn mean(values: &[f64]) -> f64 {
  values.iter().sum::<f64>() / values.len() as f64
}

/// Arithmetic mean of the squares of the values in a slice.
pub fn mean_of_squares(values: &[f64]) -> f64 {
  values.iter().map(|x| x * x).sum::<f64>() / values.len() as f64
}
