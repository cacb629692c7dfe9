
use crate::units::quantity::DimensionMismatchError;
use crate::units::locale::UnknownLocaleError;
use crate::regression::InvalidRegressionError;
use crate::rounding::InvalidPivotError;
use crate::util::LengthError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  DimensionMismatch(#[from] DimensionMismatchError),
  #[error("{0}")]
  InvalidRegression(#[from] InvalidRegressionError),
  #[error("{0}")]
  InvalidPivot(#[from] InvalidPivotError),
  #[error("{0}")]
  LengthMismatch(#[from] LengthError),
  #[error("{0}")]
  UnknownLocale(#[from] UnknownLocaleError),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_message_is_forwarded() {
    let err = Error::from(LengthError { expected: 4, actual: 3 });
    assert_eq!(err.to_string(), "Expected sequences of equal length, got 4 and 3");
    let err = Error::from(InvalidRegressionError::ZeroVariance);
    assert_eq!(err.to_string(), "X values have zero variance");
  }
}
