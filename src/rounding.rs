
//! Significant-figure rounding of a measured value against its
//! error.

use thiserror::Error;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Cannot round on pivot {pivot}, its order of magnitude is undefined")]
pub struct InvalidPivotError {
  pub pivot: f64,
}

/// Rounds `pivot` to its first significant digit and rounds `value`
/// to the same decimal place. Returns `(rounded_pivot,
/// rounded_value)`, each with the sign of the corresponding input.
///
/// This is the usual presentation of an experimental result with its
/// error: the error keeps exactly one significant digit and the value
/// is given to the same precision.
///
/// Pivots below 1 round both numbers to a number of decimal places;
/// pivots of 1 or more round both to a multiple of the pivot's power
/// of ten. Exact ties round to even.
///
/// Fails if `pivot` is zero or not finite.
pub fn round_on_pivot(pivot: f64, value: f64) -> Result<(f64, f64), InvalidPivotError> {
  if pivot == 0.0 || !pivot.is_finite() {
    return Err(InvalidPivotError { pivot });
  }
  let abs_pivot = pivot.abs();
  let abs_value = value.abs();
  let shift = leading_digit_order(abs_pivot);
  let places = if abs_pivot < 1.0 { 1 - shift } else { -shift };

  let rounded_pivot = round_to_places(abs_pivot, places);
  let rounded_value = round_to_places(abs_value, places);
  trace!("Rounded ({}, {}) to {} decimal places: ({}, {})", pivot, value, places, rounded_pivot, rounded_value);
  Ok((rounded_pivot.copysign(pivot), rounded_value.copysign(value)))
}

/// Base-10 logarithm of a positive number, truncated toward zero.
fn leading_digit_order(x: f64) -> i32 {
  x.log10().trunc() as i32
}

/// Rounds `x` to `places` digits after the decimal point, or to a
/// multiple of `10^(-places)` when `places` is negative. Ties are
/// broken to even, and are detected on the exact value of `x`.
fn round_to_places(x: f64, places: i32) -> f64 {
  if !x.is_finite() {
    return x;
  }
  if places >= 0 {
    round_to_decimal_places(x, places.unsigned_abs() as usize)
  } else {
    round_to_power_of_ten(x, places.unsigned_abs() as i32)
  }
}

/// Decimal formatting works on the exact binary value of `x` and
/// breaks ties to even, and parsing returns the nearest float to the
/// rounded decimal. Scaling by `10^places` cannot do either once the
/// scale stops being exact (above `10^22`) or overflows.
fn round_to_decimal_places(x: f64, places: usize) -> f64 {
  let decimal = format!("{:.*}", places, x);
  // expect safety: a finite float formatted with a fixed number of
  // decimal places is always a valid float literal.
  decimal.parse().expect("Formatted float failed to parse")
}

/// Rounds `x` to the nearest multiple of `10^exponent`.
fn round_to_power_of_ten(x: f64, exponent: i32) -> f64 {
  let scale = 10f64.powi(exponent);
  let scaled = x / scale;
  let residual = (-scaled).mul_add(scale, x);
  // Every float this large is already an integer.
  if !scaled.is_finite() || scaled.abs() >= 2f64.powi(f64::MANTISSA_DIGITS as i32 - 1) {
    return x;
  }
  round_half_even(scaled, residual) * scale
}

/// Rounds `approx` to an integer, where `approx + residual` is the
/// number actually being rounded. The residual only matters when
/// `approx` lands exactly on a tie.
fn round_half_even(approx: f64, residual: f64) -> f64 {
  let floor = approx.floor();
  if approx - floor == 0.5 && residual != 0.0 {
    if residual > 0.0 { floor + 1.0 } else { floor }
  } else {
    approx.round_ties_even()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_pivot_below_one() {
    assert_eq!(round_on_pivot(0.0039937, 34.17520028), Ok((0.004, 34.175)));
    assert_eq!(round_on_pivot(0.0399375, 34.17520028), Ok((0.040, 34.180)));
    assert_eq!(round_on_pivot(0.3993753, 34.17520028), Ok((0.400, 34.200)));
    assert_eq!(round_on_pivot(0.865, 2.12187), Ok((0.9, 2.1)));
    assert_eq!(round_on_pivot(0.008816, 82.30392), Ok((0.009, 82.304)));
    assert_eq!(round_on_pivot(0.03288, 31.41444), Ok((0.03, 31.41)));
  }

  #[test]
  fn test_pivot_above_one() {
    assert_eq!(round_on_pivot(3.9937569, 34.17520028), Ok((4.000, 34.000)));
    assert_eq!(round_on_pivot(39.937539, 34.17520028), Ok((40.00, 30.000)));
    assert_eq!(round_on_pivot(1.0, 12.345), Ok((1.0, 12.0)));
    assert_eq!(round_on_pivot(260.0, 98765.4), Ok((300.0, 98800.0)));
  }

  #[test]
  fn test_sign_preservation() {
    assert_eq!(round_on_pivot(-0.004, -34.175), Ok((-0.004, -34.175)));
    assert_eq!(round_on_pivot(-0.0039937, -34.17520028), Ok((-0.004, -34.175)));
    assert_eq!(round_on_pivot(0.0399375, -34.17520028), Ok((0.04, -34.18)));
    assert_eq!(round_on_pivot(-39.937539, 34.17520028), Ok((-40.0, 30.0)));
  }

  #[test]
  fn test_zero_pivot() {
    assert_eq!(round_on_pivot(0.0, 34.175), Err(InvalidPivotError { pivot: 0.0 }));
    assert!(round_on_pivot(-0.0, 1.0).is_err());
  }

  #[test]
  fn test_non_finite_pivot() {
    assert!(round_on_pivot(f64::NAN, 1.0).is_err());
    assert!(round_on_pivot(f64::INFINITY, 1.0).is_err());
    assert!(round_on_pivot(f64::NEG_INFINITY, 1.0).is_err());
  }

  #[test]
  fn test_zero_value() {
    assert_eq!(round_on_pivot(0.03, 0.0), Ok((0.03, 0.0)));
  }

  #[test]
  fn test_exact_ties_round_to_even() {
    assert_eq!(round_on_pivot(0.25, 0.25), Ok((0.2, 0.2)));
    assert_eq!(round_on_pivot(0.25, 0.75), Ok((0.2, 0.8)));
    assert_eq!(round_on_pivot(5.0, 2.5), Ok((5.0, 2.0)));
    assert_eq!(round_on_pivot(5.0, 3.5), Ok((5.0, 4.0)));
    assert_eq!(round_on_pivot(50.0, 25.0), Ok((50.0, 20.0)));
    assert_eq!(round_on_pivot(50.0, 35.0), Ok((50.0, 40.0)));
  }

  #[test]
  fn test_near_ties_use_exact_value() {
    // 0.45 is stored as slightly more than 0.45, and 0.35 as slightly
    // less than 0.35.
    assert_eq!(round_on_pivot(0.35, 0.45), Ok((0.3, 0.5)));
  }

  #[test]
  fn test_huge_value_on_tiny_pivot() {
    let (_, value) = round_on_pivot(1e-300, 1e300).unwrap();
    assert_eq!(value, 1e300);
  }

  #[test]
  fn test_tiny_pivots() {
    assert_eq!(round_on_pivot(3.3e-25, 1.2345e-23), Ok((3e-25, 1.23e-23)));
    assert_eq!(round_on_pivot(7.7e-30, 4.44e-28), Ok((8e-30, 4.44e-28)));
    assert_eq!(round_on_pivot(-2.6e-100, 7.24e-99), Ok((-3e-100, 7.2e-99)));
  }

  #[test]
  fn test_subnormal_pivot() {
    assert_eq!(round_on_pivot(1.234e-310, 1.0), Ok((1e-310, 1.0)));
    assert_eq!(round_on_pivot(5e-324, 0.0), Ok((5e-324, 0.0)));
  }

  #[test]
  fn test_round_to_decimal_places() {
    assert_eq!(round_to_places(2.675, 2), 2.67);
    assert_eq!(round_to_places(0.125, 2), 0.12);
    assert_eq!(round_to_places(0.375, 2), 0.38);
    assert_eq!(round_to_places(34.17520028, 0), 34.0);
  }

  #[test]
  fn test_leading_digit_order() {
    assert_eq!(leading_digit_order(0.0039937), -2);
    assert_eq!(leading_digit_order(0.865), 0);
    assert_eq!(leading_digit_order(3.99), 0);
    assert_eq!(leading_digit_order(39.9), 1);
    assert_eq!(leading_digit_order(1000.0), 3);
  }
}
