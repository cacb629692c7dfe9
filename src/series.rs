
//! A sequence of measurements sharing a single SI dimension.

use crate::units::dimension::Dimension;
use crate::units::quantity::{Quantity, Operand};

use num::One;
use num::pow::Pow;
use itertools::Itertools;
use approx::{AbsDiffEq, RelativeEq};
use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// An ordered, fixed-length sequence of magnitudes, all of which are
/// measured in the same [`Dimension`].
///
/// Series are never modified in place; every arithmetic operation
/// produces a new series of the same length.
///
/// Unlike [`Quantity`](crate::units::quantity::Quantity), a series
/// offers no addition or subtraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
  dimension: Dimension,
  values: Vec<f64>,
}

impl Series {
  /// Constructs a series. The dimension can be given directly or as a
  /// [`Quantity`](crate::units::quantity::Quantity), in which case
  /// the quantity's magnitude is discarded.
  pub fn new<D, I>(dimension: D, values: I) -> Self
  where D: Into<Dimension>,
        I: IntoIterator,
        I::Item: Into<f64> {
    Self {
      dimension: dimension.into(),
      values: values.into_iter().map(Into::into).collect(),
    }
  }

  pub fn dimensionless<I>(values: I) -> Self
  where I: IntoIterator,
        I::Item: Into<f64> {
    Self::new(Dimension::one(), values)
  }

  pub fn dimension(&self) -> Dimension {
    self.dimension
  }

  pub fn values(&self) -> &[f64] {
    &self.values
  }

  pub fn into_values(self) -> Vec<f64> {
    self.values
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
    self.values.iter().copied()
  }

  pub fn multiply(&self, rhs: impl Into<Operand>) -> Self {
    let rhs = rhs.into();
    let k = rhs.magnitude();
    Self {
      dimension: self.dimension.multiply(&rhs.dimension()),
      values: self.values.iter().map(|x| x * k).collect(),
    }
  }

  pub fn divide(&self, rhs: impl Into<Operand>) -> Self {
    let rhs = rhs.into();
    let k = rhs.magnitude();
    Self {
      dimension: self.dimension.divide(&rhs.dimension()),
      values: self.values.iter().map(|x| x / k).collect(),
    }
  }

  pub fn power(&self, exponent: i32) -> Self {
    Self {
      dimension: self.dimension.power(i64::from(exponent)),
      values: self.values.iter().map(|x| x.powi(exponent)).collect(),
    }
  }
}

impl<T: Into<Operand>> Mul<T> for Series {
  type Output = Series;

  fn mul(self, rhs: T) -> Series {
    self.multiply(rhs)
  }
}

impl<T: Into<Operand>> Mul<T> for &Series {
  type Output = Series;

  fn mul(self, rhs: T) -> Series {
    self.multiply(rhs)
  }
}

impl<T: Into<Operand>> Div<T> for Series {
  type Output = Series;

  fn div(self, rhs: T) -> Series {
    self.divide(rhs)
  }
}

impl<T: Into<Operand>> Div<T> for &Series {
  type Output = Series;

  fn div(self, rhs: T) -> Series {
    self.divide(rhs)
  }
}

impl Mul<Series> for f64 {
  type Output = Series;

  fn mul(self, rhs: Series) -> Series {
    rhs.multiply(self)
  }
}

impl Mul<Series> for i32 {
  type Output = Series;

  fn mul(self, rhs: Series) -> Series {
    rhs.multiply(self)
  }
}

/// Scales every element by the quantity's magnitude and combines the
/// dimensions, exactly as `series * quantity` does.
impl Mul<Series> for Quantity {
  type Output = Series;

  fn mul(self, rhs: Series) -> Series {
    rhs.multiply(self)
  }
}

impl Mul<&Series> for Quantity {
  type Output = Series;

  fn mul(self, rhs: &Series) -> Series {
    rhs.multiply(self)
  }
}

impl Pow<i32> for Series {
  type Output = Series;

  fn pow(self, exponent: i32) -> Series {
    self.power(exponent)
  }
}

impl Pow<i32> for &Series {
  type Output = Series;

  fn pow(self, exponent: i32) -> Series {
    self.power(exponent)
  }
}

impl AbsDiffEq for Series {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Series, epsilon: f64) -> bool {
    self.dimension == other.dimension &&
      self.values.len() == other.values.len() &&
      self.values.iter().zip(&other.values).all(|(a, b)| a.abs_diff_eq(b, epsilon))
  }
}

impl RelativeEq for Series {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Series, epsilon: f64, max_relative: f64) -> bool {
    self.dimension == other.dimension &&
      self.values.len() == other.values.len() &&
      self.values.iter().zip(&other.values).all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
  }
}

impl Display for Series {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "[{}]", self.values.iter().join(", "))?;
    if !self.dimension.is_one() {
      write!(f, " {}", self.dimension)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::units::dimension::BaseDimension;
  use crate::units::si;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_construct_from_quantity_discards_magnitude() {
    let series = Series::new(Quantity::new(9.81, BaseDimension::Length.into()), [1.0, 2.0]);
    assert_eq!(series.dimension(), Dimension::from(BaseDimension::Length));
    assert_eq!(series.values(), &[1.0, 2.0]);
  }

  #[test]
  fn test_construct_coerces_to_float() {
    let series = Series::new(si::kilogram(), [1, 4, -7]);
    assert_eq!(series.values(), &[1.0, 4.0, -7.0]);
    let series = Series::new(si::kilogram(), vec![0.5_f32, 2.0_f32]);
    assert_eq!(series.values(), &[0.5, 2.0]);
  }

  #[test]
  fn test_multiply_by_scalar() {
    let series = Series::new(si::second(), [0.2, 0.5, 0.9]);
    assert_eq!(series * 2.0, Series::new(si::second(), [0.4, 1.0, 1.8]));
  }

  #[test]
  fn test_divide_by_scalar() {
    let series = Series::new(si::meter() * si::kilogram(), [0.6, 27.0]);
    assert_abs_diff_eq!(series / 3.0, Series::new(si::meter() * si::kilogram(), [0.2, 9.0]));
  }

  #[test]
  fn test_power() {
    let series = Series::new(si::kilogram(), [1, 4]);
    assert_eq!(series.pow(2), Series::new(si::kilogram().pow(2), [1, 16]));
  }

  #[test]
  fn test_multiply_by_quantity() {
    let times = Series::new(si::second(), [1.0, 2.0, 4.0]);
    let speed = Quantity::new(3.0, BaseDimension::Length / BaseDimension::Time);
    let distances = times.multiply(speed);
    assert_eq!(distances, Series::new(si::meter(), [3.0, 6.0, 12.0]));
  }

  #[test]
  fn test_divide_by_quantity() {
    let distances = Series::new(si::meter(), [3.0, 6.0]);
    let rate = distances.divide(Quantity::new(0.5, BaseDimension::Time.into()));
    assert_eq!(rate, Series::new(si::meter() / si::second(), [6.0, 12.0]));
  }

  #[test]
  fn test_multiply_then_divide_round_trips() {
    let original = Series::new(si::ampere(), [0.1, 0.7, 3.3, -12.25, 1e-6]);
    for k in [3.0, 0.1, -7.5, 1e5] {
      let result = original.multiply(k).divide(k);
      assert_eq!(result.dimension(), original.dimension());
      assert_abs_diff_eq!(result, original, epsilon = 1e-12);
    }
  }

  #[test]
  fn test_operations_preserve_length() {
    let series = Series::new(si::mole(), [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(series.multiply(2.0).len(), 4);
    assert_eq!(series.divide(si::second()).len(), 4);
    assert_eq!(series.power(3).len(), 4);
  }

  #[test]
  fn test_equality_depends_on_dimension() {
    let a = Series::new(si::second(), [1.0, 2.0]);
    assert_eq!(a, Series::new(si::second(), [1.0, 2.0]));
    assert_ne!(a, Series::new(si::meter(), [1.0, 2.0]));
  }

  #[test]
  fn test_equality_depends_on_length() {
    let a = Series::new(si::second(), [1.0, 2.0]);
    assert_ne!(a, Series::new(si::second(), [1.0, 2.0, 3.0]));
    assert!(!a.abs_diff_eq(&Series::new(si::second(), [1.0]), 1.0));
  }

  #[test]
  fn test_operator_forms_on_references() {
    let series = Series::dimensionless([2.0, 4.0]);
    assert_eq!(&series * 2.0, Series::dimensionless([4.0, 8.0]));
    assert_eq!(&series / 2.0, Series::dimensionless([1.0, 2.0]));
    assert_eq!(0.5 * series.clone(), Series::dimensionless([1.0, 2.0]));
    assert_eq!((&series).pow(-1), Series::dimensionless([0.5, 0.25]));
  }

  #[test]
  fn test_left_hand_operands() {
    let series = Series::new(si::meter(), [1.0, 2.0]);
    assert_eq!(si::second() * series.clone(), Series::new(si::meter() * si::second(), [1.0, 2.0]));
    assert_eq!(2 * series.clone(), Series::new(si::meter(), [2.0, 4.0]));
    let mass = Quantity::new(3.0, BaseDimension::Mass.into());
    assert_eq!(mass * &series, series.multiply(mass));
    assert_eq!(mass * &series, Series::new(si::meter() * si::kilogram(), [3.0, 6.0]));
  }

  #[test]
  fn test_display() {
    assert_eq!(Series::new(si::second(), [0.5, 2.0]).to_string(), "[0.5, 2] s");
    assert_eq!(Series::dimensionless([1.0]).to_string(), "[1]");
  }

  #[test]
  fn test_empty_series() {
    let series = Series::dimensionless(Vec::<f64>::new());
    assert!(series.is_empty());
    assert!(series.multiply(2.0).is_empty());
  }
}
