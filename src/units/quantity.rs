
use super::dimension::{Dimension, BaseDimension};

use thiserror::Error;
use num::One;
use num::pow::Pow;
use approx::{AbsDiffEq, RelativeEq};
use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};
use std::ops::{Mul, Div};

/// A scalar magnitude, tagged with a [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
  magnitude: f64,
  dimension: Dimension,
}

/// The right-hand side of a multiplication or division: either a
/// bare number, which leaves the dimension alone, or a dimensioned
/// [`Quantity`], whose dimension is combined with the left-hand
/// side's.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
  Scalar(f64),
  Dimensioned(Quantity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditiveOp {
  Add,
  Subtract,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot {operation} quantities of unequal dimensions [{left}] and [{right}]")]
pub struct DimensionMismatchError {
  pub operation: AdditiveOp,
  pub left: Dimension,
  pub right: Dimension,
}

impl Quantity {
  pub fn new(magnitude: f64, dimension: Dimension) -> Self {
    Self { magnitude, dimension }
  }

  /// A dimensionless quantity.
  pub fn scalar(magnitude: f64) -> Self {
    Self::new(magnitude, Dimension::one())
  }

  /// The quantity of magnitude 1 with the given dimension.
  pub fn unit(dimension: impl Into<Dimension>) -> Self {
    Self::new(1.0, dimension.into())
  }

  pub fn magnitude(&self) -> f64 {
    self.magnitude
  }

  pub fn dimension(&self) -> Dimension {
    self.dimension
  }

  pub fn multiply(&self, rhs: impl Into<Operand>) -> Self {
    match rhs.into() {
      Operand::Scalar(k) => Self::new(self.magnitude * k, self.dimension),
      Operand::Dimensioned(q) => Self::new(self.magnitude * q.magnitude, self.dimension.multiply(&q.dimension)),
    }
  }

  pub fn divide(&self, rhs: impl Into<Operand>) -> Self {
    match rhs.into() {
      Operand::Scalar(k) => Self::new(self.magnitude / k, self.dimension),
      Operand::Dimensioned(q) => Self::new(self.magnitude / q.magnitude, self.dimension.divide(&q.dimension)),
    }
  }

  pub fn add(&self, rhs: &Quantity) -> Result<Self, DimensionMismatchError> {
    self.check_same_dimension(rhs, AdditiveOp::Add)?;
    Ok(Self::new(self.magnitude + rhs.magnitude, self.dimension))
  }

  pub fn subtract(&self, rhs: &Quantity) -> Result<Self, DimensionMismatchError> {
    self.check_same_dimension(rhs, AdditiveOp::Subtract)?;
    Ok(Self::new(self.magnitude - rhs.magnitude, self.dimension))
  }

  pub fn power(&self, exponent: i32) -> Self {
    Self::new(self.magnitude.powi(exponent), self.dimension.power(i64::from(exponent)))
  }

  fn check_same_dimension(&self, rhs: &Quantity, operation: AdditiveOp) -> Result<(), DimensionMismatchError> {
    if self.dimension == rhs.dimension {
      Ok(())
    } else {
      Err(DimensionMismatchError {
        operation,
        left: self.dimension,
        right: rhs.dimension,
      })
    }
  }
}

impl Operand {
  pub fn magnitude(&self) -> f64 {
    match self {
      Operand::Scalar(k) => *k,
      Operand::Dimensioned(q) => q.magnitude,
    }
  }

  /// The dimension contributed by this operand. Bare scalars are
  /// dimensionless.
  pub fn dimension(&self) -> Dimension {
    match self {
      Operand::Scalar(_) => Dimension::one(),
      Operand::Dimensioned(q) => q.dimension,
    }
  }
}

impl From<f64> for Operand {
  fn from(k: f64) -> Self {
    Operand::Scalar(k)
  }
}

impl From<i32> for Operand {
  fn from(k: i32) -> Self {
    Operand::Scalar(f64::from(k))
  }
}

impl From<Quantity> for Operand {
  fn from(q: Quantity) -> Self {
    Operand::Dimensioned(q)
  }
}

impl From<&Quantity> for Operand {
  fn from(q: &Quantity) -> Self {
    Operand::Dimensioned(*q)
  }
}

/// Discards the magnitude and keeps only the dimension.
impl From<Quantity> for Dimension {
  fn from(q: Quantity) -> Self {
    q.dimension
  }
}

impl From<&Quantity> for Dimension {
  fn from(q: &Quantity) -> Self {
    q.dimension
  }
}

impl From<BaseDimension> for Quantity {
  fn from(base: BaseDimension) -> Self {
    Quantity::unit(base)
  }
}

impl Display for AdditiveOp {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      AdditiveOp::Add => write!(f, "add"),
      AdditiveOp::Subtract => write!(f, "subtract"),
    }
  }
}

impl Display for Quantity {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    if self.dimension.is_one() {
      write!(f, "{}", self.magnitude)
    } else {
      write!(f, "{} {}", self.magnitude, self.dimension)
    }
  }
}

impl Mul<f64> for Quantity {
  type Output = Quantity;

  fn mul(self, rhs: f64) -> Quantity {
    self.multiply(rhs)
  }
}

impl Mul<i32> for Quantity {
  type Output = Quantity;

  fn mul(self, rhs: i32) -> Quantity {
    self.multiply(rhs)
  }
}

impl Mul for Quantity {
  type Output = Quantity;

  fn mul(self, rhs: Quantity) -> Quantity {
    self.multiply(rhs)
  }
}

impl Mul<&Quantity> for Quantity {
  type Output = Quantity;

  fn mul(self, rhs: &Quantity) -> Quantity {
    self.multiply(rhs)
  }
}

impl Div<f64> for Quantity {
  type Output = Quantity;

  fn div(self, rhs: f64) -> Quantity {
    self.divide(rhs)
  }
}

impl Div<i32> for Quantity {
  type Output = Quantity;

  fn div(self, rhs: i32) -> Quantity {
    self.divide(rhs)
  }
}

impl Div for Quantity {
  type Output = Quantity;

  fn div(self, rhs: Quantity) -> Quantity {
    self.divide(rhs)
  }
}

impl Div<&Quantity> for Quantity {
  type Output = Quantity;

  fn div(self, rhs: &Quantity) -> Quantity {
    self.divide(rhs)
  }
}

impl Mul<Quantity> for f64 {
  type Output = Quantity;

  fn mul(self, rhs: Quantity) -> Quantity {
    rhs.multiply(self)
  }
}

impl Mul<Quantity> for i32 {
  type Output = Quantity;

  fn mul(self, rhs: Quantity) -> Quantity {
    rhs.multiply(self)
  }
}

impl Pow<i32> for Quantity {
  type Output = Quantity;

  fn pow(self, exponent: i32) -> Quantity {
    self.power(exponent)
  }
}

impl AbsDiffEq for Quantity {
  type Epsilon = f64;

  fn default_epsilon() -> f64 {
    <f64 as AbsDiffEq>::default_epsilon()
  }

  fn abs_diff_eq(&self, other: &Quantity, epsilon: f64) -> bool {
    self.dimension == other.dimension && self.magnitude.abs_diff_eq(&other.magnitude, epsilon)
  }
}

impl RelativeEq for Quantity {
  fn default_max_relative() -> f64 {
    <f64 as RelativeEq>::default_max_relative()
  }

  fn relative_eq(&self, other: &Quantity, epsilon: f64, max_relative: f64) -> bool {
    self.dimension == other.dimension && self.magnitude.relative_eq(&other.magnitude, epsilon, max_relative)
  }
}
