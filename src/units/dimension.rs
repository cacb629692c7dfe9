
use crate::util::zip_with;
use super::locale::Locale;
use super::superscript::superscript;

use num::One;
use num::pow::Pow;
use itertools::Itertools;
use serde::{Serialize, Deserialize};

use std::ops::{Mul, Div};
use std::fmt::{self, Formatter, Display};

/// A dimension is a formal product and quotient of zero or more
/// [`BaseDimension`] values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
  dims: [i64; NDIMS],
}

/// The seven base SI dimensions. Every dimension is a formal product
/// or quotient of zero or more of these.
///
/// The declaration order is the order in which base units are
/// written when a dimension is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseDimension {
  Time,
  Length,
  Mass,
  Current,
  Temperature,
  AmountOfSubstance,
  LuminousIntensity,
}

pub const NDIMS: usize = 7;

impl Dimension {
  /// The dimensionless dimension. Equivalent to `Dimension::one()`.
  pub fn dimensionless() -> Self {
    Self { dims: [0; NDIMS] }
  }

  /// Builds a dimension from its exponents, given in
  /// [`BaseDimension::ALL`] order.
  pub fn from_exponents(dims: [i64; NDIMS]) -> Self {
    Self { dims }
  }

  pub fn singleton(base: BaseDimension) -> Self {
    let mut dims = [0; NDIMS];
    dims[base.dimension_index()] = 1;
    Self { dims }
  }

  /// Returns a copy of `self` with the exponent of `base` replaced.
  pub fn with(mut self, base: BaseDimension, exponent: i64) -> Self {
    self.dims[base.dimension_index()] = exponent;
    self
  }

  pub fn get(&self, base: BaseDimension) -> i64 {
    self.dims[base.dimension_index()]
  }

  pub fn exponents(&self) -> [i64; NDIMS] {
    self.dims
  }

  pub fn components(&self) -> impl Iterator<Item = (BaseDimension, i64)> + '_ {
    BaseDimension::ALL.iter()
      .copied()
      .zip(self.dims.iter().copied())
      .filter(|(_, x)| *x != 0)
  }

  /// Adds exponents.
  ///
  /// # Panics
  ///
  /// Panics if a resulting exponent does not fit in an `i64`. Any two
  /// dimensions whose exponents all lie in `i64::MIN / 2 ..= i64::MAX
  /// / 2` are safe. See [`Dimension::checked_multiply`].
  pub fn multiply(&self, other: &Self) -> Self {
    self.checked_multiply(other)
      .unwrap_or_else(|| panic!("Exponent overflow in [{}] times [{}]", self, other))
  }

  /// Subtracts exponents, with the same bound as
  /// [`Dimension::multiply`].
  pub fn divide(&self, other: &Self) -> Self {
    self.checked_divide(other)
      .unwrap_or_else(|| panic!("Exponent overflow in [{}] divided by [{}]", self, other))
  }

  /// Multiplies every exponent by `exponent`.
  ///
  /// # Panics
  ///
  /// Panics if `|e * exponent|` exceeds `i64::MAX` for some exponent
  /// `e` of `self`. See [`Dimension::checked_power`].
  pub fn power(&self, exponent: i64) -> Self {
    self.checked_power(exponent)
      .unwrap_or_else(|| panic!("Exponent overflow in [{}] to the power {}", self, exponent))
  }

  pub fn checked_multiply(&self, other: &Self) -> Option<Self> {
    Self::from_checked(zip_with(self.dims, other.dims, i64::checked_add))
  }

  pub fn checked_divide(&self, other: &Self) -> Option<Self> {
    Self::from_checked(zip_with(self.dims, other.dims, i64::checked_sub))
  }

  pub fn checked_power(&self, exponent: i64) -> Option<Self> {
    Self::from_checked(self.dims.map(|x| x.checked_mul(exponent)))
  }

  fn from_checked(dims: [Option<i64>; NDIMS]) -> Option<Self> {
    let mut result = [0; NDIMS];
    for (slot, dim) in result.iter_mut().zip(dims) {
      *slot = dim?;
    }
    Some(Self { dims: result })
  }

  /// Renders the dimension as a product of localized unit symbols,
  /// each followed by a superscript exponent, e.g. `kg·m·s⁻²` is
  /// rendered as `s⁻²·m·kg`. The dimensionless dimension renders as
  /// the empty string.
  pub fn format(&self, locale: Locale) -> String {
    self.components()
      .map(|(base, exponent)| format!("{}{}", locale.unit_symbol(base), superscript(exponent)))
      .join("·")
  }
}

impl BaseDimension {
  pub const ALL: [BaseDimension; NDIMS] = [
    BaseDimension::Time,
    BaseDimension::Length,
    BaseDimension::Mass,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::AmountOfSubstance,
    BaseDimension::LuminousIntensity,
  ];

  fn dimension_index(self) -> usize {
    match self {
      BaseDimension::Time => 0,
      BaseDimension::Length => 1,
      BaseDimension::Mass => 2,
      BaseDimension::Current => 3,
      BaseDimension::Temperature => 4,
      BaseDimension::AmountOfSubstance => 5,
      BaseDimension::LuminousIntensity => 6,
    }
  }
}

impl From<BaseDimension> for Dimension {
  fn from(base: BaseDimension) -> Self {
    Dimension::singleton(base)
  }
}

impl Pow<i64> for Dimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    self.power(power)
  }
}

impl Pow<i64> for &Dimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    self.power(power)
  }
}

impl Pow<i64> for BaseDimension {
  type Output = Dimension;

  fn pow(self, power: i64) -> Dimension {
    Dimension::singleton(self).power(power)
  }
}

impl Mul for Dimension {
  type Output = Self;

  fn mul(self, rhs: Self) -> Self {
    self.multiply(&rhs)
  }
}

impl Mul<BaseDimension> for Dimension {
  type Output = Self;

  fn mul(self, rhs: BaseDimension) -> Self {
    self * Dimension::singleton(rhs)
  }
}

impl Div for Dimension {
  type Output = Self;

  fn div(self, rhs: Self) -> Self {
    self.divide(&rhs)
  }
}

impl Div<BaseDimension> for Dimension {
  type Output = Self;

  fn div(self, rhs: BaseDimension) -> Self {
    self / Dimension::singleton(rhs)
  }
}

impl Mul for BaseDimension {
  type Output = Dimension;

  fn mul(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) * Dimension::singleton(rhs)
  }
}

impl Div for BaseDimension {
  type Output = Dimension;

  fn div(self, rhs: Self) -> Dimension {
    Dimension::singleton(self) / Dimension::singleton(rhs)
  }
}

impl One for Dimension {
  fn one() -> Self {
    Self::dimensionless()
  }

  fn is_one(&self) -> bool {
    self.dims.iter().all(|x| *x == 0)
  }
}

impl Display for BaseDimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      BaseDimension::Time => write!(f, "time"),
      BaseDimension::Length => write!(f, "length"),
      BaseDimension::Mass => write!(f, "mass"),
      BaseDimension::Current => write!(f, "current"),
      BaseDimension::Temperature => write!(f, "temperature"),
      BaseDimension::AmountOfSubstance => write!(f, "amount"),
      BaseDimension::LuminousIntensity => write!(f, "intensity"),
    }
  }
}

impl Display for Dimension {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.format(Locale::English))
  }
}
