
//! The SI base units, as quantities of magnitude 1.

use super::dimension::BaseDimension;
use super::quantity::Quantity;

pub fn second() -> Quantity {
  Quantity::unit(BaseDimension::Time)
}

pub fn meter() -> Quantity {
  Quantity::unit(BaseDimension::Length)
}

pub fn kilogram() -> Quantity {
  Quantity::unit(BaseDimension::Mass)
}

pub fn ampere() -> Quantity {
  Quantity::unit(BaseDimension::Current)
}

pub fn kelvin() -> Quantity {
  Quantity::unit(BaseDimension::Temperature)
}

pub fn mole() -> Quantity {
  Quantity::unit(BaseDimension::AmountOfSubstance)
}

pub fn candela() -> Quantity {
  Quantity::unit(BaseDimension::LuminousIntensity)
}
