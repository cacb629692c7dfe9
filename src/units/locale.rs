
//! Localized symbols for the SI base units.

use super::dimension::BaseDimension;

use thiserror::Error;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};
use std::str::FromStr;

/// A language in which unit symbols can be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
  #[default]
  #[serde(rename = "en")]
  English,
  #[serde(rename = "ru")]
  Russian,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown locale '{0}'")]
pub struct UnknownLocaleError(pub String);

impl Locale {
  pub const ALL: [Locale; 2] = [Locale::English, Locale::Russian];

  /// The short code of the locale, as accepted by [`Locale::from_str`].
  pub fn code(self) -> &'static str {
    match self {
      Locale::English => "en",
      Locale::Russian => "ru",
    }
  }

  /// The symbol of the SI unit measuring `base` in this locale.
  pub fn unit_symbol(self, base: BaseDimension) -> &'static str {
    match (self, base) {
      (Locale::English, BaseDimension::Time) => "s",
      (Locale::English, BaseDimension::Length) => "m",
      (Locale::English, BaseDimension::Mass) => "kg",
      (Locale::English, BaseDimension::Current) => "A",
      (Locale::English, BaseDimension::Temperature) => "K",
      (Locale::English, BaseDimension::AmountOfSubstance) => "mol",
      (Locale::English, BaseDimension::LuminousIntensity) => "cd",
      (Locale::Russian, BaseDimension::Time) => "с",
      (Locale::Russian, BaseDimension::Length) => "м",
      (Locale::Russian, BaseDimension::Mass) => "кг",
      (Locale::Russian, BaseDimension::Current) => "А",
      (Locale::Russian, BaseDimension::Temperature) => "К",
      (Locale::Russian, BaseDimension::AmountOfSubstance) => "моль",
      (Locale::Russian, BaseDimension::LuminousIntensity) => "кд",
    }
  }
}

impl FromStr for Locale {
  type Err = UnknownLocaleError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Locale::ALL.into_iter()
      .find(|locale| locale.code() == s)
      .ok_or_else(|| UnknownLocaleError(s.to_owned()))
  }
}

impl Display for Locale {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.code())
  }
}
