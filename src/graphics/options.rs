
//! User-facing settings for a regression plot.

use crate::units::locale::Locale;

use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlotOptions {
  /// Caption of the X axis, without units.
  pub x_label: String,
  /// Caption of the Y axis, without units.
  pub y_label: String,
  /// Language of the unit symbols on both axes.
  pub locale: Locale,
}

impl PlotOptions {
  pub fn new(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
    Self {
      x_label: x_label.into(),
      y_label: y_label.into(),
      locale: Locale::default(),
    }
  }

  pub fn with_locale(mut self, locale: Locale) -> Self {
    self.locale = locale;
    self
  }

  pub fn from_json(json: &str) -> serde_json::Result<Self> {
    serde_json::from_str(json)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_options() {
    let options = PlotOptions::default();
    assert_eq!(options.x_label, "");
    assert_eq!(options.y_label, "");
    assert_eq!(options.locale, Locale::English);
  }

  #[test]
  fn test_from_json() {
    let options = PlotOptions::from_json(r#"{"xLabel": "t", "yLabel": "x", "locale": "ru"}"#).unwrap();
    assert_eq!(options, PlotOptions::new("t", "x").with_locale(Locale::Russian));
  }

  #[test]
  fn test_from_partial_json() {
    let options = PlotOptions::from_json(r#"{"yLabel": "Distance"}"#).unwrap();
    assert_eq!(options, PlotOptions::new("", "Distance"));
  }

  #[test]
  fn test_from_json_with_unknown_locale() {
    assert!(PlotOptions::from_json(r#"{"locale": "de"}"#).is_err());
  }
}
