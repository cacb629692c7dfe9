
//! Support for handing regression plots to an external renderer.
//!
//! Nothing in this module draws anything. It produces
//! [`RegressionPlot`](plot::RegressionPlot) payloads which a frontend
//! can serialize and render however it likes.

pub mod options;
pub mod plot;

use crate::units::dimension::Dimension;
use crate::units::locale::Locale;

use serde::{Serialize, Deserialize};

use std::fmt::{self, Formatter, Display};

/// A line color, in the order in which successive plots receive
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
  #[serde(rename = "r")]
  Red,
  #[serde(rename = "g")]
  Green,
  #[serde(rename = "b")]
  Blue,
  #[serde(rename = "y")]
  Yellow,
  #[serde(rename = "m")]
  Magenta,
  #[serde(rename = "c")]
  Cyan,
  #[serde(rename = "k")]
  Black,
}

/// Hands out colors to successive plots, cycling through
/// [`Color::ROTATION`].
///
/// A rotation belongs to whoever is producing a sequence of plots;
/// there is no shared default rotation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorRotation {
  cursor: usize,
}

impl Color {
  pub const ROTATION: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Black,
  ];

  /// Single-letter color code.
  pub fn code(self) -> &'static str {
    match self {
      Color::Red => "r",
      Color::Green => "g",
      Color::Blue => "b",
      Color::Yellow => "y",
      Color::Magenta => "m",
      Color::Cyan => "c",
      Color::Black => "k",
    }
  }
}

impl ColorRotation {
  pub fn new() -> Self {
    Self::default()
  }

  /// The color the next call to [`ColorRotation::next_color`] will
  /// return.
  pub fn peek(&self) -> Color {
    Color::ROTATION[self.cursor]
  }

  pub fn next_color(&mut self) -> Color {
    let color = self.peek();
    self.cursor = (self.cursor + 1) % Color::ROTATION.len();
    color
  }
}

impl Display for Color {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.code())
  }
}

/// Axis caption of the form `"{label}, {unit}"`. Either part is
/// omitted, along with the separator, when it is empty.
pub fn axis_label(label: &str, dimension: &Dimension, locale: Locale) -> String {
  let unit = dimension.format(locale);
  match (label.is_empty(), unit.is_empty()) {
    (false, false) => format!("{}, {}", label, unit),
    (false, true) => label.to_owned(),
    (true, _) => unit,
  }
}
