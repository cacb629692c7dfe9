
//! Points on a two-dimensional plot.

use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point2D {
  pub x: f64,
  pub y: f64,
}

impl Point2D {
  /// Pairs up two slices of coordinates. The slices are expected to
  /// have the same length; any excess elements in the longer one are
  /// ignored.
  pub fn zip(xs: &[f64], ys: &[f64]) -> Vec<Point2D> {
    xs.iter().zip(ys).map(|(&x, &y)| Point2D { x, y }).collect()
  }
}

impl Display for Point2D {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}
