
//! Functionality for producing a scatter plot of measurements with
//! its regression line.

use crate::error::Error;
use crate::regression::{RegressionLine, CoefficientErrors, least_squares_error};
use crate::rounding::{round_on_pivot, InvalidPivotError};
use crate::series::Series;
use crate::util::LengthError;
use crate::util::point::Point2D;
use super::{Color, ColorRotation, axis_label};
use super::options::PlotOptions;

use serde::{Serialize, Deserialize};
use log::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionPlot {
  /// The measurements, as given.
  pub points: Vec<Point2D>,
  /// The regression line evaluated at each measured X value.
  pub fit_points: Vec<Point2D>,
  pub color: Color,
  /// Equation of the regression line with significant-figure rounded
  /// coefficients.
  pub legend: String,
  pub x_label: String,
  pub y_label: String,
  pub line: RegressionLine,
  pub errors: CoefficientErrors,
}

impl RegressionPlot {
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }
}

/// Fits a line to `y` against `x` and assembles everything needed to
/// draw the measurements, the line, its legend and the axis captions.
///
/// The plot takes the next color from `colors`. The rotation is left
/// untouched if the regression fails.
pub fn plot_and_regress(
  x: &Series,
  y: &Series,
  options: &PlotOptions,
  colors: &mut ColorRotation,
) -> Result<RegressionPlot, Error> {
  LengthError::check(x.values(), y.values())?;
  let line = RegressionLine::fit(x.values(), y.values())?;
  let errors = least_squares_error(x.values(), y.values(), line.slope)?;
  let slope = displayed_coefficient(errors.slope, line.slope)?;
  let intercept = displayed_coefficient(errors.intercept, line.intercept)?;
  let legend = legend(slope, intercept);

  let fit_values: Vec<f64> = x.iter().map(|xi| line.predict(xi)).collect();
  let plot = RegressionPlot {
    points: Point2D::zip(x.values(), y.values()),
    fit_points: Point2D::zip(x.values(), &fit_values),
    color: colors.next_color(),
    legend,
    x_label: axis_label(&options.x_label, &x.dimension(), options.locale),
    y_label: axis_label(&options.y_label, &y.dimension(), options.locale),
    line,
    errors,
  };
  debug!("Built {} plot '{}' ({} against {})", plot.color, plot.legend, plot.y_label, plot.x_label);
  Ok(plot)
}

/// Rounds a coefficient against its error. A coefficient without
/// error is shown as is.
fn displayed_coefficient(error: f64, coefficient: f64) -> Result<f64, InvalidPivotError> {
  if error == 0.0 {
    Ok(coefficient)
  } else {
    let (_, rounded) = round_on_pivot(error, coefficient)?;
    Ok(rounded)
  }
}

fn legend(slope: f64, intercept: f64) -> String {
  if intercept.is_sign_negative() && intercept != 0.0 {
    format!("y = {}x - {}", slope, -intercept)
  } else {
    format!("y = {}x + {}", slope, intercept.abs())
  }
}
