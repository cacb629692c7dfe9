
//! Measurements tagged with SI dimensions, least-squares regression
//! with propagated coefficient errors, and significant-figure
//! rounding of the results for display.

pub mod error;
pub mod graphics;
pub mod regression;
pub mod rounding;
pub mod series;
pub mod units;
pub mod util;

pub use error::Error;
