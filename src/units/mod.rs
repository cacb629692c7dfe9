
//! SI dimensions and quantities tagged with them.

pub mod dimension;
pub mod locale;
pub mod quantity;
pub mod si;
pub mod superscript;

pub use dimension::{Dimension, BaseDimension};
pub use locale::Locale;
pub use quantity::{Quantity, Operand};
