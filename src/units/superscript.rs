
//! Unicode superscript rendering of integer exponents.

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

const SUPERSCRIPT_MINUS: char = '⁻';

/// Renders `exponent` as a superscript suffix for a unit symbol.
///
/// An exponent of 1 produces the empty string, since `m¹` is simply
/// written `m`.
pub fn superscript(exponent: i64) -> String {
  match exponent {
    1 => String::new(),
    // Special-cased so that the digit rendering below never sees an
    // exponent of 1 and drops it.
    -1 => String::from("⁻¹"),
    n if n < 0 => {
      let mut result = String::from(SUPERSCRIPT_MINUS);
      result.push_str(&superscript_digits(n.unsigned_abs()));
      result
    }
    n => superscript_digits(n.unsigned_abs()),
  }
}

fn superscript_digits(value: u64) -> String {
  value.to_string()
    .chars()
    .map(|digit| {
      // unwrap safety: `to_string` on an unsigned integer produces
      // only decimal digits.
      let digit = digit.to_digit(10).unwrap();
      SUPERSCRIPT_DIGITS[digit as usize]
    })
    .collect()
}
