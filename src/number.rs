//! Formatting of constants for rendering.
//!
//! Constants are shown to a fixed number of significant digits, choosing between fixed and
//! scientific notation in the same way as C's `%g` conversion: scientific notation is used when
//! the decimal exponent is below -4, or at least the number of significant digits. Trailing zeros
//! after the decimal point are then removed, along with the point itself if nothing is left after
//! it.
//!
//! | Value          | Rendered   |
//! |----------------|------------|
//! | `5.0`          | `5`        |
//! | `0.25`         | `0.25`     |
//! | `3.14159`      | `3.14`     |
//! | `1234.0`       | `1.23e+03` |
//! | `0.00001`      | `1e-05`    |
//! | `f64::NAN`     | `nan`      |

use alloc::{format, string::{String, ToString}};

/// The number of significant digits which constants are rendered with.
pub const SIGNIFICANT_DIGITS: usize = 3;

/// The most significant digits [format_significant] will produce. An `f64` never carries more
/// than this.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Formats a number with the given count of significant digits, following the rules described
/// in the [module documentation](self). `digits` is clamped to between 1 and
/// [MAX_SIGNIFICANT_DIGITS].
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.clamp(1, MAX_SIGNIFICANT_DIGITS);

    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string()
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string()
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string()
    }

    // Let the standard formatter do the rounding, then read back which exponent the rounded
    // value ended up with - rounding can carry into a new digit (e.g. 999.5 -> 1.00e3)
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => unreachable!("exponent formatting always includes an exponent"),
    };
    let exponent: i32 = match exponent.parse() {
        Ok(e) => e,
        Err(_) => unreachable!("exponent formatting always gives an integer exponent"),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_trailing_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Removes zeros after a decimal point, and then the decimal point itself if it's the last
/// character. Strings without a decimal point are returned as-is.
fn strip_trailing_zeros(number: &str) -> &str {
    if !number.contains('.') {
        return number
    }

    number.trim_end_matches('0').trim_end_matches('.')
}
