/// Formats an `f64` the way the report has always printed it.
///
/// Values are written as the shortest decimal that round-trips, always with a
/// fractional part (`65475000.0`, `0.25`). Very large or very small
/// magnitudes switch to scientific notation with a signed, zero-padded
/// exponent of at least two digits.
///
/// # Examples
///
/// ```
/// use crate::utils::numbers::format_decimal;
///
/// assert_eq!(format_decimal(65475000.0), "65475000.0");
/// assert_eq!(format_decimal(1e16), "1e+16");
/// assert_eq!(format_decimal(2.5e-5), "2.5e-05");
/// ```
///
/// # Behavior
///
/// - Magnitudes in `[1e-4, 1e16)` and zero: plain decimal
/// - Anything else finite: `<mantissa>e<sign><exponent>`
/// - Non-finite values: `inf`, `-inf` or `nan`
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if value == 0.0 || (-4..16).contains(&exponent) {
        return format!("{:?}", value);
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(65475000.0), "65475000.0");
        assert_eq!(format_decimal(72714712.5), "72714712.5");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(-0.0), "-0.0");
        assert_eq!(format_decimal(0.0001), "0.0001");
        assert_eq!(format_decimal(9999999999999998.0), "9999999999999998.0");
    }

    #[test]
    fn test_format_decimal_scientific() {
        assert_eq!(format_decimal(1e16), "1e+16");
        assert_eq!(format_decimal(1.5e17), "1.5e+17");
        assert_eq!(format_decimal(-3e20), "-3e+20");
        assert_eq!(format_decimal(1e-5), "1e-05");
        assert_eq!(format_decimal(2.5e-5), "2.5e-05");
        assert_eq!(format_decimal(1e300), "1e+300");
        assert_eq!(format_decimal(9.99e-5), "9.99e-05");
        assert_eq!(format_decimal(5e-324), "5e-324");
        assert_eq!(format_decimal(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_decimal_non_finite() {
        assert_eq!(format_decimal(f64::NAN), "nan");
        assert_eq!(format_decimal(f64::INFINITY), "inf");
        assert_eq!(format_decimal(f64::NEG_INFINITY), "-inf");
    }
}
