//! Plain-notation rendering for decimal values

use bigdecimal::{BigDecimal, Zero};

/// Largest fractional (or trailing-zero) digit count rendered in plain notation
///
/// Normalized amounts and priced values stay far below this; anything beyond
/// it falls back to `<digits>E<exponent>` so rendering never allocates in
/// proportion to an untrusted exponent.
pub const MAX_PLAIN_SCALE: i64 = 1024;

/// Render a decimal in plain notation with trailing fractional zeros removed
///
/// `BigDecimal`'s own `Display` may switch to exponent notation for large or
/// small scales, which is not what downstream log consumers expect. Within
/// [`MAX_PLAIN_SCALE`] this always produces digits, an optional `.` and more
/// digits.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bigdecimal::BigDecimal;
/// use sui_defi_metrics::format_decimal;
///
/// assert_eq!(format_decimal(&BigDecimal::from_str("2.500000").unwrap()), "2.5");
/// assert_eq!(format_decimal(&BigDecimal::from_str("1E+3").unwrap()), "1000");
/// assert_eq!(format_decimal(&BigDecimal::from_str("0.000").unwrap()), "0");
/// ```
pub fn format_decimal(value: &BigDecimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let normalized = value.normalized();
    let (digits, scale) = normalized.as_bigint_and_exponent();
    if (-MAX_PLAIN_SCALE..=MAX_PLAIN_SCALE).contains(&scale) {
        normalized.to_plain_string()
    } else {
        format!("{digits}E{}", -i128::from(scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::num_bigint::BigInt;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn formats_zero_at_any_scale() {
        assert_eq!(format_decimal(&BigDecimal::zero()), "0");
        assert_eq!(format_decimal(&BigDecimal::new(BigInt::from(0), 18)), "0");
    }

    #[test]
    fn removes_trailing_zeros() {
        assert_eq!(format_decimal(&dec("1.200000000")), "1.2");
        assert_eq!(format_decimal(&dec("1.000000000")), "1");
    }

    #[test]
    fn pads_leading_fractional_zeros() {
        assert_eq!(format_decimal(&BigDecimal::new(BigInt::from(5), 3)), "0.005");
        assert_eq!(format_decimal(&BigDecimal::new(BigInt::from(123), 3)), "0.123");
    }

    #[test]
    fn expands_negative_scale() {
        assert_eq!(format_decimal(&BigDecimal::new(BigInt::from(42), -4)), "420000");
    }

    #[test]
    fn keeps_eighteen_fractional_digits() {
        let value = BigDecimal::new(BigInt::from(123_456_789_012_345_678u64), 18);
        assert_eq!(format_decimal(&value), "0.123456789012345678");
    }

    #[test]
    fn keeps_sign() {
        assert_eq!(format_decimal(&dec("-0.50")), "-0.5");
    }

    #[test]
    fn huge_scales_fall_back_to_exponent_form() {
        let tiny = BigDecimal::new(BigInt::from(1), 9_000_000_000_000_000);
        assert_eq!(format_decimal(&tiny), "1E-9000000000000000");

        let huge = BigDecimal::new(BigInt::from(-25), -5000);
        assert_eq!(format_decimal(&huge), "-25E5000");
    }

    #[test]
    fn scale_at_limit_is_still_plain() {
        let value = BigDecimal::new(BigInt::from(1), MAX_PLAIN_SCALE);
        let rendered = format_decimal(&value);
        assert!(rendered.starts_with("0.000"));
        assert!(!rendered.contains('E'));
        assert_eq!(rendered.len(), MAX_PLAIN_SCALE as usize + 2);
    }
}
