//! Precision and scale enforcement for decimal casts
//!
//! Values are first rounded to the declared scale, then checked against the
//! declared precision. Rounding is half away from zero.

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::error::{DecimalBound, Error, Result};

/// Largest scale the decimal engine can represent. Literals with more
/// fractional digits are rounded to this scale when parsed.
pub const MAX_SCALE: i32 = 28;

/// An arbitrary-precision SQL numeric, including the non-finite forms.
///
/// # Examples
///
/// ```
/// use coltypes_core::Numeric;
///
/// let n: Numeric = "12.50".parse().unwrap();
/// assert_eq!(n.to_string(), "12.50");
/// assert_eq!("-infinity".parse::<Numeric>().unwrap(), Numeric::NegInfinity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Numeric {
    Finite(Decimal),
    NaN,
    Infinity,
    NegInfinity,
}

impl Numeric {
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Numeric::Finite(_))
    }

    #[must_use]
    pub const fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Numeric::Finite(d) => Some(d),
            _ => None,
        }
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Numeric::Finite(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Finite(d) => fmt::Display::fmt(d, f),
            Numeric::NaN => f.write_str("NaN"),
            Numeric::Infinity => f.write_str("Infinity"),
            Numeric::NegInfinity => f.write_str("-Infinity"),
        }
    }
}

/// Error returned when a string is not a numeric literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input syntax for type numeric: \"{0}\"")]
pub struct ParseNumericError(String);

impl FromStr for Numeric {
    type Err = ParseNumericError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("nan") {
            return Ok(Numeric::NaN);
        }
        if s.eq_ignore_ascii_case("infinity") || s.eq_ignore_ascii_case("+infinity") {
            return Ok(Numeric::Infinity);
        }
        if s.eq_ignore_ascii_case("-infinity") {
            return Ok(Numeric::NegInfinity);
        }
        parse_finite(s)
            .map(Numeric::Finite)
            .ok_or_else(|| ParseNumericError(s.to_string()))
    }
}

/// Parse `[+-]digits[.digits][e[+-]digits]`.
///
/// Fractional digits beyond [`MAX_SCALE`] are rounded half away from zero.
/// `None` when the literal is malformed or its integer part does not fit.
fn parse_finite(s: &str) -> Option<Decimal> {
    let (negative, body) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    let (number, exp) = match body.find(['e', 'E']) {
        Some(i) => (&body[..i], body[i + 1..].parse::<i64>().ok()?),
        None => (body, 0),
    };
    let (int, frac) = number.split_once('.').unwrap_or((number, ""));
    if int.is_empty() && frac.is_empty() {
        return None;
    }
    if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let digits = [int, frac].concat();
    let digits = digits.trim_start_matches('0');
    let exp = exp.checked_sub(i64::try_from(frac.len()).ok()?)?;
    let parse = |d: &str| {
        if d.is_empty() {
            Some(0i128)
        } else {
            d.parse::<i128>().ok()
        }
    };
    let sign = if negative { -1 } else { 1 };

    if exp >= 0 {
        let exp = u32::try_from(exp).ok()?;
        let mantissa = parse(digits)?.checked_mul(10i128.checked_pow(exp)?)?;
        return Decimal::try_from_i128_with_scale(sign * mantissa, 0).ok();
    }
    let scale = exp.unsigned_abs();
    let max = u64::from(MAX_SCALE.unsigned_abs());
    if scale <= max {
        let scale = u32::try_from(scale).ok()?;
        return Decimal::try_from_i128_with_scale(sign * parse(digits)?, scale).ok();
    }

    let dropped = usize::try_from(scale - max).ok()?;
    let (kept, round_up) = match digits.len().checked_sub(dropped) {
        Some(split) => (&digits[..split], digits.as_bytes().get(split).is_some_and(|&b| b >= b'5')),
        None => ("", false),
    };
    let mantissa = parse(kept)? + i128::from(round_up);
    Decimal::try_from_i128_with_scale(sign * mantissa, MAX_SCALE.unsigned_abs()).ok()
}

/// Round `value` to `scale` fractional digits and check that it fits in
/// `precision` total digits.
///
/// Non-finite values and `precision <= 0` are left alone. On error `value`
/// is unchanged.
///
/// ```
/// use coltypes_core::{limit_decimal_width, Numeric};
///
/// let mut n: Numeric = "1.005".parse().unwrap();
/// limit_decimal_width(&mut n, 3, 2).unwrap();
/// assert_eq!(n.to_string(), "1.01");
///
/// let mut n: Numeric = "12345".parse().unwrap();
/// assert!(limit_decimal_width(&mut n, 3, 0).is_err());
/// ```
pub fn limit_decimal_width(value: &mut Numeric, precision: i32, scale: i32) -> Result<()> {
    let Numeric::Finite(d) = value else {
        return Ok(());
    };
    if precision <= 0 {
        return Ok(());
    }
    if !(0..=MAX_SCALE).contains(&scale) {
        return Err(Error::ScaleOutOfRange);
    }
    if scale > precision {
        return Err(Error::invalid_parameter(format!(
            "scale ({scale}) must be between 0 and precision ({precision})"
        )));
    }

    let dp = scale.unsigned_abs();
    let mut rounded = d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let integer_digits = precision - scale;
    if !fits_integer_digits(&rounded, integer_digits) {
        crate::coltypes_trace_limit!(precision, scale, value = %d, "decimal out of range");
        return Err(Error::NumericValueOutOfRange {
            precision,
            scale,
            bound: DecimalBound(integer_digits),
        });
    }
    // Pads trailing zeros; leaves the scale lower if the coefficient would overflow.
    rounded.rescale(dp);
    if rounded != *d {
        crate::coltypes_trace_limit!(precision, scale, from = %d, to = %rounded, "decimal rounded");
    }
    *d = rounded;
    Ok(())
}

/// `|value| < 10^digits`
fn fits_integer_digits(value: &Decimal, digits: i32) -> bool {
    let Ok(exp) = u32::try_from(digits) else {
        return false;
    };
    let bound = 10i128
        .checked_pow(exp)
        .and_then(|b| Decimal::try_from_i128_with_scale(b, 0).ok());
    match bound {
        Some(bound) => value.abs() < bound,
        // Beyond the largest representable decimal.
        None => true,
    }
}
