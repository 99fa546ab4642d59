use crate::utils::error::{FilterError, Result};
use num_bigint::{BigInt, Sign};
use num_traits::Signed;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::sync::LazyLock;

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?(?:[eE]([+-]?[0-9]+))?$")
        .expect("decimal literal pattern is valid")
});

/// Arbitrary precision decimal, `unscaled * 10^-scale`.
///
/// Equality and ordering are numeric, so `1.0 == 1.00` even though the two
/// render differently.
#[derive(Debug, Clone)]
pub struct Decimal {
    unscaled: BigInt,
    scale: i64,
}

impl Decimal {
    /// Accepts `[+-]digits[.digits][e[+-]digits]` with at least one digit in
    /// the mantissa. The scale has to fit in an `i32`.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || FilterError::NumberFormatError {
            value: text.to_string(),
            kind: "decimal",
        };

        let caps = DECIMAL_LITERAL.captures(text).ok_or_else(invalid)?;
        let negative = &caps[1] == "-";
        let int_part = caps.get(2).map_or("", |m| m.as_str());
        let frac_part = caps.get(3).map_or("", |m| m.as_str());

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let exponent = match caps.get(4) {
            Some(m) => m.as_str().parse::<i64>().map_err(|_| invalid())?,
            None => 0,
        };

        let scale = (frac_part.len() as i64)
            .checked_sub(exponent)
            .filter(|s| i32::try_from(*s).is_ok())
            .ok_or_else(invalid)?;

        let digits = format!("{}{}", int_part, frac_part);
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let unscaled = if negative { -magnitude } else { magnitude };

        Ok(Self { unscaled, scale })
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Exponent of the leading digit, `digits - 1 - scale`. Zero has none.
    fn adjusted_exponent(&self) -> i64 {
        self.unscaled.magnitude().to_str_radix(10).len() as i64 - 1 - self.scale
    }

    fn unscaled_at(&self, scale: i64) -> BigInt {
        debug_assert!(scale >= self.scale);
        let shift = (scale - self.scale) as u32;
        &self.unscaled * BigInt::from(10u32).pow(shift)
    }

    /// Divides by a positive count, keeping this value's scale and rounding
    /// half away from zero.
    pub fn div_half_up(&self, divisor: usize) -> Self {
        let divisor = BigInt::from(divisor.max(1));
        let mut quotient = &self.unscaled / &divisor;
        let remainder = &self.unscaled % &divisor;

        if remainder.abs() * 2u32 >= divisor {
            match self.unscaled.sign() {
                Sign::Minus => quotient -= 1u32,
                _ => quotient += 1u32,
            }
        }

        Self {
            unscaled: quotient,
            scale: self.scale,
        }
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal {
            unscaled: self.unscaled_at(scale) + rhs.unscaled_at(scale),
            scale,
        }
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        &self + &rhs
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.unscaled.sign();
        match sign.cmp(&other.unscaled.sign()) {
            Ordering::Equal if sign == Sign::NoSign => return Ordering::Equal,
            Ordering::Equal => {}
            unequal => return unequal,
        }

        // same nonzero sign: magnitudes with different leading exponents
        // are ordered without rescaling to a common scale
        let magnitude = self.adjusted_exponent().cmp(&other.adjusted_exponent());
        if magnitude != Ordering::Equal {
            return match sign {
                Sign::Minus => magnitude.reverse(),
                _ => magnitude,
            };
        }

        let scale = self.scale.max(other.scale);
        self.unscaled_at(scale).cmp(&other.unscaled_at(scale))
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficient = self.unscaled.magnitude().to_string();
        let sign = if self.unscaled.is_negative() { "-" } else { "" };
        let len = coefficient.len() as i64;
        let adjusted = len - 1 - self.scale;

        if self.scale == 0 {
            return write!(f, "{}{}", sign, coefficient);
        }

        if self.scale > 0 && adjusted >= -6 {
            let point = len - self.scale;
            return if point > 0 {
                let (whole, fraction) = coefficient.split_at(point as usize);
                write!(f, "{}{}.{}", sign, whole, fraction)
            } else {
                let zeros = "0".repeat((-point) as usize);
                write!(f, "{}0.{}{}", sign, zeros, coefficient)
            };
        }

        let (lead, rest) = coefficient.split_at(1);
        write!(f, "{}{}", sign, lead)?;
        if !rest.is_empty() {
            write!(f, ".{}", rest)?;
        }
        match adjusted.cmp(&0) {
            Ordering::Greater => write!(f, "E+{}", adjusted),
            Ordering::Less => write!(f, "E{}", adjusted),
            Ordering::Equal => Ok(()),
        }
    }
}
