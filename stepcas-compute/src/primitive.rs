//! The exact rational [`Number`] used as the payload of every numeric term.

use rug::{ops::Pow, Integer, Rational};
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    iter::{Product, Sum},
    ops::{Add, Div, Mul, Neg, Sub},
};

/// The number of decimal places used when displaying a number whose decimal expansion does not
/// terminate.
pub const DISPLAY_PRECISION: u32 = 12;

/// Creates a [`Number`] with the given value.
pub fn num<T>(n: T) -> Number
where
    Rational: From<T>,
{
    Number(Rational::from(n))
}

/// An exact rational number.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(Rational);

impl Number {
    /// Parses a decimal literal, such as `-12`, `3.25`, or `+0.5`.
    ///
    /// Returns [`None`] if the string is not a decimal literal.
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        if int_part.is_empty() && frac_part.is_empty()
            || !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let numer = Integer::from_str_radix(&format!("0{}{}", int_part, frac_part), 10).ok()?;
        let denom = Integer::from(10).pow(frac_part.len() as u32);
        let value = Rational::from((numer, denom));
        Some(Number(if negative { -value } else { value }))
    }

    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    pub fn is_one(&self) -> bool {
        self.0 == 1
    }

    pub fn is_minus_one(&self) -> bool {
        self.0 == -1
    }

    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }

    pub fn is_integer(&self) -> bool {
        *self.0.denom() == 1
    }

    /// Returns true if the number is an odd integer.
    pub fn is_odd(&self) -> bool {
        self.is_integer() && self.0.numer().is_odd()
    }

    pub fn abs(&self) -> Self {
        Number(self.0.clone().abs())
    }

    /// Divides `self` by `other`, or returns [`None`] if `other` is zero.
    pub fn checked_div(&self, other: &Number) -> Option<Self> {
        (!other.is_zero()).then(|| Number(self.0.clone() / &other.0))
    }

    /// Raises the number to an integer power, or returns [`None`] if a zero base is raised to a
    /// negative power.
    pub fn pow(&self, exponent: i32) -> Option<Self> {
        if exponent < 0 && self.is_zero() {
            return None;
        }
        Some(Number(self.0.clone().pow(exponent)))
    }

    /// Converts the number to an [`i32`], if it is an integer in range.
    pub fn to_i32(&self) -> Option<i32> {
        if self.is_integer() {
            self.0.numer().to_i32()
        } else {
            None
        }
    }

    /// The greatest common divisor of two integers. Non-integers have no common divisor other than
    /// one.
    pub fn gcd(&self, other: &Number) -> Number {
        if !self.is_integer() || !other.is_integer() {
            return num(1);
        }
        Number(Rational::from(self.0.numer().clone().gcd(other.0.numer())))
    }

    /// The least common multiple of two integers, sign excluded.
    pub fn lcm(&self, other: &Number) -> Number {
        Number(Rational::from(self.0.numer().clone().lcm(other.0.numer())))
    }

    /// Returns the smallest prime factor of an integer greater than one.
    pub fn smallest_prime_factor(&self) -> Option<Number> {
        if !self.is_integer() {
            return None;
        }
        let n = self.0.numer().clone().abs();
        if n <= 1 {
            return None;
        }

        let mut p = Integer::from(2);
        while Integer::from(&p * &p) <= n {
            if n.is_divisible(&p) {
                return Some(Number(Rational::from(p)));
            }
            p += 1;
        }
        Some(Number(Rational::from(n)))
    }

    /// Rounds the number to the given number of decimal places. Ties are rounded away from zero.
    pub fn rounded(&self, precision: u32) -> Number {
        let scale = Integer::from(10).pow(precision);
        let shifted = (self.0.clone() * &scale).round();
        Number(shifted / scale)
    }

    /// The number of decimal places of the number, or [`None`] if its decimal expansion does not
    /// terminate.
    pub fn decimal_places(&self) -> Option<u32> {
        let mut denom = self.0.denom().clone();
        let (mut twos, mut fives) = (0, 0);
        while denom.is_divisible_u(2) {
            denom /= 2u32;
            twos += 1;
        }
        while denom.is_divisible_u(5) {
            denom /= 5u32;
            fives += 1;
        }
        (denom == 1).then_some(twos.max(fives))
    }

    /// Writes the number as a decimal with exactly `places` decimal places, trailing zeros
    /// trimmed. The number must already be exact at that many places.
    fn fmt_decimal(&self, f: &mut Formatter<'_>, places: u32) -> fmt::Result {
        let scaled = self.0.clone().abs() * Integer::from(10).pow(places);
        let mut digits = scaled.numer().to_string();
        let places = places as usize;
        if digits.len() <= places {
            digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
        }

        let (int_part, frac_part) = digits.split_at(digits.len() - places);
        let frac_part = frac_part.trim_end_matches('0');
        if self.is_negative() {
            write!(f, "-")?;
        }
        if frac_part.is_empty() {
            write!(f, "{}", int_part)
        } else {
            write!(f, "{}.{}", int_part, frac_part)
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            return write!(f, "{}", self.0.numer());
        }
        match self.decimal_places() {
            Some(places) => self.fmt_decimal(f, places),
            None => self.rounded(DISPLAY_PRECISION).fmt_decimal(f, DISPLAY_PRECISION),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        num(n)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        num(n)
    }
}

impl From<Integer> for Number {
    fn from(n: Integer) -> Self {
        num(n)
    }
}

impl From<Rational> for Number {
    fn from(n: Rational) -> Self {
        Number(n)
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        Number(self.0 + rhs.0)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        Number(self.0 - rhs.0)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        Number(self.0 * rhs.0)
    }
}

/// Panics if `rhs` is zero; use [`Number::checked_div`] when the divisor is not known to be
/// non-zero.
impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        Number(self.0 / rhs.0)
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        Number(-self.0)
    }
}

impl Sum for Number {
    fn sum<I: Iterator<Item = Number>>(iter: I) -> Number {
        iter.fold(num(0), |acc, n| acc + n)
    }
}

impl Product for Number {
    fn product<I: Iterator<Item = Number>>(iter: I) -> Number {
        iter.fold(num(1), |acc, n| acc * n)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn parse_decimal_literals() {
        assert_eq!(Number::from_decimal_str("12"), Some(num(12)));
        assert_eq!(Number::from_decimal_str("-3.25"), Some(num((-13, 4))));
        assert_eq!(Number::from_decimal_str("+.5"), Some(num((1, 2))));
        assert_eq!(Number::from_decimal_str("x"), None);
        assert_eq!(Number::from_decimal_str("-"), None);
        assert_eq!(Number::from_decimal_str("1.2.3"), None);
    }

    #[test]
    fn display_exact_and_rounded() {
        assert_eq!(num(-8640).to_string(), "-8640");
        assert_eq!(num((7, 4)).to_string(), "1.75");
        assert_eq!(num((-1, 20)).to_string(), "-0.05");
        assert_eq!(num((1, 3)).to_string(), "0.333333333333");
        assert_eq!(num((2, 3)).to_string(), "0.666666666667");
    }

    #[test]
    fn rounding() {
        assert_eq!(num((2, 3)).rounded(4), num((6667, 10000)));
        assert_eq!(num((5, 2)).rounded(0), num(3));
        assert_eq!(num((-5, 2)).rounded(0), num(-3));
    }

    #[test]
    fn factors() {
        assert_eq!(num(92).gcd(&num(76)), num(4));
        assert_eq!(num(4).lcm(&num(6)), num(12));
        assert_eq!(num(91).smallest_prime_factor(), Some(num(7)));
        assert_eq!(num(13).smallest_prime_factor(), Some(num(13)));
        assert_eq!(num(1).smallest_prime_factor(), None);
    }

    #[test]
    fn powers() {
        assert_eq!(num(-2).pow(3), Some(num(-8)));
        assert_eq!(num(2).pow(-2), Some(num((1, 4))));
        assert_eq!(num(0).pow(-1), None);
    }
}
