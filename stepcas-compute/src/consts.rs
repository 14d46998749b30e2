//! Constants used throughout the library.

use once_cell::sync::Lazy;
use super::primitive::{num, Number};

pub static ONE: Lazy<Number> = Lazy::new(|| num(1));

/// The degree reported by a monomial or polynomial whose coefficients are all zero.
pub const ZERO_POLYNOMIAL_DEGREE: i64 = i64::MIN;

/// The number of decimal places a quotient is rounded to when no explicit precision is requested.
pub const DEFAULT_QUOTIENT_PRECISION: u32 = 4;

/// The letter used by monomials built without an explicit one.
pub const DEFAULT_LETTER: &str = "x";
