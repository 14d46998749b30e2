//! The kinds of errors that can occur while building, evaluating, or stepping expressions.
//!
//! Every error carries the plain-text rendering of the expression it originated from (see
//! [`stepcas_error::Error`]), so that a report can point at it.

use ariadne::Fmt;
use stepcas_attrs::ErrorKind;
use stepcas_error::EXPR;

pub use stepcas_error::Error;

/// A constructor was given arguments that do not describe a valid node.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid argument for a {}", self.node),
    labels = [self.reason.clone()],
)]
pub struct InvalidConstructorArgument {
    /// The kind of node that was being built.
    pub node: &'static str,

    /// Why the argument was rejected.
    pub reason: String,
}

/// The expression contains letters, so it has no numeric value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "this expression has no numeric value",
    labels = ["this expression contains letters"],
    help = "only expressions made of numbers can be evaluated",
)]
pub struct NotNumeric;

/// The element to remove is not part of the operation.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not an element of this operation", self.element),
    labels = ["this operation"],
)]
pub struct NotFound {
    /// The plain-text rendering of the element that was looked for.
    pub element: String,
}

/// A denominator or divisor evaluates to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot divide by zero",
    labels = ["this expression"],
    help = format!("the divisor of {} must not evaluate to {}", "this expression".fg(EXPR), "0".fg(EXPR)),
)]
pub struct DivisionByZero;

/// An exponent does not evaluate to an integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot raise to the power of `{}`", self.exponent),
    labels = ["this power"],
    help = "only integer exponents can be calculated",
)]
pub struct NonIntegerExponent {
    /// The plain-text rendering of the exponent's value.
    pub exponent: String,
}
