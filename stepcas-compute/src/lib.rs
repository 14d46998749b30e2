//! Step-by-step evaluation, expansion and reduction of algebraic expressions.
//!
//! Expressions are trees of [`symbolic::Node`]s that can be calculated one human-legible step at
//! a time, and rendered in LaTeX, plain text, or a flat string for JavaScript-like evaluators
//! (see [`fmt::FormatOptions`]). Numbers are exact rationals ([`primitive::Number`]).

pub mod consts;
pub mod error;
pub mod fmt;
pub mod primitive;
pub mod symbolic;
