use crate::{
    error::{Error, InvalidConstructorArgument, NotNumeric},
    fmt::{bracketed, FormatOptions, RenderContext},
    primitive::Number,
    symbolic::derivation::StepOptions,
};
use std::str::FromStr;
use super::{exponent_is_one, exponent_value, impl_display, power, render_exponent, step_exponent, Exponent, Node, Sign};

/// What a [`Term`] stands for.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A number, such as `3` or `-2.5`.
    Numeric(Number),

    /// A letter or a LaTeX command, such as `x` or `\pi`.
    Literal(String),
}

/// A signed number or letter, optionally raised to an exponent.
///
/// Terms built with [`Term::number`] keep the negativity of the number in their sign, so that the
/// payload is non-negative. A negative payload is only stored on purpose, to raise a negative
/// number to a power: `(−5)²` is built with `Term::signed(Sign::Plus, -5).with_exponent(2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub sign: Sign,
    pub payload: Payload,
    pub exponent: Exponent,

    /// Whether the term is crossed out, as a factor cancelled during fraction simplification.
    pub is_struck_out: bool,

    /// A unit written after the term, such as `cm`.
    pub unit: Option<String>,
}

impl Term {
    /// Creates a term from a number. The sign of the term is the sign of the number.
    pub fn number(n: impl Into<Number>) -> Self {
        let n = n.into();
        Self {
            sign: Sign::of(&n),
            payload: Payload::Numeric(n.abs()),
            exponent: None,
            is_struck_out: false,
            unit: None,
        }
    }

    /// Creates a term with the given sign and numeric payload, keeping the payload as is.
    pub fn signed(sign: Sign, value: impl Into<Number>) -> Self {
        Self {
            sign,
            payload: Payload::Numeric(value.into()),
            exponent: None,
            is_struck_out: false,
            unit: None,
        }
    }

    /// Creates a positive literal term. The name must be made of letters, or be a LaTeX command
    /// such as `\pi`.
    pub fn literal(name: &str) -> Result<Self, Error> {
        let valid = match name.strip_prefix('\\') {
            Some(command) => !command.is_empty() && command.chars().all(|c| c.is_ascii_alphabetic()),
            None => !name.is_empty() && name.chars().all(char::is_alphabetic),
        };
        if !valid {
            return Err(Error::new(name, InvalidConstructorArgument {
                node: "term",
                reason: format!("`{}` is neither a number nor a letter", name),
            }));
        }

        Ok(Self::from_letter(name))
    }

    /// Creates a positive literal term without checking the name.
    pub(crate) fn from_letter(name: &str) -> Self {
        Self {
            sign: Sign::Plus,
            payload: Payload::Literal(name.to_string()),
            exponent: None,
            is_struck_out: false,
            unit: None,
        }
    }

    /// Returns the term raised to the given exponent, replacing its current exponent.
    pub fn with_exponent(self, exponent: impl Into<Node>) -> Self {
        Self { exponent: Some(Box::new(exponent.into())), ..self }
    }

    pub fn with_sign(self, sign: Sign) -> Self {
        Self { sign, ..self }
    }

    pub fn with_unit(self, unit: &str) -> Self {
        Self { unit: Some(unit.to_string()), ..self }
    }

    /// Returns the term crossed out.
    pub fn struck_out(self) -> Self {
        Self { is_struck_out: true, ..self }
    }

    /// The numeric payload of the term, ignoring its sign and exponent.
    pub fn value(&self) -> Option<&Number> {
        match &self.payload {
            Payload::Numeric(n) => Some(n),
            Payload::Literal(_) => None,
        }
    }

    /// The letter of a literal term.
    pub fn letter(&self) -> Option<&str> {
        match &self.payload {
            Payload::Literal(name) => Some(name),
            Payload::Numeric(_) => None,
        }
    }

    /// The numeric payload with the sign applied, ignoring the exponent.
    pub fn signed_value(&self) -> Option<Number> {
        self.value().map(|n| self.sign.apply(n.clone()))
    }

    /// The value of a numeric term with exponent `1`.
    pub fn raw_value(&self) -> Result<Number, Error> {
        match self.signed_value() {
            Some(value) if self.has_unit_exponent() => Ok(value),
            _ => Err(Error::new(self.to_string(), NotNumeric)),
        }
    }

    pub fn has_unit_exponent(&self) -> bool {
        exponent_is_one(&self.exponent)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.payload, Payload::Numeric(_))
            && self.exponent.as_deref().map_or(true, Node::is_numeric)
    }

    pub fn evaluate(&self) -> Result<Number, Error> {
        match &self.payload {
            Payload::Numeric(value) => Ok(self.sign.apply(power(value.clone(), &self.exponent, self)?)),
            Payload::Literal(_) => Err(Error::new(self.to_string(), NotNumeric)),
        }
    }

    /// Returns true if the exponent is a plain `0`, which makes the term equal to `1`.
    fn has_zero_exponent(&self) -> bool {
        match self.exponent.as_deref() {
            Some(Node::Term(exponent)) => exponent.is_displ_as_a_single_0(),
            _ => false,
        }
    }

    pub fn is_displ_as_a_single_1(&self) -> bool {
        if self.is_struck_out {
            return false;
        }
        if self.has_zero_exponent() {
            return !self.sign.is_minus();
        }
        self.has_unit_exponent() && self.signed_value().map_or(false, |n| n.is_one())
    }

    pub fn is_displ_as_a_single_0(&self) -> bool {
        !self.is_struck_out
            && self.has_unit_exponent()
            && self.value().map_or(false, Number::is_zero)
    }

    pub fn is_displ_as_a_single_minus_1(&self) -> bool {
        !self.is_struck_out
            && self.has_unit_exponent()
            && self.signed_value().map_or(false, |n| n.is_minus_one())
    }

    /// Returns true if the payload is negative and must be bracketed so that the exponent applies
    /// to it, as in `(−5)²`. The sign of the term does not matter.
    pub fn requires_inner_brackets(&self) -> bool {
        let Some(value) = self.value() else {
            return false;
        };
        if !value.is_negative() {
            return false;
        }
        match self.exponent.as_deref() {
            None => false,
            Some(exponent) if exponent.is_displ_as_a_single_1() => false,
            Some(Node::Term(exponent)) => match exponent.signed_value() {
                Some(n) if exponent.has_unit_exponent() => !n.is_odd(),
                _ => true,
            },
            Some(_) => true,
        }
    }

    /// Returns true if the rendered term starts with a minus sign.
    pub(crate) fn displays_negative(&self) -> bool {
        match self.value() {
            Some(value) if value.is_negative() => {
                if self.requires_inner_brackets() || self.sign.is_minus() {
                    self.sign.is_minus()
                } else {
                    true
                }
            },
            _ => self.sign.is_minus(),
        }
    }

    /// Returns the next step of the calculation of the term.
    ///
    /// In order: the exponent is calculated, then the power is calculated, then a double negative
    /// `−(−a)` collapses to `a`. A bare signed number is at rest.
    pub fn calculate_next_step(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        if let Some(exponent) = step_exponent(&self.exponent, opts)? {
            return Ok(Some(Node::Term(Term { exponent, ..self.clone() })));
        }

        let Some(value) = self.value() else {
            return Ok(None);
        };

        if !self.has_unit_exponent() {
            if !self.is_numeric() {
                return Ok(None);
            }
            let exponent = exponent_value(&self.exponent)?;
            let magnitude = power(value.abs(), &self.exponent, self)?;
            return Ok(Some(Node::Term(Term {
                sign: self.sign * Sign::of(value).pow(exponent),
                payload: Payload::Numeric(magnitude),
                exponent: None,
                is_struck_out: self.is_struck_out,
                unit: self.unit.clone(),
            })));
        }

        if self.sign.is_minus() && value.is_negative() {
            return Ok(Some(Node::Term(Term {
                sign: Sign::Plus,
                payload: Payload::Numeric(value.abs()),
                ..self.clone()
            })));
        }

        Ok(None)
    }

    pub(crate) fn render(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        let markup = options.markup();
        let mut body = match &self.payload {
            Payload::Literal(name) => name.clone(),
            Payload::Numeric(value) => {
                let magnitude = options.number(&value.abs());
                if value.is_negative() && (self.requires_inner_brackets() || self.sign.is_minus()) {
                    bracketed(markup, &format!("{}{}", markup.minus, magnitude))
                } else {
                    magnitude
                }
            },
        };
        body.push_str(&render_exponent(self.exponent.as_deref(), options.force_display_exponents, options));

        if self.is_struck_out {
            body = format!("{}{}{}", markup.opening_out_striked, body, markup.closing_out_striked);
        }
        if let Some(unit) = &self.unit {
            body = format!("{}{}{}{}", body, markup.opening_unit, unit, markup.closing_unit);
        }

        format!("{}{}", ctx.sign(self.displays_negative(), markup), body)
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Term::number(n)
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::number(n)
    }
}

/// Parses a decimal number (`-3.5`) or a signed letter (`-x`, `+y`).
impl FromStr for Term {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(n) = Number::from_decimal_str(s) {
            return Ok(Term::number(n));
        }

        let (sign, name) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, s.strip_prefix('+').unwrap_or(s)),
        };
        Ok(Term::literal(name)?.with_sign(sign))
    }
}

impl_display!(Term);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{
        error::{NonIntegerExponent, NotNumeric},
        fmt::{FormatOptionsBuilder, Notation},
        primitive::num,
    };
    use super::*;

    fn step(term: &Term) -> Option<Node> {
        term.calculate_next_step(&StepOptions::default()).unwrap()
    }

    #[test]
    fn signed_numbers_are_at_rest() {
        assert_eq!(step(&Term::number(-5)), None);
        assert_eq!(step(&Term::signed(Sign::Plus, -5)), None);
        assert_eq!(step(&Term::literal("x").unwrap()), None);
    }

    #[test]
    fn power_of_negative_number() {
        let even = Term::signed(Sign::Plus, -5).with_exponent(2);
        assert_eq!(even.to_string(), "(-5)^2");
        assert_eq!(step(&even), Some(Node::Term(Term::number(25))));

        let odd = Term::signed(Sign::Plus, -2).with_exponent(3);
        assert_eq!(odd.to_string(), "-2^3");
        assert_eq!(step(&odd), Some(Node::Term(Term::number(-8))));

        let outer = Term::signed(Sign::Minus, -2).with_exponent(2);
        assert_eq!(outer.to_string(), "-(-2)^2");
        assert_eq!(step(&outer), Some(Node::Term(Term::number(-4))));
    }

    #[test]
    fn exponent_steps_first() {
        let exponent = Node::Sum(super::super::Sum::new(vec![Node::from(1), Node::from(2)]));
        let term = Term::number(2).with_exponent(exponent);
        assert_eq!(step(&term), Some(Node::Term(Term::number(2).with_exponent(3))));
    }

    #[test]
    fn double_negative_collapses() {
        let term = Term::signed(Sign::Minus, -7);
        assert_eq!(term.to_string(), "-(-7)");
        assert_eq!(step(&term), Some(Node::Term(Term::number(7))));
    }

    #[test]
    fn literal_cannot_be_evaluated() {
        let err = Term::literal("x").unwrap().evaluate().unwrap_err();
        assert!(err.is::<NotNumeric>());
        assert_eq!(err.expr, "x");
    }

    #[test]
    fn fractional_exponent_is_rejected() {
        let half = Node::Term(Term::number(num((1, 2))));
        let err = Term::number(4).with_exponent(half).evaluate().unwrap_err();
        assert!(err.is::<NonIntegerExponent>());
    }

    #[test]
    fn parse_terms() {
        assert_eq!("-3.5".parse::<Term>().unwrap(), Term::number(num((-7, 2))));
        assert_eq!("-y".parse::<Term>().unwrap(), Term::literal("y").unwrap().with_sign(Sign::Minus));
        assert_eq!("\\pi".parse::<Term>().unwrap().to_string(), "\\pi");
        assert!("2x".parse::<Term>().is_err());
        assert!("".parse::<Term>().is_err());
    }

    #[test]
    fn display_predicates() {
        assert!(Term::number(1).is_displ_as_a_single_1());
        assert!(Term::literal("x").unwrap().with_exponent(0).is_displ_as_a_single_1());
        assert!(!Term::number(1).struck_out().is_displ_as_a_single_1());
        assert!(Term::number(-1).is_displ_as_a_single_minus_1());
        assert!(!Term::signed(Sign::Minus, -1).is_displ_as_a_single_minus_1());
        assert!(Term::number(0).is_displ_as_a_single_0());
    }

    #[test]
    fn render_options() {
        let latex = FormatOptionsBuilder::new()
            .force_display_sign(true)
            .force_display_exponents(true)
            .build();
        let term = Term::literal("x").unwrap();
        assert_eq!(Node::Term(term.clone()).into_str(&latex), "+x^{1}");

        let plain = Notation::Plain.inside(Default::default());
        let struck = Term::number(2).struck_out();
        assert_eq!(Node::Term(struck.clone()).into_str(&plain), "~2~");
        assert_eq!(Node::Term(struck).into_str(&Default::default()), "\\cancel{2}");

        let with_unit = Term::number(num((5, 2))).with_unit("cm");
        assert_eq!(with_unit.to_string(), "2.5 cm");
    }
}
