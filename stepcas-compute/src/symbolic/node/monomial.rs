use crate::{
    consts::{DEFAULT_LETTER, ZERO_POLYNOMIAL_DEGREE},
    error::{Error, NotNumeric},
    fmt::{bracketed, FormatOptions, RenderContext},
    primitive::Number,
    symbolic::derivation::StepOptions,
};
use super::{
    exponent_is_one,
    exponent_value,
    impl_display,
    power,
    render_exponent,
    step_exponent,
    Exponent,
    Node,
    Sign,
    Term,
};

/// A coefficient times a letter raised to a degree, such as `-3x^2`.
///
/// The sign of a monomial is the sign of its coefficient, and its exponent applies to the whole
/// monomial: `(-3x^2)^2` is `9x^4`.
#[derive(Debug, Clone, PartialEq)]
pub struct Monomial {
    pub coefficient: Term,

    /// The letter, raised to the degree of the monomial. A degree of `1` is not stored.
    pub letter_power: Term,

    pub exponent: Exponent,
}

impl Monomial {
    /// Creates a monomial of the letter `x`.
    pub fn new(coefficient: impl Into<Number>, degree: u32) -> Self {
        Self::from_parts(DEFAULT_LETTER, coefficient.into(), i64::from(degree))
    }

    /// Creates a monomial of the given letter.
    pub fn with_letter(letter: &str, coefficient: impl Into<Number>, degree: u32) -> Result<Self, Error> {
        Term::literal(letter)?;
        Ok(Self::from_parts(letter, coefficient.into(), i64::from(degree)))
    }

    /// Creates a monomial without checking the letter.
    pub(crate) fn from_parts(letter: &str, coefficient: Number, degree: i64) -> Self {
        let letter = Term::from_letter(letter);
        let letter_power = if degree == 1 { letter } else { letter.with_exponent(degree) };
        Self {
            coefficient: Term::number(coefficient),
            letter_power,
            exponent: None,
        }
    }

    pub fn with_exponent(self, exponent: impl Into<Node>) -> Self {
        Self { exponent: Some(Box::new(exponent.into())), ..self }
    }

    /// The degree of the monomial, or [`ZERO_POLYNOMIAL_DEGREE`] if its coefficient is zero.
    ///
    /// The exponent of the monomial is not taken into account.
    pub fn degree(&self) -> i64 {
        if self.coefficient.is_displ_as_a_single_0() {
            return ZERO_POLYNOMIAL_DEGREE;
        }
        exponent_value(&self.letter_power.exponent).map_or(1, i64::from)
    }

    pub fn letter(&self) -> &str {
        self.letter_power.letter().unwrap_or(DEFAULT_LETTER)
    }

    pub fn sign(&self) -> Sign {
        self.coefficient.sign
    }

    /// Returns the monomial with the given sign on its coefficient.
    pub fn with_sign(self, sign: Sign) -> Node {
        Node::Monomial(Monomial {
            coefficient: self.coefficient.with_sign(sign),
            ..self
        })
    }

    pub fn has_unit_exponent(&self) -> bool {
        exponent_is_one(&self.exponent)
    }

    fn hides_letter(&self) -> bool {
        self.letter_power.is_displ_as_a_single_1()
    }

    /// Returns true if the coefficient is written, which is the case unless it is `1` or `-1`
    /// in front of a letter.
    pub(crate) fn has_visible_coefficient(&self) -> bool {
        self.hides_letter() || !(self.coefficient.is_displ_as_a_single_1() || self.coefficient.is_displ_as_a_single_minus_1())
    }

    /// Returns true if the monomial has no letter to speak of: its degree is `0` or its
    /// coefficient is zero.
    pub fn is_numeric(&self) -> bool {
        (self.hides_letter() || self.coefficient.is_displ_as_a_single_0())
            && self.exponent.as_deref().map_or(true, Node::is_numeric)
    }

    pub fn evaluate(&self) -> Result<Number, Error> {
        if !self.is_numeric() {
            return Err(Error::new(self.to_string(), NotNumeric));
        }
        let value = self.coefficient.evaluate()?;
        power(value, &self.exponent, self)
    }

    pub fn is_displ_as_a_single_1(&self) -> bool {
        self.has_unit_exponent() && self.hides_letter() && self.coefficient.is_displ_as_a_single_1()
    }

    pub fn is_displ_as_a_single_0(&self) -> bool {
        self.has_unit_exponent() && self.coefficient.is_displ_as_a_single_0()
    }

    pub fn is_displ_as_a_single_minus_1(&self) -> bool {
        self.has_unit_exponent() && self.hides_letter() && self.coefficient.is_displ_as_a_single_minus_1()
    }

    pub(crate) fn displays_negative(&self) -> bool {
        self.has_unit_exponent() && self.coefficient.displays_negative()
    }

    /// Returns true if the exponent of the monomial can be applied to its coefficient and
    /// degree.
    pub fn is_reducible(&self) -> bool {
        !self.has_unit_exponent() && exponent_value(&self.exponent).is_ok()
    }

    /// The monomial with its exponent applied: `(2x^3)^2` gives `4x^6`.
    pub fn reduced(&self) -> Result<Monomial, Error> {
        if !self.is_reducible() {
            return Ok(self.clone());
        }
        let e = exponent_value(&self.exponent)?;
        let coefficient = power(self.coefficient.evaluate()?, &self.exponent, self)?;
        let degree = exponent_value(&self.letter_power.exponent)? * e;
        Ok(Self::from_parts(self.letter(), coefficient, i64::from(degree)))
    }

    pub fn reduce_(&self) -> Result<Node, Error> {
        Ok(Node::Monomial(self.reduced()?))
    }

    /// Returns the next step of the monomial: its exponent is calculated, then applied.
    pub fn calculate_next_step(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        if let Some(exponent) = step_exponent(&self.exponent, opts)? {
            return Ok(Some(Node::Monomial(Monomial { exponent, ..self.clone() })));
        }
        if self.is_reducible() {
            return Ok(Some(self.reduce_()?));
        }
        Ok(None)
    }

    pub(crate) fn render(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        let markup = options.markup();
        let coefficient = Term { sign: Sign::Plus, ..self.coefficient.clone() };
        let body = if self.hides_letter() {
            coefficient.render(RenderContext::beginning(), options)
        } else {
            let letter = self.letter_power.render(RenderContext::beginning(), options);
            if self.has_visible_coefficient() {
                let times = if markup.implicit_multiplication { "" } else { markup.times };
                format!("{}{}{}", coefficient.render(RenderContext::beginning(), options), times, letter)
            } else {
                letter
            }
        };

        let negative = self.coefficient.displays_negative();
        if self.has_unit_exponent() {
            return format!("{}{}", ctx.sign(negative, markup), body);
        }
        let signed = if negative { format!("{}{}", markup.minus, body) } else { body };
        format!(
            "{}{}{}",
            ctx.sign(false, markup),
            bracketed(markup, &signed),
            render_exponent(self.exponent.as_deref(), false, options),
        )
    }
}

impl_display!(Monomial);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{fmt::FormatOptionsBuilder, primitive::num};
    use super::*;

    #[test]
    fn degree_and_letter() {
        assert_eq!(Monomial::new(3, 2).degree(), 2);
        assert_eq!(Monomial::new(3, 1).degree(), 1);
        assert_eq!(Monomial::new(3, 0).degree(), 0);
        assert_eq!(Monomial::new(0, 4).degree(), ZERO_POLYNOMIAL_DEGREE);
        assert_eq!(Monomial::with_letter("t", 1, 3).unwrap().letter(), "t");
        assert!(Monomial::with_letter("2", 1, 3).is_err());
    }

    #[test]
    fn render_golden() {
        let latex = FormatOptionsBuilder::new().build();
        let js = FormatOptionsBuilder::new().js_repr(true).build();

        assert_eq!(Monomial::new(-3, 2).to_string(), "-3x^2");
        assert_eq!(Monomial::new(1, 1).to_string(), "x");
        assert_eq!(Monomial::new(-1, 3).to_string(), "-x^3");
        assert_eq!(Monomial::new(5, 0).to_string(), "5");
        assert_eq!(Node::Monomial(Monomial::new(-3, 2)).into_str(&latex), "-3x^{2}");
        assert_eq!(Node::Monomial(Monomial::new(3, 2)).into_str(&js), "3*x^2");
        assert_eq!(Monomial::new(-2, 1).with_exponent(2).to_string(), "(-2x)^2");
    }

    #[test]
    fn exponent_applies_to_the_coefficient() {
        let monomial = Monomial::new(-2, 3).with_exponent(2);
        let next = monomial.calculate_next_step(&StepOptions::default()).unwrap();
        assert_eq!(next, Some(Node::Monomial(Monomial::new(4, 6))));
        assert_eq!(monomial.evaluate().unwrap_err().is::<NotNumeric>(), true);
    }

    #[test]
    fn numeric_monomials() {
        assert!(Monomial::new(7, 0).is_numeric());
        assert_eq!(Monomial::new(7, 0).evaluate().unwrap(), num(7));
        assert_eq!(Monomial::new(0, 3).evaluate().unwrap(), num(0));
        assert!(Monomial::new(0, 3).is_displ_as_a_single_0());
        assert!(!Monomial::new(2, 1).is_numeric());
    }
}
