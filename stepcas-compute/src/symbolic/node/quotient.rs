use crate::{
    consts::DEFAULT_QUOTIENT_PRECISION,
    error::{DivisionByZero, Error},
    fmt::{bracketed, FormatOptions, RenderContext},
    primitive::Number,
    symbolic::derivation::StepOptions,
};
use super::{
    exponent_is_one,
    fraction::render_fraction,
    impl_display,
    power,
    render_exponent,
    step_exponent,
    wrap_result,
    Exponent,
    Node,
    Product,
    Sign,
};

/// How a [`Quotient`] is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuotientSymbol {
    /// As a fraction, such as `\frac{48}{6}`.
    #[default]
    Fraction,

    /// With a division sign, such as `48÷6`.
    Divide,
}

/// A division of any two nodes.
///
/// Unlike a [`Fraction`](super::Fraction), a quotient is not simplified: once its operands are
/// calculated, it is replaced by its (rounded) decimal value.
#[derive(Debug, Clone, PartialEq)]
pub struct Quotient {
    pub sign: Sign,
    pub numerator: Box<Node>,
    pub denominator: Box<Node>,
    pub exponent: Exponent,
    pub symbol: QuotientSymbol,
}

impl Quotient {
    /// Creates a quotient.
    ///
    /// Returns [`DivisionByZero`] if the denominator is numeric and evaluates to zero.
    pub fn new(
        sign: Sign,
        numerator: impl Into<Node>,
        denominator: impl Into<Node>,
        symbol: QuotientSymbol,
    ) -> Result<Self, Error> {
        let quotient = Self {
            sign,
            numerator: Box::new(numerator.into()),
            denominator: Box::new(denominator.into()),
            exponent: None,
            symbol,
        };
        quotient.check_denominator()?;
        Ok(quotient)
    }

    pub fn with_exponent(self, exponent: impl Into<Node>) -> Self {
        Self { exponent: Some(Box::new(exponent.into())), ..self }
    }

    fn check_denominator(&self) -> Result<(), Error> {
        if self.denominator.is_numeric() && self.denominator.evaluate()?.is_zero() {
            return Err(Error::new(self.to_string(), DivisionByZero));
        }
        Ok(())
    }

    /// The quotient upside down, written as a fraction.
    pub fn reciprocal(&self) -> Result<Quotient, Error> {
        let reciprocal = Quotient {
            sign: Sign::Plus,
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
            exponent: None,
            symbol: QuotientSymbol::Fraction,
        };
        reciprocal.check_denominator()?;
        Ok(reciprocal)
    }

    pub fn is_numeric(&self) -> bool {
        self.numerator.is_numeric()
            && self.denominator.is_numeric()
            && self.exponent.as_deref().map_or(true, Node::is_numeric)
    }

    pub fn evaluate(&self) -> Result<Number, Error> {
        let numerator = self.numerator.evaluate()?;
        let denominator = self.denominator.evaluate()?;
        let value = numerator.checked_div(&denominator)
            .ok_or_else(|| Error::new(self.to_string(), DivisionByZero))?;
        Ok(self.sign.apply(power(value, &self.exponent, self)?))
    }

    /// The value of the division, rounded to the given number of decimal places.
    fn rounded(&self, precision: u32) -> Result<Node, Error> {
        let numerator = self.numerator.evaluate()?;
        let denominator = self.denominator.evaluate()?;
        let value = numerator.checked_div(&denominator)
            .ok_or_else(|| Error::new(self.to_string(), DivisionByZero))?;
        Ok(wrap_result(Node::from(value.rounded(precision)), self.sign, self.exponent.clone()))
    }

    /// Returns the next step of the calculation of the quotient.
    ///
    /// A fraction denominator is first replaced by a multiplication by its reciprocal. Otherwise
    /// the left-most operand that can progress takes a step. Once both operands are at rest,
    /// nested quotients are unwrapped, and a numeric quotient is replaced by its value, rounded to
    /// [`StepOptions::decimal_result`] places (or [`DEFAULT_QUOTIENT_PRECISION`] if unset).
    pub fn calculate_next_step(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        if let Some(exponent) = step_exponent(&self.exponent, opts)? {
            return Ok(Some(Node::Quotient(Quotient { exponent, ..self.clone() })));
        }

        if let Node::Fraction(fraction) = &*self.denominator {
            let product = Product::new(vec![
                (*self.numerator).clone(),
                Node::Fraction(fraction.reciprocal()?),
            ]);
            return Ok(Some(Node::Product(Product {
                sign: self.sign,
                exponent: self.exponent.clone(),
                ..product
            })));
        }

        if let Some(numerator) = self.numerator.next_step_in_operation(opts)? {
            return Ok(Some(Node::Quotient(Quotient { numerator: Box::new(numerator), ..self.clone() })));
        }
        if let Some(denominator) = self.denominator.next_step_in_operation(opts)? {
            let quotient = Quotient { denominator: Box::new(denominator), ..self.clone() };
            quotient.check_denominator()?;
            return Ok(Some(Node::Quotient(quotient)));
        }

        if let (Some(precision), true) = (opts.decimal_result, self.is_numeric()) {
            return Ok(Some(self.rounded(precision)?));
        }

        if let Node::Quotient(denominator) = &*self.denominator {
            let product = Product::new(vec![
                (*self.numerator).clone(),
                Node::Quotient(denominator.reciprocal()?),
            ]);
            return Ok(Some(Node::Product(Product {
                sign: self.sign * denominator.sign,
                exponent: self.exponent.clone(),
                ..product
            })));
        }
        if let Node::Quotient(numerator) = &*self.numerator {
            if exponent_is_one(&numerator.exponent) {
                let denominator = Product::new(vec![
                    (*numerator.denominator).clone(),
                    (*self.denominator).clone(),
                ]);
                return Ok(Some(Node::Quotient(Quotient {
                    sign: self.sign * numerator.sign,
                    numerator: numerator.numerator.clone(),
                    denominator: Box::new(Node::Product(denominator)),
                    ..self.clone()
                })));
            }
        }

        if !self.is_numeric() {
            return Ok(None);
        }
        Ok(Some(self.rounded(DEFAULT_QUOTIENT_PRECISION)?))
    }

    pub(crate) fn render(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        let markup = options.markup();
        let body = match self.symbol {
            QuotientSymbol::Fraction => render_fraction(&self.numerator, &self.denominator, options),
            QuotientSymbol::Divide => {
                let numerator = match &*self.numerator {
                    Node::Sum(sum) if sum.has_unit_exponent() && sum.visible_len() > 1 => {
                        bracketed(markup, &self.numerator.render(RenderContext::beginning(), options).0)
                    },
                    numerator => numerator.render(RenderContext::beginning(), options).0,
                };
                let denominator_ctx = if self.denominator.is_compound() {
                    RenderContext::beginning().with_brackets()
                } else {
                    RenderContext::beginning()
                };
                format!(
                    "{}{}{}",
                    numerator,
                    markup.divide,
                    self.denominator.render(denominator_ctx, options).0,
                )
            },
        };

        let body = if exponent_is_one(&self.exponent) {
            body
        } else {
            format!(
                "{}{}",
                bracketed(markup, &body),
                render_exponent(self.exponent.as_deref(), false, options),
            )
        };
        format!("{}{}", ctx.sign(self.sign.is_minus(), markup), body)
    }
}

impl_display!(Quotient);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{
        fmt::FormatOptionsBuilder,
        primitive::num,
        symbolic::node::{Fraction, Sum, Term},
    };
    use super::*;

    fn divide(n: impl Into<Node>, d: impl Into<Node>) -> Quotient {
        Quotient::new(Sign::Plus, n, d, QuotientSymbol::Divide).unwrap()
    }

    fn step(quotient: &Quotient) -> Option<Node> {
        quotient.calculate_next_step(&StepOptions::default()).unwrap()
    }

    #[test]
    fn exact_division() {
        let quotient = divide(48, 6);
        assert_eq!(quotient.to_string(), "48÷6");
        assert_eq!(step(&quotient), Some(Node::from(8)));
    }

    #[test]
    fn rounded_division() {
        let quotient = divide(1, 3);
        assert_eq!(step(&quotient), Some(Node::from(num((3333, 10000)))));

        let opts = StepOptions { decimal_result: Some(2) };
        let next = quotient.calculate_next_step(&opts).unwrap();
        assert_eq!(next, Some(Node::from(num((33, 100)))));
        assert_eq!(next.unwrap().to_string(), "0.33");
    }

    #[test]
    fn operands_step_first() {
        let numerator = Sum::new(vec![Node::from(40), Node::from(8)]);
        let quotient = divide(numerator, 6);
        assert_eq!(quotient.to_string(), "(40+8)÷6");
        assert_eq!(step(&quotient).unwrap().to_string(), "48÷6");
    }

    #[test]
    fn fraction_denominator_becomes_a_product() {
        let fraction = Fraction::new(Sign::Plus, 2, 3).unwrap();
        let quotient = divide(4, fraction);
        assert_eq!(step(&quotient).unwrap().to_string(), "4×3/2");
    }

    #[test]
    fn nested_numerator() {
        let x = Node::Term(Term::literal("x").unwrap());
        let quotient = divide(Node::Quotient(divide(x, 2)), 3);
        assert_eq!(step(&quotient).unwrap().to_string(), "x÷(2×3)");
    }

    #[test]
    fn quotient_denominator_becomes_a_product() {
        let x = Node::Term(Term::literal("x").unwrap());
        let quotient = divide(6, Node::Quotient(divide(x.clone(), 2)));
        assert_eq!(quotient.to_string(), "6÷(x÷2)");
        assert_eq!(step(&quotient).unwrap().to_string(), "6×2/x");

        let negative = Quotient::new(Sign::Minus, x, 2, QuotientSymbol::Divide).unwrap();
        let quotient = divide(6, Node::Quotient(negative));
        assert_eq!(step(&quotient).unwrap().to_string(), "-6×2/x");
    }

    #[test]
    fn literal_quotient_is_at_rest() {
        let x = Node::Term(Term::literal("x").unwrap());
        assert_eq!(step(&divide(x, 2)), None);
    }

    #[test]
    fn zero_divisor() {
        let err = Quotient::new(Sign::Plus, 1, 0, QuotientSymbol::Divide).unwrap_err();
        assert!(err.is::<DivisionByZero>());

        let difference = Sum::new(vec![Node::from(2), Node::from(-2)]);
        let err = Quotient::new(Sign::Plus, 5, difference, QuotientSymbol::Divide).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert_eq!(err.expr, "5÷(2-2)");
    }

    #[test]
    fn render_golden() {
        let latex = FormatOptionsBuilder::new().build();
        let quotient = Node::Quotient(divide(48, -6));
        assert_eq!(quotient.to_string(), "48÷(-6)");
        assert_eq!(quotient.into_str(&latex), "48\\div (-6)");

        let fraction = Node::Quotient(Quotient::new(Sign::Minus, 1, 2, QuotientSymbol::Fraction).unwrap());
        assert_eq!(fraction.into_str(&latex), "-\\frac{1}{2}");
    }
}
