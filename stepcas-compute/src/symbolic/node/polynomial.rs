use crate::{
    consts::{DEFAULT_LETTER, ZERO_POLYNOMIAL_DEGREE},
    error::Error,
    fmt::{FormatOptions, RenderContext},
    primitive::Number,
    symbolic::{derivation::StepOptions, lexicon::LexiconKey},
};
use log::debug;
use super::{exponent_value, impl_display, power, Monomial, Node, Sum};

/// A sum of monomials, such as `3x^3-2x+1`.
///
/// The monomials are not necessarily reduced or ordered; see [`Polynomial::reduce_`] and
/// [`Polynomial::ordered`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    sum: Sum,

    /// The intermediate line of a reduction, such as `(4+1)x^2+3`, written in place of the
    /// monomials. The next step gathers them.
    reduction_line: Option<Sum>,
}

impl Polynomial {
    /// Creates a polynomial from its monomials. An empty list gives the zero polynomial.
    pub fn new(monomials: Vec<Monomial>) -> Self {
        if monomials.is_empty() {
            return Self::zero();
        }
        Self {
            sum: Sum::new(monomials.into_iter().map(Node::Monomial).collect()),
            reduction_line: None,
        }
    }

    /// The polynomial `0`.
    pub fn zero() -> Self {
        Self {
            sum: Sum::new(vec![Node::Monomial(Monomial::new(0, 0))]),
            reduction_line: None,
        }
    }

    /// Creates a polynomial of the letter `x` from its coefficients, highest degree first. Zero
    /// coefficients are skipped.
    ///
    /// ```
    /// use stepcas_compute::symbolic::node::Polynomial;
    ///
    /// let polynomial = Polynomial::from_coefficients([3, 0, -2, 1]);
    /// assert_eq!(polynomial.to_string(), "3x^3-2x+1");
    /// ```
    pub fn from_coefficients<T: Into<Number>>(coefficients: impl IntoIterator<Item = T>) -> Self {
        let coefficients = coefficients.into_iter().map(Into::into).collect::<Vec<Number>>();
        let top = coefficients.len() as i64 - 1;
        let monomials = coefficients.into_iter()
            .enumerate()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|(i, coefficient)| Monomial::from_parts(DEFAULT_LETTER, coefficient, top - i as i64))
            .collect();
        Self::new(monomials)
    }

    /// The monomials of the polynomial, in order.
    pub fn monomials(&self) -> impl Iterator<Item = &Monomial> {
        self.sum.elements.iter().filter_map(|element| match element {
            Node::Monomial(monomial) => Some(monomial),
            _ => None,
        })
    }

    /// The highest degree of the monomials, or [`ZERO_POLYNOMIAL_DEGREE`] for the zero
    /// polynomial. Exponents of the monomials themselves are not taken into account.
    pub fn degree(&self) -> i64 {
        self.monomials()
            .map(Monomial::degree)
            .max()
            .unwrap_or(ZERO_POLYNOMIAL_DEGREE)
    }

    pub fn as_sum(&self) -> &Sum {
        &self.sum
    }

    pub fn into_sum(self) -> Sum {
        self.sum
    }

    /// The sum that is written: the reduction line if there is one, otherwise the monomials.
    pub(crate) fn displayed_sum(&self) -> &Sum {
        self.reduction_line.as_ref().unwrap_or(&self.sum)
    }

    pub fn is_numeric(&self) -> bool {
        self.sum.is_numeric()
    }

    pub fn evaluate(&self) -> Result<Number, Error> {
        self.sum.evaluate()
    }

    /// Evaluates the polynomial with its letter replaced by `x`.
    pub fn value_at(&self, x: &Number) -> Result<Number, Error> {
        self.monomials()
            .map(|monomial| -> Result<Number, Error> {
                let monomial = monomial.reduced()?;
                let coefficient = monomial.coefficient.evaluate()?;
                Ok(coefficient * power(x.clone(), &monomial.letter_power.exponent, self)?)
            })
            .sum()
    }

    /// The letter and degree of a monomial, which like monomials share.
    fn key(monomial: &Monomial) -> Result<(String, i32), Error> {
        Ok((monomial.letter().to_string(), exponent_value(&monomial.letter_power.exponent)?))
    }

    /// Returns true if this polynomial is the intermediate line of a reduction.
    pub fn is_pending_reduction(&self) -> bool {
        self.reduction_line.is_some()
    }

    /// Returns true if some monomials still have an exponent to apply, are like monomials, or
    /// are zeros next to other monomials.
    pub fn is_reducible(&self) -> bool {
        if self.reduction_line.is_some() || self.monomials().any(Monomial::is_reducible) {
            return true;
        }
        if self.sum.elements.len() > 1 && self.monomials().any(Monomial::is_displ_as_a_single_0) {
            return true;
        }

        let mut keys = Vec::new();
        for monomial in self.monomials() {
            let Ok(key) = Self::key(monomial) else {
                continue;
            };
            if keys.contains(&key) {
                return true;
            }
            keys.push(key);
        }
        false
    }

    /// Gathers like monomials, keeping them in order of first appearance. Monomials that cancel
    /// out are dropped.
    pub fn reduce_(&self) -> Result<Polynomial, Error> {
        let mut gathered: Vec<((String, i32), Number)> = Vec::new();
        for monomial in self.monomials() {
            let monomial = monomial.reduced()?;
            let key = Self::key(&monomial)?;
            let coefficient = monomial.coefficient.evaluate()?;
            match gathered.iter_mut().find(|(k, _)| *k == key) {
                Some((_, total)) => *total = total.clone() + coefficient,
                None => gathered.push((key, coefficient)),
            }
        }

        let monomials = gathered.into_iter()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|((letter, degree), coefficient)| Monomial::from_parts(&letter, coefficient, i64::from(degree)))
            .collect();
        Ok(Self::new(monomials))
    }

    /// Writes like monomials with their coefficients gathered in brackets, as in
    /// `(2-1)x^2+(3-3)x+5`, in order of first appearance. Returns [`None`] if there are no like
    /// monomials.
    pub fn reduction_line(&self) -> Result<Option<Sum>, Error> {
        let mut groups: Vec<((String, i32), LexiconKey, Vec<Node>)> = Vec::new();
        for monomial in self.monomials() {
            let monomial = monomial.reduced()?;
            let key = Self::key(&monomial)?;
            let coefficient = Node::Term(monomial.coefficient.clone());
            match groups.iter_mut().find(|(k, _, _)| *k == key) {
                Some((_, _, coefficients)) => coefficients.push(coefficient),
                None => {
                    let literal = if key.1 == 0 {
                        LexiconKey::Numeric
                    } else {
                        LexiconKey::Literal(vec![Node::Term(monomial.letter_power.clone())])
                    };
                    groups.push((key, literal, vec![coefficient]));
                },
            }
        }
        if groups.iter().all(|(_, _, coefficients)| coefficients.len() == 1) {
            return Ok(None);
        }

        let elements = groups.into_iter()
            .map(|(_, literal, mut coefficients)| {
                let coefficient = match coefficients.len() {
                    1 => coefficients.remove(0),
                    _ => Node::Sum(Sum::new(coefficients)),
                };
                literal.with_coefficient_node(coefficient)
            })
            .collect();
        Ok(Some(Sum::new(elements)))
    }

    /// Copy of the polynomial with its monomials sorted by decreasing degree.
    pub fn ordered(&self) -> Polynomial {
        let mut monomials = self.monomials().cloned().collect::<Vec<_>>();
        monomials.sort_by_key(|monomial| std::cmp::Reverse(monomial.degree()));
        Self::new(monomials)
    }

    /// Returns the next step of the reduction of the polynomial: exponents of the monomials are
    /// applied one at a time, then like monomials are gathered into an intermediate line
    /// (evaluated on the next step), then zeros are dropped.
    pub fn calculate_next_step(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        if self.reduction_line.is_some() {
            let reduced = self.reduce_()?;
            debug!("gathered {} into {}", self, reduced);
            return Ok(Some(Node::Polynomial(reduced)));
        }

        for (i, element) in self.sum.elements.iter().enumerate() {
            if let Some(next) = element.calculate_next_step_with(opts)? {
                let mut sum = self.sum.clone();
                sum.elements[i] = next;
                return Ok(Some(match sum.elements.iter().all(|e| matches!(e, Node::Monomial(_))) {
                    true => Node::Polynomial(Polynomial { sum, reduction_line: None }),
                    false => Node::Sum(sum),
                }));
            }
        }

        if let Some(line) = self.reduction_line()? {
            debug!("like monomials of {} gathered as {}", self, line);
            return Ok(Some(Node::Polynomial(Polynomial {
                sum: self.sum.clone(),
                reduction_line: Some(line),
            })));
        }
        if !self.is_reducible() {
            return Ok(None);
        }
        let reduced = self.reduce_()?;
        debug!("dropped the zeros of {}", self);
        Ok(Some(Node::Polynomial(reduced)))
    }

    pub(crate) fn render(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        self.displayed_sum().render(ctx, options)
    }
}

impl_display!(Polynomial);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{fmt::FormatOptionsBuilder, primitive::num};
    use super::*;

    fn step(polynomial: &Polynomial) -> Option<Node> {
        polynomial.calculate_next_step(&StepOptions::default()).unwrap()
    }

    #[test]
    fn from_coefficients() {
        let polynomial = Polynomial::from_coefficients([3, 0, -2, 1]);
        assert_eq!(polynomial.to_string(), "3x^3-2x+1");
        assert_eq!(polynomial.degree(), 3);
        assert_eq!(polynomial.monomials().count(), 3);

        let latex = FormatOptionsBuilder::new().build();
        assert_eq!(Node::Polynomial(polynomial).into_str(&latex), "3x^{3}-2x+1");
    }

    #[test]
    fn zero_polynomial() {
        let zero = Polynomial::from_coefficients([0, 0]);
        assert_eq!(zero, Polynomial::zero());
        assert_eq!(zero.to_string(), "0");
        assert_eq!(zero.degree(), ZERO_POLYNOMIAL_DEGREE);
        assert_eq!(zero.evaluate().unwrap(), num(0));
    }

    #[test]
    fn value_at() {
        let polynomial = Polynomial::from_coefficients([3, 0, -2, 1]);
        assert_eq!(polynomial.value_at(&num(2)).unwrap(), num(21));
        assert_eq!(polynomial.value_at(&num(0)).unwrap(), num(1));
        assert!(polynomial.evaluate().is_err());
    }

    #[test]
    fn gathers_like_monomials() {
        let polynomial = Polynomial::new(vec![
            Monomial::new(2, 2),
            Monomial::new(3, 1),
            Monomial::new(-1, 2),
            Monomial::new(5, 0),
            Monomial::new(-3, 1),
        ]);
        assert!(polynomial.is_reducible());
        assert_eq!(polynomial.reduce_().unwrap().to_string(), "x^2+5");
        assert!(!polynomial.reduce_().unwrap().is_reducible());

        let Some(Node::Polynomial(line)) = step(&polynomial) else {
            panic!("expected a polynomial");
        };
        assert!(line.is_pending_reduction());
        assert_eq!(line.to_string(), "(2-1)x^2+(3-3)x+5");
        assert_eq!(step(&line), Some(Node::Polynomial(polynomial.reduce_().unwrap())));
    }

    #[test]
    fn same_steps_as_a_sum_of_monomials() {
        let monomials = vec![Monomial::new(4, 2), Monomial::new(1, 2)];
        let sum = Sum::new(monomials.iter().cloned().map(Node::Monomial).collect());
        let polynomial = Polynomial::new(monomials);

        let sum_line = sum.calculate_next_step(&StepOptions::default()).unwrap().unwrap();
        let polynomial_line = step(&polynomial).unwrap();
        assert_eq!(polynomial_line.to_string(), "(4+1)x^2");
        assert_eq!(polynomial_line.to_string(), sum_line.to_string());
    }

    #[test]
    fn zeros_are_dropped_without_a_line() {
        let polynomial = Polynomial::new(vec![Monomial::new(0, 2), Monomial::new(3, 1)]);
        assert_eq!(polynomial.reduction_line().unwrap(), None);
        assert_eq!(step(&polynomial).unwrap().to_string(), "3x");
    }

    #[test]
    fn cancelling_monomials() {
        let polynomial = Polynomial::new(vec![Monomial::new(2, 1), Monomial::new(-2, 1)]);
        assert_eq!(polynomial.reduce_().unwrap(), Polynomial::zero());
    }

    #[test]
    fn ordered_by_decreasing_degree() {
        let polynomial = Polynomial::new(vec![
            Monomial::new(5, 0),
            Monomial::new(1, 2),
            Monomial::new(3, 1),
        ]);
        assert_eq!(polynomial.ordered().to_string(), "x^2+3x+5");
    }

    #[test]
    fn exponents_are_applied_first() {
        let polynomial = Polynomial::new(vec![
            Monomial::new(-2, 1).with_exponent(2),
            Monomial::new(1, 2),
        ]);
        assert_eq!(polynomial.to_string(), "(-2x)^2+x^2");

        let next = step(&polynomial).unwrap();
        assert_eq!(next.to_string(), "4x^2+x^2");

        let Node::Polynomial(next) = next else {
            panic!("expected a polynomial");
        };
        let line = step(&next).unwrap();
        assert_eq!(line.to_string(), "(4+1)x^2");
        assert_eq!(line.calculate_next_step().unwrap().unwrap().to_string(), "5x^2");
    }
}
