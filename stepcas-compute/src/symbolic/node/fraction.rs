use crate::{
    error::{DivisionByZero, Error, InvalidConstructorArgument},
    fmt::{bracketed, FormatOptions, RenderContext},
    primitive::Number,
    symbolic::derivation::StepOptions,
};
use log::debug;
use super::{
    exponent_is_one,
    exponent_value,
    impl_display,
    power,
    render_exponent,
    step_exponent,
    wrap_result,
    DisplayStyle,
    Exponent,
    Node,
    Operation,
    Product,
    Sign,
    Term,
};

/// A fraction whose numerator and denominator are products of terms, such as `(2×3)/(4×5)`.
///
/// A fraction can be simplified step by step: common factors are first written out and struck
/// through, as in `(~2~×23)/(~2~×19)`, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Fraction {
    pub sign: Sign,

    /// Normally a [`Product`] of terms. A sum is allowed while the numerators of fractions
    /// with the same denominator are being added together.
    pub numerator: Box<Node>,
    pub denominator: Box<Node>,
    pub exponent: Exponent,
}

impl Fraction {
    /// Creates a fraction. The numerator and denominator must be terms or products of terms;
    /// terms are wrapped in a 1-factor product.
    ///
    /// Returns [`DivisionByZero`] if the denominator is numeric and evaluates to zero.
    pub fn new(sign: Sign, numerator: impl Into<Node>, denominator: impl Into<Node>) -> Result<Self, Error> {
        let fraction = Self {
            sign,
            numerator: Box::new(fraction_part(numerator.into(), "numerator")?),
            denominator: Box::new(fraction_part(denominator.into(), "denominator")?),
            exponent: None,
        };
        fraction.check_denominator()?;
        Ok(fraction)
    }

    /// Builds a fraction without validating its parts.
    pub(crate) fn from_parts(sign: Sign, numerator: Node, denominator: Node) -> Self {
        let wrap = |part: Node| match part {
            Node::Term(_) => Node::Product(Product::new(vec![part])),
            part => part,
        };
        Self {
            sign,
            numerator: Box::new(wrap(numerator)),
            denominator: Box::new(wrap(denominator)),
            exponent: None,
        }
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

    /// The value of the denominator.
    pub fn denominator_value(&self) -> Result<Number, Error> {
        self.denominator.evaluate()
    }

    fn numerator_is_zero(&self) -> bool {
        self.numerator.is_numeric() && self.numerator.evaluate().map_or(false, |n| n.is_zero())
    }

    /// The numerator with the sign of the fraction applied. A 1-factor product is unwrapped.
    pub fn signed_numerator(&self) -> Node {
        let numerator = match &*self.numerator {
            Node::Product(product) if product.elements.len() == 1 && product.has_unit_exponent() => {
                let factor = product.elements[0].clone();
                let factor_sign = factor.sign();
                factor.with_sign(factor_sign * product.sign)
            },
            numerator => numerator.clone(),
        };
        let inner = numerator.sign();
        numerator.with_sign(inner * self.sign)
    }

    /// Multiplies the numerator and the denominator by the same factor, as in
    /// `1/4 = (1×3)/(4×3)`. Every factor of the expanded parts is written.
    pub fn expanded_by(&self, factor: &Number) -> Fraction {
        Fraction {
            numerator: Box::new(expand_part(&self.numerator, factor)),
            denominator: Box::new(expand_part(&self.denominator, factor)),
            ..self.clone()
        }
    }

    /// The fraction upside down.
    pub fn reciprocal(&self) -> Result<Fraction, Error> {
        let reciprocal = Fraction {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
            ..self.clone()
        };
        reciprocal.check_denominator()?;
        Ok(reciprocal)
    }

    /// Moves the signs of the numerator and denominator, and of their factors, in front of the
    /// fraction. Fractions with an exponent are left as they are, since their sign is not inside
    /// the power.
    pub fn with_normalized_sign(&self) -> Fraction {
        if !exponent_is_one(&self.exponent) {
            return self.clone();
        }
        let (numerator, numerator_sign) = strip_signs(&self.numerator);
        let (denominator, denominator_sign) = strip_signs(&self.denominator);
        Fraction {
            sign: self.sign * numerator_sign * denominator_sign,
            numerator: Box::new(numerator),
            denominator: Box::new(denominator),
            exponent: self.exponent.clone(),
        }
    }

    fn has_struck_factors(&self) -> bool {
        let struck = |part: &Node| match part {
            Node::Product(product) => product.elements.iter()
                .any(|factor| matches!(factor, Node::Term(term) if term.is_struck_out)),
            _ => false,
        };
        struck(&self.numerator) || struck(&self.denominator)
    }

    /// Returns true if the fraction can be simplified: it has struck factors to drop, or its
    /// numerator and denominator are integers with a common divisor, or its numerator is zero.
    pub fn is_reducible(&self) -> bool {
        if self.has_struck_factors() {
            return true;
        }
        match (integer_value(&self.numerator), integer_value(&self.denominator)) {
            (Some(n), Some(d)) => n.is_zero() || !n.gcd(&d).is_one(),
            _ => false,
        }
    }

    /// Writes the common factors of the numerator and denominator, struck through.
    ///
    /// Equal factors are struck first. Then each remaining pair of integer factors sharing a
    /// divisor is split: if one of them is the greatest common divisor, the other is written as
    /// that divisor times the rest, otherwise both are split by the smallest prime factor of the
    /// divisor. Equal factors exposed by the splits are struck last.
    pub fn simplification_line(&self) -> Result<Fraction, Error> {
        let normalized = self.with_normalized_sign();
        let (Some(mut numerator), Some(mut denominator)) = (
            terms_of(&normalized.numerator),
            terms_of(&normalized.denominator),
        ) else {
            return Ok(normalized);
        };

        strike_equal_pairs(&mut numerator, &mut denominator);
        split_common_factors(&mut numerator, &mut denominator);
        strike_equal_pairs(&mut numerator, &mut denominator);

        let line = Fraction {
            numerator: Box::new(product_of(numerator)),
            denominator: Box::new(product_of(denominator)),
            ..normalized
        };
        debug!("simplification line of {}: {}", self, line);
        Ok(line)
    }

    /// Drops the struck factors and multiplies the remaining ones. A fraction without struck
    /// factors goes through its simplification line first.
    pub fn simplified(&self) -> Result<Fraction, Error> {
        let line = if self.has_struck_factors() {
            self.clone()
        } else {
            self.simplification_line()?
        };

        let fraction = Fraction {
            numerator: Box::new(remaining_factors(&line.numerator)?),
            denominator: Box::new(remaining_factors(&line.denominator)?),
            ..line
        };
        fraction.check_denominator()?;
        Ok(fraction)
    }

    /// The irreducible form of an integer fraction, in one go. Fractions with a denominator of
    /// `1` become terms.
    pub fn fully_reduced(&self) -> Result<Node, Error> {
        let (Some(n), Some(d)) = (integer_value(&self.numerator), integer_value(&self.denominator)) else {
            return Ok(Node::Fraction(self.clone()));
        };
        if d.is_zero() {
            return Err(Error::new(self.to_string(), DivisionByZero));
        }
        if n.is_zero() {
            return Ok(Node::from(0));
        }

        let g = n.gcd(&d);
        let sign = self.sign * Sign::of(&n) * Sign::of(&d);
        let n = n.abs() / g.clone();
        let d = d.abs() / g;
        if d.is_one() {
            return Ok(wrap_result(Node::from(n), sign, self.exponent.clone()));
        }
        Ok(Node::Fraction(Fraction {
            sign,
            numerator: Box::new(Node::Product(Product::new(vec![Node::from(n)]))),
            denominator: Box::new(Node::Product(Product::new(vec![Node::from(d)]))),
            exponent: self.exponent.clone(),
        }))
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

    /// Returns the next step of the calculation of the fraction, simplifying it along the way.
    pub fn calculate_next_step(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        self.next_step(opts, true)
    }

    /// Returns the next step of the fraction. If `simplify` is false, the fraction is not
    /// simplified, which is the case inside a sum or product that combines fractions first.
    ///
    /// In order: the exponent is calculated, then the factors of the numerator and denominator,
    /// then struck factors are dropped (a denominator of `1` left over gives a term right away),
    /// then a zero numerator gives `0`, then common factors are
    /// struck, then the exponent is distributed over the factors, then the factors are
    /// multiplied, then the signs are moved in front, and finally a denominator of `1` gives a
    /// term.
    pub(crate) fn next_step(&self, opts: &StepOptions, simplify: bool) -> Result<Option<Node>, Error> {
        if let Some(exponent) = step_exponent(&self.exponent, opts)? {
            return Ok(Some(Node::Fraction(Fraction { exponent, ..self.clone() })));
        }

        let numerator = step_part(&self.numerator, opts)?;
        let denominator = step_part(&self.denominator, opts)?;
        if numerator.is_some() || denominator.is_some() {
            let fraction = Fraction {
                numerator: Box::new(numerator.unwrap_or_else(|| (*self.numerator).clone())),
                denominator: Box::new(denominator.unwrap_or_else(|| (*self.denominator).clone())),
                ..self.clone()
            };
            fraction.check_denominator()?;
            return Ok(Some(Node::Fraction(fraction)));
        }

        if self.has_struck_factors() {
            let simplified = self.simplified()?;
            if simplify && simplified.is_reducible() && !simplified.numerator_is_zero() {
                return Ok(Some(Node::Fraction(simplified.simplification_line()?)));
            }
            if simplified.is_numeric() && simplified.denominator_value()?.is_one() {
                let numerator = simplified.numerator.evaluate()?;
                return Ok(Some(wrap_result(Node::from(numerator), simplified.sign, simplified.exponent)));
            }
            return Ok(Some(Node::Fraction(simplified)));
        }

        if !self.is_numeric() {
            return Ok(None);
        }
        if self.numerator_is_zero() {
            return Ok(Some(Node::from(0)));
        }
        if simplify && self.is_reducible() {
            return Ok(Some(Node::Fraction(self.simplification_line()?)));
        }

        if !exponent_is_one(&self.exponent) {
            let e = exponent_value(&self.exponent)?;
            debug!("distributing the exponent of {}", self);
            return Ok(Some(Node::Fraction(Fraction {
                numerator: Box::new(raise_part(&self.numerator, e)),
                denominator: Box::new(raise_part(&self.denominator, e)),
                exponent: None,
                ..self.clone()
            })));
        }

        let has_many_factors = |part: &Node| matches!(part, Node::Product(product) if product.elements.len() > 1);
        if has_many_factors(&self.numerator) || has_many_factors(&self.denominator) {
            return Ok(Some(Node::Fraction(Fraction {
                numerator: Box::new(evaluated_part(&self.numerator)?),
                denominator: Box::new(evaluated_part(&self.denominator)?),
                ..self.clone()
            })));
        }

        let normalized = self.with_normalized_sign();
        if normalized != *self {
            return Ok(Some(Node::Fraction(normalized)));
        }

        if self.denominator.evaluate()?.is_one() {
            let numerator = self.numerator.evaluate()?;
            return Ok(Some(wrap_result(Node::from(numerator), self.sign, None)));
        }
        Ok(None)
    }

    pub(crate) fn render(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        let markup = options.markup();
        let body = render_fraction(&self.numerator, &self.denominator, options);
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

impl_display!(Fraction);

/// Renders a numerator over a denominator. In notations that do not group them, compound parts
/// are bracketed.
pub(crate) fn render_fraction(numerator: &Node, denominator: &Node, options: &FormatOptions) -> String {
    let markup = options.markup();
    let part = |node: &Node| {
        let ctx = if !markup.braced && node.is_compound() {
            RenderContext::beginning().with_brackets()
        } else {
            RenderContext::beginning()
        };
        node.render(ctx, options).0
    };
    format!(
        "{}{}{}{}{}",
        markup.opening_fraction,
        part(numerator),
        markup.fraction_vinculum,
        part(denominator),
        markup.closing_fraction,
    )
}

/// Checks that a node can be the numerator or denominator of a fraction.
fn fraction_part(node: Node, which: &str) -> Result<Node, Error> {
    let valid = match &node {
        Node::Term(_) => true,
        Node::Product(product) => product.elements.iter().all(|factor| matches!(factor, Node::Term(_))),
        _ => false,
    };
    if !valid {
        return Err(Error::new(node.to_string(), InvalidConstructorArgument {
            node: "fraction",
            reason: format!("the {} must be a term or a product of terms, not a {}", which, node.kind_name()),
        }));
    }

    Ok(match node {
        Node::Term(_) => Node::Product(Product::new(vec![node])),
        node => node,
    })
}

fn expand_part(part: &Node, factor: &Number) -> Node {
    let factor = Node::from(factor.clone());
    match part {
        Node::Product(product) if product.has_unit_exponent() => {
            let mut product = product.clone().with_style(DisplayStyle::Explicit);
            product.append(factor);
            Node::Product(product)
        },
        part => Node::Product(Product::new(vec![part.clone(), factor]).with_style(DisplayStyle::Explicit)),
    }
}

/// Strips the sign of a part and of its factors, returning the gathered sign.
fn strip_signs(part: &Node) -> (Node, Sign) {
    match part {
        Node::Product(product) if product.has_unit_exponent() => {
            let mut sign = product.sign;
            let elements = product.elements.iter()
                .map(|factor| match factor {
                    Node::Term(term) => {
                        sign = sign * term.sign;
                        Node::Term(Term { sign: Sign::Plus, ..term.clone() })
                    },
                    factor => factor.clone(),
                })
                .collect();
            (Node::Product(Product { sign: Sign::Plus, elements, ..product.clone() }), sign)
        },
        part => (part.clone(), Sign::Plus),
    }
}

/// The value of a numeric part, if it is an integer.
fn integer_value(part: &Node) -> Option<Number> {
    if !part.is_numeric() {
        return None;
    }
    part.evaluate().ok().filter(Number::is_integer)
}

/// The factors of a product of terms.
fn terms_of(part: &Node) -> Option<Vec<Term>> {
    match part {
        Node::Product(product) if product.has_unit_exponent() && !product.sign.is_minus() => {
            product.elements.iter()
                .map(|factor| match factor {
                    Node::Term(term) => Some(term.clone()),
                    _ => None,
                })
                .collect()
        },
        _ => None,
    }
}

fn product_of(terms: Vec<Term>) -> Node {
    Node::Product(Product::new(terms.into_iter().map(Node::Term).collect()))
}

/// Strikes out the pairs of equal factors of the numerator and denominator.
fn strike_equal_pairs(numerator: &mut [Term], denominator: &mut [Term]) {
    for a in numerator.iter_mut().filter(|a| !a.is_struck_out && !a.is_displ_as_a_single_1()) {
        if let Some(b) = denominator.iter_mut().find(|b| !b.is_struck_out && **b == *a) {
            a.is_struck_out = true;
            b.is_struck_out = true;
        }
    }
}

/// The value of a factor that can be split: a positive integer other than `1`, not struck out.
fn splittable(term: &Term) -> Option<Number> {
    if term.is_struck_out || !term.has_unit_exponent() {
        return None;
    }
    term.signed_value().filter(|n| n.is_integer() && !n.is_negative() && !n.is_zero() && !n.is_one())
}

/// Splits `value` into `p` struck out times the rest.
fn split(value: &Number, p: &Number) -> Vec<Term> {
    if value == p {
        vec![Term::number(p.clone()).struck_out()]
    } else {
        vec![Term::number(p.clone()).struck_out(), Term::number(value.clone() / p.clone())]
    }
}

/// Splits the pairs of integer factors sharing a divisor. Each factor is split at most once.
fn split_common_factors(numerator: &mut Vec<Term>, denominator: &mut Vec<Term>) {
    let mut used = vec![false; denominator.len()];
    let mut i = 0;
    while i < numerator.len() {
        let Some(a) = splittable(&numerator[i]) else {
            i += 1;
            continue;
        };
        let found = denominator.iter()
            .enumerate()
            .filter(|(j, _)| !used[*j])
            .find_map(|(j, b)| {
                let b = splittable(b)?;
                let g = a.gcd(&b);
                (!g.is_one()).then_some((j, b, g))
            });
        let Some((j, b, g)) = found else {
            i += 1;
            continue;
        };

        let p = if a == g || b == g {
            g
        } else {
            g.smallest_prime_factor().unwrap_or(g)
        };
        let numerator_split = split(&a, &p);
        let denominator_split = split(&b, &p);
        let (n_len, d_len) = (numerator_split.len(), denominator_split.len());
        numerator.splice(i..=i, numerator_split);
        denominator.splice(j..=j, denominator_split);
        used.splice(j..=j, std::iter::repeat(true).take(d_len));
        i += n_len;
    }
}

/// The part without its struck factors. Numeric factors are multiplied together.
fn remaining_factors(part: &Node) -> Result<Node, Error> {
    let Node::Product(product) = part else {
        return Ok(part.clone());
    };
    let rest = product.elements.iter()
        .filter(|factor| !matches!(factor, Node::Term(term) if term.is_struck_out))
        .cloned()
        .collect::<Vec<_>>();

    let elements = if rest.iter().all(Node::is_numeric) {
        let value = rest.iter()
            .map(Node::evaluate)
            .product::<Result<Number, Error>>()?;
        vec![Node::from(value)]
    } else {
        rest
    };
    Ok(Node::Product(Product { sign: product.sign, ..Product::new(elements) }))
}

/// Takes one step in every factor of a part.
fn step_part(part: &Node, opts: &StepOptions) -> Result<Option<Node>, Error> {
    match part {
        Node::Product(product) => {
            let mut product = product.clone();
            let mut stepped = false;
            for factor in product.elements.iter_mut() {
                if let Some(next) = factor.calculate_next_step_with(opts)? {
                    *factor = next;
                    stepped = true;
                }
            }
            Ok(stepped.then(|| Node::Product(product)))
        },
        Node::Sum(_) => Ok(part.calculate_next_step_with(opts)?.map(|next| match next {
            Node::Term(_) => Node::Product(Product::new(vec![next])),
            next => next,
        })),
        part => part.calculate_next_step_with(opts),
    }
}

/// Raises every factor of a part to the power `e`.
fn raise_part(part: &Node, e: i32) -> Node {
    match part {
        Node::Product(product) if product.has_unit_exponent() => Node::Product(Product {
            sign: product.sign.pow(e),
            elements: product.elements.iter()
                .map(|factor| factor.clone().raised_to(Node::from(e)))
                .collect(),
            ..product.clone()
        }),
        part => part.clone().raised_to(Node::from(e)),
    }
}

/// The part with its factors multiplied into one.
fn evaluated_part(part: &Node) -> Result<Node, Error> {
    Ok(Node::Product(Product::new(vec![Node::from(part.evaluate()?)])))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{fmt::FormatOptionsBuilder, primitive::num};
    use super::*;

    const MAX_STEPS: usize = 50;

    fn derivation(node: Node) -> Vec<String> {
        let opts = StepOptions::default();
        let mut steps = vec![node.to_string()];
        let mut current = node;
        for _ in 0..MAX_STEPS {
            match current.calculate_next_step_with(&opts).unwrap() {
                Some(next) => {
                    steps.push(next.to_string());
                    current = next;
                },
                None => return steps,
            }
        }
        panic!("no fixed point after {} steps: {:?}", MAX_STEPS, steps);
    }

    #[test]
    fn simplify_step_by_step() {
        let fraction = Fraction::new(Sign::Plus, 92, 76).unwrap();
        assert_eq!(derivation(Node::Fraction(fraction)), vec![
            "92/76",
            "(~2~×46)/(~2~×38)",
            "(~2~×23)/(~2~×19)",
            "23/19",
        ]);
    }

    #[test]
    fn simplified_in_one_step() {
        let fraction = Fraction::new(Sign::Plus, 92, 76).unwrap();
        assert_eq!(fraction.simplified().unwrap(), Fraction::new(Sign::Plus, 46, 38).unwrap());
    }

    #[test]
    fn simplification_preserves_value() {
        for (n, d) in [(92, 76), (6, 12), (-15, 10), (0, 7), (35, 14), (64, 96)] {
            let fraction = Fraction::new(Sign::Plus, n, d).unwrap();
            let value = fraction.evaluate().unwrap();
            let steps = derivation(Node::Fraction(fraction.clone()));
            assert!(steps.len() < MAX_STEPS);
            assert_eq!(fraction.fully_reduced().unwrap().evaluate().unwrap(), value);
        }
    }

    #[test]
    fn divisor_equal_to_the_gcd() {
        let fraction = Fraction::new(Sign::Plus, 2, 6).unwrap();
        let line = fraction.simplification_line().unwrap();
        assert_eq!(line.to_string(), "~2~/(~2~×3)");
        assert_eq!(line.simplified().unwrap().to_string(), "1/3");
    }

    #[test]
    fn denominator_of_one_gives_a_term() {
        let fraction = Fraction::new(Sign::Minus, 12, 4).unwrap();
        let steps = derivation(Node::Fraction(fraction));
        assert_eq!(steps.first().unwrap(), "-12/4");
        assert_eq!(steps.last().unwrap(), "-3");
    }

    #[test]
    fn full_cancellation_gives_a_term() {
        let fraction = Fraction::new(Sign::Plus, 2, 2).unwrap();
        assert_eq!(derivation(Node::Fraction(fraction)), vec!["2/2", "~2~/~2~", "1"]);

        let fraction = Fraction::new(Sign::Minus, 12, 4).unwrap();
        assert_eq!(derivation(Node::Fraction(fraction)), vec!["-12/4", "-(~4~×3)/~4~", "-3"]);
    }

    #[test]
    fn second_pass_strikes_factors_exposed_by_the_splits() {
        let fraction = Fraction::new(
            Sign::Plus,
            Product::new(vec![Node::from(8), Node::from(3)]),
            Product::new(vec![Node::from(5), Node::from(6)]),
        ).unwrap();
        assert_eq!(derivation(Node::Fraction(fraction)), vec![
            "(8×3)/(5×6)",
            "(~2~×4×~3~)/(5×~2~×~3~)",
            "4/5",
        ]);
    }

    #[test]
    fn zero_numerator() {
        let fraction = Fraction::new(Sign::Plus, 0, 5).unwrap();
        assert_eq!(fraction.calculate_next_step(&StepOptions::default()).unwrap(), Some(Node::from(0)));
        assert_eq!(fraction.fully_reduced().unwrap(), Node::from(0));
    }

    #[test]
    fn signs_move_in_front() {
        let fraction = Fraction::new(Sign::Plus, 3, -4).unwrap();
        assert_eq!(fraction.to_string(), "3/(-4)");
        let normalized = fraction.with_normalized_sign();
        assert_eq!(normalized.to_string(), "-3/4");
        assert_eq!(normalized.evaluate().unwrap(), fraction.evaluate().unwrap());
    }

    #[test]
    fn exponent_is_distributed() {
        let fraction = Fraction::new(Sign::Plus, 2, 3).unwrap().with_exponent(2);
        assert_eq!(derivation(Node::Fraction(fraction)), vec!["(2/3)^2", "2^2/3^2", "4/9"]);
    }

    #[test]
    fn zero_denominator_is_rejected() {
        let err = Fraction::new(Sign::Plus, 1, 0).unwrap_err();
        assert!(err.is::<DivisionByZero>());

        let fraction = Fraction::new(Sign::Plus, 0, 3).unwrap();
        assert!(fraction.reciprocal().unwrap_err().is::<DivisionByZero>());

        let sum = Node::Sum(super::super::Sum::new(vec![Node::from(1)]));
        assert!(Fraction::new(Sign::Plus, sum, 2).unwrap_err().is::<InvalidConstructorArgument>());
    }

    #[test]
    fn fully_reduced() {
        let fraction = Fraction::new(Sign::Plus, -15, 10).unwrap();
        assert_eq!(fraction.fully_reduced().unwrap().to_string(), "-3/2");
        assert_eq!(fraction.fully_reduced().unwrap().evaluate().unwrap(), num((-3, 2)));
        assert_eq!(Fraction::new(Sign::Plus, 8, 4).unwrap().fully_reduced().unwrap(), Node::from(2));
    }

    #[test]
    fn render_golden() {
        let latex = FormatOptionsBuilder::new().build();
        let fraction = Node::Fraction(Fraction::new(Sign::Minus, 3, 4).unwrap());
        assert_eq!(fraction.into_str(&latex), "-\\frac{3}{4}");
        assert_eq!(fraction.to_string(), "-3/4");

        let expanded = Fraction::new(Sign::Plus, 1, 4).unwrap().expanded_by(&num(3));
        assert_eq!(expanded.to_string(), "(1×3)/(4×3)");
        assert_eq!(Node::Fraction(expanded).into_str(&latex), "\\frac{1\\times 3}{4\\times 3}");
    }
}
