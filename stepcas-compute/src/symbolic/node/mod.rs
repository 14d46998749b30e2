//! The nodes of an expression tree.
//!
//! Every node is an owned value. Rewriting operations never mutate a node in place: they clone
//! it, change the clone, and return the clone as the next step.
//!
//! # Signs and exponents
//!
//! Every node carries a [`Sign`] and an optional exponent (itself a [`Node`]; [`None`] means
//! `1`). The sign applies **outside** of the exponent: `−5²` is a [`Term`] with sign
//! [`Sign::Minus`], value `5` and exponent `2`, and evaluates to `−25`. To raise a negative
//! number, the negative value is stored in the term itself, and `(−5)²` is a [`Term`] with sign
//! [`Sign::Plus`], value `−5` and exponent `2`.
//!
//! The only exception is the [`Monomial`], whose sign is the sign of its coefficient, and whose
//! exponent applies to the whole monomial, coefficient included.

mod expandable;
mod fraction;
mod identity;
mod monomial;
mod operation;
mod polynomial;
mod product;
mod quotient;
mod sum;
mod term;

use crate::{
    error::{DivisionByZero, Error, NonIntegerExponent},
    fmt::{bracketed, FormatOptions, Notation, RenderContext},
    primitive::Number,
    symbolic::derivation::StepOptions,
};
use std::{fmt::{self, Display, Formatter}, ops::{Mul, Neg}};

pub use expandable::Expandable;
pub use fraction::Fraction;
pub use identity::{BinomialIdentity, IdentityKind};
pub use monomial::Monomial;
pub use operation::{DisplayStyle, Operation};
pub use polynomial::Polynomial;
pub use product::Product;
pub use quotient::{Quotient, QuotientSymbol};
pub use sum::Sum;
pub use term::{Payload, Term};

/// The sign of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    /// The sign of a number. Zero is positive.
    pub fn of(n: &Number) -> Self {
        if n.is_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    pub fn is_minus(self) -> bool {
        self == Sign::Minus
    }

    /// The sign of `self` raised to the given power.
    pub fn pow(self, exponent: i32) -> Self {
        if self.is_minus() && exponent % 2 != 0 {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    /// Applies the sign to a number.
    pub fn apply(self, n: Number) -> Number {
        match self {
            Sign::Plus => n,
            Sign::Minus => -n,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        self * Sign::Minus
    }
}

/// The exponent of a node. [`None`] means `1`.
pub type Exponent = Option<Box<Node>>;

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A signed number or letter.
    Term(Term),

    /// Elements added together.
    Sum(Sum),

    /// Factors multiplied together.
    Product(Product),

    /// A division, written with a division sign or as a fraction.
    Quotient(Quotient),

    /// A fraction whose numerator and denominator are products of terms.
    Fraction(Fraction),

    /// A coefficient times a letter raised to a degree.
    Monomial(Monomial),

    /// A sum of monomials.
    Polynomial(Polynomial),

    /// A product of two sums, waiting to be expanded.
    Expandable(Expandable),

    /// A recognized remarkable identity, such as `(a+b)²`.
    BinomialIdentity(BinomialIdentity),
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from!(Term, Sum, Product, Quotient, Fraction, Monomial, Polynomial, Expandable, BinomialIdentity);

impl From<i32> for Node {
    fn from(n: i32) -> Self {
        Node::Term(Term::number(n))
    }
}

impl From<i64> for Node {
    fn from(n: i64) -> Self {
        Node::Term(Term::number(n))
    }
}

impl From<Number> for Node {
    fn from(n: Number) -> Self {
        Node::Term(Term::number(n))
    }
}

/// Implements [`Display`] for node types, using plain text notation.
macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let options = crate::fmt::Notation::Plain.inside(Default::default());
                    let ctx = crate::fmt::RenderContext::root(&options);
                    write!(f, "{}", self.render(ctx, &options))
                }
            }
        )*
    };
}

pub(crate) use impl_display;

impl Node {
    /// The name of the kind of node, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Term(_) => "term",
            Node::Sum(_) => "sum",
            Node::Product(_) => "product",
            Node::Quotient(_) => "quotient",
            Node::Fraction(_) => "fraction",
            Node::Monomial(_) => "monomial",
            Node::Polynomial(_) => "polynomial",
            Node::Expandable(_) => "expandable",
            Node::BinomialIdentity(_) => "binomial identity",
        }
    }

    /// The sign of the node.
    pub fn sign(&self) -> Sign {
        match self {
            Node::Term(term) => term.sign,
            Node::Sum(sum) => sum.sign,
            Node::Product(product) => product.sign,
            Node::Quotient(quotient) => quotient.sign,
            Node::Fraction(fraction) => fraction.sign,
            Node::Monomial(monomial) => monomial.sign(),
            Node::Polynomial(_) => Sign::Plus,
            Node::Expandable(expandable) => expandable.sign,
            Node::BinomialIdentity(identity) => identity.sign,
        }
    }

    /// Returns the node with the given sign.
    pub fn with_sign(self, sign: Sign) -> Node {
        match self {
            Node::Term(term) => Node::Term(Term { sign, ..term }),
            Node::Sum(sum) => Node::Sum(Sum { sign, ..sum }),
            Node::Product(product) => Node::Product(Product { sign, ..product }),
            Node::Quotient(quotient) => Node::Quotient(Quotient { sign, ..quotient }),
            Node::Fraction(fraction) => Node::Fraction(Fraction { sign, ..fraction }),
            Node::Monomial(monomial) => monomial.with_sign(sign),
            Node::Polynomial(polynomial) if sign.is_minus() => {
                Node::Sum(Sum { sign, ..polynomial.into_sum() })
            },
            node @ Node::Polynomial(_) => node,
            Node::Expandable(expandable) => Node::Expandable(Expandable { sign, ..expandable }),
            Node::BinomialIdentity(identity) => {
                Node::BinomialIdentity(BinomialIdentity { sign, ..identity })
            },
        }
    }

    /// Returns the node with its sign flipped.
    pub fn negated(self) -> Node {
        let sign = self.sign();
        self.with_sign(-sign)
    }

    /// The exponent of the node, if it has one.
    pub fn exponent(&self) -> Option<&Node> {
        match self {
            Node::Term(term) => term.exponent.as_deref(),
            Node::Sum(sum) => sum.exponent.as_deref(),
            Node::Product(product) => product.exponent.as_deref(),
            Node::Quotient(quotient) => quotient.exponent.as_deref(),
            Node::Fraction(fraction) => fraction.exponent.as_deref(),
            Node::Monomial(monomial) => monomial.exponent.as_deref(),
            Node::Polynomial(_) | Node::Expandable(_) | Node::BinomialIdentity(_) => None,
        }
    }

    /// Returns true if the node has no exponent, or an exponent displayed as `1`.
    pub fn has_unit_exponent(&self) -> bool {
        self.exponent().map_or(true, Node::is_displ_as_a_single_1)
    }

    /// Returns the node with its exponent replaced. Nodes that cannot carry an exponent are
    /// wrapped in a 1-factor [`Product`] first.
    pub fn with_exponent(self, exponent: Option<Node>) -> Node {
        let exponent = exponent.map(Box::new);
        match self {
            Node::Term(term) => Node::Term(Term { exponent, ..term }),
            Node::Sum(sum) => Node::Sum(Sum { exponent, ..sum }),
            Node::Product(product) => Node::Product(Product { exponent, ..product }),
            Node::Quotient(quotient) => Node::Quotient(Quotient { exponent, ..quotient }),
            Node::Fraction(fraction) => Node::Fraction(Fraction { exponent, ..fraction }),
            Node::Monomial(monomial) => Node::Monomial(Monomial { exponent, ..monomial }),
            Node::Polynomial(polynomial) => {
                Node::Sum(Sum { exponent, ..polynomial.into_sum() })
            },
            node @ (Node::Expandable(_) | Node::BinomialIdentity(_)) => match exponent {
                Some(exponent) => Node::Product(Product { exponent: Some(exponent), ..Product::new(vec![node]) }),
                None => node,
            },
        }
    }

    /// Raises the node to the given power, keeping the value of the node's sign inside the
    /// power. The result has sign [`Sign::Plus`] (except for monomials, whose sign lives inside
    /// their exponent).
    ///
    /// A node that already has an exponent is wrapped in a 1-factor [`Product`].
    pub fn raised_to(self, exponent: Node) -> Node {
        let exponent = Some(Box::new(exponent));
        match self {
            Node::Term(term) if exponent_is_one(&term.exponent) => match term.payload {
                Payload::Numeric(value) => Node::Term(Term {
                    sign: Sign::Plus,
                    payload: Payload::Numeric(term.sign.apply(value)),
                    exponent,
                    is_struck_out: false,
                    unit: term.unit,
                }),
                Payload::Literal(_) if !term.sign.is_minus() => {
                    Node::Term(Term { exponent, is_struck_out: false, ..term })
                },
                payload => Node::Product(Product {
                    exponent,
                    ..Product::new(vec![Node::Term(Term { payload, ..term })])
                }),
            },
            Node::Monomial(monomial) if exponent_is_one(&monomial.exponent) => {
                Node::Monomial(Monomial { exponent, ..monomial })
            },
            node @ (Node::Sum(_) | Node::Product(_) | Node::Quotient(_) | Node::Fraction(_))
                if node.has_unit_exponent() && !node.sign().is_minus() =>
            {
                node.with_exponent(exponent.map(|e| *e))
            },
            node => Node::Product(Product { exponent, ..Product::new(vec![node]) }),
        }
    }

    /// Calculates the numeric value of the node.
    pub fn evaluate(&self) -> Result<Number, Error> {
        match self {
            Node::Term(term) => term.evaluate(),
            Node::Sum(sum) => sum.evaluate(),
            Node::Product(product) => product.evaluate(),
            Node::Quotient(quotient) => quotient.evaluate(),
            Node::Fraction(fraction) => fraction.evaluate(),
            Node::Monomial(monomial) => monomial.evaluate(),
            Node::Polynomial(polynomial) => polynomial.evaluate(),
            Node::Expandable(expandable) => expandable.evaluate(),
            Node::BinomialIdentity(identity) => identity.evaluate(),
        }
    }

    /// Returns true if the node contains no letters, so that it can be evaluated.
    pub fn is_numeric(&self) -> bool {
        match self {
            Node::Term(term) => term.is_numeric(),
            Node::Sum(sum) => sum.is_numeric(),
            Node::Product(product) => product.is_numeric(),
            Node::Quotient(quotient) => quotient.is_numeric(),
            Node::Fraction(fraction) => fraction.is_numeric(),
            Node::Monomial(monomial) => monomial.is_numeric(),
            Node::Polynomial(polynomial) => polynomial.is_numeric(),
            Node::Expandable(expandable) => expandable.is_numeric(),
            Node::BinomialIdentity(identity) => identity.is_numeric(),
        }
    }

    /// Returns true if the node contains letters.
    pub fn is_literal(&self) -> bool {
        !self.is_numeric()
    }

    /// Returns true if the node is displayed as a single `0`.
    pub fn is_null(&self) -> bool {
        self.is_displ_as_a_single_0()
    }

    /// Returns true if the node is displayed as a single `1`.
    pub fn is_displ_as_a_single_1(&self) -> bool {
        match self {
            Node::Term(term) => term.is_displ_as_a_single_1(),
            Node::Sum(sum) => sum.is_displ_as_a_single_1(),
            Node::Product(product) => product.is_displ_as_a_single_1(),
            Node::Monomial(monomial) => monomial.is_displ_as_a_single_1(),
            Node::Polynomial(polynomial) => polynomial.displayed_sum().is_displ_as_a_single_1(),
            Node::Quotient(_) | Node::Fraction(_) | Node::Expandable(_) | Node::BinomialIdentity(_) => false,
        }
    }

    /// Returns true if the node is displayed as a single `0`.
    pub fn is_displ_as_a_single_0(&self) -> bool {
        match self {
            Node::Term(term) => term.is_displ_as_a_single_0(),
            Node::Sum(sum) => sum.is_displ_as_a_single_0(),
            Node::Product(product) => product.is_displ_as_a_single_0(),
            Node::Monomial(monomial) => monomial.is_displ_as_a_single_0(),
            Node::Polynomial(polynomial) => polynomial.displayed_sum().is_displ_as_a_single_0(),
            Node::Quotient(_) | Node::Fraction(_) | Node::Expandable(_) | Node::BinomialIdentity(_) => false,
        }
    }

    /// Returns true if the node is displayed as a single `-1`.
    pub fn is_displ_as_a_single_minus_1(&self) -> bool {
        match self {
            Node::Term(term) => term.is_displ_as_a_single_minus_1(),
            Node::Sum(sum) => sum.is_displ_as_a_single_minus_1(),
            Node::Product(product) => product.is_displ_as_a_single_minus_1(),
            Node::Monomial(monomial) => monomial.is_displ_as_a_single_minus_1(),
            Node::Polynomial(polynomial) => polynomial.displayed_sum().is_displ_as_a_single_minus_1(),
            Node::Quotient(_) | Node::Fraction(_) | Node::Expandable(_) | Node::BinomialIdentity(_) => false,
        }
    }

    /// Returns true if the rendered node starts with a minus sign.
    pub(crate) fn displays_negative(&self) -> bool {
        match self {
            Node::Term(term) => term.displays_negative(),
            Node::Sum(sum) => sum.displays_negative(),
            Node::Product(product) => product.displays_negative(),
            Node::Quotient(quotient) => quotient.sign.is_minus(),
            Node::Fraction(fraction) => fraction.sign.is_minus(),
            Node::Monomial(monomial) => monomial.displays_negative(),
            Node::Polynomial(polynomial) => polynomial.displayed_sum().displays_negative(),
            Node::Expandable(expandable) => expandable.displays_negative(),
            Node::BinomialIdentity(identity) => identity.sign.is_minus(),
        }
    }

    /// Returns true if the node is added or multiplied as a plain value once at rest: a term, or
    /// a monomial without a letter to speak of, such as `5x^0`.
    pub(crate) fn is_term_like(&self) -> bool {
        match self {
            Node::Term(_) => true,
            Node::Monomial(monomial) => monomial.is_numeric(),
            _ => false,
        }
    }

    /// Returns true if the node must be bracketed to be written as the numerator, denominator or
    /// exponent of a notation that does not group them on its own.
    pub(crate) fn is_compound(&self) -> bool {
        if self.displays_negative() {
            return true;
        }
        match self {
            Node::Term(_) => false,
            Node::Sum(sum) => sum.has_unit_exponent() && sum.visible_len() > 1,
            Node::Product(product) => product.has_unit_exponent() && product.visible_len() > 1,
            Node::Quotient(quotient) => exponent_is_one(&quotient.exponent),
            Node::Fraction(fraction) => exponent_is_one(&fraction.exponent),
            Node::Monomial(monomial) => monomial.has_visible_coefficient(),
            Node::Polynomial(polynomial) => polynomial.displayed_sum().visible_len() > 1,
            Node::Expandable(_) | Node::BinomialIdentity(_) => true,
        }
    }

    /// Returns true if the node can be reduced further, by gathering like terms or factors,
    /// simplifying a fraction, or expanding a product of sums.
    pub fn is_reducible(&self) -> bool {
        match self {
            Node::Sum(sum) => sum.is_reducible(),
            Node::Product(product) => product.is_reducible(),
            Node::Fraction(fraction) => fraction.is_reducible(),
            Node::Monomial(monomial) => monomial.is_reducible(),
            Node::Polynomial(polynomial) => polynomial.is_reducible(),
            Node::Expandable(_) | Node::BinomialIdentity(_) => true,
            Node::Term(_) | Node::Quotient(_) => false,
        }
    }

    /// Reduces the node in one go: like terms of sums are gathered, factors of products are
    /// merged. Other nodes are returned unchanged.
    pub fn reduce_(&self) -> Result<Node, Error> {
        match self {
            Node::Sum(sum) => sum.reduce_(),
            Node::Product(product) => product.reduce_(),
            Node::Monomial(monomial) => monomial.reduce_(),
            Node::Polynomial(polynomial) => Ok(Node::Polynomial(polynomial.reduce_()?)),
            node => Ok(node.clone()),
        }
    }

    /// Returns the next step of the calculation of this node, or [`None`] if the node is at rest.
    ///
    /// Literal nodes are expanded and reduced instead (see
    /// [`Node::expand_and_reduce_next_step`]).
    pub fn calculate_next_step(&self) -> Result<Option<Node>, Error> {
        self.calculate_next_step_with(&StepOptions::default())
    }

    /// Returns the next step of the calculation of this node, with the given options.
    pub fn calculate_next_step_with(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        match self {
            Node::Term(term) => term.calculate_next_step(opts),
            Node::Sum(sum) => sum.calculate_next_step(opts),
            Node::Product(product) => product.calculate_next_step(opts),
            Node::Quotient(quotient) => quotient.calculate_next_step(opts),
            Node::Fraction(fraction) => fraction.calculate_next_step(opts),
            Node::Monomial(monomial) => monomial.calculate_next_step(opts),
            Node::Polynomial(polynomial) => polynomial.calculate_next_step(opts),
            Node::Expandable(expandable) => expandable.calculate_next_step(opts),
            Node::BinomialIdentity(identity) => identity.calculate_next_step(opts),
        }
    }

    /// Returns the next step of the expansion and reduction of this literal node, or [`None`] if
    /// nothing is left to expand or reduce.
    ///
    /// Numeric nodes are calculated instead (see [`Node::calculate_next_step`]).
    pub fn expand_and_reduce_next_step(&self) -> Result<Option<Node>, Error> {
        self.expand_and_reduce_next_step_with(&StepOptions::default())
    }

    /// Returns the next step of the expansion and reduction of this node, with the given options.
    pub fn expand_and_reduce_next_step_with(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        match self {
            Node::Sum(sum) => sum.expand_and_reduce_next_step(opts),
            Node::Product(product) => product.expand_and_reduce_next_step(opts),
            node => node.calculate_next_step_with(opts),
        }
    }

    /// The next step of the node when it is an element of a sum or product. Fractions inside an
    /// operation are not simplified: the operation combines them first.
    pub(crate) fn next_step_in_operation(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        match self {
            Node::Fraction(fraction) => fraction.next_step(opts, false),
            node => node.calculate_next_step_with(opts),
        }
    }

    /// Returns true if the node is `other`, or a 1-element sum or product wrapping a node that
    /// contains exactly `other`.
    pub fn contains_exactly(&self, other: &Node) -> bool {
        if self == other {
            return true;
        }
        match self {
            Node::Sum(Sum { sign: Sign::Plus, elements, exponent, .. })
            | Node::Product(Product { sign: Sign::Plus, elements, exponent, .. })
                if elements.len() == 1 && exponent_is_one(exponent) =>
            {
                elements[0].contains_exactly(other)
            },
            _ => false,
        }
    }

    /// Renders the node in the given context, returning the rendered text and the context that
    /// follows it.
    pub fn render(&self, ctx: RenderContext, options: &FormatOptions) -> (String, RenderContext) {
        let text = if ctx.requires_brackets {
            bracketed(options.markup(), &self.render_inner(RenderContext::beginning(), options))
        } else {
            self.render_inner(ctx, options)
        };
        let after = if text.is_empty() { ctx.without_brackets() } else { RenderContext::continuing() };
        (text, after)
    }

    fn render_inner(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        match self {
            Node::Term(term) => term.render(ctx, options),
            Node::Sum(sum) => sum.render(ctx, options),
            Node::Product(product) => product.render(ctx, options),
            Node::Quotient(quotient) => quotient.render(ctx, options),
            Node::Fraction(fraction) => fraction.render(ctx, options),
            Node::Monomial(monomial) => monomial.render(ctx, options),
            Node::Polynomial(polynomial) => polynomial.render(ctx, options),
            Node::Expandable(expandable) => expandable.render(ctx, options),
            Node::BinomialIdentity(identity) => identity.render(ctx, options),
        }
    }

    /// Renders the whole node with the given options.
    pub fn into_str(&self, options: &FormatOptions) -> String {
        self.render(RenderContext::root(options), options).0
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let options = Notation::Plain.inside(FormatOptions::default());
        write!(f, "{}", self.into_str(&options))
    }
}

/// Returns true if the exponent is absent or displayed as `1`.
pub(crate) fn exponent_is_one(exponent: &Exponent) -> bool {
    exponent.as_deref().map_or(true, Node::is_displ_as_a_single_1)
}

/// Returns the next step of an exponent, if it can progress.
pub(crate) fn step_exponent(
    exponent: &Exponent,
    opts: &StepOptions,
) -> Result<Option<Exponent>, Error> {
    match exponent.as_deref() {
        Some(exponent) => Ok(exponent
            .calculate_next_step_with(opts)?
            .map(|next| Some(Box::new(next)))),
        None => Ok(None),
    }
}

/// Evaluates an exponent to an integer.
pub(crate) fn exponent_value(exponent: &Exponent) -> Result<i32, Error> {
    let Some(exponent) = exponent.as_deref() else {
        return Ok(1);
    };
    let value = exponent.evaluate()?;
    value.to_i32().ok_or_else(|| {
        Error::new(exponent.to_string(), NonIntegerExponent { exponent: value.to_string() })
    })
}

/// Raises `base` to the given exponent. `origin` is the node being evaluated, reported if the
/// power divides by zero.
pub(crate) fn power(base: Number, exponent: &Exponent, origin: &dyn Display) -> Result<Number, Error> {
    let exponent = exponent_value(exponent)?;
    base.pow(exponent)
        .ok_or_else(|| Error::new(origin.to_string(), DivisionByZero))
}

/// Gives the sign and exponent of an operation to the result of its calculation.
pub(crate) fn wrap_result(result: Node, sign: Sign, exponent: Exponent) -> Node {
    match exponent {
        Some(exponent) if !exponent.is_displ_as_a_single_1() => {
            result.raised_to(*exponent).with_sign(sign)
        },
        _ => {
            let inner = result.sign();
            result.with_sign(inner * sign)
        },
    }
}

/// Renders an exponent, or nothing if it is `1` and not forced.
pub(crate) fn render_exponent(exponent: Option<&Node>, force: bool, options: &FormatOptions) -> String {
    let markup = options.markup();
    let body = match exponent {
        Some(exponent) if force || !exponent.is_displ_as_a_single_1() => {
            let ctx = if !markup.braced && exponent.is_exponent_compound() {
                RenderContext::beginning().with_brackets()
            } else {
                RenderContext::beginning()
            };
            exponent.render(ctx, options).0
        },
        None if force => "1".to_string(),
        _ => return String::new(),
    };
    format!("{}{}{}", markup.opening_exponent, body, markup.closing_exponent)
}

impl Node {
    /// Returns true if the node is more than a bare positive number or letter, and must be
    /// bracketed when written as an exponent in a notation without grouping.
    fn is_exponent_compound(&self) -> bool {
        match self {
            Node::Term(term) => term.displays_negative() || !term.has_unit_exponent(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::primitive::num;
    use super::*;

    #[test]
    fn sign_arithmetic() {
        assert_eq!(Sign::Minus * Sign::Minus, Sign::Plus);
        assert_eq!(-Sign::Plus, Sign::Minus);
        assert_eq!(Sign::Minus.pow(3), Sign::Minus);
        assert_eq!(Sign::Minus.pow(2), Sign::Plus);
        assert_eq!(Sign::of(&num(-3)), Sign::Minus);
    }

    #[test]
    fn raise_negative_number() {
        let raised = Node::from(-5).raised_to(Node::from(2));
        assert_eq!(raised, Node::Term(Term::signed(Sign::Plus, -5).with_exponent(2)));
        assert_eq!(raised.to_string(), "(-5)^2");
        assert_eq!(raised.evaluate().unwrap(), num(25));
    }

    #[test]
    fn wrap_result_keeps_outer_sign() {
        let wrapped = wrap_result(Node::from(5), Sign::Minus, Some(Box::new(Node::from(2))));
        assert_eq!(wrapped.to_string(), "-5^2");
        assert_eq!(wrapped.evaluate().unwrap(), num(-25));
    }

    #[test]
    fn contains_exactly_unwraps() {
        let x = Node::Term(Term::literal("x").unwrap());
        let wrapped = Node::Sum(Sum::new(vec![Node::Product(Product::new(vec![x.clone()]))]));
        assert!(wrapped.contains_exactly(&x));
        assert!(!Node::Sum(Sum::new(vec![x.clone(), Node::from(1)])).contains_exactly(&x));
    }
}
