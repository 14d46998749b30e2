use crate::{
    error::{Error, InvalidConstructorArgument},
    fmt::{FormatOptions, RenderContext},
    primitive::Number,
    symbolic::derivation::StepOptions,
};
use log::debug;
use super::{impl_display, DisplayStyle, Expandable, Node, Product, Sign, Sum};

/// The remarkable identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    /// `(a+b)^2`, which expands to `a^2+2ab+b^2`.
    SumSquare,

    /// `(a-b)^2`, which expands to `a^2-2ab+b^2`.
    DifferenceSquare,

    /// `(a+b)(a-b)`, which expands to `a^2-b^2`.
    SquaresDifference,
}

/// A product of binomials recognized as a remarkable identity, expanded in one step with its
/// closed form.
///
/// Both operands are stored positive; the kind carries the signs.
#[derive(Debug, Clone, PartialEq)]
pub struct BinomialIdentity {
    pub sign: Sign,
    pub kind: IdentityKind,
    pub a: Box<Node>,
    pub b: Box<Node>,
}

impl BinomialIdentity {
    /// Creates the square of `a+b`. A negative `b` gives the square of a difference.
    ///
    /// Returns [`InvalidConstructorArgument`] if `a` is negative.
    pub fn new(a: impl Into<Node>, b: impl Into<Node>) -> Result<Self, Error> {
        let (a, b) = (checked_first_operand(a.into())?, b.into());
        let kind = if b.sign().is_minus() {
            IdentityKind::DifferenceSquare
        } else {
            IdentityKind::SumSquare
        };
        Ok(Self::from_parts(kind, a, b))
    }

    /// Creates the product `(a+b)(a-b)`.
    pub fn squares_difference(a: impl Into<Node>, b: impl Into<Node>) -> Result<Self, Error> {
        let a = checked_first_operand(a.into())?;
        Ok(Self::from_parts(IdentityKind::SquaresDifference, a, b.into()))
    }

    fn from_parts(kind: IdentityKind, a: Node, b: Node) -> Self {
        Self {
            sign: Sign::Plus,
            kind,
            a: Box::new(a),
            b: Box::new(b.with_sign(Sign::Plus)),
        }
    }

    pub fn with_sign(self, sign: Sign) -> Self {
        Self { sign, ..self }
    }

    /// Recognizes a remarkable identity in a generic expandable product, such as `(x+3)(x-3)`.
    pub fn recognize(expandable: &Expandable) -> Option<Self> {
        let operands = |sum: &Sum| match sum.elements.as_slice() {
            [a, b] if !sum.sign.is_minus() && sum.has_unit_exponent() && !a.sign().is_minus() => {
                Some((a.clone(), b.clone()))
            },
            _ => None,
        };
        let (a, b) = operands(&expandable.left)?;
        let (c, d) = operands(&expandable.right)?;
        if a != c {
            return None;
        }

        let kind = if b == d {
            if b.sign().is_minus() {
                IdentityKind::DifferenceSquare
            } else {
                IdentityKind::SumSquare
            }
        } else if b.clone().negated() == d {
            IdentityKind::SquaresDifference
        } else {
            return None;
        };
        Some(Self::from_parts(kind, a, b).with_sign(expandable.sign))
    }

    /// The sum `a+b` or `a-b`, as written in the identity.
    fn binomial(&self, sign: Sign) -> Sum {
        Sum::new(vec![(*self.a).clone(), (*self.b).clone().with_sign(sign)])
    }

    /// The identity as a generic product of two sums.
    pub fn as_expandable(&self) -> Expandable {
        let (left, right) = match self.kind {
            IdentityKind::SumSquare => (self.binomial(Sign::Plus), self.binomial(Sign::Plus)),
            IdentityKind::DifferenceSquare => (self.binomial(Sign::Minus), self.binomial(Sign::Minus)),
            IdentityKind::SquaresDifference => (self.binomial(Sign::Plus), self.binomial(Sign::Minus)),
        };
        Expandable::new(left, right).with_sign(self.sign)
    }

    /// Expands the identity with its closed form: `a^2+2ab+b^2`, `a^2-2ab+b^2` or `a^2-b^2`.
    pub fn expand(&self) -> Result<Node, Error> {
        let a = (*self.a).clone();
        let b = (*self.b).clone();
        let twice = || {
            Node::Product(Product::new(vec![Node::from(2), a.clone(), b.clone()]).with_style(DisplayStyle::Explicit))
        };

        let elements = match self.kind {
            IdentityKind::SumSquare => vec![a.clone().raised_to(Node::from(2)), twice(), b.clone().raised_to(Node::from(2))],
            IdentityKind::DifferenceSquare => vec![
                a.clone().raised_to(Node::from(2)),
                twice().negated(),
                b.clone().raised_to(Node::from(2)),
            ],
            IdentityKind::SquaresDifference => vec![
                a.clone().raised_to(Node::from(2)),
                b.clone().raised_to(Node::from(2)).negated(),
            ],
        };

        let expanded = Node::Sum(Sum::new(elements).with_sign(self.sign));
        debug!("applied the identity {} as {}", self, expanded);
        Ok(expanded)
    }

    pub fn is_numeric(&self) -> bool {
        self.a.is_numeric() && self.b.is_numeric()
    }

    pub fn evaluate(&self) -> Result<Number, Error> {
        self.expand()?.evaluate()
    }

    /// The next step of an identity is always its expansion.
    pub fn calculate_next_step(&self, _: &StepOptions) -> Result<Option<Node>, Error> {
        Ok(Some(self.expand()?))
    }

    pub(crate) fn render(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        let shape = match self.kind {
            IdentityKind::SumSquare => Node::Sum(self.binomial(Sign::Plus).with_exponent(2)),
            IdentityKind::DifferenceSquare => Node::Sum(self.binomial(Sign::Minus).with_exponent(2)),
            IdentityKind::SquaresDifference => Node::Product(Product::new(vec![
                Node::Sum(self.binomial(Sign::Plus)),
                Node::Sum(self.binomial(Sign::Minus)),
            ])),
        };
        shape.with_sign(self.sign).render(ctx, options).0
    }
}

fn checked_first_operand(a: Node) -> Result<Node, Error> {
    if a.sign().is_minus() {
        return Err(Error::new(a.to_string(), InvalidConstructorArgument {
            node: "binomial identity",
            reason: "the first operand must be positive".to_string(),
        }));
    }
    Ok(a)
}

impl_display!(BinomialIdentity);
