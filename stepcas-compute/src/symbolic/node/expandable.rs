use crate::{
    error::Error,
    fmt::{FormatOptions, RenderContext},
    primitive::Number,
    symbolic::derivation::StepOptions,
};
use log::debug;
use super::{impl_display, DisplayStyle, Node, Product, Sign, Sum};

/// A product of two sums, such as `(x+2)(x+3)`, waiting to be expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct Expandable {
    pub sign: Sign,
    pub left: Sum,
    pub right: Sum,
}

impl Expandable {
    /// Creates an expandable product. Operands that are not sums are wrapped in a 1-element sum.
    pub fn new(left: impl Into<Node>, right: impl Into<Node>) -> Self {
        Self {
            sign: Sign::Plus,
            left: as_sum(left.into()),
            right: as_sum(right.into()),
        }
    }

    pub fn with_sign(self, sign: Sign) -> Self {
        Self { sign, ..self }
    }

    /// Distributes the product into a sum of pairwise products, as in `x×x+x×3+2×x+2×3`.
    ///
    /// If the whole left operand is `1` or `-1`, the pairwise products are reduced on the spot,
    /// so that `-1(x+3)` gives `-x-3`. A `1` among other terms of the left operand is written,
    /// as in `1×x+1×3+x×x+x×3`.
    pub fn expand(&self) -> Result<Node, Error> {
        let unit_left = self.left.is_displ_as_a_single_1() || self.left.is_displ_as_a_single_minus_1();
        let mut elements = Vec::with_capacity(self.left.elements.len() * self.right.elements.len());
        for l in &self.left.elements {
            let l = l.clone().with_sign(l.sign() * self.left.sign);
            for r in &self.right.elements {
                let r = r.clone().with_sign(r.sign() * self.right.sign);
                let product = Product::new(vec![l.clone(), r]).with_style(DisplayStyle::Explicit);
                if unit_left {
                    elements.push(product.reduce_()?);
                } else {
                    elements.push(Node::Product(product));
                }
            }
        }

        let expanded = Node::Sum(Sum::new(elements).with_sign(self.sign));
        debug!("expanded {} into {}", self, expanded);
        Ok(expanded)
    }

    pub fn is_numeric(&self) -> bool {
        self.left.is_numeric() && self.right.is_numeric()
    }

    pub fn evaluate(&self) -> Result<Number, Error> {
        let value = self.left.evaluate()? * self.right.evaluate()?;
        Ok(self.sign.apply(value))
    }

    pub(crate) fn displays_negative(&self) -> bool {
        self.sign.is_minus()
    }

    /// The next step of an expandable product is always its expansion.
    pub fn calculate_next_step(&self, _: &StepOptions) -> Result<Option<Node>, Error> {
        Ok(Some(self.expand()?))
    }

    pub(crate) fn render(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        let product = Product::new(vec![Node::Sum(self.left.clone()), Node::Sum(self.right.clone())])
            .with_sign(self.sign);
        product.render(ctx, options)
    }
}

/// Wraps a node that is not a sum with exponent `1` in a 1-element sum.
fn as_sum(node: Node) -> Sum {
    match node {
        Node::Sum(sum) if sum.has_unit_exponent() => sum,
        node => Sum::new(vec![node]),
    }
}

impl_display!(Expandable);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{primitive::num, symbolic::node::Term};
    use super::*;

    const MAX_STEPS: usize = 50;

    fn x() -> Node {
        Node::Term(Term::literal("x").unwrap())
    }

    fn binomial(a: Node, b: i32) -> Node {
        Node::Sum(Sum::new(vec![a, Node::from(b)]))
    }

    fn last_step(node: Node) -> Node {
        let mut current = node;
        for _ in 0..MAX_STEPS {
            match current.expand_and_reduce_next_step().unwrap() {
                Some(next) => current = next,
                None => return current,
            }
        }
        panic!("derivation of {} did not terminate", current);
    }

    #[test]
    fn render() {
        let expandable = Expandable::new(binomial(x(), 2), binomial(x(), 3));
        assert_eq!(expandable.to_string(), "(x+2)(x+3)");
        assert_eq!(Expandable::new(2, binomial(x(), 3)).to_string(), "2(x+3)");
    }

    #[test]
    fn expand_pairwise() {
        let expandable = Expandable::new(binomial(x(), 2), binomial(x(), 3));
        assert_eq!(expandable.expand().unwrap().to_string(), "x×x+x×3+2×x+2×3");
    }

    #[test]
    fn unit_left_operand_is_reduced() {
        let expandable = Expandable::new(Node::from(-1), binomial(x(), 3));
        assert_eq!(expandable.expand().unwrap().to_string(), "-x-3");
    }

    #[test]
    fn unit_term_among_others_is_written() {
        let one_plus_x = Node::Sum(Sum::new(vec![Node::from(1), x()]));
        let expandable = Expandable::new(one_plus_x, binomial(x(), 3));
        assert_eq!(expandable.to_string(), "(1+x)(x+3)");
        assert_eq!(expandable.expand().unwrap().to_string(), "1×x+1×3+x×x+x×3");
    }

    #[test]
    fn expands_then_reduces() {
        let expandable = Expandable::new(binomial(x(), 2), binomial(x(), 3));
        let result = last_step(Node::Expandable(expandable));
        assert_eq!(result.to_string(), "x^2+5x+6");
    }

    #[test]
    fn numeric_value() {
        let expandable = Expandable::new(binomial(Node::from(1), 2), binomial(Node::from(4), -1))
            .with_sign(Sign::Minus);
        assert!(expandable.is_numeric());
        assert_eq!(expandable.evaluate().unwrap(), num(-9));
        assert_eq!(expandable.expand().unwrap().evaluate().unwrap(), num(-9));
    }
}
