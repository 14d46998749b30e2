//! Driving the step engine to its fixed point.
//!
//! A [`Derivation`] repeatedly asks a node for its next step, until the node is at rest. Each
//! step is a complete expression, ready to be written on its own line:
//!
//! ```
//! use stepcas_compute::symbolic::{node::{Node, Sum, Term}, Derivation, StepOptions};
//!
//! let squares = Node::Sum(Sum::new(vec![
//!     Node::Term(Term::number(4).with_exponent(2)),
//!     Node::Term(Term::number(5).with_exponent(2)),
//! ]));
//! let steps = Derivation::new(squares, StepOptions::default())
//!     .map(|step| step.map(|node| node.to_string()))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(steps, ["16+25", "41"]);
//! ```

use crate::error::Error;
use log::trace;
use super::{node::Node, step_collector::StepCollector};

/// Options controlling the steps taken by the step engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOptions {
    /// Replaces numeric quotients by their value rounded to the given number of decimal places,
    /// as soon as their operands are at rest. If [`None`], quotients are rounded to
    /// [`DEFAULT_QUOTIENT_PRECISION`](crate::consts::DEFAULT_QUOTIENT_PRECISION) places once
    /// nothing else can be done.
    pub decimal_result: Option<u32>,
}

/// An iterator over the successive steps of the calculation of a node.
///
/// The initial node is not yielded. The iterator ends once the node is at rest, or right after
/// yielding an error.
#[derive(Debug, Clone)]
pub struct Derivation {
    current: Option<Node>,
    opts: StepOptions,
}

impl Derivation {
    pub fn new(node: Node, opts: StepOptions) -> Self {
        Self { current: Some(node), opts }
    }
}

impl Iterator for Derivation {
    type Item = Result<Node, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        match current.calculate_next_step_with(&self.opts) {
            Ok(Some(next)) => {
                trace!("{} => {}", current, next);
                self.current = Some(next.clone());
                Some(Ok(next))
            },
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

/// Calculates the node step by step until it is at rest, and returns the final step (or the node
/// itself if it was already at rest).
///
/// Every intermediate step is pushed to the given [`StepCollector`]. Use `&mut ()` to discard
/// them.
pub fn derive(
    node: Node,
    opts: &StepOptions,
    steps: &mut impl StepCollector<Node>,
) -> Result<Node, Error> {
    let mut last = node.clone();
    for step in Derivation::new(node, *opts) {
        let step = step?;
        steps.push(step.clone());
        last = step;
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{
        error::DivisionByZero,
        fmt::FormatOptionsBuilder,
        primitive::num,
        symbolic::{
            node::{Expandable, Fraction, Quotient, QuotientSymbol, Sign, Sum, Term},
            step_collector::RenderedSteps,
        },
    };
    use super::*;

    const MAX_STEPS: usize = 50;

    fn steps(node: Node, opts: StepOptions) -> Vec<String> {
        let steps = Derivation::new(node, opts)
            .take(MAX_STEPS)
            .map(|step| step.unwrap().to_string())
            .collect::<Vec<_>>();
        assert!(steps.len() < MAX_STEPS, "derivation did not terminate");
        steps
    }

    fn squares() -> Node {
        Node::Sum(Sum::new(vec![
            Node::Term(Term::number(4).with_exponent(2)),
            Node::Term(Term::number(5).with_exponent(2)),
        ]))
    }

    #[test]
    fn sum_of_squares() {
        assert_eq!(steps(squares(), StepOptions::default()), ["16+25", "41"]);
    }

    #[test]
    fn fraction_simplification() {
        let fraction = Node::Fraction(Fraction::new(Sign::Plus, 92, 76).unwrap());
        assert_eq!(
            steps(fraction, StepOptions::default()),
            ["(~2~×46)/(~2~×38)", "(~2~×23)/(~2~×19)", "23/19"],
        );
    }

    #[test]
    fn division() {
        let quotient = Node::Quotient(Quotient::new(Sign::Plus, 48, 6, QuotientSymbol::Divide).unwrap());
        assert_eq!(steps(quotient, StepOptions::default()), ["8"]);

        let third = Node::Quotient(Quotient::new(Sign::Plus, 1, 3, QuotientSymbol::Divide).unwrap());
        assert_eq!(steps(third, StepOptions { decimal_result: Some(2) }), ["0.33"]);
    }

    #[test]
    fn at_rest_nodes_have_no_steps() {
        assert!(steps(Node::from(-7), StepOptions::default()).is_empty());
        assert!(steps(Node::Term(Term::literal("x").unwrap()), StepOptions::default()).is_empty());
    }

    #[test]
    fn derive_collects_steps() {
        let mut collected = Vec::new();
        let result = derive(squares(), &StepOptions::default(), &mut collected).unwrap();
        assert_eq!(result, Node::from(41));
        assert_eq!(collected.len(), 2);

        let result = derive(Node::from(3), &StepOptions::default(), &mut ()).unwrap();
        assert_eq!(result, Node::from(3));
    }

    #[test]
    fn derive_renders_steps() {
        let mut rendered = RenderedSteps::new(FormatOptionsBuilder::new().build());
        let x = Node::Term(Term::literal("x").unwrap());
        let binomial = |b: i32| Node::Sum(Sum::new(vec![x.clone(), Node::from(b)]));
        let expandable = Node::Expandable(Expandable::new(binomial(2), binomial(3)));

        let result = derive(expandable, &StepOptions::default(), &mut rendered).unwrap();
        assert_eq!(result.to_string(), "x^2+5x+6");
        assert_eq!(rendered.lines()[0], "x\\times x+x\\times 3+2\\times x+2\\times 3");
        assert_eq!(rendered.lines().last().map(String::as_str), Some("x^{2}+5x+6"));
    }

    #[test]
    fn derivation_stops_after_an_error() {
        let reciprocal_of_zero = Node::Term(Term::number(0).with_exponent(-1));
        let mut derivation = Derivation::new(reciprocal_of_zero.clone(), StepOptions::default());
        assert!(derivation.next().unwrap().unwrap_err().is::<DivisionByZero>());
        assert!(derivation.next().is_none());

        let err = derive(reciprocal_of_zero, &StepOptions::default(), &mut ()).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn value_is_preserved() {
        let node = Node::Sum(Sum::new(vec![
            Node::Fraction(Fraction::new(Sign::Plus, 1, 4).unwrap()),
            Node::Fraction(Fraction::new(Sign::Plus, 1, 6).unwrap()),
        ]));
        let expected = node.evaluate().unwrap();
        for step in Derivation::new(node, StepOptions::default()).take(MAX_STEPS) {
            assert_eq!(step.unwrap().evaluate().unwrap(), expected);
        }
        assert_eq!(expected, num((5, 12)));
    }
}
