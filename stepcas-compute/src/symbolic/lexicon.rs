//! Gathering the like terms of a sum.
//!
//! A [`TermsLexicon`] maps the literal part of each element of a sum (its **key**) to the list of
//! coefficients found for that key. For example, `2x + 3 + x − 5 + x²` gives:
//!
//! | key   | coefficients |
//! | ----- | ------------ |
//! | `x`   | `2`, `1`     |
//! | (num) | `3`, `−5`    |
//! | `x²`  | `1`          |
//!
//! Keys are listed in order of first appearance, so that the reduced sum keeps the order in which
//! the terms were first written.

use crate::{consts::ONE, primitive::Number};
use super::node::{Node, Product, Sign, Sum, Term};

/// The literal part shared by like terms.
#[derive(Debug, Clone, PartialEq)]
pub enum LexiconKey {
    /// Numbers, which are all alike.
    Numeric,

    /// The sign-stripped literal factors of a term, such as `[x, y²]` for `−3xy²`.
    Literal(Vec<Node>),
}

impl LexiconKey {
    /// Builds the term with the given coefficient node, as written in the intermediate line of a
    /// reduction, such as `(2+1)x`.
    pub fn with_coefficient_node(&self, coefficient: Node) -> Node {
        match self {
            LexiconKey::Numeric => coefficient,
            LexiconKey::Literal(factors) => {
                let mut elements = Vec::with_capacity(factors.len() + 1);
                elements.push(coefficient);
                elements.extend(factors.iter().cloned());
                Node::Product(Product::new(elements))
            },
        }
    }

    /// Builds the term with the given evaluated coefficient, or [`None`] if the coefficient is
    /// zero.
    pub fn with_coefficient(&self, coefficient: Number) -> Option<Node> {
        if coefficient.is_zero() {
            return None;
        }
        let factors = match self {
            LexiconKey::Numeric => return Some(Node::from(coefficient)),
            LexiconKey::Literal(factors) => factors,
        };

        if coefficient.is_one() || coefficient.is_minus_one() {
            let sign = Sign::of(&coefficient);
            let body = match factors.as_slice() {
                [factor] => factor.clone(),
                factors => Node::Product(Product::new(factors.to_vec())),
            };
            let inner = body.sign();
            Some(body.with_sign(inner * sign))
        } else {
            Some(self.with_coefficient_node(Node::from(coefficient)))
        }
    }
}

/// The coefficients gathered for one key.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    pub key: LexiconKey,
    pub coefficients: Vec<Node>,
}

/// The like terms of a sum, gathered by literal part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermsLexicon {
    pub entries: Vec<LexiconEntry>,
}

impl TermsLexicon {
    /// Gathers the elements of the sum. The sign of the sum itself is not applied.
    pub fn of(sum: &Sum) -> Self {
        let mut lexicon = Self::default();
        for element in &sum.elements {
            lexicon.insert(element, Sign::Plus);
        }
        lexicon
    }

    /// Returns true if some key has more than one coefficient.
    pub fn has_like_terms(&self) -> bool {
        self.entries.iter().any(|entry| entry.coefficients.len() > 1)
    }

    fn push(&mut self, key: LexiconKey, coefficient: Node) {
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.coefficients.push(coefficient),
            None => self.entries.push(LexiconEntry { key, coefficients: vec![coefficient] }),
        }
    }

    /// Inserts an element of the sum, with the given extra sign.
    fn insert(&mut self, node: &Node, sign: Sign) {
        if node.is_numeric() {
            self.push(LexiconKey::Numeric, signed(node.clone(), sign));
            return;
        }

        match node {
            Node::Term(term) => {
                let key = Node::Term(Term { sign: Sign::Plus, ..term.clone() });
                self.push(LexiconKey::Literal(vec![key]), unit(sign * term.sign));
            },
            Node::Monomial(monomial) if monomial.has_unit_exponent() => {
                let key = Node::Term(monomial.letter_power.clone());
                self.push(LexiconKey::Literal(vec![key]), signed(Node::Term(monomial.coefficient.clone()), sign));
            },
            Node::Product(product) if product.has_unit_exponent() => {
                let mut sign = sign * product.sign;
                let mut numeric = Vec::new();
                let mut literal = Vec::new();
                for factor in &product.elements {
                    if factor.is_numeric() {
                        numeric.push(factor.clone());
                    } else {
                        sign = sign * factor.sign();
                        literal.push(factor.clone().with_sign(Sign::Plus));
                    }
                }

                let coefficient = match numeric.len() {
                    0 => unit(Sign::Plus),
                    1 => numeric.remove(0),
                    _ => Node::Product(Product::new(numeric)),
                };
                self.push(LexiconKey::Literal(literal), signed(coefficient, sign));
            },
            Node::Sum(inner) if inner.has_unit_exponent() => {
                for element in &inner.elements {
                    self.insert(element, sign * inner.sign);
                }
            },
            Node::Polynomial(polynomial) => {
                for element in &polynomial.as_sum().elements {
                    self.insert(element, sign);
                }
            },
            node => {
                let key = node.clone().with_sign(Sign::Plus);
                self.push(LexiconKey::Literal(vec![key]), unit(sign * node.sign()));
            },
        }
    }
}

/// The coefficient `1` or `−1`.
fn unit(sign: Sign) -> Node {
    Node::Term(Term::number(sign.apply(ONE.clone())))
}

/// Applies an extra sign to a node.
fn signed(node: Node, sign: Sign) -> Node {
    let inner = node.sign();
    node.with_sign(inner * sign)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::node::Monomial;
    use super::*;

    fn x() -> Node {
        Node::Term(Term::literal("x").unwrap())
    }

    #[test]
    fn gathers_by_literal_part() {
        let sum = Sum::new(vec![
            Node::Monomial(Monomial::new(2, 1)),
            Node::from(3),
            x(),
            Node::from(-5),
            Node::Monomial(Monomial::new(1, 2)),
        ]);
        let lexicon = TermsLexicon::of(&sum);

        assert_eq!(lexicon.entries.len(), 3);
        assert_eq!(lexicon.entries[0].key, LexiconKey::Literal(vec![x()]));
        assert_eq!(lexicon.entries[0].coefficients, vec![Node::from(2), Node::from(1)]);
        assert_eq!(lexicon.entries[1].key, LexiconKey::Numeric);
        assert_eq!(lexicon.entries[1].coefficients, vec![Node::from(3), Node::from(-5)]);
        assert_eq!(lexicon.entries[2].coefficients.len(), 1);
        assert!(lexicon.has_like_terms());
    }

    #[test]
    fn strips_signs_into_coefficients() {
        let minus_x = x().negated();
        let product = Node::Product(Product::new(vec![Node::from(3), minus_x.clone()]));
        let sum = Sum::new(vec![minus_x, product]);
        let lexicon = TermsLexicon::of(&sum);

        assert_eq!(lexicon.entries.len(), 1);
        let values = lexicon.entries[0].coefficients.iter()
            .map(|c| c.evaluate().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(values, vec![Number::from(-1), Number::from(-3)]);
    }

    #[test]
    fn rebuilds_terms() {
        let key = LexiconKey::Literal(vec![x()]);
        assert_eq!(key.with_coefficient(Number::from(0)), None);
        assert_eq!(key.with_coefficient(Number::from(1)), Some(x()));
        assert_eq!(key.with_coefficient(Number::from(-1)), Some(x().negated()));
        assert_eq!(key.with_coefficient(Number::from(4)).unwrap().to_string(), "4x");
    }
}
