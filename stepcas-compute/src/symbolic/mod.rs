//! Step-by-step calculation of expressions.
//!
//! # Expression representation
//!
//! Expressions are represented as a tree of [`Node`]s. Unlike a parse tree, the tree keeps the
//! exact shape in which the expression is written: a sum keeps the order of its elements, a
//! product remembers which of its factors are separated by a multiplication symbol, and a term
//! remembers whether it has been struck out. This is what allows each step to be rendered the way
//! it would be written by hand.
//!
//! # Steps
//!
//! Every node can produce its next step with [`Node::calculate_next_step`]. A step is a whole new
//! tree, differing from the previous one by a single rewrite: a power calculated, two fractions
//! put over a common denominator, like terms gathered into brackets, and so on. A node that has
//! no next step is **at rest**.
//!
//! Numeric nodes are calculated down to a single number (or an irreducible fraction), while
//! literal nodes are expanded and reduced (see [`Node::expand_and_reduce_next_step`]).
//!
//! The [`Derivation`] iterator and the [`derive()`] function drive a node to rest, collecting
//! its steps along the way.
//!
//! ```
//! use stepcas_compute::symbolic::{derive, node::{Fraction, Node, Sign}, StepOptions};
//!
//! let fraction = Node::Fraction(Fraction::new(Sign::Plus, 92, 76).unwrap());
//! let mut steps = Vec::new();
//! let result = derive(fraction, &StepOptions::default(), &mut steps).unwrap();
//!
//! assert_eq!(steps[0].to_string(), "(~2~×46)/(~2~×38)");
//! assert_eq!(result.to_string(), "23/19");
//! ```

pub mod derivation;
pub mod lexicon;
pub mod node;
pub mod step_collector;

pub use derivation::{derive, Derivation, StepOptions};
pub use node::{Node, Sign};
pub use step_collector::{RenderedSteps, StepCollector};
