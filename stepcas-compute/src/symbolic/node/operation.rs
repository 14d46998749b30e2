use crate::error::{Error, NotFound};
use std::fmt::Display;
use super::Node;

/// How an operation writes its elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayStyle {
    /// Neutral elements are hidden (`0` in a sum, `1` in a product), and multiplication symbols
    /// are only written where they are required, as in `2x(x+3)`.
    ///
    /// This is the default option.
    #[default]
    Compact,

    /// Every element is written, and every element is separated by the operation's symbol, as in
    /// `2×x×(x+3)`. A negative element is bracketed.
    Explicit,
}

/// The behavior shared by [`Sum`](super::Sum) and [`Product`](super::Product): an ordered,
/// never-empty list of elements with a neutral element, and a parallel list of flags telling
/// whether each element is written with an explicit separator.
pub trait Operation: Clone + Display {
    /// The neutral element of the operation.
    fn neutral() -> Node;

    /// Returns true if the node is displayed as the neutral element.
    fn is_neutral(node: &Node) -> bool;

    /// The elements of the operation.
    fn elements(&self) -> &[Node];

    /// The elements of the operation and their separator flags.
    fn parts_mut(&mut self) -> (&mut Vec<Node>, &mut Vec<bool>);

    /// The number of elements.
    fn len(&self) -> usize {
        self.elements().len()
    }

    /// Appends an element, written without an explicit separator.
    fn append(&mut self, node: Node) {
        self.append_with_separator(node, false);
    }

    /// Appends an element. If `separator` is true, the element is always separated from the
    /// previous one by the operation's symbol (and bracketed if negative).
    fn append_with_separator(&mut self, node: Node, separator: bool) {
        let (elements, separators) = self.parts_mut();
        elements.push(node);
        separators.push(separator);
    }

    /// Removes the first element equal to `node`, or the first element wrapping exactly `node`
    /// (see [`Node::contains_exactly`]), and returns it.
    ///
    /// Removing the last element leaves the neutral element in its place.
    fn remove(&mut self, node: &Node) -> Result<Node, Error> {
        let expr = self.to_string();
        let (elements, separators) = self.parts_mut();
        let index = elements.iter()
            .position(|element| element == node)
            .or_else(|| elements.iter().position(|element| element.contains_exactly(node)))
            .ok_or_else(|| Error::new(expr, NotFound { element: node.to_string() }))?;

        separators.remove(index);
        let removed = elements.remove(index);
        if elements.is_empty() {
            elements.push(Self::neutral());
            separators.push(false);
        }
        Ok(removed)
    }

    /// Returns a copy of the operation without its neutral elements. If every element is
    /// neutral, the copy holds a single neutral element.
    fn throw_away_the_neutrals(&self) -> Self {
        let mut copy = self.clone();
        let (elements, separators) = copy.parts_mut();
        let kept = elements.drain(..)
            .zip(separators.drain(..))
            .filter(|(element, _)| !Self::is_neutral(element))
            .collect::<Vec<_>>();

        if kept.is_empty() {
            elements.push(Self::neutral());
            separators.push(false);
        } else {
            for (element, separator) in kept {
                elements.push(element);
                separators.push(separator);
            }
        }
        copy
    }
}
