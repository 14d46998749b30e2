use crate::fmt::FormatOptions;
use super::node::Node;

/// A type that collects the steps of a derivation.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. This
/// is useful when only the final result of a derivation matters.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        self.push(step);
    }
}

/// Collects the steps of a derivation as rendered text, one line per step.
#[derive(Debug, Clone, Default)]
pub struct RenderedSteps {
    options: FormatOptions,
    lines: Vec<String>,
}

impl RenderedSteps {
    pub fn new(options: FormatOptions) -> Self {
        Self { options, lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl StepCollector<Node> for RenderedSteps {
    fn push(&mut self, step: Node) {
        self.lines.push(step.into_str(&self.options));
    }
}
