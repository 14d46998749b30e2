//! Options and context used when rendering expressions.

mod markup;

use crate::primitive::Number;

pub use markup::{Markup, JS, LATEX, PLAIN};

/// Formatting options for expressions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// The notation to typeset the expression in.
    pub notation: Notation,

    /// Whether to write a leading `+` on a positive expression.
    pub force_display_sign: bool,

    /// Whether to write exponents equal to `1` on terms, as in `x^1`.
    pub force_display_exponents: bool,

    /// Rounds every displayed number to the given number of decimal places. If [`None`], numbers
    /// are displayed exactly (non-terminating decimals are cut at
    /// [`DISPLAY_PRECISION`](crate::primitive::DISPLAY_PRECISION) places).
    pub decimal_result: Option<u32>,
}

impl FormatOptions {
    /// Wraps the given [`FormatOptions`] into a builder for further customization.
    pub fn into_builder(self) -> FormatOptionsBuilder {
        FormatOptionsBuilder(self)
    }

    /// The markup table of the chosen notation.
    pub fn markup(&self) -> &'static Markup {
        self.notation.markup()
    }

    /// Formats a number, honoring [`FormatOptions::decimal_result`].
    pub(crate) fn number(&self, n: &Number) -> String {
        match self.decimal_result {
            Some(precision) => n.rounded(precision).to_string(),
            None => n.to_string(),
        }
    }
}

/// The notations an expression can be rendered in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// LaTeX math mode, such as `\frac{3}{4}\times x^{2}`.
    ///
    /// This is the default option.
    #[default]
    Latex,

    /// Human-readable plain text, such as `3/4×x^2`.
    Plain,

    /// A flat string with explicit operators, such as `3/4*x^2`.
    Js,
}

impl Notation {
    /// Utility function to create a new [`FormatOptions`] with the same formatting options as the
    /// given [`FormatOptions`], but with the notation set to this value.
    pub fn inside(self, options: FormatOptions) -> FormatOptions {
        FormatOptions {
            notation: self,
            ..options
        }
    }

    /// The markup table of this notation.
    pub fn markup(self) -> &'static Markup {
        match self {
            Notation::Latex => &LATEX,
            Notation::Plain => &PLAIN,
            Notation::Js => &JS,
        }
    }
}

/// Helper struct to build a [`FormatOptions`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptionsBuilder(FormatOptions);

impl FormatOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the notation. See [`Notation`] for more information.
    pub fn notation(mut self, notation: Notation) -> Self {
        self.0.notation = notation;
        self
    }

    /// Switches to (or away from) the flat [`Notation::Js`] representation.
    pub fn js_repr(mut self, js_repr: bool) -> Self {
        self.0.notation = if js_repr { Notation::Js } else { Notation::Latex };
        self
    }

    /// Sets whether to write a leading `+` on a positive expression.
    pub fn force_display_sign(mut self, force_display_sign: bool) -> Self {
        self.0.force_display_sign = force_display_sign;
        self
    }

    /// Sets whether to write exponents equal to `1` on terms.
    pub fn force_display_exponents(mut self, force_display_exponents: bool) -> Self {
        self.0.force_display_exponents = force_display_exponents;
        self
    }

    /// Sets the number of decimal places displayed numbers are rounded to. See
    /// [`FormatOptions::decimal_result`] for more information.
    pub fn decimal_result(mut self, decimal_result: Option<u32>) -> Self {
        self.0.decimal_result = decimal_result;
        self
    }

    /// Builds the [`FormatOptions`] struct.
    pub fn build(self) -> FormatOptions {
        self.0
    }
}

/// The position-dependent state in which a node is rendered.
///
/// It is passed by value into each render call, and the render call returns the context that
/// follows the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Nothing has been written before this node on the current line.
    pub expression_begins: bool,

    /// A positive node writes its `+` even when it begins the expression.
    pub force_display_sign: bool,

    /// The node is written inside brackets.
    pub requires_brackets: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::beginning()
    }
}

impl RenderContext {
    /// The context of the first node of an expression.
    pub fn beginning() -> Self {
        Self {
            expression_begins: true,
            force_display_sign: false,
            requires_brackets: false,
        }
    }

    /// The context of a node written after some other text.
    pub fn continuing() -> Self {
        Self {
            expression_begins: false,
            ..Self::beginning()
        }
    }

    /// The context of the root node rendered with the given options.
    pub fn root(options: &FormatOptions) -> Self {
        Self {
            force_display_sign: options.force_display_sign,
            ..Self::beginning()
        }
    }

    /// Returns this context, with brackets required.
    pub fn with_brackets(self) -> Self {
        Self { requires_brackets: true, ..self }
    }

    /// Returns this context, with brackets no longer required.
    pub fn without_brackets(self) -> Self {
        Self { requires_brackets: false, ..self }
    }

    /// The sign prefix of a node rendered in this context.
    ///
    /// A negative node always writes its minus. A positive node writes its plus unless it begins
    /// the expression and no sign is forced.
    pub fn sign(&self, negative: bool, markup: &Markup) -> &'static str {
        if negative {
            markup.minus
        } else if self.expression_begins && !self.force_display_sign {
            ""
        } else {
            markup.plus
        }
    }
}

/// Wraps the text in brackets.
pub(crate) fn bracketed(markup: &Markup, text: &str) -> String {
    format!("{}{}{}", markup.opening_bracket, text, markup.closing_bracket)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::primitive::num;
    use super::*;

    #[test]
    fn builder() {
        let opts = FormatOptionsBuilder::new()
            .js_repr(true)
            .force_display_sign(true)
            .decimal_result(Some(2))
            .build();

        assert_eq!(opts.notation, Notation::Js);
        assert_eq!(opts.markup().times, "*");
        assert!(opts.force_display_sign);
        assert_eq!(opts.number(&num((2, 3))), "0.67");
        assert_eq!(Notation::Plain.inside(opts).markup().times, "×");
    }

    #[test]
    fn sign_prefix() {
        let markup = &PLAIN;
        assert_eq!(RenderContext::beginning().sign(false, markup), "");
        assert_eq!(RenderContext::beginning().sign(true, markup), "-");
        assert_eq!(RenderContext::continuing().sign(false, markup), "+");

        let forced = RenderContext::root(&FormatOptions { force_display_sign: true, ..Default::default() });
        assert_eq!(forced.sign(false, markup), "+");
    }
}
