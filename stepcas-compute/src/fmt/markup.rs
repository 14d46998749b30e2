/// The symbolic tokens used to typeset an expression in some notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markup {
    pub plus: &'static str,
    pub minus: &'static str,
    pub times: &'static str,
    pub divide: &'static str,
    pub opening_bracket: &'static str,
    pub closing_bracket: &'static str,
    pub opening_fraction: &'static str,
    pub fraction_vinculum: &'static str,
    pub closing_fraction: &'static str,
    pub opening_exponent: &'static str,
    pub closing_exponent: &'static str,
    pub opening_sqrt: &'static str,
    pub closing_sqrt: &'static str,
    pub opening_out_striked: &'static str,
    pub closing_out_striked: &'static str,
    pub opening_unit: &'static str,
    pub closing_unit: &'static str,

    /// Whether the fraction and exponent tokens group their contents on their own. When false,
    /// compound numerators, denominators and exponents are bracketed.
    pub braced: bool,

    /// Whether a product may be written without the multiplication symbol, as in `2x`.
    pub implicit_multiplication: bool,
}

/// LaTeX markup.
pub static LATEX: Markup = Markup {
    plus: "+",
    minus: "-",
    times: "\\times ",
    divide: "\\div ",
    opening_bracket: "(",
    closing_bracket: ")",
    opening_fraction: "\\frac{",
    fraction_vinculum: "}{",
    closing_fraction: "}",
    opening_exponent: "^{",
    closing_exponent: "}",
    opening_sqrt: "\\sqrt{",
    closing_sqrt: "}",
    opening_out_striked: "\\cancel{",
    closing_out_striked: "}",
    opening_unit: "\\text{ ",
    closing_unit: "}",
    braced: true,
    implicit_multiplication: true,
};

/// Plain text markup, used by the [`Display`](std::fmt::Display) implementations.
pub static PLAIN: Markup = Markup {
    plus: "+",
    minus: "-",
    times: "×",
    divide: "÷",
    opening_bracket: "(",
    closing_bracket: ")",
    opening_fraction: "",
    fraction_vinculum: "/",
    closing_fraction: "",
    opening_exponent: "^",
    closing_exponent: "",
    opening_sqrt: "√(",
    closing_sqrt: ")",
    opening_out_striked: "~",
    closing_out_striked: "~",
    opening_unit: " ",
    closing_unit: "",
    braced: false,
    implicit_multiplication: true,
};

/// Flat string markup that can be handed to a JavaScript-like evaluator.
pub static JS: Markup = Markup {
    plus: "+",
    minus: "-",
    times: "*",
    divide: "/",
    opening_bracket: "(",
    closing_bracket: ")",
    opening_fraction: "",
    fraction_vinculum: "/",
    closing_fraction: "",
    opening_exponent: "^",
    closing_exponent: "",
    opening_sqrt: "sqrt(",
    closing_sqrt: ")",
    opening_out_striked: "",
    closing_out_striked: "",
    opening_unit: "",
    closing_unit: "",
    braced: false,
    implicit_multiplication: false,
};
