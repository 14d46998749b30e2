use crate::{
    error::{DivisionByZero, Error},
    fmt::{bracketed, FormatOptions, RenderContext},
    primitive::Number,
    symbolic::derivation::StepOptions,
};
use log::debug;
use super::{
    exponent_is_one,
    exponent_value,
    impl_display,
    power,
    render_exponent,
    step_exponent,
    wrap_result,
    DisplayStyle,
    Exponent,
    Fraction,
    Node,
    Operation,
    QuotientSymbol,
    Sign,
    Term,
};

/// Factors multiplied together.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub sign: Sign,

    /// The factors of the product. Never empty.
    pub elements: Vec<Node>,

    /// For each factor, whether it is always preceded by an explicit multiplication symbol.
    pub separators: Vec<bool>,

    pub exponent: Exponent,
    pub style: DisplayStyle,
}

impl Product {
    /// Creates a product of the given factors. An empty product holds a single `1`.
    pub fn new(elements: Vec<Node>) -> Self {
        let elements = if elements.is_empty() { vec![Self::neutral()] } else { elements };
        Self {
            sign: Sign::Plus,
            separators: vec![false; elements.len()],
            elements,
            exponent: None,
            style: DisplayStyle::default(),
        }
    }

    pub fn with_sign(self, sign: Sign) -> Self {
        Self { sign, ..self }
    }

    pub fn with_exponent(self, exponent: impl Into<Node>) -> Self {
        Self { exponent: Some(Box::new(exponent.into())), ..self }
    }

    pub fn with_style(self, style: DisplayStyle) -> Self {
        Self { style, ..self }
    }

    pub fn has_unit_exponent(&self) -> bool {
        exponent_is_one(&self.exponent)
    }

    /// The factors that are written, with their indices. Compact products hide their `1`s.
    fn visible_elements(&self) -> Vec<(usize, &Node)> {
        let visible = self.elements.iter()
            .enumerate()
            .filter(|(_, element)| self.style == DisplayStyle::Explicit || !element.is_displ_as_a_single_1())
            .collect::<Vec<_>>();
        if visible.is_empty() {
            self.elements.iter().enumerate().take(1).collect()
        } else {
            visible
        }
    }

    pub(crate) fn visible_len(&self) -> usize {
        self.visible_elements().len()
    }

    fn single_visible(&self) -> Option<&Node> {
        if !self.has_unit_exponent() {
            return None;
        }
        match self.visible_elements().as_slice() {
            [(_, element)] => Some(*element),
            _ => None,
        }
    }

    pub fn is_displ_as_a_single_1(&self) -> bool {
        !self.sign.is_minus() && self.single_visible().map_or(false, Node::is_displ_as_a_single_1)
    }

    pub fn is_displ_as_a_single_0(&self) -> bool {
        !self.sign.is_minus() && self.single_visible().map_or(false, Node::is_displ_as_a_single_0)
    }

    pub fn is_displ_as_a_single_minus_1(&self) -> bool {
        match self.single_visible() {
            Some(element) if self.sign.is_minus() => element.is_displ_as_a_single_1(),
            Some(element) => element.is_displ_as_a_single_minus_1(),
            None => false,
        }
    }

    /// Returns true if the first written factor is an elided `-1`, written as a bare `-`.
    fn elides_leading_minus_one(&self) -> bool {
        let visible = self.visible_elements();
        self.style == DisplayStyle::Compact
            && visible.len() > 1
            && visible[0].1.is_displ_as_a_single_minus_1()
    }

    pub(crate) fn displays_negative(&self) -> bool {
        if self.sign.is_minus() {
            return true;
        }
        if !self.has_unit_exponent() {
            return false;
        }
        self.visible_elements()
            .first()
            .map_or(false, |(_, element)| element.displays_negative())
    }

    pub fn is_numeric(&self) -> bool {
        self.elements.iter().all(Node::is_numeric)
            && self.exponent.as_deref().map_or(true, Node::is_numeric)
    }

    pub fn evaluate(&self) -> Result<Number, Error> {
        let total = self.elements.iter()
            .map(Node::evaluate)
            .product::<Result<Number, Error>>()?;
        Ok(self.sign.apply(power(total, &self.exponent, self)?))
    }

    /// Returns true if the factors of the product can be merged or reordered.
    ///
    /// A product is reducible when it has a numeric exponent other than `1`, nested products,
    /// neutral factors, several numeric factors, a numeric factor that is not in front, a letter
    /// appearing twice, or a sign that should move onto the coefficient.
    pub fn is_reducible(&self) -> bool {
        if self.is_displ_as_a_single_0() || self.is_displ_as_a_single_1() || self.is_displ_as_a_single_minus_1() {
            return false;
        }
        if !self.has_unit_exponent() && exponent_value(&self.exponent).is_ok() {
            return true;
        }

        let mut letters: Vec<&str> = Vec::new();
        let mut numeric = Vec::new();
        for (i, factor) in self.elements.iter().enumerate() {
            if self.elements.len() > 1 && (factor.is_displ_as_a_single_1() || factor.is_displ_as_a_single_0()) {
                return true;
            }
            if factor.is_numeric() {
                numeric.push(i);
                continue;
            }

            match factor {
                Node::Product(_) => return true,
                Node::Term(term) => {
                    if term.sign.is_minus() {
                        return true;
                    }
                    if let (Some(letter), Ok(_)) = (term.letter(), exponent_value(&term.exponent)) {
                        if letters.contains(&letter) {
                            return true;
                        }
                        letters.push(letter);
                    }
                },
                Node::Monomial(monomial) => {
                    if !monomial.has_unit_exponent() || monomial.coefficient.is_displ_as_a_single_minus_1() {
                        return true;
                    }
                    if letters.contains(&monomial.letter()) {
                        return true;
                    }
                    letters.push(monomial.letter());
                    if !monomial.coefficient.is_displ_as_a_single_1() {
                        numeric.push(i);
                    }
                },
                factor => {
                    if factor.sign().is_minus() {
                        return true;
                    }
                },
            }
        }

        numeric.len() > 1
            || numeric.first().map_or(false, |&i| i != 0)
            || (self.sign.is_minus() && !numeric.is_empty())
    }

    /// Merges the factors of the product in one go.
    ///
    /// Numeric factors are multiplied into a single coefficient, powers of the same letter are
    /// merged by adding their exponents, and the signs of the factors are gathered into the sign
    /// of the coefficient. The result is written as `[coefficient][letters][other factors]`.
    pub fn reduce_(&self) -> Result<Node, Error> {
        // a literal exponent stays outside of the reduced product
        let (p, outer) = match exponent_value(&self.exponent) {
            Ok(p) => (p, None),
            Err(_) => (1, self.exponent.clone()),
        };

        let mut gathered = Gathered::default();
        for factor in &self.elements {
            gathered.factor(factor, p)?;
        }
        Ok(wrap_result(gathered.assemble(), self.sign, outer))
    }

    /// Returns a copy of the product with its factors sorted: numeric terms first, then letters
    /// and monomials, then everything else. The order within each group is kept.
    pub fn order(&self) -> Product {
        let rank = |node: &Node| match node {
            Node::Term(term) if term.is_numeric() => 0,
            Node::Term(_) | Node::Monomial(_) => 1,
            _ => 2,
        };
        let mut pairs = self.elements.iter()
            .cloned()
            .zip(self.separators.iter().copied())
            .collect::<Vec<_>>();
        pairs.sort_by_key(|(node, _)| rank(node));

        let (elements, separators): (Vec<Node>, Vec<bool>) = pairs.into_iter().unzip();
        Product { elements, separators, ..self.clone() }
    }

    /// Copy of the product where 1-factor products are replaced by their factor and the signs of
    /// fractions are moved in front of them.
    fn canonicalized(&self) -> Product {
        let elements = self.elements.iter()
            .map(|element| match element {
                Node::Product(inner) if inner.elements.len() == 1 && inner.has_unit_exponent() => {
                    let child = inner.elements[0].clone();
                    let child_sign = child.sign();
                    child.with_sign(child_sign * inner.sign)
                },
                Node::Fraction(fraction) => Node::Fraction(fraction.with_normalized_sign()),
                element => element.clone(),
            })
            .collect();
        Product { elements, ..self.clone() }
    }

    /// Returns the next step of the calculation of a numeric product.
    ///
    /// One step at a time: the exponent is calculated, then every factor that is not at rest
    /// takes a step, then the factors are multiplied together. When fractions are involved, every
    /// other factor is moved into the numerator and the fractions are merged into one.
    ///
    /// Literal products are expanded and reduced instead.
    pub fn calculate_next_step(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        if !self.is_numeric() {
            return self.expand_and_reduce_next_step(opts);
        }
        if let Some(exponent) = step_exponent(&self.exponent, opts)? {
            return Ok(Some(Node::Product(Product { exponent, ..self.clone() })));
        }

        let mut product = self.canonicalized();
        if product.elements.len() == 1 {
            let element = product.elements.remove(0);
            let unwrapped = wrap_result(element, product.sign, product.exponent);
            let next = unwrapped.calculate_next_step_with(opts)?;
            return Ok(Some(next.unwrap_or(unwrapped)));
        }

        let mut stepped = false;
        for element in product.elements.iter_mut() {
            if let Some(next) = element.next_step_in_operation(opts)? {
                *element = next;
                stepped = true;
            }
        }
        if stepped {
            return Ok(Some(Node::Product(product)));
        }

        let result = if product.elements.iter().all(Node::is_term_like) {
            let total = product.elements.iter()
                .map(Node::evaluate)
                .product::<Result<Number, Error>>()?;
            Node::from(total)
        } else {
            product.merge_fractions()
        };
        Ok(Some(wrap_result(result, product.sign, product.exponent)))
    }

    /// Merges at-rest factors and fractions into a single fraction.
    fn merge_fractions(&self) -> Node {
        let mut sign = Sign::Plus;
        let mut numerator = Vec::new();
        let mut denominator = Vec::new();
        for element in &self.elements {
            match element {
                Node::Fraction(fraction) => {
                    sign = sign * fraction.sign;
                    push_factors(&mut numerator, &fraction.numerator, &mut sign);
                    push_factors(&mut denominator, &fraction.denominator, &mut sign);
                },
                other => {
                    sign = sign * other.sign();
                    numerator.push(other.clone().with_sign(Sign::Plus));
                },
            }
        }

        debug!("merging the fractions of {}", self);
        Node::Fraction(Fraction::from_parts(
            sign,
            Node::Product(Product::new(numerator)),
            Node::Product(Product::new(denominator)),
        ))
    }

    /// Returns the next step of the expansion and reduction of a literal product: the exponent
    /// is calculated, then the left-most factor that can progress takes a step, then the factors
    /// are merged.
    ///
    /// Numeric products are calculated instead.
    pub fn expand_and_reduce_next_step(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        if self.is_numeric() {
            return self.calculate_next_step(opts);
        }
        if let Some(exponent) = step_exponent(&self.exponent, opts)? {
            return Ok(Some(Node::Product(Product { exponent, ..self.clone() })));
        }

        for (i, element) in self.elements.iter().enumerate() {
            if let Some(next) = element.expand_and_reduce_next_step_with(opts)? {
                let mut product = self.clone();
                product.elements[i] = next;
                return Ok(Some(Node::Product(product)));
            }
        }

        if self.is_reducible() {
            let reduced = self.reduce_()?;
            debug!("merged the factors of {} into {}", self, reduced);
            return Ok(Some(reduced));
        }
        Ok(None)
    }

    pub(crate) fn render(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        let markup = options.markup();
        if self.sign.is_minus() || !self.has_unit_exponent() {
            let body = self.render_factors(RenderContext::beginning(), options);
            let starts_negative = self.visible_elements()
                .first()
                .map_or(false, |(_, element)| element.displays_negative());
            let body = if !self.has_unit_exponent() || starts_negative {
                bracketed(markup, &body)
            } else {
                body
            };
            return format!(
                "{}{}{}",
                ctx.sign(self.sign.is_minus(), markup),
                body,
                render_exponent(self.exponent.as_deref(), false, options),
            );
        }
        self.render_factors(ctx, options)
    }

    fn render_factors(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        let markup = options.markup();
        let visible = self.visible_elements();
        let elided = self.elides_leading_minus_one();

        let mut out = String::new();
        let mut previous: Option<&Node> = None;
        for (position, (i, factor)) in visible.into_iter().enumerate() {
            if position == 0 {
                if elided {
                    out.push_str(ctx.sign(true, markup));
                    continue;
                }
                if requires_brackets(factor, true) {
                    out.push_str(ctx.sign(false, markup));
                    out.push_str(&factor.render(RenderContext::beginning().with_brackets(), options).0);
                } else {
                    out.push_str(&factor.render(ctx, options).0);
                }
                previous = Some(factor);
                continue;
            }

            if let Some(previous) = previous {
                let times = self.separators[i]
                    || self.style == DisplayStyle::Explicit
                    || !markup.implicit_multiplication
                    || multiply_symbol_is_required(previous, factor);
                if times {
                    out.push_str(markup.times);
                }
            }

            let fctx = if requires_brackets(factor, false) {
                RenderContext::beginning().with_brackets()
            } else {
                RenderContext::beginning()
            };
            out.push_str(&factor.render(fctx, options).0);
            previous = Some(factor);
        }
        out
    }
}

/// Moves the factors of a fraction part into `factors`, gathering the sign of the part.
fn push_factors(factors: &mut Vec<Node>, part: &Node, sign: &mut Sign) {
    match part {
        Node::Product(product) if product.has_unit_exponent() => {
            *sign = *sign * product.sign;
            factors.extend(product.elements.iter().cloned());
        },
        part => factors.push(part.clone()),
    }
}

/// Returns true if a factor is bracketed when written in a product.
fn requires_brackets(factor: &Node, first: bool) -> bool {
    if !first && factor.displays_negative() {
        return true;
    }
    match factor {
        Node::Sum(sum) => !sum.sign.is_minus() && sum.has_unit_exponent() && sum.visible_len() > 1,
        Node::Polynomial(polynomial) => polynomial.displayed_sum().visible_len() > 1,
        Node::Quotient(quotient) => quotient.symbol == QuotientSymbol::Divide && exponent_is_one(&quotient.exponent),
        _ => false,
    }
}

/// Returns true if `next` cannot follow `previous` without a multiplication symbol, as in `2×3`
/// or `2×(-x)`.
fn multiply_symbol_is_required(previous: &Node, next: &Node) -> bool {
    let next_requires = next.displays_negative()
        || match next {
            Node::Term(term) => term.is_numeric(),
            Node::Quotient(_) | Node::Fraction(_) => true,
            Node::Product(product) => product.has_unit_exponent() && product.visible_len() > 1,
            Node::Monomial(monomial) => monomial.has_visible_coefficient(),
            _ => false,
        };
    let previous_requires = match previous {
        Node::Quotient(_) | Node::Fraction(_) => true,
        Node::Term(term) => (term.is_numeric() && !term.has_unit_exponent()) || term.unit.is_some(),
        _ => false,
    };
    next_requires || previous_requires
}

/// The factors of a product being reduced.
#[derive(Debug)]
struct Gathered {
    coefficient: Number,
    letters: Vec<(String, i32)>,
    others: Vec<Node>,
}

impl Default for Gathered {
    fn default() -> Self {
        Self {
            coefficient: Number::from(1),
            letters: Vec::new(),
            others: Vec::new(),
        }
    }
}

impl Gathered {
    fn apply_sign(&mut self, sign: Sign) {
        self.coefficient = sign.apply(self.coefficient.clone());
    }

    fn add_letter(&mut self, name: &str, exponent: i32) {
        match self.letters.iter_mut().find(|(letter, _)| letter == name) {
            Some((_, total)) => *total += exponent,
            None => self.letters.push((name.to_string(), exponent)),
        }
    }

    /// Gathers a factor raised to the power `p`.
    fn factor(&mut self, factor: &Node, p: i32) -> Result<(), Error> {
        if factor.is_numeric() {
            let value = factor.evaluate()?
                .pow(p)
                .ok_or_else(|| Error::new(factor.to_string(), DivisionByZero))?;
            self.coefficient = self.coefficient.clone() * value;
            return Ok(());
        }

        match factor {
            Node::Product(inner) if exponent_value(&inner.exponent).is_ok() => {
                let q = exponent_value(&inner.exponent)? * p;
                self.apply_sign(inner.sign.pow(p));
                for element in &inner.elements {
                    self.factor(element, q)?;
                }
            },
            Node::Term(term) if term.letter().is_some() && exponent_value(&term.exponent).is_ok() => {
                let e = exponent_value(&term.exponent)?;
                self.apply_sign(term.sign.pow(p));
                if let Some(letter) = term.letter() {
                    self.add_letter(letter, e * p);
                }
            },
            Node::Monomial(monomial) if exponent_value(&monomial.exponent).is_ok() => {
                let q = exponent_value(&monomial.exponent)? * p;
                let coefficient = monomial.coefficient.evaluate()?
                    .pow(q)
                    .ok_or_else(|| Error::new(factor.to_string(), DivisionByZero))?;
                self.coefficient = self.coefficient.clone() * coefficient;
                let degree = exponent_value(&monomial.letter_power.exponent)?;
                self.add_letter(monomial.letter(), degree * q);
            },
            other => {
                self.apply_sign(other.sign().pow(p));
                let node = other.clone().with_sign(Sign::Plus);
                self.others.push(raise(node, p));
            },
        }
        Ok(())
    }

    /// Writes the gathered factors as `[coefficient][letters][other factors]`.
    fn assemble(self) -> Node {
        if self.coefficient.is_zero() {
            return Node::from(0);
        }

        let mut factors = self.letters.into_iter()
            .filter(|(_, exponent)| *exponent != 0)
            .map(|(name, exponent)| {
                let letter = Term::from_letter(&name);
                Node::Term(if exponent == 1 { letter } else { letter.with_exponent(exponent) })
            })
            .chain(self.others)
            .collect::<Vec<_>>();

        if factors.is_empty() {
            return Node::from(self.coefficient);
        }
        if !self.coefficient.is_one() && !self.coefficient.is_minus_one() {
            factors.insert(0, Node::from(self.coefficient));
            return Node::Product(Product::new(factors));
        }

        let sign = Sign::of(&self.coefficient);
        if factors.len() == 1 {
            let factor = factors.remove(0);
            let inner = factor.sign();
            factor.with_sign(inner * sign)
        } else {
            Node::Product(Product::new(factors).with_sign(sign))
        }
    }
}

/// Raises a sign-stripped factor to the power `p`, multiplying its exponent if it has an integer
/// one.
fn raise(node: Node, p: i32) -> Node {
    if p == 1 {
        return node;
    }
    match (node.exponent().is_some(), exponent_of(&node)) {
        (true, Some(e)) => node.with_exponent(Some(Node::from(e * p))),
        _ => node.raised_to(Node::from(p)),
    }
}

fn exponent_of(node: &Node) -> Option<i32> {
    let exponent = node.exponent()?;
    exponent.evaluate().ok()?.to_i32()
}

impl Operation for Product {
    fn neutral() -> Node {
        Node::from(1)
    }

    fn is_neutral(node: &Node) -> bool {
        node.is_displ_as_a_single_1()
    }

    fn elements(&self) -> &[Node] {
        &self.elements
    }

    fn parts_mut(&mut self) -> (&mut Vec<Node>, &mut Vec<bool>) {
        (&mut self.elements, &mut self.separators)
    }
}

impl_display!(Product);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{
        fmt::{FormatOptionsBuilder, Notation},
        primitive::num,
        symbolic::node::{Monomial, Sum},
    };
    use super::*;

    const MAX_STEPS: usize = 50;

    fn x() -> Node {
        Node::Term(Term::literal("x").unwrap())
    }

    fn derivation(node: Node) -> Vec<String> {
        let opts = StepOptions::default();
        let mut steps = vec![node.to_string()];
        let mut current = node;
        for _ in 0..MAX_STEPS {
            match current.calculate_next_step_with(&opts).unwrap() {
                Some(next) => {
                    steps.push(next.to_string());
                    current = next;
                },
                None => return steps,
            }
        }
        panic!("no fixed point after {} steps: {:?}", MAX_STEPS, steps);
    }

    /// `[2x, −4x², (x+3)³, 5, (x²)³, (−1)², (2×3)³]`
    fn mixed_product() -> Product {
        let x_plus_3 = Sum::new(vec![x(), Node::from(3)]).with_exponent(3);
        Product::new(vec![
            Node::Monomial(Monomial::new(2, 1)),
            Node::Monomial(Monomial::new(-4, 2)),
            Node::Sum(x_plus_3),
            Node::from(5),
            Node::Term(Term::literal("x").unwrap().with_exponent(2)).raised_to(Node::from(3)),
            Node::Term(Term::signed(Sign::Plus, -1).with_exponent(2)),
            Node::Product(Product::new(vec![Node::from(2), Node::from(3)]).with_exponent(3)),
        ])
    }

    #[test]
    fn reduce_mixed_product() {
        let product = mixed_product();
        assert!(product.is_reducible());
        let reduced = product.reduce_().unwrap();
        assert_eq!(reduced.to_string(), "-8640x^9(x+3)^3");
        assert!(!reduced.is_reducible());
    }

    #[test]
    fn step_mixed_product() {
        let steps = derivation(Node::Product(mixed_product()));
        assert_eq!(steps.last().unwrap(), "-8640x^9(x+3)^3");
    }

    #[test]
    fn order_then_reduce_preserves_value() {
        let product = Product::new(vec![
            Node::Sum(Sum::new(vec![Node::from(1), Node::from(2)])),
            Node::from(-3),
            Node::Term(Term::signed(Sign::Plus, -2).with_exponent(3)),
            Node::from(num((1, 2))),
        ]);
        let value = product.evaluate().unwrap();
        let ordered = product.order();
        assert!(matches!(ordered.elements[3], Node::Sum(_)));
        assert_eq!(ordered.evaluate().unwrap(), value);
        assert_eq!(ordered.reduce_().unwrap().evaluate().unwrap(), value);
        assert_eq!(value, num(36));
    }

    #[test]
    fn numeric_product() {
        let product = Product::new(vec![Node::from(2), Node::from(-3), Node::from(4)]);
        assert_eq!(derivation(Node::Product(product)), vec!["2×(-3)×4", "-24"]);
    }

    #[test]
    fn numeric_monomials_are_multiplied_directly() {
        let product = Product::new(vec![Node::Monomial(Monomial::new(5, 0)), Node::from(3)]);
        assert_eq!(derivation(Node::Product(product)), vec!["5×3", "15"]);

        let zero = Product::new(vec![Node::Monomial(Monomial::new(0, 2)), Node::from(3)]);
        assert_eq!(derivation(Node::Product(zero)).last().unwrap(), "0");
    }

    #[test]
    fn items_move_into_the_numerator_of_a_fraction() {
        let product = Product::new(vec![
            Node::from(3),
            Node::Fraction(Fraction::new(Sign::Plus, 2, 5).unwrap()),
        ]);
        assert_eq!(derivation(Node::Product(product)), vec!["3×2/5", "(3×2)/5", "6/5"]);
    }

    #[test]
    fn product_of_fractions() {
        let product = Product::new(vec![
            Node::Fraction(Fraction::new(Sign::Plus, 2, 3).unwrap()),
            Node::Fraction(Fraction::new(Sign::Plus, 3, 4).unwrap()),
        ]);
        let steps = derivation(Node::Product(product));
        assert_eq!(steps[0], "2/3×3/4");
        assert_eq!(steps[1], "(2×3)/(3×4)");
        assert_eq!(steps.last().unwrap(), "1/2");
    }

    #[test]
    fn merges_letters_and_moves_numbers_first() {
        let product = Product::new(vec![x(), Node::from(2), x(), Node::Term(Term::literal("y").unwrap())]);
        assert!(product.is_reducible());
        assert_eq!(product.reduce_().unwrap().to_string(), "2x^2y");

        let negative = Product::new(vec![x().negated(), Node::Term(Term::literal("y").unwrap())]);
        assert_eq!(negative.reduce_().unwrap().to_string(), "-xy");
    }

    #[test]
    fn neutrals() {
        let product = Product::new(vec![Node::from(1), x(), Node::from(1)]);
        assert_eq!(product.to_string(), "x");
        assert_eq!(product.throw_away_the_neutrals().elements, vec![x()]);
        assert_eq!(Product::new(vec![]).elements, vec![Node::from(1)]);
        assert!(Product::new(vec![Node::from(0), x()]).is_reducible());
        assert_eq!(Product::new(vec![Node::from(0), x()]).reduce_().unwrap(), Node::from(0));
    }

    #[test]
    fn render_golden() {
        let plain = Notation::Plain.inside(Default::default());
        let latex = FormatOptionsBuilder::new().build();
        let js = FormatOptionsBuilder::new().js_repr(true).build();

        let product = Node::Product(Product::new(vec![
            Node::from(3),
            x(),
            Node::Sum(Sum::new(vec![x(), Node::from(1)])),
        ]));
        assert_eq!(product.into_str(&plain), "3x(x+1)");
        assert_eq!(product.into_str(&latex), "3x(x+1)");
        assert_eq!(product.into_str(&js), "3*x*(x+1)");

        let minus_one = Node::Product(Product::new(vec![Node::from(-1), x()]));
        assert_eq!(minus_one.into_str(&plain), "-x");

        let explicit = Node::Product(Product::new(vec![Node::from(2), x()]).with_style(DisplayStyle::Explicit));
        assert_eq!(explicit.into_str(&plain), "2×x");

        let negative = Node::Product(Product::new(vec![Node::from(2), x()]).with_sign(Sign::Minus));
        assert_eq!(negative.into_str(&plain), "-2x");

        let powered = Node::Product(Product::new(vec![Node::from(2), x()]).with_exponent(2));
        assert_eq!(powered.into_str(&latex), "(2x)^{2}");
    }
}
