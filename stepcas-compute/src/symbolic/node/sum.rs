use crate::{
    error::Error,
    fmt::{bracketed, FormatOptions, RenderContext},
    primitive::{num, Number},
    symbolic::{derivation::StepOptions, lexicon::TermsLexicon},
};
use log::debug;
use super::{
    exponent_is_one,
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
    Product,
    Sign,
    Term,
};

/// Elements added together.
#[derive(Debug, Clone, PartialEq)]
pub struct Sum {
    pub sign: Sign,

    /// The terms of the sum. Never empty.
    pub elements: Vec<Node>,

    /// For each element, whether it is always written with an explicit `+`, bracketed if
    /// negative, as in `2+(-3)`.
    pub separators: Vec<bool>,

    pub exponent: Exponent,
    pub style: DisplayStyle,

    /// Set on the intermediate line of a reduction, such as `(2+1)x+(3-5)`. The next step of such
    /// a sum evaluates the coefficients.
    pub(crate) pending_reduction: bool,
}

impl Sum {
    /// Creates a sum of the given elements. An empty sum holds a single `0`.
    pub fn new(elements: Vec<Node>) -> Self {
        let elements = if elements.is_empty() { vec![Self::neutral()] } else { elements };
        Self {
            sign: Sign::Plus,
            separators: vec![false; elements.len()],
            elements,
            exponent: None,
            style: DisplayStyle::default(),
            pending_reduction: false,
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

    /// Returns true if this sum is the intermediate line of a reduction.
    pub fn is_pending_reduction(&self) -> bool {
        self.pending_reduction
    }

    /// The elements that are written, with their indices. Compact sums hide their zeros (but
    /// always write at least one element).
    fn visible_elements(&self) -> Vec<(usize, &Node)> {
        let visible = self.elements.iter()
            .enumerate()
            .filter(|(_, element)| self.style == DisplayStyle::Explicit || !element.is_displ_as_a_single_0())
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

    /// The single written element of a positive sum with exponent `1`.
    fn single_visible(&self) -> Option<&Node> {
        if self.sign.is_minus() || !self.has_unit_exponent() {
            return None;
        }
        match self.visible_elements().as_slice() {
            [(_, element)] => Some(*element),
            _ => None,
        }
    }

    pub fn is_displ_as_a_single_1(&self) -> bool {
        self.single_visible().map_or(false, Node::is_displ_as_a_single_1)
    }

    pub fn is_displ_as_a_single_0(&self) -> bool {
        self.single_visible().map_or(false, Node::is_displ_as_a_single_0)
    }

    pub fn is_displ_as_a_single_minus_1(&self) -> bool {
        self.single_visible().map_or(false, Node::is_displ_as_a_single_minus_1)
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
            .sum::<Result<Number, Error>>()?;
        Ok(self.sign.apply(power(total, &self.exponent, self)?))
    }

    /// Returns true if some elements are like terms that can be gathered.
    pub fn is_reducible(&self) -> bool {
        TermsLexicon::of(self).has_like_terms()
    }

    /// Gathers the like terms of the sum in one go, evaluating their coefficients. Terms are
    /// kept in order of first appearance, and terms whose coefficients cancel out are dropped.
    pub fn reduce_(&self) -> Result<Node, Error> {
        let mut elements = Vec::new();
        for entry in TermsLexicon::of(self).entries {
            let total = entry.coefficients.iter()
                .map(Node::evaluate)
                .sum::<Result<Number, Error>>()?;
            elements.extend(entry.key.with_coefficient(total));
        }

        let body = match elements.len() {
            0 => Node::from(0),
            1 => elements.remove(0),
            _ => Node::Sum(Sum::new(elements)),
        };
        Ok(wrap_result(body, self.sign, self.exponent.clone()))
    }

    /// Writes the like terms of the sum with their coefficients gathered in brackets, as in
    /// `(2+1)x+(3-5)`. The returned sum is marked so that its next step evaluates the brackets.
    pub fn reduction_line(&self) -> Sum {
        let elements = TermsLexicon::of(self).entries
            .into_iter()
            .map(|mut entry| {
                let coefficient = if entry.coefficients.len() == 1 {
                    entry.coefficients.remove(0)
                } else {
                    Node::Sum(Sum::new(entry.coefficients))
                };
                entry.key.with_coefficient_node(coefficient)
            })
            .collect();

        Sum {
            sign: self.sign,
            exponent: self.exponent.clone(),
            pending_reduction: true,
            ..Sum::new(elements)
        }
    }

    /// Copy of the sum where 1-element sums are replaced by their element and the signs of
    /// fractions are moved in front of them. The displayed value does not change.
    fn canonicalized(&self) -> Sum {
        let elements = self.elements.iter()
            .map(|element| match element {
                Node::Sum(inner) if inner.elements.len() == 1 && inner.has_unit_exponent() => {
                    let child = inner.elements[0].clone();
                    let child_sign = child.sign();
                    child.with_sign(child_sign * inner.sign)
                },
                Node::Fraction(fraction) => Node::Fraction(fraction.with_normalized_sign()),
                element => element.clone(),
            })
            .collect();
        Sum { elements, ..self.clone() }
    }

    /// Returns the next step of the calculation of a numeric sum.
    ///
    /// One step at a time: the exponent is calculated, then every element that is not at rest
    /// takes a step, then the terms are added together. Fractions are added by merging those with
    /// the same denominator, or otherwise by expanding all of them to the least common multiple of
    /// the denominators.
    ///
    /// Literal sums are expanded and reduced instead.
    pub fn calculate_next_step(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        if !self.is_numeric() {
            return self.expand_and_reduce_next_step(opts);
        }
        if let Some(exponent) = step_exponent(&self.exponent, opts)? {
            return Ok(Some(Node::Sum(Sum { exponent, ..self.clone() })));
        }

        let mut sum = self.canonicalized();
        if sum.elements.len() == 1 {
            // unwrapping is silent, so it is merged with the next step of the element
            let element = sum.elements.remove(0);
            let unwrapped = wrap_result(element, sum.sign, sum.exponent);
            let next = unwrapped.calculate_next_step_with(opts)?;
            return Ok(Some(next.unwrap_or(unwrapped)));
        }

        let mut stepped = false;
        for element in sum.elements.iter_mut() {
            if let Some(next) = element.next_step_in_operation(opts)? {
                *element = next;
                stepped = true;
            }
        }
        if stepped {
            return Ok(Some(Node::Sum(sum)));
        }

        let result = if sum.elements.iter().all(Node::is_term_like) {
            sum.add_terms()?
        } else {
            sum.add_fractions()?
        };
        Ok(Some(wrap_result(result, sum.sign, sum.exponent)))
    }

    /// Adds terms that are all at rest. A unit shared by every term is kept.
    fn add_terms(&self) -> Result<Node, Error> {
        let total = self.elements.iter()
            .map(Node::evaluate)
            .sum::<Result<Number, Error>>()?;

        let mut units = self.elements.iter().map(|element| match element {
            Node::Term(term) => term.unit.as_deref(),
            _ => None,
        });
        let first = units.next().flatten();
        let unit = first.filter(|first| units.all(|unit| unit == Some(*first)));

        let mut term = Term::number(total);
        term.unit = unit.map(str::to_string);
        Ok(Node::Term(term))
    }

    /// Adds at-rest terms and fractions, merging fractions of the same denominator if there are
    /// some, and otherwise writing every element over the least common denominator.
    fn add_fractions(&self) -> Result<Node, Error> {
        let denominators = self.elements.iter()
            .map(|element| match element {
                Node::Fraction(fraction) => fraction.denominator_value().map(Some),
                _ => Ok(None),
            })
            .collect::<Result<Vec<_>, Error>>()?;
        let shared = |d: &Number| denominators.iter().filter(|other| other.as_ref() == Some(d)).count() > 1;

        if denominators.iter().flatten().any(|d| shared(d)) {
            let mut merged = vec![false; self.elements.len()];
            let mut elements = Vec::new();
            for (i, element) in self.elements.iter().enumerate() {
                if merged[i] {
                    continue;
                }
                let (Node::Fraction(fraction), Some(d)) = (element, &denominators[i]) else {
                    elements.push(element.clone());
                    continue;
                };
                if !shared(d) {
                    elements.push(element.clone());
                    continue;
                }

                let mut numerators = Vec::new();
                for (j, other) in self.elements.iter().enumerate().skip(i) {
                    if let (Node::Fraction(other), Some(other_d)) = (other, &denominators[j]) {
                        if other_d == d {
                            numerators.push(other.signed_numerator());
                            merged[j] = true;
                        }
                    }
                }
                elements.push(Node::Fraction(Fraction::from_parts(
                    Sign::Plus,
                    Node::Sum(Sum::new(numerators)),
                    (*fraction.denominator).clone(),
                )));
            }

            debug!("merging fractions of the same denominator in {}", self);
            return Ok(match elements.len() {
                1 => elements.remove(0),
                _ => Node::Sum(Sum::new(elements)),
            });
        }

        let lcm = denominators.iter()
            .flatten()
            .fold(num(1), |acc, d| acc.lcm(d));
        debug!("writing {} over the common denominator {}", self, lcm);

        let elements = self.elements.iter()
            .zip(&denominators)
            .map(|(element, d)| -> Result<Node, Error> {
                match (element, d) {
                    (Node::Fraction(fraction), Some(d)) => {
                        let factor = lcm.clone() / d.clone();
                        Ok(if factor.is_one() {
                            element.clone()
                        } else {
                            Node::Fraction(fraction.expanded_by(&factor))
                        })
                    },
                    (element, _) => {
                        let value = element.evaluate()?;
                        Ok(Node::Fraction(Fraction::from_parts(
                            Sign::of(&value),
                            Node::Product(Product::new(vec![
                                Node::from(value.abs()),
                                Node::from(lcm.clone()),
                            ]).with_style(DisplayStyle::Explicit)),
                            Node::from(lcm.clone()),
                        )))
                    },
                }
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Node::Sum(Sum::new(elements)))
    }

    /// Replaces the element at `index` by `next`. A positive sum is spliced in place, so that the
    /// sum stays flat.
    fn replace_flattening(&mut self, index: usize, next: Node) {
        match next {
            Node::Sum(inner) if !inner.sign.is_minus() && inner.has_unit_exponent() && !inner.pending_reduction => {
                let count = inner.elements.len();
                self.elements.splice(index..=index, inner.elements);
                self.separators.splice(index..=index, std::iter::repeat(false).take(count));
            },
            next => self.elements[index] = next,
        }
    }

    /// Copy of the sum with the elements of its nested sums brought up to the top level, their
    /// signs distributed. Returns [`None`] if there is no nested sum to flatten.
    fn flattened(&self) -> Option<Sum> {
        let nested = |element: &Node| matches!(
            element,
            Node::Sum(inner) if inner.has_unit_exponent() && !inner.pending_reduction
        );
        if !self.elements.iter().any(&nested) {
            return None;
        }

        let mut elements = Vec::new();
        for element in &self.elements {
            match element {
                Node::Sum(inner) if nested(element) => {
                    elements.extend(inner.elements.iter().map(|child| {
                        let child_sign = child.sign();
                        child.clone().with_sign(child_sign * inner.sign)
                    }));
                },
                element => elements.push(element.clone()),
            }
        }
        Some(Sum {
            sign: self.sign,
            exponent: self.exponent.clone(),
            style: self.style,
            ..Sum::new(elements)
        })
    }

    /// Returns the next step of the expansion and reduction of a literal sum.
    ///
    /// One step at a time: the exponent is calculated, then the left-most element that can
    /// progress takes a step. Once the elements are stuck, nested sums are flattened, zeros are
    /// removed, like terms are gathered into an intermediate line (evaluated on the next step),
    /// and a negative sign is distributed over the terms.
    ///
    /// Numeric sums are calculated instead.
    pub fn expand_and_reduce_next_step(&self, opts: &StepOptions) -> Result<Option<Node>, Error> {
        if self.is_numeric() {
            return self.calculate_next_step(opts);
        }
        if let Some(exponent) = step_exponent(&self.exponent, opts)? {
            return Ok(Some(Node::Sum(Sum { exponent, ..self.clone() })));
        }
        if self.pending_reduction {
            let reduced = self.reduce_()?;
            debug!("gathered {} into {}", self, reduced);
            return Ok(Some(reduced));
        }

        for (i, element) in self.elements.iter().enumerate() {
            if let Some(next) = element.expand_and_reduce_next_step_with(opts)? {
                let mut sum = self.clone();
                sum.replace_flattening(i, next);
                return Ok(Some(Node::Sum(sum)));
            }
        }

        if let Some(flattened) = self.flattened() {
            return Ok(Some(Node::Sum(flattened)));
        }
        if self.elements.len() > 1 && self.elements.iter().any(Node::is_null) {
            return Ok(Some(Node::Sum(self.throw_away_the_neutrals())));
        }
        if self.is_reducible() {
            let line = self.reduction_line();
            debug!("like terms of {} gathered as {}", self, line);
            return Ok(Some(Node::Sum(line)));
        }
        if !self.has_unit_exponent() {
            return Ok(None);
        }
        if self.sign.is_minus() {
            let elements = self.elements.iter().cloned().map(Node::negated).collect();
            return Ok(Some(Node::Sum(Sum { style: self.style, ..Sum::new(elements) })));
        }
        if self.elements.len() == 1 {
            return Ok(Some(self.elements[0].clone()));
        }
        Ok(None)
    }

    pub(crate) fn render(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        let markup = options.markup();
        if self.sign.is_minus() || !self.has_unit_exponent() {
            let body = self.render_elements(RenderContext::beginning(), options);
            return format!(
                "{}{}{}",
                ctx.sign(self.sign.is_minus(), markup),
                bracketed(markup, &body),
                render_exponent(self.exponent.as_deref(), false, options),
            );
        }
        self.render_elements(ctx, options)
    }

    fn render_elements(&self, ctx: RenderContext, options: &FormatOptions) -> String {
        let markup = options.markup();
        let mut out = String::new();
        let mut ctx = ctx;
        for (i, element) in self.visible_elements() {
            let separated = self.separators[i] || self.style == DisplayStyle::Explicit;
            match element {
                element if separated && !ctx.expression_begins && element.displays_negative() => {
                    out.push_str(markup.plus);
                    out.push_str(&element.render(RenderContext::beginning().with_brackets(), options).0);
                },
                Node::Sum(inner) if !inner.sign.is_minus() && inner.has_unit_exponent() && inner.visible_len() > 1 => {
                    out.push_str(ctx.sign(false, markup));
                    out.push_str(&bracketed(markup, &inner.render(RenderContext::beginning(), options)));
                },
                element => {
                    let (text, _) = element.render(ctx, options);
                    out.push_str(&text);
                },
            }
            ctx = RenderContext::continuing();
        }
        out
    }
}

impl Operation for Sum {
    fn neutral() -> Node {
        Node::from(0)
    }

    fn is_neutral(node: &Node) -> bool {
        node.is_displ_as_a_single_0()
    }

    fn elements(&self) -> &[Node] {
        &self.elements
    }

    fn parts_mut(&mut self) -> (&mut Vec<Node>, &mut Vec<bool>) {
        (&mut self.elements, &mut self.separators)
    }
}

impl_display!(Sum);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{
        error::NotFound,
        symbolic::node::Monomial,
    };
    use super::*;

    const MAX_STEPS: usize = 50;

    fn x() -> Node {
        Node::Term(Term::literal("x").unwrap())
    }

    fn term(n: i64) -> Node {
        Node::from(n)
    }

    /// Steps the node to its fixed point, returning every step in plain text.
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

    #[test]
    fn sum_of_squares() {
        let sum = Sum::new(vec![
            Node::Term(Term::number(4).with_exponent(2)),
            Node::Term(Term::number(5).with_exponent(2)),
        ]);
        let next = sum.calculate_next_step(&StepOptions::default()).unwrap();
        assert_eq!(next, Some(Node::Sum(Sum::new(vec![term(16), term(25)]))));
        assert_eq!(derivation(Node::Sum(sum)), vec!["4^2+5^2", "16+25", "41"]);
    }

    #[test]
    fn negative_sum_with_exponent() {
        let sum = Sum::new(vec![term(2), term(-7)]).with_exponent(2);
        assert_eq!(derivation(Node::Sum(sum)), vec!["(2-7)^2", "(-5)^2", "25"]);
    }

    #[test]
    fn fractions_over_common_denominator() {
        let sum = Sum::new(vec![
            Node::Fraction(Fraction::new(Sign::Plus, 1, 4).unwrap()),
            Node::Fraction(Fraction::new(Sign::Plus, 1, 6).unwrap()),
        ]);
        assert_eq!(derivation(Node::Sum(sum)), vec![
            "1/4+1/6",
            "(1×3)/(4×3)+(1×2)/(6×2)",
            "3/12+2/12",
            "(3+2)/12",
            "5/12",
        ]);
    }

    #[test]
    fn term_plus_fraction() {
        let sum = Sum::new(vec![term(3), Node::Fraction(Fraction::new(Sign::Plus, 1, 2).unwrap())]);
        let steps = derivation(Node::Sum(sum));
        assert_eq!(steps.first().unwrap(), "3+1/2");
        assert_eq!(steps.last().unwrap(), "7/2");
    }

    #[test]
    fn numeric_monomials_are_added_directly() {
        let sum = Sum::new(vec![Node::Monomial(Monomial::new(5, 0)), term(3)]);
        assert_eq!(derivation(Node::Sum(sum)), vec!["5+3", "8"]);
    }

    #[test]
    fn gathers_like_terms() {
        let sum = Sum::new(vec![
            x(),
            term(3),
            Node::Monomial(Monomial::new(2, 1)),
            term(-1),
        ]);
        assert_eq!(derivation(Node::Sum(sum)), vec!["x+3+2x-1", "(1+2)x+(3-1)", "3x+2"]);
    }

    #[test]
    fn cancelling_terms() {
        let sum = Sum::new(vec![x(), term(2), x().negated()]);
        assert_eq!(derivation(Node::Sum(sum)), vec!["x+2-x", "(1-1)x+2", "2"]);
    }

    #[test]
    fn negative_sum_is_distributed() {
        let inner = Sum::new(vec![x(), term(-2)]).with_sign(Sign::Minus);
        let sum = Sum::new(vec![Node::Monomial(Monomial::new(3, 2)), Node::Sum(inner)]);
        assert_eq!(derivation(Node::Sum(sum)), vec!["3x^2-(x-2)", "3x^2-x+2"]);
    }

    #[test]
    fn reduce_is_idempotent() {
        let sum = Sum::new(vec![
            Node::Monomial(Monomial::new(2, 1)),
            term(5),
            x(),
            Node::Monomial(Monomial::new(-4, 2)),
        ]);
        let once = sum.reduce_().unwrap();
        let twice = once.reduce_().unwrap();
        assert_eq!(once.to_string(), "3x+5-4x^2");
        assert_eq!(twice.to_string(), once.to_string());
    }

    #[test]
    fn append_and_remove() {
        let mut sum = Sum::new(vec![term(1)]);
        sum.append_with_separator(term(-3), true);
        assert_eq!(sum.to_string(), "1+(-3)");

        let wrapped = Node::Product(Product::new(vec![x()]));
        sum.append(wrapped);
        assert_eq!(sum.remove(&x()).unwrap(), Node::Product(Product::new(vec![x()])));
        assert!(sum.remove(&x()).unwrap_err().is::<NotFound>());

        sum.remove(&term(1)).unwrap();
        sum.remove(&term(-3)).unwrap();
        assert_eq!(sum.elements, vec![term(0)]);
        assert_eq!(sum.separators, vec![false]);
    }

    #[test]
    fn neutrals() {
        let sum = Sum::new(vec![term(0), x(), term(0)]);
        assert_eq!(sum.throw_away_the_neutrals().elements, vec![x()]);
        assert_eq!(Sum::new(vec![term(0), term(0)]).throw_away_the_neutrals().elements, vec![term(0)]);
        assert_eq!(Sum::new(vec![]).elements, vec![term(0)]);
    }

    #[test]
    fn render_brackets() {
        let nested = Sum::new(vec![term(1), term(2)]);
        let sum = Sum::new(vec![x(), Node::Sum(nested.clone())]);
        assert_eq!(sum.to_string(), "x+(1+2)");

        let negated = Sum::new(vec![x(), Node::Sum(nested.with_sign(Sign::Minus))]);
        assert_eq!(negated.to_string(), "x-(1+2)");

        let explicit = Sum::new(vec![x(), term(-4)]).with_style(DisplayStyle::Explicit);
        assert_eq!(explicit.to_string(), "x+(-4)");
        assert_eq!(
            Node::Sum(explicit).into_str(&Default::default()),
            "x+(-4)",
        );
    }
}
