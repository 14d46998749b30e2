use env_logger::Env;
use log::info;
use stepcas_compute::{
    error::Error,
    fmt::{FormatOptionsBuilder, Notation},
    symbolic::{
        derive,
        node::{BinomialIdentity, Expandable, Fraction, Monomial, Polynomial, Product, Quotient, QuotientSymbol, Sum, Term},
        Node,
        RenderedSteps,
        Sign,
        StepOptions,
    },
};

fn x() -> Result<Node, Error> {
    Ok(Node::Term(Term::literal("x")?))
}

fn scenarios() -> Result<Vec<Node>, Error> {
    let binomial = |b: i32| -> Result<Node, Error> { Ok(Node::Sum(Sum::new(vec![x()?, Node::from(b)]))) };

    Ok(vec![
        Node::Sum(Sum::new(vec![
            Node::Term(Term::number(4).with_exponent(2)),
            Node::Term(Term::number(5).with_exponent(2)),
        ])),
        Node::Fraction(Fraction::new(Sign::Plus, 92, 76)?),
        Node::Sum(Sum::new(vec![
            Node::Fraction(Fraction::new(Sign::Plus, 1, 4)?),
            Node::Fraction(Fraction::new(Sign::Plus, 1, 6)?),
        ])),
        Node::Quotient(Quotient::new(Sign::Plus, 48, 6, QuotientSymbol::Divide)?),
        Node::Product(Product::new(vec![
            Node::Monomial(Monomial::new(2, 1)),
            Node::Monomial(Monomial::new(-4, 2)),
            Node::Sum(Sum::new(vec![x()?, Node::from(3)]).with_exponent(3)),
            Node::from(5),
        ])),
        Node::Expandable(Expandable::new(binomial(2)?, binomial(3)?)),
        Node::BinomialIdentity(BinomialIdentity::new(x()?, -3)?),
        Node::Polynomial(Polynomial::new(vec![
            Monomial::new(2, 2),
            Monomial::new(3, 1),
            Monomial::new(-1, 2),
            Monomial::new(5, 0),
        ])),
    ])
}

fn run() -> Result<(), Error> {
    let plain = Notation::Plain.inside(Default::default());
    let latex = FormatOptionsBuilder::new().build();

    for node in scenarios()? {
        info!("deriving {}", node);
        let mut steps = RenderedSteps::new(plain);
        let result = derive(node.clone(), &StepOptions::default(), &mut steps)?;

        println!("{}", node.into_str(&plain));
        for line in steps.lines() {
            println!("  = {}", line);
        }
        println!("  LaTeX: {} = {}", node.into_str(&latex), result.into_str(&latex));
        println!();
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("{}", err.report_to_string("expression"));
        std::process::exit(1);
    }
}
