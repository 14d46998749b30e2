//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type carrying the expression an error originated from.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display, Formatter}, ops::Range};

#[cfg(test)]
extern crate self as stepcas_error;

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while building, evaluating, or stepping an
/// expression.
///
/// This trait is usually derived with `stepcas_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so that the concrete kind can be inspected.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with the expression it originated from.
#[derive(Debug)]
pub struct Error {
    /// The plain-text rendering of the expression this error originated from.
    pub expr: String,

    /// The regions of [`Error::expr`] to highlight.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error highlighting the whole given expression.
    ///
    /// Spans are counted in characters, as the report source indexes them.
    pub fn new(expr: impl Into<String>, kind: impl ErrorKind + 'static) -> Self {
        let expr = expr.into();
        let spans = vec![0..expr.chars().count()];
        Self { expr, spans, kind: Box::new(kind) }
    }

    /// Creates a new error highlighting the given regions of the expression.
    pub fn with_spans(
        expr: impl Into<String>,
        spans: Vec<Range<usize>>,
        kind: impl ErrorKind + 'static,
    ) -> Self {
        Self { expr: expr.into(), spans, kind: Box::new(kind) }
    }

    /// Returns true if the error is of the given kind.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the concrete error kind, if it is of the given type.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report of this error, with the expression as its source.
    pub fn report_to_string(&self, src_id: &str) -> String {
        let mut buf = Vec::new();

        // writing to a `Vec<u8>` cannot fail
        let _ = self.build_report(src_id).write((src_id, Source::from(&self.expr)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use stepcas_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("`{}` cannot be raised to this power", self.base),
        labels = ["this expression"],
        help = "exponents must evaluate to integers",
    )]
    struct BadPower {
        base: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "nothing to see here")]
    struct Unlabeled;

    #[test]
    fn message_from_fields() {
        let err = Error::new("2^x", BadPower { base: "2".to_string() });
        assert_eq!(err.to_string(), "`2` cannot be raised to this power");
        assert_eq!(err.spans, vec![0..3]);
    }

    #[test]
    fn span_counts_characters() {
        let err = Error::new("5÷(2×2)", Unlabeled);
        assert_eq!(err.spans, vec![0..7]);

        let report = strip_ansi_escapes::strip(err.report_to_string("input"));
        assert!(String::from_utf8_lossy(&report).contains("nothing to see here"));
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new("x", Unlabeled);
        assert!(err.is::<Unlabeled>());
        assert!(!err.is::<BadPower>());
        assert!(err.downcast_ref::<BadPower>().is_none());
    }

    #[test]
    fn report_contains_message_and_help() {
        let err = Error::new("(x+3)^y", BadPower { base: "x+3".to_string() });
        let report = strip_ansi_escapes::strip(err.report_to_string("input"));
        let report = String::from_utf8_lossy(&report);

        assert!(report.contains("`x+3` cannot be raised to this power"));
        assert!(report.contains("this expression"));
        assert!(report.contains("exponents must evaluate to integers"));
    }
}
