//! The error kinds the parser can report.
//!
//! Each kind implements [`ErrorKind`] by hand, producing an [`ariadne`] report pointing at the
//! offending token, plus a one-line [`Display`] message for callers without a terminal.

use ariadne::{Fmt, Label, Report, ReportKind};
use std::fmt::{self, Display};
use std::ops::Range;
use symex_error::{ErrorKind, EXPR};

/// An unexpected token was found where an operand was required.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The lexeme of the token that was found.
    pub found: String,
}

impl Display for UnexpectedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected token `{}`", self.found)
    }
}

impl ErrorKind for UnexpectedToken {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((src_id, span))
                    .with_message(format!("expected an {} here", "expression".fg(EXPR)))
                    .with_color(EXPR),
            )
            .with_help("an expression starts with a number, a variable, `ln`, `-`, or `(`")
            .finish()
    }
}

/// The end of the input was reached where an operand was required.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

impl Display for UnexpectedEof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected end of input")
    }
}

impl ErrorKind for UnexpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((src_id, span))
                    .with_message(format!("you might need to add another {} here", "expression".fg(EXPR)))
                    .with_color(EXPR),
            )
            .finish()
    }
}

/// An opening parenthesis was never closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis;

impl Display for UnclosedParenthesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected `)` after expression")
    }
}

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((src_id, span))
                    .with_message("expected `)` here")
                    .with_color(EXPR),
            )
            .with_help("add a closing parenthesis `)` to match the opening one")
            .finish()
    }
}

/// The whole input should have been consumed, but trailing tokens remain.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof {
    /// The lexeme of the first trailing token.
    pub found: String,
}

impl Display for ExpectedEof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected end of input, found `{}`", self.found)
    }
}

impl ErrorKind for ExpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)> {
        Report::build(ReportKind::Error, src_id, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((src_id, span))
                    .with_message(format!("I could not understand the remaining {} here", "expression".fg(EXPR)))
                    .with_color(EXPR),
            )
            .finish()
    }
}
