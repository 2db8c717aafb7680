//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

use ariadne::{Color, Report};
use std::fmt::{Debug, Display};
use std::ops::Range;

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// An error kind can render itself two ways: as a rich [`Report`] pointing into the source text,
/// or as a plain one-line message through its [`Display`] impl, for callers that have nowhere to
/// draw a report.
pub trait ErrorKind: Debug + Display + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: Range<usize>,
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with a region of source code that can be highlighted.
///
/// In addition to the byte span used by report rendering, the error records the line (1-indexed)
/// and column (0-indexed, counted in characters) of the offending token, matching the position
/// tracking done by the tokenizer.
#[derive(Debug)]
pub struct Error {
    /// The region of the source code that this error originated from.
    pub span: Range<usize>,

    /// The line the error occurred on, 1-indexed.
    pub line: u32,

    /// The column the error occurred at, 0-indexed.
    pub column: u32,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given span, position, and kind.
    pub fn new(span: Range<usize>, line: u32, column: u32, kind: impl ErrorKind + 'static) -> Self {
        Self { span, line, column, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, self.span.clone())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.kind)
    }
}

impl std::error::Error for Error {}
