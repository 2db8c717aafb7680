use logos::Logos;
use std::ops::Range;

/// The raw character classes matched by the `logos` lexer.
///
/// This is an internal type: whitespace, newlines, and unrecognized characters only matter for
/// position bookkeeping and never escape the tokenizer. [`tokenize_complete`] collapses the raw
/// stream into [`TokenKind`]s.
///
/// [`tokenize_complete`]: super::tokenize_complete
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub(super) enum RawKind {
    #[token("\n")]
    NewLine,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("ln")]
    Ln,

    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Name,

    // a decimal point must be followed by a digit to be part of the number; the `.` in `1.` is
    // left behind and falls through to `Unknown`
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Num,

    #[regex(r".", priority = 0)]
    Unknown,
}

impl RawKind {
    /// The public token kind this raw class maps to, or [`None`] if it produces no token.
    pub(super) fn token_kind(self) -> Option<TokenKind> {
        Some(match self {
            RawKind::OpenParen => TokenKind::OpenParen,
            RawKind::CloseParen => TokenKind::CloseParen,
            RawKind::Add => TokenKind::Add,
            RawKind::Sub => TokenKind::Sub,
            RawKind::Mul => TokenKind::Mul,
            RawKind::Div => TokenKind::Div,
            RawKind::Exp => TokenKind::Exp,
            RawKind::Ln => TokenKind::Ln,
            RawKind::Name => TokenKind::Name,
            RawKind::Num => TokenKind::Num,
            RawKind::NewLine | RawKind::Whitespace | RawKind::Unknown => return None,
        })
    }
}

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Add,
    Sub,
    Mul,
    Div,
    Exp,

    /// The `ln` keyword. `ln` followed by more identifier characters (e.g. `lnx`) is an ordinary
    /// [`TokenKind::Name`].
    Ln,

    /// An identifier: a letter followed by letters, digits, or underscores.
    Name,

    /// A number literal. The parsed value is carried in [`Token::literal`].
    Num,

    /// The end of the input. Always the last token of the stream, positioned at the final
    /// line/column reached.
    Eof,
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,

    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The line this token starts on, 1-indexed.
    pub line: u32,

    /// The column of this token's first character, 0-indexed, counted in characters consumed on
    /// the current line.
    pub column: u32,

    /// The literal value of a [`TokenKind::Num`] token. `None` for every other kind.
    pub literal: Option<f64>,
}
