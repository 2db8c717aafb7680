//! Conversion of raw source text into an ordered sequence of [`Token`]s.

pub mod token;

use logos::Logos;
use token::RawKind;
pub use token::{Token, TokenKind};

/// Returns an owned array containing all of the tokens produced by the tokenizer, ending with a
/// single [`TokenKind::Eof`] token. This allows the parser to freely move a cursor over the
/// stream.
///
/// Lexing is total and never fails. Whitespace and newlines produce no tokens; newlines reset the
/// column counter and advance the line counter. Any other character that does not start a token
/// (e.g. `#` or `;`) is silently dropped, still counting toward the column. This pass-through is
/// deliberate permissiveness, not an error path.
pub fn tokenize_complete(source: &str) -> Vec<Token> {
    let mut lexer = RawKind::lexer(source);
    let mut tokens = Vec::new();
    let mut line: u32 = 1;
    let mut column: u32 = 0;

    while let Some(result) = lexer.next() {
        let lexeme = lexer.slice();
        let width = lexeme.chars().count() as u32;
        match result {
            Ok(RawKind::NewLine) => {
                line += 1;
                column = 0;
            },
            Ok(raw) => {
                if let Some(kind) = raw.token_kind() {
                    let literal = if kind == TokenKind::Num {
                        lexeme.parse().ok()
                    } else {
                        None
                    };
                    tokens.push(Token {
                        kind,
                        lexeme,
                        span: lexer.span(),
                        line,
                        column,
                        literal,
                    });
                }
                column += width;
            },
            // unmatched input is dropped like any other unrecognized character
            Err(()) => column += width,
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        lexeme: "",
        span: source.len()..source.len(),
        line,
        column,
        literal: None,
    });

    tokens
}
