//! The recursive-descent parser.
//!
//! The grammar is a fixed precedence ladder, lowest binding to highest; each level is one method
//! that calls the next:
//!
//! ```text
//! expression := term
//! term       := factor (('+' | '-') factor)*        left-associative
//! factor     := unary (('*' | '/') unary)*          left-associative
//! unary      := '-' unary | power
//! power      := function ('^' power)?               right-associative
//! function   := 'ln' primary | primary
//! primary    := number | name | '(' expression ')'
//! ```
//!
//! Note that unary negation sits *outside* exponentiation: `-1^2` parses as `-(1^2)`.
//!
//! There is no error recovery; the first structural problem aborts the whole parse.

pub mod error;

use crate::ast::Expr;
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use symex_error::{Error, ErrorKind};

/// A parser over the token stream produced by the tokenizer. This is the type to use to parse a
/// piece of text into an [`Expr`] tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing. Always ends with a single
    /// [`TokenKind::Eof`] token.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed. Never moves past the trailing
    /// [`TokenKind::Eof`] token, so indexing with it is always in bounds.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source).into_boxed_slice(),
            cursor: 0,
        }
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> &Token<'source> {
        &self.tokens[self.cursor]
    }

    /// Returns the current token and advances the cursor, unless the stream is at its trailing
    /// [`TokenKind::Eof`] token, which is never consumed.
    fn advance(&mut self) -> Token<'source> {
        let token = self.tokens[self.cursor].clone();
        if token.kind != TokenKind::Eof {
            self.cursor += 1;
        }
        token
    }

    /// Consumes the current token and returns true if it is of the given kind.
    fn advance_if(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Creates an error pointing at the current token, or at the end of the input if the stream
    /// is exhausted.
    fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Self::error_at(self.peek(), kind)
    }

    /// Creates an error pointing at the given token.
    fn error_at(token: &Token, kind: impl ErrorKind + 'static) -> Error {
        Error::new(token.span.clone(), token.line, token.column, kind)
    }

    /// Parses a full expression, requiring that nothing but the end of the input follows it.
    pub fn parse_full(&mut self) -> Result<Expr, Error> {
        let expr = self.expression()?;
        if self.peek().kind == TokenKind::Eof {
            Ok(expr)
        } else {
            let found = self.peek().lexeme.to_string();
            Err(self.error(error::ExpectedEof { found }))
        }
    }

    /// Parses one expression, leaving any trailing tokens unconsumed. This is the grammar's
    /// entry point.
    pub fn expression(&mut self) -> Result<Expr, Error> {
        self.term()
    }

    /// A left-associative chain of factors separated by `+` or `-`.
    fn term(&mut self) -> Result<Expr, Error> {
        let mut expr = self.factor()?;

        loop {
            if self.advance_if(TokenKind::Add) {
                expr = expr + self.factor()?;
            } else if self.advance_if(TokenKind::Sub) {
                expr = expr - self.factor()?;
            } else {
                return Ok(expr);
            }
        }
    }

    /// A left-associative chain of unary expressions separated by `*` or `/`.
    fn factor(&mut self) -> Result<Expr, Error> {
        let mut expr = self.unary()?;

        loop {
            if self.advance_if(TokenKind::Mul) {
                expr = expr * self.unary()?;
            } else if self.advance_if(TokenKind::Div) {
                expr = expr / self.unary()?;
            } else {
                return Ok(expr);
            }
        }
    }

    /// Any number of leading `-` signs, so `--x` is `Neg(Neg(x))`.
    fn unary(&mut self) -> Result<Expr, Error> {
        if self.advance_if(TokenKind::Sub) {
            Ok(-self.unary()?)
        } else {
            self.power()
        }
    }

    /// Exponentiation. The exponent recurses back into this level, making `^` right-associative:
    /// `a^b^c` is `a^(b^c)`.
    fn power(&mut self) -> Result<Expr, Error> {
        let expr = self.function()?;

        if self.advance_if(TokenKind::Exp) {
            Ok(Expr::pow(expr, self.power()?))
        } else {
            Ok(expr)
        }
    }

    /// The `ln` keyword applied to a single primary, or a bare primary.
    fn function(&mut self) -> Result<Expr, Error> {
        if self.advance_if(TokenKind::Ln) {
            Ok(Expr::ln(self.primary()?))
        } else {
            self.primary()
        }
    }

    /// A number literal, a variable, or a parenthesized expression.
    fn primary(&mut self) -> Result<Expr, Error> {
        let token = self.advance();
        match token.kind {
            // the Num pattern guarantees the tokenizer attached a literal
            TokenKind::Num => Ok(Expr::Const(token.literal.unwrap_or(f64::NAN))),
            TokenKind::Name => Ok(Expr::Var(token.lexeme.to_string())),
            TokenKind::OpenParen => {
                let expr = self.expression()?;
                if self.advance_if(TokenKind::CloseParen) {
                    Ok(expr)
                } else {
                    Err(self.error(error::UnclosedParenthesis))
                }
            },
            TokenKind::Eof => Err(Self::error_at(&token, error::UnexpectedEof)),
            _ => Err(Self::error_at(&token, error::UnexpectedToken {
                found: token.lexeme.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(source: &str) -> Expr {
        Parser::new(source).parse_full().unwrap()
    }

    fn var(name: &str) -> Expr {
        Expr::var(name)
    }

    #[test]
    fn literal_number() {
        assert_eq!(parse("16"), Expr::Const(16.0));
        assert_eq!(parse("3.14"), Expr::Const(3.14));
    }

    #[test]
    fn literal_variable() {
        assert_eq!(parse("pi"), var("pi"));
    }

    #[test]
    fn term_left_associativity() {
        assert_eq!(
            parse("1 - 2 + 3"),
            Expr::Const(1.0) - Expr::Const(2.0) + Expr::Const(3.0),
        );
    }

    #[test]
    fn factor_binds_tighter_than_term() {
        assert_eq!(
            parse("1 + 2 * 3"),
            Expr::Const(1.0) + Expr::Const(2.0) * Expr::Const(3.0),
        );
    }

    #[test]
    fn power_right_associativity() {
        assert_eq!(
            parse("a ^ b ^ c"),
            Expr::pow(var("a"), Expr::pow(var("b"), var("c"))),
        );
    }

    #[test]
    fn unary_binds_outside_power() {
        // `-1^2` is `-(1^2)`, because unary recurses into the power level
        assert_eq!(
            parse("-1^2"),
            -Expr::pow(Expr::Const(1.0), Expr::Const(2.0)),
        );
    }

    #[test]
    fn repeated_unary_negation() {
        assert_eq!(parse("--x"), -(-var("x")));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            parse("(1 + 2) * 3"),
            (Expr::Const(1.0) + Expr::Const(2.0)) * Expr::Const(3.0),
        );
    }

    #[test]
    fn ln_takes_one_primary() {
        assert_eq!(parse("ln x"), Expr::ln(var("x")));

        // the argument is a primary, so `ln x ^ 2` is `(ln x) ^ 2`
        assert_eq!(
            parse("ln x ^ 2"),
            Expr::pow(Expr::ln(var("x")), Expr::Const(2.0)),
        );

        // ...and `ln x + 1` is `(ln x) + 1`
        assert_eq!(
            parse("ln x + 1"),
            Expr::ln(var("x")) + Expr::Const(1.0),
        );
    }

    #[test]
    fn ln_of_parenthesized_expression() {
        assert_eq!(
            parse("ln(x + 1)"),
            Expr::ln(var("x") + Expr::Const(1.0)),
        );
    }

    #[test]
    fn lnx_is_a_variable() {
        assert_eq!(parse("lnx"), var("lnx"));
    }

    #[test]
    fn complicated_expression() {
        // e^(-x)*(-x^2+x+3)
        let expected = Expr::pow(var("e"), -var("x"))
            * (-Expr::pow(var("x"), Expr::Const(2.0)) + var("x") + Expr::Const(3.0));
        assert_eq!(parse("e^(-x)*(-x^2+x+3)"), expected);
    }

    #[test]
    fn unclosed_parenthesis_is_an_error() {
        let err = Parser::new("(1+2").parse_full().unwrap_err();
        assert_eq!(err.to_string(), "1:4: expected `)` after expression");
    }

    #[test]
    fn stray_closing_parenthesis_is_an_error() {
        let err = Parser::new("1 + )").parse_full().unwrap_err();
        assert_eq!(err.to_string(), "1:4: unexpected token `)`");
    }

    #[test]
    fn missing_operand_is_an_error() {
        let err = Parser::new("1 +").parse_full().unwrap_err();
        assert_eq!(err.to_string(), "1:3: unexpected end of input");
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = Parser::new("").parse_full().unwrap_err();
        assert_eq!(err.to_string(), "1:0: unexpected end of input");
    }

    #[test]
    fn trailing_tokens_are_an_error() {
        let err = Parser::new("1 2").parse_full().unwrap_err();
        assert_eq!(err.to_string(), "1:2: expected end of input, found `2`");
    }

    #[test]
    fn error_position_spans_lines() {
        let err = Parser::new("1 +\n  )").parse_full().unwrap_err();
        assert_eq!(err.to_string(), "2:2: unexpected token `)`");
    }
}
