//! Parsing for plain-text algebraic expressions.
//!
//! Source text flows through two stages: the [`tokenizer`] converts raw text into a sequence of
//! position-tagged [`Token`](tokenizer::Token)s, and the [`parser`] consumes that sequence with a
//! recursive-descent precedence ladder, producing an [`Expr`](ast::Expr) tree. The tree type and
//! its precedence-aware rendering live in [`ast`].
//!
//! ```
//! use symex_parser::parser::Parser;
//!
//! let expr = Parser::new("x^2 + 1").parse_full().unwrap();
//! assert_eq!(expr.to_string(), "x ^ 2 + 1");
//! ```

pub mod ast;
pub mod parser;
pub mod tokenizer;
