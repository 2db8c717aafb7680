//! Symbolic manipulation of [`Expr`](symex_parser::ast::Expr) trees.
//!
//! Four operations are provided, all pure functions returning freshly built trees:
//!
//! - [`reduce`] performs local algebraic simplification (constant folding and identity
//!   elimination). It is best-effort local rewriting, not canonicalization.
//! - [`derivative`] produces the *unsimplified* symbolic derivative with respect to a named
//!   variable; callers are expected to [`reduce`] the result.
//! - [`substitute`] replaces every occurrence of a named variable with a given subtree.
//! - [`eval`] numerically evaluates a tree against a set of variable bindings. The test suites
//!   lean on it to compare symbolic results semantically instead of syntactically.
//!
//! ```
//! use symex_engine::{derivative, reduce};
//! use symex_parser::parser::Parser;
//!
//! let expr = Parser::new("x^2").parse_full().unwrap();
//! let slope = reduce(&derivative(&expr, "x"));
//! assert_eq!(slope.to_string(), "2 * x");
//! ```

pub mod derivative;
pub mod eval;
pub mod simplify;
pub mod substitute;

pub use derivative::derivative;
pub use eval::{eval, EvalError};
pub use simplify::reduce;
pub use substitute::substitute;
