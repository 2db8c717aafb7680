//! Numerical evaluation of expression trees.

use std::collections::HashMap;
use std::fmt;
use symex_parser::ast::Expr;

/// An error that can occur while evaluating an expression.
///
/// Arithmetic never errors here: division by zero, logarithms of non-positive numbers, and
/// overflowing powers all produce IEEE-754 infinities or NaNs, which are returned as ordinary
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The expression refers to a variable that has no binding.
    UndefinedVariable(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UndefinedVariable(name) => write!(f, "undefined variable `{name}`"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluates the expression with the given variable bindings.
pub fn eval(expr: &Expr, vars: &HashMap<&str, f64>) -> Result<f64, EvalError> {
    Ok(match expr {
        Expr::Const(value) => *value,
        Expr::Var(name) => *vars
            .get(name.as_str())
            .ok_or_else(|| EvalError::UndefinedVariable(name.clone()))?,
        Expr::Neg(operand) => -eval(operand, vars)?,
        Expr::Add(left, right) => eval(left, vars)? + eval(right, vars)?,
        Expr::Sub(left, right) => eval(left, vars)? - eval(right, vars)?,
        Expr::Mul(left, right) => eval(left, vars)? * eval(right, vars)?,
        Expr::Div(left, right) => eval(left, vars)? / eval(right, vars)?,
        Expr::Pow(base, exponent) => eval(base, vars)?.powf(eval(exponent, vars)?),
        Expr::Ln(argument) => eval(argument, vars)?.ln(),
    })
}
