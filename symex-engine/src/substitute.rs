//! Variable substitution.

use symex_parser::ast::Expr;

/// Replaces every variable named `var` with (a copy of) `replacement`, rebuilding the rest of the
/// tree unchanged.
///
/// This is purely syntactic: the expression language has no binding constructs, so there is no
/// capture to avoid.
pub fn substitute(expr: &Expr, var: &str, replacement: &Expr) -> Expr {
    match expr {
        Expr::Const(_) => expr.clone(),
        Expr::Var(name) => {
            if name == var {
                replacement.clone()
            } else {
                expr.clone()
            }
        },
        Expr::Neg(operand) => -substitute(operand, var, replacement),
        Expr::Add(left, right) => {
            substitute(left, var, replacement) + substitute(right, var, replacement)
        },
        Expr::Sub(left, right) => {
            substitute(left, var, replacement) - substitute(right, var, replacement)
        },
        Expr::Mul(left, right) => {
            substitute(left, var, replacement) * substitute(right, var, replacement)
        },
        Expr::Div(left, right) => {
            substitute(left, var, replacement) / substitute(right, var, replacement)
        },
        Expr::Pow(base, exponent) => Expr::pow(
            substitute(base, var, replacement),
            substitute(exponent, var, replacement),
        ),
        Expr::Ln(argument) => Expr::ln(substitute(argument, var, replacement)),
    }
}
