//! Symbolic differentiation.
//!
//! [`derivative`] applies the standard calculus rules structurally and returns the raw,
//! unsimplified derivative tree. The result is full of `0 *` and `^ 1` noise by construction;
//! callers are expected to run it through [`reduce`](crate::reduce).

use symex_parser::ast::Expr;

/// Returns the symbolic derivative of the expression with respect to the named variable.
///
/// The power rule used here is the fully general one, valid when both the base and the exponent
/// depend on the differentiation variable:
///
/// ```text
/// d/dx[l^r] = (r' ln l) * l^r  +  r * l' * l^(r-1)
/// ```
///
/// When the exponent is constant its term vanishes under reduction, leaving the ordinary power
/// rule; when the base is constant the same happens to the second term, leaving exponential
/// differentiation.
pub fn derivative(expr: &Expr, var: &str) -> Expr {
    match expr {
        Expr::Const(_) => Expr::Const(0.0),
        Expr::Var(name) => {
            if name == var {
                Expr::Const(1.0)
            } else {
                Expr::Const(0.0)
            }
        },
        Expr::Neg(operand) => -derivative(operand, var),
        Expr::Add(left, right) => derivative(left, var) + derivative(right, var),
        Expr::Sub(left, right) => derivative(left, var) - derivative(right, var),
        Expr::Mul(left, right) => {
            // product rule: l'r + r'l
            derivative(left, var) * (**right).clone() + derivative(right, var) * (**left).clone()
        },
        Expr::Div(left, right) => {
            // quotient rule: (l'r - r'l) / r^2
            let (left, right) = (left.as_ref(), right.as_ref());
            (derivative(left, var) * right.clone() - derivative(right, var) * left.clone())
                / Expr::pow(right.clone(), Expr::Const(2.0))
        },
        Expr::Pow(base, exponent) => {
            let (l, r) = (base.as_ref(), exponent.as_ref());
            derivative(r, var) * Expr::ln(l.clone()) * Expr::pow(l.clone(), r.clone())
                + r.clone()
                    * derivative(l, var)
                    * Expr::pow(l.clone(), r.clone() - Expr::Const(1.0))
        },
        Expr::Ln(argument) => {
            // chain rule: (1 / arg) * arg'
            (Expr::Const(1.0) / (**argument).clone()) * derivative(argument, var)
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::{eval, reduce};
    use std::collections::HashMap;
    use symex_parser::parser::Parser;

    fn parse(source: &str) -> Expr {
        Parser::new(source).parse_full().unwrap()
    }

    /// Asserts that the reduced derivative of `source` with respect to `x` agrees with the
    /// expected slope function at several sample points.
    fn assert_derivative(source: &str, expected: impl Fn(f64) -> f64) {
        let result = reduce(&derivative(&reduce(&parse(source)), "x"));

        for x in [0.0, 0.5, 1.0, 2.0] {
            let vars = HashMap::from([("x", x), ("e", std::f64::consts::E)]);
            let actual = eval(&result, &vars).unwrap();
            assert!(
                (actual - expected(x)).abs() < 1e-9,
                "d/dx[{source}] = {result} evaluated to {actual} at x = {x}, expected {}",
                expected(x),
            );
        }
    }

    #[test]
    fn derivative_of_a_constant_is_zero() {
        assert_eq!(derivative(&Expr::Const(7.0), "x"), Expr::Const(0.0));
    }

    #[test]
    fn derivative_of_a_variable() {
        assert_eq!(derivative(&Expr::var("x"), "x"), Expr::Const(1.0));
        assert_eq!(derivative(&Expr::var("y"), "x"), Expr::Const(0.0));
    }

    #[test]
    fn derivative_of_constant_expression_reduces_to_zero() {
        let expr = parse("2^3 + 4 * 5 / ln 2");
        assert_eq!(reduce(&derivative(&expr, "x")), Expr::Const(0.0));
    }

    #[test]
    fn product_rule_shape() {
        // the raw tree is l'r + r'l, untouched by simplification
        let expr = parse("x * y");
        assert_eq!(
            derivative(&expr, "x"),
            Expr::Const(1.0) * Expr::var("y") + Expr::Const(0.0) * Expr::var("x"),
        );
    }

    #[test]
    fn polynomial_derivative() {
        // d/dx[x^2] = 2x
        assert_derivative("x^2", |x| 2.0 * x);

        // d/dx[x^3 - 2x] = 3x^2 - 2
        assert_derivative("x^3 - 2*x", |x| 3.0 * x * x - 2.0);
    }

    #[test]
    fn ln_derivative() {
        let result = reduce(&derivative(&parse("ln x"), "x"));

        for x in [0.5, 1.0, 2.0, 10.0] {
            let vars = HashMap::from([("x", x)]);
            let actual = eval(&result, &vars).unwrap();
            assert!((actual - 1.0 / x).abs() < 1e-9);
        }
    }

    #[test]
    fn chained_power_derivative() {
        // d/dx[(2x)^4 + 3] = 8 * (2x)^3
        assert_derivative("((x * 2) ^ 4) + 3", |x| 8.0 * (2.0 * x).powi(3));
    }

    #[test]
    fn quotient_rule_derivative() {
        // d/dx[x / (x + 1)] = 1 / (x + 1)^2
        assert_derivative("x / (x + 1)", |x| 1.0 / ((x + 1.0) * (x + 1.0)));
    }

    #[test]
    fn exponential_derivative() {
        // d/dx[e^(-x) * (-x^2 + x + 3)] = e^(-x) * (x^2 - 3x - 2); the `ln e` produced by the
        // general power rule folds to 1 during reduction
        assert_derivative("e^(-x)*(-x^2+x+3)", |x| {
            (-x).exp() * (x * x - 3.0 * x - 2.0)
        });
    }

    #[test]
    fn variable_exponent_derivative() {
        // d/dx[2^x] = 2^x * ln 2
        assert_derivative("2^x", |x| 2.0f64.powf(x) * 2.0f64.ln());
    }
}
