//! The expression tree produced by the parser.
//!
//! [`Expr`] is a closed sum type: every operation that walks the tree matches on it
//! exhaustively, so adding an operator variant forces every operation site to be updated at
//! compile time.
//!
//! Expressions are immutable once built. Every transformation over them returns a freshly
//! constructed tree, which makes it safe to reuse one subtree in several result trees (the
//! product and quotient rules of differentiation do this constantly).

use std::fmt;
use std::ops;

/// A parsed algebraic expression.
///
/// Each node denotes a fixed mathematical value as a function of its free variables. Structural
/// equality (the [`PartialEq`] impl) does not imply the rendered strings are equal unless both
/// sides have been reduced.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal, such as `2` or `3.5`. Values are IEEE-754 doubles; non-finite values
    /// flow through transformations as ordinary constants.
    Const(f64),

    /// A variable, such as `x` or `foo_2`.
    Var(String),

    /// Unary negation, such as `-x`.
    Neg(Box<Expr>),

    /// The sum of the two operands.
    Add(Box<Expr>, Box<Expr>),

    /// The difference of the two operands.
    Sub(Box<Expr>, Box<Expr>),

    /// The product of the two operands.
    Mul(Box<Expr>, Box<Expr>),

    /// The quotient of the two operands.
    Div(Box<Expr>, Box<Expr>),

    /// The first operand raised to the second.
    Pow(Box<Expr>, Box<Expr>),

    /// The natural logarithm of the operand.
    Ln(Box<Expr>),
}

impl Expr {
    /// Creates a variable expression from anything string-like.
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    /// Creates a power expression, boxing both operands.
    pub fn pow(base: Expr, exponent: Expr) -> Expr {
        Expr::Pow(Box::new(base), Box::new(exponent))
    }

    /// Creates a natural logarithm expression, boxing the argument.
    pub fn ln(argument: Expr) -> Expr {
        Expr::Ln(Box::new(argument))
    }

    /// The precedence of this node itself. Atoms, negation, and `ln(...)` never wrap themselves
    /// in parentheses, so they sit at [`Precedence::Highest`].
    fn precedence(&self) -> Precedence {
        match self {
            Expr::Add(..) | Expr::Sub(..) => Precedence::Sum,
            Expr::Mul(..) | Expr::Div(..) => Precedence::Product,
            Expr::Pow(..) => Precedence::Power,
            Expr::Const(_) | Expr::Var(_) | Expr::Neg(_) | Expr::Ln(_) => Precedence::Highest,
        }
    }

    /// Renders the expression as minimally-parenthesized text.
    ///
    /// `outer` is the precedence demanded by the rendering context; the result is wrapped in
    /// parentheses only if `outer` is strictly greater than this node's own precedence. Binary
    /// nodes render both children at their own precedence, with one exception: a power renders
    /// its base at [`Precedence::PowerLeft`], one level above [`Precedence::Power`], so a power
    /// used as a base is parenthesized (`(a ^ b) ^ c`) while a power used as an exponent is not
    /// (`a ^ b ^ c`).
    pub fn render(&self, outer: Precedence) -> String {
        let rendered = match self {
            Expr::Const(value) => value.to_string(),
            Expr::Var(name) => name.clone(),
            Expr::Neg(operand) => format!("-{}", operand.render(Precedence::Highest)),
            Expr::Add(left, right) => format!(
                "{} + {}",
                left.render(Precedence::Sum),
                right.render(Precedence::Sum),
            ),
            Expr::Sub(left, right) => format!(
                "{} - {}",
                left.render(Precedence::Sum),
                right.render(Precedence::Sum),
            ),
            Expr::Mul(left, right) => format!(
                "{} * {}",
                left.render(Precedence::Product),
                right.render(Precedence::Product),
            ),
            Expr::Div(left, right) => format!(
                "{} / {}",
                left.render(Precedence::Product),
                right.render(Precedence::Product),
            ),
            Expr::Pow(base, exponent) => format!(
                "{} ^ {}",
                base.render(Precedence::PowerLeft),
                exponent.render(Precedence::Power),
            ),
            // the call syntax is self-delimiting, so the argument never needs parentheses
            Expr::Ln(argument) => format!("ln({})", argument.render(Precedence::Lowest)),
        };

        if outer > self.precedence() {
            format!("({rendered})")
        } else {
            rendered
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Precedence::Lowest))
    }
}

/// The precedence of a rendering context, in order from lowest (never parenthesizes) to highest
/// (parenthesizes everything compound).
///
/// [`Precedence::PowerLeft`] exists only as the context for a power node's base operand; placing
/// it one level above [`Precedence::Power`] is what forces `^` to render right-associatively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precedence {
    /// Any expression renders bare in this context.
    Lowest,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Sum,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Product,

    /// Precedence of exponentiation (`^`).
    Power,

    /// The context used for a power node's base operand.
    PowerLeft,

    /// The context used for a negation's operand: any compound expression is parenthesized.
    Highest,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl ops::Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl ops::Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl ops::Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Div(Box::new(self), Box::new(rhs))
    }
}

impl ops::Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn atoms_render_bare() {
        assert_eq!(Expr::Const(3.0).to_string(), "3");
        assert_eq!(Expr::Const(-2.5).to_string(), "-2.5");
        assert_eq!(Expr::var("alpha").to_string(), "alpha");
    }

    #[test]
    fn sum_inside_product_is_parenthesized() {
        let expr = (Expr::var("x") + Expr::Const(1.0)) * Expr::Const(2.0);
        assert_eq!(expr.to_string(), "(x + 1) * 2");
    }

    #[test]
    fn product_inside_sum_is_bare() {
        let expr = Expr::var("x") * Expr::Const(2.0) + Expr::Const(1.0);
        assert_eq!(expr.to_string(), "x * 2 + 1");
    }

    #[test]
    fn power_renders_right_associatively() {
        let nested_base = Expr::pow(
            Expr::pow(Expr::var("a"), Expr::var("b")),
            Expr::var("c"),
        );
        assert_eq!(nested_base.to_string(), "(a ^ b) ^ c");

        let nested_exponent = Expr::pow(
            Expr::var("a"),
            Expr::pow(Expr::var("b"), Expr::var("c")),
        );
        assert_eq!(nested_exponent.to_string(), "a ^ b ^ c");
    }

    #[test]
    fn negation_parenthesizes_compound_operands() {
        assert_eq!((-Expr::var("x")).to_string(), "-x");

        let compound = -(Expr::var("x") + Expr::Const(1.0));
        assert_eq!(compound.to_string(), "-(x + 1)");
    }

    #[test]
    fn ln_argument_is_self_delimiting() {
        let expr = Expr::ln(Expr::var("x") + Expr::Const(1.0));
        assert_eq!(expr.to_string(), "ln(x + 1)");
    }

    #[test]
    fn precedence_ordering() {
        assert!(Precedence::Lowest < Precedence::Sum);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Product < Precedence::Power);
        assert!(Precedence::Power < Precedence::PowerLeft);
        assert!(Precedence::PowerLeft < Precedence::Highest);
    }
}
