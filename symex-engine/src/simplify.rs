//! Algebraic simplification.
//!
//! [`reduce`] is a single bottom-up rewrite pass: each node first reduces its children, then
//! applies the rewrite rules local to its own operator, first match wins. Every rewrite either
//! shrinks the tree or preserves its size, and constants and variables are fixed points, so the
//! recursion always terminates.
//!
//! This is deliberately *not* canonicalization. Constant association only fires on adjacent
//! siblings (`x + 2 + 3` collects the constants because left-associative parsing makes them
//! adjacent), and no rule reorders commutative operands. Reducing an already-reduced tree is a
//! no-op.

use symex_parser::ast::Expr;

/// Reduces an expression by constant folding and algebraic identity elimination, returning a new
/// tree. Idempotent.
pub fn reduce(expr: &Expr) -> Expr {
    match expr {
        Expr::Const(_) | Expr::Var(_) => expr.clone(),
        Expr::Neg(operand) => reduce_neg(reduce(operand)),
        Expr::Add(left, right) => reduce_add(reduce(left), reduce(right)),
        Expr::Sub(left, right) => reduce_sub(reduce(left), reduce(right)),
        Expr::Mul(left, right) => reduce_mul(reduce(left), reduce(right)),
        Expr::Div(left, right) => reduce_div(reduce(left), reduce(right)),
        Expr::Pow(base, exponent) => reduce_pow(reduce(base), reduce(exponent)),
        Expr::Ln(argument) => reduce_ln(reduce(argument)),
    }
}

/// Returns true if the expression is a constant with exactly the given value.
fn is_const(expr: &Expr, value: f64) -> bool {
    matches!(expr, Expr::Const(c) if *c == value)
}

/// Returns true if either expression is a constant.
fn has_const(x: &Expr, y: &Expr) -> bool {
    matches!(x, Expr::Const(_)) || matches!(y, Expr::Const(_))
}

fn reduce_add(left: Expr, right: Expr) -> Expr {
    if is_const(&left, 0.0) {
        return right;
    }
    if is_const(&right, 0.0) {
        return left;
    }
    if let (Expr::Const(a), Expr::Const(b)) = (&left, &right) {
        return Expr::Const(a + b);
    }

    // constant association: a constant next to a sum that already carries one combines with it
    match (left, right) {
        (Expr::Const(a), Expr::Add(x, y)) if has_const(&x, &y) => fold_sum_constant(a, *x, *y),
        (Expr::Add(x, y), Expr::Const(a)) if has_const(&x, &y) => fold_sum_constant(a, *x, *y),
        (left, right) => left + right,
    }
}

fn fold_sum_constant(a: f64, x: Expr, y: Expr) -> Expr {
    match (x, y) {
        // the combined constant goes back through the identity rules, so a sum that collapses to
        // `0 + other` comes out as `other`
        (Expr::Const(b), other) | (other, Expr::Const(b)) => reduce_add(Expr::Const(a + b), other),
        // guarded by has_const, but keep the match total
        (x, y) => Expr::Const(a) + (x + y),
    }
}

fn reduce_sub(left: Expr, right: Expr) -> Expr {
    if is_const(&left, 0.0) {
        return reduce(&(Expr::Const(-1.0) * right));
    }
    if is_const(&right, 0.0) {
        return left;
    }
    if let (Expr::Const(a), Expr::Const(b)) = (&left, &right) {
        return Expr::Const(a - b);
    }

    // note: no constant association here, unlike addition and multiplication
    left - right
}

fn reduce_mul(left: Expr, right: Expr) -> Expr {
    if is_const(&left, 0.0) || is_const(&right, 0.0) {
        return Expr::Const(0.0);
    }
    if is_const(&left, 1.0) {
        return right;
    }
    if is_const(&right, 1.0) {
        return left;
    }
    if let (Expr::Const(a), Expr::Const(b)) = (&left, &right) {
        return Expr::Const(a * b);
    }

    match (left, right) {
        (Expr::Const(a), Expr::Mul(x, y)) if has_const(&x, &y) => fold_product_constant(a, *x, *y),
        (Expr::Mul(x, y), Expr::Const(a)) if has_const(&x, &y) => fold_product_constant(a, *x, *y),
        (left, right) => left * right,
    }
}

fn fold_product_constant(a: f64, x: Expr, y: Expr) -> Expr {
    match (x, y) {
        (Expr::Const(b), other) | (other, Expr::Const(b)) => reduce_mul(Expr::Const(a * b), other),
        (x, y) => Expr::Const(a) * (x * y),
    }
}

fn reduce_div(left: Expr, right: Expr) -> Expr {
    // the both-constant fold comes first, so `0 / 0` is NaN rather than 0; there is no
    // divide-by-zero guard anywhere, IEEE-754 infinities and NaNs flow through as constants
    if let (Expr::Const(a), Expr::Const(b)) = (&left, &right) {
        return Expr::Const(a / b);
    }
    if is_const(&left, 0.0) {
        return Expr::Const(0.0);
    }
    if is_const(&right, 1.0) {
        return left;
    }

    left / right
}

fn reduce_pow(base: Expr, exponent: Expr) -> Expr {
    if let (Expr::Const(a), Expr::Const(b)) = (&base, &exponent) {
        return Expr::Const(a.powf(*b));
    }
    if is_const(&exponent, 1.0) {
        return base;
    }

    match base {
        // (b^i)^o = b^(i*o); the collapsed exponent goes back through this function so that a
        // product collapsing to 1 still erases the power node
        Expr::Pow(inner_base, inner_exponent) => {
            reduce_pow(*inner_base, reduce(&(*inner_exponent * exponent)))
        },
        base => Expr::pow(base, exponent),
    }
}

fn reduce_neg(operand: Expr) -> Expr {
    match operand {
        Expr::Const(value) => Expr::Const(-value),
        operand => -operand,
    }
}

fn reduce_ln(argument: Expr) -> Expr {
    match argument {
        Expr::Const(value) => Expr::Const(value.ln()),
        // a bare variable literally named `e` stands in for Euler's number; `e` anywhere else is
        // an ordinary variable
        Expr::Var(name) if name == "e" => Expr::Const(1.0),
        argument => Expr::ln(argument),
    }
}
