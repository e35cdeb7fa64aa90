use crate::algebra::accel;
use crate::algebra::expr::Expr;

/// Recursively folds constant runs inside `Sum`/`Product` nodes.
/// Non-constant children keep their relative order; if every child
/// folds to a constant, the node collapses to that `Const`; if exactly one
/// term (constant or not) remains, the wrapping node itself is dropped.
pub fn simplify(e: Expr) -> Expr {
    match e {
        Expr::Const(_) | Expr::Var(_) => e,
        Expr::Power(base, exp) => Expr::Power(Box::new(simplify(*base)), Box::new(simplify(*exp))),
        Expr::Sum(items) => fold_variadic(items, true),
        Expr::Product(items) => fold_variadic(items, false),
    }
}

fn fold_variadic(items: Vec<Expr>, is_sum: bool) -> Expr {
    let items: Vec<Expr> = items.into_iter().map(simplify).collect();

    let mut constants = Vec::new();
    let mut rest = Vec::new();
    for item in items {
        match item {
            Expr::Const(v) => constants.push(v),
            other => rest.push(other),
        }
    }

    if constants.is_empty() {
        return wrap(rest, is_sum);
    }

    let folded = if is_sum {
        pairwise_fold(&constants, 0.0, accel::add_vec, |a, b| a + b)
    } else {
        pairwise_fold(&constants, 1.0, accel::mul_vec, |a, b| a * b)
    };

    if rest.is_empty() {
        return Expr::Const(folded);
    }
    rest.push(Expr::Const(folded));
    wrap(rest, is_sum)
}

fn wrap(mut items: Vec<Expr>, is_sum: bool) -> Expr {
    match items.len() {
        0 => Expr::Const(if is_sum { 0.0 } else { 1.0 }),
        1 => items.pop().unwrap(),
        _ => {
            if is_sum {
                Expr::Sum(items)
            } else {
                Expr::Product(items)
            }
        }
    }
}

/// Half-split, zip-then-reduce fold of a slice of constants, with an odd
/// leftover combined in afterwards, calling through the accelerator hook
/// instead of an inline SIMD kernel.
fn pairwise_fold(
    values: &[f64],
    identity: f64,
    vec_op: fn(&[f64], &[f64], &mut [f64]),
    combine: fn(f64, f64) -> f64,
) -> f64 {
    match values.len() {
        0 => identity,
        1 => values[0],
        n => {
            let half = n / 2;
            let (a, rest) = values.split_at(half);
            let b = &rest[..half];
            let mut tmp = vec![identity; half];
            vec_op(a, b, &mut tmp);
            let mut acc = identity;
            for v in tmp {
                acc = combine(acc, v);
            }
            if n % 2 == 1 {
                acc = combine(acc, values[n - 1]);
            }
            acc
        }
    }
}
