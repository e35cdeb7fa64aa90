use crate::algebra::expr::Expr;

/// Insertion-ordered binding environment: a linear-scan association list,
/// not a `HashMap`, directly mirroring the source's array-based `Bindings`
/// (`bind_push`/`bind_get`).
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    entries: Vec<(String, Expr)>,
}

impl Bindings {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn push(&mut self, key: &str, value: Expr) {
        self.entries.push((key.to_string(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A wildcard pattern matching any single node, without binding it.
pub fn pattern_any() -> Expr {
    Expr::var("_")
}

/// A named-capture pattern: binds on first encounter, and on every later
/// occurrence of the same name requires structural equality with that
/// binding.
pub fn pattern_capture(name: &str) -> Expr {
    Expr::var(&format!("?{name}"))
}

/// Tries to match `pattern` against `term`, extending `env` with any new
/// captures. On failure, `env` is left with whatever partial bindings the
/// failing attempt already made; a failed match is not an error, just `false`.
pub fn matches(pattern: &Expr, term: &Expr, env: &mut Bindings) -> bool {
    if let Expr::Var(name) = pattern {
        let name = name.as_str();
        if name == "_" {
            return true;
        }
        if let Some(capture) = name.strip_prefix('?') {
            return match env.get(capture) {
                Some(bound) => equal(bound, term),
                None => {
                    env.push(capture, term.clone());
                    true
                }
            };
        }
    }

    match (pattern, term) {
        (Expr::Const(a), Expr::Const(b)) => a == b,
        (Expr::Var(a), Expr::Var(b)) => a == b,
        (Expr::Power(pb, pe), Expr::Power(tb, te)) => {
            matches(pb, tb, env) && matches(pe, te, env)
        }
        (Expr::Sum(ps), Expr::Sum(ts)) | (Expr::Product(ps), Expr::Product(ts)) => {
            ps.len() == ts.len() && ps.iter().zip(ts).all(|(p, t)| matches(p, t, env))
        }
        _ => false,
    }
}

/// Plain structural equality, used by `matches` to re-check a capture's
/// later occurrences. No AC/commutative reordering is attempted.
pub fn equal(a: &Expr, b: &Expr) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_anything_without_binding() {
        let mut env = Bindings::new();
        assert!(matches(&pattern_any(), &Expr::const_(5.0), &mut env));
        assert_eq!(env.iter().count(), 0);
    }

    #[test]
    fn capture_binds_on_first_occurrence() {
        let mut env = Bindings::new();
        assert!(matches(&pattern_capture("x"), &Expr::const_(2.0), &mut env));
        assert_eq!(env.get("x"), Some(&Expr::const_(2.0)));
    }

    #[test]
    fn repeated_capture_requires_same_value() {
        let pattern = Expr::Sum(vec![pattern_capture("x"), pattern_capture("x")]);
        let mut env = Bindings::new();
        assert!(!matches(
            &pattern,
            &Expr::Sum(vec![Expr::const_(1.0), Expr::const_(2.0)]),
            &mut env
        ));

        let mut env2 = Bindings::new();
        assert!(matches(
            &pattern,
            &Expr::Sum(vec![Expr::const_(1.0), Expr::const_(1.0)]),
            &mut env2
        ));
    }

    #[test]
    fn structure_mismatch_fails() {
        let mut env = Bindings::new();
        assert!(!matches(
            &Expr::Sum(vec![Expr::const_(1.0)]),
            &Expr::Product(vec![Expr::const_(1.0)]),
            &mut env
        ));
    }
}
