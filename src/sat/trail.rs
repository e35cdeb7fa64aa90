use tracing::trace;

use crate::sat::assignment::Assignment;
use crate::sat::clause::ClauseIdx;
use crate::sat::var::{Lit, Var};

/// Why a literal ended up on the trail. Kept mainly so proof/debug tooling
/// (see `sat::proof`, and the `fmt_trail` helper below) can explain an
/// assignment; the search driver itself only cares about trail order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reason {
    Decision,
    Propagated { clause: ClauseIdx },
    Axiom,
}

/// Time-ordered log of enqueued literals since the search began, backed by
/// an `Assignment`. Invariant: for every trail entry `l`,
/// `assignment[var(l)] == sign(l)`; `pop_to` restores the assignment array to
/// exactly the state held when the trail had that length.
#[derive(Debug, Clone, Default)]
pub(crate) struct Trail {
    entries: Vec<(Lit, Reason)>,
    assignment: Assignment,
}

impl Trail {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn expand(&mut self, v: Var) {
        self.assignment.expand(v);
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn assignment_mut(&mut self) -> &mut Assignment {
        &mut self.assignment
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, i: usize) -> Option<Lit> {
        self.entries.get(i).map(|&(l, _)| l)
    }

    pub fn reason(&self, i: usize) -> Reason {
        self.entries[i].1
    }

    /// Enqueues `l`. Succeeds (returns `true`) if `var(l)` was unassigned, or
    /// already assigned to the same polarity; fails if it is assigned to the
    /// opposite polarity.
    pub fn enqueue(&mut self, l: Lit, reason: Reason) -> bool {
        if !self.assignment.is_unassigned(l) {
            return self.assignment.is_true(l);
        }
        self.assignment.set(l);
        self.entries.push((l, reason));
        trace!(lit = %l, ?reason, "enqueue");
        true
    }

    /// Rewinds the trail to length `n`, clearing every popped literal's
    /// assignment.
    pub fn pop_to(&mut self, n: usize) {
        while self.entries.len() > n {
            let (l, _) = self.entries.pop().unwrap();
            self.assignment.unset(l.var());
        }
    }

    pub fn fmt_trail(&self) -> String {
        let mut out = String::from("[");
        for (i, (l, reason)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let tag = match reason {
                Reason::Decision => "D",
                Reason::Propagated { .. } => "P",
                Reason::Axiom => "A",
            };
            out.push_str(&format!("{l}{tag}"));
        }
        out.push(']');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enqueue_then_pop_restores_assignment() {
        let mut t = Trail::new();
        t.expand(Var::new(1));
        t.expand(Var::new(2));
        assert!(t.enqueue(Lit::new(1), Reason::Decision));
        assert!(t.enqueue(Lit::new(-2), Reason::Axiom));
        assert_eq!(t.len(), 2);
        t.pop_to(1);
        assert_eq!(t.len(), 1);
        assert!(t.assignment().is_unassigned(Lit::new(2)));
        assert!(t.assignment().is_true(Lit::new(1)));
    }

    #[test]
    fn re_enqueue_same_polarity_succeeds() {
        let mut t = Trail::new();
        t.expand(Var::new(1));
        assert!(t.enqueue(Lit::new(1), Reason::Decision));
        assert!(t.enqueue(Lit::new(1), Reason::Axiom));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn re_enqueue_opposite_polarity_fails() {
        let mut t = Trail::new();
        t.expand(Var::new(1));
        assert!(t.enqueue(Lit::new(1), Reason::Decision));
        assert!(!t.enqueue(Lit::new(-1), Reason::Axiom));
    }
}
