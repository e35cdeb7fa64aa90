use tracing::{debug, instrument, trace};

use crate::sat::assignment::Assignment;
use crate::sat::clause::{ClauseDb, ClauseIdx};
use crate::sat::data::VarVec;
use crate::sat::proof::ProofSink;
use crate::sat::propagate::PropagateResult;
use crate::sat::trail::{Reason, Trail};
use crate::sat::var::{Lit, Var};
use crate::sat::watch::WatchLists;
#[cfg(test)]
use crate::sat::watch::build_watch_lists;

/// Compiled-in search parameters; there is no environment or file-based
/// configuration layer, only this struct and its `Default`.
/// `restart_interval` is a reserved hook: stored, never consulted, since
/// restart policies beyond a nameable cadence are a non-goal.
#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub var_decay: f32,
    pub cls_decay: f32,
    pub restart_interval: u32,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            var_decay: 0.95,
            cls_decay: 0.999,
            restart_interval: 256,
        }
    }
}

/// A satisfying assignment, one entry per variable.
#[derive(Debug, Clone)]
pub struct Model(VarVec<i8>);

impl Model {
    pub fn value(&self, v: Var) -> bool {
        self.0[v] > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveResult {
    Sat,
    Unsat,
}

struct DecisionFrame {
    trail_pos: usize,
    lit: Lit,
    flipped: bool,
}

/// The SAT engine: clause database, watch index, trail and activity state
/// bundled behind one entry point.
pub struct Solver {
    pub(crate) clause_db: ClauseDb,
    pub(crate) watches: WatchLists,
    pub(crate) trail: Trail,
    pub(crate) propagated: usize,
    activity: VarVec<f32>,
    var_inc: f32,
    params: Params,
    decisions: Vec<DecisionFrame>,
    ok: bool,
    proof_sink: Option<Box<dyn ProofSink>>,
}

impl Solver {
    pub fn new(n_vars: u32) -> Self {
        let mut s = Solver {
            clause_db: ClauseDb::new(),
            watches: WatchLists::new(),
            trail: Trail::new(),
            propagated: 0,
            activity: VarVec::new(),
            var_inc: 1.0,
            params: Params::default(),
            decisions: Vec::new(),
            ok: true,
            proof_sink: None,
        };
        for i in 1..=n_vars {
            let v = Var::new(i);
            s.trail.expand(v);
            s.watches.expand(Lit::from(v), Vec::new());
            s.watches.expand(-Lit::from(v), Vec::new());
            s.activity.expand(v, 0.0);
        }
        s
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn with_proof_sink(mut self, sink: Box<dyn ProofSink>) -> Self {
        self.proof_sink = Some(sink);
        self
    }

    pub fn set_polarity_hint(&mut self, v: Var, prefer_positive: bool) {
        self.trail
            .assignment_mut()
            .set_polarity(v, if prefer_positive { 1 } else { -1 });
    }

    pub(crate) fn trail_assignment(&self) -> &Assignment {
        self.trail.assignment()
    }

    /// Adds a clause. Empty clauses mark the formula permanently unsatisfiable;
    /// unit clauses are enqueued directly and never enter the watch index;
    /// everything else goes through `ClauseDb` and registers two initial
    /// watches.
    pub fn add_clause(&mut self, lits: Vec<Lit>) {
        if let Some(sink) = &mut self.proof_sink {
            sink.add_clause(&lits);
        }
        if !self.ok {
            return;
        }
        match lits.len() {
            0 => self.ok = false,
            1 => {
                if !self.trail.enqueue(lits[0], Reason::Axiom) {
                    self.ok = false;
                }
            }
            _ => {
                let idx = self.clause_db.insert(lits);
                let cls = self.clause_db.get(idx);
                self.watches[cls.lits[0]].push(crate::sat::watch::Watch { clause: idx, slot: 0 });
                self.watches[cls.lits[1]].push(crate::sat::watch::Watch { clause: idx, slot: 1 });
            }
        }
    }

    /// Rebuilds the watch index from scratch. Only needed if clauses were
    /// inserted by some route other than `add_clause` (kept for parity with
    /// `watch::build_watch_lists`, used directly by tests).
    #[cfg(test)]
    pub(crate) fn rebuild_watches(&mut self) {
        for lists in self.watches.iter_mut() {
            lists.clear();
        }
        build_watch_lists(&self.clause_db, &mut self.watches);
    }

    fn bump_activity(&mut self, conflict: ClauseIdx) {
        let lits = self.clause_db.get(conflict).lits.clone();
        for l in lits {
            self.activity[l.var()] += self.var_inc;
        }
        self.var_inc /= self.params.var_decay;
        if self.var_inc > 1e30 {
            for v in 1..=self.activity.len() as u32 {
                self.activity[Var::new(v)] *= 1e-30;
            }
            self.var_inc *= 1e-30;
        }
    }

    /// Highest-activity unassigned variable, ties broken by lowest index.
    fn pick_branch_var(&self) -> Var {
        let mut best: Option<Var> = None;
        for v in self.trail_assignment().unassigned_vars() {
            best = Some(match best {
                None => v,
                Some(b) if self.activity[v] > self.activity[b] => v,
                Some(b) if self.activity[v] == self.activity[b] && v.index() < b.index() => v,
                Some(b) => b,
            });
        }
        best.expect("pick_branch_var called with no unassigned variables")
    }

    /// The flat CDCL-lite main loop: propagate to quiescence, on conflict
    /// flip the current decision once, and if that also conflicts, report
    /// UNSAT unconditionally. This solver never backtracks past the decision
    /// it just flipped. This is a known, preserved incompleteness, not a bug.
    #[instrument(skip(self))]
    pub fn solve(&mut self) -> SolveResult {
        if !self.ok {
            return SolveResult::Unsat;
        }
        loop {
            match self.propagate() {
                PropagateResult::Conflict(cls) => {
                    trace!(clause = cls.0, "conflict");
                    self.bump_activity(cls);
                    match self.decisions.pop() {
                        None => return SolveResult::Unsat,
                        Some(frame) if frame.flipped => {
                            self.trail.pop_to(frame.trail_pos);
                            debug!("second failure after flip, reporting unsat");
                            return SolveResult::Unsat;
                        }
                        Some(frame) => {
                            self.trail.pop_to(frame.trail_pos);
                            self.propagated = frame.trail_pos;
                            let flipped = -frame.lit;
                            self.trail.enqueue(flipped, Reason::Decision);
                            self.decisions.push(DecisionFrame {
                                trail_pos: frame.trail_pos,
                                lit: flipped,
                                flipped: true,
                            });
                        }
                    }
                }
                PropagateResult::Done => {
                    if self.trail_assignment().all_assigned() {
                        debug_assert!(self.all_stored_clauses_satisfied(), "reported sat with an unsatisfied clause");
                        return SolveResult::Sat;
                    }
                    let var = self.pick_branch_var();
                    let hint = self.trail_assignment().polarity(var);
                    let lit = if hint >= 0 {
                        Lit::from(var)
                    } else {
                        -Lit::from(var)
                    };
                    self.decisions.push(DecisionFrame {
                        trail_pos: self.trail.len(),
                        lit,
                        flipped: false,
                    });
                    self.trail.enqueue(lit, Reason::Decision);
                }
            }
        }
    }

    /// Debug-only sanity check: every stored clause (size >= 2; units and the
    /// empty clause never reach `clause_db`) is actually satisfied.
    fn all_stored_clauses_satisfied(&self) -> bool {
        use crate::sat::vector::{classify_clause, ClauseStatus};
        self.clause_db
            .iter()
            .all(|c| classify_clause(&c.lits, self.trail_assignment()).contains(ClauseStatus::TRUE))
    }

    /// Extracts the current (complete) assignment as a `Model`. Only
    /// meaningful right after `solve()` returns `SolveResult::Sat`.
    pub fn model(&self) -> Model {
        let mut m = VarVec::new();
        for (v, &val) in self.trail_assignment().values_iter() {
            m.expand(v, 0);
            m[v] = val;
        }
        Model(m)
    }

    /// Complete, recursive DPLL alternative to `solve()`: propagate, pick,
    /// try both branches with checkpoint/restore on failure. Unlike `solve`,
    /// this mode backtracks arbitrarily far and is therefore complete. Kept
    /// alongside the primary loop for testing and as a reference
    /// implementation of the "obvious" complete search.
    pub fn solve_dpll(&mut self) -> SolveResult {
        if !self.ok {
            return SolveResult::Unsat;
        }
        self.dpll_step()
    }

    fn dpll_step(&mut self) -> SolveResult {
        match self.propagate() {
            PropagateResult::Conflict(_) => SolveResult::Unsat,
            PropagateResult::Done => {
                if self.trail_assignment().all_assigned() {
                    return SolveResult::Sat;
                }
                let var = self.pick_branch_var();
                let checkpoint = self.trail.len();
                let propagated_checkpoint = self.propagated;
                for &try_lit in &[Lit::from(var), -Lit::from(var)] {
                    self.trail.enqueue(try_lit, Reason::Decision);
                    if self.dpll_step() == SolveResult::Sat {
                        return SolveResult::Sat;
                    }
                    self.trail.pop_to(checkpoint);
                    self.propagated = propagated_checkpoint;
                }
                SolveResult::Unsat
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver_with(clauses: &[&[i32]], n_vars: u32) -> Solver {
        let mut s = Solver::new(n_vars);
        for c in clauses {
            s.add_clause(c.iter().map(|&l| Lit::new(l)).collect());
        }
        s
    }

    #[test]
    fn unit_propagation_chain_is_sat() {
        let mut s = solver_with(&[&[1], &[-1, 2], &[-2, 3]], 3);
        assert_eq!(s.solve(), SolveResult::Sat);
        let m = s.model();
        assert!(m.value(Var::new(1)));
        assert!(m.value(Var::new(2)));
        assert!(m.value(Var::new(3)));
    }

    #[test]
    fn empty_clause_is_unsat() {
        let mut s = solver_with(&[&[]], 1);
        assert_eq!(s.solve(), SolveResult::Unsat);
    }

    #[test]
    fn conflicting_units_are_unsat() {
        let mut s = solver_with(&[&[1], &[-1]], 1);
        assert_eq!(s.solve(), SolveResult::Unsat);
    }

    #[test]
    fn three_var_2sat_is_sat_via_dpll() {
        let mut s = solver_with(&[&[1, 2], &[-1, 3], &[-2, -3]], 3);
        assert_eq!(s.solve_dpll(), SolveResult::Sat);
    }
}
