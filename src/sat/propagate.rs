/// Two-watched-literal unit propagation.
use tracing::trace;

use crate::sat::clause::ClauseIdx;
use crate::sat::solver::Solver;
use crate::sat::trail::Reason;
use crate::sat::var::Lit;
use crate::sat::watch::Watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropagateResult {
    Conflict(ClauseIdx),
    Done,
}

impl Solver {
    /// Drains the trail from the last-processed position, visiting the
    /// opposite-polarity watch list of every newly-enqueued literal, FIFO by
    /// trail order.
    pub(crate) fn propagate(&mut self) -> PropagateResult {
        while self.propagated < self.trail.len() {
            let lit = self.trail.get(self.propagated).unwrap();
            self.propagated += 1;

            if let Some(conflict) = self.propagate_one(lit) {
                return PropagateResult::Conflict(conflict);
            }
        }
        PropagateResult::Done
    }

    /// Visits `watches[-lit]`, since `lit` just became true and every clause
    /// watching its negation may now need a new watch or a forced literal.
    fn propagate_one(&mut self, lit: Lit) -> Option<ClauseIdx> {
        let neg_lit = -lit;
        let mut i = 0;
        while i < self.watches[neg_lit].len() {
            let Watch { clause: cls_idx, slot } = self.watches[neg_lit][i];
            i += 1;

            let cls = self.clause_db.get(cls_idx);
            let this_pos = if slot == 0 { cls.w0 } else { cls.w1 };
            let other_pos = if slot == 0 { cls.w1 } else { cls.w0 };
            let this_lit = cls.lits[this_pos as usize];

            // Step 1: already satisfied by this watch (possibly a stale
            // entry pointing at an unrelated, now-true literal).
            if self.trail_assignment().is_true(this_lit) {
                continue;
            }

            // Step 2: look for a new literal to watch.
            let mut migrated = None;
            for (j, &cand) in cls.lits.iter().enumerate() {
                if j as u16 == cls.w0 || j as u16 == cls.w1 {
                    continue;
                }
                if !self.trail_assignment().is_false(cand) {
                    migrated = Some((j as u16, cand));
                    break;
                }
            }

            if let Some((j, new_lit)) = migrated {
                let cls = self.clause_db.get_mut(cls_idx);
                cls.set_watch(slot, j);
                trace!(clause = cls_idx.0, slot, to = j, "watch migrated");
                self.watches[new_lit].push(Watch { clause: cls_idx, slot });
                continue;
            }

            // Step 3: no migration candidate, examine the other watch.
            let other_lit = self.clause_db.get(cls_idx).lits[other_pos as usize];
            if self.trail_assignment().is_false(other_lit) {
                return Some(cls_idx);
            }
            if self.trail_assignment().is_unassigned(other_lit) {
                self.trail
                    .enqueue(other_lit, Reason::Propagated { clause: cls_idx });
            }
        }
        None
    }
}
