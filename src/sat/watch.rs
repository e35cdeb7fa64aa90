use crate::sat::clause::{ClauseDb, ClauseIdx};
use crate::sat::data::LitVec;
use crate::sat::var::Lit;

/// One entry of a per-literal watch list: which clause, and which of its two
/// watch slots (0 = `w0`, 1 = `w1`) this entry was registered for.
///
/// This pairing is never deleted or migrated to a different literal's list
/// once registered; only `Clause::w0`/`w1` are
/// rewritten as propagation proceeds, so an entry's `slot` stays valid
/// forever but the literal it currently refers to (`clause.watched(slot)`)
/// can drift away from the literal whose list holds it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Watch {
    pub clause: ClauseIdx,
    pub slot: u8,
}

pub(crate) type WatchLists = LitVec<Vec<Watch>>;

/// Builds the initial watch index: every clause with >= 2 literals registers
/// `(c, 0)` under `lits[0]` and `(c, 1)` under `lits[1]`.
pub(crate) fn build_watch_lists(clauses: &ClauseDb, watches: &mut WatchLists) {
    for i in 0..clauses.len() {
        let idx = ClauseIdx(i as u32);
        let cls = clauses.get(idx);
        watches[cls.lits[0]].push(Watch { clause: idx, slot: 0 });
        watches[cls.lits[1]].push(Watch { clause: idx, slot: 1 });
    }
}
