use crate::sat::var::Lit;

/// A clause: an ordered sequence of literals plus two watch-slot indices and
/// an activity score. Invariants enforced by construction: `0 <= w0, w1 <
/// lits.len()`; if `lits.len() >= 2` then `w0 != w1`; unit clauses are never
/// stored here (they bypass the watch index entirely) so every stored clause
/// has at least two literals.
#[derive(Debug, Clone)]
pub(crate) struct Clause {
    pub lits: Vec<Lit>,
    pub w0: u16,
    pub w1: u16,
    pub activity: f32,
}

impl Clause {
    pub fn new(lits: Vec<Lit>) -> Self {
        debug_assert!(lits.len() >= 2, "unit/empty clauses bypass ClauseDb");
        Clause {
            lits,
            w0: 0,
            w1: 1,
            activity: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    /// The literal currently sitting in watch slot `slot` (0 or 1).
    pub fn watched(&self, slot: u8) -> Lit {
        self.lits[if slot == 0 { self.w0 } else { self.w1 } as usize]
    }

    /// Rewrites watch slot `slot` to point at clause position `pos`.
    pub fn set_watch(&mut self, slot: u8, pos: u16) {
        if slot == 0 {
            self.w0 = pos;
        } else {
            self.w1 = pos;
        }
    }
}

/// The clause index for a `Formula`/`ClauseDb`: a stable position in an
/// append-only collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClauseIdx(pub(crate) u32);

/// Ordered collection of clauses addressed by stable index. Only clauses of
/// size >= 2 live here; unit clauses are enqueued directly at load time and
/// the empty clause is rejected before reaching this structure at all.
#[derive(Debug, Clone, Default)]
pub(crate) struct ClauseDb {
    clauses: Vec<Clause>,
}

impl ClauseDb {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert(&mut self, lits: Vec<Lit>) -> ClauseIdx {
        let idx = ClauseIdx(self.clauses.len() as u32);
        self.clauses.push(Clause::new(lits));
        idx
    }

    pub fn get(&self, idx: ClauseIdx) -> &Clause {
        &self.clauses[idx.0 as usize]
    }

    pub fn get_mut(&mut self, idx: ClauseIdx) -> &mut Clause {
        &mut self.clauses[idx.0 as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }
}
