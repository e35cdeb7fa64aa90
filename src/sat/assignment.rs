use crate::sat::data::VarVec;
use crate::sat::var::{Lit, Var};

/// Per-variable ternary truth value plus a preferred-polarity hint. `values`
/// holds `-1` (false), `0` (unassigned) or `+1` (true); `polarity` holds the
/// same encoding but is never written by the core itself once initialized,
/// it is a caller-settable hint only.
#[derive(Debug, Clone, Default)]
pub(crate) struct Assignment {
    values: VarVec<i8>,
    polarity: VarVec<i8>,
}

impl Assignment {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn expand(&mut self, v: Var) {
        // Default polarity hint: prefer positive for every variable.
        self.values.expand(v, 0);
        self.polarity.expand(v, 1);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn value(&self, v: Var) -> i8 {
        self.values[v]
    }

    pub fn polarity(&self, v: Var) -> i8 {
        self.polarity[v]
    }

    pub fn set_polarity(&mut self, v: Var, hint: i8) {
        self.polarity[v] = if hint >= 0 { 1 } else { -1 };
    }

    /// Value of a literal under the current assignment: `1` true, `-1`
    /// false, `0` unassigned.
    pub fn lit_value(&self, l: Lit) -> i8 {
        let v = self.values[l.var()];
        if l.is_pos() {
            v
        } else {
            -v
        }
    }

    pub fn is_true(&self, l: Lit) -> bool {
        self.lit_value(l) == 1
    }

    pub fn is_false(&self, l: Lit) -> bool {
        self.lit_value(l) == -1
    }

    pub fn is_unassigned(&self, l: Lit) -> bool {
        self.lit_value(l) == 0
    }

    pub fn set(&mut self, l: Lit) {
        self.values[l.var()] = l.sign();
    }

    pub fn unset(&mut self, v: Var) {
        self.values[v] = 0;
    }

    pub fn all_assigned(&self) -> bool {
        self.values
            .iter_with_var()
            .all(|(_, &val)| val != 0)
    }

    pub fn unassigned_vars(&self) -> impl Iterator<Item = Var> + '_ {
        self.values
            .iter_with_var()
            .filter(|&(_, &val)| val == 0)
            .map(|(v, _)| v)
    }

    pub fn values_iter(&self) -> impl Iterator<Item = (Var, &i8)> {
        self.values.iter_with_var()
    }
}
