use bitflags::bitflags;

use crate::sat::assignment::Assignment;
use crate::sat::var::Lit;

bitflags! {
    /// Classification of a clause under the current assignment, gathered in
    /// a single pass over its literals: a scalar fold that must agree
    /// bit-for-bit with a lane-wise `any_true`/`any_unk` reduction over the
    /// same literals taken in any order.
    pub struct ClauseStatus: u8 {
        const TRUE    = 0b01;
        const UNKNOWN = 0b10;
    }
}

/// Classifies a clause as satisfied (`TRUE` set), falsified (neither bit
/// set), or undetermined (`UNKNOWN` set, `TRUE` unset).
pub(crate) fn classify_clause(lits: &[Lit], assignment: &Assignment) -> ClauseStatus {
    let mut status = ClauseStatus::empty();
    for &l in lits {
        if assignment.is_true(l) {
            status |= ClauseStatus::TRUE;
        } else if assignment.is_unassigned(l) {
            status |= ClauseStatus::UNKNOWN;
        }
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::var::Var;

    fn assignment_with(vals: &[(i32, bool)], n: u32) -> Assignment {
        let mut a = Assignment::new();
        for i in 1..=n {
            a.expand(Var::new(i));
        }
        for &(v, truth) in vals {
            a.set(Lit::new(if truth { v } else { -v }));
        }
        a
    }

    #[test]
    fn satisfied_clause_reports_true() {
        let a = assignment_with(&[(1, true)], 2);
        let status = classify_clause(&[Lit::new(1), Lit::new(2)], &a);
        assert!(status.contains(ClauseStatus::TRUE));
    }

    #[test]
    fn falsified_clause_reports_neither_bit() {
        let a = assignment_with(&[(1, false), (2, false)], 2);
        let status = classify_clause(&[Lit::new(1), Lit::new(2)], &a);
        assert!(status.is_empty());
    }

    #[test]
    fn undetermined_clause_reports_unknown_only() {
        let a = assignment_with(&[(1, false)], 2);
        let status = classify_clause(&[Lit::new(1), Lit::new(2)], &a);
        assert_eq!(status, ClauseStatus::UNKNOWN);
    }
}
