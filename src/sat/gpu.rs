use crate::sat::clause::ClauseDb;
use crate::sat::var::Lit;

/// Opaque accelerator context. Never populated with a real device handle;
/// this exists only so callers have something to hold between `gpu_init`
/// and `gpu_release`.
pub(crate) struct GpuContext(());

/// Allocates an accelerator context. Always succeeds.
pub(crate) fn gpu_init() -> GpuContext {
    GpuContext(())
}

/// Releases an accelerator context. No-op.
pub(crate) fn gpu_release(_ctx: GpuContext) {}

/// Evaluates a batch of candidate branch literals against `formula` under
/// `assignment` on the accelerator. Not implemented: returns without writing
/// anything. Kept for API-compatibility with hosts that probe for a
/// parallel branch-evaluation hook before falling back to sequential search.
pub(crate) fn parallel_branch_eval(
    _ctx: &GpuContext,
    _formula: &ClauseDb,
    _assignment_snapshot: &[i8],
    _branch_lits: &[Lit],
) {
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_then_release_is_a_no_op() {
        let ctx = gpu_init();
        gpu_release(ctx);
    }

    #[test]
    fn parallel_branch_eval_accepts_an_empty_batch() {
        let ctx = gpu_init();
        let db = ClauseDb::new();
        parallel_branch_eval(&ctx, &db, &[], &[]);
        gpu_release(ctx);
    }
}
