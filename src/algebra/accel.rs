/// Process-wide accelerator hooks. A host may register a bulk vector
/// add/multiply implementation (e.g. backed by a GPU or a wider SIMD kernel
/// than the scalar fallback); `simplify` calls through these when folding
/// wide constant runs, but never requires them, since an unregistered or
/// failing hook silently falls back to the scalar pairwise path.
use std::sync::{Mutex, OnceLock};

/// A registered bulk kernel. Returns `true` to signal failure (the caller
/// falls back to the scalar loop); `false` means `out` was filled and the
/// result should be used as-is.
type VecOp = fn(&[f64], &[f64], &mut [f64]) -> bool;

#[derive(Default)]
struct Registry {
    add: Option<VecOp>,
    mul: Option<VecOp>,
}

fn registry() -> &'static Mutex<Registry> {
    static REGISTRY: OnceLock<Mutex<Registry>> = OnceLock::new();
    REGISTRY.get_or_init(|| Mutex::new(Registry::default()))
}

/// Registers a bulk elementwise-add kernel. Returns the previously
/// registered hook, if any.
pub fn register_add_vec(f: VecOp) -> Option<VecOp> {
    registry().lock().unwrap().add.replace(f)
}

/// Registers a bulk elementwise-multiply kernel.
pub fn register_mul_vec(f: VecOp) -> Option<VecOp> {
    registry().lock().unwrap().mul.replace(f)
}

#[cfg(test)]
pub(crate) fn clear() {
    let mut r = registry().lock().unwrap();
    r.add = None;
    r.mul = None;
}

/// Computes `out[i] = a[i] + b[i]`, preferring a registered accelerator and
/// falling back to the scalar loop if none is registered or it reports
/// failure (a non-zero/`true` return).
pub(crate) fn add_vec(a: &[f64], b: &[f64], out: &mut [f64]) {
    let hook = registry().lock().unwrap().add;
    if let Some(f) = hook {
        if !f(a, b, out) {
            return;
        }
        tracing::debug!("accelerator add_vec failed, falling back to scalar");
    }
    for i in 0..out.len() {
        out[i] = a[i] + b[i];
    }
}

pub(crate) fn mul_vec(a: &[f64], b: &[f64], out: &mut [f64]) {
    let hook = registry().lock().unwrap().mul;
    if let Some(f) = hook {
        if !f(a, b, out) {
            return;
        }
        tracing::debug!("accelerator mul_vec failed, falling back to scalar");
    }
    for i in 0..out.len() {
        out[i] = a[i] * b[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn scalar_fallback_with_no_hook() {
        clear();
        let mut out = [0.0; 3];
        add_vec(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &mut out);
        assert_eq!(out, [5.0, 7.0, 9.0]);
    }

    #[test]
    #[serial]
    fn registered_hook_is_used() {
        clear();
        register_add_vec(|a, b, out| {
            for i in 0..out.len() {
                out[i] = a[i] + b[i] + 100.0;
            }
            false
        });
        let mut out = [0.0; 2];
        add_vec(&[1.0, 1.0], &[1.0, 1.0], &mut out);
        assert_eq!(out, [102.0, 102.0]);
        clear();
    }

    #[test]
    #[serial]
    fn failing_hook_falls_back_to_scalar() {
        clear();
        register_mul_vec(|_, _, _| true);
        let mut out = [0.0; 2];
        mul_vec(&[2.0, 3.0], &[4.0, 5.0], &mut out);
        assert_eq!(out, [8.0, 15.0]);
        clear();
    }
}
