//! Stack growth guard for deep recursion.
//!
//! Display-name formatting and type desugaring walk the type pool
//! recursively. Pathological declaration tables (a pointer to a pointer to
//! ... thousands of levels, or long alias chains) would otherwise overflow
//! the native stack, so those walks wrap each level in
//! [`ensure_sufficient_stack`].
//!
//! On native targets this grows the stack with `stacker`; on `wasm32` it is
//! a plain call.

/// Grow when less than this much stack is left (128 KiB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (1 MiB).
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// wasm32 manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
