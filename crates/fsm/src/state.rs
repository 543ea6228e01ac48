//! The callable seam shared by states and tasks.
//!
//! A *state* is one phase of application logic; it decides what runs next
//! by arming a transition on its machine. A *task* is a one-shot deferred
//! callable that drains ahead of state dispatch. Both are stored and
//! invoked through the same [`Callable`] type, so anything that can be a
//! state can be a task and vice versa.

use crate::sync::Arc;

/// No-argument callable reference used for both states and tasks.
///
/// Cheap to clone, so the executor can take a copy out of its lock before
/// invoking it. Callables usually capture an `Arc` of their machine to arm
/// transitions or post tasks; plain `fn` items work too (see
/// [`callable`]).
pub type Callable = Arc<dyn Fn() + Send + Sync>;

/// Wraps a closure or `fn` item into a [`Callable`].
pub fn callable<F>(f: F) -> Callable
where
    F: Fn() + Send + Sync + 'static,
{
    Arc::new(f)
}
