//! # fsm
//!
//! A cooperative state machine executor for bare polling loops. Each state
//! is a no-argument callable; the host calls [`Fsm::poll`] repeatedly and
//! forever, and every poll performs at most one unit of work: one deferred
//! task (drained FIFO, ahead of everything else) or one state dispatch,
//! gated by a non-blocking millisecond delay. Nothing blocks, nothing
//! allocates once the machine is running, and "waiting" is just a stream of
//! idle polls sharing the loop with whatever else the host does.
//!
//! ## Module Overview
//! - [`sched`] – The [`Fsm`] executor: init, poll, timed transitions,
//!   deferred task posting.
//! - [`queue`] – Fixed-capacity FIFO ring backing the task queue.
//! - [`state`] – The shared [`Callable`] type for states and tasks.
//! - [`time`]  – The monotonic millisecond [`TickSource`] seam and the
//!   clocks that implement it.
//! - [`sync`]  – `std`/`no_std` locking shim.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use fsm::{callable, Fsm, ManualClock, Step};
//!
//! let clock = Arc::new(ManualClock::new());
//! let machine = Arc::new(Fsm::<8>::new(clock.clone()));
//!
//! machine.init(callable(|| ()));
//! assert_eq!(machine.poll(), Step::State);      // ready, runs immediately
//!
//! machine.transition(callable(|| ()), 100);
//! assert_eq!(machine.poll(), Step::Idle);       // 100 ms not elapsed yet
//! clock.advance(100);
//! assert_eq!(machine.poll(), Step::State);
//! ```
//!
//! States typically capture an `Arc` of their own machine and call
//! [`Fsm::transition`] from inside; see the `blinky` example for the
//! static-machine pattern with plain `fn` states.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod queue;
pub mod sched;
pub mod state;
pub mod sync;
pub mod time;

pub use queue::TaskQueue;
pub use sched::{Fsm, FsmError, Step, DEFAULT_TASK_CAPACITY};
pub use state::{callable, Callable};
#[cfg(feature = "std")]
pub use time::SystemClock;
pub use time::{ClockRef, ManualClock, Tick, TickSource};

#[cfg(test)]
mod tests;
