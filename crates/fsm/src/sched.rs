//! The cooperative executor core.
//!
//! One [`Fsm`] value per independent state machine; the host polls it
//! forever. Every poll performs at most one unit of work, in strict
//! priority order: one queued task, else one state dispatch if the armed
//! delay has elapsed, else nothing.

use core::fmt;

use crate::queue::TaskQueue;
use crate::state::Callable;
use crate::sync::Mutex;
use crate::time::{ClockRef, Tick};

/// Reference capacity of the deferred task queue.
pub const DEFAULT_TASK_CAPACITY: usize = 16;

/// What a single [`Fsm::poll`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One deferred task ran.
    Task,
    /// The current state ran.
    State,
    /// Nothing was ready this cycle.
    Idle,
}

/// Recoverable conditions reported by the executor.
///
/// Everything else that can go wrong (operating on an uninitialized
/// machine) is a programming error and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmError {
    /// The task queue is at capacity; the task was not enqueued and the
    /// queue is unchanged. The caller decides: drop, retry later, or
    /// treat as backpressure.
    QueueFull,
}

impl fmt::Display for FsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueueFull => write!(f, "task queue full"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FsmError {}

struct Inner<const N: usize> {
    /// Current state; `None` only before `init`.
    state: Option<Callable>,
    /// Tick recorded when a transition was armed or the state last ran.
    armed_at: Tick,
    /// Pending delay; `0` means ready to run on the next poll.
    delay_ms: Tick,
    tasks: TaskQueue<Callable, N>,
}

/// A single cooperative state machine.
///
/// `N` is the task queue capacity, fixed at compile time (default
/// [`DEFAULT_TASK_CAPACITY`]; `0` disables deferred tasks entirely). The
/// machine is an explicit value, not a singleton: construct as many
/// independent instances as the application has state machines, and share
/// each behind an `Arc` so its own states can call back into it.
///
/// All methods take `&self`; the internal mutex makes the handle
/// `Send + Sync`. The scheduling contract — one unit of work per poll,
/// FIFO tasks, a state never running concurrently with itself — is
/// defined for a single polling context; hosts that arm or post from an
/// interrupt-like context get field atomicity from the lock but keep the
/// single-poller discipline themselves.
///
/// The idiomatic transition pattern is a state arming its successor:
///
/// ```
/// use std::sync::Arc;
/// use fsm::{callable, Fsm, ManualClock, Step};
///
/// let clock = Arc::new(ManualClock::new());
/// let machine = Arc::new(Fsm::<4>::new(clock.clone()));
///
/// let done = callable(|| ());
/// let next = done.clone();
/// let warming = {
///     let machine = Arc::clone(&machine);
///     callable(move || machine.transition(next.clone(), 250))
/// };
///
/// machine.init(warming);
/// assert_eq!(machine.poll(), Step::State); // runs `warming`, arms `done`
/// assert_eq!(machine.poll(), Step::Idle);  // 250 ms not elapsed
/// clock.advance(250);
/// assert_eq!(machine.poll(), Step::State); // runs `done`
/// ```
pub struct Fsm<const N: usize = DEFAULT_TASK_CAPACITY> {
    name: &'static str,
    clock: ClockRef,
    inner: Mutex<Inner<N>>,
}

impl<const N: usize> Fsm<N> {
    pub fn new(clock: ClockRef) -> Self {
        Self::with_name("fsm", clock)
    }

    /// Like [`Fsm::new`], with an instance name used in log lines and
    /// panic messages. Useful when several machines share one loop.
    pub fn with_name(name: &'static str, clock: ClockRef) -> Self {
        Self {
            name,
            clock,
            inner: Mutex::new(Inner {
                state: None,
                armed_at: 0,
                delay_ms: 0,
                tasks: TaskQueue::new(),
            }),
        }
    }

    /// Registers the first state and makes the machine ready to poll:
    /// the task queue is emptied and the pending delay cleared.
    ///
    /// Must run before any other operation. Calling it again is the
    /// explicit reset path: the machine restarts from `first` as if
    /// freshly initialized.
    pub fn init(&self, first: Callable) {
        let mut inner = self.inner.lock();
        inner.state = Some(first);
        inner.armed_at = self.clock.now();
        inner.delay_ms = 0;
        inner.tasks.clear();
        log::debug!("{}: initialized", self.name);
    }

    /// Executes at most one unit of work and returns what it was.
    ///
    /// Priority order, checked once per call:
    /// 1. a queued task, FIFO — state dispatch is not considered this
    ///    cycle even if the delay has elapsed;
    /// 2. the current state, immediately, if no delay is pending;
    /// 3. the current state, if the armed delay has elapsed (wraparound
    ///    safe), clearing the delay;
    /// 4. otherwise nothing — an idle, non-blocking cycle.
    ///
    /// The callable runs after the internal lock is released, so it may
    /// freely call [`Fsm::transition`] or [`Fsm::post`]; those effects
    /// are observed on the next poll, never re-entrantly.
    ///
    /// # Panics
    ///
    /// If called before [`Fsm::init`].
    pub fn poll(&self) -> Step {
        let (step, work) = {
            let mut inner = self.inner.lock();
            let state = match &inner.state {
                Some(state) => state.clone(),
                None => panic!("{}: poll before init", self.name),
            };
            if let Some(task) = inner.tasks.pop() {
                (Step::Task, Some(task))
            } else if inner.delay_ms == 0 {
                inner.armed_at = self.clock.now();
                (Step::State, Some(state))
            } else {
                let now = self.clock.now();
                if now.wrapping_sub(inner.armed_at) >= inner.delay_ms {
                    inner.delay_ms = 0;
                    inner.armed_at = now;
                    (Step::State, Some(state))
                } else {
                    (Step::Idle, None)
                }
            }
        };

        if let Some(run) = work {
            log::trace!("{}: dispatch {:?}", self.name, step);
            run();
        }
        step
    }

    /// Arms the next transition: `next` becomes the current state and
    /// runs once `delay_ms` has elapsed (`0` means on the very next
    /// poll). Re-arming before the delay fires simply overwrites the
    /// pending state and delay; that is the only cancellation mechanism.
    ///
    /// Usually called by the currently executing state, but equally valid
    /// from outside the polling loop.
    ///
    /// # Panics
    ///
    /// If called before [`Fsm::init`].
    pub fn transition(&self, next: Callable, delay_ms: Tick) {
        let mut inner = self.inner.lock();
        assert!(
            inner.state.is_some(),
            "{}: transition before init",
            self.name
        );
        inner.state = Some(next);
        inner.delay_ms = delay_ms;
        inner.armed_at = self.clock.now();
        log::trace!("{}: transition armed, delay_ms={}", self.name, delay_ms);
    }

    /// Milliseconds since the current state last ran or was armed.
    ///
    /// Pure read; lets a state implement its own timeout logic
    /// independent of the delay gate.
    ///
    /// # Panics
    ///
    /// If called before [`Fsm::init`].
    pub fn elapsed(&self) -> Tick {
        let inner = self.inner.lock();
        assert!(inner.state.is_some(), "{}: elapsed before init", self.name);
        self.clock.now().wrapping_sub(inner.armed_at)
    }

    /// Defers `task` to run ahead of state dispatch, FIFO with anything
    /// already queued. On a full queue nothing is mutated and
    /// [`FsmError::QueueFull`] is returned.
    ///
    /// # Panics
    ///
    /// If called before [`Fsm::init`].
    pub fn post(&self, task: Callable) -> Result<(), FsmError> {
        let mut inner = self.inner.lock();
        assert!(inner.state.is_some(), "{}: post before init", self.name);
        match inner.tasks.push(task) {
            Ok(()) => {
                log::trace!("{}: task queued, pending={}", self.name, inner.tasks.len());
                Ok(())
            }
            Err(_) => Err(FsmError::QueueFull),
        }
    }

    /// Number of tasks currently queued.
    pub fn pending(&self) -> usize {
        self.inner.lock().tasks.len()
    }

    /// Task queue capacity (`N`).
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Whether an armed delay has not yet elapsed into a dispatch.
    pub fn is_armed(&self) -> bool {
        self.inner.lock().delay_ms != 0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
