//! Fixed-capacity FIFO ring for deferred tasks.
//!
//! No allocation, all operations O(1) and all-or-nothing. A rejected
//! `push` hands the value back so the caller can retry, drop it, or treat
//! the rejection as backpressure.

/// Bounded FIFO ring buffer.
///
/// `head` is the next slot to pop, `tail` the next slot to push, both
/// advancing modulo `N`; `len` is the number of queued items and
/// `(tail - head) mod N == len` holds throughout. `N == 0` is a valid
/// degenerate queue: every `push` is rejected and every `pop` is `None`
/// (the length guards run before any index arithmetic).
pub struct TaskQueue<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
    tail: usize,
    len: usize,
}

impl<T, const N: usize> TaskQueue<T, N> {
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Appends `value`, or returns it back untouched if the ring is full.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.len == N {
            return Err(value);
        }
        self.slots[self.tail] = Some(value);
        self.tail = (self.tail + 1) % N;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest item.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % N;
        self.len -= 1;
        value
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}

impl<T, const N: usize> Default for TaskQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
