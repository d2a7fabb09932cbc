use core::cell::RefCell;

use critical_section::Mutex;

use crate::{Full, RingBuffer};


/// A [`RingBuffer`] that can be shared between execution contexts, e.g. an interrupt handler that
/// pushes received bytes and a main loop that pops them.
///
/// Every operation, pushing as well as popping, runs inside a critical section, so neither
/// writers nor a writer and a reader can interleave.
///
/// ```
/// use ring_queue::SharedRingBuffer;
///
/// static RX_QUEUE: SharedRingBuffer<u8, 64> = SharedRingBuffer::new();
///
/// // in the receive interrupt
/// RX_QUEUE.push(b'A');
///
/// // in the main loop
/// while let Some(b) = RX_QUEUE.pop() {
///     assert_eq!(b, b'A');
/// }
/// ```
pub struct SharedRingBuffer<T, const SIZE: usize> {
    inner: Mutex<RefCell<RingBuffer<T, SIZE>>>,
}
impl<T, const SIZE: usize> SharedRingBuffer<T, SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(RingBuffer::new())),
        }
    }

    /// Runs `f` on the underlying buffer within a single critical section.
    ///
    /// Useful to make several operations atomic as a whole. Calling back into the same
    /// `SharedRingBuffer` from within `f` panics.
    pub fn with<R, F: FnOnce(&mut RingBuffer<T, SIZE>) -> R>(&self, f: F) -> R {
        critical_section::with(|cs| {
            let mut buffer = self.inner.borrow_ref_mut(cs);
            f(&mut buffer)
        })
    }

    pub fn push(&self, value: T) -> bool {
        self.with(|buffer| buffer.push(value))
    }

    pub fn try_push(&self, value: T) -> Result<(), Full<T>> {
        self.with(|buffer| buffer.try_push(value))
    }

    pub fn pop(&self) -> Option<T> {
        self.with(|buffer| buffer.pop())
    }

    pub fn available(&self) -> usize {
        self.with(|buffer| buffer.available())
    }

    pub fn is_empty(&self) -> bool {
        self.with(|buffer| buffer.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.with(|buffer| buffer.is_full())
    }

    pub const fn capacity(&self) -> usize {
        SIZE
    }

    pub fn clear(&self) {
        self.with(|buffer| buffer.clear())
    }

    /// Returns a copy of the oldest value without removing it.
    pub fn peek_cloned(&self) -> Option<T>
        where T: Clone
    {
        self.with(|buffer| buffer.peek().cloned())
    }
}
impl<T, const SIZE: usize> Default for SharedRingBuffer<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
