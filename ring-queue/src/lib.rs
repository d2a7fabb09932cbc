//! Fixed-capacity FIFO ring buffers without dynamic allocation.
//!
//! [`RingBuffer`] is the plain buffer, owned and mutated through `&mut self`. With the `guard`
//! feature (on by default), [`SharedRingBuffer`] wraps one in a critical section so that it can sit
//! in a `static` and be fed from an interrupt handler while the main loop drains it.
#![cfg_attr(not(test), no_std)]


mod ring_buffer;
#[cfg(feature = "guard")]
mod shared;


use core::fmt;

pub use crate::ring_buffer::RingBuffer;
#[cfg(feature = "guard")]
pub use crate::shared::SharedRingBuffer;


/// A push was rejected because the buffer was full. Holds the value that did not fit.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Full<T>(pub T);
impl<T> Full<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}
impl<T> fmt::Debug for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the payload might be large (or not Debug at all); keep it out of the message
        f.debug_struct("Full").finish_non_exhaustive()
    }
}
impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ring buffer is full")
    }
}
impl<T> core::error::Error for Full<T> {
}
