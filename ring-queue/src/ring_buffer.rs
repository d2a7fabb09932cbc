use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem::MaybeUninit;

use crate::Full;


/// A fixed-capacity FIFO queue storing up to `SIZE` elements inline.
///
/// All `SIZE` slots are usable; the number of stored elements is tracked separately from the two
/// cursors, so a full buffer and an empty buffer never look alike.
///
/// ```
/// use ring_queue::RingBuffer;
///
/// let mut queue: RingBuffer<u8, 3> = RingBuffer::new();
/// assert!(queue.push(1));
/// assert!(queue.push(2));
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.available(), 1);
/// ```
pub struct RingBuffer<T, const SIZE: usize> {
    buffer: [MaybeUninit<T>; SIZE],
    read_pos: usize,
    write_pos: usize,
    count: usize,
}
impl<T, const SIZE: usize> RingBuffer<T, SIZE> {
    /// The number of elements the buffer can hold.
    pub const CAPACITY: usize = SIZE;

    pub const fn new() -> Self {
        const { assert!(SIZE > 0, "a ring buffer needs at least one slot") };

        let buffer = [const { MaybeUninit::uninit() }; SIZE];
        Self {
            buffer,
            read_pos: 0,
            write_pos: 0,
            count: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        SIZE
    }

    /// Returns the number of elements waiting to be popped.
    pub const fn available(&self) -> usize {
        self.count
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub const fn is_full(&self) -> bool {
        self.count == SIZE
    }

    /// Appends a value unless the buffer is full.
    ///
    /// Returns `false` (and drops `value`) if the buffer is full; the stored elements are never
    /// overwritten. Use [`try_push`](Self::try_push) to get the rejected value back.
    pub fn push(&mut self, value: T) -> bool {
        self.try_push(value).is_ok()
    }

    /// Appends a value unless the buffer is full, in which case the value is handed back.
    pub fn try_push(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            return Err(Full(value));
        }

        self.buffer[self.write_pos] = MaybeUninit::new(value);
        self.write_pos = next_pos::<SIZE>(self.write_pos);
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the oldest value, or `None` if the buffer is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // count > 0, so the slot at read_pos holds a live value
        let value = unsafe {
            self.buffer[self.read_pos].assume_init_read()
        };
        self.buffer[self.read_pos] = MaybeUninit::uninit();
        self.read_pos = next_pos::<SIZE>(self.read_pos);
        self.count -= 1;
        Some(value)
    }

    /// Same as [`push`](Self::push).
    pub fn write(&mut self, value: T) -> bool {
        self.push(value)
    }

    /// Same as [`pop`](Self::pop).
    pub fn read(&mut self) -> Option<T> {
        self.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        let reference = unsafe {
            self.buffer[self.read_pos].assume_init_ref()
        };
        Some(reference)
    }

    /// Drops every stored element and rewinds both cursors to the first slot.
    pub fn clear(&mut self) {
        let mut drop_pos = self.read_pos;
        let live = self.count;

        // forget the elements first so a panicking destructor cannot cause a double drop
        self.read_pos = 0;
        self.write_pos = 0;
        self.count = 0;

        for _ in 0..live {
            unsafe { self.buffer[drop_pos].assume_init_drop() };
            drop_pos = next_pos::<SIZE>(drop_pos);
        }
    }

    pub(crate) const fn iter(&self) -> Iter<'_, T, SIZE> {
        Iter {
            ring_buffer: self,
            iter_pos: self.read_pos,
            remaining: self.count,
        }
    }
}
impl<T: Clone, const SIZE: usize> Clone for RingBuffer<T, SIZE> {
    fn clone(&self) -> Self {
        let mut cloned = Self::new();

        // copy only those elements that we know are initialized, into the same slots
        let mut my_pos = self.read_pos;
        for item in self.iter() {
            cloned.buffer[my_pos] = MaybeUninit::new(item.clone());
            my_pos = next_pos::<SIZE>(my_pos);
        }

        cloned.read_pos = self.read_pos;
        cloned.write_pos = self.write_pos;
        cloned.count = self.count;

        cloned
    }
}
impl<T: fmt::Debug, const SIZE: usize> fmt::Debug for RingBuffer<T, SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RingBuffer([")?;
        let mut first_item = true;
        for item in self.iter() {
            if first_item {
                first_item = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", item)?;
        }
        write!(f, "])")?;
        Ok(())
    }
}
#[cfg(feature = "defmt")]
impl<T: defmt::Format, const SIZE: usize> defmt::Format for RingBuffer<T, SIZE> {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "RingBuffer([");
        let mut first_item = true;
        for item in self.iter() {
            if first_item {
                first_item = false;
            } else {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", item);
        }
        defmt::write!(f, "])");
    }
}
impl<T, const SIZE: usize> Default for RingBuffer<T, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T, const SIZE: usize> Drop for RingBuffer<T, SIZE> {
    fn drop(&mut self) {
        self.clear();
    }
}
impl<T: PartialEq, const SIZE: usize> PartialEq for RingBuffer<T, SIZE> {
    fn eq(&self, other: &Self) -> bool {
        // physical positions don't matter, only the queued sequence does
        self.count == other.count
            && self.iter().eq(other.iter())
    }
}
impl<T: Eq, const SIZE: usize> Eq for RingBuffer<T, SIZE> {
}
impl<T: Hash, const SIZE: usize> Hash for RingBuffer<T, SIZE> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.count);
        for item in self.iter() {
            item.hash(state);
        }
    }
}


#[inline]
const fn next_pos<const SIZE: usize>(pos: usize) -> usize {
    if pos + 1 == SIZE { 0 } else { pos + 1 }
}


pub(crate) struct Iter<'a, T, const SIZE: usize> {
    ring_buffer: &'a RingBuffer<T, SIZE>,
    iter_pos: usize,
    remaining: usize,
}
impl<'a, T, const SIZE: usize> Iterator for Iter<'a, T, SIZE> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let value = unsafe {
            self.ring_buffer.buffer[self.iter_pos].assume_init_ref()
        };
        self.iter_pos = next_pos::<SIZE>(self.iter_pos);
        self.remaining -= 1;
        Some(value)
    }
}
