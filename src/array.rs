//! Fixed-capacity offset fifo over an inline buffer.
//!
//! Zero-cost abstraction: capacity is a compile-time constant, the buffer is
//! inline, and consumption moves a cursor instead of touching elements.
//!
//! # Example
//!
//! ```
//! use offset_fifo::ArrayFifo;
//!
//! let mut fifo: ArrayFifo<u32, 4> = ArrayFifo::new();
//! fifo.push_back(10);
//! fifo.push_back(20);
//! fifo.push_back(30);
//!
//! assert_eq!(fifo.len(), 3);
//! assert_eq!(fifo.front(), Some(&10));
//! assert_eq!(fifo.back(), Some(&30));
//!
//! fifo.pop_front();
//! assert_eq!(fifo.front(), Some(&20));
//!
//! // The popped element was never erased - take it back
//! fifo.unpop_front();
//! assert_eq!(fifo.front(), Some(&10));
//! ```
//!
//! # Cursor Model
//!
//! Two monotonically increasing cursors index the buffer: `consumed` marks
//! the front of the unconsumed window, `produced` marks one past its back.
//! `push_back` writes at `produced` and advances it; `pop_front` advances
//! `consumed` and leaves the element in place. `clear` resets both cursors
//! without touching stored values, so slots are only ever reclaimed by being
//! overwritten after a `clear`.
//!
//! Because the cursors never wrap, a fifo holds at most `N` pushes between
//! `clear`s. This is not a ring buffer; it is the storage half of one-shot
//! batch processing, where a batch is filled, drained (possibly with
//! rewinds), and then cleared.

use core::fmt;
use core::mem::MaybeUninit;
use core::slice;

use crate::{Fifo, Full};

/// A fixed-capacity FIFO that pops by cursor movement.
///
/// `N` is the compile-time capacity. See the [module docs](self) for the
/// cursor model.
pub struct ArrayFifo<T, const N: usize> {
    buffer: [MaybeUninit<T>; N],
    /// Front of the unconsumed window. Invariant: `consumed <= produced`.
    consumed: usize,
    /// One past the back of the unconsumed window. Invariant: `produced <= N`.
    produced: usize,
    /// Slots `0..filled` are initialized. `filled >= produced` always;
    /// the two diverge after `clear`, which rewinds `produced` but keeps
    /// the stored values alive.
    filled: usize,
}

impl<T, const N: usize> ArrayFifo<T, N> {
    /// Creates an empty fifo.
    pub fn new() -> Self {
        Self {
            // Safety: MaybeUninit doesn't require initialization
            buffer: unsafe { MaybeUninit::uninit().assume_init() },
            consumed: 0,
            produced: 0,
            filled: 0,
        }
    }

    /// Returns the capacity (compile-time constant).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of unconsumed elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.produced - self.consumed
    }

    /// Returns `true` if there are no unconsumed elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns how many more elements can be pushed before the next `clear`.
    #[inline]
    pub const fn remaining_capacity(&self) -> usize {
        N - self.produced
    }

    /// Returns the unconsumed elements as a contiguous slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: slots consumed..produced lie within the initialized
        // prefix 0..filled, and MaybeUninit<T> has the layout of T.
        unsafe {
            slice::from_raw_parts(self.buffer.as_ptr().add(self.consumed).cast::<T>(), self.len())
        }
    }

    /// Returns the unconsumed elements as a mutable contiguous slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: same bounds as as_slice; &mut self gives unique access.
        unsafe {
            slice::from_raw_parts_mut(
                self.buffer.as_mut_ptr().add(self.consumed).cast::<T>(),
                self.len(),
            )
        }
    }

    /// Returns an iterator over the unconsumed elements, front to back.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a reference to the first unconsumed element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a mutable reference to the first unconsumed element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns a reference to the last unconsumed element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a mutable reference to the last unconsumed element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Pushes a value at the produced cursor.
    ///
    /// # Panics
    ///
    /// Panics if `produced == N`, i.e. `N` elements have already been pushed
    /// since the last `clear`. Use [`try_push_back`](Self::try_push_back)
    /// for a fallible variant.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        assert!(self.produced < N, "push_back on a full ArrayFifo");
        if self.produced < self.filled {
            // Slot retains a value from before the last clear(); assign
            // over it so the old value is dropped now, not leaked.
            // Safety: slots below filled are initialized.
            unsafe { *self.buffer[self.produced].assume_init_mut() = value };
        } else {
            self.buffer[self.produced].write(value);
            self.filled = self.produced + 1;
        }
        self.produced += 1;
    }

    /// Pushes a value, returning it in `Err(Full)` if the buffer is at
    /// capacity.
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<(), Full<T>> {
        if self.produced == N {
            return Err(Full(value));
        }
        self.push_back(value);
        Ok(())
    }

    /// Advances the consumed cursor by one, clamped to the produced cursor.
    ///
    /// The element is not dropped or erased; it stays in its slot and can be
    /// re-exposed with [`unpop_front`](Self::unpop_front). Popping an empty
    /// fifo is a no-op: the cursor can never pass `produced`, so `len()`
    /// cannot underflow.
    #[inline]
    pub fn pop_front(&mut self) {
        self.consumed = (self.consumed + 1).min(self.produced);
    }

    /// Steps the consumed cursor back by one, re-exposing the most recently
    /// popped element. No-op when nothing has been popped.
    #[inline]
    pub fn unpop_front(&mut self) {
        self.consumed = self.consumed.saturating_sub(1);
    }

    /// Resets the consumed cursor, re-exposing every element popped since
    /// the last `clear`.
    #[inline]
    pub fn unpop_all(&mut self) {
        self.consumed = 0;
    }

    /// Resets both cursors.
    ///
    /// Stored values are not dropped here; each is dropped when its slot is
    /// overwritten by a later `push_back`, or when the fifo itself is
    /// dropped.
    #[inline]
    pub fn clear(&mut self) {
        self.consumed = 0;
        self.produced = 0;
    }

    /// Exchanges the buffers and cursors of `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T, const N: usize> Default for ArrayFifo<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Drop for ArrayFifo<T, N> {
    fn drop(&mut self) {
        // Safety: exactly the slots 0..filled are initialized.
        for slot in &mut self.buffer[..self.filled] {
            unsafe { slot.assume_init_drop() };
        }
    }
}

impl<T: Clone, const N: usize> Clone for ArrayFifo<T, N> {
    fn clone(&self) -> Self {
        // Safety: MaybeUninit doesn't require initialization
        let mut buffer: [MaybeUninit<T>; N] = unsafe { MaybeUninit::uninit().assume_init() };
        for (slot, value) in buffer.iter_mut().zip(&self.buffer[..self.filled]) {
            // Safety: zip is bounded by the initialized prefix 0..filled.
            slot.write(unsafe { value.assume_init_ref() }.clone());
        }
        Self {
            buffer,
            consumed: self.consumed,
            produced: self.produced,
            filled: self.filled,
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for ArrayFifo<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a ArrayFifo<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, const N: usize> Fifo<T> for ArrayFifo<T, N> {
    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        Self::as_slice(self)
    }

    #[inline]
    fn pop_front(&mut self) {
        Self::pop_front(self);
    }

    #[inline]
    fn unpop_front(&mut self) {
        Self::unpop_front(self);
    }

    #[inline]
    fn unpop_all(&mut self) {
        Self::unpop_all(self);
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }
}
