//! Growable offset fifo over a `Vec`.
//!
//! The produced boundary is the vector's length, so a single `consumed`
//! cursor is the only extra state. `push_back` appends (amortized O(1),
//! growing as `Vec` does); `pop_front` moves the cursor and leaves the
//! element in place.
//!
//! # Example
//!
//! ```
//! use offset_fifo::VecFifo;
//!
//! let mut fifo: VecFifo<char> = VecFifo::new();
//! fifo.push_back('a');
//! fifo.push_back('b');
//! fifo.pop_front();
//! assert_eq!(fifo.as_slice(), &['b']);
//!
//! fifo.unpop_all();
//! assert_eq!(fifo.as_slice(), &['a', 'b']);
//! ```
//!
//! # Memory Growth
//!
//! Consumed elements are retained until `clear` or [`compact`], so a fifo
//! pushed and popped forever without either grows without bound. That is the
//! price of the O(1) no-shift pop. Callers needing bounded memory should
//! call [`compact`] once [`consumed`] grows large relative to [`len`]:
//!
//! ```
//! use offset_fifo::VecFifo;
//!
//! let mut fifo: VecFifo<u64> = (0..1000).collect();
//! for _ in 0..900 {
//!     fifo.pop_front();
//! }
//! if fifo.consumed() > fifo.len() {
//!     fifo.compact(); // frees the 900-element prefix
//! }
//! assert_eq!(fifo.len(), 100);
//! assert_eq!(fifo.consumed(), 0);
//! ```
//!
//! [`compact`]: VecFifo::compact
//! [`consumed`]: VecFifo::consumed
//! [`len`]: VecFifo::len

use core::fmt;
use core::slice;

use crate::Fifo;

/// A growable FIFO that pops by cursor movement.
///
/// See the [module docs](self) for the memory-growth trade-off.
#[derive(Clone)]
pub struct VecFifo<T> {
    storage: Vec<T>,
    /// Front of the unconsumed window. Invariant: `consumed <= storage.len()`.
    consumed: usize,
}

impl<T> VecFifo<T> {
    /// Creates an empty fifo.
    #[inline]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
            consumed: 0,
        }
    }

    /// Creates an empty fifo with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            consumed: 0,
        }
    }

    /// Returns the number of unconsumed elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len() - self.consumed
    }

    /// Returns `true` if there are no unconsumed elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the backing buffer's capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Returns the consumed-cursor position, i.e. how many elements are
    /// retained in front of the unconsumed window.
    ///
    /// Useful for deciding when to [`compact`](Self::compact).
    #[inline]
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns the unconsumed elements as a contiguous slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[self.consumed..]
    }

    /// Returns the unconsumed elements as a mutable contiguous slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage[self.consumed..]
    }

    /// Returns an iterator over the unconsumed elements, front to back.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a reference to the first unconsumed element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.storage.get(self.consumed)
    }

    /// Returns a mutable reference to the first unconsumed element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.storage.get_mut(self.consumed)
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

    /// Appends a value at the tail.
    ///
    /// Grows the backing buffer as needed; allocation failure aborts the
    /// way `Vec` growth does.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.storage.push(value);
    }

    /// Advances the consumed cursor by one, clamped to the buffer length.
    ///
    /// The element is not dropped or erased; it stays in the buffer and can
    /// be re-exposed with [`unpop_front`](Self::unpop_front). Popping an
    /// empty fifo is a no-op.
    #[inline]
    pub fn pop_front(&mut self) {
        self.consumed = (self.consumed + 1).min(self.storage.len());
    }

    /// Steps the consumed cursor back by one, re-exposing the most recently
    /// popped element. No-op when nothing has been popped.
    #[inline]
    pub fn unpop_front(&mut self) {
        self.consumed = self.consumed.saturating_sub(1);
    }

    /// Resets the consumed cursor, re-exposing every element popped since
    /// the last `clear` or [`compact`](Self::compact).
    #[inline]
    pub fn unpop_all(&mut self) {
        self.consumed = 0;
    }

    /// Empties the buffer and resets the cursor.
    ///
    /// Backing capacity is retained, per `Vec::clear` semantics.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear();
        self.consumed = 0;
    }

    /// Drops the consumed prefix and resets the cursor to zero.
    ///
    /// This is the caller-side answer to unbounded growth: it shifts the
    /// unconsumed window to the front of the buffer in O(len) and discards
    /// the unpop history (there is nothing left to `unpop` afterwards).
    pub fn compact(&mut self) {
        self.storage.drain(..self.consumed);
        self.consumed = 0;
    }

    /// Exchanges the buffers and cursors of `self` and `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

impl<T> Default for VecFifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for VecFifo<T> {
    /// Wraps an existing buffer; every element starts unconsumed.
    fn from(storage: Vec<T>) -> Self {
        Self { storage, consumed: 0 }
    }
}

impl<T> FromIterator<T> for VecFifo<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(Vec::from_iter(iter))
    }
}

impl<T> Extend<T> for VecFifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.storage.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for VecFifo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Equality compares the unconsumed windows; retained prefixes and cursor
/// positions are not observable through the FIFO contract.
impl<T: PartialEq> PartialEq for VecFifo<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for VecFifo<T> {}

impl<'a, T> IntoIterator for &'a VecFifo<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Fifo<T> for VecFifo<T> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let fifo: VecFifo<u64> = VecFifo::new();
        assert!(fifo.is_empty());
        assert_eq!(fifo.len(), 0);
        assert_eq!(fifo.consumed(), 0);
        assert!(fifo.front().is_none());
        assert!(fifo.back().is_none());
    }

    #[test]
    fn view_tracks_push_pop_unpop() {
        let mut fifo: VecFifo<u8> = VecFifo::new();
        fifo.push_back(b'a');
        fifo.push_back(b'b');
        assert_eq!(fifo.as_slice(), b"ab");

        fifo.pop_front();
        assert_eq!(fifo.as_slice(), b"b");

        fifo.push_back(b'c');
        assert_eq!(fifo.as_slice(), b"bc");

        fifo.unpop_all();
        assert_eq!(fifo.as_slice(), b"abc");
    }

    #[test]
    fn len_tracks_pushes_minus_pops() {
        let mut fifo: VecFifo<usize> = VecFifo::new();
        for k in 0..100 {
            fifo.push_back(k);
        }
        for j in 0..40 {
            fifo.pop_front();
            assert_eq!(fifo.len(), 100 - j - 1);
        }
        assert_eq!(fifo.consumed(), 40);
    }

    #[test]
    fn pop_clamps_to_length() {
        let mut fifo: VecFifo<u32> = VecFifo::new();
        fifo.pop_front();
        assert!(fifo.is_empty());

        fifo.push_back(1);
        fifo.pop_front();
        fifo.pop_front();
        fifo.pop_front();
        assert_eq!(fifo.len(), 0);
        assert_eq!(fifo.consumed(), 1);

        // A later push is immediately visible.
        fifo.push_back(2);
        assert_eq!(fifo.front(), Some(&2));
    }

    #[test]
    fn unpop_front_restores_one_element() {
        let mut fifo: VecFifo<u32> = (1..=3).collect();
        fifo.pop_front();
        fifo.pop_front();
        assert_eq!(fifo.front(), Some(&3));

        fifo.unpop_front();
        assert_eq!(fifo.front(), Some(&2));
        assert_eq!(fifo.len(), 2);

        fifo.unpop_front();
        fifo.unpop_front(); // already at the start, no-op
        assert_eq!(fifo.front(), Some(&1));
        assert_eq!(fifo.len(), 3);
    }

    #[test]
    fn from_vec_and_collect() {
        let fifo = VecFifo::from(vec![1, 2, 3]);
        assert_eq!(fifo.as_slice(), &[1, 2, 3]);

        let fifo: VecFifo<i32> = (1..=3).collect();
        assert_eq!(fifo.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn extend_appends_at_tail() {
        let mut fifo: VecFifo<u32> = VecFifo::from(vec![1, 2]);
        fifo.pop_front();
        fifo.extend([3, 4]);
        assert_eq!(fifo.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut fifo: VecFifo<u32> = (0..10).collect();
        fifo.pop_front();
        fifo.clear();

        assert!(fifo.is_empty());
        assert_eq!(fifo.consumed(), 0);
        fifo.unpop_all();
        assert!(fifo.is_empty());
    }

    #[test]
    fn compact_frees_prefix_and_keeps_window() {
        let mut fifo: VecFifo<u32> = (0..10).collect();
        for _ in 0..7 {
            fifo.pop_front();
        }
        assert_eq!(fifo.consumed(), 7);

        fifo.compact();
        assert_eq!(fifo.consumed(), 0);
        assert_eq!(fifo.as_slice(), &[7, 8, 9]);

        // The unpop history is gone.
        fifo.unpop_all();
        assert_eq!(fifo.as_slice(), &[7, 8, 9]);
    }

    #[test]
    fn compact_drops_consumed_elements() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let drop_count = Arc::new(AtomicUsize::new(0));

        #[derive(Debug)]
        struct DropCounter(Arc<AtomicUsize>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let mut fifo: VecFifo<DropCounter> = VecFifo::new();
        for _ in 0..3 {
            fifo.push_back(DropCounter(Arc::clone(&drop_count)));
        }
        fifo.pop_front();
        fifo.pop_front();
        assert_eq!(drop_count.load(Ordering::SeqCst), 0);

        fifo.compact();
        assert_eq!(drop_count.load(Ordering::SeqCst), 2);

        drop(fifo);
        assert_eq!(drop_count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn swap_twice_restores_both() {
        let mut a: VecFifo<u32> = (0..4).collect();
        a.pop_front();
        let mut b: VecFifo<u32> = VecFifo::from(vec![9]);

        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[9]);
        assert_eq!(b.as_slice(), &[1, 2, 3]);

        a.swap(&mut b);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert_eq!(b.as_slice(), &[9]);
        a.unpop_all();
        assert_eq!(a.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn eq_compares_unconsumed_windows() {
        let mut a: VecFifo<u32> = (0..5).collect();
        a.pop_front();
        a.pop_front();
        let b: VecFifo<u32> = (2..5).collect();

        // Different buffers and cursors, same visible content.
        assert_eq!(a, b);

        a.unpop_front();
        assert_ne!(a, b);
    }

    #[test]
    fn mutation_through_slice_and_front_mut() {
        let mut fifo: VecFifo<u32> = (1..=3).collect();
        fifo.pop_front();

        *fifo.front_mut().unwrap() = 20;
        *fifo.back_mut().unwrap() = 30;
        assert_eq!(fifo.as_slice(), &[20, 30]);

        for v in fifo.as_mut_slice() {
            *v += 1;
        }
        assert_eq!(fifo.as_slice(), &[21, 31]);

        // The retained prefix is untouched.
        fifo.unpop_all();
        assert_eq!(fifo.front(), Some(&1));
    }

    #[test]
    fn debug_shows_unconsumed_window() {
        let mut fifo: VecFifo<u32> = (1..=3).collect();
        fifo.pop_front();
        assert_eq!(format!("{fifo:?}"), "[2, 3]");
    }
}
