//! The seam shared by both offset queues.
//!
//! A higher-level queue adaptor that only needs to observe, pop, and rewind
//! can be written against [`Fifo`] and backed by either [`ArrayFifo`] or
//! [`VecFifo`]:
//!
//! ```
//! use offset_fifo::{ArrayFifo, Fifo, VecFifo};
//!
//! fn drain<T: Copy, F: Fifo<T>>(fifo: &mut F) -> Vec<T> {
//!     let mut out = Vec::with_capacity(fifo.len());
//!     while let Some(&value) = fifo.front() {
//!         out.push(value);
//!         fifo.pop_front();
//!     }
//!     out
//! }
//!
//! let mut a: ArrayFifo<u32, 4> = ArrayFifo::new();
//! a.push_back(1);
//! a.push_back(2);
//! assert_eq!(drain(&mut a), vec![1, 2]);
//!
//! let mut v: VecFifo<u32> = [3, 4].into_iter().collect();
//! assert_eq!(drain(&mut v), vec![3, 4]);
//! ```
//!
//! Pushing is deliberately not part of the trait: the fixed-capacity and
//! growable adapters disagree on its failure mode (panic on a full buffer
//! vs. unconditional append).
//!
//! [`ArrayFifo`]: crate::ArrayFifo
//! [`VecFifo`]: crate::VecFifo

/// Read-and-rewind contract over an offset queue.
///
/// Implementors expose the unconsumed window as a contiguous slice and
/// consume it by cursor movement only, so every pop is reversible until the
/// next [`clear`](Fifo::clear).
pub trait Fifo<T> {
    /// Returns the number of unconsumed elements.
    fn len(&self) -> usize;

    /// Returns the unconsumed elements as a contiguous slice.
    ///
    /// The slice is a zero-copy window into the backing buffer. It is
    /// invalidated by any subsequent mutation (the borrow checker enforces
    /// re-acquisition).
    fn as_slice(&self) -> &[T];

    /// Advances the consumed cursor by one. No-op when empty.
    fn pop_front(&mut self);

    /// Steps the consumed cursor back by one, re-exposing the most recently
    /// popped element. No-op when nothing has been popped.
    fn unpop_front(&mut self);

    /// Resets the consumed cursor, re-exposing everything popped since the
    /// last [`clear`](Fifo::clear).
    fn unpop_all(&mut self);

    /// Empties the queue and resets all cursors.
    fn clear(&mut self);

    /// Returns `true` if there are no unconsumed elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the first unconsumed element.
    #[inline]
    fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a reference to the last unconsumed element.
    #[inline]
    fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }
}

/// Error returned when a fixed-capacity fifo cannot accept another element.
///
/// Carries the rejected value so the caller can recover it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(pub T);

impl<T> Full<T> {
    /// Returns the value that could not be pushed.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> core::fmt::Display for Full<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "fifo is at capacity")
    }
}

impl<T: core::fmt::Debug> std::error::Error for Full<T> {}
