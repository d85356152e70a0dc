//! # offset-fifo
//!
//! FIFO storage adapters that pop by moving a cursor instead of shifting
//! or erasing elements.
//!
//! ## Design
//!
//! Conventional FIFO buffers either shift remaining elements on pop or
//! maintain a ring. This crate takes a third approach: the backing buffer is
//! never touched on consumption, only a cursor moves. That makes `pop_front`
//! a single integer update, and makes consumption *reversible* — consumed
//! elements stay in place until the next `clear`, so they can be re-exposed
//! with [`unpop_front`](Fifo::unpop_front) or [`unpop_all`](Fifo::unpop_all).
//!
//! Two adapters share this model:
//!
//! | Type | Buffer | Cursors |
//! |------|--------|---------|
//! | [`ArrayFifo<T, N>`] | inline, fixed capacity `N` | `consumed`, `produced` |
//! | [`VecFifo<T>`] | `Vec<T>`, append-only | `consumed` (produced = length) |
//!
//! The trade-off is deliberate: O(1) no-shift pop is paid for in retained
//! memory. A [`VecFifo`] pushed and popped forever without `clear` (or
//! [`compact`](VecFifo::compact)) grows without bound.
//!
//! ## Example
//!
//! ```
//! use offset_fifo::VecFifo;
//!
//! let mut fifo: VecFifo<u8> = VecFifo::new();
//! fifo.push_back(b'a');
//! fifo.push_back(b'b');
//! assert_eq!(fifo.as_slice(), b"ab");
//!
//! fifo.pop_front();
//! assert_eq!(fifo.as_slice(), b"b");
//!
//! fifo.push_back(b'c');
//! assert_eq!(fifo.as_slice(), b"bc");
//!
//! // Consumption is reversible until the next clear()
//! fifo.unpop_all();
//! assert_eq!(fifo.as_slice(), b"abc");
//! ```
//!
//! ## Concurrency
//!
//! Both adapters are plain single-threaded value types with no internal
//! synchronization. Wrap them in a lock if you must share one across
//! threads.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod array;
pub mod fifo;
pub mod vec;

pub use array::ArrayFifo;
pub use fifo::{Fifo, Full};
pub use vec::VecFifo;
