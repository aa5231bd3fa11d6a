//! Index accounting for fixed-capacity ring buffers.
//!
//! A [`Ring`] never owns any elements. It only keeps track of which slots of
//! some caller-owned storage are occupied and hands out the indexes to write
//! to and read from, so the same accountant works for byte buffers, arrays of
//! structs or anything else addressable by an integer index.
//!
//! # Building your own ring buffer
//!
//! Put a `Ring` next to a buffer of the same capacity and let it tell you
//! where to go:
//!
//! ```
//! use ring_accountant::{Ring, RingError};
//!
//! let mut names = [""; 3];
//! let mut ring = Ring::new(names.len());
//!
//! for name in ["ada", "grace", "barbara"] {
//!     names[ring.push().unwrap()] = name;
//! }
//! assert_eq!(ring.push(), Err(RingError::Full));
//!
//! assert_eq!(names[ring.shift().unwrap()], "ada");
//! names[ring.push().unwrap()] = "frances";
//! assert_eq!(ring_accountant::all(&ring), vec![1, 2, 0]);
//! ```
//!
//! # Behavior when full
//!
//! [`Ring::push`] and [`Ring::shift`] fail with [`RingError::Full`] and
//! [`RingError::Empty`]. To overwrite the oldest element instead, use
//! [`Ring::force_push`].
//!
//! # Ranges across a ring
//!
//! The occupied slots are contiguous in ring order, but since indexes wrap
//! around to zero they are not necessarily contiguous in storage. Operations
//! dealing with many slots at once ([`Ring::inspect`], [`Ring::consume`],
//! [`Ring::push_n`], [`Ring::shift_n`]) therefore return two [`Range`]s, by
//! convention `first` and `second`. With `x` marking occupied slots:
//!
//! ```text
//!   0   1   2   3   4   5   6   7 (capacity)
//! +---+---+---+---+---+---+---+
//! | x | _ | _ | x | x | x | x |
//! +---+---+---+---+---+---+---+
//!       ^       ^ read end
//!       |
//!       +- write end
//!
//! first  = Range { start: 3, end: 7 }
//! second = Range { start: 0, end: 1 }
//! ```
//!
//! Walking `first` and then `second` visits the slots from oldest to newest.
//!
//! # Non-destructive iteration
//!
//! [`Ring::scan_lifo`] and [`Ring::scan_fifo`] walk the occupied indexes
//! without shifting them out; [`all`] and [`rev`] collect them into a vector.
//! As named by this crate, LIFO order runs oldest to newest and FIFO order
//! newest to oldest.
//!
//! # Thread safety
//!
//! A ring has no internal synchronization. Code sharing a ring buffer between
//! threads must hold one lock across both the accounting call and the copy
//! into or out of the storage slots it returned.
//!
//! # Feature Flags
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` and needs `alloc` only
//!     for [`all`] and [`rev`]

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

#[cfg(not(any(feature = "std", test)))]
extern crate alloc;
#[cfg(not(any(feature = "std", test)))]
extern crate core as std;

use std::fmt;

pub use odds::IndexRange as RangeArgument;

mod backend;
pub mod error;
mod non_destructive;
mod range;
mod scan;
mod utils;

pub use crate::backend::Kind;
pub use crate::error::RingError;
pub use crate::non_destructive::{all, end1, end2, rev, start1};
pub use crate::range::Range;
pub use crate::scan::{Direction, Scanner};

use crate::backend::{Accounting, Backend};

/// The accounting state of one fixed-capacity ring buffer.
///
/// The capacity is fixed at construction. Depending on it, the ring picks
/// one of three accountants: capacity 0 gets a degenerate one that refuses
/// everything, powers of two get one that wraps indexes with a bitmask, and
/// everything else wraps with a remainder. All of them hand out exactly the
/// same indexes for the same sequence of operations.
///
/// Every index a ring returns lies in `[0, capacity)`.
#[derive(Clone)]
pub struct Ring {
    backend: Backend,
}

impl Ring {
    /// Creates an empty ring accounting for `capacity` slots.
    ///
    /// ```
    /// use ring_accountant::{Kind, Ring};
    ///
    /// assert_eq!(Ring::new(16).kind(), Kind::Mask);
    /// assert_eq!(Ring::new(17).kind(), Kind::Modulo);
    /// assert_eq!(Ring::new(0).kind(), Kind::Zero);
    /// ```
    pub fn new(capacity: usize) -> Ring {
        let backend = Backend::for_capacity(capacity);
        tracing::trace!(capacity, backend = ?backend.kind(), "selected ring accountant");
        Ring { backend }
    }

    /// Creates an empty ring with a capacity of `2^power` slots.
    ///
    /// # Panics
    /// Panics if `2^power` does not fit in a `usize`.
    #[track_caller]
    pub fn power_of_two(power: u32) -> Ring {
        assert!(power < usize::BITS,
                "2^{} slots do not fit in usize",
                power);
        Ring::new(1 << power)
    }

    /// Returns which accountant this ring uses.
    #[inline]
    pub fn kind(&self) -> Kind {
        self.backend.kind()
    }

    /// Returns the number of slots the ring accounts for.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.backend.capacity()
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.backend.size()
    }

    /// Returns the number of free slots.
    ///
    /// Same as `self.capacity() - self.len()`.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Returns `true` if no slot is occupied.
    ///
    /// A ring of capacity 0 is both empty and full.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.backend.empty()
    }

    /// Returns `true` if every slot is occupied.
    ///
    /// A ring of capacity 0 is both empty and full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.backend.full()
    }

    /// Reduces an arbitrary value to an index in `[0, capacity)`.
    ///
    /// Always 0 for a ring of capacity 0.
    #[inline]
    pub fn mask(&self, value: usize) -> usize {
        self.backend.mask(value)
    }

    /// Index of the oldest occupied slot. Meaningless if the ring is empty.
    #[inline]
    pub fn start(&self) -> usize {
        self.backend.start()
    }

    /// Index one past the newest occupied slot, i.e. where the next push
    /// lands.
    #[inline]
    pub fn end(&self) -> usize {
        self.backend.end()
    }

    /// Accounts for one new element and returns the index to store it at.
    ///
    /// Fails with [`RingError::Full`] if the ring is at capacity.
    #[inline]
    pub fn push(&mut self) -> Result<usize, RingError> {
        self.backend.push()
    }

    /// Removes the oldest element and returns the index it is stored at.
    ///
    /// Fails with [`RingError::Empty`] if there is nothing to remove.
    #[inline]
    pub fn shift(&mut self) -> Result<usize, RingError> {
        self.backend.shift()
    }

    /// Accounts for one new element, discarding the oldest one if the ring
    /// is full, and returns the index to store it at.
    ///
    /// This always succeeds unless the capacity is 0: shifting a zero
    /// capacity ring does nothing, so it stays full and the push still fails
    /// with [`RingError::Full`].
    ///
    /// ```
    /// use ring_accountant::Ring;
    ///
    /// let mut ring = Ring::new(2);
    /// assert_eq!(ring.force_push(), Ok(0));
    /// assert_eq!(ring.force_push(), Ok(1));
    /// assert_eq!(ring.force_push(), Ok(0));
    /// assert_eq!(ring.start(), 1);
    /// ```
    pub fn force_push(&mut self) -> Result<usize, RingError> {
        if self.is_full() {
            let _ = self.shift();
        }
        self.push()
    }

    /// Discards all occupied slots. The capacity is unchanged.
    #[inline]
    pub fn reset(&mut self) {
        self.backend.reset()
    }

    /// Splits a raw masked run into ranges in traversal order.
    fn split(&self, start: usize, end: usize) -> (Range, Range) {
        if end <= start {
            (Range::new(start, self.capacity()), Range::new(0, end))
        } else {
            (Range::new(start, end), Range::default())
        }
    }

    /// Returns the ranges of occupied slots, oldest first, without changing
    /// the ring.
    ///
    /// The second range is only non-empty if the occupied slots wrap around
    /// past the end of the storage; both are empty for an empty ring.
    ///
    /// ```
    /// use ring_accountant::{Range, Ring};
    ///
    /// let mut ring = Ring::new(5);
    /// for _ in 0..13 {
    ///     ring.force_push().unwrap();
    /// }
    /// assert_eq!(ring.inspect(), (Range::new(3, 5), Range::new(0, 3)));
    /// ```
    pub fn inspect(&self) -> (Range, Range) {
        if self.is_empty() {
            return (Range::default(), Range::default());
        }
        self.split(self.start(), self.end())
    }

    /// Empties the ring, returning the ranges that were occupied before.
    ///
    /// See also [`inspect`](Self::inspect).
    pub fn consume(&mut self) -> (Range, Range) {
        let ranges = self.inspect();
        self.reset();
        ranges
    }

    /// Accounts for `count` new elements at once and returns the ranges of
    /// slots reserved for them.
    ///
    /// If the ring can not hold all of them, nothing is reserved and
    /// [`RingError::Full`] is returned. Pushing zero elements is a no-op that
    /// returns two empty ranges.
    ///
    /// ```
    /// use ring_accountant::{Range, Ring, RingError};
    ///
    /// let mut ring = Ring::new(8);
    /// ring.push_n(6).unwrap();
    /// ring.shift_n(4).unwrap();
    /// assert_eq!(ring.push_n(5), Ok((Range::new(6, 8), Range::new(0, 3))));
    /// assert_eq!(ring.push_n(2), Err(RingError::Full));
    /// ```
    pub fn push_n(&mut self, count: usize) -> Result<(Range, Range), RingError> {
        if count == 0 {
            return Ok((Range::default(), Range::default()));
        }
        match self.backend.push_n(count) {
            Ok((start, end)) => Ok(self.split(start, end)),
            Err(err) => {
                tracing::trace!(requested = count,
                                available = self.remaining(),
                                "refusing bulk push");
                Err(err)
            }
        }
    }

    /// Removes the `count` oldest elements at once and returns the ranges of
    /// slots they occupied.
    ///
    /// If fewer than `count` elements are present, nothing is removed and
    /// [`RingError::Empty`] is returned. Shifting zero elements is a no-op
    /// that returns two empty ranges.
    pub fn shift_n(&mut self, count: usize) -> Result<(Range, Range), RingError> {
        if count == 0 {
            return Ok((Range::default(), Range::default()));
        }
        match self.backend.shift_n(count) {
            Ok((start, end)) => Ok(self.split(start, end)),
            Err(err) => {
                tracing::trace!(requested = count,
                                available = self.len(),
                                "refusing bulk shift");
                Err(err)
            }
        }
    }

    /// Returns a scanner walking the occupied indexes from oldest to newest.
    ///
    /// ```
    /// use ring_accountant::Ring;
    ///
    /// let mut ring = Ring::new(17);
    /// for _ in 0..19 {
    ///     ring.force_push().unwrap();
    /// }
    /// let mut scanner = ring.scan_lifo();
    /// let mut seen = Vec::new();
    /// while scanner.advance() {
    ///     seen.push(scanner.value());
    /// }
    /// assert_eq!(seen, [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 0, 1]);
    /// ```
    #[inline]
    pub fn scan_lifo(&self) -> Scanner<'_> {
        Scanner::new(self, Direction::Lifo)
    }

    /// Returns a scanner walking the occupied indexes from newest to oldest.
    ///
    /// ```
    /// use ring_accountant::Ring;
    ///
    /// let mut ring = Ring::new(17);
    /// for _ in 0..19 {
    ///     ring.force_push().unwrap();
    /// }
    /// let seen: Vec<usize> = ring.scan_fifo().collect();
    /// assert_eq!(seen, [1, 0, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
    /// ```
    #[inline]
    pub fn scan_fifo(&self) -> Scanner<'_> {
        Scanner::new(self, Direction::Fifo)
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Ring")
            .field("kind", &self.kind())
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .field("start", &self.start())
            .finish()
    }
}
