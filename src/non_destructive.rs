//! Helpers for walking a ring's occupied indexes without a `Scanner`.

#[cfg(not(any(feature = "std", test)))]
use alloc::vec::Vec;

use crate::Ring;

/// Returns all occupied indexes of `ring`, oldest first.
///
/// ```
/// use ring_accountant::Ring;
///
/// let mut ring = Ring::new(5);
/// for _ in 0..13 {
///     ring.force_push().unwrap();
/// }
/// assert_eq!(ring_accountant::all(&ring), vec![3, 4, 0, 1, 2]);
/// ```
pub fn all(ring: &Ring) -> Vec<usize> {
    let mut indexes = Vec::with_capacity(ring.len());
    let mut index = ring.start();
    for _ in 0..ring.len() {
        indexes.push(index);
        index = ring.mask(index + 1);
    }
    indexes
}

/// Returns all occupied indexes of `ring`, newest first.
pub fn rev(ring: &Ring) -> Vec<usize> {
    let mut indexes = all(ring);
    indexes.reverse();
    indexes
}

/// Start of the first run of occupied indexes.
///
/// Together with [`end1`] and [`end2`] this allows walking a ring oldest
/// first with two plain loops, `start1..end1` followed by `0..end2`.
#[inline]
pub fn start1(ring: &Ring) -> usize {
    ring.start()
}

/// End of the first run of occupied indexes: either one past the newest
/// index, or the capacity if the occupied indexes wrap around.
pub fn end1(ring: &Ring) -> usize {
    let start = ring.start();
    if ring.len() > ring.capacity() - start {
        ring.capacity()
    } else {
        start + ring.len()
    }
}

/// End of the second run of occupied indexes, which starts at 0. This is 0
/// unless the occupied indexes wrap around.
pub fn end2(ring: &Ring) -> usize {
    let start = ring.start();
    let to_capacity = ring.capacity() - start;
    if ring.len() > to_capacity {
        ring.len() - to_capacity
    } else {
        0
    }
}
