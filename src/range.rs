//! Half-open index intervals over a ring's storage.

use std::ops;

use odds::IndexRange;

/// A normalized, continuous run of indexes `[start, end)` in a ring.
///
/// `start <= end` always holds, and both lie in `[0, capacity]`, so a range
/// can be used as slice bounds on the backing storage without adjustment:
///
/// ```
/// use ring_accountant::Ring;
///
/// let storage = [10, 11, 12, 13, 14];
/// let mut ring = Ring::new(storage.len());
/// ring.push_n(3).unwrap();
///
/// let (first, second) = ring.inspect();
/// assert_eq!(&storage[first.as_range()], &[10, 11, 12]);
/// assert!(second.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Range {
    /// The first index in the range.
    pub start: usize,
    /// The first index past the range.
    pub end: usize,
}

impl Range {
    /// Creates a range from its bounds.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Range {
        Range { start, end }
    }

    /// Returns `true` if the range contains no indexes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the number of indexes in the range.
    #[inline]
    pub const fn len(&self) -> usize {
        if self.end <= self.start {
            0
        } else {
            self.end - self.start
        }
    }

    /// Returns `true` if `index` lies within the range.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Converts into a standard range, e.g. for slicing.
    #[inline]
    pub const fn as_range(&self) -> ops::Range<usize> {
        self.start..self.end
    }
}

impl From<Range> for ops::Range<usize> {
    #[inline]
    fn from(range: Range) -> ops::Range<usize> {
        range.as_range()
    }
}

impl IntoIterator for Range {
    type Item = usize;
    type IntoIter = ops::Range<usize>;

    #[inline]
    fn into_iter(self) -> ops::Range<usize> {
        self.as_range()
    }
}

impl IndexRange for Range {
    #[inline]
    fn start(&self) -> Option<usize> {
        Some(self.start)
    }

    #[inline]
    fn end(&self) -> Option<usize> {
        Some(self.end)
    }
}
