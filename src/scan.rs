//! Non-destructive traversal of a ring's occupied indexes.

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;

use crate::range::Range;
use crate::Ring;

/// Order in which a [`Scanner`] visits occupied indexes.
///
/// The names follow this crate's convention: LIFO walks from the oldest
/// element to the newest, FIFO from the newest to the oldest.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Oldest to newest.
    Lifo,
    /// Newest to oldest.
    Fifo,
}

/// Walks over the occupied indexes of a ring without removing them.
///
/// A scanner works on a snapshot of [`Ring::inspect`] taken when it was
/// created, and borrows the ring for as long as it lives so that the ring
/// can not be modified underneath it.
///
/// Use it either as an iterator, or in the explicit style:
///
/// ```
/// use ring_accountant::{Ring, Scanner};
///
/// let mut ring = Ring::new(4);
/// ring.push_n(3).unwrap();
///
/// let mut scanner = Scanner::fifo(&ring);
/// while scanner.advance() {
///     print!("{} ", scanner.value());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    current: Range,
    queued: Range,
    direction: Direction,
    pos: Option<usize>,
    _ring: PhantomData<&'a Ring>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `ring`'s occupied indexes in the given order.
    pub fn new(ring: &'a Ring, direction: Direction) -> Scanner<'a> {
        let (first, second) = ring.inspect();
        let (current, queued) = match direction {
            Direction::Lifo => (first, second),
            Direction::Fifo => (second, first),
        };
        Scanner {
            current,
            queued,
            direction,
            pos: None,
            _ring: PhantomData,
        }
    }

    /// Creates a scanner walking from the oldest to the newest index.
    #[inline]
    pub fn lifo(ring: &'a Ring) -> Scanner<'a> {
        Scanner::new(ring, Direction::Lifo)
    }

    /// Creates a scanner walking from the newest to the oldest index.
    #[inline]
    pub fn fifo(ring: &'a Ring) -> Scanner<'a> {
        Scanner::new(ring, Direction::Fifo)
    }

    /// Returns the traversal order.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Moves to the next occupied index, returning whether there is one.
    ///
    /// Once this returned `false` it keeps returning `false`.
    pub fn advance(&mut self) -> bool {
        self.pos = self.step();
        self.pos.is_some()
    }

    /// Returns the index the scanner is positioned at.
    ///
    /// # Panics
    /// Panics unless the last call to [`advance`](Self::advance) returned
    /// `true`.
    #[track_caller]
    pub fn value(&self) -> usize {
        match self.pos {
            Some(index) => index,
            None => panic!("Scanner::value called without a current position"),
        }
    }

    fn step(&mut self) -> Option<usize> {
        if self.current.is_empty() {
            self.current = mem::take(&mut self.queued);
        }
        let range = &mut self.current;
        if range.is_empty() {
            return None;
        }
        match self.direction {
            Direction::Lifo => {
                let index = range.start;
                range.start += 1;
                Some(index)
            }
            Direction::Fifo => {
                range.end -= 1;
                Some(range.end)
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.advance() {
            self.pos
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.current.len() + self.queued.len();
        (len, Some(len))
    }
}

impl<'a> ExactSizeIterator for Scanner<'a> {}

impl<'a> FusedIterator for Scanner<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(capacity: usize, pushes: usize) -> Ring {
        let mut ring = Ring::new(capacity);
        for _ in 0..pushes {
            ring.force_push().unwrap();
        }
        ring
    }

    fn drain(mut scanner: Scanner) -> Vec<usize> {
        let mut seen = Vec::new();
        while scanner.advance() {
            seen.push(scanner.value());
        }
        seen
    }

    #[test]
    fn lifo_table() {
        assert_eq!(drain(filled(5, 13).scan_lifo()), vec![3, 4, 0, 1, 2]);
        assert_eq!(drain(filled(5, 6).scan_lifo()), vec![1, 2, 3, 4, 0]);
        assert_eq!(drain(filled(4, 13).scan_lifo()), vec![1, 2, 3, 0]);
        assert_eq!(drain(filled(4, 6).scan_lifo()), vec![2, 3, 0, 1]);
    }

    #[test]
    fn fifo_table() {
        assert_eq!(drain(filled(5, 13).scan_fifo()), vec![2, 1, 0, 4, 3]);
        assert_eq!(drain(filled(5, 6).scan_fifo()), vec![0, 4, 3, 2, 1]);
        assert_eq!(drain(filled(4, 13).scan_fifo()), vec![0, 3, 2, 1]);
        assert_eq!(drain(filled(4, 6).scan_fifo()), vec![1, 0, 3, 2]);
    }

    #[test]
    fn unwrapped_region() {
        let ring = filled(8, 3);
        assert_eq!(drain(ring.scan_lifo()), vec![0, 1, 2]);
        assert_eq!(drain(ring.scan_fifo()), vec![2, 1, 0]);
    }

    #[test]
    fn empty_ring() {
        let ring = Ring::new(6);
        let mut scanner = ring.scan_lifo();
        assert_eq!(scanner.len(), 0);
        assert!(!scanner.advance());
        assert!(!scanner.advance());
        assert!(ring.scan_fifo().next().is_none());
        assert!(Ring::new(0).scan_lifo().next().is_none());
    }

    #[test]
    fn exhausted_stays_exhausted() {
        let ring = filled(3, 4);
        let mut scanner = ring.scan_fifo();
        assert_eq!(scanner.len(), 3);
        assert_eq!(scanner.by_ref().count(), 3);
        assert!(!scanner.advance());
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn iterator_matches_explicit_walk() {
        let ring = filled(7, 11);
        let collected: Vec<usize> = ring.scan_lifo().collect();
        assert_eq!(collected, drain(ring.scan_lifo()));
        let mut scanner = ring.scan_lifo();
        scanner.next();
        assert_eq!(scanner.len(), 6);
    }

    #[test]
    #[should_panic]
    fn value_before_advance() {
        let ring = filled(4, 2);
        ring.scan_lifo().value();
    }

    #[test]
    #[should_panic]
    fn value_after_exhaustion() {
        let ring = filled(4, 1);
        let mut scanner = ring.scan_fifo();
        assert!(scanner.advance());
        assert!(!scanner.advance());
        scanner.value();
    }
}
