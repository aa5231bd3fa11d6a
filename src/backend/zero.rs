use super::Accounting;
use crate::error::RingError;

/// Accounting for rings of capacity 0, which would otherwise divide or mask
/// by zero.
///
/// Such a ring is full and empty at the same time: nothing can be pushed and
/// nothing can be shifted.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroRing;

impl Accounting for ZeroRing {
    #[inline]
    fn capacity(&self) -> usize {
        0
    }

    #[inline]
    fn size(&self) -> usize {
        0
    }

    #[inline]
    fn full(&self) -> bool {
        true
    }

    #[inline]
    fn empty(&self) -> bool {
        true
    }

    #[inline]
    fn mask(&self, _value: usize) -> usize {
        0
    }

    #[inline]
    fn start(&self) -> usize {
        0
    }

    #[inline]
    fn end(&self) -> usize {
        0
    }

    fn reset(&mut self) {}

    fn push(&mut self) -> Result<usize, RingError> {
        Err(RingError::Full)
    }

    fn shift(&mut self) -> Result<usize, RingError> {
        Err(RingError::Empty)
    }

    fn push_n(&mut self, _n: usize) -> Result<(usize, usize), RingError> {
        Err(RingError::Full)
    }

    fn shift_n(&mut self, _n: usize) -> Result<(usize, usize), RingError> {
        Err(RingError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meaningless() {
        let mut r = ZeroRing;
        for _ in 0..2 {
            assert!(r.empty());
            assert!(r.full());
            assert_eq!(r.size(), 0);
            assert_eq!(r.capacity(), 0);
            assert_eq!(r.mask(12345), 0);
            r.reset();
        }
    }

    #[test]
    fn refuses_everything() {
        let mut r = ZeroRing;
        assert_eq!(r.shift(), Err(RingError::Empty));
        assert_eq!(r.push(), Err(RingError::Full));
        assert_eq!(r.shift(), Err(RingError::Empty));
        assert_eq!(r.push_n(1), Err(RingError::Full));
        assert_eq!(r.shift_n(1), Err(RingError::Empty));
    }
}
