use super::Accounting;
use crate::error::RingError;
use crate::utils::is_power_of_two;

/// Accounting for rings whose capacity is a power of two.
///
/// `read` and `write` run freely and are only masked on the way out. Since
/// `usize::MAX + 1` is a multiple of every power-of-two capacity, wrapping
/// the counters never disturbs the masked indexes or `write - read`.
#[derive(Clone, Debug)]
pub struct MaskRing {
    cap: usize,
    read: usize,
    // Invariant: `write.wrapping_sub(read) <= cap`
    write: usize,
}

impl MaskRing {
    pub fn new(cap: usize) -> MaskRing {
        debug_assert!(is_power_of_two(cap), "cap={} is not a power of two", cap);
        MaskRing { cap, read: 0, write: 0 }
    }
}

impl Accounting for MaskRing {
    #[inline]
    fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    fn size(&self) -> usize {
        self.write.wrapping_sub(self.read)
    }

    #[inline]
    fn mask(&self, value: usize) -> usize {
        value & (self.cap - 1)
    }

    #[inline]
    fn start(&self) -> usize {
        self.mask(self.read)
    }

    #[inline]
    fn end(&self) -> usize {
        self.mask(self.write)
    }

    fn reset(&mut self) {
        self.read = self.write;
    }

    fn push(&mut self) -> Result<usize, RingError> {
        if self.full() {
            return Err(RingError::Full);
        }
        let index = self.write;
        self.write = self.write.wrapping_add(1);
        Ok(self.mask(index))
    }

    fn shift(&mut self) -> Result<usize, RingError> {
        if self.empty() {
            return Err(RingError::Empty);
        }
        let index = self.read;
        self.read = self.read.wrapping_add(1);
        Ok(self.mask(index))
    }

    fn push_n(&mut self, n: usize) -> Result<(usize, usize), RingError> {
        if n > self.cap - self.size() {
            return Err(RingError::Full);
        }
        let start = self.write;
        self.write = self.write.wrapping_add(n);
        Ok((self.mask(start), self.mask(self.write)))
    }

    fn shift_n(&mut self, n: usize) -> Result<(usize, usize), RingError> {
        if n > self.size() {
            return Err(RingError::Empty);
        }
        let start = self.read;
        self.read = self.read.wrapping_add(n);
        Ok((self.mask(start), self.mask(self.read)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POWER: u32 = 16;
    const N: usize = 1 << POWER;

    #[test]
    fn push_all_then_shift_all() {
        let mut r = MaskRing::new(N);
        assert_eq!(r.shift(), Err(RingError::Empty));
        for i in 0..N {
            assert_eq!(r.push(), Ok(i));
        }
        assert_eq!(r.push(), Err(RingError::Full));
        for i in 0..N {
            assert_eq!(r.shift(), Ok(i));
        }
        assert_eq!(r.shift(), Err(RingError::Empty));
    }

    #[test]
    fn counters_survive_overflow() {
        let mut r = MaskRing { cap: 8, read: usize::MAX - 2, write: usize::MAX - 2 };
        assert!(r.empty());
        assert_eq!(r.push_n(6), Ok((5, 3)));
        assert_eq!(r.size(), 6);
        assert!(r.write < r.read);
        assert_eq!(r.shift(), Ok(5));
        assert_eq!(r.shift_n(5), Ok((6, 3)));
        assert!(r.empty());
        assert_eq!(r.push(), Ok(3));
    }

    #[test]
    fn bulk_failures_change_nothing() {
        let mut r = MaskRing::new(4);
        r.push_n(3).unwrap();
        assert_eq!(r.push_n(2), Err(RingError::Full));
        assert_eq!(r.shift_n(4), Err(RingError::Empty));
        assert_eq!(r.size(), 3);
        assert_eq!(r.start(), 0);
        assert_eq!(r.end(), 3);
    }

    #[test]
    fn reset_keeps_write_position() {
        let mut r = MaskRing::new(4);
        r.push_n(3).unwrap();
        r.reset();
        assert!(r.empty());
        assert_eq!(r.start(), 3);
        assert_eq!(r.push(), Ok(3));
    }
}
