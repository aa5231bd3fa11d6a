use super::Accounting;
use crate::error::RingError;
use crate::utils::wrap_add;

/// Accounting for rings of arbitrary non-zero capacity.
///
/// Keeps the read position already wrapped into `[0, cap)` and the number of
/// occupied slots; every index is derived with a remainder.
#[derive(Clone, Debug)]
pub struct ModuloRing {
    cap: usize,
    // Invariant: `read < cap`
    read: usize,
    // Invariant: `length <= cap`
    length: usize,
}

impl ModuloRing {
    pub fn new(cap: usize) -> ModuloRing {
        debug_assert!(cap > 0, "zero capacity must use ZeroRing");
        ModuloRing { cap, read: 0, length: 0 }
    }

    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.cap)
    }
}

impl Accounting for ModuloRing {
    #[inline]
    fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    fn size(&self) -> usize {
        self.length
    }

    #[inline]
    fn mask(&self, value: usize) -> usize {
        value % self.cap
    }

    #[inline]
    fn start(&self) -> usize {
        self.read
    }

    #[inline]
    fn end(&self) -> usize {
        self.wrap_add(self.read, self.length)
    }

    fn reset(&mut self) {
        self.read = self.end();
        self.length = 0;
    }

    fn push(&mut self) -> Result<usize, RingError> {
        if self.full() {
            return Err(RingError::Full);
        }
        let index = self.end();
        self.length += 1;
        Ok(index)
    }

    fn shift(&mut self) -> Result<usize, RingError> {
        if self.empty() {
            return Err(RingError::Empty);
        }
        let index = self.read;
        self.read = self.wrap_add(self.read, 1);
        self.length -= 1;
        Ok(index)
    }

    fn push_n(&mut self, n: usize) -> Result<(usize, usize), RingError> {
        if n > self.cap - self.length {
            return Err(RingError::Full);
        }
        let start = self.end();
        self.length += n;
        Ok((start, self.end()))
    }

    fn shift_n(&mut self, n: usize) -> Result<(usize, usize), RingError> {
        if n > self.length {
            return Err(RingError::Empty);
        }
        let start = self.read;
        self.read = self.wrap_add(self.read, n);
        self.length -= n;
        Ok((start, self.read))
    }
}
