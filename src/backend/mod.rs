//! The accountants behind a `Ring`.
//!
//! Every backend answers the same questions about the same logical state (a
//! read position plus an occupied length); they differ only in how indexes
//! are wrapped into `[0, capacity)`.

mod mask;
mod modulo;
mod zero;

pub use self::mask::MaskRing;
pub use self::modulo::ModuloRing;
pub use self::zero::ZeroRing;

use crate::error::RingError;
use crate::utils::is_power_of_two;

/// The accounting contract shared by all backends.
///
/// Bulk operations report the touched run as raw masked `(start, end)`
/// bounds. `end` is not necessarily greater than `start`: the run may wrap
/// around zero, and a run covering the whole ring has `start == end`.
/// A failed bulk operation changes nothing.
pub trait Accounting {
    fn capacity(&self) -> usize;
    fn size(&self) -> usize;

    #[inline]
    fn full(&self) -> bool {
        self.size() == self.capacity()
    }

    #[inline]
    fn empty(&self) -> bool {
        self.size() == 0
    }

    /// Reduces `value` to an index in `[0, capacity)`.
    fn mask(&self, value: usize) -> usize;

    /// Index of the oldest occupied slot; arbitrary if empty.
    fn start(&self) -> usize;

    /// Masked index one past the newest occupied slot.
    fn end(&self) -> usize;

    fn reset(&mut self);

    fn push(&mut self) -> Result<usize, RingError>;
    fn shift(&mut self) -> Result<usize, RingError>;

    fn push_n(&mut self, n: usize) -> Result<(usize, usize), RingError>;
    fn shift_n(&mut self, n: usize) -> Result<(usize, usize), RingError>;
}

/// Which accountant a ring was built with.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Capacity 0.
    Zero,
    /// Power-of-two capacity, wrapped with a bitmask.
    Mask,
    /// Any other capacity, wrapped with a remainder.
    Modulo,
}

#[derive(Clone, Debug)]
pub enum Backend {
    Zero(ZeroRing),
    Mask(MaskRing),
    Modulo(ModuloRing),
}

macro_rules! dispatch {
    ($backend:expr, $r:ident => $body:expr) => {
        match $backend {
            Backend::Zero($r) => $body,
            Backend::Mask($r) => $body,
            Backend::Modulo($r) => $body,
        }
    };
}

impl Backend {
    /// Picks the cheapest accountant able to handle `capacity`.
    pub fn for_capacity(capacity: usize) -> Backend {
        if capacity == 0 {
            Backend::Zero(ZeroRing)
        } else if is_power_of_two(capacity) {
            Backend::Mask(MaskRing::new(capacity))
        } else {
            Backend::Modulo(ModuloRing::new(capacity))
        }
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        match *self {
            Backend::Zero(_) => Kind::Zero,
            Backend::Mask(_) => Kind::Mask,
            Backend::Modulo(_) => Kind::Modulo,
        }
    }
}

impl Accounting for Backend {
    #[inline]
    fn capacity(&self) -> usize {
        dispatch!(self, r => r.capacity())
    }

    #[inline]
    fn size(&self) -> usize {
        dispatch!(self, r => r.size())
    }

    #[inline]
    fn full(&self) -> bool {
        dispatch!(self, r => r.full())
    }

    #[inline]
    fn empty(&self) -> bool {
        dispatch!(self, r => r.empty())
    }

    #[inline]
    fn mask(&self, value: usize) -> usize {
        dispatch!(self, r => r.mask(value))
    }

    #[inline]
    fn start(&self) -> usize {
        dispatch!(self, r => r.start())
    }

    #[inline]
    fn end(&self) -> usize {
        dispatch!(self, r => r.end())
    }

    #[inline]
    fn reset(&mut self) {
        dispatch!(self, r => r.reset())
    }

    #[inline]
    fn push(&mut self) -> Result<usize, RingError> {
        dispatch!(self, r => r.push())
    }

    #[inline]
    fn shift(&mut self) -> Result<usize, RingError> {
        dispatch!(self, r => r.shift())
    }

    #[inline]
    fn push_n(&mut self, n: usize) -> Result<(usize, usize), RingError> {
        dispatch!(self, r => r.push_n(n))
    }

    #[inline]
    fn shift_n(&mut self, n: usize) -> Result<(usize, usize), RingError> {
        dispatch!(self, r => r.shift_n(n))
    }
}
