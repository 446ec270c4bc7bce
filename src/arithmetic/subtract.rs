use core::ops::{Neg, Sub, SubAssign};

use crate::{DoubleWidth, Uint};

impl<T: Uint> SubAssign for DoubleWidth<T> {
    /// Mirrors addition: a wrapped difference exceeds the minuend
    /// iff the low half borrowed.
    #[inline]
    fn sub_assign(&mut self, subtrahend: Self) {
        let (lo, hi) = self.into_parts();
        let (s_lo, s_hi) = subtrahend.into_parts();

        let difference_lo = lo.wrapping_sub(s_lo);
        let borrow = T::from_bool(difference_lo > lo);
        let difference_hi = hi.wrapping_sub(s_hi).wrapping_sub(borrow);

        *self = DoubleWidth::from_parts(difference_lo, difference_hi);
    }
}

impl<T: Uint> Sub for DoubleWidth<T> {
    type Output = Self;

    #[inline]
    fn sub(self, subtrahend: Self) -> Self::Output {
        let mut difference = self;
        difference -= subtrahend;
        difference
    }
}

/// Two's complement, $2^{\text{BITS}} - x$.
impl<T: Uint> Neg for DoubleWidth<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::ZERO - self
    }
}

impl<T: Uint> DoubleWidth<T> {
    /// `None` if the subtrahend is larger.
    pub fn checked_sub(self, subtrahend: Self) -> Option<Self> {
        let (difference, borrow) = self.overflowing_sub(subtrahend);
        (!borrow).then_some(difference)
    }
}
