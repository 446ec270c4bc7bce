use core::ops::{Add, AddAssign};

use crate::{DoubleWidth, Uint};

impl<T: Uint> AddAssign for DoubleWidth<T> {
    /// The carry out of the low half is detected by comparison: a wrapped sum
    /// is less than either addend. A carry out of the high half is dropped.
    #[inline]
    fn add_assign(&mut self, summand: Self) {
        let (lo, hi) = self.into_parts();
        let (s_lo, s_hi) = summand.into_parts();

        let sum_lo = lo.wrapping_add(s_lo);
        let carry = T::from_bool(sum_lo < lo);
        let sum_hi = hi.wrapping_add(s_hi).wrapping_add(carry);

        *self = DoubleWidth::from_parts(sum_lo, sum_hi);
    }
}

impl<T: Uint> Add for DoubleWidth<T> {
    type Output = Self;

    #[inline]
    fn add(self, summand: Self) -> Self::Output {
        let mut sum = self;
        sum += summand;
        sum
    }
}

impl<T: Uint> DoubleWidth<T> {
    /// `None` if the sum does not fit.
    pub fn checked_add(self, summand: Self) -> Option<Self> {
        let (sum, carry) = self.overflowing_add(summand);
        (!carry).then_some(sum)
    }
}
