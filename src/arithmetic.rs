//! Arithmetic on [`DoubleWidth`], "$\text{mod } 2^{2 \cdot \text{BITS}(T)}$".
//!
//! Everything is expressed through the [`Uint`] operations of the halves, so
//! the same code runs at every level of composition: a 256-bit addition
//! propagates its carry from the low 128-bit half, whose own addition
//! propagated a carry from its low 64-bit half, and so on down to the machine word.
//!
//! Overflow is never an error. Like fixed-width unsigned integers, all carries
//! and borrows out of the full width are dropped, unless a `checked_*` or
//! `overflowing_*` variant is asked for.

use rand_core::RngCore;

use crate::{DoubleWidth, Uint};

mod add;
pub(crate) mod multiply;
mod subtract;

impl<T: Uint> Uint for DoubleWidth<T> {
    const BITS: u32 = 2 * T::BITS;
    const ZERO: Self = DoubleWidth::from_parts(T::ZERO, T::ZERO);
    const ONE: Self = DoubleWidth::from_parts(T::ONE, T::ZERO);
    const MAX: Self = DoubleWidth::from_parts(T::MAX, T::MAX);

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn widening_mul(self, rhs: Self) -> DoubleWidth<Self> {
        multiply::schoolbook(self, rhs)
    }

    fn truncate_from_u128(x: u128) -> Self {
        let lo = T::truncate_from_u128(x);
        let hi = T::truncate_from_u128(x.checked_shr(T::BITS).unwrap_or(0));
        DoubleWidth::from_parts(lo, hi)
    }

    fn low_u128(self) -> u128 {
        let hi = self.hi().low_u128().checked_shl(T::BITS).unwrap_or(0);
        hi | self.lo().low_u128()
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let lo = T::random(rng);
        let hi = T::random(rng);
        DoubleWidth::from_parts(lo, hi)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::XorShiftRng;
    use crate::{U128, U256};

    #[test]
    fn matches_native_u128() {
        let mut rng = XorShiftRng::default();
        for _ in 0..1_000 {
            let a = U128::random(&mut rng).low_u128();
            let b = U128::random(&mut rng).low_u128();

            let (x, y) = (U128::truncate_from_u128(a), U128::truncate_from_u128(b));
            assert_eq!((x + y).low_u128(), a.wrapping_add(b));
            assert_eq!((x - y).low_u128(), a.wrapping_sub(b));
            assert_eq!((x * y).low_u128(), a.wrapping_mul(b));
            assert_eq!(x < y, a < b);
        }
    }

    #[test]
    fn wide_truncation() {
        // 2^128 does not fit in 128 bits, but in 256
        let x = U256::truncate_from_u128(u128::MAX) + U256::ONE;
        assert_eq!(x.low_u128(), 0);
        assert!(!x.is_zero());
        assert_eq!(x.hi(), U128::ONE);
    }
}
