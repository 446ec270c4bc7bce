//! Native machine integers as leaves of the composition.

use rand_core::RngCore;

use crate::arithmetic::multiply::schoolbook;
use crate::{DoubleWidth, Error, Result, Uint};

/// A native unsigned machine integer (u8, u16, u32 or u64).
///
/// Only these have division, which is the machine's own.
pub trait BaseUint: Uint {
    /// `(self / divisor, self % divisor)`
    ///
    /// Panics if `divisor` is zero, just like native division does.
    fn divmod(self, divisor: Self) -> (Self, Self);

    /// Like [`divmod`][BaseUint::divmod], with an error instead of the panic.
    fn checked_divmod(self, divisor: Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.divmod(divisor))
    }
}

macro_rules! base_uint {
    (@uint $t:ty, |$a:ident, $b:ident| $widening_mul:block) => {
        impl Uint for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn widening_mul(self, rhs: Self) -> DoubleWidth<Self> {
                let ($a, $b) = (self, rhs);
                $widening_mul
            }

            #[inline]
            fn truncate_from_u128(x: u128) -> Self {
                x as $t
            }

            #[inline]
            fn low_u128(self) -> u128 {
                self as u128
            }

            fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
                rng.next_u64() as $t
            }
        }

        impl BaseUint for $t {
            #[inline]
            fn divmod(self, divisor: Self) -> (Self, Self) {
                (self / divisor, self % divisor)
            }
        }
    };
    // The native double-width type holds the full product.
    ($t:ty, widen $wide:ty) => {
        base_uint!(@uint $t, |a, b| {
            DoubleWidth::from((a as $wide) * (b as $wide))
        });
    };
    // No native double-width type, multiply the halves.
    ($t:ty, split $half:ty) => {
        base_uint!(@uint $t, |a, b| {
            let product = schoolbook(DoubleWidth::<$half>::from(a), DoubleWidth::<$half>::from(b));
            let (lo, hi) = product.into_parts();
            DoubleWidth::from_parts(<$t>::from(lo), <$t>::from(hi))
        });
    };
}

// A native type widens whenever a native type of twice its width exists.
// u128 is not a machine word, so u64 always splits. The `u16` layout
// forces u16 and u32 onto the split path as well, see `crate::Digit`.
base_uint!(u8, widen u16);

#[cfg(not(feature = "u16"))]
base_uint!(u16, widen u32);
#[cfg(feature = "u16")]
base_uint!(u16, split u8);

#[cfg(not(feature = "u16"))]
base_uint!(u32, widen u64);
#[cfg(feature = "u16")]
base_uint!(u32, split u16);

base_uint!(u64, split u32);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn widening_u8_exhaustive() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                let product = Uint::widening_mul(a, b);
                assert_eq!(u16::from(product), a as u16 * b as u16);
                assert_eq!(Uint::wrapping_mul(a, b), product.lo());
            }
        }
    }

    #[test]
    fn widening_u16() {
        // 0xFFFF * 0xFFFF = 0xFFFE_0001, truncated: 0x0001
        let product = Uint::widening_mul(0xFFFFu16, 0xFFFF);
        assert_eq!(u32::from(product), 0xFFFE_0001);
        assert_eq!(product.hi(), 0xFFFE);
        assert_eq!(product.lo(), 0x0001);
        assert_eq!(Uint::wrapping_mul(0xFFFFu16, 0xFFFF), 0x0001);
    }

    #[test]
    fn widening_u32() {
        let product = Uint::widening_mul(u32::MAX, u32::MAX);
        assert_eq!(u64::from(product), 0xFFFF_FFFE_0000_0001);

        let product = Uint::widening_mul(0x1234_5678u32, 0x9ABC_DEF0);
        assert_eq!(u64::from(product), 0x1234_5678u64 * 0x9ABC_DEF0);
    }

    // 32-bit targets still widen u32 through native u64.
    #[cfg(not(feature = "u16"))]
    #[test]
    fn widening_u32_is_native() {
        let mut rng = crate::fixtures::XorShiftRng::default();
        for _ in 0..10_000 {
            let a = <u32 as Uint>::random(&mut rng);
            let b = <u32 as Uint>::random(&mut rng);
            let native = DoubleWidth::<u32>::from(a as u64 * b as u64);
            assert_eq!(Uint::widening_mul(a, b), native);

            let (c, d) = (a as u16, b as u16);
            assert_eq!(Uint::widening_mul(c, d), DoubleWidth::<u16>::from(c as u32 * d as u32));
        }
    }

    #[test]
    fn widening_u64() {
        let cases = [
            (0u64, 0u64),
            (1, u64::MAX),
            (u64::MAX, u64::MAX),
            (1 << 32, 1 << 32),
            (0xFFFF_FFFF, 0x1_0000_0001),
            (0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210),
        ];
        for &(a, b) in cases.iter() {
            let product = Uint::widening_mul(a, b);
            assert_eq!(u128::from(product), a as u128 * b as u128);
            assert_eq!(product.lo(), Uint::wrapping_mul(a, b));
        }
    }

    #[test]
    fn widening_u64_random() {
        let mut rng = crate::fixtures::XorShiftRng::default();
        for _ in 0..10_000 {
            let a = <u64 as Uint>::random(&mut rng);
            let b = <u64 as Uint>::random(&mut rng);
            assert_eq!(u128::from(Uint::widening_mul(a, b)), a as u128 * b as u128);
        }
    }

    #[cfg(feature = "extended-testing")]
    #[test]
    fn widening_u16_sweep() {
        for a in (0..=u16::MAX).step_by(7) {
            for b in 0..=u16::MAX {
                assert_eq!(u32::from(Uint::widening_mul(a, b)), a as u32 * b as u32);
            }
        }
    }

    #[test]
    fn wrapping() {
        assert_eq!(Uint::wrapping_add(u8::MAX, 1), 0);
        assert_eq!(Uint::wrapping_sub(0u32, 1), u32::MAX);
        assert_eq!(Uint::overflowing_add(u16::MAX, 2), (1, true));
        assert_eq!(Uint::overflowing_add(1u16, 2), (3, false));
        assert_eq!(Uint::overflowing_sub(0u64, 1), (u64::MAX, true));
        assert_eq!(Uint::overflowing_sub(5u64, 5), (0, false));
    }

    #[test]
    fn divmod() {
        assert_eq!(17u8.divmod(5), (3, 2));
        assert_eq!(u64::MAX.divmod(u64::MAX), (1, 0));
        assert_eq!(0u32.divmod(7), (0, 0));
        assert_eq!(1234u16.checked_divmod(10), Ok((123, 4)));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn divmod_by_zero() {
        let zero = core::hint::black_box(0u32);
        5u32.divmod(zero);
    }

    #[test]
    fn checked_divmod_by_zero() {
        assert_eq!(5u32.checked_divmod(0), Err(Error::DivisionByZero));
        assert_eq!(u64::MAX.checked_divmod(0), Err(Error::DivisionByZero));
    }
}
