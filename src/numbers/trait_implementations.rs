use core::{cmp::Ordering, fmt};

use zeroize::Zeroize;

use super::{DoubleWidth, Uint};

// The halves are stored low first, so the derived ordering would compare
// the low halves first. Numeric order starts at the high half.
impl<T: Ord> Ord for DoubleWidth<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hi.cmp(&other.hi).then_with(|| self.lo.cmp(&other.lo))
    }
}

impl<T: Ord> PartialOrd for DoubleWidth<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Zeroize> Zeroize for DoubleWidth<T> {
    fn zeroize(&mut self) {
        self.lo.zeroize();
        self.hi.zeroize();
    }
}

/// Always all `BITS / 4` hex digits, formatter flags are ignored.
impl<T: Uint> fmt::LowerHex for DoubleWidth<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (T::BITS / 4) as usize;
        write!(f, "{:0width$x}{:0width$x}", self.hi, self.lo, width = width)
    }
}

/// Always all `BITS / 4` hex digits, formatter flags are ignored.
impl<T: Uint> fmt::UpperHex for DoubleWidth<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (T::BITS / 4) as usize;
        write!(f, "{:0width$X}{:0width$X}", self.hi, self.lo, width = width)
    }
}

impl<T: Uint> fmt::Debug for DoubleWidth<T> {
    #[cfg(feature = "hex-debug")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self)
    }

    #[cfg(not(feature = "hex-debug"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleWidth")
            .field("lo", &self.lo)
            .field("hi", &self.hi)
            .finish()
    }
}

// Lossless conversions between native integers and pairs of their halves.
macro_rules! native_halves {
    ($wide:ty, $half:ty) => {
        impl From<$wide> for DoubleWidth<$half> {
            #[inline]
            fn from(x: $wide) -> Self {
                Self { lo: x as $half, hi: (x >> <$half>::BITS) as $half }
            }
        }

        impl From<DoubleWidth<$half>> for $wide {
            #[inline]
            fn from(x: DoubleWidth<$half>) -> Self {
                ((x.hi as $wide) << <$half>::BITS) | x.lo as $wide
            }
        }
    };
}

native_halves!(u16, u8);
native_halves!(u32, u16);
native_halves!(u64, u32);
native_halves!(u128, u64);

#[cfg(feature = "ct-maybe")]
mod constant_time {
    use subtle::{
        Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
    };

    use super::DoubleWidth;

    impl<T: ConstantTimeEq> ConstantTimeEq for DoubleWidth<T> {
        fn ct_eq(&self, other: &Self) -> Choice {
            self.lo.ct_eq(&other.lo) & self.hi.ct_eq(&other.hi)
        }
    }

    impl<T: ConditionallySelectable> ConditionallySelectable for DoubleWidth<T> {
        fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
            Self {
                lo: T::conditional_select(&a.lo, &b.lo, choice),
                hi: T::conditional_select(&a.hi, &b.hi, choice),
            }
        }
    }

    impl<T: ConstantTimeEq + ConstantTimeGreater> ConstantTimeGreater for DoubleWidth<T> {
        fn ct_gt(&self, other: &Self) -> Choice {
            self.hi.ct_gt(&other.hi) | (self.hi.ct_eq(&other.hi) & self.lo.ct_gt(&other.lo))
        }
    }

    impl<T: ConstantTimeEq + ConstantTimeGreater> ConstantTimeLess for DoubleWidth<T> {}
}
