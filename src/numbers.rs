use core::{fmt, hash::Hash};

use rand_core::RngCore;
use zeroize::Zeroize;

use crate::{Error, Result};

mod trait_implementations;

/// Fixed-width unsigned integer, either a native machine integer or a [`DoubleWidth`] of one.
///
/// All arithmetic is modulo $2^{\text{BITS}}$. Natives implement this by macro,
/// see [`BaseUint`][crate::BaseUint].
///
/// Carries and borrows are detected by comparison, never by hardware flags,
/// so every composition level can use the same logic on its halves.
pub trait Uint:
    Copy + Default + Eq + Ord + Hash + fmt::Debug + fmt::LowerHex + fmt::UpperHex + Zeroize
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;

    /// The product, truncated to `Self::BITS`.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// The full product, which always fits in twice the width.
    fn widening_mul(self, rhs: Self) -> DoubleWidth<Self>;

    /// A truncating addition wrapped around iff the sum is less than an addend.
    fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let sum = self.wrapping_add(rhs);
        (sum, sum < self)
    }

    /// A truncating subtraction wrapped around iff the difference exceeds the minuend.
    fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let difference = self.wrapping_sub(rhs);
        (difference, difference > self)
    }

    /// Carry or borrow bit as an integer.
    fn from_bool(bit: bool) -> Self {
        if bit { Self::ONE } else { Self::ZERO }
    }

    /// The lowest `Self::BITS` bits of `x` (all of `x` if `Self` is at least 128 bits).
    fn truncate_from_u128(x: u128) -> Self;

    /// The lowest 128 bits of `self`.
    fn low_u128(self) -> u128;

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// Unsigned integer with twice the bits of `T`, namely `hi * 2^BITS(T) + lo`.
///
/// Any pair of halves is a valid value. The derived `Default` is zero.
#[repr(C)]
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct DoubleWidth<T> {
    lo: T,
    hi: T,
}

impl<T: Copy> DoubleWidth<T> {
    pub const fn from_parts(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }

    /// Low half.
    pub const fn lo(&self) -> T {
        self.lo
    }

    /// High half.
    pub const fn hi(&self) -> T {
        self.hi
    }

    /// `(lo, hi)`
    pub const fn into_parts(self) -> (T, T) {
        (self.lo, self.hi)
    }
}

impl<T: Uint> DoubleWidth<T> {
    /// The low half, if the high half is zero.
    pub fn try_narrow(self) -> Result<T> {
        if self.hi.is_zero() {
            Ok(self.lo)
        } else {
            Err(Error::Overflow)
        }
    }
}

impl<T: Uint> From<T> for DoubleWidth<T> {
    fn from(lo: T) -> Self {
        Self { lo, hi: T::ZERO }
    }
}
