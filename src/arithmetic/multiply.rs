use core::ops::{Mul, MulAssign};

use crate::{DoubleWidth, Uint};

/// Full product of two double-width numbers, by schoolbook multiplication of their halves.
///
/// With $x = x_1 B + x_0$ and $y = y_1 B + y_0$, where $B = 2^{\text{BITS}(T)}$:
///
/// $$xy = z_2 B^2 + z_1 B + z_0$$
///
/// where $z_0 = x_0 y_0$, $z_1 = x_1 y_0 + x_0 y_1$ and $z_2 = x_1 y_1$. Each partial
/// product is a `T`-widening multiplication, so this recurses until it reaches a native leaf.
///
/// The cross sum $z_1$ can overflow its double width, that carry has weight $B^3$.
/// The result never overflows, $xy < B^4$.
pub(crate) fn schoolbook<T: Uint>(x: DoubleWidth<T>, y: DoubleWidth<T>) -> DoubleWidth<DoubleWidth<T>> {
    let (x0, x1) = x.into_parts();
    let (y0, y1) = y.into_parts();

    let z0 = x0.widening_mul(y0);
    let z2 = x1.widening_mul(y1);

    let t = x1.widening_mul(y0);
    let z1 = t + x0.widening_mul(y1);
    let z1_carry = T::from_bool(z1 < t);

    // z1 straddles the two output words: its low half lands in the top of `lo`,
    // its high half (and carry) in the bottom of `hi`.
    let lo = z0 + DoubleWidth::from_parts(T::ZERO, z1.lo());
    let lo_carry = DoubleWidth::<T>::from_bool(lo < z0);
    let hi = z2 + DoubleWidth::from_parts(z1.hi(), z1_carry) + lo_carry;

    DoubleWidth::from_parts(lo, hi)
}

impl<T: Uint> MulAssign for DoubleWidth<T> {
    /// Truncating multiplication.
    ///
    /// Only $z_0$ is needed in full. Of the cross terms only the low halves survive,
    /// and $z_2$ is entirely beyond the width, so it is never computed.
    #[inline]
    fn mul_assign(&mut self, factor: Self) {
        let (x0, x1) = self.into_parts();
        let (y0, y1) = factor.into_parts();

        let (lo, hi) = x0.widening_mul(y0).into_parts();
        let cross = x1.wrapping_mul(y0).wrapping_add(x0.wrapping_mul(y1));

        *self = DoubleWidth::from_parts(lo, hi.wrapping_add(cross));
    }
}

impl<T: Uint> Mul for DoubleWidth<T> {
    type Output = Self;

    #[inline]
    fn mul(self, factor: Self) -> Self::Output {
        let mut product = self;
        product *= factor;
        product
    }
}

impl<T: Uint> DoubleWidth<T> {
    /// `None` if the product does not fit.
    pub fn checked_mul(self, factor: Self) -> Option<Self> {
        let product = self.widening_mul(factor);
        product.hi().is_zero().then_some(product.lo())
    }
}
