//! Type aliases by bit-size, composed from the configured [`Digit`][crate::Digit].
//!
//! The same alias has a different representation per layout, e.g. `U64` is
//! `u64` with 64-bit digits but `DoubleWidth<u32>` with 32-bit digits.
//! Its values and arithmetic are identical either way.

use crate::DoubleWidth;
pub use aliases::*;

pub type U256 = DoubleWidth<U128>;
pub type U512 = DoubleWidth<U256>;
pub type U1024 = DoubleWidth<U512>;
pub type U2048 = DoubleWidth<U1024>;
pub type U4096 = DoubleWidth<U2048>;

// 16-bit
#[cfg(feature = "u16")]
mod aliases {
    use super::*;

    pub type U8 = u8;
    pub type U16 = u16;
    pub type U32 = DoubleWidth<U16>;
    pub type U64 = DoubleWidth<U32>;
    pub type U128 = DoubleWidth<U64>;
}

// 32-bit
#[cfg(feature = "u32")]
mod aliases {
    use super::*;

    pub type U8 = u8;
    pub type U16 = u16;
    pub type U32 = u32;
    pub type U64 = DoubleWidth<U32>;
    pub type U128 = DoubleWidth<U64>;
}

// 64-bit
#[cfg(feature = "u64")]
mod aliases {
    use super::*;

    pub type U8 = u8;
    pub type U16 = u16;
    pub type U32 = u32;
    pub type U64 = u64;
    pub type U128 = DoubleWidth<U64>;
}
