use crate::DoubleWidth;

/// A word on the machine, the leaf of every [`aliases`][crate::aliases] composite.
///
/// Feature `u64` uses 64-bit digits, `u32` 32-bit digits even on 64-bit architectures,
/// and `u16` 16-bit digits. Without any of them, `build.rs` picks the target's pointer width.
///
/// With `u32` or `u64`, [`Uint::widening_mul`][crate::Uint::widening_mul] widens u8, u16
/// and u32 natively, only u64 falls back to schoolbook multiplication over its halves.
/// Feature `u16` is the testing layout, it pushes u16 and u32 onto that fallback too.
pub type Digit = digit::Digit;

/// Two [`Digit`]s.
pub type DoubleDigit = DoubleWidth<Digit>;

#[cfg(not(any(feature = "u16", feature = "u32", feature = "u64")))]
compile_error!("Either feature u16, u32 or u64!");

#[cfg(any(
    all(feature = "u16", feature = "u32"),
    all(feature = "u16", feature = "u64"),
    all(feature = "u32", feature = "u64"),
))]
compile_error!("Only one of features u16, u32 and u64!");

#[cfg(feature = "u16")]
mod digit {
    pub type Digit = u16;
}

#[cfg(feature = "u32")]
mod digit {
    pub type Digit = u32;
}

#[cfg(feature = "u64")]
mod digit {
    pub type Digit = u64;
}
