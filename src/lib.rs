//! Fixed-width unsigned integers, composed recursively from native machine words.
//!
//! A [`DoubleWidth<T>`] holds two `T` halves and behaves exactly like a native
//! unsigned integer of twice `T`'s width: addition, subtraction and multiplication
//! wrap modulo $2^{2 \cdot \text{BITS}(T)}$. Since `DoubleWidth<T>` is itself a [`Uint`],
//! wider integers are built by nesting, e.g. `DoubleWidth<DoubleWidth<u64>>` is 256 bits.
//! The [`aliases`] do this nesting starting from the configured machine word [`Digit`].
//!
//! Everything is `Copy`, allocation-free, and usable in `no_std`.
#![cfg_attr(not(test), no_std)]

pub mod aliases;
pub use aliases::*;
mod arithmetic;
mod digit;
pub use digit::{Digit, DoubleDigit};
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::{DoubleWidth, Uint};
mod primitive;
pub use primitive::BaseUint;

#[cfg(test)]
mod fixtures;
