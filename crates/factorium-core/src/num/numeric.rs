// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Unsigned Numeric Trait
//!
//! Unified bounds for every generic function in the workspace that accepts
//! "any fixed-width unsigned integer". `UnsignedNumeric` collects the
//! intrinsic traits (`PrimInt`, `Unsigned`), the constant traits and the
//! by-value multiplication traits into a single alias, so the "unsigned only"
//! constraint is checked at compile time rather than at runtime.
//!
//! Implemented for `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.

use std::hash::Hash;

use crate::num::{
    constants::{One, Zero},
    ops::{checked_arithmetic::CheckedMulVal, wrapping_arithmetic::WrappingMulVal},
};
use num_traits::{PrimInt, Unsigned};

/// A trait alias for the unsigned integer types accepted by factorial.
///
/// Signed integers are rejected at compile time:
///
/// ```compile_fail
/// # use factorium_core::num::numeric::UnsignedNumeric;
/// fn accepts<T: UnsignedNumeric>(_: T) {}
/// accepts(-1i32);
/// ```
pub trait UnsignedNumeric:
    PrimInt
    + Unsigned
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + One
    + WrappingMulVal
    + CheckedMulVal
    + Send
    + Sync
    + Hash
{
}

impl<T> UnsignedNumeric for T where
    T: PrimInt
        + Unsigned
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + One
        + WrappingMulVal
        + CheckedMulVal
        + Send
        + Sync
        + Hash
{
}
