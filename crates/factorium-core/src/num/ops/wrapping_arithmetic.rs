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

use core::ops::Mul;

/// A trait for types that support wrapping multiplication by value.
///
/// The result is the true product reduced modulo `2^width`; any carry beyond
/// the bit width of the type is discarded.
///
/// # Examples
///
/// ```rust
/// # use factorium_core::num::ops::wrapping_arithmetic::WrappingMulVal;
/// let a: u8 = 6;
/// let b: u8 = 120;
/// assert_eq!(a.wrapping_mul_val(b), 208); // 720 mod 256
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

macro_rules! wrapping_mul_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl WrappingMulVal for $t {
                #[inline(always)]
                fn wrapping_mul_val(self, v: $t) -> $t {
                    <$t>::wrapping_mul(self, v)
                }
            }
        )*
    };
}

wrapping_mul_impl_val!(u8, u16, u32, u64, u128, usize);
