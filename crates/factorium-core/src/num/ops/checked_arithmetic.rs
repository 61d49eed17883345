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

use crate::num::{constants::Zero, error::OverflowError, ops::wrapping_arithmetic::WrappingMulVal};
use core::ops::{Div, Mul};

/// Multiplies `lhs` by `rhs`, failing if the true product does not fit.
///
/// The product is computed with wraparound, then divided back by `lhs`.
/// Wrapping discards high bits, so the division recovers `rhs` only when
/// nothing was lost. A zero `lhs` never overflows and is never divided by.
///
/// # Errors
///
/// Returns `OverflowError` carrying `(lhs, rhs)` when the true product
/// exceeds the maximum value of `T`.
///
/// # Examples
///
/// ```rust
/// # use factorium_core::num::ops::checked_arithmetic::checked_multiply;
/// assert_eq!(checked_multiply(20u8, 10u8), Ok(200));
/// let err = checked_multiply(20u8, 20u8).unwrap_err();
/// assert_eq!(err.to_string(), "20 * 20");
/// ```
#[inline]
pub fn checked_multiply<T>(lhs: T, rhs: T) -> Result<T, OverflowError<T>>
where
    T: WrappingMulVal + Div<T, Output = T> + Zero + PartialEq + Copy,
{
    let product = lhs.wrapping_mul_val(rhs);
    if lhs != T::ZERO && product / lhs != rhs {
        return Err(OverflowError::new(lhs, rhs));
    }
    Ok(product)
}

/// A trait for types that support checked multiplication by value.
///
/// Unlike the primitive `checked_mul`, the failure carries both operands so
/// the caller can report which step overflowed.
///
/// # Examples
///
/// ```rust
/// # use factorium_core::num::ops::checked_arithmetic::CheckedMulVal;
/// let a: u8 = 120;
/// assert_eq!(a.checked_mul_val(2), Ok(240)); // No overflow
/// assert!(a.checked_mul_val(3).is_err()); // 360 > 255
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `OverflowError` if
    /// overflow occurs.
    fn checked_mul_val(self, v: Self) -> Result<Self, OverflowError<Self>>;
}

macro_rules! checked_mul_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Result<$t, OverflowError<$t>> {
                    checked_multiply(self, v)
                }
            }
        )*
    };
}

checked_mul_impl_val!(u8, u16, u32, u64, u128, usize);
