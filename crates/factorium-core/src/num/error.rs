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

use thiserror::Error;

/// The true product of two operands does not fit their shared width.
///
/// Carries both operands of the first overflowing multiplication. The
/// `Display` form is `"<lhs> * <rhs>"` in decimal.
///
/// # Examples
///
/// ```rust
/// # use factorium_core::num::error::OverflowError;
/// let err = OverflowError::new(120u8, 3u8);
/// assert_eq!(err.to_string(), "120 * 3");
/// assert_eq!(err.operands(), (120, 3));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("{lhs} * {rhs}")]
pub struct OverflowError<T> {
    lhs: T,
    rhs: T,
}

impl<T> OverflowError<T>
where
    T: Copy,
{
    /// Creates a new `OverflowError` for the product `lhs * rhs`.
    #[inline(always)]
    pub const fn new(lhs: T, rhs: T) -> Self {
        Self { lhs, rhs }
    }

    /// Returns the left operand.
    #[inline(always)]
    pub fn lhs(&self) -> T {
        self.lhs
    }

    /// Returns the right operand.
    #[inline(always)]
    pub fn rhs(&self) -> T {
        self.rhs
    }

    /// Returns both operands as `(lhs, rhs)`.
    #[inline(always)]
    pub fn operands(&self) -> (T, T) {
        (self.lhs, self.rhs)
    }
}
