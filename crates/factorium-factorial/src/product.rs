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

//! # Multiplication Policies
//!
//! The factorial descent is written once, generic over how each reduction
//! step multiplies. `Wrapping` reduces modulo `2^width` and cannot fail
//! (`Error = Infallible`); `Checked` stops at the first step whose true
//! product does not fit and reports its operands.

use factorium_core::num::{error::OverflowError, numeric::UnsignedNumeric};
use std::convert::Infallible;

/// How a single reduction step multiplies two operands.
pub trait Multiplication<T>
where
    T: UnsignedNumeric,
{
    /// The failure a step can report.
    type Error;

    /// Human readable name of the policy.
    const NAME: &'static str;

    /// Multiplies `lhs` by `rhs`.
    fn multiply(lhs: T, rhs: T) -> Result<T, Self::Error>;
}

/// Unchecked multiplication; results beyond the range of `T` wrap silently.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Wrapping;

impl<T> Multiplication<T> for Wrapping
where
    T: UnsignedNumeric,
{
    type Error = Infallible;

    const NAME: &'static str = "wrapping";

    #[inline(always)]
    fn multiply(lhs: T, rhs: T) -> Result<T, Infallible> {
        Ok(lhs.wrapping_mul_val(rhs))
    }
}

/// Overflow-checked multiplication.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Checked;

impl<T> Multiplication<T> for Checked
where
    T: UnsignedNumeric,
{
    type Error = OverflowError<T>;

    const NAME: &'static str = "checked";

    #[inline(always)]
    fn multiply(lhs: T, rhs: T) -> Result<T, OverflowError<T>> {
        lhs.checked_mul_val(rhs)
    }
}

/// Extracts the value of a result that cannot fail.
#[inline(always)]
pub fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_never_fails() {
        assert_eq!(into_ok(<Wrapping as Multiplication<u8>>::multiply(6, 120)), 208);
    }

    #[test]
    fn test_checked_reports_operands() {
        let err = <Checked as Multiplication<u8>>::multiply(6, 120).unwrap_err();
        assert_eq!(err.operands(), (6, 120));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(<Wrapping as Multiplication<u32>>::NAME, "wrapping");
        assert_eq!(<Checked as Multiplication<u32>>::NAME, "checked");
    }
}
