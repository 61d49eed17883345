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

//! # Iterative Factorial
//!
//! Multiplies into an accumulator while counting `n` down to 1, so each step
//! multiplies the running product by the current counter. Constant stack
//! depth; a traced call is entered exactly once.

use crate::{
    monitor::{
        call_monitor::{CallMonitor, CallScope},
        no_op::NoOperationMonitor,
    },
    product::{Checked, Multiplication, Wrapping, into_ok},
};
use factorium_core::num::{error::OverflowError, numeric::UnsignedNumeric};

/// Function name reported to monitors.
pub const ITERATIVE_FACTORIAL: &str = "iterative_factorial";

/// Computes `n!` iteratively with multiplication policy `P`, reporting the
/// call to `monitor`.
///
/// Once the accumulator is zero every further product stays zero, so the
/// countdown stops there. Only wrapping multiplication can reach zero.
///
/// # Errors
///
/// Returns `P::Error` from the first failing multiplication, which for
/// [`Checked`] is an `OverflowError` carrying `(accumulator, n)`.
#[track_caller]
pub fn iterative_factorial<T, P, M>(mut n: T, monitor: &mut M) -> Result<T, P::Error>
where
    T: UnsignedNumeric,
    P: Multiplication<T>,
    M: CallMonitor + ?Sized,
{
    let _scope = CallScope::enter(monitor, ITERATIVE_FACTORIAL, n);
    let mut accumulator = T::ONE;
    while n > T::ONE {
        accumulator = P::multiply(accumulator, n)?;
        if accumulator == T::ZERO {
            break;
        }
        n = n - T::ONE;
    }
    Ok(accumulator)
}

/// Iterative factorial with wrapping multiplication.
///
/// # Examples
///
/// ```rust
/// # use factorium_factorial::iterative::iterative_wrapping;
/// assert_eq!(iterative_wrapping(5u8), 120);
/// assert_eq!(iterative_wrapping(6u8), 208); // 720 mod 256
/// ```
#[inline]
pub fn iterative_wrapping<T>(n: T) -> T
where
    T: UnsignedNumeric,
{
    into_ok(iterative_factorial::<T, Wrapping, _>(
        n,
        &mut NoOperationMonitor::new(),
    ))
}

/// Iterative factorial with overflow-checked multiplication.
///
/// # Errors
///
/// Returns `OverflowError` when `n!` does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// # use factorium_factorial::iterative::iterative_checked;
/// assert_eq!(iterative_checked(5u8), Ok(120));
/// assert_eq!(iterative_checked(6u8).unwrap_err().to_string(), "120 * 3");
/// ```
#[inline]
pub fn iterative_checked<T>(n: T) -> Result<T, OverflowError<T>>
where
    T: UnsignedNumeric,
{
    iterative_factorial::<T, Checked, _>(n, &mut NoOperationMonitor::new())
}
