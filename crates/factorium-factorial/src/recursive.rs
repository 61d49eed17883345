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

//! # Recursive Factorial
//!
//! Descends from `n` to zero on the call stack and multiplies on the unwind,
//! so each step multiplies `n` by `(n - 1)!`. Stack depth is `n + 1`;
//! callers choosing this shape for large inputs are responsible for stack
//! capacity.

use crate::{
    monitor::{
        call_monitor::{CallMonitor, CallScope},
        no_op::NoOperationMonitor,
    },
    product::{Checked, Multiplication, Wrapping, into_ok},
};
use factorium_core::num::{error::OverflowError, numeric::UnsignedNumeric};

/// Function name reported to monitors.
pub const RECURSIVE_FACTORIAL: &str = "recursive_factorial";

/// Computes `n!` recursively with multiplication policy `P`, reporting every
/// level of the descent to `monitor`.
///
/// The descent bottoms out at zero, so a traced `3!` enters with `3, 2, 1, 0`.
/// Every level reports the location of the outermost caller. An overflow
/// stops the unwind at the first failing step; the exits of all open levels
/// are still reported.
///
/// # Errors
///
/// Returns `P::Error` from the first failing multiplication, which for
/// [`Checked`] is an `OverflowError` carrying `(n, (n - 1)!)`.
#[track_caller]
pub fn recursive_factorial<T, P, M>(n: T, monitor: &mut M) -> Result<T, P::Error>
where
    T: UnsignedNumeric,
    P: Multiplication<T>,
    M: CallMonitor + ?Sized,
{
    let mut scope = CallScope::enter(monitor, RECURSIVE_FACTORIAL, n);
    if n == T::ZERO {
        return Ok(T::ONE);
    }
    let rest = recursive_factorial::<T, P, M>(n - T::ONE, scope.monitor())?;
    P::multiply(n, rest)
}

/// Recursive factorial with wrapping multiplication.
///
/// # Examples
///
/// ```rust
/// # use factorium_factorial::recursive::recursive_wrapping;
/// assert_eq!(recursive_wrapping(5u8), 120);
/// assert_eq!(recursive_wrapping(6u8), 208); // 720 mod 256
/// ```
#[inline]
pub fn recursive_wrapping<T>(n: T) -> T
where
    T: UnsignedNumeric,
{
    into_ok(recursive_factorial::<T, Wrapping, _>(
        n,
        &mut NoOperationMonitor::new(),
    ))
}

/// Recursive factorial with overflow-checked multiplication.
///
/// # Errors
///
/// Returns `OverflowError` when `n!` does not fit in `T`.
///
/// # Examples
///
/// ```rust
/// # use factorium_factorial::recursive::recursive_checked;
/// assert_eq!(recursive_checked(5u8), Ok(120));
/// assert_eq!(recursive_checked(6u8).unwrap_err().to_string(), "6 * 120");
/// ```
#[inline]
pub fn recursive_checked<T>(n: T) -> Result<T, OverflowError<T>>
where
    T: UnsignedNumeric,
{
    recursive_factorial::<T, Checked, _>(n, &mut NoOperationMonitor::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::recording::{RecordingMonitor, TraceEvent};

    #[test]
    fn test_base_cases() {
        assert_eq!(recursive_wrapping(0u8), 1);
        assert_eq!(recursive_wrapping(1u8), 1);
        assert_eq!(recursive_checked(0u64), Ok(1));
        assert_eq!(recursive_checked(1u64), Ok(1));
    }

    #[test]
    fn test_small_values() {
        assert_eq!(recursive_wrapping(5u16), 120);
        assert_eq!(recursive_checked(5u32), Ok(120));
        assert_eq!(recursive_checked(10u32), Ok(3_628_800));
        assert_eq!(recursive_checked(20u64), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_wrapping_u8_six() {
        assert_eq!(recursive_wrapping(6u8), 208);
    }

    #[test]
    fn test_checked_u8_six_reports_unwind_operands() {
        let err = recursive_checked(6u8).unwrap_err();
        assert_eq!(err.operands(), (6, 120));
    }

    #[test]
    fn test_checked_u64_twenty_one_overflows() {
        let err = recursive_checked(21u64).unwrap_err();
        assert_eq!(err.operands(), (21, 2_432_902_008_176_640_000));
    }

    #[test]
    fn test_traced_enters_once_per_level() {
        let mut recorder = RecordingMonitor::new();
        let result = recursive_factorial::<u8, Checked, _>(4, &mut recorder);
        assert_eq!(result, Ok(24));
        assert_eq!(recorder.entries(), 5);
        assert!(recorder.is_balanced());

        let arguments: Vec<&str> = recorder
            .events()
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Enter(site) => Some(site.argument()),
                TraceEvent::Exit(_) => None,
            })
            .collect();
        assert_eq!(arguments, vec!["4", "3", "2", "1", "0"]);
    }

    #[test]
    fn test_traced_zero_enters_once() {
        let mut recorder = RecordingMonitor::new();
        let result = recursive_factorial::<u8, Checked, _>(0, &mut recorder);
        assert_eq!(result, Ok(1));
        assert_eq!(recorder.entries(), 1);
        assert!(recorder.is_balanced());
    }

    #[test]
    fn test_traced_levels_share_the_outer_call_site() {
        let mut recorder = RecordingMonitor::new();
        let line = line!() + 1;
        let _ = recursive_factorial::<u32, Wrapping, _>(3, &mut recorder);
        for event in recorder.events() {
            if let TraceEvent::Enter(site) = event {
                assert_eq!(site.function(), RECURSIVE_FACTORIAL);
                assert_eq!(site.location().line(), line);
            }
        }
    }

    #[test]
    fn test_traced_overflow_still_balanced() {
        let mut recorder = RecordingMonitor::new();
        let result = recursive_factorial::<u8, Checked, _>(7, &mut recorder);
        assert_eq!(result.unwrap_err().operands(), (6, 120));
        assert_eq!(recorder.entries(), 8);
        assert!(recorder.is_balanced());
    }

    #[test]
    fn test_tracing_does_not_change_result() {
        for n in 0u16..=12 {
            let mut recorder = RecordingMonitor::new();
            let traced = into_ok(recursive_factorial::<u16, Wrapping, _>(n, &mut recorder));
            assert_eq!(traced, recursive_wrapping(n));
        }
    }
}
