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

//! # Factorial Variants
//!
//! Every combination of the two control-flow shapes, the two multiplication
//! behaviors and optional tracing. A variant is named by a short code: `r`
//! (recursive) or `i` (iterative), then `c` if checked, then `l` if traced.
//!
//! | code  | shape     | arithmetic | traced |
//! |-------|-----------|------------|--------|
//! | `r`   | recursive | wrapping   | no     |
//! | `rl`  | recursive | wrapping   | yes    |
//! | `rc`  | recursive | checked    | no     |
//! | `rcl` | recursive | checked    | yes    |
//! | `i`   | iterative | wrapping   | no     |
//! | `il`  | iterative | wrapping   | yes    |
//! | `ic`  | iterative | checked    | no     |
//! | `icl` | iterative | checked    | yes    |

use crate::{
    iterative::iterative_factorial,
    monitor::{call_monitor::CallMonitor, no_op::NoOperationMonitor},
    product::{Checked, Wrapping, into_ok},
    recursive::recursive_factorial,
};
use factorium_core::num::{error::OverflowError, numeric::UnsignedNumeric};
use std::str::FromStr;
use thiserror::Error;

/// Control-flow shape of the descent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Shape {
    Recursive,
    Iterative,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Recursive => write!(f, "recursive"),
            Shape::Iterative => write!(f, "iterative"),
        }
    }
}

/// Multiplication behavior of each reduction step.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Arithmetic {
    Wrapping,
    Checked,
}

impl std::fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arithmetic::Wrapping => write!(f, "wrapping"),
            Arithmetic::Checked => write!(f, "checked"),
        }
    }
}

/// A variant code could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown variant code `{0}`, expected one of r, rl, rc, rcl, i, il, ic, icl")]
pub struct ParseVariantError(String);

/// One combination of shape, arithmetic and tracing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Variant {
    shape: Shape,
    arithmetic: Arithmetic,
    traced: bool,
}

impl Variant {
    /// All eight variants in code order `r, rl, rc, rcl, i, il, ic, icl`.
    pub const ALL: [Variant; 8] = [
        Variant::new(Shape::Recursive, Arithmetic::Wrapping, false),
        Variant::new(Shape::Recursive, Arithmetic::Wrapping, true),
        Variant::new(Shape::Recursive, Arithmetic::Checked, false),
        Variant::new(Shape::Recursive, Arithmetic::Checked, true),
        Variant::new(Shape::Iterative, Arithmetic::Wrapping, false),
        Variant::new(Shape::Iterative, Arithmetic::Wrapping, true),
        Variant::new(Shape::Iterative, Arithmetic::Checked, false),
        Variant::new(Shape::Iterative, Arithmetic::Checked, true),
    ];

    /// Creates a new `Variant`.
    #[inline(always)]
    pub const fn new(shape: Shape, arithmetic: Arithmetic, traced: bool) -> Self {
        Self {
            shape,
            arithmetic,
            traced,
        }
    }

    /// Returns the control-flow shape.
    #[inline(always)]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the multiplication behavior.
    #[inline(always)]
    pub fn arithmetic(&self) -> Arithmetic {
        self.arithmetic
    }

    /// Returns `true` if the variant reports calls to its monitor.
    #[inline(always)]
    pub fn is_traced(&self) -> bool {
        self.traced
    }

    /// Returns the same variant with tracing switched on or off.
    #[inline(always)]
    pub fn with_tracing(self, traced: bool) -> Self {
        Self { traced, ..self }
    }

    /// Computes `n!` with this variant.
    ///
    /// Untraced variants never touch `monitor`. Wrapping variants never
    /// return `Err`.
    ///
    /// # Errors
    ///
    /// Returns `OverflowError` from the first overflowing step of a checked
    /// variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use factorium_factorial::variant::Variant;
    /// # use factorium_factorial::monitor::recording::RecordingMonitor;
    /// let variant: Variant = "icl".parse().unwrap();
    /// let mut recorder = RecordingMonitor::new();
    /// assert_eq!(variant.evaluate(5u8, &mut recorder), Ok(120));
    /// assert_eq!(recorder.events().len(), 2);
    /// ```
    #[track_caller]
    pub fn evaluate<T, M>(&self, n: T, monitor: &mut M) -> Result<T, OverflowError<T>>
    where
        T: UnsignedNumeric,
        M: CallMonitor + ?Sized,
    {
        if self.traced {
            self.dispatch(n, monitor)
        } else {
            self.dispatch(n, &mut NoOperationMonitor::new())
        }
    }

    #[track_caller]
    fn dispatch<T, M>(&self, n: T, monitor: &mut M) -> Result<T, OverflowError<T>>
    where
        T: UnsignedNumeric,
        M: CallMonitor + ?Sized,
    {
        match (self.shape, self.arithmetic) {
            (Shape::Recursive, Arithmetic::Wrapping) => {
                Ok(into_ok(recursive_factorial::<T, Wrapping, M>(n, monitor)))
            }
            (Shape::Recursive, Arithmetic::Checked) => {
                recursive_factorial::<T, Checked, M>(n, monitor)
            }
            (Shape::Iterative, Arithmetic::Wrapping) => {
                Ok(into_ok(iterative_factorial::<T, Wrapping, M>(n, monitor)))
            }
            (Shape::Iterative, Arithmetic::Checked) => {
                iterative_factorial::<T, Checked, M>(n, monitor)
            }
        }
    }
}

impl Default for Variant {
    /// Recursive, checked, untraced (`rc`).
    fn default() -> Self {
        Self::new(Shape::Recursive, Arithmetic::Checked, false)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = match self.shape {
            Shape::Recursive => "r",
            Shape::Iterative => "i",
        };
        let checked = match self.arithmetic {
            Arithmetic::Wrapping => "",
            Arithmetic::Checked => "c",
        };
        let traced = if self.traced { "l" } else { "" };
        write!(f, "{}{}{}", shape, checked, traced)
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        let mut chars = code.chars().peekable();
        let shape = match chars.next() {
            Some('r') => Shape::Recursive,
            Some('i') => Shape::Iterative,
            _ => return Err(ParseVariantError(s.to_string())),
        };
        let arithmetic = if chars.next_if_eq(&'c').is_some() {
            Arithmetic::Checked
        } else {
            Arithmetic::Wrapping
        };
        let traced = chars.next_if_eq(&'l').is_some();
        if chars.next().is_some() {
            return Err(ParseVariantError(s.to_string()));
        }
        Ok(Self::new(shape, arithmetic, traced))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        iterative::{iterative_checked, iterative_wrapping},
        limits::largest_representable_input,
        monitor::recording::RecordingMonitor,
        recursive::{recursive_checked, recursive_wrapping},
    };
    use proptest::prelude::*;

    #[test]
    fn test_codes_round_trip_in_order() {
        let codes: Vec<String> = Variant::ALL.iter().map(|v| v.to_string()).collect();
        assert_eq!(codes, ["r", "rl", "rc", "rcl", "i", "il", "ic", "icl"]);
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(
            " RCL ".parse::<Variant>(),
            Ok(Variant::new(Shape::Recursive, Arithmetic::Checked, true))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_codes() {
        for code in ["", "x", "rlc", "rcc", "icl2", "ci"] {
            assert_eq!(
                code.parse::<Variant>(),
                Err(ParseVariantError(code.to_string())),
                "code {:?}",
                code
            );
        }
    }

    #[test]
    fn test_default_is_recursive_checked() {
        assert_eq!(Variant::default().to_string(), "rc");
    }

    #[test]
    fn test_untraced_variants_leave_monitor_untouched() {
        for variant in Variant::ALL.iter().filter(|v| !v.is_traced()) {
            let mut recorder = RecordingMonitor::new();
            let _ = variant.evaluate(4u32, &mut recorder);
            assert!(recorder.is_empty(), "variant {}", variant);
        }
    }

    #[test]
    fn test_traced_variants_report_balanced_events() {
        for variant in Variant::ALL.iter().filter(|v| v.is_traced()) {
            let mut recorder = RecordingMonitor::new();
            let _ = variant.evaluate(6u8, &mut recorder);
            assert!(!recorder.is_empty(), "variant {}", variant);
            assert!(recorder.is_balanced(), "variant {}", variant);
        }
    }

    #[test]
    fn test_all_variants_agree_within_range() {
        fn check<T>()
        where
            T: UnsignedNumeric,
        {
            let limit = largest_representable_input::<T>();
            let mut n = T::ZERO;
            while n <= limit {
                let expected = Variant::default().evaluate(n, &mut NoOperationMonitor::new());
                for variant in Variant::ALL {
                    let mut recorder = RecordingMonitor::new();
                    assert_eq!(variant.evaluate(n, &mut recorder), expected);
                }
                n = n + T::ONE;
            }
        }
        check::<u8>();
        check::<u16>();
        check::<u32>();
        check::<u64>();
        check::<u128>();
        check::<usize>();
    }

    #[test]
    fn test_u8_six_per_variant() {
        let mut monitor = NoOperationMonitor::new();
        for variant in Variant::ALL {
            let result = variant.evaluate(6u8, &mut monitor);
            match (variant.shape(), variant.arithmetic()) {
                (_, Arithmetic::Wrapping) => assert_eq!(result, Ok(208)),
                (Shape::Recursive, Arithmetic::Checked) => {
                    assert_eq!(result, Err(OverflowError::new(6, 120)))
                }
                (Shape::Iterative, Arithmetic::Checked) => {
                    assert_eq!(result, Err(OverflowError::new(120, 3)))
                }
            }
        }
    }

    #[test]
    fn test_with_tracing() {
        let variant = Variant::default().with_tracing(true);
        assert!(variant.is_traced());
        assert_eq!(variant.to_string(), "rcl");
        assert_eq!(variant.with_tracing(false), Variant::default());
    }

    proptest! {
        #[test]
        fn prop_shapes_agree_when_wrapping(n in 0u16..2_000) {
            prop_assert_eq!(recursive_wrapping(n), iterative_wrapping(n));
        }

        #[test]
        fn prop_checked_success_matches_wrapping(n in any::<u8>()) {
            let wrapped = iterative_wrapping(n);
            match (recursive_checked(n), iterative_checked(n)) {
                (Ok(a), Ok(b)) => {
                    prop_assert_eq!(a, wrapped);
                    prop_assert_eq!(b, wrapped);
                }
                (Err(_), Err(_)) => prop_assert!(n > largest_representable_input::<u8>()),
                (a, b) => prop_assert!(false, "shapes disagree: {:?} vs {:?}", a, b),
            }
        }
    }
}
