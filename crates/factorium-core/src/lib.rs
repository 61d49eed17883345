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

//! # Factorium Core
//!
//! Numeric foundations for the Factorium workspace. This crate provides the
//! integer traits and by-value arithmetic that the factorial variants are
//! built on.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits (`Zero`, `One`) for the unsigned
//!   primitives, by-value wrapping and checked multiplication traits, the
//!   division-based `checked_multiply` primitive with its `OverflowError`,
//!   and the `UnsignedNumeric` bound collecting all of the above.
//!
//! ## Purpose
//!
//! Both multiplication behaviors are exposed explicitly. Wrapping products
//! reduce modulo `2^width` and never fail; checked products report the exact
//! operand pair whose true product does not fit the type.

pub mod num;
