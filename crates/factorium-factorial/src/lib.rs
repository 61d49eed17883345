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

//! Factorium factorial: one computation, eight variants
//!
//! Computes `n!` for any fixed-width unsigned integer, with the two optional
//! behaviors layered on independently: overflow-checked multiplication and
//! call tracing.
//!
//! Core flow
//! - Pick a shape: `recursive` (multiply on the unwind, operands
//!   `(n, (n - 1)!)`) or `iterative` (multiply into an accumulator, operands
//!   `(accumulator, n)`).
//! - Pick a `product::Multiplication` policy: `Wrapping` (mod `2^width`,
//!   never fails) or `Checked` (stops at the first overflowing step).
//! - Pass a `monitor::call_monitor::CallMonitor` to trace, or use the
//!   convenience functions which trace nothing.
//! - Or pick a whole combination by code through `variant::Variant`.
//!
//! Guarantees
//! - Both shapes agree on every result; checked runs fail on the first
//!   overflowing step, though the reported operand pair differs by shape.
//! - Tracing never changes a result, and every entry is paired with an exit,
//!   including when an overflow propagates.
//! - No state is shared between calls.
//!
//! Module map
//! - `iterative`: accumulator countdown.
//! - `limits`: largest input whose factorial fits a type.
//! - `monitor`: call monitors (log, recording, composite, no-op).
//! - `product`: multiplication policies.
//! - `recursive`: call-stack descent.
//! - `variant`: named combinations of shape, arithmetic and tracing.

pub mod iterative;
pub mod limits;
pub mod monitor;
pub mod product;
pub mod recursive;
pub mod variant;
