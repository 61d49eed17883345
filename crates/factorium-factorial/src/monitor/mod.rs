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

//! Call tracing for the factorial variants
//!
//! Defines the `CallMonitor` trait plus lightweight implementations that
//! observe entry into and exit from a factorial call without touching its
//! result.
//!
//! Components
//! - `call_monitor`: the monitoring interface, `CallSite`, and the `CallScope`
//!   guard that pairs every entry with an exit.
//! - `composite`: fan-out monitor.
//! - `log`: `tracing` events in the `>function argument` / `<function` format.
//! - `no_op`: zero-overhead placeholder used by untraced variants.
//! - `recording`: in-memory event log.
//!
//! Notes
//! - Callbacks take `&mut self`; keep handlers fast and non-blocking.
//! - Exit is reported from `Drop`, so it also fires when an overflow
//!   propagates out of the call.

pub mod call_monitor;
pub mod composite;
pub mod log;
pub mod no_op;
pub mod recording;
