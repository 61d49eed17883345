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

use crate::monitor::call_monitor::{CallMonitor, CallSite};

/// Emits a `tracing` event for every entry and exit.
///
/// Entry events carry the message `>{function} {argument}\t{file} {line}|{column}`
/// and exit events `<{function}`, both at `DEBUG` level under the
/// `factorium::trace` target, together with structured fields for the
/// function, argument and nesting depth.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct LogMonitor {
    depth: usize,
}

impl LogMonitor {
    /// Creates a new `LogMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    /// Returns the number of calls entered but not yet exited.
    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(depth: {})", self.depth)
    }
}

impl CallMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter(&mut self, call_site: &CallSite) {
        self.depth += 1;
        tracing::debug!(
            target: "factorium::trace",
            function = call_site.function(),
            argument = call_site.argument(),
            depth = self.depth,
            "{}",
            call_site
        );
    }

    fn on_exit(&mut self, function: &'static str) {
        tracing::debug!(
            target: "factorium::trace",
            function,
            depth = self.depth,
            "<{}",
            function
        );
        self.depth = self.depth.saturating_sub(1);
    }
}
