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

//! Monitoring combinators for traced calls
//!
//! Provides `CompositeMonitor`, a fan-out monitor that forwards every event to
//! its children in insertion order. This lets you log and record the same
//! run without coupling either to the factorial code.

use crate::monitor::call_monitor::{CallMonitor, CallSite};

/// A call monitor that aggregates multiple monitors and forwards events to all
/// of them.
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn CallMonitor + 'a>>,
}

impl Default for CompositeMonitor<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeMonitor<'a> {
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: CallMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn CallMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn CallMonitor + 'a>] {
        &self.monitors
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn CallMonitor + 'a>> for CompositeMonitor<'a> {
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = Box<dyn CallMonitor + 'a>>>(iter: I) -> Self {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

impl CallMonitor for CompositeMonitor<'_> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter(&mut self, call_site: &CallSite) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter(call_site);
        }
    }

    fn on_exit(&mut self, function: &'static str) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit(function);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{log::LogMonitor, recording::RecordingMonitor};
    use core::panic::Location;

    #[test]
    fn test_forwards_to_all_children() {
        let mut first = RecordingMonitor::new();
        let mut second = RecordingMonitor::new();
        {
            let mut composite = CompositeMonitor::with_capacity(2);
            composite.add_monitor(&mut first);
            composite.add_monitor(&mut second);
            assert_eq!(composite.len(), 2);

            let site = CallSite::new("f", "1".to_string(), Location::caller());
            composite.on_enter(&site);
            composite.on_exit("f");
        }
        assert_eq!(first, second);
        assert_eq!(first.events().len(), 2);
    }

    #[test]
    fn test_from_iter_and_debug() {
        let boxed: Vec<Box<dyn CallMonitor>> =
            vec![Box::new(LogMonitor::new()), Box::new(RecordingMonitor::new())];
        let composite: CompositeMonitor<'_> = boxed.into_iter().collect();
        assert_eq!(
            format!("{:?}", composite),
            r#"["LogMonitor", "RecordingMonitor"]"#
        );
    }

    #[test]
    fn test_empty_composite_is_inert() {
        let mut composite = CompositeMonitor::default();
        assert!(composite.is_empty());
        composite.on_exit("f");
        assert!(composite.monitors().is_empty());
    }
}
