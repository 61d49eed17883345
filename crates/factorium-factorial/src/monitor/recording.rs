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

/// A single traced event.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum TraceEvent {
    Enter(CallSite),
    Exit(&'static str),
}

impl std::fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceEvent::Enter(call_site) => write!(f, "{}", call_site),
            TraceEvent::Exit(function) => write!(f, "<{}", function),
        }
    }
}

/// Stores every event in arrival order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RecordingMonitor {
    events: Vec<TraceEvent>,
}

impl RecordingMonitor {
    /// Creates a new, empty `RecordingMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events.
    #[inline(always)]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Consumes the monitor and returns the recorded events.
    #[inline(always)]
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }

    /// Returns the number of `Enter` events.
    pub fn entries(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TraceEvent::Enter(_)))
            .count()
    }

    /// Returns `true` if every exit matches the most recent unmatched entry
    /// and no entry is left open.
    pub fn is_balanced(&self) -> bool {
        let mut open: Vec<&'static str> = Vec::new();
        for event in &self.events {
            match event {
                TraceEvent::Enter(call_site) => open.push(call_site.function()),
                TraceEvent::Exit(function) => {
                    if open.pop() != Some(*function) {
                        return false;
                    }
                }
            }
        }
        open.is_empty()
    }

    /// Removes all recorded events.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Returns `true` if nothing has been recorded.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl CallMonitor for RecordingMonitor {
    fn name(&self) -> &str {
        "RecordingMonitor"
    }

    fn on_enter(&mut self, call_site: &CallSite) {
        self.events.push(TraceEvent::Enter(call_site.clone()));
    }

    fn on_exit(&mut self, function: &'static str) {
        self.events.push(TraceEvent::Exit(function));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::panic::Location;

    fn site(function: &'static str, argument: &str) -> CallSite {
        CallSite::new(function, argument.to_string(), Location::caller())
    }

    #[test]
    fn test_records_in_order() {
        let mut monitor = RecordingMonitor::new();
        monitor.on_enter(&site("f", "2"));
        monitor.on_exit("f");
        assert_eq!(monitor.events().len(), 2);
        assert_eq!(monitor.entries(), 1);
        assert_eq!(monitor.events()[1].to_string(), "<f");
    }

    #[test]
    fn test_balanced_nested() {
        let mut monitor = RecordingMonitor::new();
        monitor.on_enter(&site("f", "2"));
        monitor.on_enter(&site("f", "1"));
        monitor.on_exit("f");
        monitor.on_exit("f");
        assert!(monitor.is_balanced());
    }

    #[test]
    fn test_unbalanced_when_entry_left_open() {
        let mut monitor = RecordingMonitor::new();
        monitor.on_enter(&site("f", "2"));
        assert!(!monitor.is_balanced());
    }

    #[test]
    fn test_unbalanced_when_exit_mismatches() {
        let mut monitor = RecordingMonitor::new();
        monitor.on_enter(&site("f", "2"));
        monitor.on_exit("g");
        assert!(!monitor.is_balanced());
    }

    #[test]
    fn test_clear() {
        let mut monitor = RecordingMonitor::new();
        monitor.on_exit("f");
        monitor.clear();
        assert!(monitor.is_empty());
        assert!(monitor.is_balanced());
    }
}
