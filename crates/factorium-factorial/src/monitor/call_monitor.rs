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

use core::panic::Location;

/// Where and with what a traced function was entered.
///
/// The location is the caller of the outermost `#[track_caller]` function,
/// not a point inside the traced function itself.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CallSite {
    function: &'static str,
    argument: String,
    location: &'static Location<'static>,
}

impl CallSite {
    /// Creates a new `CallSite`.
    #[inline(always)]
    pub fn new(
        function: &'static str,
        argument: String,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            function,
            argument,
            location,
        }
    }

    /// Returns the name of the entered function.
    #[inline(always)]
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Returns the argument rendered as a decimal string.
    #[inline(always)]
    pub fn argument(&self) -> &str {
        &self.argument
    }

    /// Returns the source location of the call.
    #[inline(always)]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl std::fmt::Display for CallSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            ">{} {}\t{} {}|{}",
            self.function,
            self.argument,
            self.location.file(),
            self.location.line(),
            self.location.column()
        )
    }
}

/// Observer for entry into and exit from traced calls.
///
/// Monitors form a side channel only: nothing a monitor does can change the
/// value a traced function returns.
pub trait CallMonitor {
    fn name(&self) -> &str;
    fn on_enter(&mut self, call_site: &CallSite);
    fn on_exit(&mut self, function: &'static str);
}

impl<M> CallMonitor for &mut M
where
    M: CallMonitor + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter(&mut self, call_site: &CallSite) {
        (**self).on_enter(call_site)
    }

    #[inline(always)]
    fn on_exit(&mut self, function: &'static str) {
        (**self).on_exit(function)
    }
}

impl std::fmt::Debug for dyn CallMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CallMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn CallMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CallMonitor({})", self.name())
    }
}

/// Reports entry on construction and exit on drop.
///
/// The scope borrows the monitor for its whole lifetime; nested calls borrow
/// it back through [`CallScope::monitor`], so the exits of a recursive
/// descent are reported innermost first.
pub struct CallScope<'m, M>
where
    M: CallMonitor + ?Sized,
{
    monitor: &'m mut M,
    function: &'static str,
}

impl<'m, M> CallScope<'m, M>
where
    M: CallMonitor + ?Sized,
{
    /// Reports entry into `function` with `argument`, recording the location
    /// of the (outermost `#[track_caller]`) caller.
    #[track_caller]
    #[inline]
    pub fn enter<A>(monitor: &'m mut M, function: &'static str, argument: A) -> Self
    where
        A: std::fmt::Display,
    {
        let call_site = CallSite::new(function, argument.to_string(), Location::caller());
        monitor.on_enter(&call_site);
        Self { monitor, function }
    }

    /// Returns the borrowed monitor for use by nested calls.
    #[inline(always)]
    pub fn monitor(&mut self) -> &mut M {
        self.monitor
    }

    /// Returns the name of the function this scope belongs to.
    #[inline(always)]
    pub fn function(&self) -> &'static str {
        self.function
    }
}

impl<M> Drop for CallScope<'_, M>
where
    M: CallMonitor + ?Sized,
{
    fn drop(&mut self) {
        self.monitor.on_exit(self.function);
    }
}

impl<M> std::fmt::Debug for CallScope<'_, M>
where
    M: CallMonitor + ?Sized,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CallScope({} via {})", self.function, self.monitor.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::recording::{RecordingMonitor, TraceEvent};

    #[test]
    fn test_scope_reports_enter_then_exit() {
        let mut recorder = RecordingMonitor::new();
        {
            let _scope = CallScope::enter(&mut recorder, "f", 3u8);
        }
        let events = recorder.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], TraceEvent::Enter(site) if site.function() == "f" && site.argument() == "3"));
        assert_eq!(events[1], TraceEvent::Exit("f"));
    }

    #[test]
    fn test_scope_records_caller_location() {
        let mut recorder = RecordingMonitor::new();
        let line = line!() + 1;
        let scope = CallScope::enter(&mut recorder, "g", 0u32);
        drop(scope);
        match &recorder.events()[0] {
            TraceEvent::Enter(site) => {
                assert_eq!(site.location().line(), line);
                assert!(site.location().file().ends_with("call_monitor.rs"));
            }
            other => panic!("expected enter event, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_scopes_exit_innermost_first() {
        let mut recorder = RecordingMonitor::new();
        {
            let mut outer = CallScope::enter(&mut recorder, "outer", 2u8);
            let _inner = CallScope::enter(outer.monitor(), "inner", 1u8);
        }
        let exits: Vec<_> = recorder
            .events()
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Exit(name) => Some(*name),
                TraceEvent::Enter(_) => None,
            })
            .collect();
        assert_eq!(exits, vec!["inner", "outer"]);
    }

    #[test]
    fn test_call_site_display_format() {
        let location = Location::caller();
        let site = CallSite::new("factorial", "5".to_string(), location);
        let expected = format!(
            ">factorial 5\t{} {}|{}",
            location.file(),
            location.line(),
            location.column()
        );
        assert_eq!(site.to_string(), expected);
    }

    #[test]
    fn test_dyn_monitor_debug() {
        let recorder = RecordingMonitor::new();
        let monitor: &dyn CallMonitor = &recorder;
        assert_eq!(format!("{:?}", monitor), "CallMonitor(RecordingMonitor)");
    }
}
