// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Input events delivered by the host

use crate::Action;

pub use IsUsed::{Unused, Used};

/// Event context
///
/// Collects the [`Action`]s resulting from event handling. Widgets merge
/// actions with `*cx |= action;`; the host takes the result after dispatch.
#[derive(Debug, Default)]
pub struct EventCx {
    action: Action,
}

impl EventCx {
    /// Construct with no pending action
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the pending action
    #[inline]
    pub fn action(&self) -> Action {
        self.action
    }

    /// Take the pending action, leaving none
    #[inline]
    pub fn take_action(&mut self) -> Action {
        std::mem::take(&mut self.action)
    }
}

impl std::ops::BitOrAssign<Action> for EventCx {
    #[inline]
    fn bitor_assign(&mut self, action: Action) {
        self.action |= action;
    }
}

/// A generic "command"
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Activate the focussed element (e.g. via <kbd>Enter</kbd> or <kbd>Space</kbd>)
    Activate,
}

impl Command {
    /// True for [`Command::Activate`]
    #[inline]
    pub fn is_activate(self) -> bool {
        self == Command::Activate
    }
}

/// Events addressed to a widget
///
/// Hit-testing is performed by the host: a click is reported as the index of
/// the character under the pointer within the currently displayed text.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// A completed click or tap on character `index` of the displayed text
    Click { index: usize },
    /// Command input
    Command(Command),
}

/// Result of [`Event`] handling
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IsUsed {
    /// Event was used
    Used,
    /// Event was not used; the host may pass it elsewhere
    Unused,
}

impl IsUsed {
    /// True if used
    #[inline]
    pub fn is_used(self) -> bool {
        self == Used
    }
}

impl From<bool> for IsUsed {
    fn from(used: bool) -> Self {
        if used { Used } else { Unused }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn event_cx_collects_actions() {
        let mut cx = EventCx::new();
        cx |= Action::REDRAW;
        cx |= Action::RESIZE;
        assert_eq!(cx.action(), Action::REDRAW | Action::RESIZE);
        assert_eq!(cx.take_action(), Action::REDRAW | Action::RESIZE);
        assert!(cx.action().is_empty());
    }

    #[test]
    fn is_used() {
        assert!(IsUsed::from(true).is_used());
        assert_eq!(IsUsed::from(false), Unused);
        assert!(Command::Activate.is_activate());
    }
}
