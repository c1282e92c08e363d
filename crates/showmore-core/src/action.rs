// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Action enum

bitflags! {
    /// Action required after processing
    ///
    /// This type is returned by widget methods which modify the widget. Two
    /// `Action` values may be combined via bit-or (`a | b`).
    ///
    /// The widget has already pushed any new text to its [`TextView`]; the
    /// action tells the host what to schedule as a consequence.
    ///
    /// [`TextView`]: crate::TextView
    #[must_use]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Action: u32 {
        /// The displayed text changed and must be redrawn
        const REDRAW = 1 << 0;
        /// A new layout pass is required
        ///
        /// The host should lay out the view's text, then call the widget's
        /// `on_layout` method. Implies redraw.
        const RESIZE = 1 << 9;
    }
}

impl Action {
    /// True if the host needs to run a layout pass
    #[inline]
    pub fn needs_layout(self) -> bool {
        self.contains(Action::RESIZE)
    }
}
