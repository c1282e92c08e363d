// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The host text view

use crate::layout::LayoutError;
use crate::text::RichText;

/// A host text element: the rendering primitive wrapped by a widget
///
/// The host owns glyph layout, line breaking, drawing and hit-testing. A
/// widget composes a `TextView` and drives it through this trait.
///
/// Line metrics describe the text most recently passed to [`Self::set_text`]
/// as of the last completed layout pass.
pub trait TextView {
    /// Number of laid-out lines
    ///
    /// Fails with [`LayoutError::NotReady`] before the first layout pass.
    fn line_count(&self) -> Result<usize, LayoutError>;

    /// Character offset at which `line` ends
    fn line_end(&self, line: usize) -> Result<usize, LayoutError>;

    /// Display `text`
    fn set_text(&mut self, text: RichText);

    /// Limit display to `lines`, ellipsizing at the end, or remove the limit
    ///
    /// This is render-time truncation, independent of the widget's own.
    fn set_max_lines(&mut self, lines: Option<usize>);
}

impl<V: TextView + ?Sized> TextView for Box<V> {
    fn line_count(&self) -> Result<usize, LayoutError> {
        (**self).line_count()
    }

    fn line_end(&self, line: usize) -> Result<usize, LayoutError> {
        (**self).line_end(line)
    }

    fn set_text(&mut self, text: RichText) {
        (**self).set_text(text)
    }

    fn set_max_lines(&mut self, lines: Option<usize>) {
        (**self).set_max_lines(lines)
    }
}
