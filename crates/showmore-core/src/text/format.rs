// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Formatted text traits

use crate::color::Rgba8Srgb;

/// Text, optionally with formatting data
pub trait FormattableText: std::cmp::PartialEq {
    /// Access whole text as contiguous `str`
    fn as_str(&self) -> &str;

    /// Return the sequence of color tokens
    ///
    /// Use `&[]` to use the default color everywhere, or use a sequence such
    /// that `tokens[i].0` values are strictly increasing byte offsets. A
    /// glyph for index `j` in the source text will use the color
    /// `tokens[i].1` where `i` is the largest value such that
    /// `tokens[i].0 <= j`, or the default color if no such `i` exists. A
    /// token color of `None` also selects the default.
    ///
    /// The default implementation returns `&[]`.
    #[inline]
    fn color_tokens(&self) -> &[(u32, Option<Rgba8Srgb>)] {
        &[]
    }
}

impl FormattableText for str {
    #[inline]
    fn as_str(&self) -> &str {
        self
    }
}

impl FormattableText for String {
    #[inline]
    fn as_str(&self) -> &str {
        self
    }
}

impl<F: FormattableText + ?Sized> FormattableText for &F {
    fn as_str(&self) -> &str {
        F::as_str(self)
    }

    fn color_tokens(&self) -> &[(u32, Option<Rgba8Srgb>)] {
        F::color_tokens(self)
    }
}
