// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Rich text: plain text, colour tokens and a clickable link

use super::format::FormattableText;
use crate::cast::Conv;
use crate::color::Rgba8Srgb;
use smallvec::SmallVec;
use std::ops::Range;

/// Text with coloured runs and (at most) one clickable link
///
/// This is the value pushed to a [`TextView`](crate::TextView) for display.
/// The link is the region the host hit-tests: clicks inside it are reported
/// back to the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RichText {
    text: String,
    colors: SmallVec<[(u32, Option<Rgba8Srgb>); 2]>,
    link: Option<Range<u32>>,
}

impl RichText {
    /// Construct from plain text (no colours, no link)
    pub fn plain(text: impl Into<String>) -> Self {
        RichText {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Append plain text using the default colour
    pub fn push_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if let Some((_, Some(_))) = self.colors.last() {
            self.colors.push((self.end(), None));
        }
        self.text.push_str(s);
    }

    /// Append `s` as the clickable link, drawn with `color`
    ///
    /// Any previous link is replaced.
    pub fn push_link(&mut self, s: &str, color: Rgba8Srgb) {
        let start = self.end();
        self.text.push_str(s);
        let end = self.end();
        if start == end {
            return;
        }
        if let Some(last) = self.colors.last_mut().filter(|last| last.0 == start) {
            last.1 = Some(color);
        } else {
            self.colors.push((start, Some(color)));
        }
        self.link = Some(start..end);
    }

    fn end(&self) -> u32 {
        u32::conv(self.text.len())
    }

    /// Length in characters
    #[inline]
    pub fn char_len(&self) -> usize {
        super::char_len(&self.text)
    }

    /// Get the link as a byte range
    #[inline]
    pub fn link(&self) -> Option<Range<usize>> {
        self.link
            .as_ref()
            .map(|r| usize::conv(r.start)..usize::conv(r.end))
    }

    /// Get the link text
    pub fn link_str(&self) -> Option<&str> {
        self.link().map(|r| &self.text[r])
    }

    /// True if the text has a link
    #[inline]
    pub fn has_link(&self) -> bool {
        self.link.is_some()
    }

    /// Hit-test: is character `index` within the link?
    pub fn is_link_at(&self, index: usize) -> bool {
        match self.link() {
            Some(range) => {
                let start = super::char_len(&self.text[..range.start]);
                let len = super::char_len(&self.text[range]);
                (start..start + len).contains(&index)
            }
            None => false,
        }
    }

    /// Take the plain text
    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl FormattableText for RichText {
    #[inline]
    fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    fn color_tokens(&self) -> &[(u32, Option<Rgba8Srgb>)] {
        &self.colors
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        RichText::plain(text)
    }
}

impl std::fmt::Display for RichText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
