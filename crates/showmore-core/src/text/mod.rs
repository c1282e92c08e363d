// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text types and utilities
//!
//! All offsets in the public API of this crate are *character* offsets
//! (Unicode scalar values), matching what a host layout engine reports.
//! Token offsets within [`RichText`] are byte offsets, as is usual for
//! formatted text.

mod format;
mod rich;

pub use format::FormattableText;
pub use rich::RichText;

use unicode_segmentation::UnicodeSegmentation;

/// Length of `text` in characters
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of character `index`
///
/// Returns `text.len()` when `index >= char_len(text)`.
pub fn byte_index(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Cut `text` to at most `index` characters
///
/// The cut never splits a grapheme cluster: if character `index` lies
/// within a cluster the cut moves back to the start of that cluster.
pub fn cut_at_char(text: &str, index: usize) -> &str {
    let byte = byte_index(text, index);
    let mut cut = 0;
    for (start, _) in text.grapheme_indices(true) {
        if start > byte {
            break;
        }
        cut = start;
    }
    if byte == text.len() {
        cut = byte;
    }
    &text[..cut]
}
