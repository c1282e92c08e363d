// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Truncation
//!
//! Two steps: [`calculate_truncation_index`] finds where the source text
//! exceeds its budget (from line metrics or directly from the character
//! budget), then [`trimmed_text`] derives the displayed text from the
//! source, the configuration, the toggle state and that index.

use showmore_core::color::Rgba8Srgb;
use showmore_core::config::{LabelConfig, TrimMode};
use showmore_core::text::{RichText, char_len, cut_at_char};
use showmore_core::{LayoutError, TextView};

/// Appended after truncated text, before the trailer
pub const ELLIPSIS: &str = "...";

/// Characters reserved in line mode in addition to ellipsis and trailer
const SEPARATOR_LEN: usize = 1;

/// Truncation index for modes which do not need line metrics
///
/// Returns `None` for [`TrimMode::Lines`].
pub fn length_truncation_index(mode: TrimMode, source: &str) -> Option<usize> {
    match mode {
        TrimMode::Length(n) if char_len(source) > n => Some(n),
        _ => None,
    }
}

/// Compute the character offset at which `source` must be cut
///
/// In line mode `view` must have completed a layout pass over `source`;
/// querying it earlier is an error which is passed to the caller.
///
/// Returns `None` when the source fits its budget (or there is none).
pub fn calculate_truncation_index<V: TextView + ?Sized>(
    mode: TrimMode,
    source: &str,
    view: &V,
) -> Result<Option<usize>, LayoutError> {
    let TrimMode::Lines(max_lines) = mode else {
        return Ok(length_truncation_index(mode, source));
    };
    if source.is_empty() {
        return Ok(None);
    }

    let count = view.line_count()?;
    if max_lines == 0 {
        view.line_end(0).map(Some)
    } else if max_lines < count {
        view.line_end(max_lines - 1).map(Some)
    } else {
        Ok(None)
    }
}

/// Derive the displayed text
///
/// This is a pure function of its inputs:
///
/// -   Without truncation (`mode` is `None` or `truncation` is `None`) the
///     result is `source`, with no link.
/// -   Collapsed: a prefix of `source`, then [`ELLIPSIS`], then the collapsed
///     trailer as link. In line mode the prefix ends early enough to fit the
///     ellipsis, trailer and a separator within the truncated lines; in
///     length mode the prefix is exactly `truncation` characters.
/// -   Expanded: `source`, then [`ELLIPSIS`] and the expanded trailer as
///     link; in line mode only if [`LabelConfig::show_expanded_trailer`] is
///     set, otherwise just `source`.
pub fn trimmed_text(
    source: &str,
    config: &LabelConfig,
    collapsed: bool,
    truncation: Option<usize>,
) -> RichText {
    let Some(index) = truncation else {
        return RichText::plain(source);
    };

    match config.mode() {
        TrimMode::None => RichText::plain(source),
        TrimMode::Lines(_) if collapsed => {
            let reserve = ELLIPSIS.len() + char_len(&config.collapsed_text) + SEPARATOR_LEN;
            let cut = index.saturating_sub(reserve);
            with_trailer(
                cut_at_char(source, cut),
                &config.collapsed_text,
                config.trailer_color,
            )
        }
        TrimMode::Length(_) if collapsed => with_trailer(
            cut_at_char(source, index),
            &config.collapsed_text,
            config.trailer_color,
        ),
        TrimMode::Lines(_) if !config.show_expanded_trailer => RichText::plain(source),
        TrimMode::Lines(_) | TrimMode::Length(_) => with_trailer(
            source,
            &config.expanded_text,
            config.expanded_trailer_color,
        ),
    }
}

fn with_trailer(prefix: &str, trailer: &str, color: Rgba8Srgb) -> RichText {
    let mut text = RichText::plain(prefix);
    text.push_str(ELLIPSIS);
    text.push_link(trailer, color);
    text
}
