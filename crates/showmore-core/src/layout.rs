// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Line metrics and layout notification
//!
//! Line breaking is the host's job. After a layout pass the host knows how
//! many lines the text occupies and where each line ends; [`LineBreaks`]
//! stores exactly that.

use thiserror::Error;

/// Line metrics query errors
///
/// These indicate a usage or timing error, not a recoverable condition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Line metrics were queried before a layout pass completed
    #[error("text layout queried before a layout pass completed")]
    NotReady,
    /// A line beyond the end of the layout was queried
    #[error("line {line} out of range (layout has {count} lines)")]
    LineOutOfRange { line: usize, count: usize },
}

/// Line end offsets of laid-out text
///
/// Each entry is the character offset at which a line ends (exclusive).
/// Offsets must be non-decreasing; the last equals the text length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineBreaks {
    ends: Vec<usize>,
}

impl LineBreaks {
    /// Construct from line end offsets
    pub fn new(ends: impl Into<Vec<usize>>) -> Self {
        let ends = ends.into();
        debug_assert!(ends.windows(2).all(|w| w[0] <= w[1]));
        LineBreaks { ends }
    }

    /// Number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.ends.len()
    }

    /// Character offset at which `line` ends
    pub fn line_end(&self, line: usize) -> Result<usize, LayoutError> {
        self.ends
            .get(line)
            .copied()
            .ok_or(LayoutError::LineOutOfRange {
                line,
                count: self.ends.len(),
            })
    }

    /// Iterate over line end offsets
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.ends.iter().copied()
    }
}

/// A one-shot subscription to layout notifications
///
/// The host notifies the widget after every layout pass; the widget only
/// acts on a notification while subscribed. A subscription covers exactly
/// one pass: handling it must end with [`Self::complete`], which detaches.
/// Subscribing again (on the next content or size change) is idempotent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutListener {
    subscribed: bool,
    passes: u64,
}

impl LayoutListener {
    /// Construct, not subscribed
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to the next layout pass
    ///
    /// Returns `true` if the listener was not already subscribed.
    pub fn subscribe(&mut self) -> bool {
        let newly = !self.subscribed;
        self.subscribed = true;
        newly
    }

    /// True while waiting for a layout pass
    #[inline]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Cancel the subscription without counting a pass
    #[inline]
    pub fn cancel(&mut self) {
        self.subscribed = false;
    }

    /// Detach after handling a pass
    pub fn complete(&mut self) {
        debug_assert!(self.subscribed);
        self.subscribed = false;
        self.passes += 1;
    }

    /// Number of layout passes handled
    #[inline]
    pub fn passes(&self) -> u64 {
        self.passes
    }
}
