// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! showmore: an expandable text label
//!
//! This, the main crate, is merely a wrapper over other crates:
//!
//! -   [`showmore_core`] provides host-independent types: rich text, the
//!     host [`TextView`] trait, layout notification, events and configuration
//! -   [`showmore_widgets`] provides the [`ExpandableLabel`](widgets::ExpandableLabel) widget
//!
//! All items from [`showmore_core`] are directly re-exported from this crate
//! (e.g. [`showmore::text::RichText`](crate::text::RichText)); the widget
//! crate is re-exported as a sub-module (`showmore::widgets`).
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is re-exported as `showmore::cast`.
//!
//! ## Usage
//!
//! The host wraps its text element in a type implementing [`TextView`],
//! then drives an [`ExpandableLabel`](widgets::ExpandableLabel):
//!
//! ```
//! use showmore::prelude::*;
//! use showmore::widgets::ExpandableLabel;
//!
//! #[derive(Default)]
//! struct Host {
//!     lines: Option<LineBreaks>,
//!     shown: RichText,
//! }
//!
//! impl TextView for Host {
//!     fn line_count(&self) -> Result<usize, LayoutError> {
//!         self.lines.as_ref().map(|l| l.line_count()).ok_or(LayoutError::NotReady)
//!     }
//!     fn line_end(&self, line: usize) -> Result<usize, LayoutError> {
//!         self.lines.as_ref().ok_or(LayoutError::NotReady)?.line_end(line)
//!     }
//!     fn set_text(&mut self, text: RichText) {
//!         self.shown = text;
//!     }
//!     fn set_max_lines(&mut self, _: Option<usize>) {}
//! }
//!
//! let attrs = LabelAttributes::from_pairs([("max_length", "10"), ("collapsed_text", "More")]);
//! let label = ExpandableLabel::from_attributes(Host::default(), &attrs)
//!     .with_text("Hello world, this is long");
//! assert_eq!(label.view().shown.as_str(), "Hello worl...More");
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod prelude;

pub use showmore_core::*;

pub extern crate showmore_widgets as widgets;
