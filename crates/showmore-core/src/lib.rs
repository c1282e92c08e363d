// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! showmore core
//!
//! Host-independent building blocks of the expandable label:
//!
//! -   [`Action`]: what the host must do after a widget update
//! -   [`color`]: sRGB colours as used for trailer text
//! -   [`text`]: [`RichText`](text::RichText), plain text plus colour tokens
//!     and a clickable link range
//! -   [`TextView`]: the host rendering primitive (measure, render)
//! -   [`layout`]: line metrics and the one-shot [`LayoutListener`](layout::LayoutListener)
//! -   [`event`]: input events delivered by the host
//! -   [`config`]: attribute resolution and config file formats

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[macro_use]
extern crate bitflags;

pub extern crate easy_cast as cast;

mod action;
mod view;

pub mod color;
pub mod config;
pub mod event;
pub mod layout;
pub mod prelude;
pub mod text;

pub use action::Action;
pub use layout::LayoutError;
pub use view::TextView;
