// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Prelude
//!
//! Items commonly needed by hosts and widget implementations.

#[doc(no_inline)]
pub use crate::cast::{Cast, Conv};
#[doc(no_inline)]
pub use crate::color::Rgba8Srgb;
#[doc(no_inline)]
pub use crate::config::{LabelAttributes, LabelConfig, TrimMode};
#[doc(no_inline)]
pub use crate::event::{Command, Event, EventCx, IsUsed, Unused, Used};
#[doc(no_inline)]
pub use crate::layout::{LayoutError, LayoutListener, LineBreaks};
#[doc(no_inline)]
pub use crate::text::{FormattableText, RichText};
#[doc(no_inline)]
pub use crate::{Action, TextView};
