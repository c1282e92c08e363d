// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration
//!
//! A label is configured from a set of raw, possibly absent, attributes
//! ([`LabelAttributes`]) which resolve to a [`LabelConfig`]. Attributes may
//! be set one at a time from string values or (with feature `serde`) read
//! from a file in any supported [`Format`].

mod format;
mod label;

pub use format::{Error, Format};
pub use label::{LabelAttributes, LabelConfig, TrimMode};
