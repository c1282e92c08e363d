// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! showmore widget library
//!
//! -   [`ExpandableLabel`]: a text label truncated to a line or character
//!     budget, followed by a clickable "Show more" / "Show less" trailer
//! -   [`trim`]: the truncation functions used by [`ExpandableLabel`]

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod expandable_label;
pub mod trim;

pub use expandable_label::ExpandableLabel;
