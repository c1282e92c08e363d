// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! showmore prelude
//!
//! This prelude may be imported as follows:
//! ```
//! use showmore::prelude::*;
//! ```

#[doc(no_inline)]
pub use showmore_core::prelude::*;
#[doc(no_inline)]
pub use showmore_widgets::ExpandableLabel;
