//! Element handlers for article body XML.

mod content;
mod scrollable;

pub use content::*;
pub use scrollable::*;
