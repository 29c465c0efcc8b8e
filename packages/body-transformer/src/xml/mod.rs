//! Document tree: loading, navigation, mutation and serialization.

mod parse;
mod serialize;
mod tree;

pub use parse::parse_document;
pub use serialize::write_document;
pub use tree::{Attribute, Document, Element, NodeId, NodeKind};
