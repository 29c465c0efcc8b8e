//! Body Transformer - Rewrite article body XML into externally presentable HTML.
//!
//! This crate takes the body of a piece of content as stored internally and
//! produces the body handed to external consumers: content references are
//! renamed and given API URLs, scrollable blocks are flattened, internal-only
//! and rich-media elements are removed, and the result is tidied up as text.
//!
//! # Example
//!
//! ```
//! use body_transformer::transform_body;
//!
//! let body = r#"<body><p>Hello</p><p></p><pull-quote><p>quote</p></pull-quote></body>"#;
//! assert_eq!(transform_body(body).unwrap(), "<body><p>Hello</p></body>");
//! ```
//!
//! # Architecture
//!
//! The transformer is organized into several modules:
//!
//! - [`config`]: Constants and the content type to URL mapping
//! - [`error`]: Error types and Result alias
//! - [`xml`]: Mutable document tree with parsing and serialization
//! - [`registry`]: Rule registry, handlers and the transform engine
//! - [`text`]: Cleanup passes on the serialized body
//! - [`filters`]: Text filter chain for deriving plain text
//! - [`transformer`]: Main transformer service
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod registry;
pub mod text;
pub mod transformer;
pub mod xml;

// Re-export main functions
pub use transformer::{transform_body, BodyTransformer};

// Re-export commonly used items
pub use error::{Result, TransformError};
pub use registry::{create_body_registry, ElementRegistry, PruneRule};
