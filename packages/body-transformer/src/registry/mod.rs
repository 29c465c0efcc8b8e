//! Element registry system for rule-driven body transformation.
//!
//! Handlers are registered for specific tag names and run in phases;
//! prune rules declare which elements are removed with their subtree.

mod config;
mod core;
mod engine;
mod handler;
pub mod handlers;
mod types;

pub use config::create_body_registry;
pub use core::ElementRegistry;
pub use engine::TransformEngine;
pub use handler::ElementHandler;
pub use types::{AttributeMatch, Phase, PruneRule, TransformStats};
