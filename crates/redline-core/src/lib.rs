//! Foundation types for the Redline diff engine.
//!
//! This crate provides the types shared by every other redline crate:
//! documents, selections, the error taxonomy, and the interface to the
//! external AI collaborator that produces replacement text.
//!
//! # Architecture
//!
//! redline-core sits at the bottom of the dependency hierarchy:
//! - Layer 1 (Foundation): redline-core ← YOU ARE HERE
//! - Layer 2 (Infrastructure): redline-diff, redline-settings
//! - Layer 3 (Application): redline-session
//!
//! It has ZERO internal crate dependencies and only depends on external
//! libraries.

pub mod collaborator;
pub mod document;
pub mod error;
pub mod selection;

// Re-exports
pub use collaborator::{AiCollaborator, ModifyRequest, ModifyResponse};
pub use document::{normalize_line_endings, Document};
pub use error::{RedlineError, Result};
pub use selection::Selection;
