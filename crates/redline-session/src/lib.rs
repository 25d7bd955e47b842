//! Edit-cycle orchestration for Redline.
//!
//! An [`EditSession`] owns the live document, the active selection and the
//! workflow state for one editing surface, and sequences the pure diff
//! functions around calls to the external AI collaborator. All UI-facing
//! mutable state lives in explicit session fields; there are no hidden
//! globals, so the diff pipeline stays pure by construction.
//!
//! # Architecture
//!
//! This is a **Layer 3 (Application)** crate:
//! - Depends on: redline-core, redline-diff, redline-settings
//! - Used by: embedding applications (GUI shells, adapters)
//!
//! # Request lifecycle
//!
//! ```text
//! Idle ──submit──▶ Requesting ──accepted──▶ DiffReady ──integrate──▶ Integrated
//!                      │                        │
//!                      │ short/failed           └──discard──▶ Idle
//!                      ▼
//!                  Failed(reason) ──retry──▶ Requesting
//! ```
//!
//! At most one request is outstanding per session. Every submission is
//! tagged with a monotonically increasing generation; a response whose
//! generation no longer matches is discarded without touching state, which
//! makes abandoned requests harmless no matter when their response lands.

pub mod editor;
pub mod session;

// Re-exports
pub use editor::{BufferEditor, EditorSurface};
pub use session::{DiffArtifacts, EditSession, PendingSubmission, WorkflowState};
