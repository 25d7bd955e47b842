//! Interface to the external AI collaborator.
//!
//! The collaborator receives source text plus an instruction and returns a
//! full replacement for that text together with a prose explanation. How the
//! request travels (HTTP, IPC, in-process model) is the collaborator's
//! concern; this core treats the replacement as opaque text and performs no
//! syntax validation. Timeouts likewise belong to the transport, not here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::Result;
use crate::selection::Selection;

/// A modification request for the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/")]
pub struct ModifyRequest {
    /// The text to modify: the selected range if one is active, otherwise
    /// the whole document.
    pub source_text: String,
    /// What the user asked for.
    pub instruction: String,
    /// Language tag forwarded verbatim; the core never parses the text.
    pub language: String,
    /// The active selection, if the request covers a sub-range.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Selection>,
    /// The whole document, sent along as context when a selection is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_context: Option<String>,
}

/// A successful collaborator response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/")]
pub struct ModifyResponse {
    /// Replacement text for the requested source.
    pub modified_code: String,
    /// Prose explanation of the change.
    pub explanation: String,
}

/// The external AI-modification service.
///
/// Implementations own transport, authentication and timeouts. Any failure
/// is reported as `RedlineError::Transport` with a human-readable reason.
#[async_trait]
pub trait AiCollaborator: Send + Sync {
    async fn modify(&self, request: ModifyRequest) -> Result<ModifyResponse>;
}
