//! Error taxonomy for the Redline core.
//!
//! Three kinds of failure cross the API boundary: malformed input (reported
//! synchronously, never retried automatically), transport failures from the
//! external collaborator (retryable by explicit user action), and implausibly
//! short collaborator responses (also user-retryable, but distinct from a
//! transport failure). Diff, merge and splice functions are total over
//! well-formed text and never produce errors of their own.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RedlineError {
    /// Malformed selection or empty required text. Never auto-retried.
    #[error("invalid input: {0}")]
    Input(String),

    /// The external collaborator call failed or was cancelled.
    #[error("transport error: {0}")]
    Transport(String),

    /// The collaborator response is shorter than the plausibility threshold.
    #[error("implausible response: {len} chars is below the {min} char minimum")]
    ImplausibleResponse { len: usize, min: usize },

    /// An operation was invoked in a workflow state that does not allow it.
    #[error("precondition violated: {0}")]
    Precondition(String),
}

// Implement Serialize so errors can cross an IPC boundary as plain strings.
impl Serialize for RedlineError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RedlineError>;
