//! Line-range selections over a document.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{RedlineError, Result};

/// A contiguous line range of the original document, 1-indexed inclusive.
///
/// Invariant once validated: `1 <= start_line <= end_line <= line_count`.
/// Out-of-range selections are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "generated/")]
pub struct Selection {
    pub start_line: usize,
    pub end_line: usize,
}

impl Selection {
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
        }
    }

    /// Check this selection against a document of `line_count` lines.
    pub fn validate(&self, line_count: usize) -> Result<()> {
        if self.start_line == 0 {
            return Err(RedlineError::Input(
                "selection start_line must be at least 1".to_string(),
            ));
        }
        if self.start_line > self.end_line {
            return Err(RedlineError::Input(format!(
                "selection start_line {} is after end_line {}",
                self.start_line, self.end_line
            )));
        }
        if self.end_line > line_count {
            return Err(RedlineError::Input(format!(
                "selection end_line {} exceeds document line count {}",
                self.end_line, line_count
            )));
        }
        Ok(())
    }

    /// Number of lines covered by the selection.
    pub fn line_span(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// Whether the selection covers the entire document.
    pub fn covers(&self, line_count: usize) -> bool {
        self.start_line == 1 && self.end_line == line_count
    }
}
