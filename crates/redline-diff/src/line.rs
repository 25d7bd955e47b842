//! Line-level diffing between an original and a replacement document.

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffTag};
use ts_rs::TS;

use redline_core::Document;

/// One group of contiguous lines in an edit script.
///
/// Groups are non-empty and appear in document order. Concatenating the
/// lines of all `Equal` and `Delete` groups reconstructs the original
/// document exactly; `Equal` and `Insert` reconstruct the replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "generated/")]
pub enum DiffOp {
    Equal(Vec<String>),
    Delete(Vec<String>),
    Insert(Vec<String>),
}

impl DiffOp {
    pub fn lines(&self) -> &[String] {
        match self {
            DiffOp::Equal(lines) | DiffOp::Delete(lines) | DiffOp::Insert(lines) => lines,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines().len()
    }
}

/// Compute the ordered line-level edit script between two line sequences.
///
/// Myers diff with common prefix/suffix trimming, so shared leading and
/// trailing lines always land in `Equal` groups. Replacements expand into a
/// `Delete` group immediately followed by an `Insert` group. No two adjacent
/// groups share a tag, and every group is non-empty. Total over any input,
/// including empty sequences and identical sequences.
pub fn diff_lines(original: &[String], modified: &[String]) -> Vec<DiffOp> {
    let raw = capture_diff_slices(Algorithm::Myers, original, modified);
    let mut ops = Vec::with_capacity(raw.len());
    for op in raw {
        match op.tag() {
            DiffTag::Equal => ops.push(DiffOp::Equal(original[op.old_range()].to_vec())),
            DiffTag::Delete => ops.push(DiffOp::Delete(original[op.old_range()].to_vec())),
            DiffTag::Insert => ops.push(DiffOp::Insert(modified[op.new_range()].to_vec())),
            DiffTag::Replace => {
                ops.push(DiffOp::Delete(original[op.old_range()].to_vec()));
                ops.push(DiffOp::Insert(modified[op.new_range()].to_vec()));
            }
        }
    }
    ops
}

/// Diff two pieces of text, normalizing line endings and splitting first.
pub fn diff_text(original: &str, modified: &str) -> Vec<DiffOp> {
    let original = Document::from_text(original);
    let modified = Document::from_text(modified);
    diff_lines(original.lines(), modified.lines())
}
